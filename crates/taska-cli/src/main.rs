//! # taska
//!
//! Command line tools for Taska: export the OpenAPI document and create a
//! project through the creation form.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use taska_client::{CreateProjectForm, FormView, HttpProjectsApi, ProjectsApi, SelectedFile};
use taska_core::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "taska", version, about = "Taska command line tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the OpenAPI document as JSON
    Openapi {
        /// Write the document to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Fill in the project creation form and submit it
    CreateProject(CreateProjectArgs),
}

#[derive(Args, Debug)]
struct CreateProjectArgs {
    /// Customer full name
    #[arg(long, default_value = "")]
    fio: String,

    /// Contact phone number
    #[arg(long, default_value = "")]
    phone: String,

    /// Project title
    #[arg(long, default_value = "")]
    title: String,

    /// Project description
    #[arg(long, default_value = "")]
    description: String,

    /// Technical brief to attach
    #[arg(long)]
    file: Option<PathBuf>,

    /// API base URL
    #[arg(long, env = "TASKA_API_URL")]
    api_url: Option<String>,

    /// Send to the production deployment
    #[arg(long, conflicts_with = "api_url")]
    production: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Commands::Openapi { output } => export_openapi(output).await,
        Commands::CreateProject(args) => create_project(args).await,
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn export_openapi(output: Option<PathBuf>) -> Result<()> {
    let json = taska_api::openapi_json().context("Failed to render the OpenAPI document")?;

    match output {
        Some(path) => {
            tokio::fs::write(&path, json)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            debug!(path = %path.display(), "OpenAPI document written");
        }
        None => println!("{}", json),
    }
    Ok(())
}

async fn create_project(args: CreateProjectArgs) -> Result<()> {
    let config = AppConfig::from_env()?;
    let mut stdout = std::io::stdout();
    submit_project(args, &config, &mut stdout).await
}

/// Fill the form from `args`, submit it, and print the outcome to `out`
async fn submit_project(
    args: CreateProjectArgs,
    config: &AppConfig,
    out: &mut impl Write,
) -> Result<()> {
    let base_url = resolve_base_url(&args, config);
    let api = HttpProjectsApi::with_timeout(&base_url, config.request_timeout())?;

    let mut form = CreateProjectForm::new();
    form.set_fio(args.fio);
    form.set_phone(args.phone);
    form.set_title(args.title);
    form.set_description(args.description);

    if let Some(path) = &args.file {
        let file = SelectedFile::from_path(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        form.select_file(file);
    }
    if let Some(display) = form.file_display() {
        writeln!(out, "{} ({})", display.name, display.label)?;
    }

    if let Some(payload) = form.begin_submit() {
        debug!(%base_url, "Submitting project");
        eprintln!("{}", form.submit_label());
        let result = api.create_project(payload).await;
        form.finish_submit(result);
    }

    match form.view() {
        FormView::Success(screen) => {
            writeln!(out, "{}", screen.title)?;
            writeln!(out, "{}", screen.subtitle)?;
            Ok(())
        }
        FormView::Editing => match form.error() {
            Some(message) => bail!("{}", message),
            None => bail!("Project was not submitted"),
        },
    }
}

fn resolve_base_url(args: &CreateProjectArgs, config: &AppConfig) -> String {
    if let Some(url) = &args.api_url {
        url.clone()
    } else if args.production {
        config.api.production_url.clone()
    } else {
        config.api.client_base_url.clone()
    }
}
