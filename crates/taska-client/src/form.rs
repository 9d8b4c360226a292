//! Project creation form
//!
//! Holds what the user typed, the selected file and the submission state.
//! Fields are free text and are not validated here; the API decides what it
//! accepts.

use taska_models::Project;
use tracing::{debug, info};

use crate::api::{CreateProjectPayload, ProjectsApi};
use crate::error::ClientError;
use crate::file::{FileDisplay, SelectedFile};
use crate::screen::SuccessScreen;

/// Shown when a failure carries no message of its own
pub const FALLBACK_ERROR: &str = "Ошибка создания проекта";
pub const SUBMIT_LABEL: &str = "Отправить";
pub const SUBMITTING_LABEL: &str = "Отправка...";

/// What the form currently renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormView {
    Editing,
    Success(SuccessScreen),
}

#[derive(Debug, Clone, Default)]
pub struct CreateProjectForm {
    fio: String,
    phone: String,
    title: String,
    description: String,
    file: Option<SelectedFile>,
    loading: bool,
    error: Option<String>,
    success: bool,
}

impl CreateProjectForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fio(&self) -> &str {
        &self.fio
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_fio(&mut self, value: impl Into<String>) {
        self.fio = value.into();
    }

    pub fn set_phone(&mut self, value: impl Into<String>) {
        self.phone = value.into();
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.title = value.into();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }

    /// Select a file, replacing any previous one
    pub fn select_file(&mut self, file: SelectedFile) {
        self.file = Some(file);
    }

    pub fn remove_file(&mut self) {
        self.file = None;
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn file_display(&self) -> Option<FileDisplay> {
        self.file.as_ref().map(SelectedFile::display)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn view(&self) -> FormView {
        if self.success {
            FormView::Success(SuccessScreen::default())
        } else {
            FormView::Editing
        }
    }

    /// Start a submission and return the payload to send
    ///
    /// Returns `None` while a submission is in flight or after the project
    /// has been sent.
    pub fn begin_submit(&mut self) -> Option<CreateProjectPayload> {
        if self.loading || self.success {
            return None;
        }

        self.loading = true;
        self.error = None;
        Some(CreateProjectPayload::from_form(self))
    }

    /// Settle a submission started with [`begin_submit`](Self::begin_submit)
    pub fn finish_submit(&mut self, result: Result<Option<Project>, ClientError>) {
        match result {
            Ok(project) => {
                match project {
                    Some(project) => info!(project_id = %project.id, "Project sent"),
                    None => info!("Project sent"),
                }
                self.success = true;
            }
            Err(err) => {
                debug!(error = %err, "Project creation failed");
                self.error = Some(err.message().unwrap_or(FALLBACK_ERROR).to_string());
            }
        }
        self.loading = false;
    }

    /// Send the form through `api` and settle it
    pub async fn submit(&mut self, api: &dyn ProjectsApi) {
        if let Some(payload) = self.begin_submit() {
            let result = api.create_project(payload).await;
            self.finish_submit(result);
        }
    }
}
