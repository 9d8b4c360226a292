//! Outbound `createProject` call

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use taska_models::{Project, TeamMember};
use tracing::{debug, warn};

use crate::error::ClientError;
use crate::form::CreateProjectForm;

/// Status sent with every project created from the form
pub const DRAFT_STATUS: &str = "draft";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Body of the `createProject` call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectPayload {
    pub title: String,
    pub description: String,
    pub customer_id: String,
    pub team: Vec<TeamMember>,
    pub status: String,
}

impl CreateProjectPayload {
    /// Payload for the form's current fields
    ///
    /// The customer is identified by the full name typed into the form. The
    /// phone number and the selected file are not sent.
    pub fn from_form(form: &CreateProjectForm) -> Self {
        Self {
            title: form.title().to_string(),
            description: form.description().to_string(),
            customer_id: form.fio().to_string(),
            team: Vec::new(),
            status: DRAFT_STATUS.to_string(),
        }
    }
}

/// Project API as seen by the client
#[async_trait]
pub trait ProjectsApi: Send + Sync {
    /// Create a project
    ///
    /// Any success status counts as created. The project is `None` when the
    /// server accepted the request but its body could not be read as one.
    async fn create_project(
        &self,
        payload: CreateProjectPayload,
    ) -> Result<Option<Project>, ClientError>;
}

/// `ProjectsApi` over HTTP
#[derive(Debug, Clone)]
pub struct HttpProjectsApi {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl HttpProjectsApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn projects_url(&self) -> String {
        format!("{}/api/projects", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ProjectsApi for HttpProjectsApi {
    async fn create_project(
        &self,
        payload: CreateProjectPayload,
    ) -> Result<Option<Project>, ClientError> {
        let url = self.projects_url();
        debug!(%url, title = %payload.title, "Creating project");

        let response = self.client.post(&url).json(&payload).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message);
            warn!(status = status.as_u16(), ?message, "Project creation rejected");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        match response.json::<Project>().await {
            Ok(project) => Ok(Some(project)),
            Err(e) => {
                warn!(status = status.as_u16(), error = %e, "Created project body unreadable");
                Ok(None)
            }
        }
    }
}
