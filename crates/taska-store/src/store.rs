//! Store trait and errors

use async_trait::async_trait;
use taska_core::error::TaskaError;
use taska_core::Id;
use taska_models::Project;
use thiserror::Error;

/// Error type for store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Project with id {0} already exists")]
    Conflict(Id),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for TaskaError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict(id) => TaskaError::Conflict {
                message: format!("Project with id {} already exists", id),
            },
            StoreError::Backend(message) => TaskaError::Storage(message),
        }
    }
}

/// Storage for projects
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Store a new project; ids must be unique
    async fn insert(&self, project: Project) -> StoreResult<Project>;

    /// Find a project by id
    async fn find(&self, id: &str) -> StoreResult<Option<Project>>;

    /// Projects in creation order
    async fn list(&self, offset: usize, limit: usize) -> StoreResult<Vec<Project>>;

    /// Count all projects
    async fn count(&self) -> StoreResult<usize>;
}
