//! In-memory project store

use async_trait::async_trait;
use taska_models::Project;
use tokio::sync::RwLock;
use tracing::debug;

use crate::store::{ProjectStore, StoreError, StoreResult};

/// In-memory project store, kept in insertion order
pub struct MemoryProjectStore {
    projects: RwLock<Vec<Project>>,
}

impl Default for MemoryProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryProjectStore {
    pub fn new() -> Self {
        Self {
            projects: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ProjectStore for MemoryProjectStore {
    async fn insert(&self, project: Project) -> StoreResult<Project> {
        let mut projects = self.projects.write().await;
        if projects.iter().any(|p| p.id == project.id) {
            return Err(StoreError::Conflict(project.id));
        }

        debug!(project_id = %project.id, "Project stored");
        projects.push(project.clone());
        Ok(project)
    }

    async fn find(&self, id: &str) -> StoreResult<Option<Project>> {
        let projects = self.projects.read().await;
        Ok(projects.iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self, offset: usize, limit: usize) -> StoreResult<Vec<Project>> {
        let projects = self.projects.read().await;
        Ok(projects.iter().skip(offset).take(limit).cloned().collect())
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.projects.read().await.len())
    }
}
