//! Create service for projects

use std::sync::Arc;

use chrono::Utc;
use taska_contracts::projects::CreateProjectContract;
use taska_contracts::Contract;
use taska_core::result::{ServiceResult, TaskaResult};
use taska_models::Project;
use taska_store::ProjectStore;
use tracing::{debug, info};
use uuid::Uuid;

use super::ProjectParams;

/// Service for creating projects
///
/// # Example
/// ```ignore
/// let service = CreateProjectService::new(store.clone());
/// let params = ProjectParams::new()
///     .with_name("Site redesign")
///     .with_customer_id("Ivan Petrov");
/// let result = service.call(params).await?;
/// ```
pub struct CreateProjectService {
    store: Arc<dyn ProjectStore>,
    contract: CreateProjectContract,
}

impl CreateProjectService {
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self {
            store,
            contract: CreateProjectContract::new(),
        }
    }

    /// Execute the create operation
    ///
    /// Contract violations are reported through the returned `ServiceResult`.
    /// Only storage failures surface as `Err`.
    pub async fn call(&self, params: ProjectParams) -> TaskaResult<ServiceResult<Project>> {
        let project = Self::build(params);

        if let Err(errors) = self.contract.validate(&project) {
            debug!(errors = %errors, "Project contract rejected");
            return Ok(ServiceResult::failure(errors));
        }

        let project = self.store.insert(project).await?;
        info!(project_id = %project.id, customer_id = %project.customer_id, "Project created");

        Ok(ServiceResult::success(project))
    }

    /// New project with defaults applied: fresh id, DRAFT, timestamps now
    fn build(params: ProjectParams) -> Project {
        let now = Utc::now();
        let mut project = Project::new(
            Uuid::new_v4().to_string(),
            params.name.unwrap_or_default(),
            params.customer_id.unwrap_or_default(),
        );

        project.description = params.description;
        project.status = params.status.unwrap_or_default();
        project.budget = params.budget;
        project.deadline = params.deadline;
        project.team = params.team;
        project.created_at = Some(now);
        project.updated_at = Some(now);

        project
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use taska_models::{ExecutorCategory, ParticipationStatus, ProjectStatus, TeamMember};
    use taska_core::error::TaskaError;
    use taska_store::{MemoryProjectStore, StoreError, StoreResult};

    fn service() -> (CreateProjectService, Arc<MemoryProjectStore>) {
        let store = Arc::new(MemoryProjectStore::new());
        (CreateProjectService::new(store.clone()), store)
    }

    #[tokio::test]
    async fn test_create_project_with_defaults() {
        let (service, store) = service();

        let params = ProjectParams::new()
            .with_name("Site redesign")
            .with_description("New landing page")
            .with_customer_id("Ivan Petrov");

        let result = service.call(params).await.unwrap();
        assert!(result.is_success());

        let project = result.result().unwrap();
        assert_eq!(project.name, "Site redesign");
        assert_eq!(project.customer_id, "Ivan Petrov");
        assert_eq!(project.status, ProjectStatus::Draft);
        assert!(Uuid::parse_str(&project.id).is_ok());
        assert!(project.created_at.is_some());
        assert_eq!(project.created_at, project.updated_at);

        assert_eq!(store.count().await.unwrap(), 1);
        assert!(store.find(&project.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_create_project_validation_failure() {
        let (service, store) = service();

        let params = ProjectParams::new().with_name("   ").with_customer_id("c1");

        let result = service.call(params).await.unwrap();
        assert!(result.is_failure());
        assert!(result.errors().has_error("name"));
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_project_rejects_late_status() {
        let (service, _) = service();

        let params = ProjectParams::new()
            .with_name("Mobile app")
            .with_customer_id("c1")
            .with_status(ProjectStatus::Completed);

        let result = service.call(params).await.unwrap();
        assert!(result.errors().has_error("status"));
    }

    #[tokio::test]
    async fn test_create_project_keeps_team_order() {
        let (service, _) = service();
        let member = |id: &str, role| TeamMember {
            executor_id: id.to_string(),
            role,
            rate: 40.0,
            status: ParticipationStatus::Pending,
        };

        let params = ProjectParams::new()
            .with_name("Mobile app")
            .with_customer_id("c1")
            .with_budget(5000.0)
            .with_team(vec![
                member("e2", ExecutorCategory::Designer),
                member("e1", ExecutorCategory::Developer),
            ]);

        let project = service.call(params).await.unwrap().into_result().unwrap();
        let ids: Vec<_> = project.team.iter().map(|m| m.executor_id.as_str()).collect();
        assert_eq!(ids, vec!["e2", "e1"]);
        assert_eq!(project.budget, Some(5000.0));
    }

    struct BrokenStore;

    #[async_trait]
    impl ProjectStore for BrokenStore {
        async fn insert(&self, _project: Project) -> StoreResult<Project> {
            Err(StoreError::Backend("disk full".into()))
        }

        async fn find(&self, _id: &str) -> StoreResult<Option<Project>> {
            Ok(None)
        }

        async fn list(&self, _offset: usize, _limit: usize) -> StoreResult<Vec<Project>> {
            Ok(Vec::new())
        }

        async fn count(&self) -> StoreResult<usize> {
            Ok(0)
        }
    }

    #[tokio::test]
    async fn test_storage_failure_is_an_error() {
        let service = CreateProjectService::new(Arc::new(BrokenStore));
        let params = ProjectParams::new().with_name("Site redesign").with_customer_id("c1");

        let err = service.call(params).await.unwrap_err();
        assert!(matches!(err, TaskaError::Storage(message) if message == "disk full"));
    }
}
