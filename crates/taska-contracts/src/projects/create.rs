//! Create contract for projects

use taska_core::error::ValidationErrors;
use taska_models::{Project, ProjectStatus};

use crate::base::{Contract, ValidationResult};
use super::base::ProjectBaseContract;

/// Contract for creating a new project
#[derive(Debug, Default, Clone, Copy)]
pub struct CreateProjectContract {
    base: ProjectBaseContract,
}

impl CreateProjectContract {
    pub fn new() -> Self {
        Self {
            base: ProjectBaseContract::new(),
        }
    }

    /// New projects start as a draft or go straight to presale
    fn validate_initial_status(&self, status: ProjectStatus, errors: &mut ValidationErrors) {
        if !status.is_initial() {
            errors.add(
                "status",
                format!("can't be {} for a new project", status.as_str()),
            );
        }
    }
}

impl Contract<Project> for CreateProjectContract {
    fn validate(&self, entity: &Project) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        if let Err(base_errors) = self.base.validate(entity) {
            errors.merge(base_errors);
        }

        self.validate_initial_status(entity.status, &mut errors);

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_can_be_created() {
        let project = Project::new("p1", "Site redesign", "Ivan Petrov");
        assert!(CreateProjectContract::new().validate(&project).is_ok());
    }

    #[test]
    fn test_presale_can_be_created() {
        let mut project = Project::new("p1", "Site redesign", "Ivan Petrov");
        project.status = ProjectStatus::Presale;
        assert!(CreateProjectContract::new().validate(&project).is_ok());
    }

    #[test]
    fn test_in_progress_cannot_be_created() {
        let mut project = Project::new("p1", "Site redesign", "Ivan Petrov");
        project.status = ProjectStatus::InProgress;

        let errors = CreateProjectContract::new().validate(&project).unwrap_err();
        assert_eq!(
            errors.full_messages(),
            vec!["status can't be IN_PROGRESS for a new project".to_string()]
        );
    }

    #[test]
    fn test_errors_accumulate() {
        let mut project = Project::new("p1", "", "Ivan Petrov");
        project.status = ProjectStatus::Completed;

        let errors = CreateProjectContract::new().validate(&project).unwrap_err();
        assert!(errors.has_error("name"));
        assert!(errors.has_error("status"));
    }
}
