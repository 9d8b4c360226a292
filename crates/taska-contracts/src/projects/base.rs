//! Base contract for projects

use taska_core::error::ValidationErrors;
use taska_models::{Project, TeamMember};
use validator::Validate;

use crate::base::{merge_derived, Contract, ValidationResult};
use super::MAX_NAME_LENGTH;

/// Base contract for projects with common validations
#[derive(Debug, Default, Clone, Copy)]
pub struct ProjectBaseContract;

impl ProjectBaseContract {
    pub fn new() -> Self {
        Self
    }

    /// Validate name is present and within length
    pub fn validate_name(&self, name: &str, errors: &mut ValidationErrors) {
        if name.trim().is_empty() {
            errors.add("name", "can't be blank");
        } else if name.chars().count() > MAX_NAME_LENGTH {
            errors.add(
                "name",
                format!("is too long (maximum is {} characters)", MAX_NAME_LENGTH),
            );
        }
    }

    pub fn validate_budget(&self, budget: Option<f64>, errors: &mut ValidationErrors) {
        if let Some(budget) = budget {
            if !budget.is_finite() || budget < 0.0 {
                errors.add("budget", "must be greater than or equal to 0");
            }
        }
    }

    /// Every team member needs an executor and a non-negative rate
    pub fn validate_team(&self, team: &[TeamMember], errors: &mut ValidationErrors) {
        for (index, member) in team.iter().enumerate() {
            if member.executor_id.trim().is_empty() {
                errors.add(format!("team[{}].executorId", index), "can't be blank");
            }
            if !member.rate.is_finite() || member.rate < 0.0 {
                errors.add(
                    format!("team[{}].rate", index),
                    "must be greater than or equal to 0",
                );
            }
        }
    }
}

impl Contract<Project> for ProjectBaseContract {
    fn validate(&self, entity: &Project) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        self.validate_name(&entity.name, &mut errors);
        self.validate_budget(entity.budget, &mut errors);
        self.validate_team(&entity.team, &mut errors);

        if let Err(derived) = entity.validate() {
            // name length is already reported above
            let mut derived_errors = ValidationErrors::new();
            merge_derived(&mut derived_errors, derived);
            derived_errors.errors.remove("name");
            errors.merge(derived_errors);
        }

        errors.into_result()
    }
}
