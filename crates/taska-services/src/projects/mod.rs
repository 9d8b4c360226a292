//! Project services

mod create;

pub use create::CreateProjectService;

use chrono::{DateTime, Utc};
use taska_models::{Id, ProjectStatus, TeamMember};

/// Project service params
#[derive(Debug, Clone, Default)]
pub struct ProjectParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub customer_id: Option<Id>,
    pub status: Option<ProjectStatus>,
    pub budget: Option<f64>,
    pub deadline: Option<DateTime<Utc>>,
    pub team: Vec<TeamMember>,
}

impl ProjectParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_customer_id(mut self, customer_id: impl Into<Id>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_budget(mut self, budget: f64) -> Self {
        self.budget = Some(budget);
        self
    }

    pub fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_team(mut self, team: Vec<TeamMember>) -> Self {
        self.team = team;
        self
    }
}
