//! Project model
//!
//! A project is owned by a customer, moves through presale and team selection
//! into delivery, and carries its team and its stages as ordered lists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::user::ExecutorCategory;
use crate::Id;

/// Project lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    #[default]
    #[serde(alias = "draft")]
    Draft,
    #[serde(alias = "presale")]
    Presale,
    #[serde(alias = "team_selection")]
    TeamSelection,
    #[serde(alias = "in_progress")]
    InProgress,
    #[serde(alias = "completed")]
    Completed,
    #[serde(alias = "cancelled")]
    Cancelled,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Presale => "PRESALE",
            Self::TeamSelection => "TEAM_SELECTION",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Statuses a project may start in
    pub fn is_initial(&self) -> bool {
        matches!(self, Self::Draft | Self::Presale)
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

/// Executor's answer to a team invitation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParticipationStatus {
    #[default]
    #[serde(alias = "pending")]
    Pending,
    #[serde(alias = "accepted")]
    Accepted,
    #[serde(alias = "rejected")]
    Rejected,
}

/// Progress of a single project stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StageStatus {
    #[default]
    #[serde(alias = "pending")]
    Pending,
    #[serde(alias = "in_progress")]
    InProgress,
    #[serde(alias = "completed")]
    Completed,
}

/// Membership of an executor in a project team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    /// ID исполнителя
    #[schema(required = false)]
    pub executor_id: Id,
    /// Роль в команде
    #[schema(required = false)]
    pub role: ExecutorCategory,
    /// Ставка исполнителя
    #[schema(required = false)]
    pub rate: f64,
    /// Статус участия в проекте
    #[serde(default)]
    pub status: ParticipationStatus,
}

/// A stage of the project plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStage {
    /// Название этапа
    #[schema(required = false)]
    pub name: String,
    /// Описание этапа
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Бюджет этапа
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    /// Срок завершения этапа
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    /// Статус этапа
    #[serde(default)]
    pub status: StageStatus,
}

/// Project entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Уникальный идентификатор проекта
    pub id: Id,

    /// Название проекта
    #[validate(length(max = 255))]
    pub name: String,

    /// Описание проекта
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// ID заказчика
    #[validate(length(max = 255))]
    pub customer_id: String,

    /// ID пресейл менеджера
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(required = true)]
    pub presale_manager_id: Option<Id>,

    /// ID проектного менеджера
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_manager_id: Option<Id>,

    /// Статус проекта
    pub status: ProjectStatus,

    /// Бюджет проекта
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,

    /// Срок завершения проекта
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,

    /// Команда проекта
    #[serde(default)]
    pub team: Vec<TeamMember>,

    /// Этапы проекта
    #[serde(default)]
    pub stages: Vec<ProjectStage>,

    /// Дата создания
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Дата обновления
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Project {
    /// Create a new draft project with minimal required fields
    pub fn new(id: impl Into<Id>, name: impl Into<String>, customer_id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            customer_id: customer_id.into(),
            presale_manager_id: None,
            project_manager_id: None,
            status: ProjectStatus::Draft,
            budget: None,
            deadline: None,
            team: Vec::new(),
            stages: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Members that accepted their invitation
    pub fn accepted_team(&self) -> impl Iterator<Item = &TeamMember> {
        self.team
            .iter()
            .filter(|member| member.status == ParticipationStatus::Accepted)
    }

    /// Sum of the stage budgets that are set
    pub fn staged_budget(&self) -> f64 {
        self.stages.iter().filter_map(|stage| stage.budget).sum()
    }
}
