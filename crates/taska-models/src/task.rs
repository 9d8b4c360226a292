//! Task model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::Id;

/// Task workflow status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    #[default]
    #[serde(alias = "todo")]
    Todo,
    #[serde(alias = "in_progress")]
    InProgress,
    #[serde(alias = "review")]
    Review,
    #[serde(alias = "done")]
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    #[serde(alias = "low")]
    Low,
    #[serde(alias = "medium")]
    Medium,
    #[serde(alias = "high")]
    High,
}

/// File attached to a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Attachment {
    /// Название файла
    #[schema(required = false)]
    pub name: String,
    /// URL файла
    #[schema(required = false)]
    pub url: String,
    /// Тип файла
    #[serde(rename = "type")]
    #[schema(required = false)]
    pub kind: String,
}

/// Task entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Уникальный идентификатор задачи
    pub id: Id,

    /// ID проекта
    pub project_id: Id,

    /// Название задачи
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    /// Описание задачи
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Статус задачи
    pub status: TaskStatus,

    /// Приоритет задачи
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,

    /// ID исполнителя
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<Id>,

    /// Этап проекта
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,

    /// Вложения
    #[serde(default)]
    pub attachments: Vec<Attachment>,

    /// Дата создания
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Дата обновления
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn new(id: impl Into<Id>, project_id: impl Into<Id>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            project_id: project_id.into(),
            title: title.into(),
            description: None,
            status: TaskStatus::Todo,
            priority: None,
            assigned_to: None,
            stage: None,
            attachments: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned_to.is_some()
    }
}
