//! User model
//!
//! Users sign in through Telegram; `telegram_id` and `username` come from the
//! Telegram account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::Id;

/// Role of a user in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[serde(alias = "customer")]
    Customer,
    #[serde(alias = "executor")]
    Executor,
    #[serde(alias = "presale_manager")]
    PresaleManager,
    #[serde(alias = "project_manager")]
    ProjectManager,
    #[serde(alias = "super_admin")]
    SuperAdmin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "CUSTOMER",
            Self::Executor => "EXECUTOR",
            Self::PresaleManager => "PRESALE_MANAGER",
            Self::ProjectManager => "PROJECT_MANAGER",
            Self::SuperAdmin => "SUPER_ADMIN",
        }
    }

    /// Managers and admins act on behalf of customers
    pub fn is_manager(&self) -> bool {
        matches!(
            self,
            Self::PresaleManager | Self::ProjectManager | Self::SuperAdmin
        )
    }
}

/// Specialisation of an executor; also used as the role inside a project team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutorCategory {
    #[serde(alias = "developer")]
    Developer,
    #[serde(alias = "designer")]
    Designer,
    #[serde(alias = "qa")]
    Qa,
    #[serde(alias = "devops")]
    Devops,
    #[serde(alias = "other")]
    Other,
}

impl ExecutorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Developer => "DEVELOPER",
            Self::Designer => "DESIGNER",
            Self::Qa => "QA",
            Self::Devops => "DEVOPS",
            Self::Other => "OTHER",
        }
    }
}

/// User account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Уникальный идентификатор пользователя
    pub id: Id,

    /// Telegram ID пользователя
    pub telegram_id: String,

    /// Имя пользователя в Telegram
    #[validate(length(min = 1, max = 255))]
    pub username: String,

    /// Имя пользователя
    #[validate(length(max = 255))]
    pub first_name: String,

    /// Фамилия пользователя
    #[validate(length(max = 255))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Роль пользователя
    pub role: UserRole,

    /// Категория исполнителя (если роль EXECUTOR)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executor_category: Option<ExecutorCategory>,

    /// Баланс пользователя
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,

    /// Рейтинг пользователя
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    /// Дата создания
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Дата обновления
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(
        id: impl Into<Id>,
        telegram_id: impl Into<String>,
        username: impl Into<String>,
        first_name: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            id: id.into(),
            telegram_id: telegram_id.into(),
            username: username.into(),
            first_name: first_name.into(),
            last_name: None,
            role,
            executor_category: None,
            balance: None,
            rating: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Get full name (first name + last name)
    pub fn full_name(&self) -> String {
        match &self.last_name {
            Some(last) => format!("{} {}", self.first_name, last).trim().to_string(),
            None => self.first_name.trim().to_string(),
        }
    }

    pub fn is_executor(&self) -> bool {
        self.role == UserRole::Executor
    }

    /// An executor category only makes sense for executors
    pub fn executor_category_consistent(&self) -> bool {
        self.executor_category.is_none() || self.is_executor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let mut user = User::new("u1", "100200", "ivanp", "Ivan", UserRole::Customer);
        assert_eq!(user.full_name(), "Ivan");

        user.last_name = Some("Petrov".into());
        assert_eq!(user.full_name(), "Ivan Petrov");
    }

    #[test]
    fn test_executor_category_consistency() {
        let mut user = User::new("u1", "1", "dev", "Dev", UserRole::Executor);
        user.executor_category = Some(ExecutorCategory::Qa);
        assert!(user.executor_category_consistent());

        user.role = UserRole::Customer;
        assert!(!user.executor_category_consistent());

        user.executor_category = None;
        assert!(user.executor_category_consistent());
    }

    #[test]
    fn test_wire_format() {
        let mut user = User::new("u1", "42", "pm", "Olga", UserRole::PresaleManager);
        user.balance = Some(1500.5);

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["telegramId"], "42");
        assert_eq!(json["firstName"], "Olga");
        assert_eq!(json["role"], "PRESALE_MANAGER");
        assert_eq!(json["balance"], 1500.5);
        assert!(json.get("executorCategory").is_none());
    }

    #[test]
    fn test_roles_accept_lowercase() {
        let role: UserRole = serde_json::from_str("\"project_manager\"").unwrap();
        assert_eq!(role, UserRole::ProjectManager);
        assert!(role.is_manager());

        let category: ExecutorCategory = serde_json::from_str("\"DEVOPS\"").unwrap();
        assert_eq!(category.as_str(), "DEVOPS");
    }

    #[test]
    fn test_validation() {
        let user = User::new("u1", "42", "", "Olga", UserRole::Customer);
        assert!(user.validate().is_err());
    }
}
