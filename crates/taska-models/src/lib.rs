//! # taska-models
//!
//! Domain models for Taska.
//!
//! The structs here are both the wire types of the REST API and the source of
//! the OpenAPI component schemas: every model derives `utoipa::ToSchema`.
//! Field names travel in camelCase; enumerations travel in SCREAMING_SNAKE_CASE
//! and also accept their lowercase spelling on input.

pub use taska_core::Id;

pub mod project;
pub mod task;
pub mod user;

pub use project::{ParticipationStatus, Project, ProjectStage, ProjectStatus, StageStatus, TeamMember};
pub use task::{Attachment, Task, TaskPriority, TaskStatus};
pub use user::{ExecutorCategory, User, UserRole};
