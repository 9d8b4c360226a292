//! # taska-services
//!
//! Business logic services for Taska.
//!
//! A service takes plain params, builds the entity with its defaults applied,
//! runs the matching contract and persists the result through the store.
//! Validation failures come back inside a `ServiceResult`; storage failures
//! are returned as `TaskaError`.

pub mod projects;

pub use projects::{CreateProjectService, ProjectParams};
pub use taska_core::result::ServiceResult;
