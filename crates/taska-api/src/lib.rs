//! # taska-api
//!
//! REST API for Taska.
//!
//! Serves the project routes the creation form talks to, and the generated
//! OpenAPI document describing the `User`, `Project` and `Task` resources.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;

pub use extractors::AppState;
pub use openapi::{openapi_json, ApiDoc};
pub use routes::{app, router};
