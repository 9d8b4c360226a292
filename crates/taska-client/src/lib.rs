//! # taska-client
//!
//! Client side of project creation.
//!
//! - [`ProjectsApi`] is the outbound `createProject` call, with
//!   [`HttpProjectsApi`] as its HTTP implementation.
//! - [`CreateProjectForm`] is the creation form as a state model: its fields,
//!   the selected file, the loading, error and success flags, and the success
//!   screen shown once the project is sent.

pub mod api;
pub mod error;
pub mod file;
pub mod form;
pub mod screen;

pub use api::{CreateProjectPayload, HttpProjectsApi, ProjectsApi};
pub use error::ClientError;
pub use file::{FileDisplay, SelectedFile};
pub use form::{CreateProjectForm, FormView};
pub use screen::SuccessScreen;
