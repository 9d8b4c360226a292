//! Project contracts

mod base;
mod create;

pub use base::ProjectBaseContract;
pub use create::CreateProjectContract;

/// Longest accepted project name
pub const MAX_NAME_LENGTH: usize = 255;
