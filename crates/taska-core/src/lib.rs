//! # taska-core
//!
//! Core types, errors and configuration for Taska.
//!
//! This crate provides the building blocks shared by the other crates:
//! - Common error types and field-level validation errors
//! - The `ServiceResult` pattern used by services
//! - Offset pagination
//! - Application configuration

pub mod config;
pub mod error;
pub mod pagination;
pub mod result;

pub use error::*;
pub use pagination::*;
pub use result::*;

/// Identifier type for all resources. Ids travel as opaque strings.
pub type Id = String;
