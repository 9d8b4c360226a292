//! # taska-contracts
//!
//! Contract validation for Taska.
//!
//! Contracts validate entities before they are persisted. Each contract
//! collects every violation it finds into a `ValidationErrors` instead of
//! stopping at the first one.

pub mod base;
pub mod projects;

pub use base::*;
