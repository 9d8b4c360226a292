//! API request handlers

pub mod projects;
