//! # taska-store
//!
//! Storage for projects.
//!
//! `ProjectStore` is the seam between the services and wherever projects
//! live. The only implementation shipped here keeps them in memory, in
//! insertion order.
//!
//! ## Example
//!
//! ```ignore
//! use taska_store::{MemoryProjectStore, ProjectStore};
//!
//! let store = MemoryProjectStore::new();
//! store.insert(project).await?;
//! let first_page = store.list(0, 20).await?;
//! ```

pub mod memory;
pub mod store;

pub use memory::MemoryProjectStore;
pub use store::{ProjectStore, StoreError, StoreResult};
