//! Axum extractors and shared state for API handlers

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use taska_core::pagination::PaginationParams;
use taska_services::CreateProjectService;
use taska_store::{MemoryProjectStore, ProjectStore};

use crate::error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProjectStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self { store }
    }

    pub fn create_project_service(&self) -> CreateProjectService {
        CreateProjectService::new(self.store.clone())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(MemoryProjectStore::new()))
    }
}

/// Pagination extractor; a malformed query falls back to the defaults
pub struct Pagination(pub PaginationParams);

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state)
            .await
            .unwrap_or_else(|_| Query(PaginationParams::default()));
        Ok(Pagination(params))
    }
}

impl std::ops::Deref for Pagination {
    type Target = PaginationParams;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
