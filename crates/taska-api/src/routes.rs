//! API routes

use axum::{routing::get, Json, Router};
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::extractors::AppState;
use crate::handlers::projects;
use crate::openapi::openapi_value;

/// Create the API router
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/projects",
            get(projects::list_projects).post(projects::create_project),
        )
        .route("/api/projects/:id", get(projects::get_project))
        .route("/api-docs/openapi.json", get(openapi_document))
}

/// The API router bound to its state
pub fn app(state: AppState) -> Router {
    router().with_state(state)
}

async fn openapi_document() -> ApiResult<Json<Value>> {
    openapi_value()
        .map(Json)
        .map_err(|e| ApiError::internal(e.to_string()))
}
