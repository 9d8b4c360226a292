//! Project API handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use taska_core::error::TaskaError;
use taska_core::pagination::PaginationParams;
use taska_models::{Id, Project, ProjectStatus, TeamMember};
use taska_services::ProjectParams;
use tracing::{debug, info};
use utoipa::ToSchema;

use crate::error::{ApiResult, ErrorResponse};
use crate::extractors::{AppState, Pagination};

/// GET /api/projects
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    params(PaginationParams),
    responses(
        (status = 200, description = "Projects in creation order", body = ProjectCollection)
    )
)]
pub async fn list_projects(
    State(state): State<AppState>,
    pagination: Pagination,
) -> ApiResult<Json<ProjectCollection>> {
    let total = state.store.count().await?;
    let elements = state.store.list(pagination.offset, pagination.limit()).await?;

    debug!(offset = pagination.offset, count = elements.len(), total, "Listing projects");

    Ok(Json(ProjectCollection {
        total,
        count: elements.len(),
        offset: pagination.offset,
        page_size: pagination.limit(),
        elements,
    }))
}

/// GET /api/projects/:id
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "projects",
    params(("id" = String, Path, description = "Project identifier")),
    responses(
        (status = 200, description = "The project", body = Project),
        (status = 404, description = "No project with this id", body = ErrorResponse)
    )
)]
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> ApiResult<Json<Project>> {
    let project = state.store.find(&id).await?.ok_or(TaskaError::NotFound {
        entity: "Project",
        field: "id",
        value: id,
    })?;
    Ok(Json(project))
}

/// POST /api/projects
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Project created", body = Project),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 422, description = "Project failed validation", body = ErrorResponse)
    )
)]
pub async fn create_project(
    State(state): State<AppState>,
    payload: Result<Json<CreateProjectRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Project>)> {
    let Json(request) = payload?;

    let project = state
        .create_project_service()
        .call(request.into())
        .await?
        .into_result()?;

    info!(project_id = %project.id, "Project created via API");
    Ok((StatusCode::CREATED, Json(project)))
}

/// A page of projects
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCollection {
    /// Number of stored projects
    pub total: usize,
    /// Number of projects in this page
    pub count: usize,
    pub offset: usize,
    pub page_size: usize,
    pub elements: Vec<Project>,
}

/// Body of `POST /api/projects`
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "title": "Site redesign",
    "description": "New landing page",
    "customerId": "Ivan Petrov",
    "team": [],
    "status": "draft"
}))]
pub struct CreateProjectRequest {
    /// Project name; `name` is accepted as well
    #[serde(alias = "name")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Customer reference, stored verbatim
    pub customer_id: Id,
    #[serde(default)]
    pub team: Vec<TeamMember>,
    /// Initial status, DRAFT when absent
    #[serde(default)]
    pub status: Option<ProjectStatus>,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
}

impl From<CreateProjectRequest> for ProjectParams {
    fn from(request: CreateProjectRequest) -> Self {
        ProjectParams {
            name: Some(request.title),
            description: request.description,
            customer_id: Some(request.customer_id),
            status: request.status,
            budget: request.budget,
            deadline: request.deadline,
            team: request.team,
        }
    }
}
