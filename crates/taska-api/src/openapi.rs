//! OpenAPI document for the Taska API
//!
//! The component schemas come from the model derives and the paths from the
//! annotated handlers, so the document cannot drift from the wire types.

use serde_json::Value;
use taska_models::{
    Attachment, ExecutorCategory, ParticipationStatus, Project, ProjectStage, ProjectStatus,
    StageStatus, Task, TaskPriority, TaskStatus, TeamMember, User, UserRole,
};
use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers::projects::{self, CreateProjectRequest, ProjectCollection};

/// OpenAPI version written into the rendered document
pub const OPENAPI_VERSION: &str = "3.0.0";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Taska API",
        version = "1.0.0",
        description = "API для управления проектами и задачами"
    ),
    servers(
        (url = "https://taskjira-production.up.railway.app", description = "Production API сервер"),
        (url = "http://localhost:3000", description = "Local API сервер")
    ),
    paths(
        projects::list_projects,
        projects::get_project,
        projects::create_project,
    ),
    components(schemas(
        User,
        UserRole,
        ExecutorCategory,
        Project,
        ProjectStatus,
        TeamMember,
        ParticipationStatus,
        ProjectStage,
        StageStatus,
        Task,
        TaskStatus,
        TaskPriority,
        Attachment,
        CreateProjectRequest,
        ProjectCollection,
        ErrorResponse,
    )),
    tags(
        (name = "projects", description = "Project management")
    )
)]
pub struct ApiDoc;

/// The document as JSON, stamped with [`OPENAPI_VERSION`]
pub fn openapi_value() -> serde_json::Result<Value> {
    let mut doc = serde_json::to_value(ApiDoc::openapi())?;
    if let Some(fields) = doc.as_object_mut() {
        fields.insert("openapi".into(), Value::String(OPENAPI_VERSION.into()));
    }
    Ok(doc)
}

/// The document rendered as pretty JSON
pub fn openapi_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&openapi_value()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> Value {
        openapi_value().unwrap()
    }

    fn enum_values(doc: &Value, schema: &str) -> Vec<String> {
        doc["components"]["schemas"][schema]["enum"]
            .as_array()
            .unwrap_or_else(|| panic!("{} is not an enum schema", schema))
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect()
    }

    fn required_fields(doc: &Value, schema: &str) -> Vec<String> {
        let mut fields: Vec<String> = doc["components"]["schemas"][schema]["required"]
            .as_array()
            .map(|fields| {
                fields
                    .iter()
                    .map(|v| v.as_str().unwrap().to_string())
                    .collect()
            })
            .unwrap_or_default();
        fields.sort();
        fields
    }

    fn sorted(fields: &[&str]) -> Vec<String> {
        let mut fields: Vec<String> = fields.iter().map(|f| f.to_string()).collect();
        fields.sort();
        fields
    }

    #[test]
    fn test_document_metadata() {
        let doc = document();
        assert_eq!(doc["openapi"], "3.0.0");
        assert_eq!(doc["info"]["title"], "Taska API");
        assert_eq!(doc["info"]["version"], "1.0.0");
        assert_eq!(
            doc["info"]["description"],
            "API для управления проектами и задачами"
        );
    }

    #[test]
    fn test_document_servers() {
        let doc = document();
        let servers = doc["servers"].as_array().unwrap();
        assert_eq!(servers.len(), 2);
        assert_eq!(servers[0]["url"], "https://taskjira-production.up.railway.app");
        assert_eq!(servers[0]["description"], "Production API сервер");
        assert_eq!(servers[1]["url"], "http://localhost:3000");
        assert_eq!(servers[1]["description"], "Local API сервер");
    }

    #[test]
    fn test_resource_schemas_are_present() {
        let doc = document();
        let schemas = &doc["components"]["schemas"];
        for name in ["User", "Project", "Task"] {
            assert!(schemas[name].is_object(), "missing schema {}", name);
        }

        let project = &schemas["Project"]["properties"];
        for field in ["id", "name", "customerId", "status", "team", "stages", "createdAt"] {
            assert!(project[field].is_object(), "Project is missing {}", field);
        }
        assert!(schemas["Task"]["properties"]["projectId"].is_object());
        assert!(schemas["User"]["properties"]["telegramId"].is_object());
    }

    #[test]
    fn test_enum_values_are_exact() {
        let doc = document();
        assert_eq!(
            enum_values(&doc, "ProjectStatus"),
            vec!["DRAFT", "PRESALE", "TEAM_SELECTION", "IN_PROGRESS", "COMPLETED", "CANCELLED"]
        );
        assert_eq!(
            enum_values(&doc, "UserRole"),
            vec!["CUSTOMER", "EXECUTOR", "PRESALE_MANAGER", "PROJECT_MANAGER", "SUPER_ADMIN"]
        );
        assert_eq!(
            enum_values(&doc, "ExecutorCategory"),
            vec!["DEVELOPER", "DESIGNER", "QA", "DEVOPS", "OTHER"]
        );
        assert_eq!(
            enum_values(&doc, "TaskStatus"),
            vec!["TODO", "IN_PROGRESS", "REVIEW", "DONE"]
        );
        assert_eq!(enum_values(&doc, "TaskPriority"), vec!["LOW", "MEDIUM", "HIGH"]);
        assert_eq!(
            enum_values(&doc, "ParticipationStatus"),
            vec!["PENDING", "ACCEPTED", "REJECTED"]
        );
        assert_eq!(
            enum_values(&doc, "StageStatus"),
            vec!["PENDING", "IN_PROGRESS", "COMPLETED"]
        );
    }

    #[test]
    fn test_paths_come_from_handlers() {
        let doc = document();
        let paths = &doc["paths"];
        assert!(paths["/api/projects"]["post"].is_object());
        assert!(paths["/api/projects"]["get"].is_object());
        assert!(paths["/api/projects/{id}"]["get"].is_object());
    }

    #[test]
    fn test_pretty_json_renders() {
        let json = openapi_json().unwrap();
        assert!(json.starts_with("{\n"));
        assert!(json.contains("\"openapi\": \"3.0.0\""));
    }

    #[test]
    fn test_required_fields_per_schema() {
        let doc = document();
        assert_eq!(
            required_fields(&doc, "User"),
            sorted(&["id", "telegramId", "username", "firstName", "role"])
        );
        assert_eq!(
            required_fields(&doc, "Project"),
            sorted(&["id", "name", "customerId", "presaleManagerId", "status"])
        );
        assert_eq!(
            required_fields(&doc, "Task"),
            sorted(&["id", "projectId", "title", "status"])
        );
    }

    #[test]
    fn test_nested_items_have_no_required_fields() {
        let doc = document();
        for name in ["TeamMember", "ProjectStage", "Attachment"] {
            assert!(
                required_fields(&doc, name).is_empty(),
                "{} should not list required fields",
                name
            );
        }
    }

    #[test]
    fn test_field_descriptions() {
        let doc = document();
        let schemas = &doc["components"]["schemas"];
        assert_eq!(
            schemas["User"]["properties"]["telegramId"]["description"],
            "Telegram ID пользователя"
        );
        assert_eq!(
            schemas["Project"]["properties"]["name"]["description"],
            "Название проекта"
        );
        assert_eq!(
            schemas["Project"]["properties"]["presaleManagerId"]["description"],
            "ID пресейл менеджера"
        );
        assert_eq!(
            schemas["Task"]["properties"]["title"]["description"],
            "Название задачи"
        );
        assert_eq!(
            schemas["Attachment"]["properties"]["type"]["description"],
            "Тип файла"
        );
    }
}
