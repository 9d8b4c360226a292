//! Drives the creation form against a real API server

use taska_api::{app, AppState};
use taska_client::{ClientError, CreateProjectForm, FormView, HttpProjectsApi, ProjectsApi};

async fn spawn_api() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app(AppState::default())).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn form_creates_project_on_server() {
    let base_url = spawn_api().await;
    let api = HttpProjectsApi::new(&base_url).unwrap();

    let mut form = CreateProjectForm::new();
    form.set_fio("Ivan Petrov");
    form.set_phone("+7 900 000-00-00");
    form.set_title("Site redesign");
    form.set_description("New landing page");

    form.submit(&api).await;

    assert_eq!(form.error(), None);
    assert!(matches!(form.view(), FormView::Success(_)));

    let listed: serde_json::Value = reqwest::get(format!("{}/api/projects", base_url))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed["total"], 1);
    assert_eq!(listed["elements"][0]["name"], "Site redesign");
    assert_eq!(listed["elements"][0]["customerId"], "Ivan Petrov");
    assert_eq!(listed["elements"][0]["status"], "DRAFT");
}

#[tokio::test]
async fn server_rejection_message_reaches_the_form() {
    let base_url = spawn_api().await;
    let api = HttpProjectsApi::new(&base_url).unwrap();

    let mut form = CreateProjectForm::new();
    form.set_fio("Ivan Petrov");

    form.submit(&api).await;

    assert_eq!(form.error(), Some("name can't be blank"));
    assert_eq!(form.view(), FormView::Editing);
    assert!(!form.is_loading());
}

#[tokio::test]
async fn created_status_with_unreadable_body_is_success() {
    use axum::{http::StatusCode, routing::post, Router};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = Router::new().route(
        "/api/projects",
        post(|| async { (StatusCode::CREATED, "created") }),
    );
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let api = HttpProjectsApi::new(format!("http://{}", addr)).unwrap();
    let mut form = CreateProjectForm::new();
    form.set_fio("Ivan Petrov");
    form.set_title("Site redesign");

    form.submit(&api).await;

    assert_eq!(form.error(), None);
    assert!(matches!(form.view(), FormView::Success(_)));
}

#[tokio::test]
async fn unknown_route_has_no_message() {
    let base_url = spawn_api().await;
    let api = HttpProjectsApi::new(format!("{}/missing", base_url)).unwrap();

    let payload = taska_client::CreateProjectPayload {
        title: "Site redesign".into(),
        description: String::new(),
        customer_id: "Ivan Petrov".into(),
        team: Vec::new(),
        status: "draft".into(),
    };
    let err = api.create_project(payload).await.unwrap_err();

    assert!(matches!(err, ClientError::Api { status: 404, message: None }));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = HttpProjectsApi::new(format!("http://{}", addr)).unwrap();
    let mut form = CreateProjectForm::new();
    form.set_title("Site redesign");

    form.submit(&api).await;

    let message = form.error().unwrap();
    assert!(!message.is_empty());
    assert!(matches!(form.view(), FormView::Editing));
}
