//! End-to-end tests over the real router and a temporary SQLite file.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, SubsecRound, Utc};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt; // For oneshot()

use taskboard_api::bootstrap::app_context::{AppContext, AppServices};
use taskboard_api::bootstrap::config::Config;
use taskboard_api::infrastructure::db::{self, DbPool};
use taskboard_api::presentation::http::router;

struct TestApp {
    _dir: TempDir,
    pool: DbPool,
    app: Router,
}

impl TestApp {
    async fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let url = format!("sqlite://{}", dir.path().join("tasks.db").display());
        let pool = db::connect_pool(&url, 1).await.unwrap();
        db::ensure_schema(&pool).await.unwrap();
        let ctx = AppContext::new(Config::default(), AppServices::sqlx(pool.clone()));
        let app = router(ctx, pool.clone());
        Self {
            _dir: dir,
            pool,
            app,
        }
    }

    async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(v) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&v).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn list(&self) -> Vec<Value> {
        let (status, body) = self.send("GET", "/api/tasks", None).await;
        assert_eq!(status, StatusCode::OK);
        body.as_array().unwrap().clone()
    }
}

fn sample_task() -> Value {
    json!({
        "task": "Inspect forklifts",
        "measure": "forklifts",
        "target": 12,
        "unit": "units",
        "assignedTo": "bob",
        "assignedBy": "alice",
        "status": "pending"
    })
}

#[tokio::test]
async fn created_task_appears_in_list_with_server_timestamp() {
    let t = TestApp::new().await;
    let before = Utc::now().trunc_subsecs(3);

    let (status, created) = t.send("POST", "/api/tasks", Some(sample_task())).await;
    assert_eq!(status, StatusCode::OK);
    assert!(created["id"].as_i64().is_some());

    let listed = t.list().await;
    assert_eq!(listed.len(), 1);
    let row = &listed[0];
    for key in [
        "task",
        "measure",
        "target",
        "unit",
        "assignedTo",
        "assignedBy",
        "status",
    ] {
        assert_eq!(row[key], sample_task()[key], "field {key}");
    }
    assert_eq!(row["id"], created["id"]);
    assert_eq!(row["assignedTime"], created["assignedTime"]);

    let ts: DateTime<Utc> = row["assignedTime"].as_str().unwrap().parse().unwrap();
    assert!(ts >= before);
}

#[tokio::test]
async fn client_supplied_assigned_time_is_ignored_on_create() {
    let t = TestApp::new().await;
    let mut body = sample_task();
    body["assignedTime"] = json!("1999-01-01T00:00:00.000Z");

    let (status, created) = t.send("POST", "/api/tasks", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_ne!(created["assignedTime"], json!("1999-01-01T00:00:00.000Z"));
}

#[tokio::test]
async fn target_may_be_omitted_and_is_null() {
    let t = TestApp::new().await;
    let mut body = sample_task();
    body.as_object_mut().unwrap().remove("target");

    let (status, created) = t.send("POST", "/api/tasks", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["target"], Value::Null);
    assert_eq!(t.list().await[0]["target"], Value::Null);
}

#[tokio::test]
async fn create_without_status_is_rejected_and_writes_nothing() {
    let t = TestApp::new().await;
    t.send("POST", "/api/tasks", Some(sample_task())).await;
    let mut body = sample_task();
    body.as_object_mut().unwrap().remove("status");

    let (status, err) = t.send("POST", "/api/tasks", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(err["error"].as_str().unwrap().contains("status"));
    assert_eq!(t.list().await.len(), 1);
}

#[tokio::test]
async fn update_replaces_every_field() {
    let t = TestApp::new().await;
    let (_, created) = t.send("POST", "/api/tasks", Some(sample_task())).await;
    let id = created["id"].as_i64().unwrap();

    let update = json!({
        "task": "Inspect forklifts",
        "status": "done",
        "assignedTime": "2026-01-02T03:04:05.000Z"
    });
    let (status, echoed) = t
        .send("PUT", &format!("/api/tasks/{id}"), Some(update))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(echoed["id"], json!(id));
    assert_eq!(echoed["status"], json!("done"));
    assert_eq!(echoed["measure"], Value::Null);

    let row = &t.list().await[0];
    assert_eq!(row["status"], json!("done"));
    assert_eq!(row["assignedTime"], json!("2026-01-02T03:04:05.000Z"));
    assert_eq!(row["measure"], Value::Null);
    assert_eq!(row["target"], Value::Null);
    assert_eq!(row["assignedTo"], Value::Null);
}

#[tokio::test]
async fn update_of_unknown_id_echoes_payload() {
    let t = TestApp::new().await;
    let (status, echoed) = t
        .send("PUT", "/api/tasks/4242", Some(json!({ "task": "ghost" })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(echoed["id"], json!(4242));
    assert_eq!(echoed["task"], json!("ghost"));
    assert!(t.list().await.is_empty());
}

#[tokio::test]
async fn delete_is_idempotent() {
    let t = TestApp::new().await;
    let (_, created) = t.send("POST", "/api/tasks", Some(sample_task())).await;
    let uri = format!("/api/tasks/{}", created["id"]);

    for _ in 0..2 {
        let (status, body) = t.send("DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "deleted": true }));
    }
    assert!(t.list().await.is_empty());
}

#[tokio::test]
async fn non_numeric_id_is_a_json_client_error() {
    let t = TestApp::new().await;
    let (status, body) = t.send("DELETE", "/api/tasks/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn malformed_body_is_a_json_client_error() {
    let t = TestApp::new().await;
    let request = Request::builder()
        .method("POST")
        .uri("/api/tasks")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = t.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn storage_failure_is_a_server_error_with_text() {
    let t = TestApp::new().await;
    sqlx::query("DROP TABLE tasks").execute(&t.pool).await.unwrap();

    let (status, body) = t.send("GET", "/api/tasks", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("tasks"));
}

#[tokio::test]
async fn register_then_login() {
    let t = TestApp::new().await;
    let (status, user) = t
        .send(
            "POST",
            "/api/register",
            Some(json!({ "username": "alice", "password": "pw1", "role": "admin" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["username"], json!("alice"));
    assert_eq!(user["role"], json!("admin"));

    let (status, logged_in) = t
        .send(
            "POST",
            "/api/login",
            Some(json!({ "username": "alice", "password": "pw1" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(logged_in["id"], user["id"]);
    assert_eq!(logged_in["role"], json!("admin"));
    assert_eq!(logged_in.as_object().unwrap().len(), 3);
}

#[tokio::test]
async fn wrong_password_and_unknown_user_look_the_same() {
    let t = TestApp::new().await;
    t.send(
        "POST",
        "/api/register",
        Some(json!({ "username": "alice", "password": "pw1", "role": "worker" })),
    )
    .await;

    let (wrong_status, wrong) = t
        .send(
            "POST",
            "/api/login",
            Some(json!({ "username": "alice", "password": "wrongpw" })),
        )
        .await;
    let (unknown_status, unknown) = t
        .send(
            "POST",
            "/api/login",
            Some(json!({ "username": "mallory", "password": "pw1" })),
        )
        .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong, unknown);
}

#[tokio::test]
async fn stored_password_is_not_plaintext() {
    let t = TestApp::new().await;
    t.send(
        "POST",
        "/api/register",
        Some(json!({ "username": "alice", "password": "pw1", "role": "admin" })),
    )
    .await;

    let stored: String = sqlx::query_scalar("SELECT password FROM users WHERE username = 'alice'")
        .fetch_one(&t.pool)
        .await
        .unwrap();
    assert_ne!(stored, "pw1");
    assert!(!stored.contains("pw1"));
}

#[tokio::test]
async fn duplicate_registration_is_rejected() {
    let t = TestApp::new().await;
    let first = json!({ "username": "alice", "password": "pw1", "role": "admin" });
    let (status, _) = t.send("POST", "/api/register", Some(first)).await;
    assert_eq!(status, StatusCode::OK);

    let second = json!({ "username": "alice", "password": "other", "role": "worker" });
    let (status, err) = t.send("POST", "/api/register", Some(second)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["error"], json!("Username already exists"));

    let (status, user) = t
        .send(
            "POST",
            "/api/login",
            Some(json!({ "username": "alice", "password": "pw1" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["role"], json!("admin"));
}

#[tokio::test]
async fn register_requires_all_fields() {
    let t = TestApp::new().await;
    let (status, err) = t
        .send(
            "POST",
            "/api/register",
            Some(json!({ "username": "alice", "password": "pw1" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(err["error"].as_str().unwrap().contains("role"));
}

#[tokio::test]
async fn health_reports_ok() {
    let t = TestApp::new().await;
    let (status, body) = t.send("GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn openapi_document_lists_task_routes() {
    let t = TestApp::new().await;
    let (status, doc) = t.send("GET", "/api/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/tasks"].is_object());
    assert!(doc["paths"]["/api/tasks/{id}"].is_object());
    assert!(doc["paths"]["/api/login"].is_object());
}

#[tokio::test]
async fn task_writes_surface_storage_failures_as_server_errors() {
    let t = TestApp::new().await;
    sqlx::query("DROP TABLE tasks").execute(&t.pool).await.unwrap();

    let attempts = [
        ("POST", "/api/tasks", Some(sample_task())),
        ("PUT", "/api/tasks/1", Some(sample_task())),
        ("DELETE", "/api/tasks/1", None),
    ];
    for (method, uri, body) in attempts {
        let (status, err) = t.send(method, uri, body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{method} {uri}");
        let text = err["error"].as_str().unwrap();
        assert!(text.contains("no such table"), "{method} {uri}: {text}");
    }
}

#[tokio::test]
async fn health_is_degraded_without_tasks_table() {
    let t = TestApp::new().await;
    sqlx::query("DROP TABLE tasks").execute(&t.pool).await.unwrap();

    let (status, body) = t.send("GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("degraded"));
    assert_eq!(body["missing_tables"], json!(["tasks"]));
}

#[tokio::test]
async fn unknown_path_is_a_json_not_found() {
    let t = TestApp::new().await;
    let (status, body) = t.send("GET", "/api/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Not found" }));
}

#[tokio::test]
async fn unsupported_method_is_a_json_error() {
    let t = TestApp::new().await;
    for (method, uri) in [
        ("PATCH", "/api/tasks"),
        ("GET", "/api/tasks/1"),
        ("GET", "/api/login"),
    ] {
        let (status, body) = t.send(method, uri, None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{method} {uri}");
        assert_eq!(body, json!({ "error": "Method not allowed" }));
    }
}
