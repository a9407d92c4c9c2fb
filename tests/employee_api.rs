//! End-to-end HTTP tests for the employee CRUD API
//!
//! Each test serves the real router on an ephemeral port, backed by a
//! fresh in-memory database, and drives it over HTTP.

use ems_server::api;
use ems_server::db;
use ems_server::state::AppState;
use reqwest::StatusCode;
use serde_json::{Value, json};

async fn spawn_app() -> String {
    let pool = db::connect("sqlite::memory:")
        .await
        .expect("in-memory database should open");
    let app = api::create_router(AppState { pool });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral port should bind");
    let addr = listener.local_addr().expect("listener should have an addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server should run");
    });

    format!("http://{addr}")
}

async fn post_employee(
    client: &reqwest::Client,
    base: &str,
    first_name: &str,
    last_name: &str,
    email: &str,
) -> Value {
    let response = client
        .post(format!("{base}/api/employees"))
        .json(&json!({
            "firstName": first_name,
            "lastName": last_name,
            "email": email,
        }))
        .send()
        .await
        .expect("request should succeed");
    assert_eq!(response.status(), StatusCode::CREATED);
    response.json().await.expect("body should be json")
}

#[tokio::test]
async fn create_employee_returns_201_with_generated_id() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/api/employees"))
        .json(&json!({
            "firstName": "seoin",
            "lastName": "choi",
            "email": "jnh@naver.com",
        }))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.expect("body should be json");
    assert_eq!(body["firstName"], "seoin");
    assert_eq!(body["lastName"], "choi");
    assert_eq!(body["email"], "jnh@naver.com");
    assert!(body["id"].as_i64().expect("id should be an integer") > 0);
}

#[tokio::test]
async fn create_employee_with_duplicate_email_returns_409() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();
    post_employee(&client, &base, "seoin", "choi", "jnh@naver.com").await;

    let response = client
        .post(format!("{base}/api/employees"))
        .json(&json!({
            "firstName": "inseo",
            "lastName": "choi",
            "email": "jnh@naver.com",
        }))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn list_employees_returns_all_rows() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();
    post_employee(&client, &base, "seoin", "choi", "jnh@naver.com").await;
    post_employee(&client, &base, "inseo", "choi", "hnj@naver.com").await;

    let response = client
        .get(format!("{base}/api/employees"))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("body should be json");
    assert_eq!(body.as_array().expect("body should be an array").len(), 2);
}

#[tokio::test]
async fn list_employees_returns_empty_array_when_no_rows() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{base}/api/employees"))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("body should be json");
    assert!(body.as_array().expect("body should be an array").is_empty());
}

#[tokio::test]
async fn get_employee_by_id_returns_employee() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();
    let created = post_employee(&client, &base, "seoin", "choi", "jnh@naver.com").await;
    let id = created["id"].as_i64().expect("id should be an integer");

    let response = client
        .get(format!("{base}/api/employees/{id}"))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("body should be json");
    assert_eq!(body["firstName"], "seoin");
    assert_eq!(body["lastName"], "choi");
    assert_eq!(body["email"], "jnh@naver.com");
}

#[tokio::test]
async fn get_employee_by_missing_id_returns_404() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{base}/api/employees/1"))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_employee_returns_updated_fields() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();
    let created = post_employee(&client, &base, "seoin", "choi", "jnh@naver.com").await;
    let id = created["id"].as_i64().expect("id should be an integer");

    let response = client
        .put(format!("{base}/api/employees/{id}"))
        .json(&json!({
            "firstName": "inseo",
            "lastName": "choi",
            "email": "hnj@naver.com",
        }))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("body should be json");
    assert_eq!(body["id"].as_i64(), Some(id));
    assert_eq!(body["firstName"], "inseo");
    assert_eq!(body["email"], "hnj@naver.com");
}

#[tokio::test]
async fn update_missing_employee_returns_404() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .put(format!("{base}/api/employees/1"))
        .json(&json!({
            "firstName": "inseo",
            "lastName": "choi",
            "email": "hnj@naver.com",
        }))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_employee_returns_200_even_for_missing_id() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .delete(format!("{base}/api/employees/1"))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn crud_lifecycle_roundtrip() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let created = post_employee(&client, &base, "seoin", "choi", "jnh@naver.com").await;
    let id = created["id"].as_i64().expect("id should be an integer");

    let fetched: Value = client
        .get(format!("{base}/api/employees/{id}"))
        .send()
        .await
        .expect("request should succeed")
        .json()
        .await
        .expect("body should be json");
    assert_eq!(fetched["firstName"], "seoin");

    let updated: Value = client
        .put(format!("{base}/api/employees/{id}"))
        .json(&json!({
            "firstName": "inseo",
            "lastName": "choi",
            "email": "jnh@naver.com",
        }))
        .send()
        .await
        .expect("request should succeed")
        .json()
        .await
        .expect("body should be json");
    assert_eq!(updated["firstName"], "inseo");

    let deleted = client
        .delete(format!("{base}/api/employees/{id}"))
        .send()
        .await
        .expect("request should succeed");
    assert_eq!(deleted.status(), StatusCode::OK);

    let after = client
        .get(format!("{base}/api/employees/{id}"))
        .send()
        .await
        .expect("request should succeed");
    assert_eq!(after.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{base}/health"))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("body should be json");
    assert_eq!(body["status"], "ok");
}
