//! Request validation integration tests
//!
//! Validation runs before any persistence access; the backing pool never
//! connects, so these responses prove the check happens first. Statuses
//! follow the route contract: registration and login reject with 401,
//! everything else with 400.

mod common;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use common::{test_server, token_for};
use uuid::Uuid;

fn token_header() -> HeaderName {
    HeaderName::from_static("x-auth-token")
}

#[tokio::test]
async fn test_register_rejects_missing_fields_with_401() {
    let server = test_server();

    let response = server
        .post("/api/users/register")
        .json(&serde_json::json!({}))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors[0]["msg"], "name is required");
    assert_eq!(errors[1]["msg"], "email is required");
    assert_eq!(errors[2]["msg"], "password is required");
}

#[tokio::test]
async fn test_register_rejects_empty_strings_like_missing_fields() {
    let server = test_server();

    let response = server
        .post("/api/users/register")
        .json(&serde_json::json!({ "name": "  ", "email": "a@x.com", "password": "" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0]["param"], "name");
    assert_eq!(errors[1]["param"], "password");
}

#[tokio::test]
async fn test_login_rejects_missing_fields_with_401() {
    let server = test_server();

    let response = server
        .post("/api/users/login")
        .json(&serde_json::json!({ "email": "a@x.com" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["errors"][0]["msg"], "Password is required");
}

#[tokio::test]
async fn test_create_post_rejects_missing_fields_with_400() {
    let server = test_server();
    let token = token_for(Uuid::new_v4(), "Ada");

    let response = server
        .post("/api/posts")
        .add_header(token_header(), HeaderValue::from_str(&token).unwrap())
        .json(&serde_json::json!({ "text": "hello" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["msg"], "Image is required");
    assert_eq!(errors[0]["param"], "image");
}

#[tokio::test]
async fn test_create_profile_rejects_empty_body_per_field() {
    let server = test_server();
    let token = token_for(Uuid::new_v4(), "Ada");

    let response = server
        .post("/api/profiles")
        .add_header(token_header(), HeaderValue::from_str(&token).unwrap())
        .json(&serde_json::json!({}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 12);
    assert_eq!(errors[0]["msg"], "Company is required");
    assert_eq!(errors[6]["msg"], "GitHub Username is required");
    assert_eq!(errors[6]["param"], "githubUsername");
}

#[tokio::test]
async fn test_add_experience_rejects_missing_fields() {
    let server = test_server();
    let token = token_for(Uuid::new_v4(), "Ada");

    let response = server
        .put("/api/profiles/experience")
        .add_header(token_header(), HeaderValue::from_str(&token).unwrap())
        .json(&serde_json::json!({ "title": "Engineer", "company": "Acme" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors[0]["msg"], "Location is required");
    assert_eq!(errors[1]["msg"], "From is required");
    assert_eq!(errors[2]["msg"], "Description is required");
}

#[tokio::test]
async fn test_add_education_uses_camel_case_param_names() {
    let server = test_server();
    let token = token_for(Uuid::new_v4(), "Ada");

    let response = server
        .put("/api/profiles/education")
        .add_header(token_header(), HeaderValue::from_str(&token).unwrap())
        .json(&serde_json::json!({
            "school": "MIT",
            "degree": "BSc",
            "from": "2016",
            "description": "CS"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["msg"], "Field Of Study is required");
    assert_eq!(errors[0]["param"], "fieldOfStudy");
}
