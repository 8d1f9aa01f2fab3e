//! Router surface integration tests

mod common;

use axum::http::StatusCode;
use common::test_server;

#[tokio::test]
async fn test_welcome_page() {
    let server = test_server();

    let response = server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("Welcome to the DevConnect backend"));
}

#[tokio::test]
async fn test_unknown_route_falls_through_to_404() {
    let server = test_server();

    let response = server.get("/api/nope").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_public_profile_listing_needs_no_token() {
    let server = test_server();

    // The route is public, so the request reaches the handler and dies on
    // the dead pool - collapsed to a generic 500, never a 401.
    let response = server.get("/api/profiles/all").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["errors"][0]["msg"], "Server Error");
}

#[tokio::test]
async fn test_public_profile_read_needs_no_token() {
    let server = test_server();

    let response = server
        .get("/api/profiles/users/00000000-0000-0000-0000-000000000000")
        .await;

    // Public GET on the mixed-access path: past the (absent) authenticator,
    // onto the dead pool.
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["errors"][0]["msg"], "Server Error");
}

#[tokio::test]
async fn test_delete_on_mixed_access_path_still_requires_token() {
    let server = test_server();

    let response = server
        .delete("/api/profiles/users/00000000-0000-0000-0000-000000000000")
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["msg"], "No Token, Authentication Denied");
}
