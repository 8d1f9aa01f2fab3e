//! Token authenticator integration tests
//!
//! Every protected route sits behind the same middleware; these tests
//! drive it through the HTTP surface. The backing pool never connects, so
//! a rejection here proves the authenticator ran before any persistence
//! access.

mod common;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use common::{test_server, token_for};
use uuid::Uuid;

fn token_header() -> HeaderName {
    HeaderName::from_static("x-auth-token")
}

#[tokio::test]
async fn test_no_token_is_denied_with_exact_message() {
    let server = test_server();

    let response = server.get("/api/posts").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["msg"], "No Token, Authentication Denied");
}

#[tokio::test]
async fn test_tampered_token_is_denied_with_exact_message() {
    let server = test_server();

    let mut token = token_for(Uuid::new_v4(), "Ada");
    token.push('x');

    let response = server
        .get("/api/posts")
        .add_header(token_header(), HeaderValue::from_str(&token).unwrap())
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["msg"], "Token is not valid");
}

#[tokio::test]
async fn test_garbage_token_is_denied() {
    let server = test_server();

    let response = server
        .get("/api/users/me")
        .add_header(token_header(), HeaderValue::from_static("not.a.token"))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["msg"], "Token is not valid");
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_denied() {
    let server = test_server();

    let token = devconnect::auth::sessions::SessionKeys::new("some-other-secret")
        .issue(Uuid::new_v4(), "Mallory")
        .unwrap();

    let response = server
        .get("/api/posts")
        .add_header(token_header(), HeaderValue::from_str(&token).unwrap())
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["msg"], "Token is not valid");
}

#[tokio::test]
async fn test_valid_token_reaches_the_handler() {
    let server = test_server();

    let token = token_for(Uuid::new_v4(), "Ada");

    // An empty body fails validation inside the handler - which proves the
    // authenticator let the request through (and still no database access).
    let response = server
        .post("/api/posts")
        .add_header(token_header(), HeaderValue::from_str(&token).unwrap())
        .json(&serde_json::json!({}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["errors"][0]["msg"], "Text is required");
}

#[tokio::test]
async fn test_all_protected_routes_reject_without_token() {
    let server = test_server();

    let protected = [
        ("GET", "/api/users/me"),
        ("POST", "/api/posts"),
        ("GET", "/api/posts"),
        ("GET", "/api/posts/00000000-0000-0000-0000-000000000000"),
        ("DELETE", "/api/posts/00000000-0000-0000-0000-000000000000"),
        ("PUT", "/api/posts/like/00000000-0000-0000-0000-000000000000"),
        ("PUT", "/api/posts/unlike/00000000-0000-0000-0000-000000000000"),
        ("POST", "/api/profiles"),
        ("PUT", "/api/profiles"),
        ("GET", "/api/profiles/me"),
        ("DELETE", "/api/profiles/users/00000000-0000-0000-0000-000000000000"),
        ("PUT", "/api/profiles/experience"),
        ("DELETE", "/api/profiles/experience/00000000-0000-0000-0000-000000000000"),
        ("PUT", "/api/profiles/education"),
        ("DELETE", "/api/profiles/education/00000000-0000-0000-0000-000000000000"),
    ];

    for (method, path) in protected {
        let response = match method {
            "GET" => server.get(path).await,
            "POST" => server.post(path).json(&serde_json::json!({})).await,
            "PUT" => server.put(path).json(&serde_json::json!({})).await,
            "DELETE" => server.delete(path).await,
            other => panic!("unhandled method {other}"),
        };

        assert_eq!(
            response.status_code(),
            StatusCode::UNAUTHORIZED,
            "{method} {path} should require a token",
        );
        let body: serde_json::Value = response.json();
        assert_eq!(body["msg"], "No Token, Authentication Denied", "{method} {path}");
    }
}
