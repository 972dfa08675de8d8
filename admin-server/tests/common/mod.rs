//! Shared helpers for router-level integration tests

use admin_server::{AppState, Config, build_router};
use axum::Router;
use axum::body::Body;
use http::{Request, Response, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Build a router over a freshly seeded state
pub fn test_router() -> Router {
    let config = Config::from_env();
    let state = AppState::initialize(&config);
    build_router(state)
}

/// Send a JSON request and return (status, parsed body)
pub async fn request(
    router: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request builds");

    let response: Response<Body> = router
        .clone()
        .oneshot(request)
        .await
        .expect("router responds");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body is json")
    };
    (status, json)
}

/// Log in and return the bearer token
pub async fn login(router: &Router, username: &str, password: &str) -> String {
    let (status, body) = request(
        router,
        "POST",
        "/api/auth/login",
        None,
        Some(serde_json::json!({ "username": username, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["data"]["token"]
        .as_str()
        .expect("token in login response")
        .to_string()
}

/// Log in as the seeded super admin
pub async fn login_admin(router: &Router) -> String {
    login(router, "bob.li@company.com", "admin123").await
}
