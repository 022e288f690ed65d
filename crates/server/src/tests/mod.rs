// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tender_bid_persistence::Persistence;
use tokio::sync::Mutex;
use tower::ServiceExt;

use crate::{AppState, build_router};

/// Helper to create a router backed by a fresh in-memory store.
pub fn create_test_app() -> Router {
    let persistence: Persistence =
        Persistence::new_in_memory().expect("Failed to create in-memory persistence");
    build_router(AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    })
}

/// Sends one request and returns the status with the decoded body.
///
/// Bodies that are not JSON come back as a JSON string.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request: Request<Body> = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status: StatusCode = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: Value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}

/// Identifiers created by [`bootstrap`].
pub struct Seed {
    pub organization: i64,
    pub alice: i64,
    pub bob: i64,
}

/// Creates an organization, a responsible employee `alice` and an
/// unrelated employee `bob` through the setup endpoints.
pub async fn bootstrap(app: &Router) -> Seed {
    let (status, organization) = send(
        app,
        "POST",
        "/organizations",
        Some(json!({"name": "Acme", "type": "LLC"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let (_, alice) = send(
        app,
        "POST",
        "/employees",
        Some(json!({"username": "alice"})),
    )
    .await;
    let (_, bob) = send(app, "POST", "/employees", Some(json!({"username": "bob"}))).await;

    let organization: i64 = organization["id"].as_i64().unwrap();
    let alice: i64 = alice["id"].as_i64().unwrap();
    let (status, _) = send(
        app,
        "POST",
        &format!("/organizations/{organization}/responsibles"),
        Some(json!({"employee": alice})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    Seed {
        organization,
        alice,
        bob: bob["id"].as_i64().unwrap(),
    }
}

pub async fn create_tender(app: &Router, seed: &Seed) -> Value {
    let (status, tender) = send(
        app,
        "POST",
        "/tenders/new",
        Some(json!({
            "name": "A",
            "description": "original",
            "service_type": "Construction",
            "organization": seed.organization,
            "creator": seed.alice,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    tender
}

#[tokio::test]
async fn test_ping() {
    let app: Router = create_test_app();
    let (status, body) = send(&app, "GET", "/ping", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("ok"));
}

#[tokio::test]
async fn test_duplicate_employee_is_bad_request() {
    let app: Router = create_test_app();
    send(
        &app,
        "POST",
        "/employees",
        Some(json!({"username": "alice"})),
    )
    .await;
    let (status, body) = send(
        &app,
        "POST",
        "/employees",
        Some(json!({"username": "alice"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("duplicate_username"));
}

#[tokio::test]
async fn test_add_responsible_to_missing_organization() {
    let app: Router = create_test_app();
    let (status, body) = send(
        &app,
        "POST",
        "/organizations/99/responsibles",
        Some(json!({"employee": 1})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["detail"].is_string());
}
