//! Integration tests for the todo service.
//!
//! These tests require a reachable MongoDB deployment via the MONGODB_URI
//! environment variable. Run with: cargo test --test integration -- --ignored
//!
//! Note: These tests write to a dedicated test database.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use todo_service::api::{create_router, AppState};
use todo_service::config::Config;
use todo_service::todo::TodoStore;

/// Get a test config from environment, pointed at a scratch database.
fn test_config() -> Option<Config> {
    dotenvy::dotenv().ok();

    let uri = std::env::var("MONGODB_URI").ok()?;

    let config: Config = envy::from_iter(vec![
        ("MONGODB_URI".to_string(), uri),
        (
            "MONGODB_DATABASE".to_string(),
            "todo_service_test".to_string(),
        ),
    ])
    .ok()?;

    Some(config)
}

/// Fire one request at the router and decode the JSON response body.
async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            builder.body(Body::from(json.to_string())).unwrap()
        }
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, value)
}

/// Collect the ids currently in the collection.
fn ids_of(list: &Value) -> Vec<String> {
    list.as_array()
        .expect("list response should be a JSON array")
        .iter()
        .map(|todo| todo["_id"].as_str().expect("id should be hex").to_string())
        .collect()
}

/// Full create/list/complete/delete flow against a live MongoDB.
#[tokio::test]
#[ignore = "requires MONGODB_URI"]
async fn todo_crud_flow() {
    let config = match test_config() {
        Some(c) => c,
        None => {
            println!("Skipping: MONGODB_URI not set");
            return;
        }
    };

    let store = TodoStore::connect(&config).await.expect("connect failed");
    let app = create_router(AppState::new(store));

    // Baseline listing
    let (status, before) = send(&app, Method::GET, "/api/todos", None).await;
    assert_eq!(status, StatusCode::OK);
    let before_ids = ids_of(&before);

    // Create with empty body: 400, nothing inserted
    let (status, error) =
        send(&app, Method::POST, "/api/todos", Some(r#"{"body": ""}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error"], "todo body cannot be empty");

    let (_, unchanged) = send(&app, Method::GET, "/api/todos", None).await;
    assert_eq!(ids_of(&unchanged).len(), before_ids.len());

    // Create with a non-empty body: 201 with a freshly assigned id
    let (status, created) = send(
        &app,
        Method::POST,
        "/api/todos",
        Some(r#"{"body": "integration test item"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["completed"], Value::Bool(false));
    assert_eq!(created["body"], "integration test item");

    let id = created["_id"].as_str().expect("created id missing").to_string();
    assert_eq!(id.len(), 24, "id should be ObjectId hex");
    assert!(!before_ids.contains(&id), "id should be previously unseen");

    // Listing now contains the new record, not yet completed
    let (status, listed) = send(&app, Method::GET, "/api/todos", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(ids_of(&listed).contains(&id));

    let entry = listed
        .as_array()
        .unwrap()
        .iter()
        .find(|todo| todo["_id"] == Value::String(id.clone()))
        .unwrap()
        .clone();
    assert_eq!(entry["completed"], Value::Bool(false));

    // Mark completed
    let (status, ack) =
        send(&app, Method::PATCH, &format!("/api/todos/{}", id), None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(ack["success"], "true");

    let (_, listed) = send(&app, Method::GET, "/api/todos", None).await;
    let entry = listed
        .as_array()
        .unwrap()
        .iter()
        .find(|todo| todo["_id"] == Value::String(id.clone()))
        .unwrap()
        .clone();
    assert_eq!(entry["completed"], Value::Bool(true));

    // Delete removes it from subsequent listings
    let (status, ack) =
        send(&app, Method::DELETE, &format!("/api/todos/{}", id), None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(ack["deleted"], "succesfully");

    let (_, listed) = send(&app, Method::GET, "/api/todos", None).await;
    assert!(!ids_of(&listed).contains(&id));

    // Deleting again is an idempotent no-op with the same acknowledgment
    let (status, ack) =
        send(&app, Method::DELETE, &format!("/api/todos/{}", id), None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(ack["deleted"], "succesfully");
}

/// Completing a nonexistent (but well-formed) id is a no-op success.
#[tokio::test]
#[ignore = "requires MONGODB_URI"]
async fn complete_unknown_id_is_noop() {
    let config = match test_config() {
        Some(c) => c,
        None => {
            println!("Skipping: MONGODB_URI not set");
            return;
        }
    };

    let store = TodoStore::connect(&config).await.expect("connect failed");
    let app = create_router(AppState::new(store));

    // Freshly generated id that was never inserted
    let id = mongodb::bson::oid::ObjectId::new().to_hex();

    let (status, ack) =
        send(&app, Method::PATCH, &format!("/api/todos/{}", id), None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(ack["success"], "true");
}
