//! HTTP API handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use mongodb::bson::oid::ObjectId;
use serde::Serialize;
use serde_json::json;

use crate::error::ApiError;
use crate::todo::{NewTodo, Todo, TodoStore};

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// Handle to the todo collection.
    pub store: TodoStore,
}

impl AppState {
    /// Create new app state around a store.
    pub fn new(store: TodoStore) -> Self {
        Self { store }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Health check handler - always returns 200, no storage access.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// List all todos as a JSON array.
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state.store.list().await?;
    Ok(Json(todos))
}

/// Create a todo. The body must be non-empty; validation happens before
/// any storage call. Decode failures surface as opaque server errors.
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<NewTodo>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(payload) = payload?;

    if payload.body.is_empty() {
        return Err(ApiError::EmptyBody);
    }

    let todo = state.store.create(Todo::from(payload)).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// Mark a todo completed. Idempotent: succeeds even when the id matches
/// no record.
pub async fn complete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = ObjectId::parse_str(&id).map_err(|_| ApiError::InvalidId)?;

    state.store.complete(id).await?;
    Ok((StatusCode::CREATED, Json(json!({ "success": "true" }))))
}

/// Delete a todo. Idempotent: succeeds even when the id matches no record.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = ObjectId::parse_str(&id).map_err(|_| ApiError::InvalidId)?;

    state.store.delete(id).await?;
    Ok((StatusCode::CREATED, Json(json!({ "deleted": "succesfully" }))))
}
