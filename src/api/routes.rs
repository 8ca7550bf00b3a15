//! HTTP API route definitions.

use axum::routing::{get, patch};
use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers::{
    complete_todo, create_todo, delete_todo, health, list_todos, AppState,
};

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(health))
        // Todo CRUD
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/:id", patch(complete_todo).delete(delete_todo))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
