//! Route handlers: each one translates an HTTP request into a store call
//! and maps the result onto a status code.
//!
//! Handlers never hold records across requests; the store is the single
//! owner of the collection. Malformed bodies and non-integer path ids are
//! rejected by the `Json` and `Path` extractors before handler code runs.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::openapi;
use crate::store::{InMemoryStore, SharedStore};
use crate::todo::{CreateTodo, Todo, UpdateTodo};

/// Build the application router with a fresh in-memory store.
pub fn app() -> Router {
    router(Arc::new(InMemoryStore::new()))
}

/// Build the application router against any store implementation.
pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/todoitems", get(list_todos).post(create_todo))
        .route("/todoitems/complete", get(list_completed))
        .route(
            "/todoitems/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .route("/openapi.json", get(openapi::openapi_spec))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

async fn list_todos(State(store): State<SharedStore>) -> Json<Vec<Todo>> {
    Json(store.list().await)
}

async fn list_completed(State(store): State<SharedStore>) -> Json<Vec<Todo>> {
    Json(store.list_completed().await)
}

async fn get_todo(
    State(store): State<SharedStore>,
    Path(id): Path<i64>,
) -> Result<Json<Todo>, StatusCode> {
    store.find_by_id(id).await.map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn create_todo(
    State(store): State<SharedStore>,
    Json(input): Json<CreateTodo>,
) -> impl IntoResponse {
    let todo = store.add(input).await;
    info!(id = todo.id, "todo created");
    let location = format!("/todoitems/{}", todo.id);
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(todo),
    )
}

async fn update_todo(
    State(store): State<SharedStore>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateTodo>,
) -> Result<StatusCode, StatusCode> {
    match store.update(id, input.name, input.is_complete).await {
        Some(_) => {
            info!(id, "todo updated");
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(StatusCode::NOT_FOUND),
    }
}

async fn delete_todo(
    State(store): State<SharedStore>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    if store.remove(id).await {
        info!(id, "todo deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}
