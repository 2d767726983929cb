//! HTTP adapter for the todo store.
//!
//! # Overview
//! A thin axum layer over [`todo_core::TodoStore`]: every handler translates
//! its request into exactly one store operation and the result back into
//! JSON. The store is injected as shared state, so tests run each router
//! against an isolated collection and a persistent backend could be swapped
//! in behind the same seam.

pub mod config;
pub mod docs;
pub mod error;

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use serde::Deserialize;
use todo_core::{CreateTodo, Page, Todo, TodoId, TodoStore, DEFAULT_LIMIT};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::error::ApiError;

/// Shared handle to the process-wide store.
pub type Db = Arc<RwLock<TodoStore>>;

/// Build the application router around an injected store.
pub fn app(db: Db) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/scroll", get(scroll_todos))
        .route("/todos/{id}", patch(toggle_todo).delete(delete_todo))
        .route("/api-docs", get(docs::api_docs))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(db)
}

/// Serve the router on `listener` until the process exits.
pub async fn run(listener: TcpListener, db: Db) -> Result<(), std::io::Error> {
    axum::serve(listener, app(db)).await
}

/// Query parameters for `GET /todos`.
///
/// `_limit` is read as a raw string: a missing or non-numeric value falls
/// back to the default page size instead of rejecting the request.
#[derive(Debug, Deserialize)]
struct ListQuery {
    #[serde(rename = "_limit")]
    limit: Option<String>,
}

/// Query parameters for `GET /todos/scroll`.
#[derive(Debug, Deserialize)]
struct ScrollQuery {
    cursor: Option<String>,
    limit: Option<String>,
}

fn effective_limit(raw: Option<&str>) -> usize {
    raw.and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_LIMIT)
}

fn parse_id(raw: &str) -> Result<TodoId, ApiError> {
    raw.parse().map_err(|_| ApiError::invalid_id())
}

async fn list_todos(State(db): State<Db>, Query(query): Query<ListQuery>) -> Json<Vec<Todo>> {
    let limit = effective_limit(query.limit.as_deref());
    Json(db.read().await.list(limit))
}

async fn scroll_todos(
    State(db): State<Db>,
    Query(query): Query<ScrollQuery>,
) -> Result<Json<Page>, ApiError> {
    let cursor = match query.cursor.as_deref() {
        None => None,
        Some(raw) => Some(raw.parse::<TodoId>().map_err(|_| ApiError::invalid_cursor())?),
    };
    let limit = effective_limit(query.limit.as_deref());
    Ok(Json(db.read().await.page(cursor, limit)))
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let todo = db.write().await.create(input)?;
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn toggle_todo(State(db): State<Db>, Path(id): Path<String>) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(&id)?;
    let todo = db.write().await.toggle(id)?;
    Ok(Json(todo))
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    db.write().await.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
