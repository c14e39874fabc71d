//! REST backend for the todo tracker.
//!
//! # Overview
//! Serves CRUD over a single `Todo` resource under `/api/v1/todos`. Writes
//! are validated before they reach the store; failures come back as
//! `{"errors": [...]}` with 400, 404 or 422.
//!
//! # Design
//! - `TodoStore` is the in-process table, shared through axum state.
//! - `app()` builds a router over a fresh store for tests; `router()` takes a
//!   store so callers can inspect it alongside HTTP calls.
//! - `run()` serves until the shutdown future resolves.

pub mod config;
pub mod error;
pub mod model;
pub mod routes;
pub mod store;
pub mod telemetry;

use std::future::Future;

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::warn;

pub use config::ServerConfig;
pub use error::ApiError;
pub use model::{CreateTodo, Todo, TodoParams, UpdateTodo, TITLE_BLANK};
pub use store::{StoreError, TodoStore};

pub const API_PREFIX: &str = "/api/v1";

pub fn app() -> Router {
    router(TodoStore::new())
}

pub fn router(store: TodoStore) -> Router {
    Router::new()
        .nest(API_PREFIX, routes::todo_routes(store))
        .layer(TraceLayer::new_for_http())
}

/// `router` plus the CORS policy for a browser client on another origin.
pub fn router_with_cors(store: TodoStore, origins: &[String]) -> Router {
    router(store).layer(cors_layer(origins))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring unparseable CORS origin");
                None
            }
        })
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::PATCH, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_until<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await
}
