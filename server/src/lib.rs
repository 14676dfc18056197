//! Todo HTTP API service.
//!
//! # Overview
//! Five CRUD routes over a single `Todo` entity, backed by an in-memory
//! record store behind the [`store::TodoStore`] trait, with OTLP telemetry
//! and a served OpenAPI document.
//!
//! # Design
//! - [`routes`] holds one handler per endpoint; each is a pure translation
//!   from HTTP to a store call.
//! - [`store`] owns the record collection; handlers share it through
//!   `Arc<dyn TodoStore>` and never cache records across requests.
//! - [`telemetry`] is initialized once in `main` and flushed on shutdown.
//! - [`openapi`] serves a hand-maintained API description; nothing at
//!   runtime depends on it.

pub mod openapi;
pub mod routes;
pub mod store;
pub mod telemetry;
pub mod todo;

pub use routes::{app, router};
pub use store::{InMemoryStore, SharedStore, TodoStore};
pub use todo::{CreateTodo, Todo, UpdateTodo};

use tokio::net::TcpListener;

/// Serve the application on the given listener until ctrl-c.
///
/// In-flight handlers finish during shutdown; mutations already committed
/// to the store stand.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
}
