mod config;
pub mod error;
mod rest;

use std::sync::Arc;

use axum::{routing::get, Router};
use dog_store::DogStore;
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;

/// Assemble the full router around an injected store.
///
/// Tests build their own (empty) store; the binary seeds one first.
pub fn build(store: Arc<DogStore>) -> Router {
    Router::new()
        .nest("/dog", rest::dog_router(store))
        .route("/health", get(|| async { "ok" }))
        .layer(TraceLayer::new_for_http())
}
