//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages are rendered on the server and progressively enhanced by the wasm
//! bundle under `/static/pkg`. Every form posts back to a handler that
//! updates the visitor's session and redirects (post/redirect/get).

pub mod pages;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Page routes, the health check, and static assets from `static_dir`.
pub fn app(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/word/{word}", get(pages::word))
        .route("/search", post(pages::search))
        .route("/favorite", post(pages::favorite))
        .route("/healthz", get(healthz))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
