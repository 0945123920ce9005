//! HTTP surface: router assembly and handlers.

pub mod http;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router: JSON API plus the static SPA files.
pub fn build_router(state: Arc<AppState>) -> Router {
  let cors = CorsLayer::new()
    .allow_origin(Any)
    .allow_methods(Any)
    .allow_headers(Any);

  let api = Router::new()
    .route("/health", get(http::http_health))
    .route("/lesson/generate", post(http::http_generate))
    .with_state(state);

  let static_files = ServeDir::new("./static")
    .not_found_service(ServeFile::new("./static/index.html"));

  Router::new()
    .nest("/api/v1", api)
    .fallback_service(static_files)
    .layer(cors)
    .layer(TraceLayer::new_for_http())
}
