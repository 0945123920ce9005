//! LessonForge · History Lesson Backend
//!
//! - Axum HTTP API for turning history teaching standards into lesson ideas
//! - Optional OpenAI integration (via environment variables)
//! - Templated fallback lessons whenever upstream generation is unavailable
//! - Static SPA fallback (./static/index.html)
//!
//! Important env variables:
//!   PORT               : u16 (default 3000)
//!   OPENAI_API_KEY     : enables OpenAI integration if present
//!   OPENAI_BASE_URL    : default "https://api.openai.com/v1"
//!   OPENAI_MODEL       : default "gpt-4o"
//!   LESSON_CONFIG_PATH : path to TOML config (prompt overrides)
//!   LOG_LEVEL          : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT         : "pretty" (default) or "json"

mod telemetry;
mod util;
mod domain;
mod config;
mod normalize;
mod extract;
mod grade;
mod catalog;
mod activities;
mod fallback;
mod sanitize;
mod state;
mod protocol;
mod error;
mod logic;
mod openai;
mod routes;

use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::{info, instrument};

use crate::routes::build_router;
use crate::state::AppState;

#[instrument(level = "info", skip_all)]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  // Shared application state (prompts, OpenAI client).
  let state = Arc::new(AppState::new());

  // HTTP router with routes, CORS and tracing layers.
  let app = build_router(state.clone());

  let addr: SocketAddr = std::env::var("PORT")
    .ok()
    .and_then(|p| p.parse::<u16>().ok())
    .map(|port| SocketAddr::from(([0, 0, 0, 0], port)))
    .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

  let listener = TcpListener::bind(addr).await?;
  info!(target: "lessonforge_backend", %addr, "HTTP server listening");
  axum::serve(listener, app).await?;
  Ok(())
}
