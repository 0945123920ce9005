//! JSON handlers for the lesson API.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::logic::generate_lesson_ideas;
use crate::protocol::{GenerateIn, GenerateOut, HealthOut};
use crate::state::AppState;

pub async fn http_health() -> Json<HealthOut> {
  Json(HealthOut { ok: true })
}

#[instrument(
  level = "info",
  skip(state, body),
  fields(standard_len = body.standard.as_deref().map_or(0, str::len))
)]
pub async fn http_generate(
  State(state): State<Arc<AppState>>,
  Json(body): Json<GenerateIn>,
) -> Result<Json<GenerateOut>, ApiError> {
  let out = generate_lesson_ideas(&state, body.standard.as_deref().unwrap_or("")).await?;
  info!(
    target: "lesson",
    lessons = out.lessons.len(),
    grade = %out.detected_grade_level,
    "Lesson ideas generated"
  );
  Ok(Json(out))
}
