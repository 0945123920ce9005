//! Request orchestration: validate, clean, extract, classify, generate.
//!
//! Upstream generation failures of every kind (network, auth, rate limit,
//! malformed payloads) are logged and absorbed into the templated fallback
//! path. The only error a caller can observe is invalid input.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::domain::{CleanedStandard, GradeBand, LessonIdea};
use crate::error::ApiError;
use crate::extract::extract_search_terms;
use crate::fallback::create_fallback_lessons;
use crate::grade::detect_grade_band;
use crate::normalize::clean_standard;
use crate::protocol::GenerateOut;
use crate::sanitize::sanitize_lessons;
use crate::state::AppState;
use crate::util::trunc_for_log;

pub const MIN_STANDARD_CHARS: usize = 10;
pub const MAX_STANDARD_CHARS: usize = 5000;

/// Substrings never allowed in a submitted standard.
const DISALLOWED: &[&str] = &["<script", "javascript:", "<iframe", "data:text/html"];

/// Validate a raw standard and return the trimmed text.
pub fn validate_standard(raw: &str) -> Result<String, ApiError> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return Err(ApiError::InvalidArgument(
      "standard is required and must be a non-empty string".into(),
    ));
  }
  let len = trimmed.chars().count();
  if len < MIN_STANDARD_CHARS {
    return Err(ApiError::InvalidArgument(
      "standard is too short; provide at least 10 characters".into(),
    ));
  }
  if len > MAX_STANDARD_CHARS {
    return Err(ApiError::InvalidArgument(
      "standard is too long; limit is 5000 characters".into(),
    ));
  }
  let lower = trimmed.to_lowercase();
  if DISALLOWED.iter().any(|p| lower.contains(p)) {
    return Err(ApiError::InvalidArgument("standard contains invalid content".into()));
  }
  Ok(trimmed.to_string())
}

async fn upstream_lessons(
  state: &AppState,
  standard: &CleanedStandard,
  topics: &[String],
  band: GradeBand,
) -> Option<Vec<LessonIdea>> {
  let openai = state.openai.as_ref()?;
  match openai
    .generate_lessons(&state.prompts, &standard.cleaned, topics, band)
    .await
  {
    Ok(payload) => match sanitize_lessons(&payload, band) {
      Some(lessons) => {
        info!(target: "lesson", count = lessons.len(), "Using AI-generated lessons");
        Some(lessons)
      }
      None => {
        warn!(target: "lesson", "AI payload yielded no usable lessons; falling back");
        None
      }
    },
    Err(e) => {
      error!(target: "lesson", error = %e, "Lesson generation failed; falling back");
      None
    }
  }
}

/// Full pipeline for one request. Grade detection runs over the raw input
/// so explicit grade markers survive even when deduplication rewrites them.
pub async fn generate_lesson_ideas(
  state: &Arc<AppState>,
  raw_standard: &str,
) -> Result<GenerateOut, ApiError> {
  let validated = validate_standard(raw_standard)?;

  let cleaned = clean_standard(&validated);
  let topics = extract_search_terms(&cleaned);
  let standard = CleanedStandard {
    cleaned: cleaned.clone(),
    search_context: topics.join(" "),
  };
  let band = detect_grade_band(&validated);

  info!(
    target: "lesson",
    input = %trunc_for_log(&validated, 80),
    cleaned_len = cleaned.len(),
    topic_count = topics.len(),
    grade = %band.label(),
    "Standard processed"
  );

  let lessons = match upstream_lessons(state, &standard, &topics, band).await {
    Some(lessons) => lessons,
    None => create_fallback_lessons(&standard, band),
  };

  Ok(GenerateOut {
    lessons,
    cleaned_standard: standard.cleaned,
    extracted_topics: topics,
    detected_grade_level: band.label().to_string(),
  })
}
