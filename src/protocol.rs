//! Request/response bodies for the HTTP API.
//!
//! Wire field names are camelCase to match the frontend contract.

use serde::{Deserialize, Serialize};

use crate::domain::LessonIdea;

#[derive(Debug, Deserialize)]
pub struct GenerateIn {
  /// Optional at the wire level so missing and null both reach validation,
  /// which answers with the "required and must be a non-empty string" 400.
  #[serde(default)]
  pub standard: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateOut {
  pub lessons: Vec<LessonIdea>,
  pub cleaned_standard: String,
  pub extracted_topics: Vec<String>,
  pub detected_grade_level: String,
}

#[derive(Debug, Serialize)]
pub struct HealthOut {
  pub ok: bool,
}
