//! Caller-facing API errors.
//!
//! Only invalid input ever surfaces as an error; upstream generation
//! failures are absorbed into the fallback path and never reach here.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
  /// Bad request input; the message names the reason (empty, too short,
  /// too long, disallowed content).
  InvalidArgument(String),
}

impl std::fmt::Display for ApiError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ApiError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
    }
  }
}

impl std::error::Error for ApiError {}

#[derive(Serialize)]
struct ErrorBody {
  code: &'static str,
  message: String,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::InvalidArgument(message) => (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody { code: "invalid_argument", message }),
      )
        .into_response(),
    }
  }
}
