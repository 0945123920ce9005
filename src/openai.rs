//! Minimal OpenAI client for lesson generation.
//!
//! One call shape: chat.completions with a strict-JSON response format.
//! Calls are instrumented and log model name, latency, and payload sizes
//! (not contents).
//!
//! NOTE: We never log the API key and we keep payload truncations short.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument};

use crate::config::Prompts;
use crate::domain::GradeBand;
use crate::util::{fill_template, trunc_for_log};

#[derive(Clone)]
pub struct OpenAI {
  pub client: reqwest::Client,
  pub api_key: String,
  pub base_url: String,
  pub model: String,
}

impl OpenAI {
  /// Construct the client if we find OPENAI_API_KEY; otherwise return None.
  /// A missing key is a valid configuration (fallback mode), not an error.
  pub fn from_env() -> Option<Self> {
    let api_key = std::env::var("OPENAI_API_KEY").ok().filter(|k| !k.trim().is_empty())?;
    let base_url =
      std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| "https://api.openai.com/v1".into());
    let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".into());

    let client = reqwest::Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .ok()?;

    Some(Self { client, api_key, base_url, model })
  }

  /// JSON-object chat completion; returns the raw content text.
  #[instrument(level = "info", skip(self, system, user), fields(model = %self.model))]
  async fn chat_json(&self, system: &str, user: &str, temperature: f32) -> Result<String, String> {
    let url = format!("{}/chat/completions", self.base_url);
    let req = ChatCompletionRequest {
      model: self.model.clone(),
      messages: vec![
        ChatMessageReq { role: "system".into(), content: system.into() },
        ChatMessageReq { role: "user".into(), content: user.into() },
      ],
      temperature,
      response_format: Some(ResponseFormat { r#type: "json_object".into() }),
      max_tokens: Some(4000),
    };

    let res = self
      .client
      .post(&url)
      .header(USER_AGENT, "lessonforge-backend/0.1")
      .header(CONTENT_TYPE, "application/json")
      .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
      .json(&req)
      .send()
      .await
      .map_err(|e| format!("Network error calling AI service: {e}"))?;

    if !res.status().is_success() {
      let status = res.status();
      let body = res.text().await.unwrap_or_default();
      let detail = extract_openai_error(&body).unwrap_or_else(|| trunc_for_log(&body, 200));
      return Err(format!("{} ({detail})", describe_upstream_status(status.as_u16())));
    }

    let body: ChatCompletionResponse =
      res.json().await.map_err(|e| format!("Malformed AI service response: {e}"))?;
    if let Some(usage) = &body.usage {
      info!(
        prompt_tokens = ?usage.prompt_tokens,
        completion_tokens = ?usage.completion_tokens,
        total_tokens = ?usage.total_tokens,
        "OpenAI usage"
      );
    }
    let text = body
      .choices
      .first()
      .and_then(|c| c.message.content.clone())
      .unwrap_or_default();
    if text.trim().is_empty() {
      return Err("Empty AI service response".into());
    }
    Ok(text)
  }

  /// Generate lesson ideas for a cleaned standard. Returns the parsed
  /// payload whose `lessons` field is a non-trivial array, or a
  /// human-readable error string for the caller to log before falling back.
  #[instrument(
    level = "info",
    skip(self, prompts, cleaned, topics),
    fields(model = %self.model, standard_len = cleaned.len(), topic_count = topics.len(), grade = %band.label())
  )]
  pub async fn generate_lessons(
    &self,
    prompts: &Prompts,
    cleaned: &str,
    topics: &[String],
    band: GradeBand,
  ) -> Result<Value, String> {
    let user = fill_template(
      &prompts.lesson_user_template,
      &[
        ("standard", cleaned),
        ("topics", &topics.join(", ")),
        ("grade", band.label()),
      ],
    );

    let start = std::time::Instant::now();
    let content = self.chat_json(&prompts.lesson_system, &user, 0.7).await?;
    let elapsed = start.elapsed();

    let payload: Value = serde_json::from_str(&content)
      .map_err(|e| format!("Failed to parse AI response as JSON: {e}"))?;
    if !payload.get("lessons").map(Value::is_array).unwrap_or(false) {
      return Err("AI response is missing a lessons array".into());
    }

    info!(?elapsed, content_len = content.len(), "Lesson generation response received");
    Ok(payload)
  }
}

/// Map an upstream HTTP status to an operator-friendly message. Logged
/// server-side only; upstream failures never reach the caller directly.
pub fn describe_upstream_status(status: u16) -> String {
  match status {
    400 => "Invalid request to AI service".into(),
    401 => "AI service authentication failed".into(),
    403 => "Access to AI service denied".into(),
    429 => "AI service rate limit exceeded; try again in a few minutes".into(),
    500 | 502 | 503 | 504 => "AI service temporarily unavailable; try again later".into(),
    other => format!("AI service error ({other})"),
  }
}

// --- Chat DTOs ---

#[derive(Serialize)]
struct ChatCompletionRequest {
  model: String,
  messages: Vec<ChatMessageReq>,
  temperature: f32,
  #[serde(skip_serializing_if = "Option::is_none")]
  response_format: Option<ResponseFormat>,
  #[serde(skip_serializing_if = "Option::is_none")]
  max_tokens: Option<u32>,
}
#[derive(Serialize)]
struct ChatMessageReq {
  role: String,
  content: String,
}
#[derive(Serialize)]
struct ResponseFormat {
  #[serde(rename = "type")]
  r#type: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
  choices: Vec<ChatChoice>,
  #[serde(default)]
  usage: Option<Usage>,
}
#[derive(Deserialize)]
struct ChatChoice {
  message: ChatMessageResp,
}
#[derive(Deserialize)]
struct ChatMessageResp {
  content: Option<String>,
}
#[derive(Deserialize)]
struct Usage {
  #[serde(default)]
  prompt_tokens: Option<u32>,
  #[serde(default)]
  completion_tokens: Option<u32>,
  #[serde(default)]
  total_tokens: Option<u32>,
}

/// Try to extract a clean error message from an OpenAI error body.
fn extract_openai_error(body: &str) -> Option<String> {
  #[derive(Deserialize)]
  struct EWrap {
    error: EObj,
  }
  #[derive(Deserialize)]
  struct EObj {
    message: String,
  }
  serde_json::from_str::<EWrap>(body).ok().map(|w| w.error.message)
}
