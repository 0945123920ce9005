//! Application state: prompts and the optional OpenAI client.
//!
//! The pipeline itself is stateless; every request re-derives its outputs.
//! State only carries configuration resolved once at startup.

use tracing::{info, instrument};

use crate::config::{load_lesson_config_from_env, Prompts};
use crate::openai::OpenAI;

#[derive(Clone)]
pub struct AppState {
  pub openai: Option<OpenAI>,
  pub prompts: Prompts,
}

impl AppState {
  /// Build state from env: load prompt config, init the OpenAI client.
  #[instrument(level = "info", skip_all)]
  pub fn new() -> Self {
    let prompts = load_lesson_config_from_env()
      .map(|c| c.prompts)
      .unwrap_or_default();

    let openai = OpenAI::from_env();
    if let Some(oa) = &openai {
      info!(target: "lessonforge_backend", base_url = %oa.base_url, model = %oa.model, "OpenAI enabled.");
    } else {
      info!(target: "lessonforge_backend", "OpenAI disabled (no OPENAI_API_KEY). Serving fallback lessons.");
    }

    Self { openai, prompts }
  }
}
