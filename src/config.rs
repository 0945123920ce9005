//! Loading prompt configuration from TOML.
//!
//! See `LessonConfig` and `Prompts` for the expected schema.

use serde::Deserialize;
use tracing::{error, info};

#[derive(Clone, Debug, Deserialize, Default)]
pub struct LessonConfig {
  #[serde(default)]
  pub prompts: Prompts,
}

/// Prompts used by the generation client. Defaults match the production
/// curriculum-designer instruction; override in TOML to tune tone or the
/// requested lesson structure.
#[derive(Clone, Debug, Deserialize)]
pub struct Prompts {
  pub lesson_system: String,
  pub lesson_user_template: String,
}

impl Default for Prompts {
  fn default() -> Self {
    Self {
      lesson_system: r#"You are an expert history teacher and curriculum designer. Generate comprehensive lesson ideas based on history teaching standards. For each lesson, provide:

1. Clear learning objectives aligned with the standard
2. Engaging activities and teaching strategies
3. Assessment ideas
4. Realistic time estimates
5. Appropriate grade level
6. Relevant resources with actual URLs when possible
7. Primary source excerpts with proper attribution
8. Multimedia resources

Focus on creating diverse, engaging lessons that help students understand historical concepts, develop critical thinking skills, and connect past events to present-day issues.

Return your response as a JSON object with a "lessons" array containing 3-5 lesson ideas. Each lesson should follow this structure:
{
  "title": "Lesson title",
  "description": "Brief description of the lesson",
  "objectives": ["Learning objective 1", "Learning objective 2"],
  "activities": ["Activity 1", "Activity 2"],
  "assessmentIdeas": ["Assessment idea 1", "Assessment idea 2"],
  "timeEstimate": "Duration estimate",
  "gradeLevel": "Grade level range",
  "resources": [
    {"title": "Resource title", "url": "https://example.com", "type": "article|video|interactive|document", "description": "Brief description"}
  ],
  "primarySources": [
    {"title": "Document title", "author": "Author name", "date": "Date or time period", "excerpt": "Relevant excerpt", "context": "Historical context explanation"}
  ],
  "multimedia": [
    {"title": "Media title", "url": "https://example.com", "type": "image|video|audio|map", "description": "Description of the media"}
  ]
}"#
        .into(),
      lesson_user_template: "Generate lesson ideas for this history teaching standard: {standard}\n\nKey topics: {topics}\nTarget grade: {grade}".into(),
    }
  }
}

/// Attempt to load `LessonConfig` from LESSON_CONFIG_PATH. On any
/// parsing/IO error, returns None and the defaults apply.
pub fn load_lesson_config_from_env() -> Option<LessonConfig> {
  let path = std::env::var("LESSON_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match toml::from_str::<LessonConfig>(&s) {
      Ok(cfg) => {
        info!(target: "lessonforge_backend", %path, "Loaded lesson config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "lessonforge_backend", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "lessonforge_backend", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_prompts_request_strict_lesson_json() {
    let p = Prompts::default();
    assert!(p.lesson_system.contains("\"lessons\" array"));
    assert!(p.lesson_user_template.contains("{standard}"));
    assert!(p.lesson_user_template.contains("{topics}"));
    assert!(p.lesson_user_template.contains("{grade}"));
  }

  #[test]
  fn prompts_can_be_overridden_from_toml() {
    let cfg: LessonConfig = toml::from_str(
      r#"
[prompts]
lesson_system = "system"
lesson_user_template = "standard: {standard}"
"#,
    )
    .expect("parse");
    assert_eq!(cfg.prompts.lesson_system, "system");
  }
}
