//! Domain models used by the backend: grade bands, activity kinds,
//! suggested activities, and the lesson record itself.
//!
//! Wire names are camelCase because the original frontend contract uses
//! camelCase field names throughout.

use serde::{Deserialize, Serialize};

/// Fixed classification buckets for a teaching standard.
/// `Advanced` shares the 9-12 grade code with `High` but carries its own label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GradeBand {
  Elementary,
  Middle,
  High,
  Advanced,
  College,
}

impl GradeBand {
  /// Short grade-level code used in lesson payloads.
  pub fn code(self) -> &'static str {
    match self {
      GradeBand::Elementary => "K-5",
      GradeBand::Middle => "6-8",
      GradeBand::High | GradeBand::Advanced => "9-12",
      GradeBand::College => "College",
    }
  }

  /// Human-readable range label.
  pub fn label(self) -> &'static str {
    match self {
      GradeBand::Elementary => "Elementary (K-5)",
      GradeBand::Middle => "Middle School (6-8)",
      GradeBand::High => "High School (9-12)",
      GradeBand::Advanced => "AP/Advanced (9-12)",
      GradeBand::College => "College/University",
    }
  }
}

/// Deduplicated standard text plus the space-joined keyword string derived
/// from it. Built once per request, never persisted.
#[derive(Clone, Debug)]
pub struct CleanedStandard {
  pub cleaned: String,
  pub search_context: String,
}

/// The fixed set of classroom activity kinds the catalog can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
  Timeline,
  Crossword,
  Memory,
  Wordsearch,
  Matching,
  Coloring,
  Storytelling,
  Roleplay,
  Debate,
  Mindmap,
  Webquest,
  Simulation,
  Cartoon,
  Research,
  Discussion,
  Dbq,
  Essay,
  Presentation,
  Map,
  Journal,
}

/// One age-appropriate activity suggestion, interpolated with the topic.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedActivity {
  pub name: String,
  #[serde(rename = "type")]
  pub kind: ActivityKind,
  pub description: String,
  pub pedagogical_benefit: String,
  pub age_appropriate: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
  Article,
  Video,
  Interactive,
  Document,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Resource {
  pub title: String,
  pub url: String,
  #[serde(rename = "type")]
  pub kind: ResourceKind,
  pub description: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PrimarySource {
  pub title: String,
  pub author: String,
  pub date: String,
  pub excerpt: String,
  pub context: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MultimediaKind {
  Image,
  Video,
  Audio,
  Map,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MultimediaResource {
  pub title: String,
  pub url: String,
  #[serde(rename = "type")]
  pub kind: MultimediaKind,
  pub description: String,
}

/// A complete lesson idea, either sanitized from the upstream generation
/// service or synthesized locally. Every field is always present in the
/// final response; the sanitizer supplies defaults for anything missing.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonIdea {
  pub title: String,
  pub description: String,
  pub objectives: Vec<String>,
  pub activities: Vec<String>,
  pub suggested_activities: Vec<SuggestedActivity>,
  pub assessment_ideas: Vec<String>,
  pub time_estimate: String,
  pub grade_level: String,
  pub detected_grade_range: String,
  pub resources: Vec<Resource>,
  pub primary_sources: Vec<PrimarySource>,
  pub multimedia: Vec<MultimediaResource>,
}
