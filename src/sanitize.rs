//! Sanitation of upstream generation payloads.
//!
//! The model is asked for strict JSON but is not trusted: individual
//! lessons may be missing fields, carry wrong types, or not be objects at
//! all. Field-level problems are repaired with documented defaults;
//! non-object lesson entries are dropped. Only a payload that yields no
//! usable lessons at all is reported as structurally invalid (the caller
//! then falls back to templated lessons).

use serde_json::Value;

use crate::domain::{
  GradeBand, LessonIdea, MultimediaKind, MultimediaResource, PrimarySource, Resource,
  ResourceKind, SuggestedActivity,
};

pub const DEFAULT_TITLE: &str = "Untitled Lesson";
pub const DEFAULT_DESCRIPTION: &str = "No description provided";
pub const DEFAULT_TIME_ESTIMATE: &str = "1-2 class periods";

fn str_or(obj: &Value, key: &str, default: &str) -> String {
  match obj.get(key).and_then(Value::as_str) {
    Some(s) if !s.trim().is_empty() => s.to_string(),
    _ => default.to_string(),
  }
}

/// String-array field: keep string elements, drop everything else.
/// A missing or non-array value becomes an empty list.
fn string_list(obj: &Value, key: &str) -> Vec<String> {
  obj
    .get(key)
    .and_then(Value::as_array)
    .map(|items| {
      items
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
    })
    .unwrap_or_default()
}

fn sanitize_resource(v: &Value) -> Option<Resource> {
  let obj = v.as_object()?;
  let kind = obj
    .get("type")
    .cloned()
    .and_then(|t| serde_json::from_value::<ResourceKind>(t).ok())
    .unwrap_or(ResourceKind::Article);
  Some(Resource {
    title: str_or(v, "title", "Untitled Resource"),
    url: str_or(v, "url", ""),
    kind,
    description: str_or(v, "description", ""),
  })
}

fn sanitize_multimedia(v: &Value) -> Option<MultimediaResource> {
  let obj = v.as_object()?;
  let kind = obj
    .get("type")
    .cloned()
    .and_then(|t| serde_json::from_value::<MultimediaKind>(t).ok())
    .unwrap_or(MultimediaKind::Video);
  Some(MultimediaResource {
    title: str_or(v, "title", "Untitled Media"),
    url: str_or(v, "url", ""),
    kind,
    description: str_or(v, "description", ""),
  })
}

fn sanitize_primary_source(v: &Value) -> Option<PrimarySource> {
  v.as_object()?;
  Some(PrimarySource {
    title: str_or(v, "title", "Untitled Source"),
    author: str_or(v, "author", "Unknown"),
    date: str_or(v, "date", ""),
    excerpt: str_or(v, "excerpt", ""),
    context: str_or(v, "context", ""),
  })
}

fn object_list<T>(obj: &Value, key: &str, f: impl Fn(&Value) -> Option<T>) -> Vec<T> {
  obj
    .get(key)
    .and_then(Value::as_array)
    .map(|items| items.iter().filter_map(f).collect())
    .unwrap_or_default()
}

/// Repair one lesson object. `band` supplies defaults for the grade fields
/// when the upstream omitted them.
fn sanitize_lesson(v: &Value, band: GradeBand) -> Option<LessonIdea> {
  v.as_object()?;
  Some(LessonIdea {
    title: str_or(v, "title", DEFAULT_TITLE),
    description: str_or(v, "description", DEFAULT_DESCRIPTION),
    objectives: string_list(v, "objectives"),
    activities: string_list(v, "activities"),
    suggested_activities: object_list(v, "suggestedActivities", |a| {
      serde_json::from_value::<SuggestedActivity>(a.clone()).ok()
    }),
    assessment_ideas: string_list(v, "assessmentIdeas"),
    time_estimate: str_or(v, "timeEstimate", DEFAULT_TIME_ESTIMATE),
    grade_level: str_or(v, "gradeLevel", band.code()),
    detected_grade_range: str_or(v, "detectedGradeRange", band.label()),
    resources: object_list(v, "resources", sanitize_resource),
    primary_sources: object_list(v, "primarySources", sanitize_primary_source),
    multimedia: object_list(v, "multimedia", sanitize_multimedia),
  })
}

/// Sanitize a full upstream payload. Returns `None` when the `lessons`
/// field is missing, not an array, or yields no usable lesson objects.
pub fn sanitize_lessons(payload: &Value, band: GradeBand) -> Option<Vec<LessonIdea>> {
  let lessons = payload.get("lessons")?.as_array()?;
  let cleaned: Vec<LessonIdea> =
    lessons.iter().filter_map(|l| sanitize_lesson(l, band)).collect();
  if cleaned.is_empty() {
    None
  } else {
    Some(cleaned)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn missing_fields_get_documented_defaults() {
    let payload = json!({ "lessons": [{ "title": "Ancient Civilizations" }] });
    let lessons = sanitize_lessons(&payload, GradeBand::High).expect("lessons");
    let lesson = &lessons[0];
    assert_eq!(lesson.title, "Ancient Civilizations");
    assert_eq!(lesson.description, "No description provided");
    assert!(lesson.objectives.is_empty());
    assert!(lesson.activities.is_empty());
    assert!(lesson.assessment_ideas.is_empty());
    assert_eq!(lesson.time_estimate, "1-2 class periods");
    assert_eq!(lesson.grade_level, "9-12");
    assert_eq!(lesson.detected_grade_range, "High School (9-12)");
  }

  #[test]
  fn non_object_lesson_entries_are_dropped() {
    let payload = json!({ "lessons": [null, { "title": "Valid Lesson" }, "invalid lesson"] });
    let lessons = sanitize_lessons(&payload, GradeBand::High).expect("lessons");
    assert_eq!(lessons.len(), 1);
    assert_eq!(lessons[0].title, "Valid Lesson");
  }

  #[test]
  fn wrong_typed_list_fields_become_empty() {
    let payload = json!({
      "lessons": [{
        "title": "Another Valid Lesson",
        "description": "Another valid lesson",
        "objectives": null,
        "activities": "Not an array",
        "assessmentIdeas": ["Valid assessment", 42, null]
      }]
    });
    let lessons = sanitize_lessons(&payload, GradeBand::High).expect("lessons");
    let lesson = &lessons[0];
    assert!(lesson.objectives.is_empty());
    assert!(lesson.activities.is_empty());
    assert_eq!(lesson.assessment_ideas, vec!["Valid assessment".to_string()]);
  }

  #[test]
  fn unknown_enum_values_coerce_to_defaults() {
    let payload = json!({
      "lessons": [{
        "title": "Lesson",
        "resources": [{ "title": "R", "url": "https://example.com", "type": "podcast", "description": "" }],
        "multimedia": [{ "title": "M", "url": "https://example.com", "type": "hologram", "description": "" }]
      }]
    });
    let lessons = sanitize_lessons(&payload, GradeBand::High).expect("lessons");
    assert_eq!(lessons[0].resources[0].kind, ResourceKind::Article);
    assert_eq!(lessons[0].multimedia[0].kind, MultimediaKind::Video);
  }

  #[test]
  fn valid_enum_values_survive() {
    let payload = json!({
      "lessons": [{
        "title": "Lesson",
        "resources": [{ "title": "R", "url": "u", "type": "interactive", "description": "d" }],
        "multimedia": [{ "title": "M", "url": "u", "type": "map", "description": "d" }]
      }]
    });
    let lessons = sanitize_lessons(&payload, GradeBand::High).expect("lessons");
    assert_eq!(lessons[0].resources[0].kind, ResourceKind::Interactive);
    assert_eq!(lessons[0].multimedia[0].kind, MultimediaKind::Map);
  }

  #[test]
  fn structurally_invalid_payloads_are_rejected() {
    assert!(sanitize_lessons(&json!({ "lessons": "not an array" }), GradeBand::High).is_none());
    assert!(sanitize_lessons(&json!({ "other": [] }), GradeBand::High).is_none());
    assert!(sanitize_lessons(&json!({ "lessons": [null, "x"] }), GradeBand::High).is_none());
  }

  #[test]
  fn suggested_activities_are_parsed_when_well_formed() {
    let payload = json!({
      "lessons": [{
        "title": "Lesson",
        "suggestedActivities": [
          {
            "name": "Interactive Timeline",
            "type": "timeline",
            "description": "Build a timeline",
            "pedagogicalBenefit": "Chronological thinking",
            "ageAppropriate": true
          },
          { "name": "Broken", "type": "not-a-kind" }
        ]
      }]
    });
    let lessons = sanitize_lessons(&payload, GradeBand::High).expect("lessons");
    assert_eq!(lessons[0].suggested_activities.len(), 1);
    assert_eq!(lessons[0].suggested_activities[0].name, "Interactive Timeline");
  }
}
