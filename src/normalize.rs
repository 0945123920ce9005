//! Text normalizer for raw teaching standards.
//!
//! Standards pasted from curriculum documents frequently carry duplicated
//! lines and sentences (copy/paste artifacts, repeated boilerplate). The
//! normalizer deduplicates at both granularities while preserving first
//! occurrence order. Total function over strings; empty in, empty out.

use crate::util::collapse_whitespace;

/// Clean a raw standard: dedupe lines, then dedupe sentences split on
/// `.`/`;`, rejoin with `". "`, and collapse internal whitespace.
/// Idempotent: `clean_standard(clean_standard(x)) == clean_standard(x)`.
pub fn clean_standard(raw: &str) -> String {
  let mut lines: Vec<String> = Vec::new();
  for line in raw.lines() {
    let t = line.trim();
    if t.is_empty() {
      continue;
    }
    if !lines.iter().any(|l| l == t) {
      lines.push(t.to_string());
    }
  }
  let joined = lines.join(" ");

  let mut sentences: Vec<String> = Vec::new();
  for part in joined.split(['.', ';']) {
    let t = collapse_whitespace(part);
    if t.is_empty() {
      continue;
    }
    if !sentences.iter().any(|s| s == &t) {
      sentences.push(t);
    }
  }
  sentences.join(". ")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn removes_duplicate_lines_and_sentences() {
    let raw = "Students will analyze Ancient Rome.\nStudents will analyze Ancient Rome.\nThey will examine political structures. They will examine political structures.";
    let cleaned = clean_standard(raw);
    assert_eq!(cleaned.matches("Students will analyze Ancient Rome").count(), 1);
    assert_eq!(cleaned.matches("They will examine political structures").count(), 1);
  }

  #[test]
  fn shrinks_repetitive_input_substantially() {
    let raw = "Students will analyze Ancient Rome. Students will analyze Ancient Rome. \
The focus is on Ancient Rome and its political structures. The focus is on Ancient Rome and its political structures.";
    let cleaned = clean_standard(raw);
    assert!(cleaned.len() < raw.len() * 7 / 10);
    assert!(cleaned.contains("Ancient Rome"));
    assert!(cleaned.contains("political structures"));
  }

  #[test]
  fn is_idempotent() {
    let raw = "Students will:\n• Analyze political structures\n• Compare economic systems\n1. Examine primary sources; evaluate evidence";
    let once = clean_standard(raw);
    let twice = clean_standard(&once);
    assert_eq!(once, twice);
  }

  #[test]
  fn preserves_bullet_content_and_date_ranges() {
    let raw = "Students will:\n• Analyze political structures\n• Compare economic systems";
    let cleaned = clean_standard(raw);
    assert!(cleaned.contains("Analyze political structures"));
    assert!(cleaned.contains("Compare economic systems"));

    let ranged = "Students will analyze the period 500 BCE - 600 CE, focusing on Rome, Greece, and Persia.";
    let cleaned = clean_standard(ranged);
    assert!(cleaned.contains("500 BCE - 600 CE"));
    assert!(cleaned.contains("Rome, Greece, and Persia"));
  }

  #[test]
  fn empty_and_whitespace_input_yield_empty_output() {
    assert_eq!(clean_standard(""), "");
    assert_eq!(clean_standard("   \n\n   "), "");
  }
}
