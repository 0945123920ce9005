//! Grade level detection from free-text standards.
//!
//! Ordered pattern checks over the lower-cased raw text; first match wins.
//! The order is fixed: AP/Advanced, Elementary, Middle, College, High
//! School, then a High School default. AP runs first so a standard like
//! "Elementary through high school students will analyze AP World History"
//! lands in the AP band, and College runs before the generic High School
//! vocabulary so "freshman seminar" is not captured by "freshman".

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::GradeBand;

static AP_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"\bap\b|advanced placement|college board").expect("valid regex")
});

static ELEMENTARY_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"kindergarten|elementary|primary school|\bk\s*-\s*\d{1,2}\b|\bgrade [1-5]\b|\b[1-5](?:st|nd|rd|th) grade\b")
    .expect("valid regex")
});

static MIDDLE_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"middle school|junior high|\bgrade [6-8]\b|\b[6-8]th grade\b|\b6\s*-\s*\d{1,2}\b")
    .expect("valid regex")
});

static COLLEGE_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"college|university|undergraduate|graduate|seminar").expect("valid regex")
});

static HIGH_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"high school|secondary|\bgrade (?:9|1[0-2])\b|\b(?:9|1[0-2])th grade\b|\b9\s*-\s*12\b|freshman|sophomore|junior|senior|capstone")
    .expect("valid regex")
});

/// Classify raw (pre-clean) standard text into a grade band.
/// Total and deterministic; unrecognized text defaults to High School.
pub fn detect_grade_band(text: &str) -> GradeBand {
  let t = text.to_lowercase();
  if AP_RE.is_match(&t) {
    GradeBand::Advanced
  } else if ELEMENTARY_RE.is_match(&t) {
    GradeBand::Elementary
  } else if MIDDLE_RE.is_match(&t) {
    GradeBand::Middle
  } else if COLLEGE_RE.is_match(&t) {
    GradeBand::College
  } else if HIGH_RE.is_match(&t) {
    GradeBand::High
  } else {
    GradeBand::High
  }
}
