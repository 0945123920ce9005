//! Topic/term extraction from cleaned standard text.
//!
//! The extractor feeds both the upstream generation prompt and the search
//! context string. Passes run in a fixed order, each appending to an
//! ordered, deduplicated set:
//!   1. year/era expressions and period adjectives
//!   2. capitalized proper nouns (minus a stoplist of sentence furniture)
//!   3. fixed curriculum theme vocabulary (canonical term + match stems)
//!   4. capitalized multi-word runs, decomposed into their words
//! A rescue pass adds plain content words when the main passes found
//! almost nothing, so even vague standards yield a usable context.
//! Output is capped at 15 terms, first extracted wins.

use regex::Regex;
use std::sync::LazyLock;

/// Hard cap on extracted terms; keeps prompts and search strings bounded.
pub const MAX_TERMS: usize = 15;

/// Directive verbs only filtered near the start of the text. Matched by
/// prefix so inflections ("analyzing", "understanding") are caught too.
const DIRECTIVE_VERBS: &[&str] = &[
  "analyze", "analyse", "assess", "compare", "contrast", "create", "demonstrate",
  "describe", "design", "develop", "discuss", "evaluate", "examine", "explain",
  "explore", "identify", "interpret", "investigate", "learn", "study",
  "summarize", "teach", "trace", "understand",
];

/// Leading boilerplate dropped alongside directive verbs in the window.
const LEAD_STOPWORDS: &[&str] = &["students", "will", "should"];

/// Lower-cased words never worth emitting as topics on their own.
const STOPWORDS: &[&str] = &[
  "the", "they", "them", "their", "there", "this", "these", "those", "that",
  "students", "student", "teachers", "teacher", "when", "where", "what",
  "which", "how", "why", "during", "including", "include", "and", "for",
  "from", "with", "unit", "units", "standard", "standards", "focus", "through",
  "between", "about", "each", "using", "also", "after", "before", "while",
  "other", "such", "into", "within", "various", "factors",
];

/// Curriculum theme vocabulary: canonical output term plus the lower-case
/// stems that trigger it ("religio" covers religion/religious).
const THEMES: &[(&str, &[&str])] = &[
  ("state-building", &["state-building", "state building"]),
  ("expansion", &["expansion"]),
  ("conflict", &["conflict"]),
  ("trade", &["trade"]),
  ("cultural exchange", &["cultural exchange"]),
  ("religion", &["religio"]),
  ("empire", &["empire", "imperial"]),
  ("social structures", &["social structure"]),
  ("gender roles", &["gender role"]),
  ("family structures", &["family structure"]),
  ("economic systems", &["economic system"]),
  ("feudalism", &["feudal"]),
  ("caliphates", &["caliphate"]),
  ("migration", &["migration"]),
  ("nationalism", &["nationalism"]),
  ("revolution", &["revolution"]),
  ("industrialization", &["industrializ"]),
  ("technology", &["technolog"]),
  ("governance", &["governance", "government"]),
  ("labor systems", &["labor system"]),
];

/// Period adjectives recognized case-insensitively, emitted lower-case.
const PERIOD_ADJECTIVES: &[&str] = &["ancient", "medieval", "classical", "prehistoric", "colonial"];

static YEAR_ERA_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\b\d{3,4}\s*(?:BCE|CE|BC|AD)\b").expect("valid regex"));

static CENTURY_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\b\d{1,2}(?:st|nd|rd|th)\s+century\b").expect("valid regex"));

static CAP_WORD_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\b[A-Z][a-z]+(?:-[A-Z][a-z]+)*\b").expect("valid regex"));

static CAP_RUN_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"[A-Z][a-z]+(?: [A-Z][a-z]+)+").expect("valid regex"));

fn is_noise_word(lower: &str) -> bool {
  STOPWORDS.contains(&lower) || DIRECTIVE_VERBS.iter().any(|d| lower.starts_with(d))
}

fn push_unique(terms: &mut Vec<String>, term: &str) -> bool {
  if terms.iter().any(|t| t == term) {
    return false;
  }
  terms.push(term.to_string());
  true
}

/// Drop directive verbs and leading boilerplate, but only within the first
/// few tokens of the text. Directive-looking words further in ("strategies
/// to analyze threats") are legitimate content and stay untouched.
pub fn filter_directive_verbs(text: &str) -> String {
  const WINDOW: usize = 6;
  let mut kept: Vec<&str> = Vec::new();
  for (i, tok) in text.split_whitespace().enumerate() {
    if i < WINDOW {
      let t = tok.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase();
      if LEAD_STOPWORDS.contains(&t.as_str())
        || DIRECTIVE_VERBS.iter().any(|d| t.starts_with(d))
      {
        continue;
      }
    }
    kept.push(tok);
  }
  kept.join(" ")
}

/// Decompose capitalized multi-word runs ("Western Roman Empire") into
/// their individual capitalized words, minus sentence furniture.
pub fn extract_important_terms(text: &str) -> Vec<String> {
  let mut terms = Vec::new();
  for run in CAP_RUN_RE.find_iter(text) {
    for word in run.as_str().split(' ') {
      if word.len() >= 3 && !is_noise_word(&word.to_lowercase()) {
        push_unique(&mut terms, word);
      }
    }
  }
  terms
}

/// Full extraction pipeline over cleaned text. Deterministic; returns at
/// most [`MAX_TERMS`] terms in extraction order.
pub fn extract_search_terms(text: &str) -> Vec<String> {
  let filtered = filter_directive_verbs(text);
  let lower = filtered.to_lowercase();
  let mut terms: Vec<String> = Vec::new();

  for m in YEAR_ERA_RE.find_iter(&filtered) {
    push_unique(&mut terms, m.as_str());
  }
  for m in CENTURY_RE.find_iter(&filtered) {
    push_unique(&mut terms, m.as_str());
  }
  for adj in PERIOD_ADJECTIVES {
    if lower.contains(adj) {
      push_unique(&mut terms, adj);
    }
  }

  for m in CAP_WORD_RE.find_iter(&filtered) {
    let w = m.as_str();
    if w.len() >= 3 && !is_noise_word(&w.to_lowercase()) {
      push_unique(&mut terms, w);
    }
  }

  for (canonical, stems) in THEMES {
    if stems.iter().any(|s| lower.contains(s)) {
      push_unique(&mut terms, canonical);
    }
  }

  for word in extract_important_terms(&filtered) {
    push_unique(&mut terms, &word);
  }

  // Rescue pass: generic standards with nothing recognizable still get a
  // few plain content words rather than an empty context.
  if terms.len() < 3 {
    let mut added = 0usize;
    for tok in filtered.split_whitespace() {
      let t = tok.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase();
      if t.len() >= 6 && t.chars().all(|c| c.is_alphabetic()) && !is_noise_word(&t) {
        if push_unique(&mut terms, &t) {
          added += 1;
        }
        if added == 5 {
          break;
        }
      }
    }
  }

  terms.truncate(MAX_TERMS);
  terms
}
