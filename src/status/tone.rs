//! Shared positive/attention predicate for every displayed status label.

use serde::Serialize;

/// Words that mark a label as affirming.
const POSITIVE_WORDS: &[&str] = &["normal", "typical", "active", "mild", "balanced"];

/// Qualifiers that flip the following positive word ("Less Active", "Not Normal").
const NEGATORS: &[&str] = &["less", "not", "non"];

/// How a status label should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Attention,
}

impl Tone {
    pub fn of(label: &str) -> Self {
        if is_positive(label) {
            Self::Positive
        } else {
            Self::Attention
        }
    }
}

/// A label is positive when it contains a positive word as a whole word
/// (case-insensitive) that is not directly preceded by a negator.
///
/// Whole-word matching is what keeps "Atypical" and "Abnormal" out.
pub fn is_positive(label: &str) -> bool {
    let lower = label.to_lowercase();
    let mut prev: Option<&str> = None;
    for word in lower.split(|c: char| !c.is_alphanumeric()).filter(|w| !w.is_empty()) {
        if POSITIVE_WORDS.contains(&word) && !prev.is_some_and(|p| NEGATORS.contains(&p)) {
            return true;
        }
        prev = Some(word);
    }
    false
}

#[cfg(test)]
#[path = "tone_test.rs"]
mod tests;
