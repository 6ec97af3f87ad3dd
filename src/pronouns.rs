//! First person pronoun counting.
//!
//! Counting runs over the raw document text rather than the token stream,
//! so stopword filtering never hides a pronoun.

use once_cell::sync::Lazy;
use regex::Regex;

/// Personal pronouns counted for the pronoun metric.
pub const PERSONAL_PRONOUNS: &[&str] = &["I", "we", "my", "ours", "us"];

static PERSONAL_PRONOUN_REGEX: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(r"(?i)\b({})\b", PERSONAL_PRONOUNS.join("|"));
    Regex::new(&pattern).expect("Invalid personal pronoun regex")
});

/// Whole-word, case-insensitive pronoun matches in document order.
pub fn personal_pronoun_matches(text: &str) -> Vec<&str> {
    PERSONAL_PRONOUN_REGEX
        .find_iter(text)
        .map(|m| m.as_str())
        .collect()
}

/// Number of personal pronouns in `text`.
pub fn count_personal_pronouns(text: &str) -> usize {
    PERSONAL_PRONOUN_REGEX.find_iter(text).count()
}
