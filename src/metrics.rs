//! Sentiment and readability scores for a single document.
//!
//! All ratios are computed over the filtered word sequence of a
//! [`TokenSet`]. Degenerate documents are rejected rather than scored:
//! no sentences gives [`MetricsError::NoSentences`], no filtered words gives
//! [`MetricsError::DivisionGuard`].

use crate::pronouns::count_personal_pronouns;
use crate::{MetricsError, MetricsResult, Resources, TokenSet};
use serde::Serialize;

/// Added to the polarity and subjectivity denominators.
pub const SENTIMENT_EPSILON: f64 = 0.000001;

/// Words with at least this many syllables count as complex.
pub const COMPLEX_WORD_SYLLABLES: u32 = 3;

/// Gunning fog scale factor.
pub const FOG_SCALE: f64 = 0.4;

/// The thirteen scores computed for a document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DocumentMetrics {
    pub positive_score: usize,
    pub negative_score: usize,
    /// `(pos - neg) / (pos + neg + ε)`, within (-1, 1).
    pub polarity_score: f64,
    /// `(pos + neg) / (words + ε)`, within [0, 1).
    pub subjectivity_score: f64,
    pub avg_sentence_length: f64,
    pub percentage_complex_words: f64,
    pub fog_index: f64,
    /// Same value as `avg_sentence_length`; reported as its own column.
    pub avg_words_per_sentence: f64,
    pub complex_word_count: usize,
    pub word_count: usize,
    pub syllables_per_word: f64,
    pub personal_pronouns: usize,
    /// Mean length in characters, original casing preserved.
    pub avg_word_length: f64,
}

/// Scores documents against a shared set of [`Resources`].
#[derive(Debug, Clone, Copy)]
pub struct MetricsCalculator<'r> {
    resources: &'r Resources,
}

impl<'r> MetricsCalculator<'r> {
    pub fn new(resources: &'r Resources) -> Self {
        Self { resources }
    }

    pub fn resources(&self) -> &'r Resources {
        self.resources
    }

    /// Tokenize, filter and score raw document text.
    pub fn analyze(&self, text: &str) -> MetricsResult<DocumentMetrics> {
        if text.trim().is_empty() {
            return Err(MetricsError::EmptyDocument);
        }
        self.compute(&TokenSet::from_text(text))
    }

    /// Score an already tokenized document.
    pub fn compute(&self, tokens: &TokenSet<'_>) -> MetricsResult<DocumentMetrics> {
        let sentence_count = tokens.sentences().len();
        if sentence_count == 0 {
            return Err(MetricsError::NoSentences);
        }

        let words = tokens.filtered();
        if words.is_empty() {
            return Err(MetricsError::DivisionGuard);
        }
        let word_count = words.len();

        let Resources {
            positive,
            negative,
            syllables,
        } = self.resources;

        let positive_score = words.iter().filter(|w| positive.contains(w)).count();
        let negative_score = words.iter().filter(|w| negative.contains(w)).count();
        let sentiment_total = (positive_score + negative_score) as f64;
        let polarity_score =
            (positive_score as f64 - negative_score as f64) / (sentiment_total + SENTIMENT_EPSILON);
        let subjectivity_score = sentiment_total / (word_count as f64 + SENTIMENT_EPSILON);

        let avg_sentence_length = word_count as f64 / sentence_count as f64;

        let mut complex_word_count = 0;
        let mut total_syllables: u64 = 0;
        let mut total_chars = 0;
        for word in words {
            let count = syllables.count(word);
            if count >= COMPLEX_WORD_SYLLABLES {
                complex_word_count += 1;
            }
            total_syllables += u64::from(count);
            total_chars += word.chars().count();
        }

        let percentage_complex_words = complex_word_count as f64 / word_count as f64 * 100.0;
        let fog_index = FOG_SCALE * (avg_sentence_length + percentage_complex_words);

        Ok(DocumentMetrics {
            positive_score,
            negative_score,
            polarity_score,
            subjectivity_score,
            avg_sentence_length,
            percentage_complex_words,
            fog_index,
            avg_words_per_sentence: avg_sentence_length,
            complex_word_count,
            word_count,
            syllables_per_word: total_syllables as f64 / word_count as f64,
            personal_pronouns: count_personal_pronouns(tokens.text()),
            avg_word_length: total_chars as f64 / word_count as f64,
        })
    }
}
