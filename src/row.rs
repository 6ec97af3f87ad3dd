//! The per-document output record.

use crate::DocumentMetrics;
use serde::Serialize;

/// One row of the output table: document identity plus its scores.
///
/// Field order matches [`MetricsRow::COLUMNS`], and the serde names are the
/// column headers, so a CSV serializer writes the table directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsRow {
    #[serde(rename = "URL_ID")]
    pub url_id: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "POSITIVE SCORE")]
    pub positive_score: usize,
    #[serde(rename = "NEGATIVE SCORE")]
    pub negative_score: usize,
    #[serde(rename = "POLARITY SCORE")]
    pub polarity_score: f64,
    #[serde(rename = "SUBJECTIVITY SCORE")]
    pub subjectivity_score: f64,
    #[serde(rename = "AVG SENTENCE LENGTH")]
    pub avg_sentence_length: f64,
    #[serde(rename = "PERCENTAGE OF COMPLEX WORDS")]
    pub percentage_complex_words: f64,
    #[serde(rename = "FOG INDEX")]
    pub fog_index: f64,
    #[serde(rename = "AVG NUMBER OF WORDS PER SENTENCE")]
    pub avg_words_per_sentence: f64,
    #[serde(rename = "COMPLEX WORD COUNT")]
    pub complex_word_count: usize,
    #[serde(rename = "WORD COUNT")]
    pub word_count: usize,
    #[serde(rename = "SYLLABLE PER WORD")]
    pub syllables_per_word: f64,
    #[serde(rename = "PERSONAL PRONOUNS")]
    pub personal_pronouns: usize,
    #[serde(rename = "AVG WORD LENGTH")]
    pub avg_word_length: f64,
}

impl MetricsRow {
    /// Output header, in column order.
    pub const COLUMNS: [&'static str; 15] = [
        "URL_ID",
        "URL",
        "POSITIVE SCORE",
        "NEGATIVE SCORE",
        "POLARITY SCORE",
        "SUBJECTIVITY SCORE",
        "AVG SENTENCE LENGTH",
        "PERCENTAGE OF COMPLEX WORDS",
        "FOG INDEX",
        "AVG NUMBER OF WORDS PER SENTENCE",
        "COMPLEX WORD COUNT",
        "WORD COUNT",
        "SYLLABLE PER WORD",
        "PERSONAL PRONOUNS",
        "AVG WORD LENGTH",
    ];

    pub fn new(url_id: impl Into<String>, url: impl Into<String>, metrics: &DocumentMetrics) -> Self {
        Self {
            url_id: url_id.into(),
            url: url.into(),
            positive_score: metrics.positive_score,
            negative_score: metrics.negative_score,
            polarity_score: metrics.polarity_score,
            subjectivity_score: metrics.subjectivity_score,
            avg_sentence_length: metrics.avg_sentence_length,
            percentage_complex_words: metrics.percentage_complex_words,
            fog_index: metrics.fog_index,
            avg_words_per_sentence: metrics.avg_words_per_sentence,
            complex_word_count: metrics.complex_word_count,
            word_count: metrics.word_count,
            syllables_per_word: metrics.syllables_per_word,
            personal_pronouns: metrics.personal_pronouns,
            avg_word_length: metrics.avg_word_length,
        }
    }

    /// Cell values as strings, in [`COLUMNS`](Self::COLUMNS) order.
    pub fn to_record(&self) -> [String; 15] {
        [
            self.url_id.clone(),
            self.url.clone(),
            self.positive_score.to_string(),
            self.negative_score.to_string(),
            self.polarity_score.to_string(),
            self.subjectivity_score.to_string(),
            self.avg_sentence_length.to_string(),
            self.percentage_complex_words.to_string(),
            self.fog_index.to_string(),
            self.avg_words_per_sentence.to_string(),
            self.complex_word_count.to_string(),
            self.word_count.to_string(),
            self.syllables_per_word.to_string(),
            self.personal_pronouns.to_string(),
            self.avg_word_length.to_string(),
        ]
    }

    /// The 13 metric cells as numbers, in column order after `URL`.
    pub fn values(&self) -> [f64; 13] {
        [
            self.positive_score as f64,
            self.negative_score as f64,
            self.polarity_score,
            self.subjectivity_score,
            self.avg_sentence_length,
            self.percentage_complex_words,
            self.fog_index,
            self.avg_words_per_sentence,
            self.complex_word_count as f64,
            self.word_count as f64,
            self.syllables_per_word,
            self.personal_pronouns as f64,
            self.avg_word_length,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_metrics() -> DocumentMetrics {
        DocumentMetrics {
            positive_score: 2,
            negative_score: 1,
            polarity_score: 0.25,
            subjectivity_score: 0.5,
            avg_sentence_length: 3.0,
            percentage_complex_words: 50.0,
            fog_index: 21.2,
            avg_words_per_sentence: 3.0,
            complex_word_count: 3,
            word_count: 6,
            syllables_per_word: 2.5,
            personal_pronouns: 4,
            avg_word_length: 7.125,
        }
    }

    #[test]
    fn test_record_follows_column_order() {
        let row = MetricsRow::new("blackassign0001", "https://example.com/a", &sample_metrics());
        let record = row.to_record();

        let pairs: Vec<String> = MetricsRow::COLUMNS
            .iter()
            .zip(record.iter())
            .map(|(column, value)| format!("{}={}", column, value))
            .collect();

        insta::assert_debug_snapshot!(pairs, @r###"
        [
            "URL_ID=blackassign0001",
            "URL=https://example.com/a",
            "POSITIVE SCORE=2",
            "NEGATIVE SCORE=1",
            "POLARITY SCORE=0.25",
            "SUBJECTIVITY SCORE=0.5",
            "AVG SENTENCE LENGTH=3",
            "PERCENTAGE OF COMPLEX WORDS=50",
            "FOG INDEX=21.2",
            "AVG NUMBER OF WORDS PER SENTENCE=3",
            "COMPLEX WORD COUNT=3",
            "WORD COUNT=6",
            "SYLLABLE PER WORD=2.5",
            "PERSONAL PRONOUNS=4",
            "AVG WORD LENGTH=7.125",
        ]
        "###);
    }

    #[test]
    fn test_values_match_record() {
        let row = MetricsRow::new("a1", "https://example.com/a", &sample_metrics());
        let record = row.to_record();

        for (value, cell) in row.values().iter().zip(record[2..].iter()) {
            assert_eq!(value.to_string(), *cell);
        }
    }
}
