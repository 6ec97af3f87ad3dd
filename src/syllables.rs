//! Syllable counts from a pronouncing dictionary.
//!
//! The dictionary format is the one used by the CMU Pronouncing Dictionary:
//!
//! ```text
//! ;;; comment
//! rhythmic  R IH1 DH M IH0 K
//! record  R EH1 K ER0 D
//! record(2)  R IH0 K AO1 R D
//! ```
//!
//! Every vowel phoneme carries a stress digit, so the syllable count of a
//! pronunciation is the number of phonemes ending in a digit.

use crate::{MetricsError, MetricsResult};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Syllable count assumed for words missing from the table.
pub const FALLBACK_SYLLABLES: u32 = 1;

/// An immutable word to syllable count mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyllableTable {
    counts: HashMap<String, u32>,
}

impl SyllableTable {
    /// Load a pronouncing dictionary file.
    pub fn load(path: &Path) -> MetricsResult<Self> {
        let bytes = fs::read(path).map_err(|e| MetricsError::resource_missing(path, e))?;
        Ok(Self::parse(&String::from_utf8_lossy(&bytes)))
    }

    /// Parse dictionary content.
    ///
    /// When a word has several pronunciations, the first one registered
    /// wins and later variants are ignored.
    pub fn parse(content: &str) -> Self {
        let mut counts = HashMap::new();

        for line in content.lines() {
            if line.starts_with(";;;") {
                continue;
            }
            let line = match line.find('#') {
                Some(idx) => &line[..idx],
                None => line,
            };

            let mut fields = line.split_whitespace();
            let word = match fields.next() {
                Some(word) => strip_variant(word).to_lowercase(),
                None => continue,
            };
            let syllables = fields.filter(|phoneme| is_vowel(phoneme)).count() as u32;

            counts.entry(word).or_insert_with(|| syllables.max(1));
        }

        Self { counts }
    }

    /// Build a table from in-memory entries. Earlier entries win.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: AsRef<str>,
    {
        let mut counts = HashMap::new();
        for (word, syllables) in entries {
            counts
                .entry(word.as_ref().to_lowercase())
                .or_insert(syllables.max(1));
        }
        Self { counts }
    }

    /// Dictionary lookup without fallback.
    pub fn get(&self, word: &str) -> Option<u32> {
        self.counts.get(&word.to_lowercase()).copied()
    }

    /// Estimate the syllables in `word`, never less than one.
    pub fn count(&self, word: &str) -> u32 {
        self.get(word).unwrap_or(FALLBACK_SYLLABLES)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// `record(2)` -> `record`
fn strip_variant(word: &str) -> &str {
    match word.find('(') {
        Some(idx) if idx > 0 && word.ends_with(')') => &word[..idx],
        _ => word,
    }
}

fn is_vowel(phoneme: &str) -> bool {
    phoneme
        .chars()
        .last()
        .map_or(false, |c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
;;; # sample dictionary
RECORD  R EH1 K ER0 D
RECORD(1)  R IH0 K AO1 R D
beautiful  B Y UW1 T AH0 F AH0 L
fire  F AY1 ER0
fire(2)  F AY1 R
hmm  HH M
them  DH EH1 M # function word
";

    #[test]
    fn test_counts_stress_digits() {
        let table = SyllableTable::parse(SAMPLE);
        assert_eq!(table.count("record"), 2);
        assert_eq!(table.count("beautiful"), 3);
        assert_eq!(table.count("them"), 1);
    }

    #[test]
    fn test_first_variant_wins() {
        let table = SyllableTable::parse(SAMPLE);
        assert_eq!(table.get("fire"), Some(2));
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = SyllableTable::parse(SAMPLE);
        assert_eq!(table.count("Beautiful"), 3);
        assert_eq!(table.count("RECORD"), 2);
    }

    #[test]
    fn test_unknown_word_falls_back() {
        let table = SyllableTable::parse(SAMPLE);
        assert_eq!(table.get("rhythm"), None);
        assert_eq!(table.count("rhythm"), FALLBACK_SYLLABLES);
        assert_eq!(SyllableTable::default().count("anything"), 1);
    }

    #[test]
    fn test_vowelless_entry_counts_one() {
        let table = SyllableTable::parse(SAMPLE);
        assert_eq!(table.get("hmm"), Some(1));
    }

    #[test]
    fn test_from_entries() {
        let table = SyllableTable::from_entries(vec![("Readability", 5), ("readability", 9)]);
        assert_eq!(table.get("readability"), Some(5));
    }

    #[test]
    fn test_load_fixture() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("fixtures")
            .join("cmudict-sample.dict");
        let table = SyllableTable::load(&path).unwrap();
        assert_eq!(table.count("analysis"), 4);
        assert_eq!(table.count("rhythm"), 1);
    }

    #[test]
    fn test_missing_file() {
        let err = SyllableTable::load(Path::new("missing.dict")).unwrap_err();
        assert!(matches!(err, MetricsError::ResourceMissing { .. }));
    }
}
