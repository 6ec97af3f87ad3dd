//! The read-only resources shared by every document in a run.

use crate::{Lexicon, MetricsResult, SyllableTable};
use serde::Deserialize;
use std::path::PathBuf;

/// Locations of the word lists and pronouncing dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResourcePaths {
    /// Positive sentiment word list.
    pub positive: PathBuf,
    /// Negative sentiment word list.
    pub negative: PathBuf,
    /// CMU-style pronouncing dictionary.
    pub pronunciations: PathBuf,
}

impl Default for ResourcePaths {
    fn default() -> Self {
        Self {
            positive: PathBuf::from("positive-words.txt"),
            negative: PathBuf::from("negative-words.txt"),
            pronunciations: PathBuf::from("cmudict.dict"),
        }
    }
}

/// Sentiment lexicons and syllable table, loaded once.
#[derive(Debug, Clone, Default)]
pub struct Resources {
    pub positive: Lexicon,
    pub negative: Lexicon,
    pub syllables: SyllableTable,
}

impl Resources {
    pub fn new(positive: Lexicon, negative: Lexicon, syllables: SyllableTable) -> Self {
        Self {
            positive,
            negative,
            syllables,
        }
    }

    /// Load every resource, failing on the first one that cannot be read.
    pub fn load(paths: &ResourcePaths) -> MetricsResult<Self> {
        Ok(Self {
            positive: Lexicon::load(&paths.positive)?,
            negative: Lexicon::load(&paths.negative)?,
            syllables: SyllableTable::load(&paths.pronunciations)?,
        })
    }
}
