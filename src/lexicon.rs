//! Sentiment word lists.
//!
//! A [`Lexicon`] is a closed, lowercase vocabulary loaded once and shared
//! read-only by every document in a run.

use crate::{MetricsError, MetricsResult};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// An immutable set of lowercase words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: HashSet<String>,
}

impl Lexicon {
    /// Load a whitespace-delimited word list.
    ///
    /// The file is read in full before anything is returned, so a failed
    /// read never yields a partial lexicon. Bytes that are not valid UTF-8
    /// are decoded lossily; several published opinion lexicons are Latin-1.
    pub fn load(path: &Path) -> MetricsResult<Self> {
        let bytes = fs::read(path).map_err(|e| MetricsError::resource_missing(path, e))?;
        Ok(Self::parse(&String::from_utf8_lossy(&bytes)))
    }

    /// Parse word list content.
    ///
    /// Every whitespace-separated token is a member, including the words of
    /// `;` header lines in the published opinion lexicons.
    pub fn parse(content: &str) -> Self {
        Self::from_words(content.split_whitespace())
    }

    /// Build a lexicon from in-memory words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|word| word.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        // Fast path: most lookups come from already-lowercase text.
        if !word.chars().any(char::is_uppercase) {
            return self.words.contains(word);
        }
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
