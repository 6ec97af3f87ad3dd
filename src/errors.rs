//! Error types for metric computation.
//!
//! Resource errors are fatal to a run; the remaining variants describe
//! degenerate documents that a caller skips.

use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading resources or scoring a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricsError {
    /// A lexicon or pronunciation dictionary could not be read.
    #[error("failed to load resource: {path}: {message}")]
    ResourceMissing { path: String, message: String },

    /// The document text is empty or whitespace only.
    #[error("document text is empty")]
    EmptyDocument,

    /// Tokenization produced no sentences.
    #[error("no sentences found in document")]
    NoSentences,

    /// No words survived filtering, so per-word averages are undefined.
    #[error("no analysable words remain after filtering")]
    DivisionGuard,
}

impl MetricsError {
    pub(crate) fn resource_missing(path: &Path, err: impl std::fmt::Display) -> Self {
        MetricsError::ResourceMissing {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    /// Returns true for errors that should abort a whole run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, MetricsError::ResourceMissing { .. })
    }
}

/// Result type for metric operations.
pub type MetricsResult<T> = Result<T, MetricsError>;
