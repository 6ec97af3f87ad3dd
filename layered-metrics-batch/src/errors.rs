//! Error types for batch runs.
//!
//! [`BatchError`] aborts a run. [`SkipReason`] explains why a single
//! document produced no row; the run carries on without it.

use layered_metrics::MetricsError;
use thiserror::Error;

/// Errors that abort a batch run.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The configuration file could not be read or parsed.
    #[error("failed to load config: {path}: {message}")]
    Config { path: String, message: String },

    /// The worklist could not be read or parsed.
    #[error("failed to read worklist: {path}: {message}")]
    Worklist { path: String, message: String },

    /// The metrics table or article directory could not be written.
    #[error("failed to write output: {path}: {message}")]
    Output { path: String, message: String },

    /// The HTTP client could not be built.
    #[error("failed to set up HTTP client: {0}")]
    HttpClient(String),

    /// A lexicon or pronouncing dictionary is missing.
    #[error(transparent)]
    Resources(#[from] MetricsError),
}

/// Result type for batch operations.
pub type BatchResult<T> = Result<T, BatchError>;

/// Errors reported by a [`TextSource`](crate::TextSource).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// No text is available for the document.
    #[error("no text available for {url_id}")]
    NotFound { url_id: String },

    /// Text exists but could not be read.
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },

    /// The page could not be downloaded.
    #[error("failed to fetch {url}: {message}")]
    Http { url: String, message: String },
}

/// Why a document was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("fetch failed: {0}")]
    FetchFailed(SourceError),

    #[error("failed to store article text: {0}")]
    StoreFailed(String),

    /// Empty text, no sentences, or no analysable words.
    #[error(transparent)]
    Unscorable(#[from] MetricsError),
}
