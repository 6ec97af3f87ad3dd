#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Batch processing for layered-metrics.
//!
//! This crate wires the pure metrics core to its surroundings: a worklist
//! of documents, a source of raw text, a store for article copies, and the
//! output table.
//!
//! ## Modules
//!
//! - [`worklist`] - Reads `URL_ID`/`URL` worklists
//! - [`source`] - Raw text providers ([`TextSource`])
//! - [`store`] - Article persistence ([`ArticleStore`])
//! - [`driver`] - The sequential [`BatchDriver`] and [`run_batch`]
//! - [`writer`] - Metrics table output (CSV or `.xlsx`)
//! - [`config`] - TOML run configuration
//! - [`errors`] - Fatal and per-document error types

pub mod config;
pub mod driver;
pub mod errors;
pub mod source;
pub mod store;
pub mod worklist;
pub mod writer;

pub use config::{BatchConfig, SourceKind};
pub use driver::{run_batch, BatchDriver, BatchReport, DocumentStage, SkippedDocument};
pub use errors::{BatchError, BatchResult, SkipReason, SourceError};
pub use source::{
    extract_article_text, DirectorySource, HttpSource, MemorySource, TextSource,
};
pub use store::{ArticleStore, DirectoryStore, NullStore};
pub use worklist::{parse_worklist, read_worklist, WorklistEntry};
pub use writer::{write_metrics, write_metrics_csv, write_metrics_table, write_metrics_xlsx};
