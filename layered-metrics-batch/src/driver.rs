//! Sequential batch processing of a worklist.
//!
//! Each document moves through
//! `Pending -> Fetched -> TextExtracted -> Stored -> Tokenized -> Filtered
//! -> Scored -> Emitted` and may be skipped at any step before `Scored`.
//! A skipped document contributes no row; the batch continues with the next
//! entry and rows keep worklist order.

use crate::{
    read_worklist, write_metrics_table, ArticleStore, BatchConfig, BatchError, BatchResult,
    DirectorySource, DirectoryStore, HttpSource, NullStore, SkipReason, SourceKind, TextSource,
    WorklistEntry,
};
use layered_metrics::{MetricsCalculator, MetricsError, MetricsRow, Resources, TokenSet};
use std::time::Duration;
use tracing::{debug, info, warn};

/// The last step a document completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentStage {
    Pending,
    Fetched,
    TextExtracted,
    Stored,
    Tokenized,
    Filtered,
    Scored,
    Emitted,
}

/// A document that produced no row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDocument {
    pub url_id: String,
    pub url: String,
    /// Last stage reached before the skip.
    pub stage: DocumentStage,
    pub reason: SkipReason,
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    /// One row per scored document, in worklist order.
    pub rows: Vec<MetricsRow>,
    pub skipped: Vec<SkippedDocument>,
}

impl BatchReport {
    pub fn processed(&self) -> usize {
        self.rows.len() + self.skipped.len()
    }
}

/// Runs the metrics pipeline over worklist entries.
pub struct BatchDriver<'r, S, A> {
    calculator: MetricsCalculator<'r>,
    source: S,
    store: A,
}

impl<'r, S: TextSource, A: ArticleStore> BatchDriver<'r, S, A> {
    pub fn new(resources: &'r Resources, source: S, store: A) -> Self {
        Self {
            calculator: MetricsCalculator::new(resources),
            source,
            store,
        }
    }

    /// Process every entry in order.
    pub fn run(&mut self, worklist: &[WorklistEntry]) -> BatchReport {
        let mut report = BatchReport::default();

        for entry in worklist {
            match self.process(entry) {
                Ok(row) => {
                    debug!(url_id = %row.url_id, stage = ?DocumentStage::Emitted, "emitted row");
                    report.rows.push(row);
                }
                Err(skipped) => {
                    warn!(
                        url_id = %skipped.url_id,
                        stage = ?skipped.stage,
                        "skipping document: {}",
                        skipped.reason
                    );
                    report.skipped.push(skipped);
                }
            }
        }

        info!(
            emitted = report.rows.len(),
            skipped = report.skipped.len(),
            "batch complete"
        );
        report
    }

    /// Process a single entry.
    pub fn process(&mut self, entry: &WorklistEntry) -> Result<MetricsRow, SkippedDocument> {
        info!(url_id = %entry.url_id, url = %entry.url, "processing document");
        let skip = |stage: DocumentStage, reason: SkipReason| SkippedDocument {
            url_id: entry.url_id.clone(),
            url: entry.url.clone(),
            stage,
            reason,
        };

        let text = self
            .source
            .fetch(entry)
            .map_err(|e| skip(DocumentStage::Pending, SkipReason::FetchFailed(e)))?;

        if text.trim().is_empty() {
            return Err(skip(
                DocumentStage::Fetched,
                MetricsError::EmptyDocument.into(),
            ));
        }

        self.store.store(&entry.url_id, &text).map_err(|e| {
            skip(
                DocumentStage::TextExtracted,
                SkipReason::StoreFailed(e.to_string()),
            )
        })?;

        let tokens = TokenSet::from_text(&text);
        debug!(
            url_id = %entry.url_id,
            sentences = tokens.sentences().len(),
            words = tokens.words().len(),
            filtered = tokens.filtered().len(),
            "tokenized document"
        );

        let metrics = self
            .calculator
            .compute(&tokens)
            .map_err(|e| skip(unscored_stage(&e), e.into()))?;

        info!(
            url_id = %entry.url_id,
            stage = ?DocumentStage::Scored,
            words = metrics.word_count,
            "finished document"
        );
        Ok(MetricsRow::new(&entry.url_id, &entry.url, &metrics))
    }
}

/// Last stage completed by a document whose scoring failed with `err`.
fn unscored_stage(err: &MetricsError) -> DocumentStage {
    match err {
        MetricsError::NoSentences => DocumentStage::Tokenized,
        MetricsError::DivisionGuard => DocumentStage::Filtered,
        MetricsError::EmptyDocument | MetricsError::ResourceMissing { .. } => {
            DocumentStage::Stored
        }
    }
}

/// Run a whole batch as described by `config`.
///
/// Resources are loaded before anything else; if one is missing the run
/// stops without reading the worklist or writing any output.
pub fn run_batch(config: &BatchConfig) -> BatchResult<BatchReport> {
    let resources = Resources::load(&config.resources)?;
    debug!(
        positive = resources.positive.len(),
        negative = resources.negative.len(),
        pronunciations = resources.syllables.len(),
        "loaded resources"
    );

    let worklist = read_worklist(&config.worklist)?;
    info!(documents = worklist.len(), "loaded worklist");

    let store: Box<dyn ArticleStore> = if config.persist_articles {
        let store =
            DirectoryStore::create(&config.articles_dir).map_err(|e| BatchError::Output {
                path: config.articles_dir.display().to_string(),
                message: e.to_string(),
            })?;
        Box::new(store)
    } else {
        Box::new(NullStore)
    };

    let source: Box<dyn TextSource> = match config.source {
        SourceKind::Http => {
            let timeout = Duration::from_secs(config.timeout_secs);
            let source =
                HttpSource::new(timeout).map_err(|e| BatchError::HttpClient(e.to_string()))?;
            Box::new(source)
        }
        SourceKind::Directory => Box::new(DirectorySource::new(&config.text_dir)),
    };
    debug!(source = ?config.source, "selected text source");

    let report = BatchDriver::new(&resources, source, store).run(&worklist);

    write_metrics_table(&config.output, &report.rows)?;
    info!(path = %config.output.display(), rows = report.rows.len(), "wrote metrics table");

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemorySource, SourceError};
    use layered_metrics::{Lexicon, SyllableTable};
    use std::io;

    fn resources() -> Resources {
        Resources::new(
            Lexicon::from_words(["good", "great", "strong"]),
            Lexicon::from_words(["bad", "weak"]),
            SyllableTable::from_entries(vec![("revenue", 3), ("quarterly", 3)]),
        )
    }

    struct FailingStore;

    impl ArticleStore for FailingStore {
        fn store(&mut self, _url_id: &str, _text: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
        }
    }

    #[derive(Default)]
    struct RecordingStore {
        stored: Vec<String>,
    }

    impl ArticleStore for RecordingStore {
        fn store(&mut self, url_id: &str, _text: &str) -> io::Result<()> {
            self.stored.push(url_id.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_rows_follow_worklist_order() {
        let resources = resources();
        let source = MemorySource::new()
            .with_text("u1", "Quarterly revenue was strong.")
            .with_text("u2", "")
            .with_text("u3", "Good results. We did great!");
        let worklist = vec![
            WorklistEntry::new("1", "u1"),
            WorklistEntry::new("2", "u2"),
            WorklistEntry::new("3", "u3"),
            WorklistEntry::new("4", "u4"),
        ];

        let mut driver = BatchDriver::new(&resources, source, RecordingStore::default());
        let report = driver.run(&worklist);

        let ids: Vec<&str> = report.rows.iter().map(|r| r.url_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(report.processed(), 4);
        assert_eq!(driver.store.stored, vec!["1", "3"]);

        let first = &report.rows[0];
        assert_eq!(first.url, "u1");
        assert_eq!(first.word_count, 3);
        assert_eq!(first.complex_word_count, 2);
        assert_eq!(first.positive_score, 1);

        let third = &report.rows[1];
        assert_eq!(third.positive_score, 2);
        assert_eq!(third.personal_pronouns, 1);
    }

    #[test]
    fn test_skip_reasons() {
        let resources = resources();
        let source = MemorySource::new()
            .with_text("empty", "  \n ")
            .with_text("stopwords", "It is what it is.");
        let worklist = vec![
            WorklistEntry::new("a", "missing"),
            WorklistEntry::new("b", "empty"),
            WorklistEntry::new("c", "stopwords"),
        ];

        let report = BatchDriver::new(&resources, source, NullStore).run(&worklist);

        assert!(report.rows.is_empty());
        let outcomes: Vec<(&str, DocumentStage, &SkipReason)> = report
            .skipped
            .iter()
            .map(|s| (s.url_id.as_str(), s.stage, &s.reason))
            .collect();
        assert_eq!(
            outcomes,
            vec![
                (
                    "a",
                    DocumentStage::Pending,
                    &SkipReason::FetchFailed(SourceError::NotFound {
                        url_id: "a".to_string()
                    })
                ),
                (
                    "b",
                    DocumentStage::Fetched,
                    &SkipReason::Unscorable(MetricsError::EmptyDocument)
                ),
                (
                    "c",
                    DocumentStage::Filtered,
                    &SkipReason::Unscorable(MetricsError::DivisionGuard)
                ),
            ]
        );
    }

    #[test]
    fn test_store_failure_skips_document() {
        let resources = resources();
        let source = MemorySource::new().with_text("u1", "Good news.");
        let worklist = vec![WorklistEntry::new("1", "u1")];

        let report = BatchDriver::new(&resources, source, FailingStore).run(&worklist);

        assert!(report.rows.is_empty());
        assert_eq!(report.skipped[0].stage, DocumentStage::TextExtracted);
        assert!(matches!(
            report.skipped[0].reason,
            SkipReason::StoreFailed(_)
        ));
    }

    #[test]
    fn test_unscored_stage() {
        assert_eq!(
            unscored_stage(&MetricsError::NoSentences),
            DocumentStage::Tokenized
        );
        assert_eq!(
            unscored_stage(&MetricsError::DivisionGuard),
            DocumentStage::Filtered
        );
        assert_eq!(
            unscored_stage(&MetricsError::EmptyDocument),
            DocumentStage::Stored
        );
    }

    #[test]
    fn test_process_is_repeatable() {
        let resources = resources();
        let source = MemorySource::new().with_text("u1", "Strong revenue, weak margins. Good.");
        let entry = WorklistEntry::new("1", "u1");

        let mut driver = BatchDriver::new(&resources, source, NullStore);
        let first = driver.process(&entry).unwrap();
        let second = driver.process(&entry).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.polarity_score.to_bits(), second.polarity_score.to_bits());
    }
}
