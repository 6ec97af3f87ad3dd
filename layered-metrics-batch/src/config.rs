//! Batch run configuration.
//!
//! Loaded from TOML. Every field has a default, so an empty file (or no
//! file at all) describes a run in the current directory:
//!
//! ```toml
//! worklist = "Input.csv"
//! output = "Output Data Structure.xlsx"
//! source = "http"
//! timeout_secs = 30
//! text_dir = "texts"
//! articles_dir = "articles"
//! persist_articles = true
//!
//! [resources]
//! positive = "positive-words.txt"
//! negative = "negative-words.txt"
//! pronunciations = "cmudict.dict"
//! ```

use crate::{BatchError, BatchResult};
use layered_metrics::ResourcePaths;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Where document text comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Download each URL and extract its article.
    #[default]
    Http,
    /// Read `<URL_ID>.txt` from `text_dir`.
    Directory,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatchConfig {
    /// CSV worklist with `URL_ID` and `URL` columns.
    pub worklist: PathBuf,
    /// Destination of the metrics table; `.xlsx` writes a workbook,
    /// anything else CSV.
    pub output: PathBuf,
    pub source: SourceKind,
    /// Request timeout for the HTTP source.
    pub timeout_secs: u64,
    /// Directory of pre-extracted `<URL_ID>.txt` files.
    pub text_dir: PathBuf,
    /// Where raw article text is copied.
    pub articles_dir: PathBuf,
    pub persist_articles: bool,
    pub resources: ResourcePaths,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            worklist: PathBuf::from("Input.csv"),
            output: PathBuf::from("Output Data Structure.xlsx"),
            source: SourceKind::Http,
            timeout_secs: 30,
            text_dir: PathBuf::from("texts"),
            articles_dir: PathBuf::from("articles"),
            persist_articles: true,
            resources: ResourcePaths::default(),
        }
    }
}

impl BatchConfig {
    /// Load from a TOML file. Relative paths are resolved against the
    /// directory containing the file.
    pub fn load(path: &Path) -> BatchResult<Self> {
        let to_error = |message: String| BatchError::Config {
            path: path.display().to_string(),
            message,
        };
        let content = fs::read_to_string(path).map_err(|e| to_error(e.to_string()))?;
        let config = Self::parse(&content).map_err(|e| to_error(e.to_string()))?;

        Ok(match path.parent() {
            Some(base) if !base.as_os_str().is_empty() => config.relative_to(base),
            _ => config,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Prefix every relative path with `base`.
    pub fn relative_to(self, base: &Path) -> Self {
        let join = |path: PathBuf| {
            if path.is_absolute() {
                path
            } else {
                base.join(path)
            }
        };
        Self {
            worklist: join(self.worklist),
            output: join(self.output),
            source: self.source,
            timeout_secs: self.timeout_secs,
            text_dir: join(self.text_dir),
            articles_dir: join(self.articles_dir),
            persist_articles: self.persist_articles,
            resources: ResourcePaths {
                positive: join(self.resources.positive),
                negative: join(self.resources.negative),
                pronunciations: join(self.resources.pronunciations),
            },
        }
    }
}
