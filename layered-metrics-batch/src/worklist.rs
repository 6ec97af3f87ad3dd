//! Worklist loading.
//!
//! A worklist is a CSV table with `URL_ID` and `URL` columns. Other columns
//! are ignored.

use crate::{BatchError, BatchResult};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io;
use std::path::Path;

/// A document to process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorklistEntry {
    /// Opaque caller-supplied identifier.
    #[serde(rename = "URL_ID")]
    pub url_id: String,
    #[serde(rename = "URL")]
    pub url: String,
}

impl WorklistEntry {
    pub fn new(url_id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            url_id: url_id.into(),
            url: url.into(),
        }
    }
}

/// Load a worklist file, keeping file order.
pub fn read_worklist(path: &Path) -> BatchResult<Vec<WorklistEntry>> {
    let to_error = |message: String| BatchError::Worklist {
        path: path.display().to_string(),
        message,
    };
    let file = File::open(path).map_err(|e| to_error(e.to_string()))?;
    parse_worklist(file).map_err(|e| to_error(e.to_string()))
}

/// Parse worklist CSV from any reader.
pub fn parse_worklist<R: io::Read>(reader: R) -> Result<Vec<WorklistEntry>, csv::Error> {
    let mut csv = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let entries = csv.deserialize().collect::<Result<Vec<_>, _>>()?;
    Ok(entries)
}
