//! Raw document text providers.
//!
//! [`HttpSource`] downloads each URL and extracts the article itself;
//! [`DirectorySource`] reads text some earlier run already extracted.

use crate::{SourceError, WorklistEntry};
use once_cell::sync::Lazy;
use reqwest::blocking::Client;
use scraper::{Html, Selector};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

static TITLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1").expect("Invalid title selector"));
static PARAGRAPH: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p").expect("Invalid paragraph selector"));

/// Supplies the raw text of a document.
pub trait TextSource {
    fn fetch(&self, entry: &WorklistEntry) -> Result<String, SourceError>;
}

impl<T: TextSource + ?Sized> TextSource for Box<T> {
    fn fetch(&self, entry: &WorklistEntry) -> Result<String, SourceError> {
        (**self).fetch(entry)
    }
}

/// Article text of an HTML page: the first `<h1>`, a newline, then the
/// text of every `<p>` joined by single spaces.
///
/// A page without a heading or paragraphs yields only the newline.
pub fn extract_article_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let title: String = document
        .select(&TITLE)
        .next()
        .map(|h1| h1.text().collect())
        .unwrap_or_default();
    let paragraphs: Vec<String> = document
        .select(&PARAGRAPH)
        .map(|p| p.text().collect())
        .collect();

    format!("{}\n{}", title, paragraphs.join(" "))
}

/// Fetches each entry's URL over HTTP and extracts its article text.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl TextSource for HttpSource {
    fn fetch(&self, entry: &WorklistEntry) -> Result<String, SourceError> {
        let to_error = |e: reqwest::Error| SourceError::Http {
            url: entry.url.clone(),
            message: e.to_string(),
        };

        let response = self
            .client
            .get(&entry.url)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(to_error)?;
        let html = response.text().map_err(to_error)?;

        Ok(extract_article_text(&html))
    }
}

/// Reads pre-extracted text from `<dir>/<URL_ID>.txt`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, url_id: &str) -> PathBuf {
        self.dir.join(format!("{}.txt", url_id))
    }
}

impl TextSource for DirectorySource {
    fn fetch(&self, entry: &WorklistEntry) -> Result<String, SourceError> {
        let path = self.path_for(&entry.url_id);
        match fs::read(&path) {
            Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(SourceError::NotFound {
                url_id: entry.url_id.clone(),
            }),
            Err(e) => Err(SourceError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            }),
        }
    }
}

/// In-memory text keyed by URL.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    texts: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, url: impl Into<String>, text: impl Into<String>) -> Self {
        self.texts.insert(url.into(), text.into());
        self
    }
}

impl TextSource for MemorySource {
    fn fetch(&self, entry: &WorklistEntry) -> Result<String, SourceError> {
        self.texts
            .get(&entry.url)
            .cloned()
            .ok_or_else(|| SourceError::NotFound {
                url_id: entry.url_id.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_source() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a1.txt"), "Title\nBody text.").unwrap();
        let source = DirectorySource::new(dir.path());

        let entry = WorklistEntry::new("a1", "https://example.com/a1");
        assert_eq!(source.fetch(&entry).unwrap(), "Title\nBody text.");

        let missing = WorklistEntry::new("b2", "https://example.com/b2");
        assert_eq!(
            source.fetch(&missing),
            Err(SourceError::NotFound {
                url_id: "b2".to_string()
            })
        );
    }

    #[test]
    fn test_extract_article_text() {
        let html = r#"<html>
            <head><title>Ignored</title></head>
            <body>
              <h1>Quarterly <em>Review</em></h1>
              <div class="nav"><a href="/">Home</a></div>
              <p>Revenue was <b>strong</b>.</p>
              <p>Costs fell.</p>
              <h1>Second heading</h1>
            </body>
            </html>"#;

        assert_eq!(
            extract_article_text(html),
            "Quarterly Review\nRevenue was strong. Costs fell."
        );
    }

    #[test]
    fn test_extract_without_heading_or_paragraphs() {
        assert_eq!(extract_article_text("<p>Only a body.</p>"), "\nOnly a body.");
        assert_eq!(extract_article_text("<div>nothing</div>"), "\n");
    }

    #[test]
    fn test_http_source_rejects_bad_url() {
        let source = HttpSource::new(Duration::from_secs(5)).unwrap();
        let entry = WorklistEntry::new("x1", "not a url");

        match source.fetch(&entry) {
            Err(SourceError::Http { url, .. }) => assert_eq!(url, "not a url"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_boxed_source() {
        let source: Box<dyn TextSource> =
            Box::new(MemorySource::new().with_text("https://example.com/a", "Text."));
        let entry = WorklistEntry::new("a", "https://example.com/a");
        assert_eq!(source.fetch(&entry).unwrap(), "Text.");
    }

    #[test]
    fn test_memory_source_is_keyed_by_url() {
        let source = MemorySource::new().with_text("https://example.com/a", "Some text.");
        let entry = WorklistEntry::new("any-id", "https://example.com/a");
        assert_eq!(source.fetch(&entry).unwrap(), "Some text.");
        assert!(source
            .fetch(&WorklistEntry::new("any-id", "https://example.com/b"))
            .is_err());
    }
}
