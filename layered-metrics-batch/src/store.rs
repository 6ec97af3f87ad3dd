//! Persistence of raw article text.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Keeps a copy of each document's raw text.
pub trait ArticleStore {
    fn store(&mut self, url_id: &str, text: &str) -> io::Result<()>;
}

impl<T: ArticleStore + ?Sized> ArticleStore for Box<T> {
    fn store(&mut self, url_id: &str, text: &str) -> io::Result<()> {
        (**self).store(url_id, text)
    }
}

/// Writes `<dir>/<URL_ID>.txt`.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    dir: PathBuf,
}

impl DirectoryStore {
    /// Create the store, creating `dir` if needed.
    pub fn create(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ArticleStore for DirectoryStore {
    fn store(&mut self, url_id: &str, text: &str) -> io::Result<()> {
        // Identifiers become file names; refuse anything that could leave `dir`.
        let escapes = url_id.contains(&['/', '\\'][..]) || url_id == "." || url_id == "..";
        if url_id.is_empty() || escapes {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid document identifier {:?}", url_id),
            ));
        }
        fs::write(self.dir.join(format!("{}.txt", url_id)), text)
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStore;

impl ArticleStore for NullStore {
    fn store(&mut self, _url_id: &str, _text: &str) -> io::Result<()> {
        Ok(())
    }
}
