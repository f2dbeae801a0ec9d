//! Storage layer for the sleep logger.
//!
//! Persists the entry collection as a single JSON file holding an array of
//! `{"start_time": "<ISO-8601>", "end_time": "<ISO-8601>"}` objects. Every
//! save rewrites the full collection; there is no incremental append.
//!
//! # Concurrency
//!
//! The load-then-save pair is not protected against concurrent writers.
//! With a single user and one in-flight interaction this cannot race; a
//! second writer would make the last save win, silently dropping the other
//! append. Multi-writer support would need an explicit synchronization
//! discipline around the file.
//!
//! # Timestamp format
//!
//! Timestamps are stored as ISO 8601 text (e.g. `2024-03-01T22:30:00`),
//! the serde form of `chrono::NaiveDateTime`. Lexicographic ordering
//! matches chronological ordering and the values stay human-readable.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use sl_core::SleepEntry;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file exists but could not be read or written.
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file content is not a valid entry array.
    #[error("corrupt entry data in {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The collection could not be serialized.
    #[error("failed to encode entries: {0}")]
    Encode(#[source] serde_json::Error),
}

/// The persistence boundary for the sleep-entry collection.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Creates a store backed by the given file path.
    ///
    /// The file is not touched here; it is created on the first `save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full collection from the backing file.
    ///
    /// A missing file — including a missing parent directory — is the
    /// expected first-run state and yields an empty collection, not an
    /// error.
    pub fn load(&self) -> Result<Vec<SleepEntry>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e)
                if matches!(
                    e.kind(),
                    io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
                ) =>
            {
                tracing::debug!(path = %self.path.display(), "no entry file yet, starting empty");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let entries: Vec<SleepEntry> =
            serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
                path: self.path.clone(),
                source,
            })?;
        tracing::debug!(path = %self.path.display(), count = entries.len(), "loaded entries");
        Ok(entries)
    }

    /// Serializes the full collection to the backing file, overwriting any
    /// prior content. Creates the parent directory if missing.
    pub fn save(&self, entries: &[SleepEntry]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let json = serde_json::to_string(entries).map_err(StoreError::Encode)?;
        fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), count = entries.len(), "saved entries");
        Ok(())
    }
}
