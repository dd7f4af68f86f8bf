//! Whole-document JSON store for analysis records.
//!
//! Every mutation is load-modify-save over a single pretty-printed file;
//! there is no partial-update path and no cross-process locking. Single
//! writer only. A missing backing file reads as an empty store; a malformed
//! one is an error the caller must surface, never silently replaced.

use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use uuid::Uuid;

use crate::models::record::{Record, StoreDocument};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("store file {} is not valid JSON: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize store document: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("record {0} not found")]
    RecordNotFound(Uuid),
}

#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonStore { path: path.into() }
    }

    /// Reads the full store. A missing backing file is an empty store, not
    /// an error; a malformed one propagates as `StoreError::Parse`.
    pub fn load(&self) -> Result<StoreDocument, StoreError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(StoreDocument::default())
            }
            Err(e) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };
        serde_json::from_slice(&bytes).map_err(|e| StoreError::Parse {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Rewrites the full store. The document is written to a temp file in
    /// the same directory and persisted over the backing file, so a crash
    /// mid-write cannot leave a half-serialized store behind.
    pub fn save(&self, doc: &StoreDocument) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(doc).map_err(StoreError::Serialize)?;
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(io_err)?;
        tmp.write_all(&bytes).map_err(io_err)?;
        tmp.persist(&self.path)
            .map_err(|e| io_err(e.error))
            .map(|_| ())
    }

    /// Appends a record to the end of the ordered sequence.
    pub fn append(&self, record: Record) -> Result<(), StoreError> {
        let mut doc = self.load()?;
        doc.users.push(record);
        self.save(&doc)
    }

    /// Returns the ordered record sequence from the current store.
    pub fn list(&self) -> Result<Vec<Record>, StoreError> {
        Ok(self.load()?.users)
    }

    /// Removes the record with the given id and returns it. An unknown id
    /// errors without rewriting the store.
    pub fn remove(&self, id: Uuid) -> Result<Record, StoreError> {
        let mut doc = self.load()?;
        let index = doc
            .users
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::RecordNotFound(id))?;
        let removed = doc.users.remove(index);
        self.save(&doc)?;
        Ok(removed)
    }
}
