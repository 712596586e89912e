//! Local storage for the session record
//!
//! Only the signed-in user and the statistics outlive the process. The active
//! game is never stored.

use super::User;
use crate::game::Stats;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Session file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Session file {} is malformed: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// What gets persisted between runs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSession {
    pub user: Option<User>,
    pub stats: Stats,
}

pub trait SessionStore {
    /// Read the last saved record, `None` if nothing has been saved yet
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing storage cannot be read or decoded.
    fn load(&self) -> Result<Option<SavedSession>, StoreError>;

    /// Replace the saved record
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing storage cannot be written.
    fn save(&mut self, session: &SavedSession) -> Result<(), StoreError>;
}

/// Keeps the record for the lifetime of the process only
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    saved: Option<SavedSession>,
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Option<SavedSession>, StoreError> {
        Ok(self.saved.clone())
    }

    fn save(&mut self, session: &SavedSession) -> Result<(), StoreError> {
        self.saved = Some(session.clone());
        Ok(())
    }
}

/// Pretty-printed JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn json_error(&self, source: serde_json::Error) -> StoreError {
        StoreError::Json {
            path: self.path.clone(),
            source,
        }
    }
}

impl SessionStore for JsonFileStore {
    fn load(&self) -> Result<Option<SavedSession>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| self.json_error(e))
    }

    fn save(&mut self, session: &SavedSession) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let json = serde_json::to_string_pretty(session).map_err(|e| self.json_error(e))?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))
    }
}
