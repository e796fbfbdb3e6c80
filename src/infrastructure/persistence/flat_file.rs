//! Flat-file history store adapter
//!
//! Line-oriented format, one entry per line:
//!
//! ```text
//! saved: <escaped-text>
//! recent:<escaped-text>
//! ```
//!
//! The `saved: ` prefix includes a trailing space, `recent:` does not;
//! both payloads start at byte 7. Files written by earlier versions of
//! the format load byte-identically.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::{HistoryPersistence, PersistenceError};
use crate::domain::config::default_history_file;
use crate::domain::history::{Entry, HistoryStore};

use super::escape::{escape, unescape};

/// Prefix for saved entries (the trailing space is part of the format)
pub const SAVED_PREFIX: &str = "saved: ";

/// Prefix for recent entries
pub const RECENT_PREFIX: &str = "recent:";

/// Only this many recent entries survive a restart; the in-memory cap
/// is higher.
pub const MAX_PERSISTED_RECENT: usize = 30;

/// Flat-file implementation of the history persistence port
pub struct FlatFileStore {
    path: PathBuf,
}

impl FlatFileStore {
    /// Create a store at the default data-directory location
    pub fn new() -> Self {
        Self {
            path: default_history_file(),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Render the store into file content
    fn render(store: &HistoryStore) -> String {
        let mut out = String::new();
        for entry in store.saved() {
            out.push_str(SAVED_PREFIX);
            out.push_str(&escape(entry.as_str()));
            out.push('\n');
        }
        for entry in store.recent().iter().take(MAX_PERSISTED_RECENT) {
            out.push_str(RECENT_PREFIX);
            out.push_str(&escape(entry.as_str()));
            out.push('\n');
        }
        out
    }

    /// Parse file content into a store. Lines with unknown prefixes,
    /// malformed escapes, or invalid entry text are skipped.
    fn parse(content: &str) -> HistoryStore {
        let mut saved = Vec::new();
        let mut recent = Vec::new();

        for line in content.lines() {
            if let Some(payload) = line.strip_prefix(SAVED_PREFIX) {
                if let Some(entry) = unescape(payload).and_then(Entry::new) {
                    saved.push(entry);
                }
            } else if let Some(payload) = line.strip_prefix(RECENT_PREFIX) {
                if let Some(entry) = unescape(payload).and_then(Entry::new) {
                    recent.push(entry);
                }
            }
        }

        HistoryStore::from_parts(saved, recent)
    }
}

impl Default for FlatFileStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoryPersistence for FlatFileStore {
    /// Load the history, creating the directory and an empty file on
    /// first use. A missing or unreadable file is an empty history;
    /// startup never aborts over storage problems.
    async fn load(&self) -> Result<HistoryStore, PersistenceError> {
        if !self.path.exists() {
            if let Some(parent) = self.path.parent() {
                let _ = fs::create_dir_all(parent).await;
            }
            let _ = fs::write(&self.path, "").await;
            return Ok(HistoryStore::new());
        }

        match fs::read_to_string(&self.path).await {
            Ok(content) => Ok(Self::parse(&content)),
            Err(_) => Ok(HistoryStore::new()),
        }
    }

    async fn save(&self, store: &HistoryStore) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| PersistenceError::CreateDir(e.to_string()))?;
        }

        fs::write(&self.path, Self::render(store))
            .await
            .map_err(|e| PersistenceError::Write(e.to_string()))?;

        Ok(())
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }
}
