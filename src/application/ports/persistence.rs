//! History persistence port interface

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::history::HistoryStore;

/// Persistence errors.
/// Load problems are absorbed by adapters (a missing or unreadable file
/// is an empty history); write failures are surfaced to the caller.
#[derive(Debug, Clone, Error)]
pub enum PersistenceError {
    #[error("Failed to create history directory: {0}")]
    CreateDir(String),

    #[error("Failed to write history file: {0}")]
    Write(String),
}

/// Port for durable storage of the history store
#[async_trait]
pub trait HistoryPersistence: Send + Sync {
    /// Load the persisted history.
    ///
    /// # Returns
    /// The stored history, or an empty store when nothing usable exists.
    /// Must never fail startup over a missing or corrupt file.
    async fn load(&self) -> Result<HistoryStore, PersistenceError>;

    /// Rewrite storage from the current store state.
    /// The in-memory store remains valid even when this fails.
    async fn save(&self, store: &HistoryStore) -> Result<(), PersistenceError>;

    /// Get the storage file path.
    fn path(&self) -> PathBuf;
}

/// Blanket implementation for boxed persistence types
#[async_trait]
impl HistoryPersistence for Box<dyn HistoryPersistence> {
    async fn load(&self) -> Result<HistoryStore, PersistenceError> {
        self.as_ref().load().await
    }

    async fn save(&self, store: &HistoryStore) -> Result<(), PersistenceError> {
        self.as_ref().save(store).await
    }

    fn path(&self) -> PathBuf {
        self.as_ref().path()
    }
}
