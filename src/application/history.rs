//! History management use case

use thiserror::Error;

use crate::domain::error::OutOfRange;
use crate::domain::history::{HistoryStore, ListSection, SnapshotView};

use super::ports::{HistoryPersistence, PersistenceError};

/// Errors from the history use case
#[derive(Debug, Clone, Error)]
pub enum HistoryServiceError {
    #[error(transparent)]
    OutOfRange(#[from] OutOfRange),

    #[error("Entry {index} is already in the saved list")]
    AlreadySaved { index: usize },

    #[error("History changed but was not persisted: {0}")]
    Persistence(#[from] PersistenceError),
}

/// Outcome of a clipboard capture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// Text was added to the front of the recent list
    Inserted,
    /// Text matched the newest recent entry; nothing changed
    DuplicateOfHead,
    /// Text was empty or oversized and was filtered out
    Rejected,
}

/// Single owner of the in-memory history.
///
/// All mutations flow through this service on one task: it applies the
/// operation to the store, then rewrites storage through the persistence
/// port. A failed write is reported but leaves the store valid, so the
/// caller can keep operating on the in-memory state.
pub struct HistoryService<P: HistoryPersistence> {
    store: HistoryStore,
    persistence: P,
}

impl<P: HistoryPersistence> HistoryService<P> {
    /// Load the persisted history and take ownership of it
    pub async fn load(persistence: P) -> Result<Self, PersistenceError> {
        let store = persistence.load().await?;
        Ok(Self { store, persistence })
    }

    /// Wrap an existing store (used by tests)
    pub fn with_store(persistence: P, store: HistoryStore) -> Self {
        Self { store, persistence }
    }

    /// Current store state
    pub fn store(&self) -> &HistoryStore {
        &self.store
    }

    /// Fresh display view: saved entries first, then recent, 1-based
    pub fn snapshot(&self) -> SnapshotView {
        self.store.snapshot()
    }

    /// Handle text delivered by the clipboard watcher.
    /// Maps to insert-recent; a capture equal to the newest recent entry
    /// is suppressed without touching storage.
    pub async fn on_clipboard_text_copied(
        &mut self,
        text: &str,
    ) -> Result<CaptureOutcome, HistoryServiceError> {
        if self.store.recent().first().is_some_and(|head| *head == *text) {
            return Ok(CaptureOutcome::DuplicateOfHead);
        }

        if !self.store.insert_recent(text) {
            return Ok(CaptureOutcome::Rejected);
        }

        self.persist().await?;
        Ok(CaptureOutcome::Inserted)
    }

    /// Promote the recent entry at the given 1-based display index to the
    /// saved list. Returns the promoted text.
    pub async fn promote(&mut self, display_index: usize) -> Result<String, HistoryServiceError> {
        let snapshot = self.snapshot();
        match snapshot.locate(display_index) {
            Some((ListSection::Saved, _)) => Err(HistoryServiceError::AlreadySaved {
                index: display_index,
            }),
            Some((ListSection::Recent, recent_index)) => {
                let text = self.store.recent()[recent_index].as_str().to_string();
                self.store.promote_to_saved(recent_index)?;
                self.persist().await?;
                Ok(text)
            }
            None => Err(OutOfRange {
                index: display_index,
                len: snapshot.len(),
            }
            .into()),
        }
    }

    /// Remove the entry at the given 1-based display index from whichever
    /// list it belongs to. Returns the removed text.
    pub async fn remove(&mut self, display_index: usize) -> Result<String, HistoryServiceError> {
        let snapshot = self.snapshot();
        let entry = match snapshot.locate(display_index) {
            Some((ListSection::Saved, index)) => self.store.remove_saved(index)?,
            Some((ListSection::Recent, index)) => self.store.remove_recent(index)?,
            None => {
                return Err(OutOfRange {
                    index: display_index,
                    len: snapshot.len(),
                }
                .into())
            }
        };

        self.persist().await?;
        Ok(entry.into_string())
    }

    async fn persist(&self) -> Result<(), PersistenceError> {
        self.persistence.save(&self.store).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    struct MockPersistence {
        saves: AtomicUsize,
        fail_writes: AtomicBool,
    }

    impl MockPersistence {
        fn new() -> Self {
            Self {
                saves: AtomicUsize::new(0),
                fail_writes: AtomicBool::new(false),
            }
        }

        fn failing() -> Self {
            let mock = Self::new();
            mock.fail_writes.store(true, Ordering::SeqCst);
            mock
        }
    }

    #[async_trait]
    impl HistoryPersistence for MockPersistence {
        async fn load(&self) -> Result<HistoryStore, PersistenceError> {
            Ok(HistoryStore::new())
        }

        async fn save(&self, _store: &HistoryStore) -> Result<(), PersistenceError> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(PersistenceError::Write("disk full".to_string()));
            }
            self.saves.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn path(&self) -> PathBuf {
            PathBuf::from("/mock/content.csv")
        }
    }

    async fn service() -> HistoryService<MockPersistence> {
        HistoryService::load(MockPersistence::new()).await.unwrap()
    }

    #[tokio::test]
    async fn capture_inserts_and_persists() {
        let mut service = service().await;
        let outcome = service.on_clipboard_text_copied("hello").await.unwrap();
        assert_eq!(outcome, CaptureOutcome::Inserted);
        assert_eq!(service.store().recent().len(), 1);
        assert_eq!(service.persistence.saves.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn duplicate_of_head_is_suppressed() {
        let mut service = service().await;
        service.on_clipboard_text_copied("hello").await.unwrap();
        let outcome = service.on_clipboard_text_copied("hello").await.unwrap();
        assert_eq!(outcome, CaptureOutcome::DuplicateOfHead);
        // No second write happened
        assert_eq!(service.persistence.saves.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn empty_capture_is_rejected_without_persisting() {
        let mut service = service().await;
        let outcome = service.on_clipboard_text_copied("").await.unwrap();
        assert_eq!(outcome, CaptureOutcome::Rejected);
        assert_eq!(service.persistence.saves.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn promote_by_display_index() {
        let mut service = service().await;
        service.on_clipboard_text_copied("older").await.unwrap();
        service.on_clipboard_text_copied("newer").await.unwrap();

        // Display index 2 is the older recent entry
        let text = service.promote(2).await.unwrap();
        assert_eq!(text, "older");
        assert_eq!(service.store().saved().len(), 1);
        assert_eq!(service.store().recent().len(), 1);

        // Promoted entry is now display index 1 (saved section)
        let err = service.promote(1).await.unwrap_err();
        assert!(matches!(
            err,
            HistoryServiceError::AlreadySaved { index: 1 }
        ));
    }

    #[tokio::test]
    async fn promote_out_of_range() {
        let mut service = service().await;
        service.on_clipboard_text_copied("only").await.unwrap();
        let err = service.promote(5).await.unwrap_err();
        assert!(matches!(err, HistoryServiceError::OutOfRange(_)));
    }

    #[tokio::test]
    async fn remove_resolves_sections() {
        let mut service = service().await;
        service.on_clipboard_text_copied("recent entry").await.unwrap();
        service.on_clipboard_text_copied("pinned entry").await.unwrap();
        service.promote(1).await.unwrap();

        // Index 1 = saved "pinned entry", index 2 = recent "recent entry"
        assert_eq!(service.remove(1).await.unwrap(), "pinned entry");
        assert_eq!(service.remove(1).await.unwrap(), "recent entry");
        assert!(service.store().is_empty());
    }

    #[tokio::test]
    async fn remove_out_of_range_leaves_store_untouched() {
        let mut service = service().await;
        service.on_clipboard_text_copied("keep me").await.unwrap();
        assert!(service.remove(2).await.is_err());
        assert_eq!(service.store().recent().len(), 1);
    }

    #[tokio::test]
    async fn write_failure_keeps_memory_state() {
        let mut service = HistoryService::with_store(MockPersistence::failing(), HistoryStore::new());
        let err = service.on_clipboard_text_copied("hello").await.unwrap_err();
        assert!(matches!(err, HistoryServiceError::Persistence(_)));
        // The capture still landed in memory
        assert_eq!(service.store().recent().len(), 1);
    }
}
