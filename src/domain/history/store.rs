//! History store: the saved and recent entry lists

use crate::domain::error::OutOfRange;

use super::entry::Entry;
use super::view::SnapshotView;

/// Maximum number of recent entries held in memory.
/// The oldest entry is dropped when a new capture overflows the cap.
pub const MAX_RECENT_ENTRIES: usize = 100;

/// The two ordered entry lists and their invariants.
///
/// Invariant: the union of saved and recent contains no duplicate entry
/// value, and a saved entry never appears in recent. Every mutating
/// operation runs the reconciliation pass before returning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryStore {
    saved: Vec<Entry>,
    recent: Vec<Entry>,
}

impl HistoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from loaded lists, enforcing the invariants.
    /// Duplicates are reconciled and the recent list is capped.
    pub fn from_parts(saved: Vec<Entry>, recent: Vec<Entry>) -> Self {
        let mut store = Self { saved, recent };
        store.reconcile();
        store.recent.truncate(MAX_RECENT_ENTRIES);
        store
    }

    /// User-pinned entries, in display order
    pub fn saved(&self) -> &[Entry] {
        &self.saved
    }

    /// Captured entries, newest first
    pub fn recent(&self) -> &[Entry] {
        &self.recent
    }

    /// Whether both lists are empty
    pub fn is_empty(&self) -> bool {
        self.saved.is_empty() && self.recent.is_empty()
    }

    /// Insert captured clipboard text at the front of the recent list.
    /// Empty or oversized text is silently ignored; returns whether the
    /// text was accepted. Overflow past the cap drops the oldest entry.
    pub fn insert_recent(&mut self, text: &str) -> bool {
        let Some(entry) = Entry::new(text) else {
            return false;
        };

        self.recent.insert(0, entry);
        if self.recent.len() > MAX_RECENT_ENTRIES {
            self.recent.pop();
        }
        self.reconcile();
        true
    }

    /// Move the recent entry at `recent_index` to the end of the saved list
    pub fn promote_to_saved(&mut self, recent_index: usize) -> Result<(), OutOfRange> {
        if recent_index >= self.recent.len() {
            return Err(OutOfRange {
                index: recent_index,
                len: self.recent.len(),
            });
        }

        let entry = self.recent.remove(recent_index);
        self.saved.push(entry);
        self.reconcile();
        Ok(())
    }

    /// Remove the saved entry at `index`
    pub fn remove_saved(&mut self, index: usize) -> Result<Entry, OutOfRange> {
        if index >= self.saved.len() {
            return Err(OutOfRange {
                index,
                len: self.saved.len(),
            });
        }

        let entry = self.saved.remove(index);
        self.reconcile();
        Ok(entry)
    }

    /// Remove the recent entry at `index`
    pub fn remove_recent(&mut self, index: usize) -> Result<Entry, OutOfRange> {
        if index >= self.recent.len() {
            return Err(OutOfRange {
                index,
                len: self.recent.len(),
            });
        }

        let entry = self.recent.remove(index);
        self.reconcile();
        Ok(entry)
    }

    /// Combined ordered view for display: saved entries first, then
    /// recent, with freshly computed 1-based indices.
    pub fn snapshot(&self) -> SnapshotView {
        SnapshotView::build(&self.saved, &self.recent)
    }

    /// Deduplication pass. Scans back-to-front so earlier indices stay
    /// stable: a saved entry survives only at its first occurrence; a
    /// recent entry is dropped if it repeats an earlier recent entry or
    /// exists anywhere in the saved list.
    fn reconcile(&mut self) {
        for i in (0..self.saved.len()).rev() {
            let first = self.saved.iter().position(|e| *e == self.saved[i]);
            if first != Some(i) {
                self.saved.remove(i);
            }
        }

        for i in (0..self.recent.len()).rev() {
            let first = self.recent.iter().position(|e| *e == self.recent[i]);
            if first != Some(i) || self.saved.contains(&self.recent[i]) {
                self.recent.remove(i);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::history::entry::MAX_ENTRY_CHARS;

    fn entry(text: &str) -> Entry {
        Entry::new(text).unwrap()
    }

    #[test]
    fn insert_puts_newest_first() {
        let mut store = HistoryStore::new();
        assert!(store.insert_recent("first"));
        assert!(store.insert_recent("second"));
        assert_eq!(store.recent()[0], *"second");
        assert_eq!(store.recent()[1], *"first");
    }

    #[test]
    fn insert_rejects_empty() {
        let mut store = HistoryStore::new();
        assert!(!store.insert_recent(""));
        assert!(store.recent().is_empty());
    }

    #[test]
    fn insert_rejects_oversized() {
        let mut store = HistoryStore::new();
        let text = "x".repeat(MAX_ENTRY_CHARS);
        assert!(!store.insert_recent(&text));
        assert!(store.recent().is_empty());
    }

    #[test]
    fn capacity_drops_oldest() {
        let mut store = HistoryStore::new();
        for i in 0..=MAX_RECENT_ENTRIES {
            store.insert_recent(&format!("item {}", i));
        }
        assert_eq!(store.recent().len(), MAX_RECENT_ENTRIES);
        // "item 0" was the first insert, so it is the one evicted
        assert!(!store.recent().iter().any(|e| *e == *"item 0"));
        assert_eq!(store.recent()[0], *"item 100");
    }

    #[test]
    fn reinserting_existing_text_keeps_one_copy() {
        let mut store = HistoryStore::new();
        store.insert_recent("alpha");
        store.insert_recent("beta");
        store.insert_recent("alpha");
        // The fresh insert is the earliest occurrence, the stale one goes
        assert_eq!(store.recent().len(), 2);
        assert_eq!(store.recent()[0], *"alpha");
        assert_eq!(store.recent()[1], *"beta");
    }

    #[test]
    fn saved_entry_wins_over_recent_duplicate() {
        let mut store = HistoryStore::new();
        store.insert_recent("foo");
        store.promote_to_saved(0).unwrap();

        store.insert_recent("foo");
        assert_eq!(store.saved().len(), 1);
        assert!(store.recent().is_empty());
    }

    #[test]
    fn reconcile_example_from_loaded_lists() {
        // Saved ["foo"], recent ["bar", "foo", "baz"] -> recent ["bar", "baz"]
        let store = HistoryStore::from_parts(
            vec![entry("foo")],
            vec![entry("bar"), entry("foo"), entry("baz")],
        );
        assert_eq!(store.saved().len(), 1);
        assert_eq!(store.recent().len(), 2);
        assert_eq!(store.recent()[0], *"bar");
        assert_eq!(store.recent()[1], *"baz");
    }

    #[test]
    fn duplicate_saved_entries_keep_earliest() {
        // A file can carry repeated "saved: " lines; only the first survives
        let store = HistoryStore::from_parts(
            vec![entry("a"), entry("b"), entry("a")],
            Vec::new(),
        );
        assert_eq!(store.saved().len(), 2);
        assert_eq!(store.saved()[0], *"a");
        assert_eq!(store.saved()[1], *"b");
    }

    #[test]
    fn reconcile_is_idempotent() {
        let mut store = HistoryStore::from_parts(
            vec![entry("a"), entry("b"), entry("a")],
            vec![entry("b"), entry("c"), entry("c")],
        );
        let once = store.clone();
        store.reconcile();
        assert_eq!(store, once);
    }

    #[test]
    fn from_parts_caps_recent() {
        let recent: Vec<Entry> = (0..150).map(|i| entry(&format!("r{}", i))).collect();
        let store = HistoryStore::from_parts(Vec::new(), recent);
        assert_eq!(store.recent().len(), MAX_RECENT_ENTRIES);
        assert_eq!(store.recent()[0], *"r0");
    }

    #[test]
    fn promote_moves_entry_to_saved_tail() {
        let mut store = HistoryStore::new();
        store.insert_recent("one");
        store.insert_recent("two");
        store.promote_to_saved(1).unwrap();

        assert_eq!(store.saved().len(), 1);
        assert_eq!(store.saved()[0], *"one");
        assert_eq!(store.recent().len(), 1);
        assert_eq!(store.recent()[0], *"two");
    }

    #[test]
    fn promote_out_of_range() {
        let mut store = HistoryStore::new();
        store.insert_recent("one");
        let err = store.promote_to_saved(1).unwrap_err();
        assert_eq!(err, OutOfRange { index: 1, len: 1 });
        // No partial mutation
        assert_eq!(store.recent().len(), 1);
        assert!(store.saved().is_empty());
    }

    #[test]
    fn remove_saved_and_recent() {
        let mut store = HistoryStore::new();
        store.insert_recent("keep");
        store.insert_recent("pin");
        store.promote_to_saved(0).unwrap();

        store.remove_saved(0).unwrap();
        assert!(store.saved().is_empty());
        store.remove_recent(0).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn remove_out_of_range() {
        let mut store = HistoryStore::new();
        assert!(store.remove_saved(0).is_err());
        assert!(store.remove_recent(0).is_err());
    }
}
