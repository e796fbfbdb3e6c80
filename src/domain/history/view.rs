//! Snapshot view: the combined, freshly numbered display list

use std::fmt;

use super::entry::Entry;

/// Which list an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSection {
    Saved,
    Recent,
}

impl fmt::Display for ListSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Saved => f.write_str("saved"),
            Self::Recent => f.write_str("recent"),
        }
    }
}

/// One row of the display list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotItem {
    /// 1-based display index, recomputed on every snapshot
    pub display_index: usize,
    pub section: ListSection,
    pub text: String,
}

/// Read-only ordered view of the store: saved entries first, then
/// recent. Display numbering is purely presentational.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotView {
    items: Vec<SnapshotItem>,
    saved_count: usize,
}

impl SnapshotView {
    pub(crate) fn build(saved: &[Entry], recent: &[Entry]) -> Self {
        let mut items = Vec::with_capacity(saved.len() + recent.len());
        let mut index = 1;

        for entry in saved {
            items.push(SnapshotItem {
                display_index: index,
                section: ListSection::Saved,
                text: entry.as_str().to_string(),
            });
            index += 1;
        }
        for entry in recent {
            items.push(SnapshotItem {
                display_index: index,
                section: ListSection::Recent,
                text: entry.as_str().to_string(),
            });
            index += 1;
        }

        Self {
            items,
            saved_count: saved.len(),
        }
    }

    /// All rows, saved section first
    pub fn items(&self) -> &[SnapshotItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn saved_count(&self) -> usize {
        self.saved_count
    }

    pub fn recent_count(&self) -> usize {
        self.items.len() - self.saved_count
    }

    /// Look up a row by its 1-based display index
    pub fn get(&self, display_index: usize) -> Option<&SnapshotItem> {
        if display_index == 0 {
            return None;
        }
        self.items.get(display_index - 1)
    }

    /// Resolve a 1-based display index to the section and the 0-based
    /// index within that section's list.
    pub fn locate(&self, display_index: usize) -> Option<(ListSection, usize)> {
        if display_index == 0 || display_index > self.items.len() {
            return None;
        }
        if display_index <= self.saved_count {
            Some((ListSection::Saved, display_index - 1))
        } else {
            Some((ListSection::Recent, display_index - self.saved_count - 1))
        }
    }
}
