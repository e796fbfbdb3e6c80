//! Clipboard history model
//!
//! The store keeps two ordered lists of entries: saved (user-pinned,
//! unbounded) and recent (newest-first, capped). Uniqueness across both
//! lists is enforced after every mutation, with saved entries taking
//! precedence over recent duplicates.

pub mod entry;
pub mod store;
pub mod view;

pub use entry::{Entry, MAX_ENTRY_CHARS};
pub use store::{HistoryStore, MAX_RECENT_ENTRIES};
pub use view::{ListSection, SnapshotItem, SnapshotView};
