//! History persistence adapters

pub mod escape;
pub mod flat_file;

pub use flat_file::{FlatFileStore, MAX_PERSISTED_RECENT, RECENT_PREFIX, SAVED_PREFIX};
