//! Domain layer - Core business logic
//!
//! Contains the history model, value objects, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod history;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use history::{Entry, HistoryStore, ListSection, SnapshotItem, SnapshotView};
