//! Application layer - Use cases and port interfaces
//!
//! Contains the core history operations and trait definitions
//! for external system interactions.

pub mod history;
pub mod ports;

// Re-export use cases
pub use history::{CaptureOutcome, HistoryService, HistoryServiceError};
