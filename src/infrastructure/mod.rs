//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the file system, the OS clipboard, and the
//! desktop notification service.

pub mod clipboard;
pub mod config;
pub mod notification;
pub mod persistence;

// Re-export adapters
pub use clipboard::ArboardClipboard;
pub use config::XdgConfigStore;
pub use notification::NotifyRustNotifier;
pub use persistence::FlatFileStore;
