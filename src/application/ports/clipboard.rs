//! Clipboard port interface

use async_trait::async_trait;
use thiserror::Error;

/// Clipboard errors
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("Failed to read clipboard: {0}")]
    ReadFailed(String),

    #[error("Failed to copy to clipboard: {0}")]
    CopyFailed(String),
}

/// Port for clipboard operations
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Read the current clipboard text.
    ///
    /// # Returns
    /// `Ok(None)` when the clipboard holds no text content
    async fn get_text(&self) -> Result<Option<String>, ClipboardError>;

    /// Copy text to the system clipboard.
    ///
    /// # Arguments
    /// * `text` - The text to copy
    async fn set_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Blanket implementation for boxed clipboard types
#[async_trait]
impl Clipboard for Box<dyn Clipboard> {
    async fn get_text(&self) -> Result<Option<String>, ClipboardError> {
        self.as_ref().get_text().await
    }

    async fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.as_ref().set_text(text).await
    }
}
