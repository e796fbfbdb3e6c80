//! Application configuration value object

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default clipboard poll interval for watch mode (milliseconds)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path of the history file (defaults to the platform data directory)
    pub history_file: Option<String>,
    /// Clipboard poll interval in milliseconds for watch mode
    pub poll_interval_ms: Option<u64>,
    /// Show desktop notifications in watch mode
    pub notify: Option<bool>,
}

impl AppConfig {
    /// Create config with default values.
    /// `history_file` stays unset so the platform default applies.
    pub fn defaults() -> Self {
        Self {
            history_file: None,
            poll_interval_ms: Some(DEFAULT_POLL_INTERVAL_MS),
            notify: Some(false),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            history_file: other.history_file.or(self.history_file),
            poll_interval_ms: other.poll_interval_ms.or(self.poll_interval_ms),
            notify: other.notify.or(self.notify),
        }
    }

    /// Resolved history file path, falling back to the platform default
    pub fn history_file_or_default(&self) -> PathBuf {
        self.history_file
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(default_history_file)
    }

    /// Poll interval as a Duration, or the default if unset or zero
    pub fn poll_interval_or_default(&self) -> Duration {
        let ms = match self.poll_interval_ms {
            Some(ms) if ms > 0 => ms,
            _ => DEFAULT_POLL_INTERVAL_MS,
        };
        Duration::from_millis(ms)
    }

    /// Get notify setting, or false if not set
    pub fn notify_or_default(&self) -> bool {
        self.notify.unwrap_or(false)
    }
}

/// Default history file location: `<data-dir>/clip-stash/content.csv`.
/// The `.csv` name is kept for compatibility with existing history files;
/// the format is the escaped-line flat file, not real CSV.
pub fn default_history_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("clip-stash")
        .join("content.csv")
}
