//! Configuration port interface

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for configuration storage.
///
/// Stores the three settings (`history_file`, `poll_interval_ms`,
/// `notify`) as an [`AppConfig`] with all-optional fields, so a partial
/// file merges cleanly with defaults and CLI overrides.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load the stored configuration.
    ///
    /// # Returns
    /// The stored settings; a missing file is an empty config (every
    /// field `None`), never an error.
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Write the configuration to storage.
    ///
    /// # Arguments
    /// * `config` - The settings to store
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Get the configuration file path.
    fn path(&self) -> PathBuf;

    /// Check if a configuration file exists.
    fn exists(&self) -> bool;

    /// Seed the configuration file with the defaults (unset history
    /// file, 500 ms poll interval, notifications off).
    /// Fails if the file already exists.
    async fn init(&self) -> Result<(), ConfigError>;
}
