//! Configuration value objects

pub mod app_config;

pub use app_config::{default_history_file, AppConfig, DEFAULT_POLL_INTERVAL_MS};
