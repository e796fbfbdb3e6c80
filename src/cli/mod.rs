//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, the one-shot command
//! handlers, and the watch-mode runner.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;
pub mod watch_app;

// Re-export commonly used types
pub use app::{EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, WatchOptions};
pub use config_cmd::handle_config_command;
pub use presenter::Presenter;
pub use watch_app::run_watch;
