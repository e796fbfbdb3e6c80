//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// ClipStash - clipboard history with pinned entries
#[derive(Parser, Debug)]
#[command(name = "clip-stash")]
#[command(version = "1.0.0")]
#[command(about = "Keep a bounded clipboard history and pin the entries worth keeping")]
#[command(long_about = None)]
pub struct Cli {
    /// History file path (overrides config)
    #[arg(long, value_name = "PATH", env = "CLIP_STASH_FILE", global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands. Running without one lists the history.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the history (saved entries first, then recent)
    List,
    /// Add text to the recent history
    Add {
        /// The text to add
        text: String,
    },
    /// Pin the recent entry at the given display index
    Save {
        /// 1-based index from `list`
        index: usize,
    },
    /// Remove the entry at the given display index
    Remove {
        /// 1-based index from `list`
        index: usize,
    },
    /// Copy the entry at the given display index to the OS clipboard
    Copy {
        /// 1-based index from `list`
        index: usize,
    },
    /// Watch the OS clipboard and capture copied text
    Watch {
        /// Poll interval in milliseconds
        #[arg(long, value_name = "MS")]
        poll_interval: Option<u64>,

        /// Show desktop notifications for captures
        #[arg(short = 'n', long)]
        notify: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Parsed watch-mode options
#[derive(Debug, Clone)]
pub struct WatchOptions {
    pub history_file: PathBuf,
    pub poll_interval: std::time::Duration,
    pub notify: bool,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["history_file", "poll_interval_ms", "notify"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::parse_from(["clip-stash"]);
        assert!(cli.file.is_none());
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_parses_file_override() {
        let cli = Cli::parse_from(["clip-stash", "--file", "/tmp/content.csv", "list"]);
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/content.csv")));
        assert!(matches!(cli.command, Some(Commands::List)));
    }

    #[test]
    fn cli_parses_file_after_subcommand() {
        // `global = true` lets the override follow the subcommand
        let cli = Cli::parse_from(["clip-stash", "list", "--file", "/tmp/content.csv"]);
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/content.csv")));
    }

    #[test]
    fn cli_parses_add() {
        let cli = Cli::parse_from(["clip-stash", "add", "some text"]);
        if let Some(Commands::Add { text }) = cli.command {
            assert_eq!(text, "some text");
        } else {
            panic!("Expected Add command");
        }
    }

    #[test]
    fn cli_parses_save_index() {
        let cli = Cli::parse_from(["clip-stash", "save", "3"]);
        assert!(matches!(cli.command, Some(Commands::Save { index: 3 })));
    }

    #[test]
    fn cli_parses_remove_index() {
        let cli = Cli::parse_from(["clip-stash", "remove", "1"]);
        assert!(matches!(cli.command, Some(Commands::Remove { index: 1 })));
    }

    #[test]
    fn cli_parses_watch_options() {
        let cli = Cli::parse_from(["clip-stash", "watch", "--poll-interval", "200", "-n"]);
        if let Some(Commands::Watch {
            poll_interval,
            notify,
        }) = cli.command
        {
            assert_eq!(poll_interval, Some(200));
            assert!(notify);
        } else {
            panic!("Expected Watch command");
        }
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["clip-stash", "config", "set", "notify", "true"]);
        if let Some(Commands::Config {
            action: ConfigAction::Set { key, value },
        }) = cli.command
        {
            assert_eq!(key, "notify");
            assert_eq!(value, "true");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("history_file"));
        assert!(is_valid_config_key("poll_interval_ms"));
        assert!(is_valid_config_key("notify"));
        assert!(!is_valid_config_key("invalid_key"));
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}
