//! ClipStash CLI entry point

use std::process::ExitCode;

use clap::Parser;

use clip_stash::cli::{
    app::{load_merged_config, run_add, run_copy, run_list, run_remove, run_save, EXIT_ERROR},
    args::{Cli, Commands, WatchOptions},
    config_cmd::handle_config_command,
    presenter::Presenter,
    run_watch,
};
use clip_stash::domain::config::AppConfig;
use clip_stash::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Build CLI config from args
    let cli_config = AppConfig {
        history_file: cli
            .file
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned()),
        ..Default::default()
    };

    match cli.command {
        // Config subcommand does not touch the history file
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            match handle_config_command(action, &store, &presenter).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    presenter.error(&e.to_string());
                    ExitCode::from(EXIT_ERROR)
                }
            }
        }
        command => {
            // Merge config: defaults < file < cli
            let config = load_merged_config(cli_config).await;
            let history_file = config.history_file_or_default();

            match command {
                None | Some(Commands::List) => run_list(history_file).await,
                Some(Commands::Add { text }) => run_add(history_file, &text).await,
                Some(Commands::Save { index }) => run_save(history_file, index).await,
                Some(Commands::Remove { index }) => run_remove(history_file, index).await,
                Some(Commands::Copy { index }) => run_copy(history_file, index).await,
                Some(Commands::Watch {
                    poll_interval,
                    notify,
                }) => {
                    let options = WatchOptions {
                        history_file,
                        poll_interval: poll_interval
                            .filter(|ms| *ms > 0)
                            .map(std::time::Duration::from_millis)
                            .unwrap_or_else(|| config.poll_interval_or_default()),
                        notify: notify || config.notify_or_default(),
                    };
                    run_watch(options).await
                }
                Some(Commands::Config { .. }) => unreachable!(), // Handled above
            }
        }
    }
}
