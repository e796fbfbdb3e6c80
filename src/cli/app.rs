//! Command handlers for the one-shot subcommands

use std::path::PathBuf;
use std::process::ExitCode;

use crate::application::ports::{Clipboard, ConfigStore};
use crate::application::{CaptureOutcome, HistoryService};
use crate::domain::config::AppConfig;
use crate::infrastructure::{ArboardClipboard, FlatFileStore, XdgConfigStore};

use super::presenter::{preview, Presenter};

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Load and merge configuration from file and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Merge: defaults < file < cli
    AppConfig::defaults().merge(file_config).merge(cli_config)
}

/// Open the history service for the given file
async fn open_service(
    history_file: PathBuf,
    presenter: &Presenter,
) -> Option<HistoryService<FlatFileStore>> {
    let persistence = FlatFileStore::with_path(history_file);
    match HistoryService::load(persistence).await {
        Ok(service) => Some(service),
        Err(e) => {
            presenter.error(&e.to_string());
            None
        }
    }
}

/// Show the history
pub async fn run_list(history_file: PathBuf) -> ExitCode {
    let presenter = Presenter::new();
    let Some(service) = open_service(history_file, &presenter).await else {
        return ExitCode::from(EXIT_ERROR);
    };

    presenter.history(&service.snapshot());
    ExitCode::from(EXIT_SUCCESS)
}

/// Add text to the recent history
pub async fn run_add(history_file: PathBuf, text: &str) -> ExitCode {
    let presenter = Presenter::new();
    let Some(mut service) = open_service(history_file, &presenter).await else {
        return ExitCode::from(EXIT_ERROR);
    };

    match service.on_clipboard_text_copied(text).await {
        Ok(CaptureOutcome::Inserted) => {
            presenter.success(&format!("Added: {}", preview(text)));
            ExitCode::from(EXIT_SUCCESS)
        }
        Ok(CaptureOutcome::DuplicateOfHead) => {
            presenter.info("Already the newest entry");
            ExitCode::from(EXIT_SUCCESS)
        }
        Ok(CaptureOutcome::Rejected) => {
            presenter.warn("Text is empty or too large; not added");
            ExitCode::from(EXIT_USAGE_ERROR)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Pin the recent entry at the given display index
pub async fn run_save(history_file: PathBuf, index: usize) -> ExitCode {
    let presenter = Presenter::new();
    let Some(mut service) = open_service(history_file, &presenter).await else {
        return ExitCode::from(EXIT_ERROR);
    };

    match service.promote(index).await {
        Ok(text) => {
            presenter.success(&format!("Pinned: {}", preview(&text)));
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Remove the entry at the given display index
pub async fn run_remove(history_file: PathBuf, index: usize) -> ExitCode {
    let presenter = Presenter::new();
    let Some(mut service) = open_service(history_file, &presenter).await else {
        return ExitCode::from(EXIT_ERROR);
    };

    match service.remove(index).await {
        Ok(text) => {
            presenter.success(&format!("Removed: {}", preview(&text)));
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Copy the entry at the given display index to the OS clipboard
pub async fn run_copy(history_file: PathBuf, index: usize) -> ExitCode {
    let presenter = Presenter::new();
    let Some(service) = open_service(history_file, &presenter).await else {
        return ExitCode::from(EXIT_ERROR);
    };

    let snapshot = service.snapshot();
    let Some(item) = snapshot.get(index) else {
        presenter.error(&format!(
            "Index {} is out of range ({} entries)",
            index,
            snapshot.len()
        ));
        return ExitCode::from(EXIT_ERROR);
    };

    let clipboard = ArboardClipboard::new();
    match clipboard.set_text(&item.text).await {
        Ok(()) => {
            presenter.success(&format!("Copied: {}", preview(&item.text)));
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}
