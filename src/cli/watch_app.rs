//! Watch-mode runner
//!
//! Polls the OS clipboard and captures new text into the history. The
//! poller is the single producer on an mpsc channel; the loop below owns
//! the history service, so the store is never mutated from two tasks.

use std::process::ExitCode;

use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use crate::application::ports::{Clipboard, NotificationIcon, Notifier};
use crate::application::{CaptureOutcome, HistoryService};
use crate::infrastructure::{ArboardClipboard, FlatFileStore, NotifyRustNotifier};

use super::app::{EXIT_ERROR, EXIT_SUCCESS};
use super::args::WatchOptions;
use super::presenter::{preview, Presenter};

/// Run watch mode until Ctrl-C
pub async fn run_watch(options: WatchOptions) -> ExitCode {
    let presenter = Presenter::new();

    let persistence = FlatFileStore::with_path(options.history_file.clone());
    let mut service = match HistoryService::load(persistence).await {
        Ok(service) => service,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let notifier = NotifyRustNotifier::new();
    let (tx, mut rx) = mpsc::channel::<String>(16);

    // Clipboard poller task: sends each newly observed text exactly once
    let poll_interval = options.poll_interval;
    let poller = tokio::spawn(async move {
        let clipboard = ArboardClipboard::new();

        // Whatever is on the clipboard before we start is not a capture
        let mut last_seen = clipboard.get_text().await.ok().flatten();

        let mut ticker = tokio::time::interval(poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            match clipboard.get_text().await {
                Ok(Some(text)) => {
                    if last_seen.as_deref() != Some(text.as_str()) {
                        last_seen = Some(text.clone());
                        if tx.send(text).await.is_err() {
                            break;
                        }
                    }
                }
                Ok(None) => {}
                // Clipboard temporarily unavailable; keep polling
                Err(_) => {}
            }
        }
    });

    presenter.info(&format!(
        "Watching clipboard every {}ms | File: {} | Ctrl-C: exit",
        options.poll_interval.as_millis(),
        options.history_file.display()
    ));

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            captured = rx.recv() => {
                let Some(text) = captured else { break };
                handle_capture(&mut service, &presenter, &notifier, options.notify, &text).await;
            }
        }
    }

    poller.abort();
    presenter.info("Stopped");
    ExitCode::from(EXIT_SUCCESS)
}

async fn handle_capture<P: crate::application::ports::HistoryPersistence>(
    service: &mut HistoryService<P>,
    presenter: &Presenter,
    notifier: &NotifyRustNotifier,
    notify: bool,
    text: &str,
) {
    match service.on_clipboard_text_copied(text).await {
        Ok(CaptureOutcome::Inserted) => {
            presenter.success(&format!("Captured: {}", preview(text)));
            if notify {
                let _ = notifier
                    .notify("ClipStash", &preview(text), NotificationIcon::Captured)
                    .await;
            }
        }
        Ok(CaptureOutcome::DuplicateOfHead) | Ok(CaptureOutcome::Rejected) => {}
        Err(e) => {
            // Capture stays usable in memory even when the write failed
            presenter.warn(&e.to_string());
            if notify {
                let _ = notifier
                    .notify("ClipStash", &e.to_string(), NotificationIcon::Error)
                    .await;
            }
        }
    }
}
