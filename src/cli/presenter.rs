//! CLI presenter for output formatting

use colored::*;

use crate::domain::history::{ListSection, SnapshotView};

/// Longest preview shown for an entry, in characters
const PREVIEW_CHARS: usize = 60;

/// Presenter for CLI output formatting.
/// Status and diagnostics go to stderr; payload output goes to stdout.
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout (entry text, config values)
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Render the history snapshot: saved section, then recent
    pub fn history(&self, view: &SnapshotView) {
        if view.is_empty() {
            self.info("History is empty");
            return;
        }

        let mut current: Option<ListSection> = None;
        for item in view.items() {
            if current != Some(item.section) {
                current = Some(item.section);
                match item.section {
                    ListSection::Saved => println!("{}", "Saved".bold()),
                    ListSection::Recent => println!("{}", "Recent".bold()),
                }
            }
            println!(
                "{:>4}  {}",
                item.display_index.to_string().cyan(),
                preview(&item.text)
            );
        }
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-line preview of entry text: first line, capped length, with an
/// ellipsis when anything was cut.
pub fn preview(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or("");
    let mut out: String = first_line.chars().take(PREVIEW_CHARS).collect();

    let elided = first_line.chars().count() > PREVIEW_CHARS || first_line.len() != text.len();
    if elided {
        out.push('…');
    }
    out
}
