//! ClipStash - clipboard history with pinned entries
//!
//! This crate keeps a bounded, deduplicated history of clipboard text,
//! lets the user pin favorites, and persists everything to an
//! escaped-line flat file.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: The history store, entry validation, snapshot view, and errors
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (flat file, arboard, notifications)
//! - **CLI**: Command-line interface, argument parsing, and the watch runner

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
