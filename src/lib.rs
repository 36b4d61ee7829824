//! Startup Ideas Library
//!
//! A terminal random startup-idea generator with persistent favorites.

pub mod cli;

use ideas_app::{AppState, Message};
use ideas_core::prelude::*;

pub use cli::Args;

/// Main application entry point
///
/// Installs error reporting and logging, resolves settings from config.toml
/// and the command line, then runs the TUI.
pub async fn run(args: Args) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since TUI owns stdout)
    ideas_core::logging::init()?;

    let settings = cli::resolve_settings(&args);
    info!("Idea source: {}", settings.source.location);
    let initial = Message::load_from(&settings.source.location);

    let storage = cli::open_storage(&settings);
    let state = AppState::with_settings(settings, storage);

    let result = ideas_tui::run(state, initial).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Startup Ideas exiting");
    result
}
