//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `ideas`: Loading, random picks and custom ideas
//! - `favorites`: Favorites mutations, copy and export
//! - `modal`: All-ideas modal handlers

pub(crate) mod favorites;
pub(crate) mod ideas;
pub(crate) mod keys;
pub(crate) mod modal;
pub(crate) mod update;


use std::path::PathBuf;
use std::time::Duration;

use crate::message::Message;
use crate::source::IdeaSource;
use ideas_core::IdeaRecord;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Fetch the idea list in a background task
    LoadIdeas {
        source: IdeaSource,
        timeout: Duration,
    },

    /// Put text on the system clipboard
    CopyToClipboard {
        text: String,
        /// Title shown in the confirmation notice
        title: String,
    },

    /// Write favorites to the export file
    ExportFavorites {
        directory: PathBuf,
        favorites: Vec<IdeaRecord>,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
