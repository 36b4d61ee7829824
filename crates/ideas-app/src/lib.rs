//! ideas-app - Application state and orchestration for Startup Ideas
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management, plus the idea and favorites stores, storage backends, idea
//! source fetching, clipboard and export actions, and configuration loading.

pub mod actions;
pub mod clipboard;
pub mod config;
pub mod confirm_dialog;
pub mod export;
pub mod favorites;
pub mod handler;
pub mod idea_store;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod source;
pub mod state;
pub mod storage;

// Re-export primary types
pub use actions::ActionContext;
pub use clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
pub use config::Settings;
pub use favorites::{AddOutcome, FavoritesStore};
pub use handler::{UpdateAction, UpdateResult};
pub use idea_store::IdeaStore;
pub use input_key::InputKey;
pub use message::{ListNav, Message};
pub use source::IdeaSource;
pub use state::{AppState, Focus, UiMode};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
