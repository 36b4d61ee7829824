//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use crate::input_key::InputKey;
use crate::source::IdeaSource;
use ideas_core::IdeaRecord;

/// Cursor movement within a list (all-ideas modal, favorites panel)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListNav {
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Left mouse button pressed at a terminal cell
    Click { column: u16, row: u16 },

    /// Tick event for periodic updates (notice expiry)
    Tick,

    /// Exit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Idea Loading
    // ─────────────────────────────────────────────────────────
    /// Start loading the idea list from a source
    LoadIdeas { source: IdeaSource },
    /// Idea list loaded successfully
    IdeasLoaded { ideas: Vec<IdeaRecord> },
    /// Idea list could not be loaded; fallback ideas are used instead
    IdeasLoadFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Current Idea
    // ─────────────────────────────────────────────────────────
    /// Show a random idea
    NewIdea,
    /// Add the current idea to favorites
    SaveCurrent,
    /// Copy the current idea to the clipboard
    CopyCurrent,
    /// Clipboard write succeeded
    ClipboardCopied { title: String },

    // ─────────────────────────────────────────────────────────
    // Custom Idea Input
    // ─────────────────────────────────────────────────────────
    /// Focus the custom-idea input field
    StartAddIdea,
    /// Input field content changed
    AddIdeaInput { text: String },
    /// Enter pressed in the input field
    SubmitCustomIdea { text: String },
    /// Leave the input field, keeping its content
    CancelAddIdea,

    // ─────────────────────────────────────────────────────────
    // All Ideas Modal
    // ─────────────────────────────────────────────────────────
    ShowAllIdeas,
    CloseAllIdeas,
    AllIdeasNav(ListNav),
    /// Make the idea at `index` current and close the modal
    UseIdea { index: usize },
    /// Add the idea at `index` to favorites
    SaveIdea { index: usize },

    // ─────────────────────────────────────────────────────────
    // Favorites
    // ─────────────────────────────────────────────────────────
    /// Move keyboard focus between the idea card and the favorites panel
    ToggleFocus,
    FavoritesNav(ListNav),
    CopyFavorite { index: usize },
    RemoveFavorite { index: usize },
    /// Ask before clearing all favorites
    RequestClearFavorites,
    ConfirmClearFavorites,
    /// Dismiss the confirmation dialog without acting
    CancelConfirm,

    // ─────────────────────────────────────────────────────────
    // Export
    // ─────────────────────────────────────────────────────────
    /// Write favorites to startup-ideas-favorites.json
    DownloadFavorites,
    ExportCompleted { path: PathBuf },
    ExportFailed { error: String },

    /// Close the blocking alert
    DismissAlert,
}

impl Message {
    /// Startup load request for `location`.
    ///
    /// A location that cannot be parsed fails the load straight away, so the
    /// fallback ideas are shown as for any other load failure.
    pub fn load_from(location: &str) -> Self {
        match IdeaSource::parse(location) {
            Ok(source) => Message::LoadIdeas { source },
            Err(e) => Message::IdeasLoadFailed {
                error: e.to_string(),
            },
        }
    }
}
