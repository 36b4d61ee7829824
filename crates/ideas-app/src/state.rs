//! Application state (Model in TEA pattern)

use rand::rngs::StdRng;
use rand::SeedableRng;

use ideas_core::IdeaRecord;

use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;
use crate::favorites::FavoritesStore;
use crate::idea_store::IdeaStore;
use crate::message::ListNav;
use crate::storage::{KeyValueStore, MemoryStore};

/// Number of ticks a notice stays visible
pub const NOTICE_TICKS: u16 = 60;

/// Rows skipped by PageUp/PageDown in lists
const PAGE_SIZE: usize = 5;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Waiting for the idea list to load
    #[default]
    Loading,

    /// Idea card and favorites panel
    Normal,

    /// Typing into the custom-idea input field
    AddIdea,

    /// All-ideas modal is open
    AllIdeas,

    /// Confirmation dialog (clear favorites)
    ConfirmDialog,

    /// Blocking alert; any dismiss key returns to the previous mode
    Alert,
}

/// Which panel receives list keys in normal mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Idea,
    Favorites,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Idea => Focus::Favorites,
            Focus::Favorites => Focus::Idea,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// All Ideas Modal
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalVisibility {
    #[default]
    Hidden,
    Shown,
}

/// Screen rectangle recorded by the renderer for mouse hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl HitRect {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && column < self.x.saturating_add(self.width)
            && row >= self.y
            && row < self.y.saturating_add(self.height)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AllIdeasState {
    pub visibility: ModalVisibility,
    /// Highlighted row
    pub selected: usize,
    /// Modal content area from the last frame
    pub area: Option<HitRect>,
}

impl AllIdeasState {
    pub fn is_shown(&self) -> bool {
        self.visibility == ModalVisibility::Shown
    }

    /// Open the modal with the selection reset to the top
    pub fn show(&mut self) {
        self.visibility = ModalVisibility::Shown;
        self.selected = 0;
    }

    pub fn hide(&mut self) {
        self.visibility = ModalVisibility::Hidden;
        self.area = None;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Notices and Alerts
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Non-blocking message shown in the footer until it expires
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub level: NoticeLevel,
    pub ticks_remaining: u16,
}

/// Blocking alert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertState {
    pub message: String,
    /// Mode restored when the alert is dismissed
    pub return_to: UiMode,
}

/// Outcome of the startup load
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Pending,
    Loaded,
    /// The source failed and the built-in ideas are in use
    Fallback { error: String },
}

// ─────────────────────────────────────────────────────────────────────────────
// AppState
// ─────────────────────────────────────────────────────────────────────────────

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub ui_mode: UiMode,
    pub focus: Focus,

    /// Loaded ideas plus custom ones added this session
    pub ideas: IdeaStore,
    /// Idea shown on the card
    pub current: Option<IdeaRecord>,

    /// Persisted favorites
    pub favorites: FavoritesStore,
    /// Highlighted favorite when the favorites panel has focus
    pub favorites_selected: usize,

    pub all_ideas: AllIdeasState,

    /// Custom-idea input buffer
    pub input: String,

    pub confirm_dialog_state: Option<ConfirmDialogState>,
    pub alert: Option<AlertState>,
    pub notice: Option<Notice>,

    pub settings: Settings,
    /// Human-readable idea source shown in the header
    pub source_label: String,
    pub load_status: LoadStatus,

    pub rng: StdRng,
    quitting: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// State with default settings and in-memory favorites
    pub fn new() -> Self {
        Self::with_settings(Settings::default(), Box::new(MemoryStore::new()))
    }

    pub fn with_settings(settings: Settings, storage: Box<dyn KeyValueStore>) -> Self {
        Self {
            ui_mode: UiMode::Loading,
            focus: Focus::Idea,
            ideas: IdeaStore::new(),
            current: None,
            favorites: FavoritesStore::new(storage),
            favorites_selected: 0,
            all_ideas: AllIdeasState::default(),
            input: String::new(),
            confirm_dialog_state: None,
            alert: None,
            notice: None,
            source_label: settings.source.location.clone(),
            settings,
            load_status: LoadStatus::Pending,
            rng: StdRng::from_entropy(),
            quitting: false,
        }
    }

    /// Replace the random generator with a seeded one
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.load_status, LoadStatus::Fallback { .. })
    }

    // ─────────────────────────────────────────────────────────
    // Notices
    // ─────────────────────────────────────────────────────────

    pub fn set_notice(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.notice = Some(Notice {
            message: message.into(),
            level,
            ticks_remaining: NOTICE_TICKS,
        });
    }

    /// Count down the active notice, dropping it once expired
    pub fn tick_notice(&mut self) {
        if let Some(notice) = self.notice.as_mut() {
            notice.ticks_remaining = notice.ticks_remaining.saturating_sub(1);
            if notice.ticks_remaining == 0 {
                self.notice = None;
            }
        }
    }

    /// Show a blocking alert over the current mode
    pub fn show_alert(&mut self, message: impl Into<String>) {
        let return_to = match self.ui_mode {
            UiMode::Alert => self
                .alert
                .as_ref()
                .map(|a| a.return_to)
                .unwrap_or(UiMode::Normal),
            mode => mode,
        };
        self.alert = Some(AlertState {
            message: message.into(),
            return_to,
        });
        self.ui_mode = UiMode::Alert;
    }

    /// Keep the favorites selection inside the list after it shrinks
    pub fn clamp_favorites_selection(&mut self) {
        let len = self.favorites.len();
        if self.favorites_selected >= len {
            self.favorites_selected = len.saturating_sub(1);
        }
    }
}

/// Move a list cursor, clamped to `[0, len)`
pub fn navigate(selected: usize, len: usize, nav: ListNav) -> usize {
    if len == 0 {
        return 0;
    }
    let last = len - 1;
    match nav {
        ListNav::Up => selected.saturating_sub(1),
        ListNav::Down => (selected + 1).min(last),
        ListNav::PageUp => selected.saturating_sub(PAGE_SIZE),
        ListNav::PageDown => (selected + PAGE_SIZE).min(last),
        ListNav::Home => 0,
        ListNav::End => last,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_loading() {
        let state = AppState::new();
        assert_eq!(state.ui_mode, UiMode::Loading);
        assert_eq!(state.load_status, LoadStatus::Pending);
        assert!(state.current.is_none());
        assert!(!state.should_quit());
        assert_eq!(state.source_label, "ideas.json");
    }

    #[test]
    fn test_hit_rect_contains() {
        let rect = HitRect::new(10, 5, 20, 4);
        assert!(rect.contains(10, 5));
        assert!(rect.contains(29, 8));
        assert!(!rect.contains(30, 8));
        assert!(!rect.contains(10, 9));
        assert!(!rect.contains(9, 5));
    }

    #[test]
    fn test_all_ideas_show_resets_selection() {
        let mut modal = AllIdeasState {
            selected: 4,
            ..Default::default()
        };
        modal.show();
        assert!(modal.is_shown());
        assert_eq!(modal.selected, 0);

        modal.area = Some(HitRect::new(0, 0, 1, 1));
        modal.hide();
        assert!(!modal.is_shown());
        assert!(modal.area.is_none());
    }

    #[test]
    fn test_notice_expires_after_ticks() {
        let mut state = AppState::new();
        state.set_notice(NoticeLevel::Info, "hello");

        for _ in 0..NOTICE_TICKS - 1 {
            state.tick_notice();
        }
        assert!(state.notice.is_some());

        state.tick_notice();
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_alert_remembers_previous_mode() {
        let mut state = AppState::new();
        state.ui_mode = UiMode::AllIdeas;

        state.show_alert("first");
        state.show_alert("second");

        assert_eq!(state.ui_mode, UiMode::Alert);
        let alert = state.alert.as_ref().unwrap();
        assert_eq!(alert.message, "second");
        assert_eq!(alert.return_to, UiMode::AllIdeas);
    }

    #[test]
    fn test_navigate_clamps() {
        assert_eq!(navigate(0, 3, ListNav::Up), 0);
        assert_eq!(navigate(2, 3, ListNav::Down), 2);
        assert_eq!(navigate(1, 20, ListNav::PageDown), 6);
        assert_eq!(navigate(3, 20, ListNav::PageUp), 0);
        assert_eq!(navigate(5, 20, ListNav::End), 19);
        assert_eq!(navigate(5, 20, ListNav::Home), 0);
        assert_eq!(navigate(5, 0, ListNav::Down), 0);
    }

    #[test]
    fn test_focus_toggle() {
        assert_eq!(Focus::Idea.toggle(), Focus::Favorites);
        assert_eq!(Focus::Favorites.toggle(), Focus::Idea);
    }
}
