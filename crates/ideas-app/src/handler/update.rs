//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppState, NoticeLevel, UiMode};

use super::{favorites, ideas, keys, modal, UpdateResult};

/// Process a message and update state
/// Returns an UpdateResult with optional follow-up message and action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            if let Some(msg) = keys::handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Click { column, row } => modal::handle_click(state, column, row),

        Message::Tick => {
            state.tick_notice();
            UpdateResult::none()
        }

        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Idea Loading
        // ─────────────────────────────────────────────────────────
        Message::LoadIdeas { source } => ideas::handle_load(state, source),
        Message::IdeasLoaded { ideas } => ideas::handle_loaded(state, ideas),
        Message::IdeasLoadFailed { error } => ideas::handle_load_failed(state, error),

        // ─────────────────────────────────────────────────────────
        // Current Idea
        // ─────────────────────────────────────────────────────────
        Message::NewIdea => {
            ideas::show_random_idea(state);
            UpdateResult::none()
        }

        Message::SaveCurrent => match state.current.clone() {
            Some(record) => favorites::add_favorite(state, record),
            None => UpdateResult::none(),
        },

        Message::CopyCurrent => match state.current.as_ref() {
            Some(record) => favorites::copy_record(record),
            None => UpdateResult::none(),
        },

        Message::ClipboardCopied { title } => {
            state.set_notice(
                NoticeLevel::Info,
                format!("Copied \"{}\" to clipboard.", title),
            );
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Custom Idea Input
        // ─────────────────────────────────────────────────────────
        Message::StartAddIdea => {
            state.ui_mode = UiMode::AddIdea;
            UpdateResult::none()
        }

        Message::AddIdeaInput { text } => {
            state.input = text;
            UpdateResult::none()
        }

        Message::SubmitCustomIdea { text } => ideas::handle_submit_custom(state, &text),

        Message::CancelAddIdea => {
            if state.ui_mode == UiMode::AddIdea {
                state.ui_mode = UiMode::Normal;
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // All Ideas Modal
        // ─────────────────────────────────────────────────────────
        Message::ShowAllIdeas => modal::handle_show(state),
        Message::CloseAllIdeas => modal::handle_close(state),
        Message::AllIdeasNav(nav) => modal::handle_nav(state, nav),
        Message::UseIdea { index } => modal::handle_use(state, index),
        Message::SaveIdea { index } => match state.ideas.get(index).cloned() {
            Some(record) => favorites::add_favorite(state, record),
            None => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // Favorites
        // ─────────────────────────────────────────────────────────
        Message::ToggleFocus => {
            state.focus = state.focus.toggle();
            state.clamp_favorites_selection();
            UpdateResult::none()
        }
        Message::FavoritesNav(nav) => favorites::handle_nav(state, nav),
        Message::CopyFavorite { index } => favorites::handle_copy(state, index),
        Message::RemoveFavorite { index } => favorites::handle_remove(state, index),
        Message::RequestClearFavorites => favorites::handle_request_clear(state),
        Message::ConfirmClearFavorites => favorites::handle_confirm_clear(state),
        Message::CancelConfirm => {
            state.confirm_dialog_state = None;
            if state.ui_mode == UiMode::ConfirmDialog {
                state.ui_mode = UiMode::Normal;
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Export
        // ─────────────────────────────────────────────────────────
        Message::DownloadFavorites => favorites::handle_download(state),
        Message::ExportCompleted { path } => favorites::handle_export_completed(state, path),
        Message::ExportFailed { error } => favorites::handle_export_failed(state, error),

        Message::DismissAlert => {
            if let Some(alert) = state.alert.take() {
                state.ui_mode = alert.return_to;
            }
            UpdateResult::none()
        }
    }
}
