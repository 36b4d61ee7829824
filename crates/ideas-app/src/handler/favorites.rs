//! Favorites handlers: add, remove, clear, copy and export

use std::path::PathBuf;

use ideas_core::prelude::*;
use ideas_core::IdeaRecord;

use crate::confirm_dialog::ConfirmDialogState;
use crate::favorites::AddOutcome;
use crate::message::ListNav;
use crate::state::{navigate, AppState, NoticeLevel, UiMode};

use super::{UpdateAction, UpdateResult};

/// Alert shown when saving an idea that is already a favorite
pub const DUPLICATE_FAVORITE_ALERT: &str = "This idea is already in favorites.";

/// Add `record` to favorites, alerting on duplicates
pub fn add_favorite(state: &mut AppState, record: IdeaRecord) -> UpdateResult {
    match state.favorites.add(record) {
        Ok(AddOutcome::Added) => {
            state.favorites_selected = 0;
            state.set_notice(NoticeLevel::Success, "Saved to favorites.");
        }
        Ok(AddOutcome::Duplicate) => state.show_alert(DUPLICATE_FAVORITE_ALERT),
        Err(e) => storage_failed(state, &e),
    }
    UpdateResult::none()
}

pub fn handle_nav(state: &mut AppState, nav: ListNav) -> UpdateResult {
    let len = state.favorites.len();
    state.favorites_selected = navigate(state.favorites_selected, len, nav);
    UpdateResult::none()
}

/// Copy an idea, as `idea` or `idea\n\nsummary`
pub fn copy_record(record: &IdeaRecord) -> UpdateResult {
    UpdateResult::action(UpdateAction::CopyToClipboard {
        text: record.clipboard_text(),
        title: record.title().to_string(),
    })
}

pub fn handle_copy(state: &mut AppState, index: usize) -> UpdateResult {
    match state.favorites.list().get(index) {
        Some(record) => copy_record(record),
        None => UpdateResult::none(),
    }
}

pub fn handle_remove(state: &mut AppState, index: usize) -> UpdateResult {
    match state.favorites.remove(index) {
        Ok(Some(removed)) => {
            state.clamp_favorites_selection();
            state.set_notice(
                NoticeLevel::Info,
                format!("Removed \"{}\" from favorites.", removed.title()),
            );
        }
        Ok(None) => debug!("No favorite at index {}", index),
        Err(e) => storage_failed(state, &e),
    }
    UpdateResult::none()
}

/// Ask for confirmation before clearing
pub fn handle_request_clear(state: &mut AppState) -> UpdateResult {
    let count = state.favorites.len();
    state.confirm_dialog_state = Some(ConfirmDialogState::clear_favorites(count));
    state.ui_mode = UiMode::ConfirmDialog;
    UpdateResult::none()
}

pub fn handle_confirm_clear(state: &mut AppState) -> UpdateResult {
    state.confirm_dialog_state = None;
    if state.ui_mode == UiMode::ConfirmDialog {
        state.ui_mode = UiMode::Normal;
    }

    match state.favorites.clear() {
        Ok(()) => {
            state.favorites_selected = 0;
            state.set_notice(NoticeLevel::Info, "Favorites cleared.");
        }
        Err(e) => storage_failed(state, &e),
    }
    UpdateResult::none()
}

/// Export the current favorites to the configured directory
pub fn handle_download(state: &mut AppState) -> UpdateResult {
    let favorites = state.favorites.list().to_vec();
    UpdateResult::action(UpdateAction::ExportFavorites {
        directory: state.settings.export.directory.clone(),
        favorites,
    })
}

pub fn handle_export_completed(state: &mut AppState, path: PathBuf) -> UpdateResult {
    state.set_notice(
        NoticeLevel::Success,
        format!("Favorites exported to {}", path.display()),
    );
    UpdateResult::none()
}

pub fn handle_export_failed(state: &mut AppState, error: String) -> UpdateResult {
    state.set_notice(NoticeLevel::Error, format!("Export failed: {}", error));
    UpdateResult::none()
}

fn storage_failed(state: &mut AppState, error: &Error) {
    error!("Favorites storage error: {}", error);
    state.set_notice(
        NoticeLevel::Error,
        format!("Could not save favorites: {}", error),
    );
}
