//! All-ideas modal handlers

use crate::message::ListNav;
use crate::state::{navigate, AppState, UiMode};

use super::UpdateResult;

/// Open the modal listing every idea
pub fn handle_show(state: &mut AppState) -> UpdateResult {
    state.all_ideas.show();
    state.ui_mode = UiMode::AllIdeas;
    UpdateResult::none()
}

pub fn handle_close(state: &mut AppState) -> UpdateResult {
    state.all_ideas.hide();
    if state.ui_mode == UiMode::AllIdeas {
        state.ui_mode = UiMode::Normal;
    }
    UpdateResult::none()
}

pub fn handle_nav(state: &mut AppState, nav: ListNav) -> UpdateResult {
    state.all_ideas.selected = navigate(state.all_ideas.selected, state.ideas.len(), nav);
    UpdateResult::none()
}

/// Make the idea at `index` current and close the modal
pub fn handle_use(state: &mut AppState, index: usize) -> UpdateResult {
    let Some(record) = state.ideas.get(index).cloned() else {
        return UpdateResult::none();
    };
    state.current = Some(record);
    handle_close(state)
}

/// A left click outside the modal content closes it
pub fn handle_click(state: &mut AppState, column: u16, row: u16) -> UpdateResult {
    if state.ui_mode != UiMode::AllIdeas || !state.all_ideas.is_shown() {
        return UpdateResult::none();
    }

    match state.all_ideas.area {
        Some(area) if !area.contains(column, row) => handle_close(state),
        // Not rendered yet, or inside the content
        _ => UpdateResult::none(),
    }
}
