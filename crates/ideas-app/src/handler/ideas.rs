//! Idea list handlers: loading, random picks and custom ideas

use ideas_core::prelude::*;
use ideas_core::{fallback_ideas, IdeaRecord};

use crate::source::IdeaSource;
use crate::state::{AppState, LoadStatus, NoticeLevel, UiMode};

use super::{UpdateAction, UpdateResult};

/// Enter the loading screen and ask the event loop to fetch `source`
pub fn handle_load(state: &mut AppState, source: IdeaSource) -> UpdateResult {
    state.ui_mode = UiMode::Loading;
    state.load_status = LoadStatus::Pending;
    state.source_label = source.label();

    UpdateResult::action(UpdateAction::LoadIdeas {
        source,
        timeout: state.settings.source_timeout(),
    })
}

pub fn handle_loaded(state: &mut AppState, ideas: Vec<IdeaRecord>) -> UpdateResult {
    info!("Idea list ready with {} ideas", ideas.len());
    state.ideas.replace(ideas);
    state.load_status = LoadStatus::Loaded;
    finish_loading(state);
    UpdateResult::none()
}

/// Fall back to the built-in ideas
pub fn handle_load_failed(state: &mut AppState, error: String) -> UpdateResult {
    error!("Failed to load ideas from {}: {}", state.source_label, error);
    state.ideas.replace(fallback_ideas());
    state.set_notice(
        NoticeLevel::Warning,
        format!(
            "Could not load ideas from {}. Showing fallback ideas.",
            state.source_label
        ),
    );
    state.load_status = LoadStatus::Fallback { error };
    finish_loading(state);
    UpdateResult::none()
}

fn finish_loading(state: &mut AppState) {
    if state.ui_mode == UiMode::Loading {
        state.ui_mode = UiMode::Normal;
    }
    show_random_idea(state);
}

/// Make a random idea current, or clear the card when there are none
pub fn show_random_idea(state: &mut AppState) {
    state.current = state.ideas.pick_random(&mut state.rng).cloned();
}

/// Prepend a custom idea from the input field.
///
/// Blank input is ignored and keeps the field open with its content.
pub fn handle_submit_custom(state: &mut AppState, text: &str) -> UpdateResult {
    let Some(record) = state.ideas.add_custom(text) else {
        debug!("Ignoring blank custom idea");
        return UpdateResult::none();
    };

    info!("Added custom idea: {}", record.idea);
    state.current = Some(record);
    state.input.clear();
    if state.ui_mode == UiMode::AddIdea {
        state.ui_mode = UiMode::Normal;
    }
    UpdateResult::none()
}
