//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::{ListNav, Message};
use crate::state::{AppState, Focus, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Loading => handle_key_loading(key),
        UiMode::Normal => handle_key_normal(state, key),
        UiMode::AddIdea => handle_key_add_idea(state, key),
        UiMode::AllIdeas => handle_key_all_ideas(state, key),
        UiMode::ConfirmDialog => handle_key_confirm_dialog(key),
        UiMode::Alert => handle_key_alert(key),
    }
}

/// Handle key events in loading mode
fn handle_key_loading(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events in normal mode
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    if state.focus == Focus::Favorites {
        if let Some(msg) = handle_key_favorites(state, key) {
            return Some(msg);
        }
    }

    match key {
        // Quit
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // Current idea
        InputKey::Char(' ' | 'n') => Some(Message::NewIdea),
        InputKey::Char('s') => Some(Message::SaveCurrent),
        InputKey::Char('c') => Some(Message::CopyCurrent),

        InputKey::Char('a') => Some(Message::ShowAllIdeas),
        InputKey::Char('i' | '+') => Some(Message::StartAddIdea),

        // Favorites
        InputKey::Char('d') => Some(Message::DownloadFavorites),
        InputKey::Char('X') => Some(Message::RequestClearFavorites),
        InputKey::Tab | InputKey::BackTab => Some(Message::ToggleFocus),

        _ => None,
    }
}

/// Keys that act on the selected favorite; everything else falls through
fn handle_key_favorites(state: &AppState, key: InputKey) -> Option<Message> {
    let index = state.favorites_selected;
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::FavoritesNav(ListNav::Up)),
        InputKey::Down | InputKey::Char('j') => Some(Message::FavoritesNav(ListNav::Down)),
        InputKey::Home => Some(Message::FavoritesNav(ListNav::Home)),
        InputKey::End => Some(Message::FavoritesNav(ListNav::End)),
        InputKey::PageUp => Some(Message::FavoritesNav(ListNav::PageUp)),
        InputKey::PageDown => Some(Message::FavoritesNav(ListNav::PageDown)),
        InputKey::Char('y' | 'c') => Some(Message::CopyFavorite { index }),
        InputKey::Char('x') | InputKey::Delete => Some(Message::RemoveFavorite { index }),
        _ => None,
    }
}

/// Handle key events while typing a custom idea
fn handle_key_add_idea(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Leave the field, keeping its content
        InputKey::Esc => Some(Message::CancelAddIdea),

        InputKey::Enter => Some(Message::SubmitCustomIdea {
            text: state.input.clone(),
        }),

        // Delete character
        InputKey::Backspace => {
            let mut text = state.input.clone();
            text.pop();
            Some(Message::AddIdeaInput { text })
        }

        // Clear all input
        InputKey::CharCtrl('u') => Some(Message::AddIdeaInput {
            text: String::new(),
        }),

        InputKey::CharCtrl('c') => Some(Message::Quit),

        // Type character
        InputKey::Char(c) => {
            let mut text = state.input.clone();
            text.push(c);
            Some(Message::AddIdeaInput { text })
        }

        _ => None,
    }
}

/// Handle key events in the all-ideas modal
fn handle_key_all_ideas(state: &AppState, key: InputKey) -> Option<Message> {
    let index = state.all_ideas.selected;
    let has_ideas = !state.ideas.is_empty();
    match key {
        InputKey::Esc | InputKey::Char('a' | 'q') => Some(Message::CloseAllIdeas),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Up | InputKey::Char('k') => Some(Message::AllIdeasNav(ListNav::Up)),
        InputKey::Down | InputKey::Char('j') => Some(Message::AllIdeasNav(ListNav::Down)),
        InputKey::Home | InputKey::Char('g') => Some(Message::AllIdeasNav(ListNav::Home)),
        InputKey::End | InputKey::Char('G') => Some(Message::AllIdeasNav(ListNav::End)),
        InputKey::PageUp => Some(Message::AllIdeasNav(ListNav::PageUp)),
        InputKey::PageDown => Some(Message::AllIdeasNav(ListNav::PageDown)),

        InputKey::Enter | InputKey::Char('u') if has_ideas => Some(Message::UseIdea { index }),
        InputKey::Char('s') if has_ideas => Some(Message::SaveIdea { index }),

        _ => None,
    }
}

/// Handle key events in the clear-favorites confirmation
fn handle_key_confirm_dialog(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y' | 'Y') | InputKey::Enter => Some(Message::ConfirmClearFavorites),
        InputKey::Char('n' | 'N' | 'q') | InputKey::Esc => Some(Message::CancelConfirm),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events while an alert is shown
fn handle_key_alert(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc | InputKey::Char(' ' | 'q') => {
            Some(Message::DismissAlert)
        }
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}
