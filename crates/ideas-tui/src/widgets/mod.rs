//! Custom widget components

mod alert;
mod all_ideas_modal;
mod confirm_dialog;
mod favorites_list;
mod footer;
mod header;
mod idea_card;
mod idea_input;
pub mod modal_overlay;

pub use alert::AlertDialog;
pub use all_ideas_modal::AllIdeasModal;
pub use confirm_dialog::ConfirmDialog;
pub use favorites_list::{FavoritesList, NO_FAVORITES_PLACEHOLDER};
pub use footer::Footer;
pub use header::MainHeader;
pub use idea_card::{IdeaCard, NO_IDEA_PLACEHOLDER};
pub use idea_input::IdeaInput;

// Re-export state types from app layer (these are used by render/)
pub use ideas_app::confirm_dialog::ConfirmDialogState;

use ratatui::text::Span;

use crate::theme::styles;

/// Build `[k] Label  [k] Label` hint spans
pub(crate) fn shortcut_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, label)) in hints.iter().enumerate() {
        let separator = if i + 1 < hints.len() { "  " } else { "" };
        spans.push(Span::styled("[", styles::text_muted()));
        spans.push(Span::styled(*key, styles::keybinding()));
        spans.push(Span::styled(
            format!("] {}{}", label, separator),
            styles::text_muted(),
        ));
    }
    spans
}
