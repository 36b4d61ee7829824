//! Screen layout definitions for the TUI
//!
//! Wide terminals place the favorites panel to the right of the idea card;
//! narrow ones stack it underneath.

use ratatui::layout::{Constraint, Layout, Rect};

/// Terminals narrower than this stack the panels vertically
pub const WIDE_LAYOUT_MIN_WIDTH: u16 = 70;

/// Height of the custom-idea input (border + one text row)
const INPUT_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, idea source and keybindings
    pub header: Rect,

    /// Current idea card
    pub idea: Rect,

    /// Custom-idea input field
    pub input: Rect,

    /// Favorites panel
    pub favorites: Rect,

    /// One-line notice/hint bar
    pub footer: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3), // Header (glass container)
        Constraint::Min(6),    // Idea card, input and favorites
        Constraint::Length(1), // Footer
    ])
    .areas(area);

    let [left, favorites] = if area.width >= WIDE_LAYOUT_MIN_WIDTH {
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(body)
    } else {
        Layout::vertical([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(body)
    };

    let [idea, input] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(INPUT_HEIGHT)]).areas(left);

    ScreenAreas {
        header,
        idea,
        input,
        favorites,
        footer,
    }
}
