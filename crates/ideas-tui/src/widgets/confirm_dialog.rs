//! Confirmation dialog widget (clear favorites)

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{palette, styles};

use super::modal_overlay;
use super::ConfirmDialogState;

/// Keys that pick the first and second option
const OPTION_KEYS: [&str; 2] = ["y", "n"];

/// Confirmation dialog widget
pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState) -> Self {
        Self { state }
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = modal_overlay::centered_rect(50, 8, area);
        modal_overlay::prepare_modal(buf, area, modal_area);

        let title = format!(" {} ", self.state.title);
        let block = styles::modal_block(&title).title_alignment(Alignment::Center);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let [_, message_area, _, buttons_area] = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Message
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Buttons
        ])
        .areas(inner);

        Paragraph::new(self.state.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(palette::STATUS_YELLOW))
            .wrap(Wrap { trim: true })
            .render(message_area, buf);

        let mut buttons = Vec::new();
        for (i, ((label, _), key)) in self.state.options.iter().zip(OPTION_KEYS).enumerate() {
            let key_style = if i == 0 {
                Style::default()
                    .fg(palette::STATUS_RED)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(palette::STATUS_GREEN)
                    .add_modifier(Modifier::BOLD)
            };
            if i > 0 {
                buttons.push(Span::raw("  "));
            }
            buttons.push(Span::styled("[", styles::text_muted()));
            buttons.push(Span::styled(key, key_style));
            buttons.push(Span::styled(format!("] {}", label), styles::text_muted()));
        }

        Paragraph::new(Line::from(buttons))
            .alignment(Alignment::Center)
            .render(buttons_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_confirm_dialog_renders_title_and_message() {
        let mut term = TestTerminal::new();
        let state = ConfirmDialogState::clear_favorites(2);

        term.render_widget(ConfirmDialog::new(&state), term.area());

        assert!(term.buffer_contains("Clear all favorites?"));
        assert!(term.buffer_contains("2 saved favorites"));
    }

    #[test]
    fn test_confirm_dialog_shows_options() {
        let mut term = TestTerminal::new();
        let state = ConfirmDialogState::clear_favorites(1);

        term.render_widget(ConfirmDialog::new(&state), term.area());

        assert!(term.buffer_contains("[y] Clear"));
        assert!(term.buffer_contains("[n] Cancel"));
    }

    #[test]
    fn test_confirm_dialog_small_terminal() {
        let mut term = TestTerminal::compact();
        let state = ConfirmDialogState::clear_favorites(3);

        term.render_widget(ConfirmDialog::new(&state), term.area());

        assert!(term.buffer_contains("Clear"));
    }
}
