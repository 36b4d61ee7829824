//! All-ideas modal
//!
//! Lists every idea in the session with "use" and "save" actions on the
//! highlighted row.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use ideas_core::IdeaRecord;

use crate::theme::styles;

use super::favorites_list::idea_item;
use super::modal_overlay;
use super::shortcut_spans;

/// Placeholder when the idea list is empty
pub const NO_IDEAS_PLACEHOLDER: &str = "No ideas loaded.";

pub struct AllIdeasModal<'a> {
    ideas: &'a [IdeaRecord],
    selected: usize,
}

impl<'a> AllIdeasModal<'a> {
    pub fn new(ideas: &'a [IdeaRecord], selected: usize) -> Self {
        Self { ideas, selected }
    }

    /// Screen rect the modal content occupies
    pub fn modal_rect(screen: Rect) -> Rect {
        modal_overlay::centered_rect_percent(80, 80, screen)
    }
}

impl Widget for AllIdeasModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = Self::modal_rect(area);
        modal_overlay::prepare_modal(buf, area, modal_area);

        let title = format!(" All Ideas ({}) ", self.ideas.len());
        let block = styles::modal_block(&title);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let [list_area, hints_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        if self.ideas.is_empty() {
            Paragraph::new(Span::styled(NO_IDEAS_PLACEHOLDER, styles::text_muted()))
                .alignment(Alignment::Center)
                .render(list_area, buf);
        } else {
            let items: Vec<ListItem> = self.ideas.iter().map(idea_item).collect();
            let list = List::new(items)
                .highlight_style(styles::focused_selected())
                .highlight_symbol("▶ ");
            let mut list_state = ListState::default().with_selected(Some(self.selected));
            StatefulWidget::render(list, list_area, buf, &mut list_state);
        }

        let hints = Line::from(shortcut_spans(&[
            ("Enter", "Use"),
            ("s", "Save"),
            ("Esc", "Close"),
        ]));
        Paragraph::new(hints)
            .alignment(Alignment::Center)
            .render(hints_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_modal_lists_every_idea() {
        let mut term = TestTerminal::new();
        let ideas = vec![
            IdeaRecord::new("Recipe box", "Share family recipes."),
            IdeaRecord::new("Bike repair van", ""),
        ];

        term.render_widget(AllIdeasModal::new(&ideas, 1), term.area());

        assert!(term.buffer_contains("All Ideas (2)"));
        assert!(term.buffer_contains("Recipe box"));
        assert!(term.buffer_contains("▶ Bike repair van"));
        assert!(term.buffer_contains("[Esc] Close"));
    }

    #[test]
    fn test_modal_placeholder_when_empty() {
        let mut term = TestTerminal::new();

        term.render_widget(AllIdeasModal::new(&[], 0), term.area());

        assert!(term.buffer_contains(NO_IDEAS_PLACEHOLDER));
    }

    #[test]
    fn test_modal_rect_is_inside_screen() {
        let screen = Rect::new(0, 0, 80, 24);
        let rect = AllIdeasModal::modal_rect(screen);
        assert!(rect.x > 0 && rect.y > 0);
        assert!(rect.right() < screen.right());
        assert!(rect.bottom() < screen.bottom());
    }
}
