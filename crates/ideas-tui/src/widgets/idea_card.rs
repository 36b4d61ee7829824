//! Current idea card

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use ideas_core::IdeaRecord;

use crate::theme::styles;

/// Placeholder when there is no current idea
pub const NO_IDEA_PLACEHOLDER: &str = "No idea available.";

/// Title and summary of the current idea
pub struct IdeaCard<'a> {
    idea: Option<&'a IdeaRecord>,
    focused: bool,
}

impl<'a> IdeaCard<'a> {
    pub fn new(idea: Option<&'a IdeaRecord>) -> Self {
        Self {
            idea,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for IdeaCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(Span::styled(
            " Idea ",
            if self.focused {
                styles::accent_bold()
            } else {
                styles::text_secondary()
            },
        ));

        let lines = match self.idea {
            Some(idea) => {
                let mut lines = vec![Line::from(Span::styled(
                    idea.title().to_string(),
                    styles::accent_bold(),
                ))];
                if !idea.summary.is_empty() {
                    lines.push(Line::raw(""));
                    lines.push(Line::from(Span::styled(
                        idea.summary.clone(),
                        styles::text_primary(),
                    )));
                }
                lines
            }
            None => vec![Line::from(Span::styled(
                NO_IDEA_PLACEHOLDER,
                styles::text_muted(),
            ))],
        };

        Paragraph::new(lines)
            .block(block)
            .style(Style::default())
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use ideas_core::UNTITLED_IDEA;

    #[test]
    fn test_idea_card_shows_title_and_summary() {
        let mut term = TestTerminal::new();
        let idea = IdeaRecord::new("Recipe box", "Share family recipes.");

        term.render_widget(IdeaCard::new(Some(&idea)), term.area());

        assert!(term.buffer_contains("Recipe box"));
        assert!(term.buffer_contains("Share family recipes."));
    }

    #[test]
    fn test_idea_card_placeholder() {
        let mut term = TestTerminal::new();

        term.render_widget(IdeaCard::new(None), term.area());

        assert!(term.buffer_contains(NO_IDEA_PLACEHOLDER));
    }

    #[test]
    fn test_idea_card_untitled() {
        let mut term = TestTerminal::new();
        let idea = IdeaRecord::new("", "A summary without a title");

        term.render_widget(IdeaCard::new(Some(&idea)), term.area());

        assert!(term.buffer_contains(UNTITLED_IDEA));
    }
}
