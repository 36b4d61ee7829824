//! Custom-idea input field

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Single-line input for adding a custom idea
pub struct IdeaInput<'a> {
    value: &'a str,
    active: bool,
}

impl<'a> IdeaInput<'a> {
    pub fn new(value: &'a str, active: bool) -> Self {
        Self { value, active }
    }
}

impl Widget for IdeaInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.active {
            Span::styled(" Add your idea [Enter] ", styles::accent_bold())
        } else {
            Span::styled(" Add your idea [i] ", styles::text_secondary())
        };
        let block = styles::glass_block(self.active).title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let line = if self.value.is_empty() && !self.active {
            Line::from(Span::styled("Type a startup idea...", styles::text_muted()))
        } else {
            let mut spans = Vec::with_capacity(2);

            // Keep the cursor end of long input visible
            let max = inner.width.saturating_sub(1) as usize;
            let chars = self.value.chars().count();
            let visible: String = self.value.chars().skip(chars.saturating_sub(max)).collect();
            spans.push(Span::styled(visible, styles::text_primary()));

            if self.active {
                spans.push(Span::styled("_", styles::keybinding()));
            }
            Line::from(spans)
        };

        Paragraph::new(line).render(inner, buf);
    }
}
