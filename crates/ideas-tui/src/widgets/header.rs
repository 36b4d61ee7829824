//! Header bar widget
//!
//! Shows the app title, the idea source and the main keybindings.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use ideas_app::state::LoadStatus;

use crate::theme::{palette, styles};

use super::shortcut_spans;

/// Main header showing app title, idea source, and keybindings
pub struct MainHeader<'a> {
    source_label: &'a str,
    load_status: &'a LoadStatus,
}

impl<'a> MainHeader<'a> {
    pub fn new(source_label: &'a str, load_status: &'a LoadStatus) -> Self {
        Self {
            source_label,
            load_status,
        }
    }

    /// Status dot and style for the load state
    fn status(&self) -> (&'static str, Style) {
        match self.load_status {
            LoadStatus::Pending => ("○", Style::default().fg(palette::TEXT_MUTED)),
            LoadStatus::Loaded => ("●", Style::default().fg(palette::STATUS_GREEN)),
            LoadStatus::Fallback { .. } => ("●", Style::default().fg(palette::STATUS_YELLOW)),
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (status_icon, status_style) = self.status();

        let mut left_spans = vec![
            Span::raw(" "),
            Span::styled(status_icon, status_style),
            Span::raw(" "),
            Span::styled(
                "Startup Ideas",
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(self.source_label, styles::text_secondary()),
        ];
        if matches!(self.load_status, LoadStatus::Fallback { .. }) {
            left_spans.push(Span::styled(
                " (fallback ideas)",
                Style::default().fg(palette::STATUS_YELLOW),
            ));
        }

        let left_line = Line::from(left_spans);
        let left_width = left_line.width() as u16;

        let shortcuts_line = Line::from(shortcut_spans(&[
            ("Space", "New"),
            ("s", "Save"),
            ("a", "All"),
            ("q", "Quit"),
        ]));
        let shortcuts_width = shortcuts_line.width() as u16;

        buf.set_line(inner.x, inner.y, &left_line, inner.width);

        // Right-align shortcuts when both sections fit
        if left_width + shortcuts_width + 3 <= inner.width {
            let shortcuts_x = inner.x + inner.width - shortcuts_width - 1;
            buf.set_line(shortcuts_x, inner.y, &shortcuts_line, shortcuts_width);
        }
    }
}
