//! Blocking alert dialog

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{palette, styles};

use super::modal_overlay;
use super::shortcut_spans;

pub struct AlertDialog<'a> {
    message: &'a str,
}

impl<'a> AlertDialog<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Widget for AlertDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = modal_overlay::centered_rect(46, 7, area);
        modal_overlay::prepare_modal(buf, area, modal_area);

        let block = styles::modal_block(" Notice ").title_alignment(Alignment::Center);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let [_, message_area, button_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(self.message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(palette::TEXT_PRIMARY))
            .wrap(Wrap { trim: true })
            .render(message_area, buf);

        Paragraph::new(Line::from(shortcut_spans(&[("Enter", "OK")])))
            .alignment(Alignment::Center)
            .render(button_area, buf);
    }
}
