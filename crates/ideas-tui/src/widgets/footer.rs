//! Footer bar: the active notice, or key hints for the current mode

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use ideas_app::state::{Focus, Notice, UiMode};

use crate::theme::styles;

use super::shortcut_spans;

pub struct Footer<'a> {
    notice: Option<&'a Notice>,
    mode: UiMode,
    focus: Focus,
}

impl<'a> Footer<'a> {
    pub fn new(notice: Option<&'a Notice>, mode: UiMode, focus: Focus) -> Self {
        Self {
            notice,
            mode,
            focus,
        }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match (self.mode, self.focus) {
            (UiMode::Loading, _) => &[("q", "Quit")],
            (UiMode::AddIdea, _) => &[("Enter", "Add"), ("Ctrl+U", "Clear"), ("Esc", "Done")],
            (UiMode::AllIdeas, _) => &[
                ("↑↓", "Move"),
                ("Enter", "Use"),
                ("s", "Save"),
                ("Esc", "Close"),
            ],
            (UiMode::ConfirmDialog, _) => &[("y", "Confirm"), ("n", "Cancel")],
            (UiMode::Alert, _) => &[("Enter", "OK")],
            (UiMode::Normal, Focus::Favorites) => &[
                ("↑↓", "Select"),
                ("y", "Copy"),
                ("x", "Remove"),
                ("X", "Clear all"),
                ("d", "Download"),
                ("Tab", "Idea"),
            ],
            (UiMode::Normal, Focus::Idea) => &[
                ("n", "New"),
                ("s", "Save"),
                ("c", "Copy"),
                ("a", "All ideas"),
                ("i", "Add idea"),
                ("d", "Download"),
                ("X", "Clear"),
                ("Tab", "Favorites"),
            ],
        }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = match self.notice {
            Some(notice) => {
                let (icon, style) = styles::notice_indicator(notice.level);
                Line::from(vec![
                    Span::raw(" "),
                    Span::styled(icon, style),
                    Span::raw(" "),
                    Span::styled(notice.message.as_str(), style),
                ])
            }
            None => {
                let mut spans = vec![Span::raw(" ")];
                spans.extend(shortcut_spans(self.hints()));
                Line::from(spans)
            }
        };

        Paragraph::new(line).render(area, buf);
    }
}
