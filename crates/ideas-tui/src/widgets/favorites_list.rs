//! Favorites panel

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap},
};

use ideas_core::IdeaRecord;

use crate::theme::styles;

/// Placeholder when no favorites are saved
pub const NO_FAVORITES_PLACEHOLDER: &str = "No favorites yet. Save ideas you like.";

/// One entry per favorite with the selected one highlighted
pub struct FavoritesList<'a> {
    favorites: &'a [IdeaRecord],
    selected: usize,
    focused: bool,
}

impl<'a> FavoritesList<'a> {
    pub fn new(favorites: &'a [IdeaRecord], selected: usize) -> Self {
        Self {
            favorites,
            selected,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

/// Title line plus an optional summary line
pub(crate) fn idea_item(record: &IdeaRecord) -> ListItem<'static> {
    let mut lines = vec![Line::from(Span::styled(
        record.title().to_string(),
        styles::text_primary(),
    ))];
    if !record.summary.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("  {}", record.summary),
            styles::text_secondary(),
        )));
    }
    ListItem::new(Text::from(lines))
}

impl Widget for FavoritesList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" Favorites ({}) ", self.favorites.len());
        let block = styles::glass_block(self.focused).title(Span::styled(
            title,
            if self.focused {
                styles::accent_bold()
            } else {
                styles::text_secondary()
            },
        ));

        if self.favorites.is_empty() {
            Paragraph::new(Span::styled(NO_FAVORITES_PLACEHOLDER, styles::text_muted()))
                .block(block)
                .wrap(Wrap { trim: true })
                .render(area, buf);
            return;
        }

        let items: Vec<ListItem> = self.favorites.iter().map(idea_item).collect();
        let highlight = if self.focused {
            styles::focused_selected()
        } else {
            styles::unfocused_selected()
        };
        let list = List::new(items)
            .block(block)
            .highlight_style(highlight)
            .highlight_symbol(if self.focused { "▶ " } else { "  " });

        let mut list_state = ListState::default().with_selected(Some(self.selected));
        StatefulWidget::render(list, area, buf, &mut list_state);
    }
}
