//! Main render/view function (View in TEA pattern)


use ideas_app::state::{AppState, Focus, HitRect, UiMode};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::{palette, styles};
use crate::widgets::modal_overlay;

/// Render the complete UI (View function in TEA)
///
/// Rebuilds every region from state. The only state written is the
/// all-ideas modal rect, recorded for mouse hit-testing.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(
        widgets::MainHeader::new(&state.source_label, &state.load_status),
        areas.header,
    );

    let normal = state.ui_mode == UiMode::Normal;
    frame.render_widget(
        widgets::IdeaCard::new(state.current.as_ref()).focused(normal && state.focus == Focus::Idea),
        areas.idea,
    );
    frame.render_widget(
        widgets::IdeaInput::new(&state.input, state.ui_mode == UiMode::AddIdea),
        areas.input,
    );

    let favorites_focused = normal && state.focus == Focus::Favorites;
    let favorites_selected = state.favorites_selected;
    let favorites = state.favorites.list();
    frame.render_widget(
        widgets::FavoritesList::new(favorites, favorites_selected).focused(favorites_focused),
        areas.favorites,
    );

    frame.render_widget(
        widgets::Footer::new(state.notice.as_ref(), state.ui_mode, state.focus),
        areas.footer,
    );

    // The modal stays visible underneath an alert raised from it
    if state.all_ideas.is_shown() {
        let modal_rect = widgets::AllIdeasModal::modal_rect(area);
        frame.render_widget(
            widgets::AllIdeasModal::new(state.ideas.ideas(), state.all_ideas.selected),
            area,
        );
        state.all_ideas.area = Some(HitRect::new(
            modal_rect.x,
            modal_rect.y,
            modal_rect.width,
            modal_rect.height,
        ));
    }

    // Render modal overlays based on UI mode
    match state.ui_mode {
        UiMode::Loading => render_loading_screen(frame, state, area),
        UiMode::ConfirmDialog => {
            if let Some(ref dialog_state) = state.confirm_dialog_state {
                frame.render_widget(widgets::ConfirmDialog::new(dialog_state), area);
            }
        }
        UiMode::Alert => {
            if let Some(ref alert) = state.alert {
                frame.render_widget(widgets::AlertDialog::new(&alert.message), area);
            }
        }
        UiMode::Normal | UiMode::AddIdea | UiMode::AllIdeas => {}
    }
}

/// Centered box shown until the idea list arrives
fn render_loading_screen(frame: &mut Frame, state: &AppState, area: Rect) {
    let modal_area = modal_overlay::centered_rect(50, 5, area);
    modal_overlay::prepare_modal(frame.buffer_mut(), area, modal_area);

    let block = styles::modal_block(" Startup Ideas ").title_alignment(Alignment::Center);
    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let lines = vec![
        Line::from(Span::styled(
            "Loading ideas...",
            Style::default()
                .fg(palette::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            state.source_label.as_str(),
            styles::text_secondary(),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}
