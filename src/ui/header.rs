//! Title, status line and navigation bar rendering

use crate::app::AppState;
use crate::components::keybindings::KeybindingContext;
use crate::theme::{Styles, Theme, UiText};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the title bar
pub fn render_title(f: &mut Frame, area: Rect) {
    let title_widget = Paragraph::new(UiText::TITLE)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center)
        .style(Styles::title());
    f.render_widget(title_widget, area);
}

/// Render the status line
pub fn render_status(f: &mut Frame, state: &AppState, area: Rect) {
    let status = Paragraph::new(state.status_message.as_str())
        .alignment(Alignment::Center)
        .style(Theme::status_style(state.status_level));
    f.render_widget(status, area);
}

/// Render the navigation bar for the focused field
pub fn render_nav_bar(
    f: &mut Frame,
    state: &AppState,
    keybinding_ctx: &KeybindingContext,
    area: Rect,
) {
    let mut spans: Vec<Span> = Vec::new();
    for (i, item) in keybinding_ctx.get_nav_items(state.focus).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Styles::nav_hint()));
        }
        spans.push(Span::styled(item.key_display, Styles::nav_key()));
        spans.push(Span::styled(format!(" {}", item.action_label), Styles::nav_hint()));
    }

    let nav_bar = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(nav_bar, area);
}
