//! Converter form rendering
//!
//! Grinder pickers, the clicks field with its micron hint, and the result
//! panel. The result panel draws nothing while the form has no result.

use crate::app::AppState;
use crate::catalog::Catalog;
use crate::theme::{Styles, Theme, UiText};
use crate::types::{FormField, format_microns};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

/// Render the source and target pickers side by side
pub fn render_pickers(f: &mut Frame, state: &AppState, catalog: &Catalog, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_picker(
        f,
        catalog,
        PickerView {
            field: FormField::Source,
            chosen: state.form.source(),
            cursor: state.source_cursor,
            focused: state.focus == FormField::Source,
            placeholder: UiText::SOURCE_PLACEHOLDER,
        },
        columns[0],
    );
    render_picker(
        f,
        catalog,
        PickerView {
            field: FormField::Target,
            chosen: state.form.target(),
            cursor: state.target_cursor,
            focused: state.focus == FormField::Target,
            placeholder: UiText::TARGET_PLACEHOLDER,
        },
        columns[1],
    );
}

struct PickerView<'a> {
    field: FormField,
    chosen: Option<&'a str>,
    cursor: usize,
    focused: bool,
    placeholder: &'static str,
}

fn render_picker(f: &mut Frame, catalog: &Catalog, view: PickerView<'_>, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let items: Vec<ListItem> = catalog
        .names()
        .map(|name| {
            if view.chosen == Some(name) {
                ListItem::new(format!("● {}", name)).style(Styles::chosen())
            } else {
                ListItem::new(format!("  {}", name)).style(Styles::text())
            }
        })
        .collect();

    let title = format!(" {}: {} ", view.field, view.chosen.unwrap_or(view.placeholder));
    let mut list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Theme::field_border(view.focused)),
    );
    if view.focused {
        list = list.highlight_style(Styles::selected()).highlight_symbol("▸");
    }

    let mut list_state = ListState::default().with_selected(Some(view.cursor));
    f.render_stateful_widget(list, rows[0], &mut list_state);

    // Profile summary under the picker
    let summary = match view.chosen.and_then(|name| catalog.get(name)) {
        Some(profile) => Paragraph::new(profile.summary()).style(Styles::text_secondary()),
        None => Paragraph::new(view.placeholder).style(Styles::text_muted()),
    };
    f.render_widget(summary, rows[1]);
}

/// Render the clicks field and its micron hint
pub fn render_clicks_input(f: &mut Frame, state: &AppState, catalog: &Catalog, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let focused = state.focus == FormField::Clicks;
    let title = match state.form.source_profile(catalog) {
        Some(profile) => format!(" {} 0-{} ", FormField::Clicks, profile.max_clicks),
        None => format!(" {} ", FormField::Clicks),
    };

    let input = state.form.input();
    let content = if input.is_empty() {
        Line::from(Span::styled(UiText::CLICKS_PLACEHOLDER, Styles::text_muted()))
    } else {
        Line::from(Span::styled(input, Styles::text()))
    };

    let widget = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Theme::field_border(focused)),
    );
    f.render_widget(widget, rows[0]);

    if focused {
        let x = rows[0].x + 1 + input.len() as u16;
        f.set_cursor_position((x.min(rows[0].right().saturating_sub(2)), rows[0].y + 1));
    }

    if let Some(microns) = state.form.source_microns(catalog) {
        let hint = Paragraph::new(format!("≈ {} microns", format_microns(microns)))
            .style(Styles::text_secondary());
        f.render_widget(hint, rows[1]);
    }
}

/// Render the converted setting, or nothing when there is no result
pub fn render_result(f: &mut Frame, state: &AppState, area: Rect) {
    let Some(result) = state.form.result() else {
        return;
    };

    let lines = vec![
        Line::from(Span::styled(
            format!("Converted Setting: {} clicks", result.clicks),
            Styles::result_headline(),
        )),
        Line::from(Span::styled(
            format!("≈ {} microns", format_microns(result.microns)),
            Styles::text_secondary(),
        )),
    ];

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Result ")
                .border_style(Styles::border_active())
                .style(Styles::panel_bg_alt()),
        );
    f.render_widget(widget, area);
}
