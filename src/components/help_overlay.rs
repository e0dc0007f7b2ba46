//! Help overlay component
//!
//! Displays context-sensitive help for the focused field in a centered window.

use super::keybindings::{HelpSection, KeybindingContext};
use crate::theme::{Colors, Styles};
use crate::types::FormField;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Help overlay component
pub struct HelpOverlay {
    content: Vec<Line<'static>>,
}

impl HelpOverlay {
    /// Create a new help overlay for the given field
    pub fn new(field: FormField, keybinding_ctx: &KeybindingContext) -> Self {
        let sections = keybinding_ctx.get_help_content(field);
        Self {
            content: Self::build_content(&sections, field),
        }
    }

    /// Build the help content from sections
    fn build_content(sections: &[HelpSection], field: FormField) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = Vec::new();

        lines.push(Line::from(vec![Span::styled(
            "  Grinder Converter Help  ",
            Styles::title(),
        )]));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Focused: ", Style::default().fg(Colors::FG_MUTED)),
            Span::styled(field.to_string(), Style::default().fg(Colors::SECONDARY)),
        ]));
        lines.push(Line::from(""));

        for section in sections {
            lines.push(Line::from(vec![Span::styled(
                format!("  {}  ", section.title),
                Style::default()
                    .fg(Colors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            )]));

            for (key, description) in &section.items {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(
                        format!("{:<10}", key),
                        Style::default()
                            .fg(Colors::PRIMARY)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(description.clone(), Styles::text()),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![Span::styled(
            "Press ? or Esc to close",
            Styles::text_muted(),
        )]));

        lines
    }

    /// Number of content lines
    pub fn line_count(&self) -> usize {
        self.content.len()
    }

    /// Render the help overlay centered in `parent`
    pub fn render(&self, f: &mut Frame, parent: Rect) {
        let height = (self.content.len() as u16 + 2).min(parent.height);
        let area = centered_rect(parent, 60, height, 44, 72);

        f.render_widget(Clear, area);
        let widget = Paragraph::new(self.content.clone())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help ")
                    .border_style(Styles::border_active())
                    .style(Styles::panel_bg()),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(widget, area);
    }
}

/// Rectangle of `width_percent` of the parent width (bounded by min/max) and
/// the given height, centered in the parent.
fn centered_rect(parent: Rect, width_percent: u16, height: u16, min_w: u16, max_w: u16) -> Rect {
    let scaled = u32::from(parent.width) * u32::from(width_percent) / 100;
    let width = u16::try_from(scaled)
        .unwrap_or(u16::MAX)
        .clamp(min_w, max_w)
        .min(parent.width);
    let x = parent.x + (parent.width - width) / 2;
    let y = parent.y + parent.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_field_bindings() {
        let ctx = KeybindingContext::new();
        let overlay = HelpOverlay::new(FormField::Source, &ctx);
        let text: Vec<String> = overlay
            .content
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert!(text.iter().any(|l| l.contains("Select grinder")));
        assert!(text.iter().any(|l| l.contains("From Grinder")));
    }

    #[test]
    fn test_centered_rect_fits_parent() {
        let parent = Rect::new(0, 0, 40, 10);
        let area = centered_rect(parent, 60, 30, 44, 72);
        assert!(area.width <= parent.width);
        assert_eq!(area.x, 0);

        let wide = Rect::new(0, 0, 100, 40);
        let area = centered_rect(wide, 60, 20, 44, 72);
        assert_eq!(area.width, 60);
        assert_eq!(area.x, 20);
        assert_eq!(area.y, 10);
    }

    #[test]
    fn test_centered_rect_on_very_wide_terminal() {
        let parent = Rect::new(0, 0, 1200, 40);
        let area = centered_rect(parent, 60, 20, 44, 72);
        assert_eq!(area.width, 72);
        assert_eq!(area.x, 564);
        assert_eq!(area.y, 10);

        let widest = Rect::new(0, 0, u16::MAX, 40);
        let area = centered_rect(widest, 100, 20, 44, 72);
        assert_eq!(area.width, 72);
    }
}
