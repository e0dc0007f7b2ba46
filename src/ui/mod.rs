//! User interface rendering module
//!
//! - `header` - title, status line and navigation bar
//! - `form` - grinder pickers, clicks field and result panel

mod form;
mod header;

use crate::app::AppState;
use crate::catalog::Catalog;
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::theme::UiConstants;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Renders the converter screen
#[derive(Debug, Default)]
pub struct UiRenderer;

impl UiRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the whole screen for the current state
    pub fn render(
        &self,
        f: &mut Frame,
        state: &AppState,
        catalog: &Catalog,
        keybinding_ctx: &KeybindingContext,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(UiConstants::TITLE_HEIGHT),
                Constraint::Min(6), // Pickers
                Constraint::Length(UiConstants::INPUT_HEIGHT),
                Constraint::Length(UiConstants::RESULT_HEIGHT),
                Constraint::Length(UiConstants::STATUS_BAR_HEIGHT),
                Constraint::Length(UiConstants::NAV_BAR_HEIGHT),
            ])
            .split(f.area());

        header::render_title(f, chunks[0]);
        form::render_pickers(f, state, catalog, chunks[1]);
        form::render_clicks_input(f, state, catalog, chunks[2]);
        form::render_result(f, state, chunks[3]);
        header::render_status(f, state, chunks[4]);
        header::render_nav_bar(f, state, keybinding_ctx, chunks[5]);

        if state.help_visible {
            HelpOverlay::new(state.focus, keybinding_ctx).render(f, f.area());
        }
    }
}
