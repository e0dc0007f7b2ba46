//! Application module
//!
//! Contains the converter app, its event loop and key handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState)
//! - Main module - App struct and event loop

mod state;

pub use state::AppState;

use crate::catalog::Catalog;
use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::form::InputOutcome;
use crate::input::InputHandler;
use crate::theme::StatusLevel;
use crate::types::{FormField, format_microns};
use crate::ui::UiRenderer;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::Duration;
use tracing::{debug, info};

/// Main application struct
pub struct App {
    catalog: Catalog,
    state: AppState,
    ui_renderer: UiRenderer,
    input_handler: InputHandler,
    /// Keybinding context for navigation hints
    keybinding_context: KeybindingContext,
}

impl App {
    /// Create a new application instance over a loaded catalog
    pub fn new(catalog: Catalog) -> Self {
        info!(grinders = catalog.len(), "Converter form mounted");
        Self {
            catalog,
            state: AppState::default(),
            ui_renderer: UiRenderer::new(),
            input_handler: InputHandler::new(),
            keybinding_context: KeybindingContext::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Get reference to keybinding context
    pub fn keybinding_context(&self) -> &KeybindingContext {
        &self.keybinding_context
    }

    /// Toggle help overlay visibility
    pub fn toggle_help(&mut self) {
        self.state.help_visible = !self.state.help_visible;
    }

    /// Draw one frame
    pub fn render(&self, f: &mut Frame) {
        self.ui_renderer
            .render(f, &self.state, &self.catalog, &self.keybinding_context);
    }

    /// Run the main application loop
    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        info!("Starting main application loop");

        loop {
            terminal.draw(|f| self.render(f))?;

            if crossterm::event::poll(Duration::from_millis(50))? {
                match crossterm::event::read()? {
                    Event::Key(key_event) => {
                        if self.handle_key_event(key_event) {
                            break; // Exit requested
                        }
                    }
                    Event::Resize(width, height) => {
                        debug!("Terminal resized to {}x{}", width, height);
                    }
                    _ => {}
                }
            }
        }

        info!("Main application loop finished");
        Ok(())
    }

    /// Handle a key event. Returns `true` when the app should exit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        // Windows terminals also report key releases
        if key_event.kind == KeyEventKind::Release {
            return false;
        }

        if self.state.help_visible {
            if matches!(key_event.code, KeyCode::Esc | KeyCode::Char('?')) {
                self.state.help_visible = false;
            }
            return false;
        }

        let focus = self.state.focus;
        let Some(action) =
            self.keybinding_context
                .action_for(focus, key_event.code, key_event.modifiers)
        else {
            return false;
        };

        match action {
            KeyAction::Quit => {
                info!("Quit requested");
                return true;
            }
            KeyAction::Help => self.toggle_help(),
            KeyAction::NextField => self.state.focus = focus.next(),
            KeyAction::PreviousField => self.state.focus = focus.previous(),
            KeyAction::NavigateUp => self.move_cursor(false),
            KeyAction::NavigateDown => self.move_cursor(true),
            KeyAction::Select => self.select_highlighted(),
            KeyAction::ClearField => self.clear_focused(),
            KeyAction::EditClicks => {
                if let Some(candidate) = self
                    .input_handler
                    .clicks_candidate(self.state.form.input(), key_event)
                {
                    self.edit_clicks(&candidate);
                }
            }
        }

        false
    }

    fn move_cursor(&mut self, forward: bool) {
        let len = self.catalog.len();
        let cursor = match self.state.focus {
            FormField::Source => &mut self.state.source_cursor,
            FormField::Target => &mut self.state.target_cursor,
            FormField::Clicks => return,
        };
        *cursor = self.input_handler.step_cursor(*cursor, len, forward);
    }

    /// Select the highlighted grinder in the focused picker and move on
    fn select_highlighted(&mut self) {
        let Some(cursor) = self.state.picker_cursor() else {
            return;
        };
        let Some(profile) = self.catalog.profiles().get(cursor) else {
            return;
        };
        let name = profile.name.clone();

        match self.state.focus {
            FormField::Source => {
                self.state.form.select_source(&self.catalog, Some(&name));
                self.state
                    .set_status(StatusLevel::Info, format!("From {}: {}", name, profile.summary()));
            }
            FormField::Target => {
                self.state.form.select_target(&self.catalog, Some(&name));
                self.state
                    .set_status(StatusLevel::Info, format!("To {}: {}", name, profile.summary()));
            }
            FormField::Clicks => return,
        }
        self.state.focus = self.state.focus.next();
    }

    fn clear_focused(&mut self) {
        match self.state.focus {
            FormField::Source => {
                self.state.form.select_source(&self.catalog, None);
                self.state
                    .set_status(StatusLevel::Info, "Source grinder cleared");
            }
            FormField::Target => {
                self.state.form.select_target(&self.catalog, None);
                self.state
                    .set_status(StatusLevel::Info, "Target grinder cleared");
            }
            FormField::Clicks => self.edit_clicks(""),
        }
    }

    fn edit_clicks(&mut self, candidate: &str) {
        let outcome = self.state.form.edit_input(&self.catalog, candidate);
        let (level, message) = match outcome {
            InputOutcome::Cleared => (StatusLevel::Info, "Clicks cleared".to_string()),
            InputOutcome::Accepted(_) => match self.state.form.result() {
                Some(result) => (
                    StatusLevel::Success,
                    format!(
                        "Converted Setting: {} clicks (≈ {} microns)",
                        result.clicks,
                        format_microns(result.microns)
                    ),
                ),
                None => (
                    StatusLevel::Info,
                    "Select a target grinder to convert".to_string(),
                ),
            },
            InputOutcome::Rejected(reason) => {
                (StatusLevel::Warning, format!("Input cleared: {}", reason))
            }
        };
        self.state.set_status(level, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_digits(app: &mut App, digits: &str) {
        for c in digits.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_new_app_starts_on_source() {
        let app = App::new(Catalog::builtin());
        assert_eq!(app.state().focus, FormField::Source);
        assert!(!app.state().help_visible);
    }

    #[test]
    fn test_full_conversion_by_keyboard() {
        let mut app = App::new(Catalog::builtin());

        // Comandante C40 is the third entry
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state().form.source(), Some("Comandante C40"));
        assert_eq!(app.state().focus, FormField::Target);

        // Kingrinder K6 is the first entry
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state().form.target(), Some("Kingrinder K6"));
        assert_eq!(app.state().focus, FormField::Clicks);

        type_digits(&mut app, "10");
        let result = app.state().form.result().unwrap();
        assert_eq!(result.clicks, 19);
        assert_eq!(app.state().status_level, StatusLevel::Success);
    }

    #[test]
    fn test_non_digit_keys_are_ignored_on_clicks() {
        let mut app = App::new(Catalog::builtin());
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        type_digits(&mut app, "12");
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.state().form.input(), "12");
    }

    #[test]
    fn test_exceeding_max_clears_field() {
        let mut app = App::new(Catalog::builtin());
        // Kingrinder K6 as both source and target, max 240
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        type_digits(&mut app, "300");
        assert_eq!(app.state().form.input(), "");
        assert!(app.state().form.result().is_none());
        assert_eq!(app.state().status_level, StatusLevel::Warning);
    }

    #[test]
    fn test_help_toggle_swallows_keys() {
        let mut app = App::new(Catalog::builtin());
        press(&mut app, KeyCode::Char('?'));
        assert!(app.state().help_visible);

        // Esc closes help instead of quitting
        assert!(!press(&mut app, KeyCode::Esc));
        assert!(!app.state().help_visible);
        assert!(press(&mut app, KeyCode::Esc));
    }

    #[test]
    fn test_delete_clears_source_selection() {
        let mut app = App::new(Catalog::builtin());
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        type_digits(&mut app, "20");
        assert!(app.state().form.result().is_some());

        press(&mut app, KeyCode::Tab); // back to source
        press(&mut app, KeyCode::Delete);
        assert!(app.state().form.source().is_none());
        assert!(app.state().form.result().is_none());
        assert_eq!(app.state().form.target(), Some("Kingrinder K6"));
    }

    #[test]
    fn test_quit_key() {
        let mut app = App::new(Catalog::builtin());
        assert!(press(&mut app, KeyCode::Char('q')));
    }
}
