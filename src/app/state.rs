//! Application state definitions
//!
//! The TUI owns exactly one [`AppState`]: the converter form plus the view
//! state around it (focus, picker cursors, help, status line).

use crate::form::ConversionForm;
use crate::theme::{StatusLevel, UiText};
use crate::types::FormField;

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Converter form (request + derived result)
    pub form: ConversionForm,
    /// Focused form field
    pub focus: FormField,
    /// Highlighted row in the source picker
    pub source_cursor: usize,
    /// Highlighted row in the target picker
    pub target_cursor: usize,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Status message for user feedback
    pub status_message: String,
    /// Status message level
    pub status_level: StatusLevel,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            form: ConversionForm::new(),
            focus: FormField::Source,
            source_cursor: 0,
            target_cursor: 0,
            help_visible: false,
            status_message: UiText::WELCOME.to_string(),
            status_level: StatusLevel::Info,
        }
    }
}

impl AppState {
    /// Cursor of the focused picker, if a picker has focus
    pub fn picker_cursor(&self) -> Option<usize> {
        match self.focus {
            FormField::Source => Some(self.source_cursor),
            FormField::Target => Some(self.target_cursor),
            FormField::Clicks => None,
        }
    }

    /// Set the status line
    pub fn set_status(&mut self, level: StatusLevel, message: impl Into<String>) {
        self.status_level = level;
        self.status_message = message.into();
    }
}
