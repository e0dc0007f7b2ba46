//! Input handling module
//!
//! Turns raw key events into candidate values for the clicks field and cursor
//! moves for the grinder pickers. Candidates still go through the form's
//! validation; this layer only filters keystrokes that can never be part of a
//! click count.

use crossterm::event::{KeyCode, KeyEvent};

/// Key-level editing for the converter form
#[derive(Debug, Default, Clone, Copy)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Candidate clicks value after `key`, or `None` when the key is filtered.
    ///
    /// Digits append, Backspace drops the last character and Delete empties
    /// the field. Every other key is ignored before reaching the form.
    pub fn clicks_candidate(&self, current: &str, key: KeyEvent) -> Option<String> {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let mut candidate = String::with_capacity(current.len() + 1);
                candidate.push_str(current);
                candidate.push(c);
                Some(candidate)
            }
            KeyCode::Backspace => {
                let mut candidate = current.to_string();
                candidate.pop();
                Some(candidate)
            }
            KeyCode::Delete => Some(String::new()),
            _ => None,
        }
    }

    /// Move a picker cursor by one row, wrapping at both ends.
    pub fn step_cursor(&self, cursor: usize, len: usize, forward: bool) -> usize {
        if len == 0 {
            return 0;
        }
        let cursor = cursor.min(len - 1);
        if forward {
            (cursor + 1) % len
        } else if cursor == 0 {
            len - 1
        } else {
            cursor - 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digits_append() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.clicks_candidate("2", key(KeyCode::Char('4'))),
            Some("24".to_string())
        );
        assert_eq!(
            handler.clicks_candidate("", key(KeyCode::Char('0'))),
            Some("0".to_string())
        );
    }

    #[test]
    fn test_non_digits_are_filtered() {
        let handler = InputHandler::new();
        assert_eq!(handler.clicks_candidate("2", key(KeyCode::Char('-'))), None);
        assert_eq!(handler.clicks_candidate("2", key(KeyCode::Char('.'))), None);
        assert_eq!(handler.clicks_candidate("2", key(KeyCode::Char('e'))), None);
        assert_eq!(handler.clicks_candidate("2", key(KeyCode::Left)), None);
    }

    #[test]
    fn test_backspace_and_delete() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.clicks_candidate("240", key(KeyCode::Backspace)),
            Some("24".to_string())
        );
        assert_eq!(
            handler.clicks_candidate("", key(KeyCode::Backspace)),
            Some(String::new())
        );
        assert_eq!(
            handler.clicks_candidate("240", key(KeyCode::Delete)),
            Some(String::new())
        );
    }

    #[test]
    fn test_cursor_wraps() {
        let handler = InputHandler::new();
        assert_eq!(handler.step_cursor(0, 12, true), 1);
        assert_eq!(handler.step_cursor(11, 12, true), 0);
        assert_eq!(handler.step_cursor(0, 12, false), 11);
        assert_eq!(handler.step_cursor(5, 12, false), 4);
        assert_eq!(handler.step_cursor(3, 0, true), 0);
    }
}
