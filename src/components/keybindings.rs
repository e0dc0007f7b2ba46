//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the focused form field.

use crate::types::FormField;
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    Select,
    NextField,
    PreviousField,
    ClearField,
    EditClicks,
    Help,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Whether a key press triggers this binding
    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        // Terminals report Shift on BackTab and on shifted chars inconsistently
        self.key == code
            && self.modifiers.difference(KeyModifiers::SHIFT)
                == modifiers.difference(KeyModifiers::SHIFT)
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Field-specific keybindings
    field_bindings: HashMap<FormField, Vec<Keybinding>>,
    /// Global keybindings (available on every field)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            field_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all fields
    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Tab, KeyAction::NextField, "Tab", "Next field"),
            Keybinding::with_modifiers(
                KeyCode::BackTab,
                KeyModifiers::SHIFT,
                KeyAction::PreviousField,
                "S-Tab",
                "Previous field",
            ),
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            Keybinding::new(KeyCode::Esc, KeyAction::Quit, "Esc", "Quit"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
        ];

        let picker_bindings = vec![
            Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Previous grinder"),
            Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Next grinder"),
            Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Select grinder"),
            Keybinding::new(KeyCode::Delete, KeyAction::ClearField, "Del", "Clear selection"),
        ];
        self.field_bindings
            .insert(FormField::Source, picker_bindings.clone());
        self.field_bindings.insert(FormField::Target, picker_bindings);

        self.field_bindings.insert(
            FormField::Clicks,
            vec![
                Keybinding::new(KeyCode::Char('0'), KeyAction::EditClicks, "0-9", "Type clicks"),
                Keybinding::new(KeyCode::Backspace, KeyAction::EditClicks, "Bksp", "Delete digit"),
                Keybinding::new(KeyCode::Delete, KeyAction::ClearField, "Del", "Clear clicks"),
                Keybinding::new(KeyCode::Enter, KeyAction::NextField, "Enter", "Next field"),
            ],
        );
    }

    /// Get keybindings for a specific field (includes global bindings)
    pub fn get_bindings(&self, field: FormField) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        if let Some(field_bindings) = self.field_bindings.get(&field) {
            bindings.extend(field_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());

        bindings
    }

    /// Resolve a key press on the focused field to an action.
    ///
    /// Field bindings win over global ones. Any digit on the clicks field is
    /// an edit, not only the `0` registered for display.
    pub fn action_for(
        &self,
        field: FormField,
        code: KeyCode,
        modifiers: KeyModifiers,
    ) -> Option<KeyAction> {
        if field == FormField::Clicks {
            if let KeyCode::Char(c) = code {
                if c.is_ascii_digit() {
                    return Some(KeyAction::EditClicks);
                }
            }
        }
        self.get_bindings(field)
            .into_iter()
            .find(|b| b.matches(code, modifiers))
            .map(|b| b.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, field: FormField) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(field);

        let priority_actions = if field.is_picker() {
            vec![
                KeyAction::NavigateUp,
                KeyAction::Select,
                KeyAction::ClearField,
                KeyAction::NextField,
                KeyAction::Help,
                KeyAction::Quit,
            ]
        } else {
            vec![
                KeyAction::EditClicks,
                KeyAction::ClearField,
                KeyAction::NextField,
                KeyAction::Help,
                KeyAction::Quit,
            ]
        };

        let mut items: Vec<NavBarItem> = Vec::new();
        for action in priority_actions {
            if let Some(binding) = bindings.iter().find(|b| b.action == action) {
                // Combine Up/Down navigation
                if action == KeyAction::NavigateUp {
                    items.push(NavBarItem {
                        key_display: "Up/Dn".to_string(),
                        action_label: "Browse".to_string(),
                    });
                } else {
                    items.push(NavBarItem {
                        key_display: binding.display.clone(),
                        action_label: binding.description.clone(),
                    });
                }
            }
        }

        items
    }

    /// Get full help content for a field (for help overlay)
    pub fn get_help_content(&self, field: FormField) -> Vec<HelpSection> {
        let mut sections = Vec::new();

        let field_items: Vec<(String, String)> = self
            .field_bindings
            .get(&field)
            .map(|bindings| {
                bindings
                    .iter()
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect()
            })
            .unwrap_or_default();

        if !field_items.is_empty() {
            sections.push(HelpSection {
                title: field.to_string(),
                items: field_items,
            });
        }

        sections.push(HelpSection {
            title: "General".to_string(),
            items: self
                .global_bindings
                .iter()
                .map(|b| (b.display.clone(), b.description.clone()))
                .collect(),
        });

        sections
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picker_actions() {
        let ctx = KeybindingContext::new();
        assert_eq!(
            ctx.action_for(FormField::Source, KeyCode::Down, KeyModifiers::NONE),
            Some(KeyAction::NavigateDown)
        );
        assert_eq!(
            ctx.action_for(FormField::Target, KeyCode::Enter, KeyModifiers::NONE),
            Some(KeyAction::Select)
        );
        // Digits mean nothing on a picker
        assert_eq!(
            ctx.action_for(FormField::Source, KeyCode::Char('7'), KeyModifiers::NONE),
            None
        );
    }

    #[test]
    fn test_clicks_actions() {
        let ctx = KeybindingContext::new();
        for digit in '0'..='9' {
            assert_eq!(
                ctx.action_for(FormField::Clicks, KeyCode::Char(digit), KeyModifiers::NONE),
                Some(KeyAction::EditClicks)
            );
        }
        assert_eq!(
            ctx.action_for(FormField::Clicks, KeyCode::Enter, KeyModifiers::NONE),
            Some(KeyAction::NextField)
        );
        assert_eq!(
            ctx.action_for(FormField::Clicks, KeyCode::Char('x'), KeyModifiers::NONE),
            None
        );
    }

    #[test]
    fn test_global_actions() {
        let ctx = KeybindingContext::new();
        assert_eq!(
            ctx.action_for(FormField::Clicks, KeyCode::Char('?'), KeyModifiers::NONE),
            Some(KeyAction::Help)
        );
        assert_eq!(
            ctx.action_for(FormField::Source, KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(KeyAction::Quit)
        );
        assert_eq!(
            ctx.action_for(FormField::Target, KeyCode::BackTab, KeyModifiers::SHIFT),
            Some(KeyAction::PreviousField)
        );
    }

    #[test]
    fn test_shift_is_the_only_ignored_modifier() {
        let ctx = KeybindingContext::new();
        assert_eq!(
            ctx.action_for(FormField::Source, KeyCode::Char('?'), KeyModifiers::SHIFT),
            Some(KeyAction::Help)
        );
        assert_eq!(
            ctx.action_for(FormField::Target, KeyCode::BackTab, KeyModifiers::NONE),
            Some(KeyAction::PreviousField)
        );
        assert_eq!(
            ctx.action_for(FormField::Source, KeyCode::Char('q'), KeyModifiers::ALT),
            None
        );
        assert_eq!(
            ctx.action_for(FormField::Source, KeyCode::Esc, KeyModifiers::CONTROL),
            None
        );
        assert_eq!(
            ctx.action_for(FormField::Source, KeyCode::Char('c'), KeyModifiers::NONE),
            None
        );
    }

    #[test]
    fn test_nav_items_combine_navigation() {
        let ctx = KeybindingContext::new();
        let items = ctx.get_nav_items(FormField::Source);
        assert_eq!(items[0].key_display, "Up/Dn");
        assert!(items.iter().any(|i| i.action_label == "Select grinder"));
    }

    #[test]
    fn test_help_content_has_field_and_general() {
        let ctx = KeybindingContext::new();
        let sections = ctx.get_help_content(FormField::Clicks);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "Grind Setting (clicks)");
        assert_eq!(sections[1].title, "General");
    }
}
