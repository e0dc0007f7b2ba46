//! Reusable TUI components
//!
//! - `keybindings` - field-aware key registry, nav bar items and help content
//! - `help_overlay` - the `?` help window

pub mod help_overlay;
pub mod keybindings;
