//! Core data types for grindshift
//!
//! Grinder calibration profiles, derived conversion results and the small
//! string-facing enums used by the CLI and the form front end.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumIter, EnumString};

/// One grinder model's linear calibration.
///
/// `microns = base_offset + clicks * microns_per_click`, with clicks limited to
/// `0..=max_clicks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrinderProfile {
    /// Unique display name, also the catalog key
    pub name: String,
    /// Particle size change per click
    pub microns_per_click: f64,
    /// Highest reachable click setting
    pub max_clicks: u32,
    /// Microns at zero clicks
    #[serde(default)]
    pub base_offset: f64,
}

impl GrinderProfile {
    /// Create a profile with no base offset
    pub fn new(name: impl Into<String>, microns_per_click: f64, max_clicks: u32) -> Self {
        Self {
            name: name.into(),
            microns_per_click,
            max_clicks,
            base_offset: 0.0,
        }
    }

    /// Set the base offset
    pub fn with_base_offset(mut self, base_offset: f64) -> Self {
        self.base_offset = base_offset;
        self
    }

    /// Summary line shown under a selected grinder,
    /// e.g. `16 microns per click, max 240 clicks`
    pub fn summary(&self) -> String {
        format!(
            "{} microns per click, max {} clicks",
            self.microns_per_click, self.max_clicks
        )
    }
}

/// Target-side setting derived from a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Target clicks, always within `0..=target.max_clicks`
    pub clicks: u32,
    /// Microns at the clamped target clicks
    pub microns: f64,
}

impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} clicks (≈ {} microns)",
            self.clicks,
            format_microns(self.microns)
        )
    }
}

/// Format a micron value for display.
///
/// Rounds to two decimals and drops trailing zeros so that products like
/// `8.8 * 3` print as `26.4` rather than `26.400000000000002`.
pub fn format_microns(microns: f64) -> String {
    let rounded = (microns * 100.0).round() / 100.0;
    let text = format!("{:.2}", rounded);
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Output format for headless commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Focusable fields of the converter form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(Display, EnumIter)]
pub enum FormField {
    #[default]
    #[strum(serialize = "From Grinder")]
    Source,
    #[strum(serialize = "To Grinder")]
    Target,
    #[strum(serialize = "Grind Setting (clicks)")]
    Clicks,
}

impl FormField {
    /// Next field in tab order, wrapping around
    pub fn next(self) -> Self {
        match self {
            Self::Source => Self::Target,
            Self::Target => Self::Clicks,
            Self::Clicks => Self::Source,
        }
    }

    /// Previous field in tab order, wrapping around
    pub fn previous(self) -> Self {
        match self {
            Self::Source => Self::Clicks,
            Self::Target => Self::Source,
            Self::Clicks => Self::Target,
        }
    }

    /// Whether this field is a grinder picker
    pub fn is_picker(self) -> bool {
        matches!(self, Self::Source | Self::Target)
    }
}
