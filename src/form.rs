//! Converter form state machine
//!
//! The form holds a [`ConversionRequest`] and the [`ConversionResult`] derived
//! from it. All changes go through reducer transitions; the result is never set
//! from outside.
//!
//! # State Transitions
//!
//! ```text
//! Empty -> Valid -> (Empty | Valid)
//! ```
//!
//! There is no retained invalid state: a rejected edit resets the input to
//! empty and clears the result.
//!
//! # Invariants
//!
//! - A result exists only when source, target and a non-empty valid input are
//!   all present.
//! - A stored input is always digits-only and within the source's `max_clicks`.
//! - Selecting a source resets the input; selecting a target keeps it.

use crate::catalog::Catalog;
use crate::convert::{clicks_to_microns, convert};
use crate::error::{GrindError, Result};
use crate::types::{ConversionResult, GrinderProfile};
use std::fmt;
use tracing::debug;

/// User-held form inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionRequest {
    /// Selected source grinder name
    pub source: Option<String>,
    /// Selected target grinder name
    pub target: Option<String>,
    /// Clicks field contents (empty or digits-only)
    pub raw_input: String,
}

/// Events the presentation layer feeds into the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Source picker changed (`None` clears the selection)
    SelectSource(Option<String>),
    /// Target picker changed (`None` clears the selection)
    SelectTarget(Option<String>),
    /// Clicks field edited to this candidate value
    EditInput(String),
}

/// Why a clicks edit was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Contains something other than ASCII digits
    NotDigits,
    /// No source grinder selected to bound the value
    NoSource,
    /// Larger than the source grinder's max clicks
    ExceedsMax { max: u32 },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotDigits => write!(f, "only whole click numbers are allowed"),
            Self::NoSource => write!(f, "select a source grinder first"),
            Self::ExceedsMax { max } => write!(f, "source grinder tops out at {} clicks", max),
        }
    }
}

/// Result of a clicks edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Input was emptied
    Cleared,
    /// Input stored with this click value
    Accepted(u32),
    /// Input rejected and reset to empty
    Rejected(RejectReason),
}

/// Coarse input state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputState {
    Empty,
    Valid,
}

/// A completed one-shot conversion: the accepted source setting and the
/// target setting derived from it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettingConversion {
    pub source_clicks: u32,
    pub source_microns: f64,
    pub result: ConversionResult,
}

/// The converter form: request plus derived result
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionForm {
    request: ConversionRequest,
    result: Option<ConversionResult>,
}

impl ConversionForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an event. Input edits report an outcome; selections do not.
    pub fn apply(&mut self, catalog: &Catalog, event: FormEvent) -> Option<InputOutcome> {
        match event {
            FormEvent::SelectSource(name) => {
                self.select_source(catalog, name.as_deref());
                None
            }
            FormEvent::SelectTarget(name) => {
                self.select_target(catalog, name.as_deref());
                None
            }
            FormEvent::EditInput(value) => Some(self.edit_input(catalog, &value)),
        }
    }

    /// Change the source grinder. Resets the input and clears the result.
    ///
    /// Names not in the catalog clear the selection.
    pub fn select_source(&mut self, catalog: &Catalog, name: Option<&str>) {
        self.request.source = known_name(catalog, name);
        self.request.raw_input.clear();
        self.result = None;
        debug!(source_grinder = ?self.request.source, "source grinder selected");
    }

    /// Change the target grinder. Clears the result but keeps the input.
    ///
    /// Names not in the catalog clear the selection.
    pub fn select_target(&mut self, catalog: &Catalog, name: Option<&str>) {
        self.request.target = known_name(catalog, name);
        self.result = None;
        debug!(target_grinder = ?self.request.target, "target grinder selected");
    }

    /// Edit the clicks field and recompute the result synchronously.
    pub fn edit_input(&mut self, catalog: &Catalog, value: &str) -> InputOutcome {
        if value.is_empty() {
            self.request.raw_input.clear();
            self.result = None;
            return InputOutcome::Cleared;
        }

        let clicks = match validate_clicks(self.source_profile(catalog), value) {
            Ok(clicks) => clicks,
            Err(reason) => {
                debug!(input = value, %reason, "clicks input rejected");
                self.request.raw_input.clear();
                self.result = None;
                return InputOutcome::Rejected(reason);
            }
        };

        self.request.raw_input = value.to_string();
        self.result = match (self.source_profile(catalog), self.target_profile(catalog)) {
            (Some(source), Some(target)) => Some(convert(source, target, clicks)),
            _ => None,
        };
        debug!(clicks, result = ?self.result, "clicks input accepted");
        InputOutcome::Accepted(clicks)
    }

    pub fn request(&self) -> &ConversionRequest {
        &self.request
    }

    pub fn result(&self) -> Option<&ConversionResult> {
        self.result.as_ref()
    }

    pub fn source(&self) -> Option<&str> {
        self.request.source.as_deref()
    }

    pub fn target(&self) -> Option<&str> {
        self.request.target.as_deref()
    }

    pub fn input(&self) -> &str {
        &self.request.raw_input
    }

    pub fn input_state(&self) -> InputState {
        if self.request.raw_input.is_empty() {
            InputState::Empty
        } else {
            InputState::Valid
        }
    }

    /// Stored click value, if any
    pub fn clicks(&self) -> Option<u32> {
        self.request.raw_input.parse().ok()
    }

    pub fn source_profile<'c>(&self, catalog: &'c Catalog) -> Option<&'c GrinderProfile> {
        self.request.source.as_deref().and_then(|name| catalog.get(name))
    }

    pub fn target_profile<'c>(&self, catalog: &'c Catalog) -> Option<&'c GrinderProfile> {
        self.request.target.as_deref().and_then(|name| catalog.get(name))
    }

    /// Microns of the current input on the source grinder
    /// (the `≈ N microns` hint under the clicks field)
    pub fn source_microns(&self, catalog: &Catalog) -> Option<f64> {
        let source = self.source_profile(catalog)?;
        let clicks = self.clicks()?;
        Some(clicks_to_microns(source, f64::from(clicks)))
    }
}

impl ConversionForm {
    /// Run one conversion through the form transitions, as the headless CLI does.
    ///
    /// # Failure Modes
    ///
    /// - `UnknownGrinder` when either name is not in the catalog
    /// - `Validation` when the clicks input would be rejected by the form
    pub fn convert_once(
        catalog: &Catalog,
        source: &str,
        target: &str,
        raw_clicks: &str,
    ) -> Result<SettingConversion> {
        let source_profile = catalog.require(source)?;
        catalog.require(target)?;

        let mut form = Self::new();
        form.select_source(catalog, Some(source));
        form.select_target(catalog, Some(target));
        match form.edit_input(catalog, raw_clicks) {
            InputOutcome::Accepted(source_clicks) => {
                let result = form
                    .result
                    .ok_or_else(|| GrindError::general("conversion produced no result"))?;
                Ok(SettingConversion {
                    source_clicks,
                    source_microns: clicks_to_microns(source_profile, f64::from(source_clicks)),
                    result,
                })
            }
            InputOutcome::Cleared => Err(GrindError::validation("clicks value is empty")),
            InputOutcome::Rejected(reason) => Err(GrindError::validation(format!(
                "'{}' rejected: {}",
                raw_clicks, reason
            ))),
        }
    }
}

/// Validate a candidate clicks string against the source grinder.
///
/// Accepts non-empty digits-only strings up to the source's `max_clicks`.
pub fn validate_clicks(
    source: Option<&GrinderProfile>,
    value: &str,
) -> std::result::Result<u32, RejectReason> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RejectReason::NotDigits);
    }
    let source = source.ok_or(RejectReason::NoSource)?;
    let max = source.max_clicks;
    // Digits-only strings only fail to parse on overflow
    match value.parse::<u64>() {
        Ok(clicks) if clicks <= u64::from(max) => Ok(clicks as u32),
        _ => Err(RejectReason::ExceedsMax { max }),
    }
}

fn known_name(catalog: &Catalog, name: Option<&str>) -> Option<String> {
    name.filter(|n| catalog.contains(n)).map(str::to_string)
}
