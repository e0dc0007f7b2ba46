//! grindshift library
//!
//! Grinder calibration catalog, click/micron conversion, the converter form
//! state machine, and the terminal front end built on them.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod config_file;
pub mod convert;
pub mod error;
pub mod form;
pub mod input;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use catalog::Catalog;
pub use config_file::CatalogFile;
pub use convert::{clicks_to_microns, convert, microns_to_clicks};
pub use error::GrindError;
pub use form::{
    ConversionForm, ConversionRequest, FormEvent, InputOutcome, RejectReason,
    SettingConversion,
};
pub use types::{ConversionResult, FormField, GrinderProfile, OutputFormat};
