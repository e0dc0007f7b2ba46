//! Grinder calibration catalog
//!
//! The catalog is built once at startup, either from the built-in table or from
//! a catalog file, and is read-only afterwards. Entries keep their definition
//! order so pickers list grinders the same way every run.

use crate::error::{GrindError, Result};
use crate::types::GrinderProfile;
use std::collections::HashMap;
use tracing::debug;

/// Built-in calibration table: (name, microns per click, max clicks).
///
/// All built-in grinders have a zero base offset.
const BUILTIN_GRINDERS: &[(&str, f64, u32)] = &[
    ("Kingrinder K6", 16.0, 240),
    ("Kingrinder K1", 18.0, 240),
    ("Comandante C40", 30.0, 50),
    ("Porlex Mini 2", 37.0, 50),
    ("Timemore S3", 15.0, 36),
    ("1Zpresso Q2/J", 25.0, 30),
    ("1Zpresso JX-Pro/JE-Plus", 12.5, 40),
    ("1Zpresso X-Pro/X-Ultra", 12.5, 60),
    ("1Zpresso J-Max", 8.8, 90),
    ("1Zpresso J-Ultra", 8.0, 100),
    ("1Zpresso K-Plus/K-Pro/K-Max", 22.0, 90),
    ("1Zpresso K-Ultra", 20.0, 100),
];

/// Immutable mapping from grinder name to profile
#[derive(Debug, Clone)]
pub struct Catalog {
    profiles: Vec<GrinderProfile>,
    index: HashMap<String, usize>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The built-in grinder table
    pub fn builtin() -> Self {
        let profiles = BUILTIN_GRINDERS
            .iter()
            .map(|&(name, microns_per_click, max_clicks)| {
                GrinderProfile::new(name, microns_per_click, max_clicks)
            })
            .collect::<Vec<_>>();
        let index = profiles
            .iter()
            .enumerate()
            .map(|(i, p)| (p.name.clone(), i))
            .collect();
        Self { profiles, index }
    }

    /// Build a catalog from profiles, validating every entry.
    ///
    /// # Failure Modes
    ///
    /// - Empty profile list
    /// - Blank or duplicate names
    /// - `microns_per_click` not finite and positive
    /// - `base_offset` not finite
    pub fn from_profiles(profiles: Vec<GrinderProfile>) -> Result<Self> {
        if profiles.is_empty() {
            return Err(GrindError::config("catalog must contain at least one grinder"));
        }

        let mut index = HashMap::with_capacity(profiles.len());
        for (i, profile) in profiles.iter().enumerate() {
            validate_profile(profile)?;
            if index.insert(profile.name.clone(), i).is_some() {
                return Err(GrindError::config(format!(
                    "duplicate grinder name '{}'",
                    profile.name
                )));
            }
        }

        debug!("Catalog built with {} grinders", profiles.len());
        Ok(Self { profiles, index })
    }

    /// Look up a profile by exact name
    pub fn get(&self, name: &str) -> Option<&GrinderProfile> {
        self.index.get(name).map(|&i| &self.profiles[i])
    }

    /// Look up a profile, failing with `UnknownGrinder`
    pub fn require(&self, name: &str) -> Result<&GrinderProfile> {
        self.get(name)
            .ok_or_else(|| GrindError::unknown_grinder(name))
    }

    /// Whether the catalog contains the given name
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Profiles in display order
    pub fn profiles(&self) -> &[GrinderProfile] {
        &self.profiles
    }

    /// Grinder names in display order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.profiles.iter().map(|p| p.name.as_str())
    }

    /// Display position of a grinder
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

fn validate_profile(profile: &GrinderProfile) -> Result<()> {
    if profile.name.trim().is_empty() {
        return Err(GrindError::config("grinder name must not be empty"));
    }
    if !profile.microns_per_click.is_finite() || profile.microns_per_click <= 0.0 {
        return Err(GrindError::config(format!(
            "grinder '{}': micronsPerClick must be a positive number, got {}",
            profile.name, profile.microns_per_click
        )));
    }
    if !profile.base_offset.is_finite() {
        return Err(GrindError::config(format!(
            "grinder '{}': baseOffset must be a finite number",
            profile.name
        )));
    }
    Ok(())
}
