//! Catalog file handling for saving and loading grinder tables.
//!
//! A catalog file is a JSON document with a single `grinders` array of
//! profiles. [`load_catalog`] validates every entry before handing back a
//! [`Catalog`].

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::catalog::Catalog;
use crate::types::GrinderProfile;

/// On-disk grinder catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogFile {
    pub grinders: Vec<GrinderProfile>,
}

impl CatalogFile {
    /// Snapshot of an existing catalog, in display order
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            grinders: catalog.profiles().to_vec(),
        }
    }

    /// Save the catalog to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize catalog to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write catalog to {:?}", path.as_ref()))?;

        info!("Catalog with {} grinders written to {:?}", self.grinders.len(), path.as_ref());
        Ok(())
    }

    /// Load a catalog from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog from {:?}", path.as_ref()))?;

        let file: Self =
            serde_json::from_str(&content).context("Failed to parse catalog JSON")?;

        Ok(file)
    }

    /// Validate the catalog entries
    pub fn validate(&self) -> Result<()> {
        self.to_catalog().map(|_| ())
    }

    /// Build the runtime catalog
    pub fn to_catalog(&self) -> Result<Catalog> {
        Catalog::from_profiles(self.grinders.clone()).context("Invalid grinder catalog")
    }
}

/// Load the catalog to run with: the given file, or the built-in table.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            let catalog = CatalogFile::load_from_file(path)?.to_catalog()?;
            info!("Loaded {} grinders from {:?}", catalog.len(), path);
            Ok(catalog)
        }
        None => Ok(Catalog::builtin()),
    }
}
