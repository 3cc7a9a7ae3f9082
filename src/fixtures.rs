//! Seed data loading
//!
//! The storefront ships with a YAML seed describing the launch configuration:
//! price parameters, delivery zones, and the novel catalog. Files live under
//! `fixtures/` by convention.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    admin::AdminState,
    catalog::{DeliveryZone, Novel},
    config::{ConfigError, PriceConfig},
};

/// Seed parsing errors.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading a seed file.
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// The seeded price configuration is out of range.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A seeded novel has no chapters.
    #[error("Novel {0} has zero chapters")]
    EmptyNovel(i64),
}

/// A full storefront seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seed {
    /// Launch price parameters.
    pub price_config: PriceConfig,

    /// Launch delivery zone table.
    #[serde(default)]
    pub delivery_zones: Vec<DeliveryZone>,

    /// Launch novel catalog.
    #[serde(default)]
    pub novels: Vec<Novel>,
}

impl Seed {
    /// Parse a seed from YAML text.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] when the YAML does not parse or the seeded
    /// values fail validation.
    pub fn from_str(contents: &str) -> Result<Self, FixtureError> {
        let seed: Seed = serde_norway::from_str(contents)?;

        seed.validate()?;

        Ok(seed)
    }

    /// Read and parse a seed file.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] when the file cannot be read, the YAML does
    /// not parse, or the seeded values fail validation.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path)?;

        Seed::from_str(&contents)
    }

    /// Check seeded values against the same rules the admin store enforces.
    fn validate(&self) -> Result<(), FixtureError> {
        self.price_config.validate()?;

        for novel in &self.novels {
            if novel.capitulos == 0 {
                return Err(FixtureError::EmptyNovel(novel.id));
            }
        }

        Ok(())
    }
}

impl From<Seed> for AdminState {
    fn from(seed: Seed) -> Self {
        AdminState {
            config: seed.price_config,
            zones: seed.delivery_zones,
            novels: seed.novels,
        }
    }
}
