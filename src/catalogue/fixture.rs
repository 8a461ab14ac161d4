//! Catalogue Fixtures
//!
//! Catalogues are plain YAML documents:
//!
//! ```yaml
//! name: Standard
//! cards:
//!   - price: 100000
//!     value: 130000
//!   - price: 5000
//!     value: 6500
//! ```

use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::{
    catalogue::{Catalogue, CatalogueError},
    denominations::Denomination,
};

/// Catalogue fixture errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading the fixture file
    #[error("Failed to read catalogue file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// The parsed catalogue failed validation
    #[error("Invalid catalogue: {0}")]
    Catalogue(#[from] CatalogueError),
}

/// Catalogue document
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogueFixture {
    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    /// Cards on sale, in any order
    pub cards: Vec<CardFixture>,
}

/// A single card entry
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CardFixture {
    /// Purchase price in baht
    pub price: i64,

    /// Face value in baht
    pub value: i64,
}

impl TryFrom<CatalogueFixture> for Catalogue {
    type Error = CatalogueError;

    fn try_from(fixture: CatalogueFixture) -> Result<Self, Self::Error> {
        let denominations = fixture
            .cards
            .iter()
            .map(|card| Denomination::from_signed(card.price, card.value))
            .collect::<Result<Vec<_>, _>>()?;

        let catalogue = Catalogue::new(denominations)?;

        Ok(match fixture.name {
            Some(name) => catalogue.with_name(name),
            None => catalogue,
        })
    }
}

/// Parse a catalogue from YAML text.
///
/// # Errors
///
/// Returns an error if the YAML is malformed or the catalogue is invalid.
pub fn from_yaml_str(contents: &str) -> Result<Catalogue, FixtureError> {
    let fixture: CatalogueFixture = serde_norway::from_str(contents)?;

    Ok(Catalogue::try_from(fixture)?)
}

/// Load a catalogue from a YAML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or validated.
pub fn load(path: impl AsRef<Path>) -> Result<Catalogue, FixtureError> {
    let contents = fs::read_to_string(path.as_ref())?;

    tracing::debug!(path = %path.as_ref().display(), "loaded catalogue file");

    from_yaml_str(&contents)
}
