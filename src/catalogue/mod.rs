//! Catalogue
//!
//! The set of cash cards on sale, validated once and then shared read-only by
//! both planners.

use std::slice;

use clap::ValueEnum;
use serde::Serialize;
use smallvec::SmallVec;
use thiserror::Error;

use crate::denominations::{Denomination, DenominationError};

pub mod fixture;

pub use fixture::FixtureError;

const STANDARD_YAML: &str = include_str!("../../fixtures/catalogues/standard.yml");
const PREMIUM_YAML: &str = include_str!("../../fixtures/catalogues/premium.yml");

/// Errors raised when a catalogue is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogueError {
    /// The catalogue has no cards.
    #[error("catalogue has no cards")]
    Empty,

    /// Two cards share the same face value.
    #[error("more than one card has face value {0}")]
    DuplicateFaceValue(u64),

    /// A card failed validation.
    #[error(transparent)]
    Denomination(#[from] DenominationError),
}

/// Denominations ordered by descending face value, all face values distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalogue {
    name: Option<String>,
    denominations: SmallVec<[Denomination; 8]>,
}

impl Catalogue {
    /// Creates a catalogue, sorting the cards by descending face value.
    ///
    /// # Errors
    ///
    /// - [`CatalogueError::Empty`]: no cards were given.
    /// - [`CatalogueError::DuplicateFaceValue`]: two cards have the same face value.
    pub fn new(denominations: impl IntoIterator<Item = Denomination>) -> Result<Self, CatalogueError> {
        let mut denominations: SmallVec<[Denomination; 8]> = denominations.into_iter().collect();

        if denominations.is_empty() {
            return Err(CatalogueError::Empty);
        }

        denominations.sort_by(|a, b| b.face_value().cmp(&a.face_value()));

        let duplicate = denominations.windows(2).find_map(|pair| match pair {
            [a, b] if a.face_value() == b.face_value() => Some(a.face_value()),
            _ => None,
        });

        if let Some(face_value) = duplicate {
            return Err(CatalogueError::DuplicateFaceValue(face_value));
        }

        Ok(Self {
            name: None,
            denominations,
        })
    }

    /// Creates a catalogue from `(purchase_price, face_value)` pairs.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogueError`] if any card is invalid or the set is rejected by [`Catalogue::new`].
    pub fn from_pairs(pairs: &[(u64, u64)]) -> Result<Self, CatalogueError> {
        let denominations = pairs
            .iter()
            .map(|&(purchase_price, face_value)| Denomination::new(purchase_price, face_value))
            .collect::<Result<SmallVec<[Denomination; 8]>, _>>()?;

        Self::new(denominations)
    }

    /// Attaches a display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Display name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Cards in descending face value order.
    pub fn denominations(&self) -> &[Denomination] {
        &self.denominations
    }

    /// Iterate over the cards in descending face value order.
    pub fn iter(&self) -> slice::Iter<'_, Denomination> {
        self.denominations.iter()
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.denominations.len()
    }

    /// Always false for a constructed catalogue.
    pub fn is_empty(&self) -> bool {
        self.denominations.is_empty()
    }

    /// Face value of the cheapest card.
    pub fn smallest_face_value(&self) -> u64 {
        self.denominations.last().map_or(0, Denomination::face_value)
    }

    /// Face value of the most valuable card.
    pub fn largest_face_value(&self) -> u64 {
        self.denominations.first().map_or(0, Denomination::face_value)
    }

    /// Sum of the face values of one card of each kind.
    pub fn face_value_sum(&self) -> u64 {
        self.iter().map(Denomination::face_value).sum()
    }
}

impl<'a> IntoIterator for &'a Catalogue {
    type Item = &'a Denomination;
    type IntoIter = slice::Iter<'a, Denomination>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Catalogues bundled with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Preset {
    /// 23.08% cards from 6,500 to 130,000 baht.
    #[default]
    Standard,

    /// 30% cards from 10,000 to 100,000 baht.
    Premium,
}

impl Preset {
    /// Parses the bundled catalogue.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the bundled data is malformed.
    pub fn catalogue(self) -> Result<Catalogue, FixtureError> {
        match self {
            Preset::Standard => fixture::from_yaml_str(STANDARD_YAML),
            Preset::Premium => fixture::from_yaml_str(PREMIUM_YAML),
        }
    }
}
