//! Plans

use serde::Serialize;
use smallvec::SmallVec;

use crate::{catalogue::Catalogue, denominations::Denomination};

/// Use `count` cards of one denomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineItem {
    /// The card bought
    #[serde(flatten)]
    pub denomination: Denomination,

    /// How many of them
    pub count: u64,
}

impl LineItem {
    /// Creates a new line item.
    pub fn new(denomination: Denomination, count: u64) -> Self {
        Self {
            denomination,
            count,
        }
    }

    /// Face value contributed by this line.
    pub fn face_value(&self) -> u64 {
        self.denomination.face_value() * self.count
    }

    /// Amount paid for the cards on this line.
    pub fn card_price(&self) -> u64 {
        self.denomination.purchase_price() * self.count
    }
}

/// A set of cards to buy, in catalogue order, without zero-count lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Plan {
    line_items: SmallVec<[LineItem; 8]>,
}

impl Plan {
    /// A plan that buys no cards.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a plan from line items, dropping lines with a zero count.
    pub fn new(line_items: impl IntoIterator<Item = LineItem>) -> Self {
        Self {
            line_items: line_items.into_iter().filter(|line| line.count > 0).collect(),
        }
    }

    /// Builds a plan from one count per catalogue entry, in catalogue order.
    ///
    /// Extra counts beyond the catalogue length are ignored.
    pub fn from_counts(catalogue: &Catalogue, counts: &[u64]) -> Self {
        Self::new(
            catalogue
                .iter()
                .zip(counts)
                .map(|(denomination, &count)| LineItem::new(*denomination, count)),
        )
    }

    /// Line items in catalogue order.
    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    /// Iterate over the line items.
    pub fn iter(&self) -> impl Iterator<Item = &LineItem> {
        self.line_items.iter()
    }

    /// True when the plan buys no cards.
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }

    /// Sum of face value over all cards.
    pub fn total_face_value(&self) -> u64 {
        self.iter().map(LineItem::face_value).sum()
    }

    /// Sum of purchase price over all cards.
    pub fn total_card_price(&self) -> u64 {
        self.iter().map(LineItem::card_price).sum()
    }

    /// Number of physical cards.
    pub fn card_count(&self) -> u64 {
        self.iter().map(|line| line.count).sum()
    }
}
