//! Exhaustive Planner
//!
//! Enumerates every count tuple in `{0..=M}^n` as a mixed-radix counter whose
//! last digit (smallest card) turns fastest. Running totals are updated
//! incrementally as digits turn over, so each step is O(1) amortised and no
//! combination is materialised beyond the current one and the best so far.

use smallvec::{SmallVec, smallvec};

use crate::{
    catalogue::Catalogue,
    denominations::Denomination,
    planners::PlannerError,
    plans::Plan,
    price::Price,
};

/// Default bound on the number of cards of a single denomination.
pub const DEFAULT_MAX_PER_DENOMINATION: u32 = 5;

/// Largest number of combinations the planner will enumerate.
pub const SEARCH_LIMIT: u64 = 10_000_000;

type Counts = SmallVec<[u64; 8]>;

/// Plan B: cards covering the whole price with the least waste.
///
/// Among combinations whose face value covers the price, the one with the
/// smallest `(excess, card price, card count)` wins. Remaining ties go to the
/// combination enumerated first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExhaustivePlanner {
    max_per_denomination: u32,
}

impl Default for ExhaustivePlanner {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PER_DENOMINATION)
    }
}

/// Running totals of the combination under the counter.
#[derive(Debug, Clone, Copy, Default)]
struct Totals {
    face_value: u64,
    card_price: u64,
    card_count: u64,
}

impl Totals {
    fn add(&mut self, denomination: &Denomination, count: u64) {
        self.face_value += denomination.face_value() * count;
        self.card_price += denomination.purchase_price() * count;
        self.card_count += count;
    }

    fn remove(&mut self, denomination: &Denomination, count: u64) {
        self.face_value -= denomination.face_value() * count;
        self.card_price -= denomination.purchase_price() * count;
        self.card_count -= count;
    }

    /// Selection key for a covering combination.
    fn key(&self, price: u64) -> (u64, u64, u64) {
        (self.face_value - price, self.card_price, self.card_count)
    }
}

impl ExhaustivePlanner {
    /// Creates a planner allowing up to `max_per_denomination` cards of each kind.
    pub fn new(max_per_denomination: u32) -> Self {
        Self {
            max_per_denomination,
        }
    }

    /// Per-denomination bound.
    pub fn max_per_denomination(&self) -> u32 {
        self.max_per_denomination
    }

    /// Number of combinations enumerated for `catalogue`, if it fits in a `u64`.
    pub fn search_space(&self, catalogue: &Catalogue) -> Option<u64> {
        let radix = u64::from(self.max_per_denomination) + 1;

        u32::try_from(catalogue.len())
            .ok()
            .and_then(|len| radix.checked_pow(len))
    }

    /// Number of combinations enumerated for `catalogue`, checked against
    /// [`SEARCH_LIMIT`].
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::SearchSpaceTooLarge`] when the limit is exceeded.
    pub fn checked_search_space(&self, catalogue: &Catalogue) -> Result<u64, PlannerError> {
        self.search_space(catalogue)
            .filter(|space| *space <= SEARCH_LIMIT)
            .ok_or(PlannerError::SearchSpaceTooLarge {
                catalogue_len: catalogue.len(),
                max_per_denomination: self.max_per_denomination,
                limit: SEARCH_LIMIT,
            })
    }

    /// Find the least wasteful covering combination.
    ///
    /// Returns `Ok(None)` when no combination within the bound covers the
    /// price.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::SearchSpaceTooLarge`] when the catalogue and
    /// bound span more than [`SEARCH_LIMIT`] combinations.
    pub fn plan(&self, price: Price, catalogue: &Catalogue) -> Result<Option<Plan>, PlannerError> {
        let search_space = self.checked_search_space(catalogue)?;

        let price = price.baht();
        let max = u64::from(self.max_per_denomination);

        if catalogue.face_value_sum() * max < price {
            tracing::debug!(price, max, "no combination can cover the price");

            return Ok(None);
        }

        let denominations = catalogue.denominations();
        let mut counts: Counts = smallvec![0; denominations.len()];
        let mut totals = Totals::default();
        let mut best: Option<((u64, u64, u64), Counts)> = None;

        loop {
            if totals.face_value >= price {
                let key = totals.key(price);

                if best.as_ref().is_none_or(|(best_key, _)| key < *best_key) {
                    tracing::trace!(?key, ?counts, "new best combination");

                    best = Some((key, counts.clone()));
                }
            }

            if !advance(&mut counts, denominations, max, &mut totals) {
                break;
            }
        }

        tracing::debug!(price, search_space, best = ?best.as_ref().map(|(key, _)| key), "exhaustive search finished");

        Ok(best.map(|(_, counts)| Plan::from_counts(catalogue, &counts)))
    }
}

/// Step the counter to the next combination, returning false once every
/// combination has been visited.
fn advance(counts: &mut Counts, denominations: &[Denomination], max: u64, totals: &mut Totals) -> bool {
    for (count, denomination) in counts.iter_mut().zip(denominations).rev() {
        if *count < max {
            *count += 1;
            totals.add(denomination, 1);

            return true;
        }

        totals.remove(denomination, *count);
        *count = 0;
    }

    false
}
