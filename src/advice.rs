//! Advice
//!
//! Runs both planners over the same price and catalogue and summarises the
//! results for the cashier.

use serde::Serialize;

use crate::{
    catalogue::Catalogue,
    planners::{ExhaustivePlanner, GreedyPlanner, PlannerError},
    price::Price,
    summary::{Strategy, Summary},
};

/// Both payment plans for one price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advice {
    /// The sticker price
    pub price: Price,

    /// Cards up to the price plus cash
    pub plan_a: Summary,

    /// Cards covering the whole price, `None` when no combination within the
    /// per-denomination bound covers it
    pub plan_b: Option<Summary>,
}

/// Plans payments against a fixed catalogue.
#[derive(Debug, Clone)]
pub struct Advisor {
    catalogue: Catalogue,
    planner: ExhaustivePlanner,
}

impl Advisor {
    /// Creates an advisor allowing up to `max_per_denomination` cards of each
    /// kind in Plan B.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::SearchSpaceTooLarge`] if Plan B could not be
    /// searched exhaustively for this catalogue.
    pub fn new(catalogue: Catalogue, max_per_denomination: u32) -> Result<Self, PlannerError> {
        let planner = ExhaustivePlanner::new(max_per_denomination);

        planner.checked_search_space(&catalogue)?;

        Ok(Self { catalogue, planner })
    }

    /// The catalogue both planners use.
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Per-denomination bound for Plan B.
    pub fn max_per_denomination(&self) -> u32 {
        self.planner.max_per_denomination()
    }

    /// Compute both plans for `price`.
    ///
    /// # Errors
    ///
    /// Propagates [`PlannerError`] from the exhaustive planner.
    pub fn advise(&self, price: Price) -> Result<Advice, PlannerError> {
        let plan_a = GreedyPlanner::plan(price, &self.catalogue);
        let plan_b = self.planner.plan(price, &self.catalogue)?;

        if plan_b.is_none() {
            tracing::info!(price = price.baht(), "no card combination covers the price");
        }

        Ok(Advice {
            price,
            plan_a: Summary::new(Strategy::CardsPlusCash, price, plan_a),
            plan_b: plan_b.map(|plan| Summary::new(Strategy::CardsOnly, price, plan)),
        })
    }
}

/// Compute both plans for `price` against `catalogue`.
///
/// # Errors
///
/// Returns [`PlannerError::SearchSpaceTooLarge`] if Plan B could not be
/// searched exhaustively.
pub fn plan(price: Price, catalogue: &Catalogue, max_per_denomination: u32) -> Result<Advice, PlannerError> {
    Advisor::new(catalogue.clone(), max_per_denomination)?.advise(price)
}
