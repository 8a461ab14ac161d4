//! Cash card prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    advice::{Advice, Advisor, plan},
    catalogue::{Catalogue, CatalogueError, FixtureError, Preset},
    denominations::{Denomination, DenominationError},
    planners::{
        ExhaustivePlanner, GreedyPlanner, PlannerError,
        exhaustive::{DEFAULT_MAX_PER_DENOMINATION, SEARCH_LIMIT},
    },
    plans::{LineItem, Plan},
    price::{MAX_AMOUNT, Price, PriceError},
    receipt::{Receipt, ReceiptError},
    summary::{Strategy, Summary},
};
