//! Planners
//!
//! Two independent strategies over the same `(price, catalogue)`:
//!
//! - [`GreedyPlanner`] (Plan A) buys only as many cards as fit under the price
//!   and leaves the rest to be paid in cash.
//! - [`ExhaustivePlanner`] (Plan B) buys the least wasteful set of cards that
//!   covers the whole price, so no cash is needed.

use thiserror::Error;

pub mod exhaustive;
pub mod greedy;

pub use exhaustive::ExhaustivePlanner;
pub use greedy::GreedyPlanner;

/// Planner Errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlannerError {
    /// `(max_per_denomination + 1) ^ catalogue_len` exceeds the enumeration limit.
    #[error(
        "search space of {catalogue_len} cards with up to {max_per_denomination} each exceeds {limit} combinations"
    )]
    SearchSpaceTooLarge {
        /// Number of denominations in the catalogue
        catalogue_len: usize,
        /// Per-denomination bound
        max_per_denomination: u32,
        /// Largest search space the planner will enumerate
        limit: u64,
    },
}
