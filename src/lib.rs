//! Cash card
//!
//! Advises a cashier how to settle a retail price with prepaid cash cards that
//! are bought below their face value. Two plans are produced for every price:
//!
//! - Plan A buys cards greedily up to the price and pays the rest in cash.
//! - Plan B buys the cheapest combination of cards, at most a fixed number of
//!   each kind, whose value covers the whole price.

pub mod advice;
pub mod catalogue;
pub mod config;
pub mod denominations;
pub mod observability;
pub mod planners;
pub mod plans;
pub mod prelude;
pub mod price;
pub mod receipt;
pub mod shell;
pub mod summary;
