//! Summaries
//!
//! All figures are whole baht. The only fractional quantities are the
//! percentages, which are computed from integers and rounded half away from
//! zero to two decimal places.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::{plans::Plan, price::Price};

/// How a plan settles the price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Plan A: cards up to the price, the shortfall in cash.
    CardsPlusCash,

    /// Plan B: cards covering the whole price, leftover kept as stored value.
    CardsOnly,
}

/// Presentation figures for one plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    strategy: Strategy,
    price: u64,
    plan: Plan,
    total_face_value: u64,
    card_price_subtotal: u64,
    cash_shortfall: u64,
    total_to_pay: u64,
    discount_amount: i64,
    discount_percent: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    leftover: Option<u64>,
}

impl Summary {
    /// Derive the figures for `plan` paying `price`.
    pub fn new(strategy: Strategy, price: Price, plan: Plan) -> Self {
        let price = price.baht();
        let total_face_value = plan.total_face_value();
        let card_price_subtotal = plan.total_card_price();
        let cash_shortfall = price.saturating_sub(total_face_value);
        let total_to_pay = card_price_subtotal + cash_shortfall;
        let discount_amount = signed(price) - signed(total_to_pay);

        let leftover = match strategy {
            Strategy::CardsPlusCash => None,
            Strategy::CardsOnly => Some(total_face_value.saturating_sub(price)),
        };

        Self {
            strategy,
            price,
            plan,
            total_face_value,
            card_price_subtotal,
            cash_shortfall,
            total_to_pay,
            discount_amount,
            discount_percent: rounded_percent(discount_amount, price),
            leftover,
        }
    }

    /// Which plan this is.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The sticker price.
    pub fn price(&self) -> u64 {
        self.price
    }

    /// The cards bought.
    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    /// Face value of the cards bought.
    pub fn total_face_value(&self) -> u64 {
        self.total_face_value
    }

    /// Amount paid for the cards (payment 1).
    pub fn card_price_subtotal(&self) -> u64 {
        self.card_price_subtotal
    }

    /// Price not covered by card value, paid in cash (payment 2).
    pub fn cash_shortfall(&self) -> u64 {
        self.cash_shortfall
    }

    /// Card price plus cash shortfall.
    pub fn total_to_pay(&self) -> u64 {
        self.total_to_pay
    }

    /// `price - total_to_pay`; negative when the customer pays more than the
    /// price in exchange for stored value.
    pub fn discount_amount(&self) -> i64 {
        self.discount_amount
    }

    /// Discount as percent points of the price, two decimal places.
    pub fn discount_percent(&self) -> Decimal {
        self.discount_percent
    }

    /// Stored value left on the cards after paying (Plan B only).
    pub fn leftover(&self) -> Option<u64> {
        self.leftover
    }

    /// Discount earned on the cards alone, as percent points of their face
    /// value. `None` when no cards are bought.
    pub fn card_discount_percent(&self) -> Option<Decimal> {
        (self.total_face_value > 0).then(|| {
            rounded_percent(
                signed(self.total_face_value) - signed(self.card_price_subtotal),
                self.total_face_value,
            )
        })
    }

    /// True when the customer pays more than the sticker price.
    pub fn is_overpayment(&self) -> bool {
        self.discount_amount < 0
    }
}

/// `amount / whole * 100`, rounded half away from zero to two decimals,
/// using integer arithmetic only.
///
/// Returns zero when `whole` is zero.
pub fn rounded_percent(amount: i64, whole: u64) -> Decimal {
    if whole == 0 {
        return Decimal::ZERO;
    }

    let numerator = i128::from(amount) * 10_000;
    let whole = i128::from(whole);

    let quotient = numerator / whole;
    let remainder = numerator % whole;

    let basis_points = if remainder.abs() * 2 >= whole {
        quotient + numerator.signum()
    } else {
        quotient
    };

    Decimal::try_from_i128_with_scale(basis_points, 2).unwrap_or(Decimal::MAX)
}

fn signed(amount: u64) -> i64 {
    i64::try_from(amount).unwrap_or(i64::MAX)
}
