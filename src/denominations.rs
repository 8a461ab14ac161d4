//! Denominations

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::price::MAX_AMOUNT;

/// Errors raised when a card denomination is invalid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DenominationError {
    /// Purchase price or face value is zero.
    #[error("card amounts must be positive (price {purchase_price}, value {face_value})")]
    NonPositiveAmount {
        /// Purchase price
        purchase_price: i64,
        /// Face value
        face_value: i64,
    },

    /// The card costs as much as (or more than) it is worth.
    #[error("card price {purchase_price} must be below its value {face_value}")]
    PurchasePriceNotBelowFaceValue {
        /// Purchase price
        purchase_price: u64,
        /// Face value
        face_value: u64,
    },

    /// The face value exceeds [`MAX_AMOUNT`].
    #[error("card value {0} exceeds the maximum of {MAX_AMOUNT} baht")]
    AmountTooLarge(u64),
}

/// A kind of prepaid cash card.
///
/// The customer pays `purchase_price` to acquire the card and it is redeemed
/// at the register for `face_value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Denomination {
    purchase_price: u64,
    face_value: u64,
}

impl Denomination {
    /// Creates a new denomination.
    ///
    /// # Errors
    ///
    /// Returns a [`DenominationError`] unless `0 < purchase_price < face_value <= MAX_AMOUNT`.
    pub fn new(purchase_price: u64, face_value: u64) -> Result<Self, DenominationError> {
        if purchase_price == 0 || face_value == 0 {
            return Err(DenominationError::NonPositiveAmount {
                purchase_price: signed(purchase_price),
                face_value: signed(face_value),
            });
        }

        if purchase_price >= face_value {
            return Err(DenominationError::PurchasePriceNotBelowFaceValue {
                purchase_price,
                face_value,
            });
        }

        if face_value > MAX_AMOUNT {
            return Err(DenominationError::AmountTooLarge(face_value));
        }

        Ok(Self {
            purchase_price,
            face_value,
        })
    }

    /// Creates a denomination from amounts that may be negative, as read from
    /// catalogue files.
    ///
    /// # Errors
    ///
    /// Returns [`DenominationError::NonPositiveAmount`] if either amount is
    /// zero or negative, otherwise as [`Denomination::new`].
    pub fn from_signed(purchase_price: i64, face_value: i64) -> Result<Self, DenominationError> {
        match (u64::try_from(purchase_price), u64::try_from(face_value)) {
            (Ok(purchase_price), Ok(face_value)) => Self::new(purchase_price, face_value),
            _ => Err(DenominationError::NonPositiveAmount {
                purchase_price,
                face_value,
            }),
        }
    }

    /// What the customer pays for one card.
    pub fn purchase_price(&self) -> u64 {
        self.purchase_price
    }

    /// What one card is worth at the register.
    pub fn face_value(&self) -> u64 {
        self.face_value
    }

    /// Stored value gained per card (`face_value - purchase_price`).
    pub fn margin(&self) -> u64 {
        self.face_value - self.purchase_price
    }

    /// Discount earned by paying with this card, as a fraction of its face value.
    pub fn discount_rate(&self) -> Percentage {
        let ratio = Decimal::from(self.purchase_price)
            .checked_div(Decimal::from(self.face_value))
            .unwrap_or(Decimal::ONE);

        Percentage::from(Decimal::ONE - ratio)
    }
}

fn signed(amount: u64) -> i64 {
    i64::try_from(amount).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn accessors_return_values_from_constructor() -> TestResult {
        let card = Denomination::new(100_000, 130_000)?;

        assert_eq!(card.purchase_price(), 100_000);
        assert_eq!(card.face_value(), 130_000);
        assert_eq!(card.margin(), 30_000);

        Ok(())
    }

    #[test]
    fn zero_amounts_are_rejected() {
        assert_eq!(
            Denomination::new(0, 10),
            Err(DenominationError::NonPositiveAmount {
                purchase_price: 0,
                face_value: 10,
            })
        );
    }

    #[test]
    fn negative_amounts_are_non_positive() -> TestResult {
        assert_eq!(
            Denomination::from_signed(-1, 10),
            Err(DenominationError::NonPositiveAmount {
                purchase_price: -1,
                face_value: 10,
            })
        );
        assert_eq!(Denomination::from_signed(7, 10)?, Denomination::new(7, 10)?);

        Ok(())
    }

    #[test]
    fn card_must_be_discounted() {
        assert_eq!(
            Denomination::new(10_000, 10_000),
            Err(DenominationError::PurchasePriceNotBelowFaceValue {
                purchase_price: 10_000,
                face_value: 10_000,
            })
        );
    }

    #[test]
    fn oversized_cards_are_rejected() {
        assert_eq!(
            Denomination::new(1, MAX_AMOUNT + 1),
            Err(DenominationError::AmountTooLarge(MAX_AMOUNT + 1))
        );
    }

    #[test]
    fn discount_rate_is_fraction_of_face_value() -> TestResult {
        let card = Denomination::new(70_000, 100_000)?;

        assert_eq!(card.discount_rate(), Percentage::from(Decimal::new(3, 1)));

        Ok(())
    }
}
