//! Prices

use std::{fmt, ops::Deref, str::FromStr};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::Serialize;
use thiserror::Error;

/// Largest amount, in whole baht, accepted for a price or a card amount.
///
/// Keeps every derived total (up to the enumeration limit of the exhaustive
/// planner) inside `i64`.
pub const MAX_AMOUNT: u64 = 100_000_000_000;

/// Errors raised when a price is rejected at the boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    /// The input text is not a number.
    #[error("price is not a number: {0:?}")]
    NotNumeric(String),

    /// The price is zero or negative after coercion to whole baht.
    #[error("price must be at least 1 baht")]
    NotPositive,

    /// The price exceeds [`MAX_AMOUNT`].
    #[error("price {0} exceeds the maximum of {MAX_AMOUNT} baht")]
    TooLarge(u64),
}

/// A retail price in whole baht, always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Price {
    value: u64,
}

impl Price {
    /// Creates a new price.
    ///
    /// # Errors
    ///
    /// - [`PriceError::NotPositive`]: `value` is zero.
    /// - [`PriceError::TooLarge`]: `value` exceeds [`MAX_AMOUNT`].
    pub fn new(value: u64) -> Result<Self, PriceError> {
        if value == 0 {
            return Err(PriceError::NotPositive);
        }

        if value > MAX_AMOUNT {
            return Err(PriceError::TooLarge(value));
        }

        Ok(Price { value })
    }

    /// Coerces cashier input into a price.
    ///
    /// Surrounding whitespace and `,` digit grouping are ignored. Fractional
    /// input is truncated to whole baht, so `"99.90"` becomes 99.
    ///
    /// # Errors
    ///
    /// - [`PriceError::NotNumeric`]: the text does not parse as a decimal number.
    /// - [`PriceError::NotPositive`]: the coerced value is below 1 baht.
    /// - [`PriceError::TooLarge`]: the coerced value exceeds [`MAX_AMOUNT`].
    pub fn parse(input: &str) -> Result<Self, PriceError> {
        let cleaned: String = input.trim().chars().filter(|ch| *ch != ',').collect();

        let amount = match Decimal::from_str(&cleaned) {
            Ok(amount) => amount.trunc(),
            Err(_err) if is_plain_number(&cleaned) => {
                return Err(if cleaned.starts_with('-') {
                    PriceError::NotPositive
                } else {
                    PriceError::TooLarge(u64::MAX)
                });
            }
            Err(_err) => return Err(PriceError::NotNumeric(input.trim().to_string())),
        };

        if amount <= Decimal::ZERO {
            return Err(PriceError::NotPositive);
        }

        let value = amount.to_u64().ok_or(PriceError::TooLarge(u64::MAX))?;

        Self::new(value)
    }

    /// The price in whole baht.
    pub fn baht(self) -> u64 {
        self.value
    }
}

/// Digits with an optional sign and fractional part, too long for `Decimal`
/// when parsing fails.
fn is_plain_number(text: &str) -> bool {
    let unsigned = text.strip_prefix(|ch: char| ch == '-' || ch == '+').unwrap_or(text);
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    !whole.is_empty() && whole.chars().all(|ch| ch.is_ascii_digit()) && fraction.chars().all(|ch| ch.is_ascii_digit())
}

impl Deref for Price {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn new_price() -> TestResult {
        let price = Price::new(1000)?;

        assert_eq!(price.value, 1000);

        Ok(())
    }

    #[test]
    fn price_derefs_to_u64() {
        let price = Price { value: 100 };

        assert_eq!(*price, 100);
    }

    #[test]
    fn zero_is_rejected() {
        assert_eq!(Price::new(0), Err(PriceError::NotPositive));
    }

    #[test]
    fn amounts_above_the_ceiling_are_rejected() {
        assert_eq!(
            Price::new(MAX_AMOUNT + 1),
            Err(PriceError::TooLarge(MAX_AMOUNT + 1))
        );
    }

    #[test]
    fn parse_accepts_grouped_digits_and_whitespace() -> TestResult {
        assert_eq!(Price::parse(" 130,000 ")?.baht(), 130_000);

        Ok(())
    }

    #[test]
    fn parse_truncates_fractions() -> TestResult {
        assert_eq!(Price::parse("99.90")?.baht(), 99);

        Ok(())
    }

    #[test]
    fn parse_rejects_text() {
        assert_eq!(
            Price::parse("abc"),
            Err(PriceError::NotNumeric("abc".to_string()))
        );
        assert_eq!(
            Price::parse(""),
            Err(PriceError::NotNumeric(String::new()))
        );
    }

    #[test]
    fn parse_rejects_non_positive_values() {
        assert_eq!(Price::parse("0"), Err(PriceError::NotPositive));
        assert_eq!(Price::parse("0.5"), Err(PriceError::NotPositive));
        assert_eq!(Price::parse("-20"), Err(PriceError::NotPositive));
    }

    #[test]
    fn parse_reports_overlong_numbers_as_too_large() {
        let huge = format!("1{}", "0".repeat(30));

        assert_eq!(Price::parse(&huge), Err(PriceError::TooLarge(u64::MAX)));
        assert_eq!(Price::parse(&format!("{huge}.5")), Err(PriceError::TooLarge(u64::MAX)));
        assert_eq!(Price::parse(&format!("-{huge}")), Err(PriceError::NotPositive));
        assert_eq!(
            Price::parse("1.2.3"),
            Err(PriceError::NotNumeric("1.2.3".to_string()))
        );
    }
}
