//! Money represented as integer minor units
//!
//! Every amount in the ledger is a whole number of the currency's smallest
//! unit (e.g. pence). Arithmetic never touches floating point; rust_decimal is
//! only used at the edges to convert from and to major units ("12.34").

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;
use thiserror::Error;

/// Number of minor units per major unit
const MINOR_DIGITS: u32 = 2;

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Overflow during calculation")]
    Overflow,
}

/// A signed monetary amount in minor units
///
/// Positive and negative values are both meaningful: expense totals and
/// split amounts are positive, while member balances carry a sign.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Creates Money from an integer amount in minor units (e.g., pence)
    pub const fn from_minor(minor_units: i64) -> Self {
        Self(minor_units)
    }

    /// Creates a zero amount
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Converts a major-unit decimal (e.g. `12.34`) into minor units
    ///
    /// Rejects values with more than two fractional digits instead of
    /// rounding them.
    pub fn from_major(amount: Decimal) -> Result<Self, MoneyError> {
        let normalized = amount.normalize();
        if normalized.scale() > MINOR_DIGITS {
            return Err(MoneyError::InvalidAmount(format!(
                "{} has more than {} decimal places",
                amount, MINOR_DIGITS
            )));
        }

        let minor = normalized
            .checked_mul(Decimal::from(10_i64.pow(MINOR_DIGITS)))
            .ok_or(MoneyError::Overflow)?;

        i64::try_from(minor)
            .map(Self)
            .map_err(|_| MoneyError::Overflow)
    }

    /// Returns the amount in major units
    pub fn to_major(&self) -> Decimal {
        Decimal::new(self.0, MINOR_DIGITS)
    }

    /// Returns the raw amount in minor units
    pub const fn minor_units(&self) -> i64 {
        self.0
    }

    /// Returns true if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns true if the amount is strictly positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Returns true if the amount is strictly negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Checked addition that reports overflow
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or(MoneyError::Overflow)
    }

    /// Checked subtraction that reports overflow
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        self.0
            .checked_sub(other.0)
            .map(Self)
            .ok_or(MoneyError::Overflow)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    /// Parses a major-unit string such as `"12.34"` or `"-0.5"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MoneyError::InvalidAmount("empty amount".to_string()));
        }

        let decimal = Decimal::from_str_exact(trimmed)
            .map_err(|_| MoneyError::InvalidAmount(format!("'{}' is not a number", trimmed)))?;

        Self::from_major(decimal)
    }
}

impl From<i64> for Money {
    fn from(minor_units: i64) -> Self {
        Self(minor_units)
    }
}

impl From<Money> for i64 {
    fn from(money: Money) -> i64 {
        money.0
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_from_minor() {
        let m = Money::from_minor(10050);
        assert_eq!(m.minor_units(), 10050);
        assert_eq!(m.to_major(), dec!(100.50));
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::from_minor(10000);
        let b = Money::from_minor(5000);

        assert_eq!(a + b, Money::from_minor(15000));
        assert_eq!(a - b, Money::from_minor(5000));
        assert_eq!(-a, Money::from_minor(-10000));
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_minor(0).to_string(), "0.00");
        assert_eq!(Money::from_minor(7).to_string(), "0.07");
        assert_eq!(Money::from_minor(1234).to_string(), "12.34");
        assert_eq!(Money::from_minor(-1050).to_string(), "-10.50");
    }

    #[test]
    fn test_checked_add_overflow() {
        let max = Money::from_minor(i64::MAX);
        assert_eq!(max.checked_add(&Money::from_minor(1)), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_from_major_rejects_sub_minor_precision() {
        let result = Money::from_major(dec!(12.345));
        assert!(matches!(result, Err(MoneyError::InvalidAmount(_))));
    }
}
