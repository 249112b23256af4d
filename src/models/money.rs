//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides safe arithmetic operations, basis-point apportioning, and
//! formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// One hundred percent expressed in basis points
pub const BASIS_POINTS_TOTAL: u32 = 10_000;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
///
/// Using i64 cents avoids floating-point precision issues and supports
/// amounts up to approximately $92 quadrillion (both positive and negative).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use splitbook::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Apportion this amount by a basis-point percentage (10000 = 100%)
    ///
    /// Computes `amount * basis_points / 10000` over the real quotient,
    /// rounding to the nearest cent with ties away from zero. The product is
    /// widened to i128 so large amounts cannot overflow.
    ///
    /// Each call rounds independently; apportioning an amount across several
    /// percentages that sum to 10000 may therefore not sum back to the
    /// original amount exactly.
    ///
    /// # Examples
    /// ```
    /// use splitbook::models::Money;
    /// let rent = Money::from_cents(100_000);
    /// assert_eq!(rent.apportion_bp(6000).cents(), 60_000); // 60%
    /// assert_eq!(Money::from_cents(1001).apportion_bp(3333).cents(), 334);
    /// ```
    pub fn apportion_bp(&self, basis_points: u32) -> Self {
        let product = self.0 as i128 * basis_points as i128;
        let half = BASIS_POINTS_TOTAL as i128 / 2;
        let rounded = if product >= 0 {
            (product + half) / BASIS_POINTS_TOTAL as i128
        } else {
            (product - half) / BASIS_POINTS_TOTAL as i128
        };
        Self(rounded as i64)
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-${}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            write!(f, "${}.{:02}", self.dollars(), self.cents_part())
        }
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

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.dollars(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_apportion_whole_percentages() {
        let m = Money::from_cents(100_000);
        assert_eq!(m.apportion_bp(6000).cents(), 60_000);
        assert_eq!(m.apportion_bp(4000).cents(), 40_000);
        assert_eq!(m.apportion_bp(10_000).cents(), 100_000);
        assert_eq!(m.apportion_bp(0).cents(), 0);
    }

    #[test]
    fn test_apportion_rounds_to_nearest() {
        // 1001 * 3333 / 10000 = 333.6333 -> 334
        assert_eq!(Money::from_cents(1001).apportion_bp(3333).cents(), 334);
        // 1001 * 3334 / 10000 = 333.7334 -> 334
        assert_eq!(Money::from_cents(1001).apportion_bp(3334).cents(), 334);
        // 100 * 50 / 10000 = 0.5 -> ties away from zero
        assert_eq!(Money::from_cents(100).apportion_bp(50).cents(), 1);
    }

    #[test]
    fn test_apportion_negative_ties_away_from_zero() {
        assert_eq!(Money::from_cents(-100).apportion_bp(50).cents(), -1);
        assert_eq!(Money::from_cents(-1001).apportion_bp(3333).cents(), -334);
    }

    #[test]
    fn test_apportion_large_amount_no_overflow() {
        let m = Money::from_cents(i64::MAX / 2);
        assert_eq!(m.apportion_bp(10_000), m);
    }

    #[test]
    fn test_comparison() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);
        let c = Money::from_cents(1000);

        assert!(a > b);
        assert!(b < a);
        assert_eq!(a, c);
    }

    #[test]
    fn test_is_checks() {
        assert!(Money::zero().is_zero());
        assert!(Money::from_cents(100).is_positive());
        assert!(Money::from_cents(-100).is_negative());
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(1050).format_with_symbol("€"), "€10.50");
        assert_eq!(Money::from_cents(-1050).format_with_symbol("€"), "-€10.50");
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
