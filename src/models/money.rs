//! Money type for representing currency amounts
//!
//! Amounts are exact decimals (`rust_decimal::Decimal`) so that summing many
//! discounted line items never drifts the way binary floating point would.
//! Values are only rounded when a report presents them.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};

/// Number of decimal places used when presenting amounts and ratios
pub const DISPLAY_SCALE: u32 = 2;

/// Round a decimal to two places, midpoint away from zero (SQL `ROUND`)
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Represents a monetary amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from a decimal
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use northwind::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the exact underlying amount
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// The amount rounded to cents
    pub fn rounded(&self) -> Self {
        Self(round2(self.0))
    }

    /// Lossy conversion for serialization into formats without decimals
    pub fn to_f64(&self) -> f64 {
        self.rounded().0.to_f64().unwrap_or_default()
    }

    /// Divide evenly across `count` items, rounded to cents
    ///
    /// Returns `None` when `count` is zero.
    pub fn average_over(&self, count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        self.0
            .checked_div(Decimal::from(count))
            .map(|avg| Self(round2(avg)))
    }

    /// This amount as a percentage of `whole`, rounded to two places
    ///
    /// Returns `None` when `whole` is zero.
    pub fn percentage_of(&self, whole: Money) -> Option<Decimal> {
        if whole.is_zero() {
            return None;
        }
        self.0
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|scaled| scaled.checked_div(whole.0))
            .map(round2)
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let rounded = round2(self.0);
        if rounded.is_sign_negative() && !rounded.is_zero() {
            format!("-{}{:.2}", symbol, rounded.abs())
        } else {
            format!("{}{:.2}", symbol, rounded.abs())
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
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
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

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}
