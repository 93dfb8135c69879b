//! Money type for representing currency amounts
//!
//! Wraps a `rust_decimal::Decimal` so amounts keep the exact precision they
//! were entered or imported with. Formatting always rounds to two decimal
//! places; storage keeps the full value.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// Largest amount accepted on input (one quadrillion)
///
/// Sums of up to tens of trillions of such amounts still fit in a `Decimal`.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// A monetary amount with no attached currency
///
/// Currency codes travel alongside amounts as plain labels; no conversion
/// is ever performed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from a decimal
    pub const fn from_decimal(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying decimal
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Check if the amount is positive
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// True when the magnitude is above [`MAX_AMOUNT`]
    pub fn exceeds_limit(&self) -> bool {
        self.0.abs() > MAX_AMOUNT
    }

    /// Lossy conversion for spreadsheet cells and chart values
    pub fn to_f64(&self) -> Option<f64> {
        self.0.to_f64()
    }

    /// Parse a money amount from a string
    ///
    /// Accepts plain decimals ("15000", "12.345", "-3.5") and scientific
    /// notation ("1.5e3"). Surrounding whitespace is ignored. Magnitudes
    /// above [`MAX_AMOUNT`] are rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let money = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map(|d| Self(d.normalize()))
            .map_err(|_| MoneyParseError::InvalidFormat(trimmed.to_string()))?;

        if money.exceeds_limit() {
            return Err(MoneyParseError::OutOfRange(trimmed.to_string()));
        }
        Ok(money)
    }

    /// Format rounded to two decimal places ("15000.00")
    pub fn format_fixed(&self) -> String {
        let mut rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);
        rounded.to_string()
    }

    /// Format with a trailing currency code ("15000.00 PKR")
    pub fn format_with_code(&self, code: &str) -> String {
        format!("{} {}", self.format_fixed(), code)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_fixed())
    }
}

// Arithmetic saturates at the Decimal bounds instead of panicking.
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
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

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    Empty,
    InvalidFormat(String),
    /// Parsed fine but is larger than [`MAX_AMOUNT`]
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::Empty => write!(f, "Amount is empty"),
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
            MoneyParseError::OutOfRange(s) => {
                write!(f, "Amount {} is larger than the limit of {}", s, MAX_AMOUNT)
            }
        }
    }
}

impl std::error::Error for MoneyParseError {}
