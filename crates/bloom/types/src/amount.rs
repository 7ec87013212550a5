//! Currency amounts
//!
//! All amounts are held in minor currency units (cents). The site runs in a
//! single currency, so no currency code is tracked.

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// A donation amount in minor currency units (cents)
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Amount(pub u64);

/// Largest whole-unit value accepted from an untyped source.
///
/// Keeps `from_major * 100` far away from `u64` overflow; no real donation
/// comes anywhere near it.
const MAX_MAJOR_INPUT: f64 = 1e12;

impl Amount {
    pub fn new(cents: u64) -> Self {
        Self(cents)
    }

    pub fn zero() -> Self {
        Self(0)
    }

    /// Amount from whole currency units ($35 -> 3500 cents)
    pub fn from_major(units: u64) -> Self {
        Self(units * 100)
    }

    /// Validate an untyped number (as delivered by a payment form) into an
    /// amount. Rejects NaN, infinities, non-positive values, and values too
    /// large to represent.
    pub fn try_from_major_f64(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::AmountNotFinite);
        }
        if value <= 0.0 {
            return Err(ValidationError::NonPositiveAmount);
        }
        if value > MAX_MAJOR_INPUT {
            return Err(ValidationError::AmountOutOfRange);
        }
        Ok(Self((value * 100.0).round() as u64))
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl std::ops::Add for Amount {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Amount {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}
