//! UnitScore value object (0.0-1.0 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::numeric::{clamp, round_to};

/// A normalized score between 0.0 and 1.0 inclusive.
///
/// Deserialization goes through [`UnitScore::new`], so stored values are
/// clamped on the way in.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(into = "f64", from = "f64")]
pub struct UnitScore(f64);

impl UnitScore {
    /// Lowest possible score.
    pub const ZERO: Self = Self(0.0);

    /// Highest possible score.
    pub const ONE: Self = Self(1.0);

    /// Creates a new UnitScore, clamping to the valid range.
    pub fn new(value: f64) -> Self {
        Self(clamp(value, 0.0, 1.0))
    }

    /// Returns the unrounded value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the value rounded to `digits` decimals.
    pub fn rounded(&self, digits: usize) -> f64 {
        round_to(self.0, digits)
    }
}

impl From<f64> for UnitScore {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<UnitScore> for f64 {
    fn from(score: UnitScore) -> Self {
        score.0
    }
}

impl Default for UnitScore {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for UnitScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}
