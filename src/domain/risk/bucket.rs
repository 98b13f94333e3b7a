//! Risk bucket classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scores at or above this are at least Moderate.
pub const MODERATE_THRESHOLD: f64 = 0.35;

/// Scores at or above this are High.
pub const HIGH_THRESHOLD: f64 = 0.70;

/// Coarse risk band for a 0-1 score.
///
/// The same thresholds apply to every axis and to the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskBucket {
    Low,
    Moderate,
    High,
}

impl RiskBucket {
    /// Classifies a score: `< 0.35` Low, `< 0.70` Moderate, otherwise High.
    pub fn from_score(score: f64) -> Self {
        if score < MODERATE_THRESHOLD {
            RiskBucket::Low
        } else if score < HIGH_THRESHOLD {
            RiskBucket::Moderate
        } else {
            RiskBucket::High
        }
    }

    /// Returns the display label for this bucket.
    pub fn label(&self) -> &'static str {
        match self {
            RiskBucket::Low => "Low",
            RiskBucket::Moderate => "Moderate",
            RiskBucket::High => "High",
        }
    }
}

impl fmt::Display for RiskBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
