//! Per-axis risk breakdown.

use serde::{Deserialize, Serialize};

use super::bucket::RiskBucket;
use crate::domain::foundation::{Axis, UnitScore};

/// Decimals kept on per-axis scores.
pub const SUB_SCORE_DECIMALS: usize = 3;

/// Normalized risk for a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskSubScore {
    /// 0-1, rounded to three decimals.
    pub score: f64,
    pub bucket: RiskBucket,
}

impl RiskSubScore {
    /// Buckets the unrounded score, then rounds it for reporting.
    pub fn from_unit(score: UnitScore) -> Self {
        Self {
            score: score.rounded(SUB_SCORE_DECIMALS),
            bucket: RiskBucket::from_score(score.value()),
        }
    }
}

/// Risk sub-scores for every axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskBreakdown {
    pub cortisol: RiskSubScore,
    pub cycle: RiskSubScore,
    pub bone: RiskSubScore,
}

impl RiskBreakdown {
    /// Returns the sub-score for an axis.
    pub fn get(&self, axis: Axis) -> &RiskSubScore {
        match axis {
            Axis::Cortisol => &self.cortisol,
            Axis::Cycle => &self.cycle,
            Axis::Bone => &self.bone,
        }
    }

    /// Iterates sub-scores in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (Axis, &RiskSubScore)> {
        Axis::ALL.into_iter().map(move |axis| (axis, self.get(axis)))
    }

    /// The axis with the highest score. Ties go to the earlier axis.
    pub fn dominant_axis(&self) -> Axis {
        self.iter()
            .fold((Axis::Cortisol, f64::NEG_INFINITY), |best, (axis, sub)| {
                if sub.score > best.1 {
                    (axis, sub.score)
                } else {
                    best
                }
            })
            .0
    }
}
