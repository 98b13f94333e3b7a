//! Risk Module - Consistent risk scores and buckets for projections.
//!
//! # Components
//!
//! - `RiskBucket` - Low / Moderate / High, fixed thresholds 0.35 and 0.70
//! - `RiskScorer` - Per-axis normalization and weighted composite
//! - `RiskBreakdown` - Sub-score and bucket for every axis
//! - `attach_risk_breakdown` - Projection to risk-annotated `Outputs`
//!
//! Buckets are assigned from unrounded scores; reported scores are rounded
//! afterwards (three decimals per axis, two for the composite).

mod breakdown;
mod bucket;
mod scorer;

pub use breakdown::{RiskBreakdown, RiskSubScore, SUB_SCORE_DECIMALS};
pub use bucket::{RiskBucket, HIGH_THRESHOLD, MODERATE_THRESHOLD};
pub use scorer::{
    attach_risk_breakdown, Outputs, RiskScorer, BONE_WEIGHT, CORTISOL_WEIGHT, CYCLE_WEIGHT,
    RISK_SCORE_DECIMALS,
};
