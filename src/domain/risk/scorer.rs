//! Risk Scorer - Projections to normalized risk scores and buckets.

use serde::{Deserialize, Serialize};

use super::breakdown::{RiskBreakdown, RiskSubScore};
use super::bucket::RiskBucket;
use crate::domain::foundation::UnitScore;
use crate::domain::simulation::Projection;

/// Composite weight of the cortisol axis.
pub const CORTISOL_WEIGHT: f64 = 0.45;

/// Composite weight of the cycle axis.
pub const CYCLE_WEIGHT: f64 = 0.30;

/// Composite weight of the bone axis.
pub const BONE_WEIGHT: f64 = 0.25;

/// Decimals kept on the composite score.
pub const RISK_SCORE_DECIMALS: usize = 2;

/// A projection annotated with risk scores.
///
/// Serializes flat: the projection fields followed by `risk_score`,
/// `risk_overall` and `risk_breakdown`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(flatten)]
    pub projection: Projection,
    /// 0-1, rounded to two decimals.
    pub risk_score: f64,
    pub risk_overall: RiskBucket,
    pub risk_breakdown: RiskBreakdown,
}

impl Outputs {
    /// Recomputes the risk fields from the projection, ignoring the current ones.
    pub fn reattach_risk(&self) -> Outputs {
        attach_risk_breakdown(self)
    }
}

impl AsRef<Projection> for Outputs {
    fn as_ref(&self) -> &Projection {
        &self.projection
    }
}

/// Stateless normalization of projections into comparable 0-1 risks.
pub struct RiskScorer;

impl RiskScorer {
    /// Cortisol load (0-100) mapped linearly onto 0-1.
    pub fn cortisol_risk(cortisol_load: f64) -> UnitScore {
        UnitScore::new(cortisol_load / 100.0)
    }

    /// Cycle variability mapped from 0-10 days onto 0-1.
    pub fn cycle_risk(cycle_variability_days: f64) -> UnitScore {
        UnitScore::new(cycle_variability_days / 10.0)
    }

    /// Bone loss normalized within the 0.2-2.2 %/month window.
    pub fn bone_risk(bone_loss_pct_per_month: f64) -> UnitScore {
        UnitScore::new((bone_loss_pct_per_month - 0.2) / 2.0)
    }

    /// Weighted composite risk, unrounded.
    pub fn overall_risk(projection: &Projection) -> UnitScore {
        let c = Self::cortisol_risk(projection.cortisol_load).value();
        let y = Self::cycle_risk(projection.cycle_variability_days).value();
        let b = Self::bone_risk(projection.bone_loss_pct_per_month).value();

        UnitScore::new(CORTISOL_WEIGHT * c + CYCLE_WEIGHT * y + BONE_WEIGHT * b)
    }

    /// Per-axis sub-scores with buckets.
    pub fn breakdown(projection: &Projection) -> RiskBreakdown {
        RiskBreakdown {
            cortisol: RiskSubScore::from_unit(Self::cortisol_risk(projection.cortisol_load)),
            cycle: RiskSubScore::from_unit(Self::cycle_risk(projection.cycle_variability_days)),
            bone: RiskSubScore::from_unit(Self::bone_risk(projection.bone_loss_pct_per_month)),
        }
    }
}

/// Returns a new `Outputs` carrying the projection plus its risk fields.
///
/// The input is never modified. Passing an existing `Outputs` recomputes the
/// risk fields from its projection, so repeated calls agree.
pub fn attach_risk_breakdown<P: AsRef<Projection>>(outputs: &P) -> Outputs {
    let projection = outputs.as_ref();
    let overall = RiskScorer::overall_risk(projection);

    Outputs {
        projection: projection.clone(),
        risk_score: overall.rounded(RISK_SCORE_DECIMALS),
        risk_overall: RiskBucket::from_score(overall.value()),
        risk_breakdown: RiskScorer::breakdown(projection),
    }
}
