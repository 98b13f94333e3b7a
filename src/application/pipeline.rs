//! Prediction pipeline - Feature Builder, Simulator and Risk Scorer composed.
//!
//! Both entry points are synchronous pure functions with no shared state, so
//! any number of callers may invoke them concurrently.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::mission::{build_features, FeatureVector, RawPayload};
use crate::domain::risk::{attach_risk_breakdown, Outputs};
use crate::domain::simulation::predict_from_features;

/// Full pipeline result, echoing the request and the intermediate features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionEnvelope {
    pub inputs: RawPayload,
    pub features: FeatureVector,
    pub outputs: Outputs,
}

/// Engineered features to risk-annotated outputs.
///
/// Out-of-range features are logged and still evaluated; the simulator
/// clamps every projection into its declared range.
pub fn predict_features(features: &FeatureVector) -> Outputs {
    if let Err(violation) = features.check_bounds() {
        warn!(field = violation.field(), error = %violation, "Feature vector out of bounds");
    }

    let outputs = attach_risk_breakdown(&predict_from_features(features));

    debug!(
        mission_day = outputs.projection.mission_day,
        risk_score = outputs.risk_score,
        risk_overall = %outputs.risk_overall,
        "Computed mission projection"
    );

    outputs
}

/// Raw mission payload to features to outputs.
///
/// Never fails: every malformed or missing field is defaulted during feature
/// building.
pub fn predict_raw(payload: &RawPayload) -> PredictionEnvelope {
    let features = build_features(payload);
    let outputs = predict_features(&features);

    PredictionEnvelope {
        inputs: payload.clone(),
        features,
        outputs,
    }
}
