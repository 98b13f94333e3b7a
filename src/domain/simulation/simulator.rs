//! Simulator - Feature vector to physiological projections.
//!
//! Deterministic, formula-based stand-in for a trained model. The weights
//! and rounding are part of the output contract; change them only together
//! with every consumer of the projections.

use super::projection::{DriverReason, Drivers, Projection};
use crate::domain::foundation::numeric::{clamp, round_to, sigmoid};
use crate::domain::mission::FeatureVector;

/// Mission length (days) over which the cortisol ramp is normalized.
pub const RAMP_REFERENCE_DAYS: f64 = 180.0;

/// Cap on normalized mission time.
pub const MAX_MISSION_TIME: f64 = 1.5;

/// Cycle driver threshold for the stress×sleep interaction.
const STRESS_SLEEP_DRIVER_THRESHOLD: f64 = 0.25;

/// Cycle driver threshold for irregularity history.
const CYCLE_HISTORY_DRIVER_THRESHOLD: f64 = 0.4;

/// Time multiplier for cortisol build-up, between ~0.25 and ~0.80.
///
/// `t = clamp(day / 180, 0, 1.5)`, `gain = 0.25 + 0.55 * sigmoid(3 * (t - 0.35))`.
pub fn time_gain(mission_day: i64) -> f64 {
    let t = clamp(mission_day as f64 / RAMP_REFERENCE_DAYS, 0.0, MAX_MISSION_TIME);
    0.25 + 0.55 * sigmoid(3.0 * (t - 0.35))
}

/// Cortisol load on a 0-100 scale, one decimal.
pub fn cortisol_load(features: &FeatureVector, mission_day: i64) -> f64 {
    let base = 0.40 * features.stress_score
        + 0.35 * features.sleep_deficit
        + 0.15 * features.isolation_factor
        + 0.10 * features.stress_x_sleep;

    let sensitivity =
        1.0 + 0.12 * features.pcos_or_endometriosis_flag + 0.08 * features.sleep_disorders;
    let score = clamp(base * time_gain(mission_day) * sensitivity, 0.0, 1.0);
    round_to(100.0 * score, 1)
}

/// Cycle variability in days, between 0.5 and 10, two decimals.
pub fn cycle_variability_days(features: &FeatureVector) -> f64 {
    let mut instability = 0.30 * features.stress_score
        + 0.25 * features.sleep_deficit
        + 0.15 * features.isolation_factor
        + 0.10 * features.radiation_factor
        + 0.10 * features.cycle_irregularity_history
        + 0.10 * features.pcos_or_endometriosis_flag;
    instability += 0.08 * features.stress_x_sleep + 0.05 * features.iso_x_stress;
    let instability = clamp(instability, 0.0, 1.0);

    round_to(0.5 + 9.5 * instability, 2)
}

/// Bone loss in percent per month, between 0.2 and 2.2, two decimals.
pub fn bone_loss_pct_per_month(features: &FeatureVector) -> f64 {
    let internal = 0.55 * features.gravity_factor
        + 0.20 * features.rad_x_grav
        + 0.10 * features.bone_density_concerns
        + 0.08 * features.sleep_deficit
        + 0.07 * features.stress_score;
    let internal = clamp(internal, 0.0, 1.0);

    round_to(0.2 + 2.0 * internal, 2)
}

/// Names the dominant factor for each axis. First matching rule wins.
pub fn attribute_drivers(features: &FeatureVector) -> Drivers {
    let stress = features.stress_score;
    let sleep_def = features.sleep_deficit;
    let iso = features.isolation_factor;

    let cortisol = if sleep_def >= stress && sleep_def >= iso {
        DriverReason::SleepDeficit
    } else if stress >= sleep_def && stress >= iso {
        DriverReason::WorkloadStress
    } else {
        DriverReason::IsolationLoad
    };

    let cycle = if features.stress_x_sleep > STRESS_SLEEP_DRIVER_THRESHOLD {
        DriverReason::StressSleepInteraction
    } else if features.cycle_irregularity_history > CYCLE_HISTORY_DRIVER_THRESHOLD
        || features.pcos_or_endometriosis_flag > 0.0
    {
        DriverReason::CycleSensitivity
    } else {
        DriverReason::CircadianDisruption
    };

    let bone = if features.gravity_factor > 0.5 {
        DriverReason::MicrogravityExposure
    } else {
        DriverReason::BaselineBoneDensity
    };

    Drivers {
        cortisol,
        cycle,
        bone,
    }
}

/// Maps a feature vector to projections plus driver attributions.
///
/// Total over every `FeatureVector`, including ones built from partial
/// mappings; all outputs are clamped into their declared ranges.
pub fn predict_from_features(features: &FeatureVector) -> Projection {
    // Saturating cast; NaN becomes 0.
    let mission_day = features.mission_day.trunc() as i64;

    Projection {
        mission_day,
        cortisol_load: cortisol_load(features, mission_day),
        cycle_variability_days: cycle_variability_days(features),
        bone_loss_pct_per_month: bone_loss_pct_per_month(features),
        drivers: attribute_drivers(features),
    }
}
