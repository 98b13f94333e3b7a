//! Feature Builder - Raw payload to bounded numeric feature vector.

use serde::{Deserialize, Serialize};

use super::encoding::{
    BoneDensityConcern, CycleIrregularity, FactorEncoding, Gravity, IsolationLevel,
    RadiationLevel, SleepDisorder,
};
use super::payload::{RawPayload, Section};
use crate::domain::foundation::numeric::{clamp, round_to};
use crate::domain::foundation::ValidationError;

/// Upper bound for the mission day feature.
pub const MAX_MISSION_DAY: i64 = 10_000;

/// Optimal sleep over the last 72 hours (8h/night for 3 nights).
pub const OPTIMAL_SLEEP_HOURS_72H: f64 = 24.0;

/// Hours in the 72-hour observation window.
pub const SLEEP_WINDOW_HOURS: f64 = 72.0;

/// Stress level assumed when the payload gives none.
pub const DEFAULT_STRESS_LEVEL: f64 = 0.5;

const FEATURE_DECIMALS: usize = 3;

/// Model-ready feature vector.
///
/// Every field lies in `[0, 1]` except `mission_day`, which lies in
/// `[0, 10000]`. Deserialization accepts partial mappings and fills missing
/// keys with the simulator defaults (see [`FeatureVector::default`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "PartialFeatureVector")]
pub struct FeatureVector {
    // mission
    pub mission_day: f64,
    pub gravity_factor: f64,
    pub radiation_factor: f64,
    pub isolation_factor: f64,
    pub stress_score: f64,
    pub sleep_deficit: f64,

    // history
    pub cycle_irregularity_history: f64,
    pub bone_density_concerns: f64,
    pub sleep_disorders: f64,
    pub pcos_or_endometriosis_flag: f64,

    // interactions
    pub stress_x_sleep: f64,
    pub rad_x_grav: f64,
    pub iso_x_stress: f64,
}

impl FeatureVector {
    /// Number of named features.
    pub const LEN: usize = 13;

    /// Returns `(name, value, min, max)` for every feature, in wire order.
    pub fn bounded_values(&self) -> [(&'static str, f64, f64, f64); Self::LEN] {
        [
            ("mission_day", self.mission_day, 0.0, MAX_MISSION_DAY as f64),
            ("gravity_factor", self.gravity_factor, 0.0, 1.0),
            ("radiation_factor", self.radiation_factor, 0.0, 1.0),
            ("isolation_factor", self.isolation_factor, 0.0, 1.0),
            ("stress_score", self.stress_score, 0.0, 1.0),
            ("sleep_deficit", self.sleep_deficit, 0.0, 1.0),
            ("cycle_irregularity_history", self.cycle_irregularity_history, 0.0, 1.0),
            ("bone_density_concerns", self.bone_density_concerns, 0.0, 1.0),
            ("sleep_disorders", self.sleep_disorders, 0.0, 1.0),
            ("pcos_or_endometriosis_flag", self.pcos_or_endometriosis_flag, 0.0, 1.0),
            ("stress_x_sleep", self.stress_x_sleep, 0.0, 1.0),
            ("rad_x_grav", self.rad_x_grav, 0.0, 1.0),
            ("iso_x_stress", self.iso_x_stress, 0.0, 1.0),
        ]
    }

    /// Verifies every feature lies in its declared interval.
    ///
    /// Vectors from [`build_features`] always pass. Externally supplied
    /// vectors may not; the simulator still accepts them.
    pub fn check_bounds(&self) -> Result<(), ValidationError> {
        for (name, value, min, max) in self.bounded_values() {
            if !(min..=max).contains(&value) {
                return Err(ValidationError::out_of_range(name, min, max, value));
            }
        }
        Ok(())
    }
}

impl Default for FeatureVector {
    /// Simulator defaults for a vector with no keys at all.
    fn default() -> Self {
        PartialFeatureVector::default().into()
    }
}

/// Feature mapping as it may arrive from outside the pipeline, with any
/// subset of keys present.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct PartialFeatureVector {
    mission_day: Option<f64>,
    gravity_factor: Option<f64>,
    radiation_factor: Option<f64>,
    isolation_factor: Option<f64>,
    stress_score: Option<f64>,
    sleep_deficit: Option<f64>,
    cycle_irregularity_history: Option<f64>,
    bone_density_concerns: Option<f64>,
    sleep_disorders: Option<f64>,
    pcos_or_endometriosis_flag: Option<f64>,
    stress_x_sleep: Option<f64>,
    rad_x_grav: Option<f64>,
    iso_x_stress: Option<f64>,
}

impl From<PartialFeatureVector> for FeatureVector {
    fn from(partial: PartialFeatureVector) -> Self {
        let gravity_factor = partial.gravity_factor.unwrap_or(0.0);
        let radiation_factor = partial.radiation_factor.unwrap_or(0.6);
        let isolation_factor = partial.isolation_factor.unwrap_or(0.6);
        let stress_score = partial.stress_score.unwrap_or(DEFAULT_STRESS_LEVEL);
        let sleep_deficit = partial.sleep_deficit.unwrap_or(0.0);

        FeatureVector {
            mission_day: partial.mission_day.unwrap_or(1.0),
            gravity_factor,
            radiation_factor,
            isolation_factor,
            stress_score,
            sleep_deficit,
            cycle_irregularity_history: partial.cycle_irregularity_history.unwrap_or(0.0),
            bone_density_concerns: partial.bone_density_concerns.unwrap_or(0.0),
            sleep_disorders: partial.sleep_disorders.unwrap_or(0.0),
            pcos_or_endometriosis_flag: partial.pcos_or_endometriosis_flag.unwrap_or(0.0),
            stress_x_sleep: partial
                .stress_x_sleep
                .unwrap_or(stress_score * sleep_deficit),
            rad_x_grav: partial.rad_x_grav.unwrap_or(radiation_factor * gravity_factor),
            iso_x_stress: partial.iso_x_stress.unwrap_or(isolation_factor * stress_score),
        }
    }
}

/// Normalized sleep deficit (0..1) against an 8h/night baseline over 72h.
pub fn sleep_deficit_72h(sleep_hours_last_72h: f64) -> f64 {
    let slept = clamp(sleep_hours_last_72h, 0.0, SLEEP_WINDOW_HOURS);
    let deficit = clamp(
        (OPTIMAL_SLEEP_HOURS_72H - slept) / OPTIMAL_SLEEP_HOURS_72H,
        0.0,
        1.0,
    );
    round_to(deficit, FEATURE_DECIMALS)
}

/// Builds a model-ready feature vector from a raw payload.
///
/// Never fails: absent, mistyped or out-of-range fields are replaced by their
/// defaults or clamped.
///
/// | Field | Default |
/// |---|---|
/// | `mission.mission_day` | 0 |
/// | `mission.gravity` | earth |
/// | `mission.radiation_level` | medium |
/// | `mission.isolation_level` | medium |
/// | `mission.stress_level` | 0.5 |
/// | `mission.sleep_hours_last_72h` | 24 |
/// | `history.cycle_irregularity_history` | none |
/// | `history.bone_density_concerns` | none |
/// | `history.sleep_disorders` | none |
/// | `history.prior_pcos_or_endometriosis` | false |
pub fn build_features(payload: &RawPayload) -> FeatureVector {
    let mission = payload.mission();
    let history = payload.history();

    let mission_day = mission.int("mission_day", 0).clamp(0, MAX_MISSION_DAY);
    let gravity_factor = encoded::<Gravity>(&mission).factor();
    let radiation_factor = encoded::<RadiationLevel>(&mission).factor();
    let isolation_factor = encoded::<IsolationLevel>(&mission).factor();

    let stress = clamp(mission.float("stress_level", DEFAULT_STRESS_LEVEL), 0.0, 1.0);
    let sleep_deficit = sleep_deficit_72h(
        mission.float("sleep_hours_last_72h", OPTIMAL_SLEEP_HOURS_72H),
    );

    let cycle_hist = encoded::<CycleIrregularity>(&history).factor();
    let bone_hist = encoded::<BoneDensityConcern>(&history).factor();
    let sleep_hist = encoded::<SleepDisorder>(&history).factor();
    let pcos_endo_flag = if history.flag("prior_pcos_or_endometriosis", false) {
        1.0
    } else {
        0.0
    };

    // Interaction terms use the unrounded stress level.
    FeatureVector {
        mission_day: mission_day as f64,
        gravity_factor,
        radiation_factor,
        isolation_factor,
        stress_score: round_to(stress, FEATURE_DECIMALS),
        sleep_deficit,
        cycle_irregularity_history: cycle_hist,
        bone_density_concerns: bone_hist,
        sleep_disorders: sleep_hist,
        pcos_or_endometriosis_flag: pcos_endo_flag,
        stress_x_sleep: round_to(stress * sleep_deficit, FEATURE_DECIMALS),
        rad_x_grav: round_to(radiation_factor * gravity_factor, FEATURE_DECIMALS),
        iso_x_stress: round_to(isolation_factor * stress, FEATURE_DECIMALS),
    }
}

fn encoded<E: FactorEncoding>(section: &Section<'_>) -> E {
    section.key(E::FIELD).map(E::from_key).unwrap_or_default()
}
