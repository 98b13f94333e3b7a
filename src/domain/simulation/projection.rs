//! Projection value objects and driver attributions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Axis, ValidationError};

/// The dominant factor behind one projected axis.
///
/// Kept as a closed set so the explanation layer can key its templates on
/// it. On the wire it renders as the attribution sentence the UI shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum DriverReason {
    // cortisol
    SleepDeficit,
    WorkloadStress,
    IsolationLoad,
    // cycle
    StressSleepInteraction,
    CycleSensitivity,
    CircadianDisruption,
    // bone
    MicrogravityExposure,
    BaselineBoneDensity,
}

impl DriverReason {
    const ALL: [DriverReason; 8] = [
        DriverReason::SleepDeficit,
        DriverReason::WorkloadStress,
        DriverReason::IsolationLoad,
        DriverReason::StressSleepInteraction,
        DriverReason::CycleSensitivity,
        DriverReason::CircadianDisruption,
        DriverReason::MicrogravityExposure,
        DriverReason::BaselineBoneDensity,
    ];

    /// Short label for the driving factor.
    pub fn label(&self) -> &'static str {
        match self {
            DriverReason::SleepDeficit => "sleep deficit",
            DriverReason::WorkloadStress => "workload/stress",
            DriverReason::IsolationLoad => "isolation load",
            DriverReason::StressSleepInteraction => "stress×sleep interaction",
            DriverReason::CycleSensitivity => "pre-flight cycle sensitivity",
            DriverReason::CircadianDisruption => "circadian disruption proxy",
            DriverReason::MicrogravityExposure => "microgravity exposure duration",
            DriverReason::BaselineBoneDensity => "baseline bone density concerns",
        }
    }

    /// Attribution sentence shown to the user.
    pub fn sentence(&self) -> &'static str {
        match self {
            DriverReason::SleepDeficit => "Primary driver: cumulative sleep deficit.",
            DriverReason::WorkloadStress => "Primary driver: elevated workload/stress.",
            DriverReason::IsolationLoad => "Primary driver: isolation load.",
            DriverReason::StressSleepInteraction => "Primary driver: stress × sleep interaction.",
            DriverReason::CycleSensitivity => "Primary driver: pre-flight cycle sensitivity.",
            DriverReason::CircadianDisruption => "Primary driver: circadian disruption proxy.",
            DriverReason::MicrogravityExposure => {
                "Primary driver: microgravity exposure duration."
            }
            DriverReason::BaselineBoneDensity => {
                "Primary driver: baseline bone density concerns."
            }
        }
    }

    /// Axis this reason can be attributed to.
    pub fn axis(&self) -> Axis {
        match self {
            DriverReason::SleepDeficit
            | DriverReason::WorkloadStress
            | DriverReason::IsolationLoad => Axis::Cortisol,
            DriverReason::StressSleepInteraction
            | DriverReason::CycleSensitivity
            | DriverReason::CircadianDisruption => Axis::Cycle,
            DriverReason::MicrogravityExposure | DriverReason::BaselineBoneDensity => Axis::Bone,
        }
    }
}

impl fmt::Display for DriverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sentence())
    }
}

impl From<DriverReason> for String {
    fn from(reason: DriverReason) -> Self {
        reason.sentence().to_string()
    }
}

impl TryFrom<String> for DriverReason {
    type Error = ValidationError;

    /// Accepts either the attribution sentence or the short label.
    fn try_from(text: String) -> Result<Self, Self::Error> {
        let text = text.trim();
        DriverReason::ALL
            .into_iter()
            .find(|reason| reason.sentence() == text || reason.label() == text)
            .ok_or_else(|| {
                ValidationError::invalid_format("driver", format!("unknown attribution '{}'", text))
            })
    }
}

/// Per-axis driver attributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drivers {
    pub cortisol: DriverReason,
    pub cycle: DriverReason,
    pub bone: DriverReason,
}

impl Drivers {
    /// Returns the attribution for an axis.
    pub fn get(&self, axis: Axis) -> DriverReason {
        match axis {
            Axis::Cortisol => self.cortisol,
            Axis::Cycle => self.cycle,
            Axis::Bone => self.bone,
        }
    }
}

/// Simulated physiological projection for one mission day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub mission_day: i64,
    /// 0-100, higher is worse.
    pub cortisol_load: f64,
    /// Absolute deviation from baseline cycle length, in days.
    pub cycle_variability_days: f64,
    /// Percent bone mineral density lost per month.
    pub bone_loss_pct_per_month: f64,
    pub drivers: Drivers,
}

impl AsRef<Projection> for Projection {
    fn as_ref(&self) -> &Projection {
        self
    }
}
