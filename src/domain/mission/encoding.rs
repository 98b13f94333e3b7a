//! Categorical encodings for mission context and health history.
//!
//! Each payload category maps to a fixed numeric factor. Keys are matched
//! after trimming and lower-casing; unknown or empty keys fall back to the
//! category default rather than failing.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A categorical payload field with a fixed numeric encoding.
pub trait FactorEncoding: Sized + Default + Copy {
    /// Payload field this category is read from.
    const FIELD: &'static str;

    /// Parses a normalized (trimmed, lower-cased) key.
    fn parse_key(key: &str) -> Option<Self>;

    /// Numeric factor fed into the feature vector.
    fn factor(&self) -> f64;

    /// Parses a raw key, falling back to the default for unknown values.
    fn from_key(key: &str) -> Self {
        let normalized = key.trim().to_lowercase();
        Self::parse_key(&normalized).unwrap_or_else(|| {
            if !normalized.is_empty() {
                debug!(field = Self::FIELD, key, "Unknown category, using default");
            }
            Self::default()
        })
    }
}

/// Ambient gravity during the mission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gravity {
    #[default]
    Earth,
    Microgravity,
}

impl FactorEncoding for Gravity {
    const FIELD: &'static str = "gravity";

    fn parse_key(key: &str) -> Option<Self> {
        match key {
            "microgravity" | "micro" | "mg" => Some(Gravity::Microgravity),
            "earth" => Some(Gravity::Earth),
            _ => None,
        }
    }

    fn factor(&self) -> f64 {
        match self {
            Gravity::Earth => 0.0,
            Gravity::Microgravity => 1.0,
        }
    }
}

/// Cumulative radiation exposure band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadiationLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl FactorEncoding for RadiationLevel {
    const FIELD: &'static str = "radiation_level";

    fn parse_key(key: &str) -> Option<Self> {
        match key {
            "low" => Some(RadiationLevel::Low),
            "medium" => Some(RadiationLevel::Medium),
            "high" => Some(RadiationLevel::High),
            _ => None,
        }
    }

    fn factor(&self) -> f64 {
        match self {
            RadiationLevel::Low => 0.3,
            RadiationLevel::Medium => 0.6,
            RadiationLevel::High => 1.0,
        }
    }
}

/// Social and environmental isolation band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IsolationLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl FactorEncoding for IsolationLevel {
    const FIELD: &'static str = "isolation_level";

    fn parse_key(key: &str) -> Option<Self> {
        match key {
            "low" => Some(IsolationLevel::Low),
            "medium" => Some(IsolationLevel::Medium),
            "high" => Some(IsolationLevel::High),
            _ => None,
        }
    }

    fn factor(&self) -> f64 {
        match self {
            IsolationLevel::Low => 0.2,
            IsolationLevel::Medium => 0.6,
            IsolationLevel::High => 1.0,
        }
    }
}

/// Pre-flight history of menstrual cycle irregularity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CycleIrregularity {
    #[default]
    #[serde(rename = "none")]
    Regular,
    Mild,
    Moderate,
    Severe,
}

impl FactorEncoding for CycleIrregularity {
    const FIELD: &'static str = "cycle_irregularity_history";

    fn parse_key(key: &str) -> Option<Self> {
        match key {
            "none" => Some(CycleIrregularity::Regular),
            "mild" => Some(CycleIrregularity::Mild),
            "moderate" => Some(CycleIrregularity::Moderate),
            "severe" => Some(CycleIrregularity::Severe),
            _ => None,
        }
    }

    fn factor(&self) -> f64 {
        match self {
            CycleIrregularity::Regular => 0.0,
            CycleIrregularity::Mild => 0.33,
            CycleIrregularity::Moderate => 0.66,
            CycleIrregularity::Severe => 1.0,
        }
    }
}

/// Pre-flight bone density concerns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoneDensityConcern {
    #[default]
    #[serde(rename = "none")]
    NoConcern,
    #[serde(rename = "some")]
    Elevated,
    #[serde(rename = "high")]
    High,
}

impl FactorEncoding for BoneDensityConcern {
    const FIELD: &'static str = "bone_density_concerns";

    fn parse_key(key: &str) -> Option<Self> {
        match key {
            "none" => Some(BoneDensityConcern::NoConcern),
            "some" => Some(BoneDensityConcern::Elevated),
            "high" => Some(BoneDensityConcern::High),
            _ => None,
        }
    }

    fn factor(&self) -> f64 {
        match self {
            BoneDensityConcern::NoConcern => 0.0,
            BoneDensityConcern::Elevated => 0.5,
            BoneDensityConcern::High => 1.0,
        }
    }
}

/// Diagnosed sleep disorders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SleepDisorder {
    #[default]
    #[serde(rename = "none")]
    NoDisorder,
    Insomnia,
    Circadian,
    Other,
}

impl FactorEncoding for SleepDisorder {
    const FIELD: &'static str = "sleep_disorders";

    fn parse_key(key: &str) -> Option<Self> {
        match key {
            "none" => Some(SleepDisorder::NoDisorder),
            "insomnia" => Some(SleepDisorder::Insomnia),
            "circadian" => Some(SleepDisorder::Circadian),
            "other" => Some(SleepDisorder::Other),
            _ => None,
        }
    }

    fn factor(&self) -> f64 {
        match self {
            SleepDisorder::NoDisorder => 0.0,
            SleepDisorder::Insomnia => 0.8,
            SleepDisorder::Circadian => 0.7,
            SleepDisorder::Other => 0.5,
        }
    }
}
