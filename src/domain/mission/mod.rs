//! Mission Module - Raw payload intake and feature engineering.
//!
//! Converts mission conditions and health history into the normalized
//! numeric feature vector consumed by the simulator.
//!
//! # Components
//!
//! - `RawPayload` - Verbatim request payload with lenient field accessors
//! - `FactorEncoding` - Categorical lookups (gravity, radiation, isolation, history)
//! - `build_features` - Payload to bounded `FeatureVector`, never fails

mod encoding;
mod features;
mod payload;

pub use encoding::{
    BoneDensityConcern, CycleIrregularity, FactorEncoding, Gravity, IsolationLevel,
    RadiationLevel, SleepDisorder,
};
pub use features::{
    build_features, sleep_deficit_72h, FeatureVector, DEFAULT_STRESS_LEVEL, MAX_MISSION_DAY,
    OPTIMAL_SLEEP_HOURS_72H,
};
pub use payload::{as_bool, as_float, as_int, RawPayload, Section, HISTORY_GROUP, MISSION_GROUP};
