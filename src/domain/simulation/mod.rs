//! Simulation Module - Physiological projections from engineered features.
//!
//! # Components
//!
//! - `Projection` - Cortisol load, cycle variability, bone loss for a mission day
//! - `DriverReason` / `Drivers` - Dominant factor per axis
//! - `predict_from_features` - Pure, total mapping from `FeatureVector`
//!
//! All functions are stateless; the same features always yield the same
//! projection.

mod projection;
mod simulator;

pub use projection::{DriverReason, Drivers, Projection};
pub use simulator::{
    attribute_drivers, bone_loss_pct_per_month, cortisol_load, cycle_variability_days,
    predict_from_features, time_gain, MAX_MISSION_TIME, RAMP_REFERENCE_DAYS,
};
