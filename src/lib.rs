//! Iunoia Core - Physiological risk projections for extended missions
//!
//! This crate turns mission context and health history into projected cortisol
//! load, menstrual cycle variability and bone loss, then scores those
//! projections into comparable risk buckets for display.

pub mod application;
pub mod config;
pub mod domain;

pub use application::{predict_features, predict_raw, PredictionEnvelope};
pub use domain::mission::{build_features, FeatureVector, RawPayload};
pub use domain::risk::{attach_risk_breakdown, Outputs};
pub use domain::simulation::{predict_from_features, Projection};
