//! Application layer - Pipeline orchestration.
//!
//! Composes the domain stages into the two request-level entry points.
//! No state is held between calls.

pub mod pipeline;

pub use pipeline::{predict_features, predict_raw, PredictionEnvelope};
