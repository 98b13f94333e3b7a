//! Domain layer containing the projection model and its value types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (axes, unit scores, numeric helpers, errors)
//! - `mission` - Raw payload intake and feature engineering
//! - `simulation` - Physiological projections and driver attribution
//! - `risk` - Risk normalization, buckets and composite score
//!
//! Data flows one way: payload, features, projection, risk-annotated outputs.

pub mod foundation;
pub mod mission;
pub mod risk;
pub mod simulation;
