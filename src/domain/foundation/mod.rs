//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, enums, numeric helpers and error types
//! that form the vocabulary of the projection pipeline.

mod axis;
mod errors;
pub mod numeric;
mod unit_score;

pub use axis::Axis;
pub use errors::ValidationError;
pub use unit_score::UnitScore;
