//! Physiological axes tracked by the simulator and the risk scorer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three projected physiological axes.
///
/// The lowercase keys are the contract with the explanation layer, which
/// looks up its text templates by these names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Cortisol,
    Cycle,
    Bone,
}

impl Axis {
    /// All axes in reporting order.
    pub const ALL: [Axis; 3] = [Axis::Cortisol, Axis::Cycle, Axis::Bone];

    /// Returns the lookup key for this axis.
    pub fn key(&self) -> &'static str {
        match self {
            Axis::Cortisol => "cortisol",
            Axis::Cycle => "cycle",
            Axis::Bone => "bone",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
