//! Design-rule checking for zone outlines
//!
//! # Submodules
//! - `types` - outcomes, violations, rule floor
//! - `distance` - segment/point distance kernel
//! - `gate` - the gate trait and its clearance-based implementation

pub mod distance;
mod gate;
mod types;

pub use gate::{ClearanceGate, DesignRuleGate};
pub use types::{DesignRules, DrcOutcome, OutlineViolation};
