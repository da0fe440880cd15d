//! DRC data types
//!
//! Outcomes for pre-commit edge checks and violation records for the
//! post-commit areas-vs-areas scan.

use serde::Serialize;

use crate::geometry::Point;
use crate::zones::Timestamp;

/// Result of a blocking pre-commit check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrcOutcome {
    Ok,
    Violation,
}

impl DrcOutcome {
    pub fn is_ok(self) -> bool {
        self == DrcOutcome::Ok
    }
}

/// One area-vs-area boundary violation found by the post-commit scan
#[derive(Debug, Clone, Serialize)]
pub struct OutlineViolation {
    pub zone_a: Timestamp,
    pub zone_b: Timestamp,
    pub layer: i32,
    /// Closest boundary-to-boundary distance found, board units
    pub distance: f64,
    /// Clearance the pair was held to
    pub clearance: i32,
    /// Closest approach point, for surfacing to the user
    pub location: Point,
}

/// Board-wide rule floor; per-zone clearances can only tighten it
#[derive(Debug, Clone, Copy)]
pub struct DesignRules {
    pub min_area_clearance: i32,
}

impl Default for DesignRules {
    fn default() -> Self {
        Self {
            min_area_clearance: 0,
        }
    }
}
