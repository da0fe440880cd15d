//! Copper zone outlines and fills for PCB editing
//!
//! A zone is a closed polygon outline (plus optional hole contours) tied
//! to one net and one copper layer. This crate owns the zone lifecycle:
//! interactive outline drawing with design-rule gating, corner and
//! outline dragging, merging of overlapping same-net outlines, copper
//! fill generation around pads and tracks, and the areas-vs-areas
//! clearance scan.
//!
//! # Submodules
//! - `geometry` - points, outlines, polygon sets, boolean kernel seam,
//!   conductive-item spatial index
//! - `zones` - the board seam, zone types, outline merging
//! - `edit` - interactive drawing, one-shot edits, dragging
//! - `fill` - copper fill generation
//! - `drc` - design-rule gate and the outline clearance scan
//! - `params` - persisted zone-dialog defaults

pub mod drc;
pub mod edit;
pub mod fill;
pub mod geometry;
pub mod params;
pub mod zones;

pub use drc::{ClearanceGate, DesignRuleGate, DesignRules, DrcOutcome, OutlineViolation};
pub use edit::{CommitOutcome, DragSession, EditError, OutlineEditor};
pub use fill::{fill_all_zones, fill_zone, FillError, FillGeometry, FillKind};
pub use geometry::{HatchStyle, Outline, Point, PolygonSet};
pub use params::ZoneDefaults;
pub use zones::{
    area_polygon_modified, Board, MergeOutcome, PadConnection, Timestamp, Zone, ZoneParams,
};
