//! Geometry core: points, outlines, polygon sets, and the boolean-kernel
//! and spatial-index seams
//!
//! # Submodules
//! - `types` - points, bounding boxes, 45-degree snapping
//! - `outline` - one closed contour
//! - `polyset` - main outline + holes with flat corner indexing
//! - `boolean` - conversions to the boolean geometry kernel
//! - `spatial` - R-tree over conductive items

pub mod boolean;
pub mod outline;
pub mod polyset;
pub mod spatial;
pub mod types;

pub use outline::{HatchStyle, Outline};
pub use polyset::{CornerDelete, PolygonSet, MAIN_CONTOUR};
pub use spatial::{ConductorItem, ConductorKind};
pub use types::{segments_cross, snap_45, BoundingBox, Point};
