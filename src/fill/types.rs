//! Fill geometry and fill errors
//!
//! Fill geometry is derived and disposable: it is regenerated whole on
//! every fill and discarded whenever the owning outline changes.

use serde::Serialize;
use thiserror::Error;

use crate::geometry::{Point, PolygonSet};
use crate::zones::Timestamp;

/// Filled-copper primitives for one zone
#[derive(Debug, Clone, Serialize)]
pub struct FillGeometry {
    /// Owning zone's creation stamp
    pub timestamp: Timestamp,
    pub kind: FillKind,
}

/// The two fill styles
#[derive(Debug, Clone, Serialize)]
pub enum FillKind {
    /// Solid copper: one or more filled polygon sets
    Polygons(Vec<PolygonSet>),
    /// Grid fill: short segments on a regular pitch. Faster to redraw,
    /// lower copper-coverage fidelity.
    Segments(Vec<(Point, Point)>),
}

impl FillGeometry {
    /// Total filled area for polygon fill, 0 for segment fill
    pub fn area(&self) -> f64 {
        match &self.kind {
            FillKind::Polygons(sets) => sets
                .iter()
                .map(|s| {
                    s.main().area() - s.holes().iter().map(|h| h.area()).sum::<f64>()
                })
                .sum(),
            FillKind::Segments(_) => 0.0,
        }
    }

    pub fn segment_count(&self) -> usize {
        match &self.kind {
            FillKind::Polygons(_) => 0,
            FillKind::Segments(segs) => segs.len(),
        }
    }

    pub fn piece_count(&self) -> usize {
        match &self.kind {
            FillKind::Polygons(sets) => sets.len(),
            FillKind::Segments(segs) => segs.len(),
        }
    }
}

/// Why a zone could not be filled
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FillError {
    /// No conductive item on the board: nothing to compute a boundary
    /// box from, nothing to seed from
    #[error("board is empty")]
    EmptyBoard,
    /// The zone's net code does not resolve in the net directory
    #[error("unable to resolve net {0}")]
    UnresolvedNet(i32),
    /// The zone is gone (deleted or merged away)
    #[error("zone {} no longer exists", .0 .0)]
    UnknownZone(Timestamp),
}
