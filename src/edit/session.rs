//! In-progress outline drawing state
//!
//! One session per drawn outline, owned by the editor. The scratch corner
//! buffer lives here; nothing about a drawing in progress is global.

use crate::geometry::Point;
use crate::zones::{Timestamp, ZoneParams};

/// What the outline being drawn will become on commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    /// A brand-new zone
    NewZone,
    /// A hole in an existing zone
    Cutout { target: Timestamp },
    /// A new zone inheriting another zone's parameters
    Similar { source: Timestamp },
}

/// Scratch state for one outline being drawn
#[derive(Debug, Clone)]
pub struct EditSession {
    kind: SessionKind,
    params: ZoneParams,
    points: Vec<Point>,
}

impl EditSession {
    pub fn new(kind: SessionKind, params: ZoneParams) -> Self {
        Self {
            kind,
            params,
            points: Vec::new(),
        }
    }

    pub fn kind(&self) -> SessionKind {
        self.kind
    }

    pub fn params(&self) -> &ZoneParams {
        &self.params
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn last_point(&self) -> Option<Point> {
        self.points.last().copied()
    }

    pub fn push_point(&mut self, p: Point) {
        self.points.push(p);
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}
