//! Spatial indexing for conductive items
//!
//! Pads and track segments are consumed as fill seeds and clearance
//! obstacles. An R-tree over their bounding boxes keeps the per-zone
//! queries cheap on dense boards.

use rstar::{RTreeObject, AABB};
use serde::{Deserialize, Serialize};

use super::types::{BoundingBox, Point};

/// Shape of a conductive item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConductorKind {
    /// Rectangular pad centred on `position`
    Pad { width: i32, height: i32 },
    /// Track segment from `position` to `end`
    Track { end: Point, width: i32 },
}

/// A pad or track segment on one layer, tied to one net
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConductorItem {
    pub id: u64,
    pub layer: i32,
    /// Net code; 0 means unconnected
    pub net: i32,
    pub position: Point,
    pub kind: ConductorKind,
}

impl ConductorItem {
    pub fn bounding_box(&self) -> BoundingBox {
        match self.kind {
            ConductorKind::Pad { width, height } => BoundingBox {
                min: Point::new(self.position.x - width / 2, self.position.y - height / 2),
                max: Point::new(self.position.x + width / 2, self.position.y + height / 2),
            },
            ConductorKind::Track { end, width } => {
                let mut bbox = BoundingBox::from_point(self.position);
                bbox.expand_to(end);
                bbox.inflated(width / 2)
            }
        }
    }

    /// A representative interior point, used for fill seeding
    pub fn seed_point(&self) -> Point {
        match self.kind {
            ConductorKind::Pad { .. } => self.position,
            ConductorKind::Track { end, .. } => Point::new(
                (self.position.x + end.x) / 2,
                (self.position.y + end.y) / 2,
            ),
        }
    }

    /// Corner list of the item's copper expanded by `margin` on all sides.
    /// Pads expand to a larger rectangle; tracks to an oriented rectangle
    /// around the segment.
    pub fn outline_with_margin(&self, margin: i32) -> Vec<Point> {
        match self.kind {
            ConductorKind::Pad { width, height } => {
                let hw = width / 2 + margin;
                let hh = height / 2 + margin;
                let c = self.position;
                vec![
                    Point::new(c.x - hw, c.y - hh),
                    Point::new(c.x + hw, c.y - hh),
                    Point::new(c.x + hw, c.y + hh),
                    Point::new(c.x - hw, c.y + hh),
                ]
            }
            ConductorKind::Track { end, width } => {
                let half = (width / 2 + margin) as f64;
                let [sx, sy] = self.position.to_f64();
                let [ex, ey] = end.to_f64();
                let (dx, dy) = (ex - sx, ey - sy);
                let len = (dx * dx + dy * dy).sqrt();
                if len < 1e-9 {
                    // Degenerate track: treat as a square pad
                    let m = width / 2 + margin;
                    let c = self.position;
                    return vec![
                        Point::new(c.x - m, c.y - m),
                        Point::new(c.x + m, c.y - m),
                        Point::new(c.x + m, c.y + m),
                        Point::new(c.x - m, c.y + m),
                    ];
                }
                // Unit direction and normal, extended past both endpoints
                let (ux, uy) = (dx / len * half, dy / len * half);
                let (nx, ny) = (-dy / len * half, dx / len * half);
                vec![
                    Point::from_f64([sx - ux + nx, sy - uy + ny]),
                    Point::from_f64([sx - ux - nx, sy - uy - ny]),
                    Point::from_f64([ex + ux - nx, ey + uy - ny]),
                    Point::from_f64([ex + ux + nx, ey + uy + ny]),
                ]
            }
        }
    }
}

impl RTreeObject for ConductorItem {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        let bbox = self.bounding_box();
        AABB::from_corners(bbox.min.to_f64(), bbox.max.to_f64())
    }
}

/// Envelope for a board-units bounding box expanded by a margin
pub fn search_envelope(bbox: &BoundingBox, margin: i32) -> AABB<[f64; 2]> {
    let grown = bbox.inflated(margin);
    AABB::from_corners(grown.min.to_f64(), grown.max.to_f64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstar::RTree;

    #[test]
    fn test_pad_outline_margin() {
        let pad = ConductorItem {
            id: 1,
            layer: 0,
            net: 3,
            position: Point::new(100, 100),
            kind: ConductorKind::Pad {
                width: 20,
                height: 10,
            },
        };
        let outline = pad.outline_with_margin(5);
        assert_eq!(outline[0], Point::new(85, 90));
        assert_eq!(outline[2], Point::new(115, 110));
    }

    #[test]
    fn test_track_envelope_query() {
        let track = ConductorItem {
            id: 2,
            layer: 0,
            net: 1,
            position: Point::new(0, 0),
            kind: ConductorKind::Track {
                end: Point::new(100, 0),
                width: 10,
            },
        };
        let tree = RTree::bulk_load(vec![track]);
        let bbox = BoundingBox {
            min: Point::new(40, -2),
            max: Point::new(60, 2),
        };
        let hits: Vec<_> = tree
            .locate_in_envelope_intersecting(&search_envelope(&bbox, 0))
            .collect();
        assert_eq!(hits.len(), 1);
    }
}
