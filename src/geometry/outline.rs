//! A single closed polygon contour
//!
//! An outline is an ordered, cyclic corner sequence. Closure is explicit:
//! corners are appended while the outline is open, and `close()` seals it.
//! The closing edge from the last corner back to the first is implicit in
//! iteration, never stored as a duplicate corner.

use serde::{Deserialize, Serialize};

use super::types::{segments_cross, BoundingBox, Point};

/// Outline hatch rendering style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HatchStyle {
    NoHatch,
    #[default]
    DiagonalEdge,
    DiagonalFull,
}

/// One contour of a zone: the main boundary or a hole
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outline {
    corners: Vec<Point>,
    closed: bool,
    hatch: HatchStyle,
}

impl Outline {
    pub fn new(hatch: HatchStyle) -> Self {
        Self {
            corners: Vec::new(),
            closed: false,
            hatch,
        }
    }

    /// Build a closed outline directly from a corner list.
    /// A trailing corner equal to the first is dropped.
    pub fn closed_from_points(mut corners: Vec<Point>, hatch: HatchStyle) -> Self {
        if corners.len() > 1 && corners.first() == corners.last() {
            corners.pop();
        }
        Self {
            corners,
            closed: true,
            hatch,
        }
    }

    pub fn corner_count(&self) -> usize {
        self.corners.len()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn hatch(&self) -> HatchStyle {
        self.hatch
    }

    pub fn set_hatch(&mut self, hatch: HatchStyle) {
        self.hatch = hatch;
    }

    pub fn corner(&self, index: usize) -> Point {
        self.corners[index]
    }

    pub fn corners(&self) -> &[Point] {
        &self.corners
    }

    pub fn append_corner(&mut self, p: Point) {
        self.corners.push(p);
    }

    pub fn insert_corner(&mut self, index: usize, p: Point) {
        self.corners.insert(index, p);
    }

    pub fn move_corner(&mut self, index: usize, p: Point) {
        self.corners[index] = p;
    }

    /// Remove one corner. Returns false when the removal would leave a
    /// closed contour with fewer than 3 corners; the contour is untouched
    /// and the caller must delete the whole contour instead.
    pub fn delete_corner(&mut self, index: usize) -> bool {
        if self.closed && self.corners.len() <= 3 {
            return false;
        }
        self.corners.remove(index);
        true
    }

    /// Seal the contour. A duplicate of the first corner at the end is
    /// dropped rather than stored.
    pub fn close(&mut self) {
        if self.corners.len() > 1 && self.corners.first() == self.corners.last() {
            self.corners.pop();
        }
        self.closed = true;
    }

    /// Edges as (start, end) pairs, including the closing edge when sealed
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.corners.len();
        let count = if self.closed { n } else { n.saturating_sub(1) };
        (0..count).map(move |i| (self.corners[i], self.corners[(i + 1) % n]))
    }

    /// Signed area (shoelace); positive for counter-clockwise winding
    pub fn signed_area(&self) -> f64 {
        let n = self.corners.len();
        if n < 3 {
            return 0.0;
        }
        let mut sum = 0.0;
        for i in 0..n {
            let a = self.corners[i];
            let b = self.corners[(i + 1) % n];
            sum += (a.x as f64) * (b.y as f64) - (b.x as f64) * (a.y as f64);
        }
        sum / 2.0
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(&self.corners)
    }

    /// Even-odd point-in-polygon test
    pub fn contains(&self, p: Point) -> bool {
        let n = self.corners.len();
        if n < 3 {
            return false;
        }
        let (px, py) = (p.x as f64, p.y as f64);
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let (xi, yi) = (self.corners[i].x as f64, self.corners[i].y as f64);
            let (xj, yj) = (self.corners[j].x as f64, self.corners[j].y as f64);
            if ((yi > py) != (yj > py)) && (px < (xj - xi) * (py - yi) / (yj - yi) + xi) {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    /// Translate every corner by an offset
    pub fn translate(&mut self, offset: Point) {
        for c in &mut self.corners {
            *c = *c + offset;
        }
    }

    /// Rotate around a centre; angle in tenths of a degree
    pub fn rotate(&mut self, centre: Point, angle_decidegrees: i32) {
        let angle = (angle_decidegrees as f64) * std::f64::consts::PI / 1800.0;
        let (sin, cos) = angle.sin_cos();
        for c in &mut self.corners {
            let dx = (c.x - centre.x) as f64;
            let dy = (c.y - centre.y) as f64;
            *c = Point::new(
                centre.x + (dx * cos - dy * sin).round() as i32,
                centre.y + (dx * sin + dy * cos).round() as i32,
            );
        }
    }

    /// Mirror across a horizontal axis at the given y
    pub fn mirror(&mut self, axis_y: i32) {
        for c in &mut self.corners {
            c.y = 2 * axis_y - c.y;
        }
    }

    /// True when any two non-adjacent edges cross
    pub fn self_intersects(&self) -> bool {
        let edges: Vec<(Point, Point)> = self.edges().collect();
        let n = edges.len();
        for i in 0..n {
            for j in (i + 1)..n {
                // Skip adjacent edges (they share an endpoint)
                if j == i + 1 || (i == 0 && j == n - 1) {
                    continue;
                }
                if segments_cross(edges[i], edges[j]) {
                    return true;
                }
            }
        }
        false
    }
}
