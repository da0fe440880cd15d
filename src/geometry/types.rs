//! Core geometry types for zone outlines
//!
//! Board coordinates are integers in board internal units. Floating point
//! only appears at the boolean-kernel and distance-check seams.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A 2D point in board internal units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Coordinates as f64, for the geometry-kernel seam
    pub fn to_f64(self) -> [f64; 2] {
        [self.x as f64, self.y as f64]
    }

    pub fn from_f64(p: [f64; 2]) -> Self {
        Self {
            x: p[0].round() as i32,
            y: p[1].round() as i32,
        }
    }

    /// Squared distance to another point, in f64 to avoid overflow
    pub fn distance_sq(self, other: Point) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        dx * dx + dy * dy
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Axis-aligned bounding box in board units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    pub fn from_point(p: Point) -> Self {
        Self { min: p, max: p }
    }

    pub fn from_points(points: &[Point]) -> Option<Self> {
        let mut iter = points.iter();
        let first = *iter.next()?;
        let mut bbox = Self::from_point(first);
        for &p in iter {
            bbox.expand_to(p);
        }
        Some(bbox)
    }

    pub fn expand_to(&mut self, p: Point) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    pub fn merge(&mut self, other: &BoundingBox) {
        self.expand_to(other.min);
        self.expand_to(other.max);
    }

    /// Grow by a margin on every side
    pub fn inflated(&self, margin: i32) -> Self {
        Self {
            min: Point::new(
                self.min.x.saturating_sub(margin),
                self.min.y.saturating_sub(margin),
            ),
            max: Point::new(
                self.max.x.saturating_add(margin),
                self.max.y.saturating_add(margin),
            ),
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }
}

/// Proper segment crossing test via orientation signs. Collinear overlap
/// and shared endpoints do not count as crossing.
pub fn segments_cross(a: (Point, Point), b: (Point, Point)) -> bool {
    fn orient(p: Point, q: Point, r: Point) -> i64 {
        let v = (q.x as i64 - p.x as i64) * (r.y as i64 - p.y as i64)
            - (q.y as i64 - p.y as i64) * (r.x as i64 - p.x as i64);
        v.signum()
    }
    let (p1, p2) = a;
    let (q1, q2) = b;
    let o1 = orient(p1, p2, q1);
    let o2 = orient(p1, p2, q2);
    let o3 = orient(q1, q2, p1);
    let o4 = orient(q1, q2, p2);
    o1 != o2 && o3 != o4 && o1 != 0 && o2 != 0 && o3 != 0 && o4 != 0
}

/// Snap an edge endpoint to the nearest 0/45/90 degree direction from its
/// start, for diagonal-constrained outline drawing
pub fn snap_45(start: Point, end: Point) -> Point {
    let dx = (end.x - start.x) as i64;
    let dy = (end.y - start.y) as i64;
    let adx = dx.abs();
    let ady = dy.abs();

    if adx == 0 && ady == 0 {
        return end;
    }

    // Pick the closest of horizontal, vertical, diagonal
    if adx > 2 * ady {
        Point::new(end.x, start.y)
    } else if ady > 2 * adx {
        Point::new(start.x, end.y)
    } else {
        let d = adx.max(ady) as i32;
        Point::new(
            start.x + d * dx.signum() as i32,
            start.y + d * dy.signum() as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox_from_points() {
        let bbox = BoundingBox::from_points(&[
            Point::new(3, 7),
            Point::new(-2, 4),
            Point::new(5, -1),
        ])
        .unwrap();
        assert_eq!(bbox.min, Point::new(-2, -1));
        assert_eq!(bbox.max, Point::new(5, 7));
    }

    #[test]
    fn test_bbox_empty() {
        assert!(BoundingBox::from_points(&[]).is_none());
    }

    #[test]
    fn test_snap_45_horizontal() {
        let p = snap_45(Point::new(0, 0), Point::new(100, 3));
        assert_eq!(p, Point::new(100, 0));
    }

    #[test]
    fn test_snap_45_diagonal() {
        let p = snap_45(Point::new(0, 0), Point::new(90, -100));
        assert_eq!(p, Point::new(100, -100));
    }
}
