//! Zone polygon set: one main outline plus hole contours
//!
//! Contour 0 is the main boundary; every contour with a higher index is a
//! hole (cutout). Interactive editing addresses corners through a flat
//! index running across all contours in order, so the selection code never
//! needs to know which contour a corner belongs to.

use serde::{Deserialize, Serialize};

use super::outline::{HatchStyle, Outline};
use super::types::{BoundingBox, Point};

/// Index of the main boundary contour
pub const MAIN_CONTOUR: usize = 0;

/// Result of a flat-index corner deletion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerDelete {
    /// Corner removed, contour still valid
    Deleted,
    /// The corner's hole contour dropped below 3 corners and was removed
    HoleRemoved(usize),
    /// The main contour dropped below 3 corners: the whole zone must go
    ZoneGone,
}

/// A main outline and its holes, owned by exactly one zone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolygonSet {
    contours: Vec<Outline>,
}

impl PolygonSet {
    pub fn new(main: Outline) -> Self {
        Self {
            contours: vec![main],
        }
    }

    pub fn contour_count(&self) -> usize {
        self.contours.len()
    }

    pub fn hole_count(&self) -> usize {
        self.contours.len().saturating_sub(1)
    }

    pub fn main(&self) -> &Outline {
        &self.contours[MAIN_CONTOUR]
    }

    pub fn main_mut(&mut self) -> &mut Outline {
        &mut self.contours[MAIN_CONTOUR]
    }

    pub fn contour(&self, index: usize) -> &Outline {
        &self.contours[index]
    }

    pub fn contours(&self) -> &[Outline] {
        &self.contours
    }

    pub fn holes(&self) -> &[Outline] {
        &self.contours[1..]
    }

    pub fn hatch(&self) -> HatchStyle {
        self.main().hatch()
    }

    pub fn set_hatch(&mut self, hatch: HatchStyle) {
        for c in &mut self.contours {
            c.set_hatch(hatch);
        }
    }

    /// Append a new hole contour. Returns its contour index.
    pub fn add_hole(&mut self, hole: Outline) -> usize {
        self.contours.push(hole);
        self.contours.len() - 1
    }

    /// Remove a hole contour. Returns false for the main contour (the
    /// caller must delete the whole zone instead) or an index out of
    /// range; the set is untouched in both cases.
    pub fn remove_contour(&mut self, index: usize) -> bool {
        if index == MAIN_CONTOUR || index >= self.contours.len() {
            return false;
        }
        self.contours.remove(index);
        true
    }

    /// Total corner count across all contours
    pub fn corner_count(&self) -> usize {
        self.contours.iter().map(|c| c.corner_count()).sum()
    }

    /// Map a flat corner index to (contour index, local corner index)
    pub fn locate_corner(&self, flat: usize) -> Option<(usize, usize)> {
        let mut rest = flat;
        for (ci, c) in self.contours.iter().enumerate() {
            if rest < c.corner_count() {
                return Some((ci, rest));
            }
            rest -= c.corner_count();
        }
        None
    }

    /// Contour index owning a flat corner index
    pub fn contour_of(&self, flat: usize) -> Option<usize> {
        self.locate_corner(flat).map(|(ci, _)| ci)
    }

    pub fn corner(&self, flat: usize) -> Option<Point> {
        self.locate_corner(flat)
            .map(|(ci, li)| self.contours[ci].corner(li))
    }

    pub fn move_corner(&mut self, flat: usize, p: Point) {
        if let Some((ci, li)) = self.locate_corner(flat) {
            self.contours[ci].move_corner(li, p);
        }
    }

    /// Insert a new corner after the given flat index, on the same contour
    pub fn insert_corner_after(&mut self, flat: usize, p: Point) {
        if let Some((ci, li)) = self.locate_corner(flat) {
            self.contours[ci].insert_corner(li + 1, p);
        }
    }

    /// Delete a corner by flat index, enforcing the 3-corner floor
    pub fn delete_corner(&mut self, flat: usize) -> CornerDelete {
        let Some((ci, li)) = self.locate_corner(flat) else {
            return CornerDelete::Deleted;
        };
        if self.contours[ci].delete_corner(li) {
            return CornerDelete::Deleted;
        }
        if ci == MAIN_CONTOUR {
            CornerDelete::ZoneGone
        } else {
            self.contours.remove(ci);
            CornerDelete::HoleRemoved(ci)
        }
    }

    /// Inside the main outline and outside every hole
    pub fn hit_test(&self, p: Point) -> bool {
        if !self.main().contains(p) {
            return false;
        }
        !self.holes().iter().any(|h| h.contains(p))
    }

    /// Nearest corner within the grab radius, as a flat index
    pub fn hit_test_for_corner(&self, p: Point, radius: i32) -> Option<usize> {
        let r2 = (radius as f64) * (radius as f64);
        let mut best: Option<(usize, f64)> = None;
        let mut flat = 0;
        for c in &self.contours {
            for li in 0..c.corner_count() {
                let d2 = p.distance_sq(c.corner(li));
                if d2 <= r2 && best.map_or(true, |(_, bd)| d2 < bd) {
                    best = Some((flat, d2));
                }
                flat += 1;
            }
        }
        best.map(|(i, _)| i)
    }

    /// Nearest edge within the grab radius; returns the flat index of the
    /// edge's starting corner
    pub fn hit_test_for_edge(&self, p: Point, radius: i32) -> Option<usize> {
        let pf = p.to_f64();
        let mut best: Option<(usize, f64)> = None;
        let mut base = 0;
        for c in &self.contours {
            let n = c.corner_count();
            for li in 0..n {
                let a = c.corner(li);
                let b = c.corner((li + 1) % n);
                let (d, _) = crate::drc::distance::point_segment_distance(
                    pf,
                    a.to_f64(),
                    b.to_f64(),
                );
                if d <= radius as f64 && best.map_or(true, |(_, bd)| d < bd) {
                    best = Some((base + li, d));
                }
            }
            base += n;
        }
        best.map(|(i, _)| i)
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.main().bounding_box()
    }

    pub fn translate(&mut self, offset: Point) {
        for c in &mut self.contours {
            c.translate(offset);
        }
    }

    pub fn rotate(&mut self, centre: Point, angle_decidegrees: i32) {
        for c in &mut self.contours {
            c.rotate(centre, angle_decidegrees);
        }
    }

    pub fn mirror(&mut self, axis_y: i32) {
        for c in &mut self.contours {
            c.mirror(axis_y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x0: i32, y0: i32, size: i32) -> Outline {
        Outline::closed_from_points(
            vec![
                Point::new(x0, y0),
                Point::new(x0 + size, y0),
                Point::new(x0 + size, y0 + size),
                Point::new(x0, y0 + size),
            ],
            HatchStyle::NoHatch,
        )
    }

    fn set_with_hole() -> PolygonSet {
        let mut set = PolygonSet::new(square(0, 0, 100));
        set.add_hole(square(20, 20, 10));
        set
    }

    #[test]
    fn test_flat_indexing() {
        let set = set_with_hole();
        assert_eq!(set.corner_count(), 8);
        assert_eq!(set.locate_corner(3), Some((0, 3)));
        assert_eq!(set.locate_corner(4), Some((1, 0)));
        assert_eq!(set.contour_of(7), Some(1));
        assert_eq!(set.locate_corner(8), None);
        assert_eq!(set.corner(5), Some(Point::new(30, 20)));
    }

    #[test]
    fn test_hit_test_respects_holes() {
        let set = set_with_hole();
        assert!(set.hit_test(Point::new(50, 50)));
        assert!(!set.hit_test(Point::new(25, 25)));
        assert!(!set.hit_test(Point::new(150, 50)));
    }

    #[test]
    fn test_delete_corner_removes_underflowing_hole() {
        let mut set = set_with_hole();
        assert_eq!(set.delete_corner(4), CornerDelete::Deleted);
        assert_eq!(set.delete_corner(4), CornerDelete::HoleRemoved(1));
        assert_eq!(set.contour_count(), 1);
    }

    #[test]
    fn test_delete_corner_main_underflow_kills_zone() {
        let mut set = PolygonSet::new(square(0, 0, 10));
        assert_eq!(set.delete_corner(0), CornerDelete::Deleted);
        assert_eq!(set.delete_corner(0), CornerDelete::ZoneGone);
        // The set is untouched on ZoneGone; the caller deletes the zone.
        assert_eq!(set.main().corner_count(), 3);
    }

    #[test]
    fn test_remove_contour_refuses_main() {
        let mut set = set_with_hole();
        assert!(!set.remove_contour(MAIN_CONTOUR));
        assert!(!set.remove_contour(5));
        assert_eq!(set.contour_count(), 2);
        assert!(set.remove_contour(1));
        assert_eq!(set.contour_count(), 1);
    }

    #[test]
    fn test_corner_hit() {
        let set = set_with_hole();
        assert_eq!(set.hit_test_for_corner(Point::new(101, 99), 5), Some(2));
        assert_eq!(set.hit_test_for_corner(Point::new(60, 60), 5), None);
    }
}
