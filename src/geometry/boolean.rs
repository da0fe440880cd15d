//! Conversions between zone polygon sets and the boolean geometry kernel
//!
//! Board units are integers; the kernel works in f64. Rings are closed
//! explicitly on the way in and the duplicate closing corner is stripped
//! on the way out.

use geo::{Area, BooleanOps, Contains, Coord, LineString, MultiPolygon, Polygon};

use super::outline::{HatchStyle, Outline};
use super::polyset::PolygonSet;
use super::types::Point;

/// Overlap areas below this are treated as touching, not overlapping
const OVERLAP_AREA_EPS: f64 = 0.5;

fn ring(points: &[Point]) -> LineString<f64> {
    let mut coords: Vec<Coord<f64>> = points
        .iter()
        .map(|p| Coord {
            x: p.x as f64,
            y: p.y as f64,
        })
        .collect();
    if let (Some(first), Some(last)) = (coords.first().copied(), coords.last().copied()) {
        if first != last {
            coords.push(first);
        }
    }
    LineString::new(coords)
}

fn ring_to_points(ls: &LineString<f64>) -> Vec<Point> {
    ls.coords().map(|c| Point::from_f64([c.x, c.y])).collect()
}

/// Kernel polygon from an arbitrary closed corner list
pub fn polygon_from_points(points: &[Point]) -> Polygon<f64> {
    Polygon::new(ring(points), vec![])
}

/// Kernel polygon (exterior + holes) from a zone polygon set
pub fn polyset_to_polygon(set: &PolygonSet) -> Polygon<f64> {
    let holes = set.holes().iter().map(|h| ring(h.corners())).collect();
    Polygon::new(ring(set.main().corners()), holes)
}

/// Zone polygon set from a kernel polygon
pub fn polygon_to_polyset(poly: &Polygon<f64>, hatch: HatchStyle) -> PolygonSet {
    let main = Outline::closed_from_points(ring_to_points(poly.exterior()), hatch);
    let mut set = PolygonSet::new(main);
    for interior in poly.interiors() {
        let pts = ring_to_points(interior);
        if pts.len() >= 3 {
            set.add_hole(Outline::closed_from_points(pts, hatch));
        }
    }
    set
}

/// True when the main outlines overlap by area or one contains the other.
/// Boundary-touching outlines do not count as overlapping.
pub fn main_outlines_overlap(a: &PolygonSet, b: &PolygonSet) -> bool {
    // Cheap reject on bounding boxes
    match (a.bounding_box(), b.bounding_box()) {
        (Some(ba), Some(bb)) if !ba.intersects(&bb) => return false,
        (None, _) | (_, None) => return false,
        _ => {}
    }

    let pa = polygon_from_points(a.main().corners());
    let pb = polygon_from_points(b.main().corners());
    if pa.intersection(&pb).unsigned_area() > OVERLAP_AREA_EPS {
        return true;
    }
    // Containment without edge crossings
    let inside_b = a.main().corners().first().map_or(false, |p| {
        pb.contains(&geo::Point::new(p.x as f64, p.y as f64))
    });
    let inside_a = b.main().corners().first().map_or(false, |p| {
        pa.contains(&geo::Point::new(p.x as f64, p.y as f64))
    });
    inside_a || inside_b
}

/// Union of two zone polygon sets. Holes survive where they remain
/// enclosed by the unioned boundary; the kernel handles that.
pub fn union_polysets(a: &PolygonSet, b: &PolygonSet) -> MultiPolygon<f64> {
    polyset_to_polygon(a).union(&polyset_to_polygon(b))
}
