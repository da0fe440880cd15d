//! Distance calculations for clearance checking
//!
//! Segment and point distances in f64; callers convert from board units.

/// Segment-to-segment minimum distance
pub fn segment_distance(
    a1: [f64; 2],
    a2: [f64; 2],
    b1: [f64; 2],
    b2: [f64; 2],
) -> (f64, [f64; 2]) {
    let mut min_d = f64::MAX;
    let mut closest = [0.0f64; 2];

    // a1 to segment b
    let (d, p) = point_segment_distance(a1, b1, b2);
    if d < min_d {
        min_d = d;
        closest = midpoint(a1, p);
    }

    // a2 to segment b
    let (d, p) = point_segment_distance(a2, b1, b2);
    if d < min_d {
        min_d = d;
        closest = midpoint(a2, p);
    }

    // b1 to segment a
    let (d, p) = point_segment_distance(b1, a1, a2);
    if d < min_d {
        min_d = d;
        closest = midpoint(b1, p);
    }

    // b2 to segment a
    let (d, p) = point_segment_distance(b2, a1, a2);
    if d < min_d {
        min_d = d;
        closest = midpoint(b2, p);
    }

    (min_d, closest)
}

/// Point-to-segment minimum distance
pub fn point_segment_distance(p: [f64; 2], a: [f64; 2], b: [f64; 2]) -> (f64, [f64; 2]) {
    let ab = [b[0] - a[0], b[1] - a[1]];
    let ap = [p[0] - a[0], p[1] - a[1]];
    let ab_len2 = ab[0] * ab[0] + ab[1] * ab[1];

    if ab_len2 < 1e-10 {
        // Degenerate segment
        let d = ((p[0] - a[0]).powi(2) + (p[1] - a[1]).powi(2)).sqrt();
        return (d, a);
    }

    let t = ((ap[0] * ab[0] + ap[1] * ab[1]) / ab_len2).clamp(0.0, 1.0);
    let closest = [a[0] + t * ab[0], a[1] + t * ab[1]];
    let d = ((p[0] - closest[0]).powi(2) + (p[1] - closest[1]).powi(2)).sqrt();

    (d, closest)
}

/// Midpoint of two points
pub fn midpoint(a: [f64; 2], b: [f64; 2]) -> [f64; 2] {
    [(a[0] + b[0]) / 2.0, (a[1] + b[1]) / 2.0]
}
