//! The design-rule gate
//!
//! Two personalities, matching how the editing layer calls it:
//! pre-commit checks (`check_edge`, `check_closure`) block the action and
//! leave state untouched; the post-commit scan (`check_all_outlines`)
//! only counts and reports. Violations found after a commit are NOT
//! rolled back; the caller surfaces them and leaves the result as-is.

use rayon::prelude::*;
use tracing::debug;

use crate::geometry::{segments_cross, Point};
use crate::zones::{Board, Zone};

use super::distance::segment_distance;
use super::types::{DesignRules, DrcOutcome, OutlineViolation};

/// Spacing/overlap oracle consulted by the outline editor and the merger
pub trait DesignRuleGate {
    /// Validate one candidate edge of an in-progress outline against all
    /// committed areas of conflicting net on the same layer
    fn check_edge(
        &self,
        board: &Board,
        edge: (Point, Point),
        layer: i32,
        net: i32,
        clearance: i32,
    ) -> DrcOutcome;

    /// Validate a full candidate outline at closure time: degenerate and
    /// self-intersecting outlines are rejected, then the closing edge is
    /// checked like any other
    fn check_closure(
        &self,
        board: &Board,
        corners: &[Point],
        layer: i32,
        net: i32,
        clearance: i32,
    ) -> DrcOutcome;

    /// Exhaustive areas-vs-areas boundary check after a committed change.
    /// Returns every violating pair; callers report the count.
    fn check_all_outlines(&self, board: &Board) -> Vec<OutlineViolation>;
}

/// Gate implementation based on boundary distance and crossing tests
#[derive(Default)]
pub struct ClearanceGate {
    rules: DesignRules,
}

impl ClearanceGate {
    pub fn new(rules: DesignRules) -> Self {
        Self { rules }
    }

    fn conflicts(zone: &Zone, layer: i32, net: i32) -> bool {
        zone.layer == layer && zone.net != net
    }

    /// Minimum distance from a segment to every boundary edge of a zone,
    /// with crossings treated as distance zero
    fn edge_to_zone_distance(edge: (Point, Point), zone: &Zone) -> f64 {
        let (a1, a2) = (edge.0.to_f64(), edge.1.to_f64());
        let mut min = f64::MAX;
        for contour in zone.poly.contours() {
            for (b1, b2) in contour.edges() {
                if segments_cross(edge, (b1, b2)) {
                    return 0.0;
                }
                let (d, _) = segment_distance(a1, a2, b1.to_f64(), b2.to_f64());
                if d < min {
                    min = d;
                }
            }
        }
        min
    }

    fn pair_violation(&self, a: &Zone, b: &Zone) -> Option<OutlineViolation> {
        let clearance = a
            .clearance
            .max(b.clearance)
            .max(self.rules.min_area_clearance);

        // Cheap reject: bounding boxes further apart than the clearance
        if let (Some(ba), Some(bb)) = (a.poly.bounding_box(), b.poly.bounding_box()) {
            if !ba.inflated(clearance).intersects(&bb) {
                return None;
            }
        }

        let mut min_d = f64::MAX;
        let mut at = Point::new(0, 0);
        for ca in a.poly.contours() {
            for ea in ca.edges() {
                for cb in b.poly.contours() {
                    for eb in cb.edges() {
                        if segments_cross(ea, eb) {
                            return Some(OutlineViolation {
                                zone_a: a.timestamp,
                                zone_b: b.timestamp,
                                layer: a.layer,
                                distance: 0.0,
                                clearance,
                                location: ea.0,
                            });
                        }
                        let (d, p) = segment_distance(
                            ea.0.to_f64(),
                            ea.1.to_f64(),
                            eb.0.to_f64(),
                            eb.1.to_f64(),
                        );
                        if d < min_d {
                            min_d = d;
                            at = Point::from_f64(p);
                        }
                    }
                }
            }
        }

        // One boundary entirely inside the other counts as overlap even
        // when no edges cross and the boundaries keep their distance
        let contained = a
            .poly
            .main()
            .corners()
            .first()
            .map_or(false, |&p| b.poly.hit_test(p))
            || b.poly
                .main()
                .corners()
                .first()
                .map_or(false, |&p| a.poly.hit_test(p));

        if contained || min_d < clearance as f64 {
            Some(OutlineViolation {
                zone_a: a.timestamp,
                zone_b: b.timestamp,
                layer: a.layer,
                distance: if contained { 0.0 } else { min_d },
                clearance,
                location: at,
            })
        } else {
            None
        }
    }
}

impl DesignRuleGate for ClearanceGate {
    fn check_edge(
        &self,
        board: &Board,
        edge: (Point, Point),
        layer: i32,
        net: i32,
        clearance: i32,
    ) -> DrcOutcome {
        for zone in board.zones() {
            if !Self::conflicts(zone, layer, net) {
                continue;
            }
            // Start point inside a conflicting area
            if zone.poly.hit_test(edge.0) {
                debug!(zone = zone.timestamp.0, "edge start inside conflicting area");
                return DrcOutcome::Violation;
            }
            let limit = clearance.max(zone.clearance).max(self.rules.min_area_clearance);
            if Self::edge_to_zone_distance(edge, zone) < limit as f64 {
                debug!(zone = zone.timestamp.0, "edge too close to conflicting area");
                return DrcOutcome::Violation;
            }
        }
        DrcOutcome::Ok
    }

    fn check_closure(
        &self,
        board: &Board,
        corners: &[Point],
        layer: i32,
        net: i32,
        clearance: i32,
    ) -> DrcOutcome {
        use crate::geometry::{HatchStyle, Outline};

        if corners.len() < 3 {
            return DrcOutcome::Violation;
        }
        let candidate = Outline::closed_from_points(corners.to_vec(), HatchStyle::NoHatch);
        // Collinear/degenerate outlines enclose nothing
        if candidate.area() < 0.5 {
            return DrcOutcome::Violation;
        }
        if candidate.self_intersects() {
            return DrcOutcome::Violation;
        }
        let closing = (corners[corners.len() - 1], corners[0]);
        self.check_edge(board, closing, layer, net, clearance)
    }

    fn check_all_outlines(&self, board: &Board) -> Vec<OutlineViolation> {
        let zones = board.zones();
        let mut pairs = Vec::new();
        for i in 0..zones.len() {
            for j in (i + 1)..zones.len() {
                let (a, b) = (&zones[i], &zones[j]);
                if a.layer == b.layer && a.net != b.net {
                    pairs.push((a, b));
                }
            }
        }

        let violations: Vec<OutlineViolation> = pairs
            .par_iter()
            .filter_map(|(a, b)| self.pair_violation(a, b))
            .collect();

        debug!(
            pairs = pairs.len(),
            violations = violations.len(),
            "areas-vs-areas outline check"
        );
        violations
    }
}
