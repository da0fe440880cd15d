//! Merging of overlapping zone outlines
//!
//! After any structural change to a zone's polygon set, every other zone
//! on the same layer and net is tested for overlap and unioned in. One
//! pass can cascade: the merged outline may now reach zones the original
//! did not. The scan restarts after every union and settles when no
//! overlapping pair remains, which also makes the operation idempotent.

use tracing::{debug, info};

use crate::geometry::boolean::{main_outlines_overlap, polygon_to_polyset, union_polysets};

use super::board::Board;
use super::types::Timestamp;

/// Result of a merge pass. The acted-upon zone may have been absorbed;
/// callers must continue with `surviving` and never a held reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub surviving: Timestamp,
    pub absorbed: Vec<Timestamp>,
}

impl MergeOutcome {
    /// True when the acted-upon zone was merged away into another
    pub fn was_absorbed(&self, acted: Timestamp) -> bool {
        self.surviving != acted
    }
}

/// Resolve overlaps around a just-modified zone.
///
/// With `combine` false the scan is skipped entirely and the outcome just
/// echoes the zone. Running the pass again on a settled configuration is
/// a no-op.
pub fn area_polygon_modified(
    board: &mut Board,
    ts: Timestamp,
    combine: bool,
    verbose: bool,
) -> MergeOutcome {
    let mut outcome = MergeOutcome {
        surviving: ts,
        absorbed: Vec::new(),
    };
    if !combine {
        return outcome;
    }

    'rescan: loop {
        let Some(current_idx) = board.zone_index(outcome.surviving) else {
            // Zone vanished out from under us; nothing left to merge
            return outcome;
        };

        for other_idx in 0..board.zone_count() {
            if other_idx == current_idx {
                continue;
            }
            let current = board.zone_at(current_idx);
            let other = board.zone_at(other_idx);
            if current.layer != other.layer || current.net != other.net {
                continue;
            }
            if !main_outlines_overlap(&current.poly, &other.poly) {
                continue;
            }

            let merged = union_polysets(&current.poly, &other.poly);
            if merged.0.len() != 1 {
                // Overlap test said yes but the union split; leave the
                // pair alone rather than invent geometry
                debug!(
                    a = current.timestamp.0,
                    b = other.timestamp.0,
                    pieces = merged.0.len(),
                    "union did not produce a single outline, skipping"
                );
                continue;
            }

            // The earlier zone survives and takes the unioned outline;
            // the later one is deleted along with its fill geometry.
            let (survivor_idx, loser_idx) = if current_idx < other_idx {
                (current_idx, other_idx)
            } else {
                (other_idx, current_idx)
            };
            let loser_ts = board.zone_at(loser_idx).timestamp;
            let survivor_ts = board.zone_at(survivor_idx).timestamp;
            let hatch = board.zone_at(survivor_idx).poly.hatch();
            let merged_poly = polygon_to_polyset(&merged.0[0], hatch);

            let survivor = board.zone_at_mut(survivor_idx);
            survivor.poly = merged_poly;
            survivor.fill = None;
            survivor.corner_selection = None;
            board.remove_zone(loser_ts);

            if verbose {
                info!(
                    survivor = survivor_ts.0,
                    absorbed = loser_ts.0,
                    "merged overlapping zone outlines"
                );
            }
            outcome.absorbed.push(loser_ts);
            outcome.surviving = survivor_ts;
            continue 'rescan;
        }

        return outcome;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{HatchStyle, Outline, Point, PolygonSet};
    use crate::zones::ZoneParams;

    fn square_poly(x0: i32, y0: i32, size: i32) -> PolygonSet {
        PolygonSet::new(Outline::closed_from_points(
            vec![
                Point::new(x0, y0),
                Point::new(x0 + size, y0),
                Point::new(x0 + size, y0 + size),
                Point::new(x0, y0 + size),
            ],
            HatchStyle::NoHatch,
        ))
    }

    fn params(net: i32) -> ZoneParams {
        ZoneParams {
            net,
            ..ZoneParams::default()
        }
    }

    #[test]
    fn test_overlapping_same_net_zones_merge() {
        let mut board = Board::new();
        let a = board.add_zone(&params(1), square_poly(0, 0, 100));
        let b = board.add_zone(&params(1), square_poly(50, 0, 100));
        let outcome = area_polygon_modified(&mut board, b, true, false);
        assert_eq!(board.zone_count(), 1);
        assert_eq!(outcome.surviving, a);
        assert!(outcome.was_absorbed(b));
        let merged = board.zone(a).unwrap();
        assert!((merged.poly.main().area() - 15_000.0).abs() < 1.0);
    }

    #[test]
    fn test_different_net_left_alone() {
        let mut board = Board::new();
        let a = board.add_zone(&params(1), square_poly(0, 0, 100));
        let b = board.add_zone(&params(2), square_poly(50, 0, 100));
        let outcome = area_polygon_modified(&mut board, a, true, false);
        assert_eq!(board.zone_count(), 2);
        assert_eq!(outcome.surviving, a);
        assert!(board.zone(b).is_some());
    }

    #[test]
    fn test_cascade_absorbs_chain() {
        let mut board = Board::new();
        let a = board.add_zone(&params(1), square_poly(0, 0, 100));
        let b = board.add_zone(&params(1), square_poly(150, 0, 100));
        // Bridge overlapping both: merging it reaches a and then b
        let c = board.add_zone(&params(1), square_poly(80, 0, 100));
        let outcome = area_polygon_modified(&mut board, c, true, false);
        assert_eq!(board.zone_count(), 1);
        assert_eq!(outcome.surviving, a);
        assert_eq!(outcome.absorbed.len(), 2);
        assert!(board.zone(b).is_none());
        assert!(board.zone(c).is_none());
    }

    #[test]
    fn test_idempotent_on_settled_configuration() {
        let mut board = Board::new();
        let a = board.add_zone(&params(1), square_poly(0, 0, 100));
        let _b = board.add_zone(&params(1), square_poly(300, 0, 100));
        let first = area_polygon_modified(&mut board, a, true, false);
        let count = board.zone_count();
        let geometry: Vec<_> = board.zones().iter().map(|z| z.poly.clone()).collect();
        let second = area_polygon_modified(&mut board, first.surviving, true, false);
        assert_eq!(board.zone_count(), count);
        assert!(second.absorbed.is_empty());
        let after: Vec<_> = board.zones().iter().map(|z| z.poly.clone()).collect();
        assert_eq!(geometry, after);
    }

    #[test]
    fn test_combine_disabled_is_noop() {
        let mut board = Board::new();
        let a = board.add_zone(&params(1), square_poly(0, 0, 100));
        let _b = board.add_zone(&params(1), square_poly(50, 0, 100));
        let outcome = area_polygon_modified(&mut board, a, false, false);
        assert_eq!(board.zone_count(), 2);
        assert_eq!(outcome.surviving, a);
    }
}
