//! Corner and outline dragging
//!
//! A drag takes a snapshot of the zone's polygon set when it starts.
//! Updates mutate the live outline so the drag renders incrementally;
//! abort restores the snapshot byte for byte, which also removes a corner
//! that was created by grabbing an edge. Release is a commit: fill is
//! invalidated, overlaps merge, and the outline scan reports.

use crate::drc::DesignRuleGate;
use crate::geometry::{Point, PolygonSet};
use crate::zones::{Board, Timestamp};

use super::ops::settle;
use super::types::{CommitOutcome, EditError};

#[derive(Debug, Clone, Copy)]
enum DragKind {
    /// Dragging one corner by flat index
    Corner { flat: usize },
    /// Dragging the whole outline, anchored at the grab point
    Outline { anchor: Point },
}

/// One drag in progress on one zone
#[derive(Debug)]
pub struct DragSession {
    zone: Timestamp,
    kind: DragKind,
    snapshot: PolygonSet,
}

impl DragSession {
    /// Grab an existing corner
    pub fn grab_corner(board: &mut Board, ts: Timestamp, flat: usize) -> Result<Self, EditError> {
        let zone = board.zone_mut(ts).ok_or(EditError::UnknownZone(ts))?;
        if zone.poly.corner(flat).is_none() {
            return Err(EditError::BadCorner);
        }
        let snapshot = zone.poly.clone();
        zone.corner_selection = Some(flat);
        Ok(Self {
            zone: ts,
            kind: DragKind::Corner { flat },
            snapshot,
        })
    }

    /// Split an edge by inserting a new corner after its starting flat
    /// index and grab the new corner. Aborting removes it again.
    pub fn grab_new_corner(
        board: &mut Board,
        ts: Timestamp,
        edge_flat: usize,
        p: Point,
    ) -> Result<Self, EditError> {
        let zone = board.zone_mut(ts).ok_or(EditError::UnknownZone(ts))?;
        if zone.poly.corner(edge_flat).is_none() {
            return Err(EditError::BadCorner);
        }
        // Snapshot before the insert so abort rolls the corner back out
        let snapshot = zone.poly.clone();
        zone.poly.insert_corner_after(edge_flat, p);
        let flat = edge_flat + 1;
        zone.corner_selection = Some(flat);
        zone.fill = None;
        Ok(Self {
            zone: ts,
            kind: DragKind::Corner { flat },
            snapshot,
        })
    }

    /// Grab the whole outline at an anchor point
    pub fn grab_outline(board: &mut Board, ts: Timestamp, anchor: Point) -> Result<Self, EditError> {
        let zone = board.zone_mut(ts).ok_or(EditError::UnknownZone(ts))?;
        let snapshot = zone.poly.clone();
        Ok(Self {
            zone: ts,
            kind: DragKind::Outline { anchor },
            snapshot,
        })
    }

    pub fn zone(&self) -> Timestamp {
        self.zone
    }

    /// Track the cursor. The live outline follows; nothing is committed.
    pub fn update(&self, board: &mut Board, p: Point) -> Result<(), EditError> {
        let zone = board
            .zone_mut(self.zone)
            .ok_or(EditError::UnknownZone(self.zone))?;
        match self.kind {
            DragKind::Corner { flat } => zone.poly.move_corner(flat, p),
            DragKind::Outline { anchor } => {
                let mut poly = self.snapshot.clone();
                poly.translate(p - anchor);
                zone.poly = poly;
            }
        }
        Ok(())
    }

    /// Commit the drag at its current position
    pub fn release<G: DesignRuleGate>(
        self,
        gate: &G,
        board: &mut Board,
        verbose: bool,
    ) -> Result<CommitOutcome, EditError> {
        let zone = board
            .zone_mut(self.zone)
            .ok_or(EditError::UnknownZone(self.zone))?;
        zone.fill = None;
        zone.corner_selection = None;
        Ok(settle(gate, board, self.zone, verbose))
    }

    /// Abandon the drag and restore the snapshot
    pub fn abort(self, board: &mut Board) {
        if let Some(zone) = board.zone_mut(self.zone) {
            zone.poly = self.snapshot;
            zone.corner_selection = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drc::ClearanceGate;
    use crate::geometry::{HatchStyle, Outline};
    use crate::zones::ZoneParams;

    fn board_with_zone(net: i32, x0: i32) -> (Board, Timestamp) {
        let mut board = Board::new();
        let poly = PolygonSet::new(Outline::closed_from_points(
            vec![
                Point::new(x0, 0),
                Point::new(x0 + 100, 0),
                Point::new(x0 + 100, 100),
                Point::new(x0, 100),
            ],
            HatchStyle::NoHatch,
        ));
        let ts = board.add_zone(
            &ZoneParams {
                net,
                ..ZoneParams::default()
            },
            poly,
        );
        (board, ts)
    }

    #[test]
    fn test_corner_drag_moves_and_commits() {
        let (mut board, ts) = board_with_zone(1, 0);
        let gate = ClearanceGate::default();
        let drag = DragSession::grab_corner(&mut board, ts, 2).unwrap();
        assert_eq!(board.zone(ts).unwrap().corner_selection, Some(2));
        drag.update(&mut board, Point::new(150, 150)).unwrap();
        let outcome = drag.release(&gate, &mut board, false).unwrap();
        assert_eq!(outcome.zone, Some(ts));
        let zone = board.zone(ts).unwrap();
        assert_eq!(zone.poly.main().corner(2), Point::new(150, 150));
        assert_eq!(zone.corner_selection, None);
    }

    #[test]
    fn test_outline_drag_translates() {
        let (mut board, ts) = board_with_zone(1, 0);
        let gate = ClearanceGate::default();
        let drag = DragSession::grab_outline(&mut board, ts, Point::new(50, 50)).unwrap();
        drag.update(&mut board, Point::new(60, 45)).unwrap();
        drag.release(&gate, &mut board, false).unwrap();
        assert_eq!(
            board.zone(ts).unwrap().poly.main().corner(0),
            Point::new(10, -5)
        );
    }

    #[test]
    fn test_abort_restores_snapshot() {
        let (mut board, ts) = board_with_zone(1, 0);
        let before = board.zone(ts).unwrap().poly.clone();
        let drag = DragSession::grab_corner(&mut board, ts, 0).unwrap();
        drag.update(&mut board, Point::new(-500, -500)).unwrap();
        drag.abort(&mut board);
        assert_eq!(board.zone(ts).unwrap().poly, before);
    }

    #[test]
    fn test_abort_removes_grabbed_new_corner() {
        let (mut board, ts) = board_with_zone(1, 0);
        let drag =
            DragSession::grab_new_corner(&mut board, ts, 0, Point::new(50, 0)).unwrap();
        assert_eq!(board.zone(ts).unwrap().poly.main().corner_count(), 5);
        drag.abort(&mut board);
        assert_eq!(board.zone(ts).unwrap().poly.main().corner_count(), 4);
    }

    #[test]
    fn test_release_after_overlap_merges() {
        let (mut board, a) = board_with_zone(1, 0);
        let poly = PolygonSet::new(Outline::closed_from_points(
            vec![
                Point::new(200, 0),
                Point::new(300, 0),
                Point::new(300, 100),
                Point::new(200, 100),
            ],
            HatchStyle::NoHatch,
        ));
        let b = board.add_zone(
            &ZoneParams {
                net: 1,
                ..ZoneParams::default()
            },
            poly,
        );
        let gate = ClearanceGate::default();
        // Drag zone b onto zone a
        let drag = DragSession::grab_outline(&mut board, b, Point::new(250, 50)).unwrap();
        drag.update(&mut board, Point::new(100, 50)).unwrap();
        let outcome = drag.release(&gate, &mut board, false).unwrap();
        assert_eq!(board.zone_count(), 1);
        assert_eq!(outcome.zone, Some(a));
    }
}
