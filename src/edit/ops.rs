//! One-shot edits on committed zones
//!
//! Corner and contour deletion, parameter edits, and whole-zone
//! transforms. Each operation invalidates the zone's fill, runs the merge
//! pass, and ends with the report-only outline scan, exactly like an
//! outline commit.

use tracing::warn;

use crate::drc::DesignRuleGate;
use crate::geometry::{CornerDelete, Point, MAIN_CONTOUR};
use crate::zones::{area_polygon_modified, Board, Timestamp, ZoneParams};

use super::types::{CommitOutcome, EditError};

/// Merge around a just-modified zone, then count clearance violations.
/// Violations are reported, never rolled back.
pub(crate) fn settle<G: DesignRuleGate>(
    gate: &G,
    board: &mut Board,
    ts: Timestamp,
    verbose: bool,
) -> CommitOutcome {
    let merge = area_polygon_modified(board, ts, true, verbose);
    let drc_errors = gate.check_all_outlines(board).len();
    if verbose && drc_errors > 0 {
        warn!(count = drc_errors, "clearance violations after edit");
    }
    CommitOutcome {
        zone: Some(merge.surviving),
        drc_errors,
    }
}

fn settle_deleted<G: DesignRuleGate>(gate: &G, board: &Board, verbose: bool) -> CommitOutcome {
    let drc_errors = gate.check_all_outlines(board).len();
    if verbose && drc_errors > 0 {
        warn!(count = drc_errors, "clearance violations after edit");
    }
    CommitOutcome {
        zone: None,
        drc_errors,
    }
}

/// Delete one corner by flat index.
///
/// A hole that underflows its 3-corner floor disappears with the corner;
/// a main contour that would underflow deletes the whole zone instead.
pub fn remove_corner<G: DesignRuleGate>(
    gate: &G,
    board: &mut Board,
    ts: Timestamp,
    flat: usize,
    verbose: bool,
) -> Result<CommitOutcome, EditError> {
    let zone = board.zone_mut(ts).ok_or(EditError::UnknownZone(ts))?;
    if zone.poly.corner(flat).is_none() {
        return Err(EditError::BadCorner);
    }
    match zone.poly.delete_corner(flat) {
        CornerDelete::ZoneGone => {
            board.remove_zone(ts);
            Ok(settle_deleted(gate, board, verbose))
        }
        CornerDelete::Deleted | CornerDelete::HoleRemoved(_) => {
            zone.fill = None;
            zone.corner_selection = None;
            Ok(settle(gate, board, ts, verbose))
        }
    }
}

/// Delete the contour owning a flat corner index. Deleting the main
/// contour deletes the whole zone; deleting a hole keeps the zone.
pub fn delete_contour<G: DesignRuleGate>(
    gate: &G,
    board: &mut Board,
    ts: Timestamp,
    flat: usize,
    verbose: bool,
) -> Result<CommitOutcome, EditError> {
    let zone = board.zone_mut(ts).ok_or(EditError::UnknownZone(ts))?;
    let ci = zone.poly.contour_of(flat).ok_or(EditError::BadCorner)?;
    if ci == MAIN_CONTOUR {
        board.remove_zone(ts);
        Ok(settle_deleted(gate, board, verbose))
    } else {
        zone.poly.remove_contour(ci);
        zone.fill = None;
        zone.corner_selection = None;
        Ok(settle(gate, board, ts, verbose))
    }
}

/// Re-apply dialog parameters to an existing zone. A net or layer change
/// can create new overlaps, so the merge pass runs afterwards.
pub fn edit_zone_params<G: DesignRuleGate>(
    gate: &G,
    board: &mut Board,
    ts: Timestamp,
    params: &ZoneParams,
    verbose: bool,
) -> Result<CommitOutcome, EditError> {
    let zone = board.zone_mut(ts).ok_or(EditError::UnknownZone(ts))?;
    zone.apply_params(params);
    zone.fill = None;
    Ok(settle(gate, board, ts, verbose))
}

/// Move a whole zone by an offset
pub fn move_zone<G: DesignRuleGate>(
    gate: &G,
    board: &mut Board,
    ts: Timestamp,
    offset: Point,
    verbose: bool,
) -> Result<CommitOutcome, EditError> {
    let zone = board.zone_mut(ts).ok_or(EditError::UnknownZone(ts))?;
    zone.poly.translate(offset);
    zone.fill = None;
    Ok(settle(gate, board, ts, verbose))
}

/// Rotate a whole zone around a centre; angle in tenths of a degree
pub fn rotate_zone<G: DesignRuleGate>(
    gate: &G,
    board: &mut Board,
    ts: Timestamp,
    centre: Point,
    angle_decidegrees: i32,
    verbose: bool,
) -> Result<CommitOutcome, EditError> {
    let zone = board.zone_mut(ts).ok_or(EditError::UnknownZone(ts))?;
    zone.poly.rotate(centre, angle_decidegrees);
    zone.fill = None;
    Ok(settle(gate, board, ts, verbose))
}

/// Mirror a whole zone across a horizontal axis, as when flipping the
/// board side
pub fn mirror_zone<G: DesignRuleGate>(
    gate: &G,
    board: &mut Board,
    ts: Timestamp,
    axis_y: i32,
    verbose: bool,
) -> Result<CommitOutcome, EditError> {
    let zone = board.zone_mut(ts).ok_or(EditError::UnknownZone(ts))?;
    zone.poly.mirror(axis_y);
    zone.fill = None;
    Ok(settle(gate, board, ts, verbose))
}
