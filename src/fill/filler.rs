//! Zone fill computation
//!
//! The zone outline minus its holes is the fill frontier. Copper grows
//! from conductive items already tied to the zone's net out to the
//! frontier, keeping isolation clearance around same-layer items of other
//! nets and honoring the pad-connection policy around same-net pads.
//! The previous fill is discarded unconditionally before anything is
//! computed; there is no incremental re-fill.

use geo::{Area, BooleanOps, Coord, LineString, MultiLineString, MultiPolygon};
use tracing::{debug, warn};

use crate::geometry::boolean::{polygon_from_points, polygon_to_polyset, polyset_to_polygon};
use crate::geometry::{BoundingBox, ConductorItem, ConductorKind, Point};
use crate::zones::{Board, PadConnection, Timestamp, Zone, NET_NONE};

use super::types::{FillError, FillGeometry, FillKind};

/// Minimum overlap area that counts as electrical contact
const CONTACT_AREA_EPS: f64 = 0.5;

/// Recompute one zone's fill geometry.
///
/// The old fill is removed first, before the preconditions are checked:
/// a failed fill must never leave stale geometry behind. With `verbose`
/// the failures are surfaced as user-facing diagnostics; otherwise the
/// error is only returned.
pub fn fill_zone(board: &mut Board, ts: Timestamp, verbose: bool) -> Result<(), FillError> {
    if board.zone(ts).is_none() {
        return Err(FillError::UnknownZone(ts));
    }
    board.delete_zone_fill(ts);

    if board.bounding_box().is_none() {
        if verbose {
            warn!("fill requested on an empty board");
        }
        return Err(FillError::EmptyBoard);
    }

    let zone = board.zone(ts).ok_or(FillError::UnknownZone(ts))?;
    let net = zone.net;
    if net < 0 || (net > 0 && board.net_name(net).is_none()) {
        if verbose {
            warn!(net, "unable to resolve zone net");
        }
        return Err(FillError::UnresolvedNet(net));
    }
    let net_label = if net == NET_NONE {
        "No Net"
    } else {
        board.net_name(net).unwrap_or("")
    };
    debug!(zone = ts.0, net = net_label, "filling zone");

    let kind = compute_fill(board, zone);
    let fill = FillGeometry {
        timestamp: ts,
        kind,
    };
    debug!(
        zone = ts.0,
        pieces = fill.piece_count(),
        area = fill.area(),
        "fill computed"
    );
    if let Some(zone) = board.zone_mut(ts) {
        zone.fill = Some(fill);
    }
    Ok(())
}

/// Regenerate fill geometry for every zone on the board.
///
/// All previous fills are dropped up front. A per-zone failure stops the
/// batch immediately when quiet; with `verbose` the batch continues and
/// the result reflects the last zone processed (preserved behavior of
/// the interactive fill-all command).
pub fn fill_all_zones(board: &mut Board, verbose: bool) -> Result<(), FillError> {
    for ts in board.zone_timestamps() {
        board.delete_zone_fill(ts);
    }

    let mut level: Result<(), FillError> = Ok(());
    for ts in board.zone_timestamps() {
        match fill_zone(board, ts, verbose) {
            Ok(()) => level = Ok(()),
            Err(e) => {
                level = Err(e);
                if !verbose {
                    return level;
                }
            }
        }
    }
    level
}

fn compute_fill(board: &Board, zone: &Zone) -> FillKind {
    let frontier = MultiPolygon::new(vec![polyset_to_polygon(&zone.poly)]);
    let Some(zone_bbox) = zone.poly.bounding_box() else {
        return empty_kind(zone);
    };

    let reach = zone
        .clearance
        .max(zone.thermal_gap + zone.thermal_bridge);
    let nearby: Vec<&ConductorItem> = board
        .conductors_near(&zone_bbox, reach)
        .into_iter()
        .filter(|item| item.layer == zone.layer)
        .collect();

    // Carve clearance and thermal reliefs out of the frontier
    let mut obstacles: Option<MultiPolygon<f64>> = None;
    for item in &nearby {
        let carve = if item.net != zone.net {
            Some(MultiPolygon::new(vec![polygon_from_points(
                &item.outline_with_margin(zone.clearance),
            )]))
        } else {
            match (item.kind, zone.pad_connection) {
                (ConductorKind::Pad { .. }, PadConnection::Excluded) => {
                    Some(MultiPolygon::new(vec![polygon_from_points(
                        &item.outline_with_margin(zone.clearance),
                    )]))
                }
                (ConductorKind::Pad { .. }, PadConnection::Thermal) => {
                    Some(thermal_carve(item, zone.thermal_gap, zone.thermal_bridge))
                }
                // Covered pads and same-net tracks take solid copper
                _ => None,
            }
        };
        if let Some(mp) = carve {
            obstacles = Some(match obstacles.take() {
                None => mp,
                Some(acc) => acc.union(&mp),
            });
        }
    }

    let mut filled = match obstacles {
        Some(obs) => frontier.difference(&obs),
        None => frontier.clone(),
    };

    // Fill grows from copper already on the zone's net: when seeds exist
    // inside the frontier, regions that touch none of them stay empty.
    // Contact is tested at clearance reach, not bare copper: an excluded
    // pad still seeds the fill that surrounds its clearance ring.
    if zone.net > 0 {
        let seeds: Vec<MultiPolygon<f64>> = nearby
            .iter()
            .filter(|item| item.net == zone.net)
            .filter(|item| {
                let copper =
                    MultiPolygon::new(vec![polygon_from_points(&item.outline_with_margin(0))]);
                frontier.intersection(&copper).unsigned_area() > CONTACT_AREA_EPS
            })
            .map(|item| {
                MultiPolygon::new(vec![polygon_from_points(
                    &item.outline_with_margin(zone.clearance + 1),
                )])
            })
            .collect();
        if !seeds.is_empty() {
            filled = MultiPolygon::new(
                filled
                    .0
                    .into_iter()
                    .filter(|piece| {
                        let piece_mp = MultiPolygon::new(vec![piece.clone()]);
                        seeds.iter().any(|seed| {
                            piece_mp.intersection(seed).unsigned_area() > CONTACT_AREA_EPS
                        })
                    })
                    .collect(),
            );
        }
    }

    if zone.grid_pitch > 0 {
        FillKind::Segments(grid_segments(&filled, &zone_bbox, zone.grid_pitch))
    } else {
        FillKind::Polygons(
            filled
                .0
                .iter()
                .map(|p| polygon_to_polyset(p, zone.poly.hatch()))
                .collect(),
        )
    }
}

fn empty_kind(zone: &Zone) -> FillKind {
    if zone.grid_pitch > 0 {
        FillKind::Segments(Vec::new())
    } else {
        FillKind::Polygons(Vec::new())
    }
}

/// Thermal relief around a same-net pad: the gap ring minus the four
/// bridge spokes. The spoke rectangles run straight through the pad, so
/// the remaining carve never cuts the bridges.
fn thermal_carve(item: &ConductorItem, gap: i32, bridge: i32) -> MultiPolygon<f64> {
    let expanded = MultiPolygon::new(vec![polygon_from_points(&item.outline_with_margin(gap))]);
    let bb = item.bounding_box().inflated(gap + 1);
    let c = item.position;
    let half = (bridge / 2).max(1);

    let h_spoke = MultiPolygon::new(vec![polygon_from_points(&[
        Point::new(bb.min.x, c.y - half),
        Point::new(bb.max.x, c.y - half),
        Point::new(bb.max.x, c.y + half),
        Point::new(bb.min.x, c.y + half),
    ])]);
    let v_spoke = MultiPolygon::new(vec![polygon_from_points(&[
        Point::new(c.x - half, bb.min.y),
        Point::new(c.x + half, bb.min.y),
        Point::new(c.x + half, bb.max.y),
        Point::new(c.x - half, bb.max.y),
    ])]);

    expanded.difference(&h_spoke.union(&v_spoke))
}

/// Grid fill (experimental in the interactive editor): horizontal hatch
/// segments on a regular pitch, clipped to the computed copper region
fn grid_segments(
    filled: &MultiPolygon<f64>,
    bbox: &BoundingBox,
    pitch: i32,
) -> Vec<(Point, Point)> {
    let mut lines = Vec::new();
    let (x0, x1) = (bbox.min.x as f64, bbox.max.x as f64);
    // Sweep through cell centres; a line collinear with a horizontal
    // boundary edge would clip to nothing
    let mut y = bbox.min.y + pitch / 2;
    while y < bbox.max.y {
        lines.push(LineString::new(vec![
            Coord { x: x0, y: y as f64 },
            Coord { x: x1, y: y as f64 },
        ]));
        y += pitch;
    }

    let clipped = filled.clip(&MultiLineString::new(lines), false);
    let mut segments = Vec::new();
    for ls in &clipped.0 {
        for line in ls.lines() {
            let a = Point::from_f64([line.start.x, line.start.y]);
            let b = Point::from_f64([line.end.x, line.end.y]);
            if a != b {
                segments.push((a, b));
            }
        }
    }
    segments
}
