// Fill regeneration scenarios: seeding, pad-connection modes, failure
// handling, and regeneration stability
use copper_zones::fill::{fill_all_zones, fill_zone, FillError};
use copper_zones::geometry::{HatchStyle, Outline, Point, PolygonSet};
use copper_zones::zones::{Board, PadConnection, Timestamp, ZoneParams, NET_NONE};

fn rect_poly(x0: i32, y0: i32, w: i32, h: i32) -> PolygonSet {
    PolygonSet::new(Outline::closed_from_points(
        vec![
            Point::new(x0, y0),
            Point::new(x0 + w, y0),
            Point::new(x0 + w, y0 + h),
            Point::new(x0, y0 + h),
        ],
        HatchStyle::NoHatch,
    ))
}

fn zone_params(net: i32) -> ZoneParams {
    ZoneParams {
        net,
        clearance: 10,
        thermal_gap: 20,
        thermal_bridge: 10,
        ..ZoneParams::default()
    }
}

fn gnd_board(pad_connection: PadConnection) -> (Board, Timestamp) {
    let mut board = Board::new();
    board.add_net(1, "GND");
    board.add_pad(0, 1, Point::new(100, 100), 40, 40);
    let ts = board.add_zone(
        &ZoneParams {
            pad_connection,
            ..zone_params(1)
        },
        rect_poly(0, 0, 1000, 1000),
    );
    (board, ts)
}

#[test]
fn test_fill_is_stable_across_regeneration() {
    let (mut board, ts) = gnd_board(PadConnection::Thermal);
    fill_zone(&mut board, ts, false).unwrap();
    let first = board.zone(ts).unwrap().fill.as_ref().unwrap().area();
    fill_zone(&mut board, ts, false).unwrap();
    let second = board.zone(ts).unwrap().fill.as_ref().unwrap().area();
    assert!((first - second).abs() < 1e-6, "refill must not drift");
}

#[test]
fn test_pad_connection_modes_order_copper_area() {
    let (mut board_c, tc) = gnd_board(PadConnection::Covered);
    let (mut board_t, tt) = gnd_board(PadConnection::Thermal);
    let (mut board_e, te) = gnd_board(PadConnection::Excluded);
    fill_zone(&mut board_c, tc, false).unwrap();
    fill_zone(&mut board_t, tt, false).unwrap();
    fill_zone(&mut board_e, te, false).unwrap();

    let covered = board_c.zone(tc).unwrap().fill.as_ref().unwrap().area();
    let thermal = board_t.zone(tt).unwrap().fill.as_ref().unwrap().area();
    let excluded = board_e.zone(te).unwrap().fill.as_ref().unwrap().area();

    assert!(covered > thermal, "thermal relief removes copper");
    assert!(covered > excluded, "excluded pads remove copper");
    // The relief gap is wider than the clearance here, so thermal carves
    // more than exclusion even with the spokes kept
    assert!(excluded > thermal);
}

#[test]
fn test_unseeded_region_stays_empty() {
    let mut board = Board::new();
    board.add_net(1, "GND");
    board.add_net(2, "SIG");
    // Seed pad in the left half only
    board.add_pad(0, 1, Point::new(150, 300), 40, 40);
    // A foreign-net track splits the frontier top to bottom
    board.add_track(0, 2, Point::new(500, -50), Point::new(500, 650), 20);
    let ts = board.add_zone(&zone_params(1), rect_poly(0, 0, 1000, 600));

    fill_zone(&mut board, ts, false).unwrap();
    let fill = board.zone(ts).unwrap().fill.as_ref().unwrap();
    assert_eq!(fill.piece_count(), 1, "right half has no seed");
    // Left piece only: roughly 480 x 600 minus the thermal relief
    assert!(fill.area() < 350_000.0);
    assert!(fill.area() > 200_000.0);
}

#[test]
fn test_failed_fill_discards_previous_copper() {
    let (mut board, ts) = gnd_board(PadConnection::Thermal);
    fill_zone(&mut board, ts, false).unwrap();
    assert!(board.zone(ts).unwrap().fill.is_some());

    // Retarget the zone to a net that does not resolve
    board.zone_mut(ts).unwrap().net = 42;
    assert_eq!(
        fill_zone(&mut board, ts, false),
        Err(FillError::UnresolvedNet(42))
    );
    assert!(
        board.zone(ts).unwrap().fill.is_none(),
        "stale copper must not survive a failed fill"
    );
}

#[test]
fn test_grid_fill_segments_clipped_to_outline() {
    let mut board = Board::new();
    board.add_pad(0, 0, Point::new(5000, 5000), 10, 10);
    let ts = board.add_zone(
        &ZoneParams {
            net: NET_NONE,
            clearance: 0,
            grid_pitch: 50,
            ..ZoneParams::default()
        },
        rect_poly(0, 0, 1000, 500),
    );
    fill_zone(&mut board, ts, false).unwrap();
    let fill = board.zone(ts).unwrap().fill.as_ref().unwrap();
    // Cell-centre rows: 500 units tall at pitch 50 gives exactly 10
    assert_eq!(fill.segment_count(), 10);
    assert_eq!(fill.area(), 0.0, "segment fill reports no polygon area");
}

#[test]
fn test_fill_all_verbose_refills_what_it_can() {
    let mut board = Board::new();
    board.add_net(1, "GND");
    board.add_pad(0, 1, Point::new(100, 100), 40, 40);
    let bad = board.add_zone(&zone_params(77), rect_poly(0, 0, 500, 500));
    let good = board.add_zone(&zone_params(1), rect_poly(600, 0, 500, 500));

    assert_eq!(fill_all_zones(&mut board, true), Ok(()));
    assert!(board.zone(bad).unwrap().fill.is_none());
    assert!(board.zone(good).unwrap().fill.is_some());

    // Quiet mode stops at the first failure instead
    assert_eq!(
        fill_all_zones(&mut board, false),
        Err(FillError::UnresolvedNet(77))
    );
    assert!(board.zone(good).unwrap().fill.is_none());
}
