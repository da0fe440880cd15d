//! Zone data types
//!
//! A zone ties one polygon set to a net and a layer, and carries the fill
//! parameters used when its copper is regenerated.

use serde::{Deserialize, Serialize};

use crate::fill::FillGeometry;
use crate::geometry::{HatchStyle, Point, PolygonSet};

/// Net code of a zone that has not been tied to any net yet (error state)
pub const NET_UNSET: i32 = -1;

/// Net code for permitted unconnected copper
pub const NET_NONE: i32 = 0;

/// Monotonically-unique zone creation stamp. Identity key for merge
/// lookups and grouping key for generated fill geometry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Timestamp(pub u64);

/// How zone copper connects to pads of the zone's own net
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PadConnection {
    /// Pads are covered by solid copper
    Covered,
    /// Thermal relief: gap around the pad, bridged by spokes
    #[default]
    Thermal,
    /// Pads are kept clear of zone copper
    Excluded,
}

/// Parameters collected from the zone dialog before drawing starts, and
/// persisted as last-used defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneParams {
    pub layer: i32,
    pub net: i32,
    pub hatch: HatchStyle,
    pub clearance: i32,
    /// 0 = polygon fill, > 0 = grid fill at this pitch
    pub grid_pitch: i32,
    pub pad_connection: PadConnection,
    pub thermal_gap: i32,
    pub thermal_bridge: i32,
    /// Constrain drawn edges to 0/45/90 degrees
    pub diagonal_only: bool,
}

impl Default for ZoneParams {
    fn default() -> Self {
        Self {
            layer: 0,
            net: NET_NONE,
            hatch: HatchStyle::default(),
            clearance: 200,
            grid_pitch: 0,
            pad_connection: PadConnection::default(),
            thermal_gap: 200,
            thermal_bridge: 200,
            diagonal_only: false,
        }
    }
}

/// A copper zone: one polygon set, one net, one layer
#[derive(Debug, Clone, Serialize)]
pub struct Zone {
    pub timestamp: Timestamp,
    pub net: i32,
    pub layer: i32,
    pub clearance: i32,
    pub grid_pitch: i32,
    pub pad_connection: PadConnection,
    pub thermal_gap: i32,
    pub thermal_bridge: i32,
    pub poly: PolygonSet,
    /// Transient: flat corner index selected for interactive editing
    #[serde(skip)]
    pub corner_selection: Option<usize>,
    /// Derived fill geometry; regenerated whole, never patched
    #[serde(skip)]
    pub fill: Option<FillGeometry>,
}

impl Zone {
    pub fn new(timestamp: Timestamp, params: &ZoneParams, poly: PolygonSet) -> Self {
        Self {
            timestamp,
            net: params.net,
            layer: params.layer,
            clearance: params.clearance,
            grid_pitch: params.grid_pitch,
            pad_connection: params.pad_connection,
            thermal_gap: params.thermal_gap,
            thermal_bridge: params.thermal_bridge,
            poly,
            corner_selection: None,
            fill: None,
        }
    }

    /// Parameters as currently carried by the zone
    pub fn params(&self) -> ZoneParams {
        ZoneParams {
            layer: self.layer,
            net: self.net,
            hatch: self.poly.hatch(),
            clearance: self.clearance,
            grid_pitch: self.grid_pitch,
            pad_connection: self.pad_connection,
            thermal_gap: self.thermal_gap,
            thermal_bridge: self.thermal_bridge,
            diagonal_only: false,
        }
    }

    /// Apply dialog parameters to an existing zone. The polygon set and
    /// transient editing state are untouched.
    pub fn apply_params(&mut self, params: &ZoneParams) {
        self.layer = params.layer;
        self.net = params.net;
        self.clearance = params.clearance;
        self.grid_pitch = params.grid_pitch;
        self.pad_connection = params.pad_connection;
        self.thermal_gap = params.thermal_gap;
        self.thermal_bridge = params.thermal_bridge;
        self.poly.set_hatch(params.hatch);
    }

    /// Copy outline, net, layer and fill parameters from another zone.
    /// Transient editing state and fill geometry are not copied.
    pub fn copy_from(&mut self, src: &Zone) {
        self.net = src.net;
        self.layer = src.layer;
        self.clearance = src.clearance;
        self.grid_pitch = src.grid_pitch;
        self.pad_connection = src.pad_connection;
        self.thermal_gap = src.thermal_gap;
        self.thermal_bridge = src.thermal_bridge;
        self.poly = src.poly.clone();
        self.fill = None;
    }

    pub fn hit_test(&self, p: Point) -> bool {
        self.poly.hit_test(p)
    }

    pub fn hit_test_for_corner(&self, p: Point, radius: i32) -> Option<usize> {
        self.poly.hit_test_for_corner(p, radius)
    }

    pub fn hit_test_for_edge(&self, p: Point, radius: i32) -> Option<usize> {
        self.poly.hit_test_for_edge(p, radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Outline;

    fn square_poly() -> PolygonSet {
        PolygonSet::new(Outline::closed_from_points(
            vec![
                Point::new(0, 0),
                Point::new(100, 0),
                Point::new(100, 100),
                Point::new(0, 100),
            ],
            HatchStyle::NoHatch,
        ))
    }

    #[test]
    fn test_params_round_trip() {
        let params = ZoneParams {
            net: 4,
            layer: 2,
            clearance: 150,
            ..ZoneParams::default()
        };
        let zone = Zone::new(Timestamp(1), &params, square_poly());
        assert_eq!(zone.params().net, 4);
        assert_eq!(zone.params().layer, 2);
        assert_eq!(zone.params().clearance, 150);
    }

    #[test]
    fn test_copy_from_skips_transients() {
        let src = Zone::new(Timestamp(1), &ZoneParams::default(), square_poly());
        let mut dst = Zone::new(
            Timestamp(2),
            &ZoneParams {
                net: 9,
                ..ZoneParams::default()
            },
            square_poly(),
        );
        dst.corner_selection = Some(2);
        dst.copy_from(&src);
        assert_eq!(dst.net, src.net);
        assert_eq!(dst.timestamp, Timestamp(2));
        assert_eq!(dst.corner_selection, Some(2));
        assert!(dst.fill.is_none());
    }
}
