//! The board seam consumed by this core
//!
//! Owns the zone collection, the net directory, and the conductive-item
//! index. Zones are addressed by creation timestamp: merges can delete a
//! zone out from under a caller, so nothing holds an index across a
//! structural change.

use indexmap::IndexMap;
use rstar::RTree;

use crate::geometry::spatial::search_envelope;
use crate::geometry::{BoundingBox, ConductorItem, ConductorKind, Point, PolygonSet};

use super::types::{Timestamp, Zone, ZoneParams};

#[derive(Default)]
pub struct Board {
    zones: Vec<Zone>,
    nets: IndexMap<i32, String>,
    conductors: RTree<ConductorItem>,
    next_stamp: u64,
    next_conductor_id: u64,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    fn stamp(&mut self) -> Timestamp {
        self.next_stamp += 1;
        Timestamp(self.next_stamp)
    }

    // --- zones -----------------------------------------------------------

    pub fn add_zone(&mut self, params: &ZoneParams, poly: PolygonSet) -> Timestamp {
        let ts = self.stamp();
        self.zones.push(Zone::new(ts, params, poly));
        ts
    }

    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn zone(&self, ts: Timestamp) -> Option<&Zone> {
        self.zones.iter().find(|z| z.timestamp == ts)
    }

    pub fn zone_mut(&mut self, ts: Timestamp) -> Option<&mut Zone> {
        self.zones.iter_mut().find(|z| z.timestamp == ts)
    }

    /// Current index of a zone, or None when it no longer exists.
    /// Valid only until the next structural change.
    pub fn zone_index(&self, ts: Timestamp) -> Option<usize> {
        self.zones.iter().position(|z| z.timestamp == ts)
    }

    pub fn zone_at(&self, index: usize) -> &Zone {
        &self.zones[index]
    }

    pub fn zone_at_mut(&mut self, index: usize) -> &mut Zone {
        &mut self.zones[index]
    }

    pub fn remove_zone(&mut self, ts: Timestamp) -> Option<Zone> {
        let idx = self.zone_index(ts)?;
        Some(self.zones.remove(idx))
    }

    pub fn zones_on_layer(&self, layer: i32) -> impl Iterator<Item = &Zone> {
        self.zones.iter().filter(move |z| z.layer == layer)
    }

    /// Timestamps snapshot, for iteration that mutates the collection
    pub fn zone_timestamps(&self) -> Vec<Timestamp> {
        self.zones.iter().map(|z| z.timestamp).collect()
    }

    /// Drop a zone's derived fill geometry
    pub fn delete_zone_fill(&mut self, ts: Timestamp) {
        if let Some(zone) = self.zone_mut(ts) {
            zone.fill = None;
        }
    }

    // --- net directory ---------------------------------------------------

    pub fn add_net(&mut self, code: i32, name: impl Into<String>) {
        self.nets.insert(code, name.into());
    }

    pub fn net_name(&self, code: i32) -> Option<&str> {
        self.nets.get(&code).map(String::as_str)
    }

    /// Nets in insertion order, for the pick-net prompt
    pub fn nets(&self) -> impl Iterator<Item = (i32, &str)> {
        self.nets.iter().map(|(code, name)| (*code, name.as_str()))
    }

    // --- conductive items ------------------------------------------------

    pub fn add_pad(&mut self, layer: i32, net: i32, position: Point, width: i32, height: i32) -> u64 {
        self.add_conductor(layer, net, position, ConductorKind::Pad { width, height })
    }

    pub fn add_track(&mut self, layer: i32, net: i32, start: Point, end: Point, width: i32) -> u64 {
        self.add_conductor(layer, net, start, ConductorKind::Track { end, width })
    }

    fn add_conductor(&mut self, layer: i32, net: i32, position: Point, kind: ConductorKind) -> u64 {
        self.next_conductor_id += 1;
        let id = self.next_conductor_id;
        self.conductors.insert(ConductorItem {
            id,
            layer,
            net,
            position,
            kind,
        });
        id
    }

    pub fn conductors(&self) -> impl Iterator<Item = &ConductorItem> {
        self.conductors.iter()
    }

    /// Conductive items whose bounds intersect `bbox` grown by `margin`
    pub fn conductors_near(&self, bbox: &BoundingBox, margin: i32) -> Vec<&ConductorItem> {
        self.conductors
            .locate_in_envelope_intersecting(&search_envelope(bbox, margin))
            .collect()
    }

    /// Bounding box over the board's conductive items. Zone outlines do
    /// not count: a board with nothing but outlines is still "empty" for
    /// fill purposes.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let mut iter = self.conductors.iter();
        let first = iter.next()?;
        let mut bbox = first.bounding_box();
        for item in iter {
            bbox.merge(&item.bounding_box());
        }
        Some(bbox)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{HatchStyle, Outline};

    fn square_poly(size: i32) -> PolygonSet {
        PolygonSet::new(Outline::closed_from_points(
            vec![
                Point::new(0, 0),
                Point::new(size, 0),
                Point::new(size, size),
                Point::new(0, size),
            ],
            HatchStyle::NoHatch,
        ))
    }

    #[test]
    fn test_zone_lookup_by_timestamp() {
        let mut board = Board::new();
        let a = board.add_zone(&ZoneParams::default(), square_poly(10));
        let b = board.add_zone(&ZoneParams::default(), square_poly(20));
        assert_ne!(a, b);
        assert_eq!(board.zone_index(a), Some(0));
        board.remove_zone(a);
        assert_eq!(board.zone_index(a), None);
        assert_eq!(board.zone_index(b), Some(0));
    }

    #[test]
    fn test_empty_board_has_no_bbox() {
        let mut board = Board::new();
        board.add_zone(&ZoneParams::default(), square_poly(10));
        // Zone outlines alone do not make the board non-empty
        assert!(board.bounding_box().is_none());
        board.add_pad(0, 1, Point::new(5, 5), 4, 4);
        assert!(board.bounding_box().is_some());
    }

    #[test]
    fn test_net_enumeration_order() {
        let mut board = Board::new();
        board.add_net(3, "GND");
        board.add_net(1, "VCC");
        let nets: Vec<_> = board.nets().collect();
        assert_eq!(nets, vec![(3, "GND"), (1, "VCC")]);
    }
}
