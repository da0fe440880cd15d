//! Zones: the board's copper areas and their overlap resolution
//!
//! # Submodules
//! - `types` - zone, parameters, timestamps
//! - `board` - zone collection, net directory, conductive-item index
//! - `merge` - union of overlapping same-layer same-net zones

mod board;
mod merge;
mod types;

pub use board::Board;
pub use merge::{area_polygon_modified, MergeOutcome};
pub use types::{PadConnection, Timestamp, Zone, ZoneParams, NET_NONE, NET_UNSET};
