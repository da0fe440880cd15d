//! Copper fill generation for zones
//!
//! # Submodules
//! - `types` - fill geometry, fill errors
//! - `filler` - per-zone and whole-board fill computation

mod filler;
mod types;

pub use filler::{fill_all_zones, fill_zone};
pub use types::{FillError, FillGeometry, FillKind};
