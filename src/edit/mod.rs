//! Interactive zone editing
//!
//! # Submodules
//! - `types` - edit errors, commit results
//! - `session` - scratch state for an outline being drawn
//! - `outline_editor` - drawing new zones, cutouts and similar zones
//! - `ops` - one-shot edits on committed zones
//! - `drag` - corner and outline dragging

mod drag;
mod ops;
mod outline_editor;
mod session;
mod types;

pub use drag::DragSession;
pub use ops::{
    delete_contour, edit_zone_params, mirror_zone, move_zone, remove_corner, rotate_zone,
};
pub use outline_editor::OutlineEditor;
pub use session::{EditSession, SessionKind};
pub use types::{CommitOutcome, EditError};
