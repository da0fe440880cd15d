//! Editing errors and commit results

use thiserror::Error;

use crate::zones::Timestamp;

/// Why an interactive edit was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("no outline is being drawn")]
    NotDrawing,
    #[error("an outline is already being drawn")]
    AlreadyDrawing,
    #[error("edge rejected by design rules")]
    EdgeRejected,
    #[error("outline rejected at closure")]
    ClosureRejected,
    #[error("zone {} no longer exists", .0 .0)]
    UnknownZone(Timestamp),
    #[error("corner index out of range")]
    BadCorner,
}

/// Result of a committed edit. `zone` is the surviving timestamp after
/// the merge pass, or None when the edit deleted the zone outright.
/// `drc_errors` counts violations found by the post-commit outline scan;
/// they are reported, never rolled back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitOutcome {
    pub zone: Option<Timestamp>,
    pub drc_errors: usize,
}
