//! Interactive outline drawing and commit
//!
//! The editor owns at most one drawing session at a time. Every appended
//! edge passes the design-rule gate before it is accepted; a rejected
//! edge or closure leaves the session exactly as it was, so the user can
//! route around the obstacle and keep drawing. Closure commits the
//! outline, runs the merge pass, and finishes with the report-only
//! outline scan.

use crate::drc::{DesignRuleGate, DrcOutcome};
use crate::geometry::{snap_45, Outline, Point, PolygonSet};
use crate::zones::{Board, Timestamp, ZoneParams};

use super::session::{EditSession, SessionKind};
use super::types::{CommitOutcome, EditError};

pub struct OutlineEditor<G: DesignRuleGate> {
    gate: G,
    session: Option<EditSession>,
    verbose: bool,
}

impl<G: DesignRuleGate> OutlineEditor<G> {
    pub fn new(gate: G) -> Self {
        Self {
            gate,
            session: None,
            verbose: false,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn is_drawing(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    /// Start drawing a new zone with dialog-collected parameters
    pub fn begin_zone(&mut self, params: ZoneParams) -> Result<(), EditError> {
        self.begin(EditSession::new(SessionKind::NewZone, params))
    }

    /// Start drawing a cutout in an existing zone. The cutout draws with
    /// the target's own parameters so edge checks see the right net.
    pub fn begin_cutout(&mut self, board: &Board, target: Timestamp) -> Result<(), EditError> {
        let zone = board.zone(target).ok_or(EditError::UnknownZone(target))?;
        self.begin(EditSession::new(
            SessionKind::Cutout { target },
            zone.params(),
        ))
    }

    /// Start drawing a new zone that inherits an existing zone's net,
    /// layer and fill parameters
    pub fn begin_similar(&mut self, board: &Board, source: Timestamp) -> Result<(), EditError> {
        let zone = board.zone(source).ok_or(EditError::UnknownZone(source))?;
        self.begin(EditSession::new(
            SessionKind::Similar { source },
            zone.params(),
        ))
    }

    fn begin(&mut self, session: EditSession) -> Result<(), EditError> {
        if self.session.is_some() {
            return Err(EditError::AlreadyDrawing);
        }
        self.session = Some(session);
        Ok(())
    }

    /// Append the next outline corner.
    ///
    /// With the diagonal constraint on, the point snaps to the nearest
    /// 0/45/90 direction from the previous corner first. A zero-length
    /// edge is silently ignored (`Ok(false)`). An edge the gate rejects
    /// is refused and the session is left unchanged.
    pub fn append_point(&mut self, board: &Board, p: Point) -> Result<bool, EditError> {
        let session = self.session.as_ref().ok_or(EditError::NotDrawing)?;

        let Some(start) = session.last_point() else {
            // First corner has no edge to validate yet
            if let Some(session) = self.session.as_mut() {
                session.push_point(p);
            }
            return Ok(true);
        };

        let end = if session.params().diagonal_only {
            snap_45(start, p)
        } else {
            p
        };
        if end == start {
            return Ok(false);
        }

        let params = session.params();
        if self.gate.check_edge(board, (start, end), params.layer, params.net, params.clearance)
            == DrcOutcome::Violation
        {
            return Err(EditError::EdgeRejected);
        }

        if let Some(session) = self.session.as_mut() {
            session.push_point(end);
        }
        Ok(true)
    }

    /// Close and commit the outline being drawn.
    ///
    /// The closing edge runs back to the first corner implicitly. A
    /// rejected closure keeps the session alive so drawing can continue;
    /// on success the scratch buffer is discarded, the outline becomes
    /// board state, overlaps are merged, and the post-commit outline scan
    /// reports (but never rolls back) any remaining violations.
    pub fn finish(&mut self, board: &mut Board) -> Result<CommitOutcome, EditError> {
        let Some(session) = self.session.take() else {
            return Err(EditError::NotDrawing);
        };

        let params = session.params().clone();
        if self.gate.check_closure(
            board,
            session.points(),
            params.layer,
            params.net,
            params.clearance,
        ) == DrcOutcome::Violation
        {
            self.session = Some(session);
            return Err(EditError::ClosureRejected);
        }

        // A cutout whose target vanished mid-draw is refused like any
        // other rejected commit: the drawn outline survives
        if let SessionKind::Cutout { target } = session.kind() {
            if board.zone(target).is_none() {
                self.session = Some(session);
                return Err(EditError::UnknownZone(target));
            }
        }

        let kind = session.kind();
        let outline = Outline::closed_from_points(session.into_points(), params.hatch);

        let acted = match kind {
            SessionKind::NewZone | SessionKind::Similar { .. } => {
                board.add_zone(&params, PolygonSet::new(outline))
            }
            SessionKind::Cutout { target } => {
                let zone = board
                    .zone_mut(target)
                    .ok_or(EditError::UnknownZone(target))?;
                zone.poly.add_hole(outline);
                zone.fill = None;
                target
            }
        };

        Ok(self.settle(board, acted))
    }

    /// Throw away the outline being drawn. Board state is untouched.
    pub fn abort(&mut self) {
        self.session = None;
    }

    fn settle(&self, board: &mut Board, ts: Timestamp) -> CommitOutcome {
        super::ops::settle(&self.gate, board, ts, self.verbose)
    }
}
