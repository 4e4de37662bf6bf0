//! Snapshot module - a plain copy of session state for renderers and export

use crate::piece::Piece;
use crate::rng::RandomSource;
use crate::session::{ImageSize, Session, SessionState};
use crate::types::Cell;

/// Everything a renderer needs for one frame.
///
/// Buffers are reused by [`Session::snapshot_into`], so a host can keep one
/// snapshot alive for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionSnapshot {
    pub width: u8,
    pub height: u8,
    /// Locked cells, row-major
    pub board: Vec<Cell>,
    /// Reveal mask, row-major (`true` = covered)
    pub covered: Vec<bool>,
    pub image: Option<ImageSize>,
    pub current: Option<Piece>,
    pub next: Option<Piece>,
    pub ghost_y: Option<i8>,
    pub score: u32,
    pub lines: u32,
    pub state: SessionState,
    pub fall_interval_ms: u32,
    pub fall_elapsed_ms: u32,
}

impl SessionSnapshot {
    pub fn clear(&mut self) {
        self.width = 0;
        self.height = 0;
        self.board.clear();
        self.covered.clear();
        self.image = None;
        self.current = None;
        self.next = None;
        self.ghost_y = None;
        self.score = 0;
        self.lines = 0;
        self.state = SessionState::Running;
        self.fall_interval_ms = 0;
        self.fall_elapsed_ms = 0;
    }

    pub fn game_over(&self) -> bool {
        self.state == SessionState::GameOver
    }

    /// Locked cell at `(x, y)`, `None` when empty or out of range
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        if x >= self.width as usize || y >= self.height as usize {
            return None;
        }
        self.board[y * self.width as usize + x]
    }

    /// Whether `(x, y)` is still covered; out of range counts as covered
    pub fn is_covered(&self, x: usize, y: usize) -> bool {
        if x >= self.width as usize || y >= self.height as usize {
            return true;
        }
        self.covered[y * self.width as usize + x]
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            board: Vec::new(),
            covered: Vec::new(),
            image: None,
            current: None,
            next: None,
            ghost_y: None,
            score: 0,
            lines: 0,
            state: SessionState::Running,
            fall_interval_ms: 0,
            fall_elapsed_ms: 0,
        }
    }
}

impl<R: RandomSource> Session<R> {
    /// Fresh snapshot of the whole session
    pub fn snapshot(&self) -> SessionSnapshot {
        let mut out = SessionSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }

    /// Overwrite `out` with the current state, reusing its buffers.
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.width = self.width();
        out.height = self.height();

        out.board.clear();
        out.board.extend_from_slice(self.board().cells());
        out.covered.clear();
        out.covered.extend_from_slice(self.reveal_mask().cells());

        out.image = self.image_size();
        if self.is_game_over() {
            // The blocked spawn is not drawn.
            out.current = None;
            out.ghost_y = None;
        } else {
            out.current = Some(*self.current_piece());
            out.ghost_y = Some(self.ghost_y());
        }
        out.next = Some(*self.next_piece());

        out.score = self.score();
        out.lines = self.lines_cleared();
        out.state = self.state();
        out.fall_interval_ms = self.fall_interval_ms();
        out.fall_elapsed_ms = self.fall_elapsed_ms();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;
    use crate::rng::ScriptedRng;
    use crate::types::{Color, GameAction, PieceKind};

    fn o_session() -> Session<ScriptedRng> {
        Session::with_rng(SessionConfig::default(), ScriptedRng::new(vec![3])).unwrap()
    }

    #[test]
    fn snapshot_mirrors_session() {
        let mut session = o_session();
        session.handle_action(GameAction::HardDrop);
        session.attach_image(10, 20).unwrap();

        let snap = session.snapshot();
        assert_eq!((snap.width, snap.height), (10, 20));
        assert_eq!(snap.board.len(), 200);
        assert_eq!(snap.cell(4, 19), Some(Color::Yellow));
        assert_eq!(snap.cell(3, 19), None);
        assert!(snap.is_covered(0, 19));
        assert_eq!(snap.score, 36);
        assert_eq!(snap.current.map(|p| p.kind), Some(PieceKind::O));
        assert_eq!(snap.ghost_y, Some(16));
        assert!(snap.image.is_some());
        assert!(!snap.game_over());
    }

    #[test]
    fn snapshot_into_reuses_buffers() {
        let session = o_session();
        let mut snap = SessionSnapshot::default();
        session.snapshot_into(&mut snap);
        let board_ptr = snap.board.as_ptr();
        let covered_ptr = snap.covered.as_ptr();

        session.snapshot_into(&mut snap);
        assert_eq!(snap.board.as_ptr(), board_ptr);
        assert_eq!(snap.covered.as_ptr(), covered_ptr);
        assert_eq!(snap, session.snapshot());
    }

    #[test]
    fn game_over_snapshot_hides_active_piece() {
        let mut session = o_session();
        for _ in 0..10 {
            session.handle_action(GameAction::HardDrop);
        }
        let snap = session.snapshot();
        assert!(snap.game_over());
        assert!(snap.current.is_none());
        assert!(snap.ghost_y.is_none());
    }

    #[test]
    fn clear_resets_everything() {
        let mut snap = o_session().snapshot();
        snap.clear();
        assert_eq!(snap, SessionSnapshot::default());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn snapshot_serializes_to_json() {
        let session = o_session();
        let snap = session.snapshot();
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"score\":0"));
        assert!(json.contains("\"state\":\"Running\""));

        let back: SessionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
