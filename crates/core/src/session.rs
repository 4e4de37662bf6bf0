//! Session module - one game on one board
//!
//! Ties the catalog, board and reveal mask together. The session owns the
//! current and next piece, the score and line counters, the fall timer and
//! the running/game-over state. Every transition either commits completely or
//! leaves the session untouched.
//!
//! The host drives it with [`Session::handle_action`] for player input and
//! [`Session::tick`] for elapsed time.

use crate::board::{Board, RowList};
use crate::catalog::random_shape;
use crate::config::SessionConfig;
use crate::error::ConfigError;
use crate::piece::Piece;
use crate::reveal::RevealMask;
use crate::rng::{RandomSource, SimpleRng};
use crate::types::{
    Cell, GameAction, DEFAULT_SEED, HARD_DROP_SCORE, LINE_CLEAR_SCORE, SOFT_DROP_SCORE,
};

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionState {
    Running,
    /// Terminal until the next `Reset`
    GameOver,
}

/// Dimensions of the attached picture, in board cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageSize {
    pub width_cells: u32,
    pub height_cells: u32,
}

/// What happened when a piece locked.
///
/// Consumed by observers through [`Session::take_last_event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockEvent {
    /// The piece as it was written into the board
    pub piece: Piece,
    /// Board rows that were full and got cleared, ascending
    pub cleared_rows: RowList,
    /// Points from cleared rows
    pub line_score: u32,
    /// Points from the hard drop that caused the lock (0 for gravity locks)
    pub drop_score: u32,
    /// Whether the promoted piece could not spawn
    pub game_over: bool,
}

impl LockEvent {
    pub fn lines_cleared(&self) -> u32 {
        self.cleared_rows.len() as u32
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Session<R: RandomSource = SimpleRng> {
    config: SessionConfig,
    board: Board,
    reveal: RevealMask,
    current: Piece,
    next: Piece,
    score: u32,
    lines: u32,
    state: SessionState,
    fall_elapsed_ms: u32,
    image: Option<ImageSize>,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
    rng: R,
}

fn spawn_piece(rng: &mut impl RandomSource, board_width: u8) -> Piece {
    let (shape, color) = random_shape(rng);
    Piece::spawn(shape, color, board_width)
}

impl Session<SimpleRng> {
    /// Create a session with the default seed
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        Self::with_seed(config, DEFAULT_SEED)
    }

    /// Create a session whose piece sequence is fixed by `seed`
    pub fn with_seed(config: SessionConfig, seed: u32) -> Result<Self, ConfigError> {
        Self::with_rng(config, SimpleRng::new(seed))
    }
}

impl<R: RandomSource> Session<R> {
    /// Create a session drawing pieces from `rng`.
    ///
    /// The first draw becomes the current piece, the second the next piece.
    pub fn with_rng(config: SessionConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let (width, height) = config.board_size();
        let current = spawn_piece(&mut rng, width);
        let next = spawn_piece(&mut rng, width);

        Ok(Self {
            config,
            board: Board::new(width, height),
            reveal: RevealMask::new(width, height),
            current,
            next,
            score: 0,
            lines: 0,
            state: SessionState::Running,
            fall_elapsed_ms: 0,
            image: None,
            last_event: None,
            rng,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn width(&self) -> u8 {
        self.board.width()
    }

    pub fn height(&self) -> u8 {
        self.board.height()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Board as nested rows of `Option<Color>`
    pub fn board_cells(&self) -> Vec<Vec<Cell>> {
        self.board.to_grid()
    }

    pub fn current_piece(&self) -> &Piece {
        &self.current
    }

    pub fn next_piece(&self) -> &Piece {
        &self.next
    }

    pub fn reveal_mask(&self) -> &RevealMask {
        &self.reveal
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state == SessionState::GameOver
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.config.fall_interval_ms
    }

    /// Time accumulated toward the next automatic step
    pub fn fall_elapsed_ms(&self) -> u32 {
        self.fall_elapsed_ms
    }

    pub fn image_size(&self) -> Option<ImageSize> {
        self.image
    }

    pub fn is_image_attached(&self) -> bool {
        self.image.is_some()
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn last_event(&self) -> Option<&LockEvent> {
        self.last_event.as_ref()
    }

    /// Row the current piece would lock on if hard-dropped now
    pub fn ghost_y(&self) -> i8 {
        self.current.y + self.drop_distance()
    }

    /// Apply a player action.
    ///
    /// Returns whether anything changed. After game over only `Reset` is
    /// accepted.
    pub fn handle_action(&mut self, action: GameAction) -> bool {
        if self.is_game_over() && action != GameAction::Reset {
            return false;
        }

        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => {
                let moved = self.try_move(0, 1);
                if moved {
                    self.score = self.score.saturating_add(SOFT_DROP_SCORE);
                }
                moved
            }
            GameAction::Rotate => self.try_rotate(),
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
            GameAction::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Advance the fall timer by `elapsed_ms`.
    ///
    /// Once the accumulated time reaches the fall interval the piece takes one
    /// step down (or locks when it cannot) and the timer restarts from zero.
    /// At most one step happens per call. Returns whether a step happened.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.is_game_over() {
            return false;
        }

        self.fall_elapsed_ms = self.fall_elapsed_ms.saturating_add(elapsed_ms);
        if self.fall_elapsed_ms < self.config.fall_interval_ms {
            return false;
        }
        self.fall_elapsed_ms = 0;

        if !self.try_move(0, 1) {
            self.lock_current(0);
        }
        true
    }

    /// Attach a picture of `width_cells` x `height_cells`.
    ///
    /// The picture must cover the board exactly; scaling pixels to cells is
    /// the host's job. On success the reveal mask is covered again. Game state
    /// is not affected either way.
    pub fn attach_image(&mut self, width_cells: u32, height_cells: u32) -> Result<(), ConfigError> {
        if width_cells == 0 || height_cells == 0 {
            return Err(ConfigError::EmptyImage {
                width: width_cells,
                height: height_cells,
            });
        }
        if width_cells != self.width() as u32 || height_cells != self.height() as u32 {
            return Err(ConfigError::ImageSizeMismatch {
                width: width_cells,
                height: height_cells,
                board_width: self.width(),
                board_height: self.height(),
            });
        }

        self.image = Some(ImageSize {
            width_cells,
            height_cells,
        });
        self.reveal.on_image_attached();
        Ok(())
    }

    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let moved = self.current.shifted(dx, dy);
        if self.board.fits(&moved) {
            self.current = moved;
            return true;
        }
        false
    }

    /// Rotate in place; no kicks, a blocked rotation is discarded.
    fn try_rotate(&mut self) -> bool {
        let rotated = self.current.with_mask(self.current.rotated_mask());
        if self.board.fits(&rotated) {
            self.current = rotated;
            return true;
        }
        false
    }

    fn drop_distance(&self) -> i8 {
        let piece = &self.current;
        let mut distance = 0;
        while self
            .board
            .is_valid(&piece.mask, piece.x, piece.y + distance + 1)
        {
            distance += 1;
        }
        distance
    }

    fn hard_drop(&mut self) -> u32 {
        let distance = self.drop_distance();
        self.current = self.current.shifted(0, distance);

        let drop_score = HARD_DROP_SCORE * distance as u32;
        self.score = self.score.saturating_add(drop_score);

        // Lock immediately
        self.lock_current(drop_score);
        drop_score
    }

    /// Lock the current piece, resolve full rows and promote the next piece.
    fn lock_current(&mut self, drop_score: u32) {
        let piece = self.current;
        self.board.lock(&piece);

        let cleared_rows = self.board.find_full_rows();
        // The mask counts clear events, so it needs the running total before
        // each increment, not the board row.
        for _ in &cleared_rows {
            self.reveal.on_line_cleared(self.lines);
            self.lines = self.lines.saturating_add(1);
        }
        self.board.clear_rows(&cleared_rows);

        let line_score = LINE_CLEAR_SCORE * cleared_rows.len() as u32;
        self.score = self.score.saturating_add(line_score);

        self.current = self.next;
        self.next = spawn_piece(&mut self.rng, self.board.width());
        if !self.board.fits(&self.current) {
            self.state = SessionState::GameOver;
        }

        self.last_event = Some(LockEvent {
            piece,
            cleared_rows,
            line_score,
            drop_score,
            game_over: self.is_game_over(),
        });
    }

    /// Start a new game on the same board size.
    ///
    /// The random source keeps running, so the new game gets fresh pieces.
    /// The reveal mask and attached picture survive unless the config asks
    /// for the mask of an attached picture to be covered again.
    fn reset(&mut self) {
        let width = self.board.width();
        self.board.clear();
        self.current = spawn_piece(&mut self.rng, width);
        self.next = spawn_piece(&mut self.rng, width);
        self.score = 0;
        self.lines = 0;
        self.state = SessionState::Running;
        self.fall_elapsed_ms = 0;
        self.last_event = None;

        if self.config.reset_clears_reveal && self.image.is_some() {
            self.reveal.on_image_attached();
        }
    }
}
