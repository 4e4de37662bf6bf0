//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the game rules and the reveal mechanic. It has no
//! dependencies on terminals or I/O: the host feeds it actions and elapsed
//! time and reads state back through queries or a [`SessionSnapshot`].
//!
//! # Module Structure
//!
//! - [`catalog`]: the seven shapes as occupancy masks, rotation, random draws
//! - [`piece`]: the falling piece (kind, mask, color, anchor)
//! - [`board`]: W x H grid with placement checks and row clearing
//! - [`reveal`]: which cells of an attached picture are uncovered
//! - [`session`]: one game - actions, gravity, locking, scoring, game over
//! - [`snapshot`]: render-ready copy of a session
//! - [`rng`]: injectable random source (seeded LCG, scripted replay)
//! - [`config`] / [`error`]: session settings and their validation
//!
//! # Game Rules
//!
//! - Pieces spawn centered on the top row; kind and color are drawn
//!   independently.
//! - Rotation is a single 90° step with no wall kicks; a blocked rotation is
//!   discarded.
//! - Soft drop scores 1 per cell, hard drop 2 per cell and locks at once,
//!   every cleared row 100.
//! - The n-th cleared line of a game uncovers the n-th row of the picture
//!   from the bottom.
//! - The game ends when a freshly promoted piece does not fit; only `Reset`
//!   leaves that state.
//!
//! # Example
//!
//! ```
//! use reveal_tetris_core::{new_session, types::GameAction};
//!
//! let mut session = new_session(10, 20, 500).unwrap();
//! session.attach_image(10, 20).unwrap();
//!
//! session.handle_action(GameAction::MoveRight);
//! session.handle_action(GameAction::HardDrop);
//! assert!(session.score() > 0); // Hard drop awards points
//!
//! // Gravity: one step per elapsed fall interval
//! session.tick(500);
//! ```

pub mod board;
pub mod catalog;
pub mod config;
pub mod error;
pub mod piece;
pub mod reveal;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use reveal_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, RowList};
pub use catalog::{random_shape, shape, Mask, Shape, CATALOG};
pub use config::SessionConfig;
pub use error::ConfigError;
pub use piece::Piece;
pub use reveal::RevealMask;
pub use rng::{RandomSource, ScriptedRng, SimpleRng};
pub use session::{ImageSize, LockEvent, Session, SessionState};
pub use snapshot::SessionSnapshot;

/// Create a session with the default seed and default reset behavior.
pub fn new_session(
    width: u32,
    height: u32,
    fall_interval_ms: u32,
) -> Result<Session, ConfigError> {
    Session::new(SessionConfig::new(width, height, fall_interval_ms))
}
