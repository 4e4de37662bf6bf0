//! Error types for session construction and image attachment.
//!
//! Gameplay itself never fails: rejected moves are ignored and game over is a
//! state. Only caller-supplied dimensions and timings can be invalid.

use crate::types::{MAX_BOARD_DIM, MIN_BOARD_DIM};

/// Invalid configuration passed in by the host
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
pub enum ConfigError {
    #[error("board {width}x{height} is too small (minimum {min}x{min})", min = MIN_BOARD_DIM)]
    BoardTooSmall { width: u32, height: u32 },

    #[error("board {width}x{height} is too large (maximum {max}x{max})", max = MAX_BOARD_DIM)]
    BoardTooLarge { width: u32, height: u32 },

    #[error("fall interval must be greater than zero")]
    ZeroFallInterval,

    #[error("image has no cells ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("image is {width}x{height} cells but the board is {board_width}x{board_height}")]
    ImageSizeMismatch {
        width: u32,
        height: u32,
        board_width: u8,
        board_height: u8,
    },
}
