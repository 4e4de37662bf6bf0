//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders
//! session snapshots into a framebuffer of styled glyphs, which the
//! [`TerminalRenderer`] then flushes to the terminal as a diff.
//!
//! Board cells are 2 columns wide by default to keep them roughly square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use reveal_tetris_core as core;
pub use reveal_tetris_types as types;

pub use fb::{FrameBuffer, Glyph, GlyphStyle, Rgb};
pub use game_view::{placeholder_rgb, AnchorY, GameView, Viewport, COVER_RGB, GHOST_RGB};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
