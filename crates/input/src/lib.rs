//! Terminal input module.
//!
//! Maps `crossterm` key events to host commands: game actions for the
//! session plus the host-only commands (attach a picture, quit). The game
//! has no auto-repeat of its own; held keys arrive as terminal key repeats.

pub mod map;

pub use reveal_tetris_types as types;

pub use map::{handle_key_event, map_key, should_quit, HostCommand};
