//! Reveal Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof, `reveal_tetris::{core,
//! input, term, types}`, plus the command-line handling of the terminal host.

pub mod cli;

pub use reveal_tetris_core as core;
pub use reveal_tetris_input as input;
pub use reveal_tetris_term as term;
pub use reveal_tetris_types as types;
