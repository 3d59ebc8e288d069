//! Bitboard Connect Four engine: board state, alpha-beta search, and a
//! thin turn-tracking game loop.
//!
//! This crate is the core of a larger workspace's Connect Four backend. It
//! performs no I/O and owns no process-wide state: every operation takes
//! and returns values, and a host (HTTP handlers, tests, a CLI) is
//! responsible for persistence, networking, and session bookkeeping.

#![forbid(unsafe_code)]

mod board;
mod color;
mod error;
mod game_loop;
mod search;

pub use board::{
    has_connect_four, Bitboard, MoveResult, State, BOARD_SIZE, COLUMN_BOTTOM_MASK, COLUMN_MASK,
    COLUMN_TOP_MASK, COLUMN_TOP_SLOT_MASK, HEIGHT, WIDTH,
};
pub use color::Color;
pub use error::Connect4Error;
pub use game_loop::{Connect4Game, GameMode, MoveEvent, TurnOutcome, TurnRole};
pub use search::{best_move, DifficultyLevel};
