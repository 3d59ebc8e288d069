//! Errors raised by the Connect Four core.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors that can occur while operating on a [`crate::State`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connect4Error {
    /// A column index outside `[0, board::WIDTH)` was requested.
    IllegalColumn { column: usize },
    /// The requested column's top slot is already occupied.
    ColumnFull { column: usize },
    /// `undo_last_move` was called with no move recorded to undo.
    NothingToUndo,
    /// `best_move` was asked to search a board with no legal moves.
    BoardFull,
}

impl Display for Connect4Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Connect4Error::IllegalColumn { column } => {
                write!(f, "column {column} is outside the board")
            }
            Connect4Error::ColumnFull { column } => {
                write!(f, "column {column} is full")
            }
            Connect4Error::NothingToUndo => write!(f, "no move to undo"),
            Connect4Error::BoardFull => write!(f, "board is full, no legal move exists"),
        }
    }
}

impl Error for Connect4Error {}
