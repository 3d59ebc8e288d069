//! Errors raised by the sliding-vehicle puzzle core.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors that can occur while validating or mutating a [`crate::model::PuzzleState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParkingError {
    /// The puzzle layout fails a global invariant (overlap, bad exit, ...).
    InvalidPuzzle { reason: String },
    /// A requested move is structurally sound but illegal in this state.
    InvalidMove { reason: String },
}

impl Display for ParkingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ParkingError::InvalidPuzzle { reason } => write!(f, "invalid puzzle: {reason}"),
            ParkingError::InvalidMove { reason } => write!(f, "invalid move: {reason}"),
        }
    }
}

impl Error for ParkingError {}
