#![forbid(unsafe_code)]

mod error;
mod model;
mod rules;
mod solver;
mod successors;

pub use error::ParkingError;
pub use model::{CanonicalKey, Exit, MoveRequest, MoveResult, Orientation, PuzzleState, Vehicle};
pub use rules::{apply_move, is_solved, validate_state};
pub use solver::{random_move, solve, SolveOutcome, MAX_ITER};
pub use successors::{generate_all_stops, slide_stops};
