//! The sliding-vehicle puzzle's data model: vehicles, the board they sit
//! on, and the move request/result types the rest of the crate operates
//! over.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a vehicle occupies a row (horizontal) or a column (vertical).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A vehicle occupying `length` consecutive cells starting at `(row, col)`.
///
/// Invariant enforced by [`crate::rules::validate_state`]: the goal vehicle
/// is horizontal, and exactly one vehicle has `goal == true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub row: u8,
    pub col: u8,
    pub length: u8,
    pub orientation: Orientation,
    #[serde(default)]
    pub goal: bool,
}

impl Vehicle {
    /// Every grid cell this vehicle occupies.
    pub fn cells(&self) -> Vec<(u8, u8)> {
        (0..self.length)
            .map(|offset| match self.orientation {
                Orientation::Horizontal => (self.row, self.col + offset),
                Orientation::Vertical => (self.row + offset, self.col),
            })
            .collect()
    }

    /// The 5-tuple used by canonicalisation and equality.
    fn key(&self) -> (&str, Orientation, u8, u8, u8) {
        (&self.id, self.orientation, self.length, self.row, self.col)
    }
}

/// The board's exit cell. `col` must equal `size - 1` (the right edge).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Exit {
    pub row: u8,
    pub col: u8,
}

/// A full snapshot of the puzzle grid.
///
/// `size` is in `2..=12`. Two states are equal iff their size, exit, and
/// multiset of vehicle 5-tuples `(id, orientation, length, row, col)`
/// coincide — list order never matters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleState {
    pub size: u8,
    pub exit: Exit,
    pub vehicles: Vec<Vehicle>,
}

/// A canonical key such that two states are equal as puzzle configurations
/// iff their keys are equal, regardless of vehicle list order.
pub type CanonicalKey = (u8, u8, u8, Vec<(String, Orientation, u8, u8, u8)>);

impl PuzzleState {
    /// Returns the goal vehicle, if the state has exactly one (as any
    /// validated state does).
    pub fn goal_vehicle(&self) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.goal)
    }

    /// Looks up a vehicle by id.
    pub fn vehicle(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    /// The canonical key described in the module docs.
    pub fn canonical_key(&self) -> CanonicalKey {
        let mut vehicles: Vec<(String, Orientation, u8, u8, u8)> = self
            .vehicles
            .iter()
            .map(|v| (v.id.clone(), v.orientation, v.length, v.row, v.col))
            .collect();
        vehicles.sort();
        (self.size, self.exit.row, self.exit.col, vehicles)
    }
}

impl PartialEq for PuzzleState {
    fn eq(&self, other: &Self) -> bool {
        if self.size != other.size || self.exit != other.exit {
            return false;
        }
        let mut mine: Vec<_> = self.vehicles.iter().map(Vehicle::key).collect();
        let mut theirs: Vec<_> = other.vehicles.iter().map(Vehicle::key).collect();
        mine.sort();
        theirs.sort();
        mine == theirs
    }
}

impl Eq for PuzzleState {}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        })
    }
}

/// A request to move `vehicle_id` by a non-zero signed number of `steps`.
/// Positive steps mean right for horizontal vehicles and down for vertical
/// ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRequest {
    pub vehicle_id: String,
    pub steps: i16,
}

/// The outcome of applying (or generating) a move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    pub state: PuzzleState,
    pub completed: bool,
}
