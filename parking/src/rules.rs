//! Invariant validation and move application for a [`PuzzleState`].

use crate::error::ParkingError;
use crate::model::{MoveRequest, MoveResult, Orientation, PuzzleState, Vehicle};

fn invalid_puzzle(reason: impl Into<String>) -> ParkingError {
    ParkingError::InvalidPuzzle { reason: reason.into() }
}

fn invalid_move(reason: impl Into<String>) -> ParkingError {
    ParkingError::InvalidMove { reason: reason.into() }
}

/// Builds a `size x size` occupancy grid mapping each occupied cell to the
/// id of the vehicle sitting in it, optionally ignoring one vehicle (used
/// by move application and successor generation to exclude the vehicle
/// currently being slid). Assumes `vehicles` has already passed
/// [`validate_state`] and therefore cannot overlap.
pub(crate) fn occupancy_grid(
    vehicles: &[Vehicle],
    size: u8,
    exclude_id: Option<&str>,
) -> Vec<Vec<Option<String>>> {
    let size = size as usize;
    let mut grid = vec![vec![None; size]; size];
    for vehicle in vehicles {
        if Some(vehicle.id.as_str()) == exclude_id {
            continue;
        }
        for (row, col) in vehicle.cells() {
            grid[row as usize][col as usize] = Some(vehicle.id.clone());
        }
    }
    grid
}

/// Validates every global invariant a puzzle layout must hold:
///
/// - `size >= 2`.
/// - the exit is on the board and on the right edge (`col == size - 1`).
/// - no two vehicles share an id.
/// - no vehicle extends past the right or bottom edge.
/// - the goal vehicle (there must be exactly one) is horizontal.
/// - no two vehicles overlap any cell.
pub fn validate_state(state: &PuzzleState) -> Result<(), ParkingError> {
    if state.size < 2 {
        return Err(invalid_puzzle("board size must be at least 2"));
    }
    if state.exit.row >= state.size || state.exit.col >= state.size {
        return Err(invalid_puzzle("exit is outside the board bounds"));
    }
    if state.exit.col != state.size - 1 {
        return Err(invalid_puzzle("exit column must be on the right edge of the board"));
    }

    let size = state.size as usize;
    let mut grid: Vec<Vec<Option<&str>>> = vec![vec![None; size]; size];
    let mut seen_ids = std::collections::HashSet::new();
    let mut goal_count = 0;

    for vehicle in &state.vehicles {
        if !seen_ids.insert(vehicle.id.as_str()) {
            return Err(invalid_puzzle(format!("duplicate vehicle id '{}'", vehicle.id)));
        }

        match vehicle.orientation {
            Orientation::Horizontal if vehicle.col + vehicle.length > state.size => {
                return Err(invalid_puzzle(format!(
                    "vehicle {} extends beyond the board horizontally",
                    vehicle.id
                )));
            }
            Orientation::Vertical if vehicle.row + vehicle.length > state.size => {
                return Err(invalid_puzzle(format!(
                    "vehicle {} extends beyond the board vertically",
                    vehicle.id
                )));
            }
            _ => {}
        }

        if vehicle.goal {
            goal_count += 1;
            if vehicle.orientation != Orientation::Horizontal {
                return Err(invalid_puzzle("goal vehicle must be horizontal"));
            }
        }

        for (row, col) in vehicle.cells() {
            if row as usize >= size || col as usize >= size {
                return Err(invalid_puzzle(format!(
                    "vehicle {} occupies a cell outside the board",
                    vehicle.id
                )));
            }
            let cell = &mut grid[row as usize][col as usize];
            if cell.is_some() {
                return Err(invalid_puzzle("overlapping vehicles in puzzle state"));
            }
            *cell = Some(vehicle.id.as_str());
        }
    }

    if goal_count != 1 {
        return Err(invalid_puzzle(format!(
            "puzzle must contain exactly one goal vehicle, found {goal_count}"
        )));
    }

    Ok(())
}

/// Advances `vehicle_id` one tile at a time, `steps.abs()` times, in the
/// direction given by `steps`'s sign. Fails (leaving `state` conceptually
/// unchanged, since a fresh value is returned only on success) if the
/// vehicle doesn't exist, any intermediate step leaves the board, or any
/// intermediate step enters a cell occupied by another vehicle.
pub fn apply_move(state: &PuzzleState, request: &MoveRequest) -> Result<MoveResult, ParkingError> {
    let mut target = state
        .vehicle(&request.vehicle_id)
        .cloned()
        .ok_or_else(|| invalid_move(format!("vehicle '{}' does not exist", request.vehicle_id)))?;

    if request.steps == 0 {
        return Err(invalid_move("steps must be non-zero"));
    }

    let board = occupancy_grid(&state.vehicles, state.size, Some(target.id.as_str()));
    let direction: i16 = if request.steps > 0 { 1 } else { -1 };
    let size = state.size as i16;

    let mut row = target.row as i16;
    let mut col = target.col as i16;

    for _ in 0..request.steps.abs() {
        let (next_row, next_col) = match target.orientation {
            Orientation::Horizontal => {
                let next_col = if direction > 0 { col + target.length as i16 } else { col - 1 };
                (row, next_col)
            }
            Orientation::Vertical => {
                let next_row = if direction > 0 { row + target.length as i16 } else { row - 1 };
                (next_row, col)
            }
        };

        if next_row < 0 || next_row >= size || next_col < 0 || next_col >= size {
            return Err(invalid_move("move would push the vehicle off the board"));
        }
        if board[next_row as usize][next_col as usize].is_some() {
            return Err(invalid_move("another vehicle blocks the path"));
        }

        match target.orientation {
            Orientation::Horizontal => col += direction,
            Orientation::Vertical => row += direction,
        }
    }

    target.row = row as u8;
    target.col = col as u8;

    let mut vehicles = state.vehicles.clone();
    let slot = vehicles.iter_mut().find(|v| v.id == target.id).expect("vehicle looked up above");
    *slot = target;

    let new_state = PuzzleState { size: state.size, exit: state.exit, vehicles };
    let completed = is_solved(&new_state);

    tracing::trace!(vehicle = %request.vehicle_id, steps = request.steps, completed, "parking apply_move");

    Ok(MoveResult { state: new_state, completed })
}

/// True iff the goal vehicle is horizontal and its rightmost cell coincides
/// with the exit.
pub fn is_solved(state: &PuzzleState) -> bool {
    let Some(goal) = state.goal_vehicle() else { return false };
    if goal.orientation != Orientation::Horizontal {
        return false;
    }
    let tail_col = goal.col + goal.length - 1;
    goal.row == state.exit.row && tail_col == state.exit.col
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Exit;

    fn vehicle(id: &str, row: u8, col: u8, length: u8, orientation: Orientation, goal: bool) -> Vehicle {
        Vehicle { id: id.to_string(), row, col, length, orientation, goal }
    }

    fn default_layout() -> PuzzleState {
        PuzzleState {
            size: 6,
            exit: Exit { row: 2, col: 5 },
            vehicles: vec![
                vehicle("C", 0, 0, 3, Orientation::Vertical, false),
                vehicle("A", 0, 3, 2, Orientation::Vertical, false),
                vehicle("B", 0, 4, 3, Orientation::Vertical, false),
                vehicle("D", 3, 2, 2, Orientation::Horizontal, false),
                vehicle("E", 4, 1, 3, Orientation::Horizontal, false),
                vehicle("F", 3, 5, 2, Orientation::Vertical, false),
                vehicle("G", 5, 0, 2, Orientation::Horizontal, false),
                vehicle("H", 5, 2, 2, Orientation::Horizontal, false),
                vehicle("X", 2, 1, 2, Orientation::Horizontal, true),
            ],
        }
    }

    #[test]
    fn default_layout_is_valid() {
        assert!(validate_state(&default_layout()).is_ok());
    }

    #[test]
    fn exit_must_be_on_the_right_edge() {
        let mut state = default_layout();
        state.exit.col = 3;
        assert!(matches!(validate_state(&state), Err(ParkingError::InvalidPuzzle { .. })));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut state = default_layout();
        state.vehicles[0].id = "A".to_string();
        assert!(matches!(validate_state(&state), Err(ParkingError::InvalidPuzzle { .. })));
    }

    #[test]
    fn overlapping_vehicles_are_rejected() {
        let mut state = default_layout();
        state.vehicles[0].row = 2;
        state.vehicles[0].col = 1;
        state.vehicles[0].orientation = Orientation::Horizontal;
        assert!(matches!(validate_state(&state), Err(ParkingError::InvalidPuzzle { .. })));
    }

    #[test]
    fn vertical_goal_vehicle_is_rejected() {
        let mut state = default_layout();
        for v in &mut state.vehicles {
            if v.goal {
                v.orientation = Orientation::Vertical;
            }
        }
        assert!(matches!(validate_state(&state), Err(ParkingError::InvalidPuzzle { .. })));
    }

    #[test]
    fn apply_move_rejects_a_move_that_runs_off_the_board() {
        let state = default_layout();
        // D sits at row 3, cols 2..3; three steps left would push it past
        // the left edge.
        let request = MoveRequest { vehicle_id: "D".to_string(), steps: -3 };
        let err = apply_move(&state, &request).unwrap_err();
        assert!(matches!(err, ParkingError::InvalidMove { .. }));
    }

    #[test]
    fn apply_move_rejects_a_move_blocked_by_another_vehicle() {
        let state = default_layout();
        // H sits at row 5, cols 2..3; G sits at row 5, cols 0..1, directly
        // in the path of a two-step leftward slide.
        let request = MoveRequest { vehicle_id: "H".to_string(), steps: -2 };
        let err = apply_move(&state, &request).unwrap_err();
        assert!(matches!(err, ParkingError::InvalidMove { .. }));
    }

    #[test]
    fn apply_move_rejects_unknown_vehicle() {
        let state = default_layout();
        let request = MoveRequest { vehicle_id: "Z".to_string(), steps: 1 };
        assert!(matches!(apply_move(&state, &request), Err(ParkingError::InvalidMove { .. })));
    }

    #[test]
    fn sliding_the_goal_vehicle_onto_the_exit_completes_the_puzzle() {
        let mut state = default_layout();
        for request in [
            MoveRequest { vehicle_id: "B".to_string(), steps: 1 },
            MoveRequest { vehicle_id: "B".to_string(), steps: 1 },
            MoveRequest { vehicle_id: "B".to_string(), steps: 1 },
        ] {
            let result = apply_move(&state, &request).unwrap();
            state = result.state;
        }
        for request in [
            MoveRequest { vehicle_id: "X".to_string(), steps: 1 },
            MoveRequest { vehicle_id: "X".to_string(), steps: 1 },
            MoveRequest { vehicle_id: "X".to_string(), steps: 1 },
        ] {
            let result = apply_move(&state, &request).unwrap();
            state = result.state;
        }
        assert!(is_solved(&state));
    }
}
