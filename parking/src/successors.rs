//! The "slide-to-stop" successor generator: the move-generation primitive
//! the BFS solver expands on.
//!
//! Single-tile steps create an enormous, mostly-redundant fan-out. Sliding
//! each vehicle as far as it can go in one direction — a "stop position" —
//! preserves optimality in the "one relocation = one move" cost model
//! while cutting the branching factor substantially.

use crate::model::{MoveResult, Orientation, PuzzleState, Vehicle};
use crate::rules::{is_solved, occupancy_grid};

/// Every state reachable by sliding `vehicle_id` as far as possible in a
/// single direction, without passing through another vehicle or leaving
/// the board. Yields up to two states (one per direction); a direction
/// that cannot advance at all contributes none.
pub fn slide_stops(state: &PuzzleState, vehicle_id: &str) -> Vec<PuzzleState> {
    let Some(vehicle) = state.vehicle(vehicle_id) else { return Vec::new() };
    let board = occupancy_grid(&state.vehicles, state.size, Some(vehicle_id));
    let size = state.size;

    let mut stops = Vec::with_capacity(2);
    match vehicle.orientation {
        Orientation::Horizontal => {
            let mut c = vehicle.col;
            while c > 0 && board[vehicle.row as usize][(c - 1) as usize].is_none() {
                c -= 1;
            }
            if c != vehicle.col {
                stops.push(with_position(state, vehicle, vehicle.row, c));
            }

            let mut c = vehicle.col;
            while c + vehicle.length < size && board[vehicle.row as usize][(c + vehicle.length) as usize].is_none() {
                c += 1;
            }
            if c != vehicle.col {
                stops.push(with_position(state, vehicle, vehicle.row, c));
            }
        }
        Orientation::Vertical => {
            let mut r = vehicle.row;
            while r > 0 && board[(r - 1) as usize][vehicle.col as usize].is_none() {
                r -= 1;
            }
            if r != vehicle.row {
                stops.push(with_position(state, vehicle, r, vehicle.col));
            }

            let mut r = vehicle.row;
            while r + vehicle.length < size && board[(r + vehicle.length) as usize][vehicle.col as usize].is_none() {
                r += 1;
            }
            if r != vehicle.row {
                stops.push(with_position(state, vehicle, r, vehicle.col));
            }
        }
    }
    stops
}

fn with_position(state: &PuzzleState, vehicle: &Vehicle, row: u8, col: u8) -> PuzzleState {
    let vehicles = state
        .vehicles
        .iter()
        .map(|v| {
            if v.id == vehicle.id {
                Vehicle { row, col, ..v.clone() }
            } else {
                v.clone()
            }
        })
        .collect();
    PuzzleState { size: state.size, exit: state.exit, vehicles }
}

/// Expands every vehicle's `slide_stops`, in vehicle-list order, labelling
/// each resulting state with whether it solves the puzzle.
pub fn generate_all_stops(state: &PuzzleState) -> Vec<MoveResult> {
    state
        .vehicles
        .iter()
        .flat_map(|vehicle| slide_stops(state, &vehicle.id))
        .map(|next| {
            let completed = is_solved(&next);
            MoveResult { state: next, completed }
        })
        .collect()
}
