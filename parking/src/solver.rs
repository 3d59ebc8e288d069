//! Breadth-first optimal solver over stop-position successors.
//!
//! States are canonicalised into a hashable key (see
//! [`PuzzleState::canonical_key`]) and explored states live in a flat
//! arena; parent pointers are arena indices rather than references, so
//! path reconstruction is an index walk with no reference cycles and O(1)
//! rollback (see spec Design Notes).

use crate::model::{MoveRequest, MoveResult, PuzzleState};
use crate::rules::{apply_move, is_solved};
use crate::successors::generate_all_stops;
use rand::Rng;
use std::collections::{HashMap, VecDeque};
use std::time::Instant;

/// Hard safety cap on BFS expansions; a solve that exceeds this returns a
/// non-completed result rather than running forever on a pathological
/// input.
pub const MAX_ITER: u32 = 1_000_000;

/// The result of [`solve`].
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub state: PuzzleState,
    pub completed: bool,
    pub moves: u32,
    pub path: Vec<PuzzleState>,
    pub elapsed_ms: Option<f64>,
}

struct Node {
    state: PuzzleState,
    parent: Option<usize>,
    depth: u32,
}

/// Breadth-first search for the minimum number of stop-position
/// relocations ("moves") needed to solve `state`.
///
/// Returns a non-completed outcome (`moves = 0`, empty `path`) if the
/// queue drains without reaching a solved state, or if the `MAX_ITER`
/// expansion cap is hit first.
pub fn solve(state: &PuzzleState) -> SolveOutcome {
    let start_time = Instant::now();
    tracing::debug!(size = state.size, vehicles = state.vehicles.len(), "parking solve starting");

    if is_solved(state) {
        return SolveOutcome {
            state: state.clone(),
            completed: true,
            moves: 0,
            path: vec![state.clone()],
            elapsed_ms: Some(elapsed_ms(start_time)),
        };
    }

    let mut arena = vec![Node { state: state.clone(), parent: None, depth: 0 }];
    let mut visited = HashMap::new();
    visited.insert(state.canonical_key(), 0u32);
    let mut queue = VecDeque::from([0usize]);
    let mut solved_index = None;
    let mut iterations: u32 = 0;

    'bfs: while let Some(current) = queue.pop_front() {
        iterations += 1;
        if iterations > MAX_ITER {
            tracing::warn!(iterations, "parking solve hit the expansion safety cap");
            break;
        }

        let depth = arena[current].depth;
        let current_state = arena[current].state.clone();

        for mv in generate_all_stops(&current_state) {
            let child_key = mv.state.canonical_key();
            let g = depth + 1;

            if let Some(&best) = visited.get(&child_key) {
                if g >= best {
                    continue;
                }
            }
            visited.insert(child_key, g);

            let child_index = arena.len();
            arena.push(Node { state: mv.state.clone(), parent: Some(current), depth: g });

            if mv.completed {
                solved_index = Some(child_index);
                break 'bfs;
            }
            queue.push_back(child_index);
        }
    }

    let elapsed_ms = Some(elapsed_ms(start_time));
    match solved_index {
        Some(index) => {
            let moves = arena[index].depth;
            let path = reconstruct_path(&arena, index);
            tracing::debug!(moves, states_expanded = arena.len(), "parking solve completed");
            SolveOutcome {
                state: arena[index].state.clone(),
                completed: true,
                moves,
                path,
                elapsed_ms,
            }
        }
        None => {
            tracing::debug!(states_expanded = arena.len(), "parking solve exhausted without a solution");
            SolveOutcome {
                state: state.clone(),
                completed: false,
                moves: 0,
                path: Vec::new(),
                elapsed_ms,
            }
        }
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

fn reconstruct_path(arena: &[Node], mut index: usize) -> Vec<PuzzleState> {
    let mut path = Vec::new();
    loop {
        path.push(arena[index].state.clone());
        match arena[index].parent {
            Some(parent) => index = parent,
            None => break,
        }
    }
    path.reverse();
    path
}

/// How far the goal vehicle is from the exit, counted in cells beyond its
/// leading edge. Positive values mean the goal hasn't reached the exit
/// yet along its own axis.
fn exit_distance(state: &PuzzleState) -> Option<i16> {
    let goal = state.goal_vehicle()?;
    Some(match goal.orientation {
        crate::model::Orientation::Horizontal => {
            state.exit.col as i16 - (goal.col as i16 + goal.length as i16 - 1)
        }
        crate::model::Orientation::Vertical => {
            state.exit.row as i16 - (goal.row as i16 + goal.length as i16 - 1)
        }
    })
}

/// A small, non-search helper move: advance the goal vehicle toward the
/// exit by its current exit distance if that move succeeds, otherwise
/// attempt a single-tile move of a uniformly-chosen random non-goal
/// vehicle. Returns the state unchanged (`completed = false`) if neither
/// succeeds.
pub fn random_move(state: &PuzzleState) -> MoveResult {
    if let Some(distance) = exit_distance(state) {
        if distance != 0 {
            let goal_id = state.goal_vehicle().expect("exit_distance returned Some").id.clone();
            if let Ok(result) = apply_move(state, &MoveRequest { vehicle_id: goal_id, steps: distance }) {
                return result;
            }
        }
    }

    let candidates: Vec<&str> = state
        .vehicles
        .iter()
        .filter(|v| !v.goal)
        .map(|v| v.id.as_str())
        .collect();
    if candidates.is_empty() {
        return MoveResult { state: state.clone(), completed: false };
    }

    let mut rng = rand::rng();
    let chosen = candidates[rng.random_range(0..candidates.len())].to_string();
    let steps = if rng.random_bool(0.5) { 1 } else { -1 };

    apply_move(state, &MoveRequest { vehicle_id: chosen, steps })
        .unwrap_or(MoveResult { state: state.clone(), completed: false })
}
