//! Depth-limited minimax with alpha-beta pruning, used to drive AI play.
//!
//! Yellow maximises, Red minimises. Leaves return `+1`/`-1`/`0` on a
//! terminal result and `0` at the search horizon — this is a purely
//! tactical evaluation with no positional heuristic, transposition table,
//! or opening book (see spec Non-goals).

use crate::board::State;
use crate::color::Color;
use crate::error::Connect4Error;

/// Search depth bound to a coarse difficulty tag, the only externally
/// tunable knob the core exposes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DifficultyLevel {
    Casual,
    Standard,
    Challenger,
    Expert,
}

impl DifficultyLevel {
    /// Plies searched for this difficulty.
    pub fn depth(self) -> u8 {
        match self {
            DifficultyLevel::Casual => 3,
            DifficultyLevel::Standard => 5,
            DifficultyLevel::Challenger => 7,
            DifficultyLevel::Expert => 9,
        }
    }
}

/// Searches `state` to `depth` plies and returns the recommended column
/// together with its score (`+1` Yellow wins, `-1` Red wins, `0` drawn or
/// undetermined at the horizon).
///
/// Fails with `BoardFull` if no legal column exists. On an empty board,
/// returns the centre column without running the search.
pub fn best_move(state: &mut State, depth: u8) -> Result<(Option<usize>, i8), Connect4Error> {
    let legal = state.legal_columns();
    if legal.is_empty() {
        return Err(Connect4Error::BoardFull);
    }

    if state.move_count() == 0 {
        tracing::debug!("connect4 opening shortcut: centre column");
        return Ok((Some(3), 0));
    }

    let (best_column, score) = search_node(state, depth, i8::MIN, i8::MAX);
    let chosen = best_column.or_else(|| legal.first().copied());

    tracing::debug!(?chosen, score, depth, "connect4 best_move");
    Ok((chosen, score))
}

/// Explores every legal column from `state`, mutating and undoing it in
/// place, and returns the best column and its minimax score.
///
/// `depth == 0` means "no further lookahead": a non-terminal result at
/// this horizon scores `0` without recursing. Every recursive call that
/// mutates the board via `drop` is balanced by `undo_last_move` before the
/// next candidate is tried.
fn search_node(state: &mut State, depth: u8, mut alpha: i8, mut beta: i8) -> (Option<usize>, i8) {
    let legal = state.legal_columns();
    if legal.is_empty() {
        return (None, 0);
    }

    let maximizing = state.to_play() == Color::Yellow;
    let mut best_column = None;
    let mut best_score = if maximizing { i8::MIN } else { i8::MAX };

    for column in legal {
        let result = state.drop(column).expect("column was validated as legal");

        let score = if let Some(winner) = result.winner {
            if winner == Color::Yellow { 1 } else { -1 }
        } else if result.draw {
            0
        } else if depth == 0 {
            0
        } else {
            search_node(state, depth - 1, alpha, beta).1
        };

        state.undo_last_move().expect("move was just played by this frame");

        let improves = match best_column {
            None => true,
            Some(_) => {
                if maximizing {
                    score > best_score
                } else {
                    score < best_score
                }
            }
        };
        if improves {
            best_score = score;
            best_column = Some(column);
        }

        if maximizing {
            if best_score > alpha {
                alpha = best_score;
            }
        } else if best_score < beta {
            beta = best_score;
        }

        if beta <= alpha {
            tracing::trace!(column, alpha, beta, "connect4 alpha-beta prune");
            break;
        }
    }

    (best_column, best_score)
}
