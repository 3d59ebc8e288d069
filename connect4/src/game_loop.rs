//! Thin turn-tracking orchestration over [`State`].
//!
//! Mirrors the Python `Connect4Game`/`TurnRole` pair this workspace's
//! original service used: a turn counter, a role tag per colour, and a
//! `play_turn` entry point that delegates straight to `State::drop`.

use crate::board::{MoveResult, State};
use crate::color::Color;
use crate::error::Connect4Error;
use serde::{Deserialize, Serialize};

/// Whether a game is refereed between two humans or a human against the AI.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameMode {
    Multiplayer,
    Solo { human_color: Color },
}

/// The participant responsible for a turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnRole {
    Human,
    Ai,
    PlayerOne,
    PlayerTwo,
}

/// The outcome of a single call to [`Connect4Game::play_turn`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub player: Color,
    pub result: MoveResult,
    pub turn_index: u32,
    pub role: Option<TurnRole>,
}

/// The wire-level event a host broadcasts after a move, per the core's
/// external interface contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveEvent {
    #[serde(rename = "type")]
    pub event_type: &'static str,
    pub game_id: String,
    pub player_id: String,
    pub column: usize,
    pub color: u8,
    pub color_name: &'static str,
    pub turn_index: u32,
    pub bit: u64,
    pub winner: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner_name: Option<&'static str>,
    pub draw: bool,
}

impl MoveEvent {
    /// Builds the wire event for a completed turn.
    pub fn from_turn(game_id: impl Into<String>, player_id: impl Into<String>, outcome: &TurnOutcome) -> MoveEvent {
        MoveEvent {
            event_type: "move",
            game_id: game_id.into(),
            player_id: player_id.into(),
            column: outcome.result.column,
            color: outcome.player.index() as u8,
            color_name: outcome.player.name(),
            turn_index: outcome.turn_index,
            bit: outcome.result.bit,
            winner: outcome.result.winner.map(|c| c.index() as u8),
            winner_name: outcome.result.winner.map(Color::name),
            draw: outcome.result.draw,
        }
    }
}

/// A minimal turn-based loop built on top of [`State`].
pub struct Connect4Game {
    state: State,
    mode: GameMode,
    turn_index: u32,
}

impl Connect4Game {
    /// Starts a new game in the given mode.
    pub fn new(mode: GameMode) -> Connect4Game {
        Connect4Game {
            state: State::new(Color::Yellow),
            mode,
            turn_index: 0,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn legal_columns(&self) -> Vec<usize> {
        self.state.legal_columns()
    }

    /// Plays `column` for the colour whose turn it currently is.
    pub fn play_turn(&mut self, column: usize) -> Result<TurnOutcome, Connect4Error> {
        let player = self.state.to_play();
        let result = self.state.drop(column)?;
        self.turn_index += 1;

        tracing::debug!(
            turn = self.turn_index,
            player = %player,
            column,
            "connect4 turn played"
        );

        Ok(TurnOutcome {
            player,
            result,
            turn_index: self.turn_index,
            role: self.role_for_color(player),
        })
    }

    /// True iff the last move produced a winner or a draw.
    pub fn is_over(&self) -> bool {
        self.state
            .last_result()
            .is_some_and(|r| r.winner.is_some() || r.draw)
    }

    /// The winning colour, if the game has ended in a win.
    pub fn winner(&self) -> Option<Color> {
        self.state.last_result().and_then(|r| r.winner)
    }

    fn role_for_color(&self, color: Color) -> Option<TurnRole> {
        match self.mode {
            GameMode::Multiplayer => Some(if color == Color::Yellow {
                TurnRole::PlayerOne
            } else {
                TurnRole::PlayerTwo
            }),
            GameMode::Solo { human_color } => Some(if color == human_color {
                TurnRole::Human
            } else {
                TurnRole::Ai
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplayer_roles_track_yellow_and_red() {
        let mut game = Connect4Game::new(GameMode::Multiplayer);
        let outcome = game.play_turn(3).unwrap();
        assert_eq!(outcome.role, Some(TurnRole::PlayerOne));
        let outcome = game.play_turn(4).unwrap();
        assert_eq!(outcome.role, Some(TurnRole::PlayerTwo));
    }

    #[test]
    fn solo_roles_track_the_chosen_human_colour() {
        let mut game = Connect4Game::new(GameMode::Solo { human_color: Color::Red });
        let outcome = game.play_turn(3).unwrap();
        assert_eq!(outcome.role, Some(TurnRole::Ai));
        let outcome = game.play_turn(4).unwrap();
        assert_eq!(outcome.role, Some(TurnRole::Human));
    }

    #[test]
    fn is_over_reflects_a_completed_win() {
        let mut game = Connect4Game::new(GameMode::Multiplayer);
        for col in [0, 1, 0, 1, 0, 1, 0] {
            game.play_turn(col).unwrap();
        }
        assert!(game.is_over());
        assert_eq!(game.winner(), Some(Color::Yellow));
    }

    #[test]
    fn move_event_serialises_with_wire_field_names() {
        let mut game = Connect4Game::new(GameMode::Multiplayer);
        let outcome = game.play_turn(3).unwrap();
        let event = MoveEvent::from_turn("game-1", "player-1", &outcome);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "move");
        assert_eq!(json["gameId"], "game-1");
        assert_eq!(json["colorName"], "yellow");
        assert_eq!(json["turnIndex"], 1);
    }
}
