//! The two-valued colour tag that owns a Connect Four bitboard.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One of the two players. Yellow moves first by convention.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Yellow,
    Red,
}

impl Color {
    /// Index of this colour's bitboard in `State::boards`.
    #[inline(always)]
    pub fn index(self) -> usize {
        match self {
            Color::Yellow => 0,
            Color::Red => 1,
        }
    }

    /// The opposing colour.
    #[inline(always)]
    pub fn other(self) -> Color {
        match self {
            Color::Yellow => Color::Red,
            Color::Red => Color::Yellow,
        }
    }

    /// The lower-case wire name used in JSON payloads (`"yellow"`/`"red"`).
    pub fn name(self) -> &'static str {
        match self {
            Color::Yellow => "yellow",
            Color::Red => "red",
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_is_involutive() {
        assert_eq!(Color::Yellow.other(), Color::Red);
        assert_eq!(Color::Red.other(), Color::Yellow);
        assert_eq!(Color::Yellow.other().other(), Color::Yellow);
    }

    #[test]
    fn names_match_wire_format() {
        assert_eq!(Color::Yellow.name(), "yellow");
        assert_eq!(Color::Red.name(), "red");
    }
}
