//! Outcome of a game, derived from its turn log.

use super::types::Symbol;
use serde::{Deserialize, Serialize};

/// Where a game stands.
///
/// `InProgress` is the only non-terminal state. Once a game reaches `Win`
/// or `Draw`, the session refuses further moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves can still be made.
    InProgress,
    /// A symbol completed a line.
    Win(Symbol),
    /// Nine turns without a complete line.
    Draw,
}

impl Outcome {
    /// True once the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Symbol> {
        match self {
            Outcome::Win(symbol) => Some(*symbol),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(symbol) => write!(f, "{} wins", symbol),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
