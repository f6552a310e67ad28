//! Turns and the append-only turn log.
//!
//! The turn log is the single source of truth for a game. Boards, the
//! active player and the outcome are all derived from it on demand.

use super::error::GameError;
use super::invariants::{InvariantSet, TurnLogInvariants};
use super::position::Position;
use super::types::Symbol;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// One recorded move: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    position: Position,
    player: Symbol,
}

impl Turn {
    /// Creates a new turn.
    pub fn new(position: Position, player: Symbol) -> Self {
        Self { position, player }
    }

    /// Where the mark was placed.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Who placed it.
    pub fn player(&self) -> Symbol {
        self.player
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} selected {},{}",
            self.player,
            self.position.row(),
            self.position.col()
        )
    }
}

/// Chronological sequence of turns in the current game.
///
/// A log built through [`GameSession`](crate::GameSession) is legal by
/// construction. Logs assembled from outside go through
/// [`TurnLog::from_turns`], which rejects anything legal play could not
/// have produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Turn>", into = "Vec<Turn>")]
pub struct TurnLog {
    turns: Vec<Turn>,
}

impl TurnLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a log from existing turns.
    ///
    /// Fails with [`GameError::InvalidState`] if the turns hold more than
    /// nine entries, reuse a position, or do not alternate starting with X.
    #[instrument(skip(turns), fields(len = turns.len()))]
    pub fn from_turns(turns: Vec<Turn>) -> Result<Self, GameError> {
        TurnLogInvariants::check_all(turns.as_slice()).map_err(|violations| {
            let reason = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%reason, "Rejected turn log");
            GameError::InvalidState { reason }
        })?;
        Ok(Self { turns })
    }

    /// All turns, oldest first.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of turns played.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// True before the first move.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The most recent turn.
    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Iterates turns in chronological order.
    pub fn iter(&self) -> std::slice::Iter<'_, Turn> {
        self.turns.iter()
    }

    /// Appends a turn. Callers must have checked occupancy and turn order.
    pub(crate) fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Empties the log for a new game.
    pub(crate) fn clear(&mut self) {
        self.turns.clear();
    }
}

impl TryFrom<Vec<Turn>> for TurnLog {
    type Error = GameError;

    fn try_from(turns: Vec<Turn>) -> Result<Self, Self::Error> {
        Self::from_turns(turns)
    }
}

impl From<TurnLog> for Vec<Turn> {
    fn from(log: TurnLog) -> Self {
        log.turns
    }
}

impl<'a> IntoIterator for &'a TurnLog {
    type Item = &'a Turn;
    type IntoIter = std::slice::Iter<'a, Turn>;

    fn into_iter(self) -> Self::IntoIter {
        self.turns.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(row: u8, col: u8, player: Symbol) -> Turn {
        Turn::new(Position::at(row, col), player)
    }

    #[test]
    fn test_turn_display_matches_move_log_format() {
        assert_eq!(turn(1, 2, Symbol::O).to_string(), "O selected 1,2");
    }

    #[test]
    fn test_from_turns_accepts_legal_log() {
        let log = TurnLog::from_turns(vec![turn(0, 0, Symbol::X), turn(1, 1, Symbol::O)]);
        assert_eq!(log.map(|l| l.len()), Ok(2));
    }

    #[test]
    fn test_from_turns_rejects_duplicate_position() {
        let result = TurnLog::from_turns(vec![turn(0, 0, Symbol::X), turn(0, 0, Symbol::O)]);
        assert!(matches!(result, Err(GameError::InvalidState { .. })));
    }

    #[test]
    fn test_from_turns_rejects_more_than_nine() {
        let mut turns: Vec<Turn> = Position::ALL
            .iter()
            .enumerate()
            .map(|(i, pos)| {
                let player = if i % 2 == 0 { Symbol::X } else { Symbol::O };
                Turn::new(*pos, player)
            })
            .collect();
        turns.push(turn(0, 0, Symbol::O));

        let err = TurnLog::from_turns(turns).unwrap_err();
        let GameError::InvalidState { reason } = err else {
            panic!("expected InvalidState");
        };
        assert!(reason.contains("at most 9"));
    }

    #[test]
    fn test_from_turns_rejects_o_moving_first() {
        let result = TurnLog::from_turns(vec![turn(0, 0, Symbol::O)]);
        assert!(matches!(result, Err(GameError::InvalidState { .. })));
    }
}
