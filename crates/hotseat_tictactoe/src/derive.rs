//! Game state derived from the turn log.
//!
//! Nothing here stores state. Every function recomputes its answer from
//! the log (or from a board derived from it), so there is no cached value
//! to fall out of date.

use super::outcome::Outcome;
use super::players::PlayerRegistry;
use super::rules;
use super::turn::TurnLog;
use super::types::{Board, Square, Symbol};
use tracing::{instrument, trace};

/// Returns the symbol that moves next.
///
/// X on an empty log, otherwise whoever did not make the last turn.
pub fn active_player(turns: &TurnLog) -> Symbol {
    turns
        .last()
        .map_or(Symbol::X, |last| last.player().opponent())
}

/// Replays the log onto an empty board.
///
/// Turns are applied in log order. Positions are never reused, so each
/// cell is written at most once.
#[instrument(skip(turns), fields(len = turns.len()))]
pub fn derive_board(turns: &TurnLog) -> Board {
    let mut board = Board::new();
    for turn in turns {
        trace!(%turn, "Replaying turn");
        board.set(turn.position(), Square::Occupied(turn.player()));
    }
    board
}

/// Display name of the winner, if any line is complete.
///
/// Lines are checked in [`WINNING_COMBINATIONS`](crate::WINNING_COMBINATIONS)
/// order and the first complete one decides.
#[instrument(skip_all)]
pub fn derive_winner(board: &Board, players: &PlayerRegistry) -> Option<String> {
    rules::winning_symbol(board).map(|symbol| players.name(symbol).to_string())
}

/// True iff all nine turns have been played and nobody won.
pub fn is_draw(turns: &TurnLog, winner: Option<&str>) -> bool {
    turns.len() == 9 && winner.is_none()
}

/// Classifies the game as in progress, won or drawn.
#[instrument(skip(turns), fields(len = turns.len()))]
pub fn outcome(turns: &TurnLog) -> Outcome {
    let board = derive_board(turns);
    match rules::winning_symbol(&board) {
        Some(symbol) => Outcome::Win(symbol),
        None if rules::is_full(&board) => Outcome::Draw,
        None => Outcome::InProgress,
    }
}
