//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Square, Symbol};
use tracing::instrument;

/// The eight lines that win the game.
///
/// Order matters: rows top to bottom, then columns left to right, then the
/// two diagonals. Win detection reports the first complete line in this
/// order.
pub static WINNING_COMBINATIONS: [[Position; 3]; 8] = [
    // Rows
    [Position::at(0, 0), Position::at(0, 1), Position::at(0, 2)],
    [Position::at(1, 0), Position::at(1, 1), Position::at(1, 2)],
    [Position::at(2, 0), Position::at(2, 1), Position::at(2, 2)],
    // Columns
    [Position::at(0, 0), Position::at(1, 0), Position::at(2, 0)],
    [Position::at(0, 1), Position::at(1, 1), Position::at(2, 1)],
    [Position::at(0, 2), Position::at(1, 2), Position::at(2, 2)],
    // Diagonals
    [Position::at(0, 0), Position::at(1, 1), Position::at(2, 2)],
    [Position::at(0, 2), Position::at(1, 1), Position::at(2, 0)],
];

/// Returns the first complete line and its owner.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Symbol, [Position; 3])> {
    WINNING_COMBINATIONS.iter().find_map(|&line| {
        let [a, b, c] = line;
        let first = board.get(a);
        match first {
            Square::Occupied(symbol) if board.get(b) == first && board.get(c) == first => {
                Some((symbol, line))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(symbol)` if a symbol holds a full row, column or
/// diagonal, `None` otherwise.
pub fn winning_symbol(board: &Board) -> Option<Symbol> {
    winning_line(board).map(|(symbol, _)| symbol)
}
