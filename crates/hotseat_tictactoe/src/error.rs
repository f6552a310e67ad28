//! Error types for the tic-tac-toe core.

use derive_more::Display;

/// Error raised when input falls outside what a game can represent.
///
/// Selecting an occupied square or moving after the game has ended is
/// not an error; see [`Selection`](crate::Selection).
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GameError {
    /// Coordinates outside the 3x3 grid.
    #[display("Position ({}, {}) is outside the 3x3 grid", row, col)]
    OutOfBounds {
        /// Requested row.
        row: u8,
        /// Requested column.
        col: u8,
    },

    /// A turn log that could not have been produced by legal play.
    #[display("Invalid state: {}", reason)]
    InvalidState {
        /// Which invariants were violated.
        reason: String,
    },
}

impl std::error::Error for GameError {}
