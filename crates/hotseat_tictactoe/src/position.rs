//! Board coordinates for tic-tac-toe moves.

use super::error::GameError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the 3x3 grid, addressed by `(row, col)`.
///
/// Both coordinates are always in `0..3`; out-of-grid positions cannot be
/// constructed. Rows run top to bottom and columns left to right.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Position {
    row: u8,
    col: u8,
}

const LABELS: [&str; 9] = [
    "Top-left",
    "Top-center",
    "Top-right",
    "Middle-left",
    "Center",
    "Middle-right",
    "Bottom-left",
    "Bottom-center",
    "Bottom-right",
];

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::at(0, 0),
        Position::at(0, 1),
        Position::at(0, 2),
        Position::at(1, 0),
        Position::at(1, 1),
        Position::at(1, 2),
        Position::at(2, 0),
        Position::at(2, 1),
        Position::at(2, 2),
    ];

    /// Unchecked constructor for compile-time tables.
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Creates a position, rejecting coordinates outside the grid.
    #[instrument]
    pub fn new(row: u8, col: u8) -> Result<Self, GameError> {
        if row < 3 && col < 3 {
            Ok(Self { row, col })
        } else {
            Err(GameError::OutOfBounds { row, col })
        }
    }

    /// Row index (0 = top).
    pub fn row(self) -> u8 {
        self.row
    }

    /// Column index (0 = left).
    pub fn col(self) -> u8 {
        self.col
    }

    /// Converts to a row-major board index (0-8).
    pub fn to_index(self) -> usize {
        usize::from(self.row) * 3 + usize::from(self.col)
    }

    /// Creates a position from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable name of the cell.
    pub fn label(self) -> &'static str {
        LABELS[self.to_index()]
    }
}

impl TryFrom<(u8, u8)> for Position {
    type Error = GameError;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}

impl From<Position> for (u8, u8) {
    fn from(pos: Position) -> Self {
        (pos.row, pos.col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
