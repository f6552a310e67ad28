//! Hotseat tic-tac-toe game logic.
//!
//! The turn log is the single source of truth. Boards, the active player,
//! the winner and draw status are derived from it by pure functions, never
//! stored.
//!
//! # Architecture
//!
//! - **Types**: [`Symbol`], [`Square`], [`Board`], [`Position`]
//! - **Log**: [`Turn`], [`TurnLog`] and the invariants it upholds
//! - **Rules**: [`WINNING_COMBINATIONS`] and full-board detection
//! - **Derivation**: [`active_player`], [`derive_board`], [`derive_winner`],
//!   [`is_draw`], [`outcome`]
//! - **Session**: [`GameSession`] applies moves, restarts and renames
//!
//! # Example
//!
//! ```
//! use hotseat_tictactoe::{GameSession, Outcome, PlayerRegistry, Symbol};
//!
//! let mut session = GameSession::new(PlayerRegistry::new("Ada", "Grace"));
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
//!     session.select_cell(row, col)?;
//! }
//!
//! let view = session.view();
//! assert_eq!(view.outcome(), &Outcome::Win(Symbol::X));
//! assert_eq!(view.winner().as_deref(), Some("Ada"));
//! # Ok::<(), hotseat_tictactoe::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod derive;
mod error;
mod outcome;
mod players;
mod position;
mod session;
mod turn;
mod types;

pub mod invariants;
pub mod rules;

pub use derive::{active_player, derive_board, derive_winner, is_draw, outcome};
pub use error::GameError;
pub use outcome::Outcome;
pub use players::{DEFAULT_O_NAME, DEFAULT_X_NAME, PlayerRegistry};
pub use position::Position;
pub use rules::{WINNING_COMBINATIONS, is_full, winning_line, winning_symbol};
pub use session::{GameSession, GameView, Selection};
pub use turn::{Turn, TurnLog};
pub use types::{Board, Square, Symbol};
