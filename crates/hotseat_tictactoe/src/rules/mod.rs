//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules know nothing about
//! turn logs or player names; the deriver composes them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_COMBINATIONS, winning_line, winning_symbol};
