//! Bounded length invariant: a game never has more than nine turns.

use super::Invariant;
use crate::turn::Turn;

/// Invariant: At most nine turns.
pub struct BoundedLengthInvariant;

impl Invariant<[Turn]> for BoundedLengthInvariant {
    fn holds(turns: &[Turn]) -> bool {
        turns.len() <= 9
    }

    fn description() -> &'static str {
        "Turn log holds at most 9 turns"
    }
}
