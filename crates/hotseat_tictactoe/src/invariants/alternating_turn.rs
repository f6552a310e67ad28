//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::turn::Turn;
use crate::types::Symbol;

/// Invariant: Players alternate turns.
///
/// The first turn belongs to X and no player moves twice in a row.
pub struct AlternatingTurnInvariant;

impl Invariant<[Turn]> for AlternatingTurnInvariant {
    fn holds(turns: &[Turn]) -> bool {
        let Some(first) = turns.first() else {
            return true;
        };

        if first.player() != Symbol::X {
            return false;
        }

        turns
            .windows(2)
            .all(|pair| pair[0].player() != pair[1].player())
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
