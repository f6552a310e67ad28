//! Distinct positions invariant: no square is played twice.

use super::Invariant;
use crate::turn::Turn;
use std::collections::HashSet;

/// Invariant: Every turn targets a different square.
///
/// This is what makes the derived board independent of replay order:
/// each cell is written at most once.
pub struct DistinctPositionsInvariant;

impl Invariant<[Turn]> for DistinctPositionsInvariant {
    fn holds(turns: &[Turn]) -> bool {
        let mut seen = HashSet::with_capacity(turns.len());
        turns.iter().all(|turn| seen.insert(turn.position()))
    }

    fn description() -> &'static str {
        "No square is played twice"
    }
}
