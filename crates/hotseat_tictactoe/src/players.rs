//! Display names for the two symbols.

use super::types::Symbol;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Name shown for X until renamed.
pub const DEFAULT_X_NAME: &str = "Player 1";
/// Name shown for O until renamed.
pub const DEFAULT_O_NAME: &str = "Player 2";

/// Mapping from symbol to display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRegistry {
    x: String,
    o: String,
}

impl PlayerRegistry {
    /// Creates a registry with the given names.
    pub fn new(x: impl Into<String>, o: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            o: o.into(),
        }
    }

    /// Display name for `symbol`.
    pub fn name(&self, symbol: Symbol) -> &str {
        match symbol {
            Symbol::X => &self.x,
            Symbol::O => &self.o,
        }
    }

    /// Renames one symbol.
    ///
    /// Surrounding whitespace is trimmed. A name that is empty after
    /// trimming is ignored and the previous name kept. Returns whether the
    /// name was applied.
    #[instrument(skip(self))]
    pub fn set_name(&mut self, symbol: Symbol, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            debug!("Ignoring blank player name");
            return false;
        }
        let slot = match symbol {
            Symbol::X => &mut self.x,
            Symbol::O => &mut self.o,
        };
        *slot = name.to_string();
        true
    }
}

impl Default for PlayerRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_X_NAME, DEFAULT_O_NAME)
    }
}
