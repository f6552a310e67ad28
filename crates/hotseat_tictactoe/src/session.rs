//! A game between two named players.
//!
//! The session owns the turn log and the player registry and is the only
//! thing that mutates them. Everything a front end shows comes from
//! [`GameSession::view`], which derives a fresh snapshot on every call.

use super::derive::{active_player, derive_board, derive_winner, is_draw, outcome};
use super::error::GameError;
use super::invariants::{InvariantSet, TurnLogInvariants};
use super::outcome::Outcome;
use super::players::PlayerRegistry;
use super::position::Position;
use super::rules::winning_line;
use super::turn::{Turn, TurnLog};
use super::types::{Board, Symbol};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, info, instrument};

/// What happened when a square was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The active player's mark was placed.
    Placed(Turn),
    /// The square already holds a mark; nothing changed.
    Occupied(Position),
    /// The game has already ended; nothing changed.
    GameOver(Outcome),
}

/// Turn log plus player names for one hotseat game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSession {
    turns: TurnLog,
    players: PlayerRegistry,
}

impl GameSession {
    /// Creates a session with an empty log.
    pub fn new(players: PlayerRegistry) -> Self {
        Self {
            turns: TurnLog::new(),
            players,
        }
    }

    /// The turn log.
    pub fn turns(&self) -> &TurnLog {
        &self.turns
    }

    /// The player registry.
    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    /// Places the active player's mark at `position`.
    ///
    /// Selecting an occupied square or selecting after the game has ended
    /// leaves the log untouched.
    #[instrument(skip(self), fields(turn = self.turns.len()))]
    pub fn select_square(&mut self, position: Position) -> Selection {
        let current = outcome(&self.turns);
        if current.is_terminal() {
            debug!(%current, "Ignoring selection after game end");
            return Selection::GameOver(current);
        }

        if !derive_board(&self.turns).is_empty(position) {
            debug!("Ignoring selection of occupied square");
            return Selection::Occupied(position);
        }

        let turn = Turn::new(position, active_player(&self.turns));
        self.turns.push(turn);
        info!(%turn, "Turn played");

        debug_assert!(
            TurnLogInvariants::check_all(self.turns.turns()).is_ok(),
            "turn log invariants violated"
        );

        Selection::Placed(turn)
    }

    /// Like [`select_square`](Self::select_square), from raw coordinates.
    #[instrument(skip(self))]
    pub fn select_cell(&mut self, row: u8, col: u8) -> Result<Selection, GameError> {
        let position = Position::new(row, col)?;
        Ok(self.select_square(position))
    }

    /// Clears the log for a rematch. Names are kept.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(turns = self.turns.len(), "Restarting game");
        self.turns.clear();
    }

    /// Renames `symbol` and starts a fresh game.
    ///
    /// The log is cleared even if the name was blank and therefore not
    /// applied.
    #[instrument(skip(self))]
    pub fn rename(&mut self, symbol: Symbol, name: &str) {
        let applied = self.players.set_name(symbol, name);
        info!(applied, "Player renamed, clearing turn log");
        self.turns.clear();
    }

    /// Derives everything the front end displays.
    #[instrument(skip(self))]
    pub fn view(&self) -> GameView {
        let board = derive_board(&self.turns);
        let winner = derive_winner(&board, &self.players);
        let has_draw = is_draw(&self.turns, winner.as_deref());
        let winning_line = winning_line(&board).map(|(_, line)| line);

        GameView {
            active: active_player(&self.turns),
            outcome: outcome(&self.turns),
            board,
            winner,
            has_draw,
            winning_line,
            turns: self.turns.turns().to_vec(),
            players: self.players.clone(),
        }
    }
}

/// Snapshot of a game, derived from its turn log.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct GameView {
    /// Symbol that moves next.
    active: Symbol,
    /// Board derived from the log.
    board: Board,
    /// Winner's display name.
    winner: Option<String>,
    /// Nine turns without a winner.
    has_draw: bool,
    /// Current outcome.
    outcome: Outcome,
    /// The completed line, if the game was won.
    winning_line: Option<[Position; 3]>,
    /// Turns in chronological order.
    turns: Vec<Turn>,
    /// Names at the time of the snapshot.
    players: PlayerRegistry,
}

impl GameView {
    /// True once the game has been won or drawn.
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_terminal()
    }
}
