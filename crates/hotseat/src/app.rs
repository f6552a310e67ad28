//! Application state and key handling.

use crate::input::{digit_to_position, move_cursor};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hotseat_tictactoe::{GameSession, PlayerRegistry, Position, Selection, Symbol};
use tracing::{debug, info, instrument};

/// What keystrokes currently do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Keys move the cursor and play squares.
    Playing,
    /// Keys edit a player's name.
    Editing {
        /// Whose name is being edited.
        symbol: Symbol,
        /// Name typed so far.
        buffer: String,
    },
}

/// Main application state.
///
/// The key handler is the only writer; the renderer reads it after every
/// event.
#[derive(Debug, Clone)]
pub struct App {
    session: GameSession,
    cursor: Position,
    mode: Mode,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(players: PlayerRegistry) -> Self {
        Self {
            session: GameSession::new(players),
            cursor: Position::ALL[4],
            mode: Mode::Playing,
            status_message: String::new(),
            should_quit: false,
        }
    }

    /// The game being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Highlighted square.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Current input mode.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            info!("Interrupted");
            self.should_quit = true;
            return;
        }

        match self.mode {
            Mode::Playing => self.handle_playing_key(key.code),
            Mode::Editing { .. } => self.handle_editing_key(key.code),
        }
    }

    fn handle_playing_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.select(self.cursor),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(position) = digit_to_position(c) {
                    self.cursor = position;
                    self.select(position);
                }
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('x') => self.start_editing(Symbol::X),
            KeyCode::Char('o') => self.start_editing(Symbol::O),
            _ => {}
        }
    }

    fn handle_editing_key(&mut self, code: KeyCode) {
        let Mode::Editing { symbol, buffer } = &mut self.mode else {
            return;
        };
        match code {
            KeyCode::Char(c) if !c.is_control() => buffer.push(c),
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Enter => {
                let (symbol, name) = (*symbol, std::mem::take(buffer));
                self.mode = Mode::Playing;
                self.session.rename(symbol, &name);
                self.status_message = format!(
                    "{} is now {}. New game started.",
                    symbol,
                    self.session.players().name(symbol)
                );
            }
            KeyCode::Esc => {
                debug!("Rename cancelled");
                self.mode = Mode::Playing;
                self.status_message.clear();
            }
            _ => {}
        }
    }

    fn start_editing(&mut self, symbol: Symbol) {
        debug!(%symbol, "Editing player name");
        self.mode = Mode::Editing {
            symbol,
            buffer: self.session.players().name(symbol).to_string(),
        };
        self.status_message = "Enter to save, Esc to cancel".to_string();
    }

    fn select(&mut self, position: Position) {
        self.status_message = match self.session.select_square(position) {
            Selection::Placed(turn) => format!(
                "{} played {}",
                self.session.players().name(turn.player()),
                position.label()
            ),
            Selection::Occupied(_) => format!("{} is already taken", position.label()),
            Selection::GameOver(outcome) => match outcome.winner() {
                Some(symbol) => format!(
                    "{} already won. Press r for a rematch.",
                    self.session.players().name(symbol)
                ),
                None => "Game over. Press r for a rematch.".to_string(),
            },
        };
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.session.restart();
        self.cursor = Position::ALL[4];
        self.status_message = "New game.".to_string();
    }
}
