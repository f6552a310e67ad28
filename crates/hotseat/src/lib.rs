//! Hotseat - terminal front end for two-player tic-tac-toe.
//!
//! # Architecture
//!
//! - **CLI / Config**: [`Cli`] flags layered over a TOML [`Config`]
//! - **App**: [`App`] owns the game session, cursor and input mode
//! - **UI**: [`ui::draw`] renders an `App` without mutating it
//! - **Terminal**: [`run`] wires crossterm events to the app and redraws

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod terminal;

pub mod ui;

pub use app::{App, Mode};
pub use cli::Cli;
pub use config::{Config, ConfigError, DEFAULT_CONFIG_PATH, LogConfig, PlayersConfig};
pub use input::{digit_to_position, move_cursor};
pub use terminal::{init_tracing, run};
