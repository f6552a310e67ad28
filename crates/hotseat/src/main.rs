//! Hotseat - two-player tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use hotseat::{App, Cli, Config};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(&cli)?;
    hotseat::init_tracing(config.log())?;

    info!(
        x = %config.players().x(),
        o = %config.players().o(),
        "Configuration resolved"
    );

    hotseat::run(App::new(config.player_registry()))
}
