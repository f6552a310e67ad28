//! Command-line interface for hotseat.

use clap::Parser;
use std::path::PathBuf;

/// Hotseat - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "hotseat")]
#[command(about = "Two-player tic-tac-toe on one keyboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./hotseat.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Display name for X, overriding the config file
    #[arg(long)]
    pub player_x: Option<String>,

    /// Display name for O, overriding the config file
    #[arg(long)]
    pub player_o: Option<String>,

    /// Where to write the trace log, overriding the config file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_args() {
        let cli = Cli::try_parse_from(["hotseat"]).expect("parses");
        assert!(cli.config.is_none());
        assert!(cli.player_x.is_none());
    }

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::try_parse_from([
            "hotseat",
            "-c",
            "game.toml",
            "--player-x",
            "Ada",
            "--player-o",
            "Grace",
            "--log-file",
            "/tmp/hotseat.log",
        ])
        .expect("parses");
        assert_eq!(cli.config, Some(PathBuf::from("game.toml")));
        assert_eq!(cli.player_x.as_deref(), Some("Ada"));
        assert_eq!(cli.player_o.as_deref(), Some("Grace"));
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/hotseat.log")));
    }
}
