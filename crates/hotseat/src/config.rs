//! Configuration file loading.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use hotseat_tictactoe::{DEFAULT_O_NAME, DEFAULT_X_NAME, PlayerRegistry, Symbol};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "hotseat.toml";

/// Application configuration.
///
/// Every section and key is optional; missing values fall back to their
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial player names.
    players: PlayersConfig,
    /// Trace log settings.
    log: LogConfig,
}

/// Initial display names.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    /// Name for X.
    x: String,
    /// Name for O.
    o: String,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        Self {
            x: DEFAULT_X_NAME.to_string(),
            o: DEFAULT_O_NAME.to_string(),
        }
    }
}

/// Trace log settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// File the trace log is written to.
    file: PathBuf,
    /// Filter directive used when `RUST_LOG` is unset.
    filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("hotseat.log"),
            filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(x = %config.players.x, o = %config.players.o, "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the config for a run.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
    /// read if present and defaults are used otherwise. Command-line flags
    /// are applied last.
    #[instrument(skip(cli))]
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH)?
            }
            None => {
                debug!("No config file, using defaults");
                Self::default()
            }
        };
        config.apply_overrides(cli);
        Ok(config)
    }

    /// Replaces values given on the command line.
    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(name) = &cli.player_x {
            self.players.x = name.clone();
        }
        if let Some(name) = &cli.player_o {
            self.players.o = name.clone();
        }
        if let Some(file) = &cli.log_file {
            self.log.file = file.clone();
        }
    }

    /// Builds the registry the game starts with.
    ///
    /// Blank names fall back to the defaults.
    pub fn player_registry(&self) -> PlayerRegistry {
        let mut players = PlayerRegistry::default();
        players.set_name(Symbol::X, &self.players.x);
        players.set_name(Symbol::O, &self.players.o);
        players
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn test_from_file_full() {
        let file = write_config(
            r#"
[players]
x = "Ada"
o = "Grace"

[log]
file = "game.log"
filter = "debug"
"#,
        );

        let config = Config::from_file(file.path()).expect("valid config");
        assert_eq!(config.players().x(), "Ada");
        assert_eq!(config.players().o(), "Grace");
        assert_eq!(config.log().file(), &PathBuf::from("game.log"));
        assert_eq!(config.log().filter(), "debug");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let file = write_config("[players]\no = \"Grace\"\n");

        let config = Config::from_file(file.path()).expect("valid config");
        assert_eq!(config.players().x(), DEFAULT_X_NAME);
        assert_eq!(config.players().o(), "Grace");
        assert_eq!(config.log(), &LogConfig::default());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let file = write_config("[players\nx = ");
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let cli = Cli {
            config: Some(dir.path().join("missing.toml")),
            ..Cli::default()
        };
        let err = Config::load(&cli).unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = write_config("[players]\nx = \"Ada\"\no = \"Grace\"\n");
        let cli = Cli {
            config: Some(file.path().to_path_buf()),
            player_o: Some("Barbara".to_string()),
            log_file: Some(PathBuf::from("other.log")),
            ..Cli::default()
        };

        let config = Config::load(&cli).expect("valid config");
        let players = config.player_registry();
        assert_eq!(players.name(Symbol::X), "Ada");
        assert_eq!(players.name(Symbol::O), "Barbara");
        assert_eq!(config.log().file(), &PathBuf::from("other.log"));
    }

    #[test]
    fn test_blank_configured_name_falls_back() {
        let mut config = Config::default();
        config.apply_overrides(&Cli {
            player_x: Some("   ".to_string()),
            ..Cli::default()
        });
        assert_eq!(config.player_registry().name(Symbol::X), DEFAULT_X_NAME);
    }
}
