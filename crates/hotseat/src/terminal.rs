//! Terminal setup, logging and the event loop.

use crate::app::App;
use crate::config::LogConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

/// Sends traces to the configured log file.
///
/// The terminal belongs to the UI, so nothing is written to stdout.
/// `RUST_LOG` takes precedence over the configured filter.
pub fn init_tracing(config: &LogConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.file())
        .with_context(|| format!("Failed to create log file {}", config.file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Runs the game until the user quits, restoring the terminal afterwards.
#[instrument(skip(app))]
pub fn run(mut app: App) -> Result<()> {
    info!("Starting hotseat TUI");

    enable_raw_mode()?;
    let mut terminal = restore_on_error(setup_terminal(), restore_terminal)?;

    let res = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(turns = app.session().turns().len(), "Exiting");
    res
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Best-effort teardown for when setup fails partway.
fn restore_terminal() {
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

fn restore_on_error<T>(result: Result<T>, restore: impl FnOnce()) -> Result<T> {
    if let Err(err) = &result {
        error!(error = ?err, "Terminal setup failed");
        restore();
    }
    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| crate::ui::draw(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_setup_restores_terminal() {
        let mut restored = false;
        let result: Result<()> = restore_on_error(Err(anyhow::anyhow!("no tty")), || {
            restored = true
        });
        assert!(result.is_err());
        assert!(restored);
    }

    #[test]
    fn test_successful_setup_keeps_terminal() {
        let mut restored = false;
        let result = restore_on_error(Ok(7), || restored = true);
        assert_eq!(result.expect("setup succeeded"), 7);
        assert!(!restored);
    }
}
