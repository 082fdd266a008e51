//! Infinity Games - terminal entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use infinity_games::{
    App, AppConfig, Cli, Command, draw, enter_screen, render_json, render_text, replay,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;

    init_tracing(&config)?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_tui(config),
        Command::Replay { moves, json } => run_replay(&moves, json),
    }
}

/// Sends tracing output to the configured log file so it does not
/// interfere with the terminal UI.
fn init_tracing(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}

/// Applies a click sequence headlessly and prints the result.
#[instrument]
fn run_replay(moves: &[usize], json: bool) -> Result<()> {
    let engine = replay(moves)?;
    let output = if json {
        render_json(&engine)?
    } else {
        render_text(&engine)
    };
    println!("{}", output);
    Ok(())
}

/// Runs the interactive game until the user quits.
fn run_tui(config: AppConfig) -> Result<()> {
    info!("Starting Infinity Tic-Tac-Toe TUI");

    enable_raw_mode()?;
    let mut terminal = enter_screen(io::stdout(), restore_terminal)?;

    let res = run_app(&mut terminal, App::new(config));

    restore_terminal()?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Leaves raw mode and the alternate screen.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    while app.is_running() {
        terminal.draw(|f| draw(f, &app))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                app.handle_key(key.code, Instant::now());
            }
        } else {
            app.tick(Instant::now());
        }
    }

    info!("Player quit");
    Ok(())
}
