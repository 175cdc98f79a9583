//! Two-player Pong in the terminal.
//!
//! Player 1 (right paddle) uses the Up/Down arrows, Player 2 (left paddle)
//! uses w/s. First to the win score takes the match; press any key or click
//! to leave the victory screen. Esc or Ctrl-C quits at any time.

mod events;
mod input;
mod terminal;
mod viewport;

use std::cell::Cell;
use std::fs::File;
use std::io::stdout;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    style::ResetColor,
    terminal::{self as term, disable_raw_mode, enable_raw_mode},
};
use game_core::{Config, DisplayError, GameLoop, GameState, KeyBindings, Params, Side};
use glam::Vec2;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use events::TerminalEvents;
use terminal::TerminalRenderer;
use viewport::Viewport;

const TITLE: &str = "Welcome to the PingPong Game!";

#[derive(Parser)]
#[command(name = "pong", about = "Two-player Pong in the terminal")]
struct Cli {
    /// Points needed to win the match
    #[arg(long, default_value_t = Params::WIN_SCORE, value_parser = clap::value_parser!(u32).range(1..))]
    win_score: u32,
    /// Lower bound for the delay between ticks, in seconds
    #[arg(long, default_value_t = Params::MIN_TICK_DELAY, value_parser = parse_min_tick_delay)]
    min_tick_delay: f32,
    /// Where to write logs (the terminal is taken by the game)
    #[arg(long, default_value = "pong.log")]
    log_file: PathBuf,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            win_score: self.win_score,
            min_tick_delay: self.min_tick_delay,
            ..Config::default()
        }
    }
}

/// Tick floor in seconds, finite and within `0.0..=INITIAL_TICK_DELAY`
fn parse_min_tick_delay(s: &str) -> std::result::Result<f32, String> {
    let seconds: f32 = s.parse().map_err(|err| format!("{err}"))?;
    let range = 0.0..=Params::INITIAL_TICK_DELAY;
    if seconds.is_finite() && range.contains(&seconds) {
        Ok(seconds)
    } else {
        Err(format!(
            "{seconds} is not between {} and {} seconds",
            range.start(),
            range.end()
        ))
    }
}

/// Raw mode and alternate screen for as long as it lives
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> std::io::Result<Self> {
        enable_raw_mode()?;
        execute!(
            stdout(),
            term::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide,
            term::SetTitle(TITLE)
        )?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            ResetColor,
            cursor::Show,
            DisableMouseCapture,
            term::LeaveAlternateScreen
        );
        let _ = disable_raw_mode();
    }
}

fn init_tracing(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn play(config: Config) -> Result<std::result::Result<Option<Side>, DisplayError>> {
    let (cols, rows) = term::size().context("failed to read terminal size")?;
    let field = Vec2::new(config.field_width, config.field_height);
    let viewport = Rc::new(Cell::new(Viewport::new(cols, rows, field)));

    let _guard = TerminalGuard::enter().context("failed to prepare terminal")?;
    let mut game = GameLoop::new(
        GameState::new(config),
        KeyBindings::default(),
        TerminalRenderer::new(stdout(), viewport.clone()),
        TerminalEvents::new(viewport),
    );
    Ok(game.run())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_file)?;

    match play(cli.config())? {
        Ok(Some(side)) => println!("Player {} wins!", side.player_number()),
        Ok(None) => println!("No winner"),
        Err(DisplayError::Closed) => {
            info!("game closed by player");
            println!("Game closed");
        }
        Err(err) => {
            error!(error = %err, "display failed");
            return Err(err).context("display failed");
        }
    }
    Ok(())
}
