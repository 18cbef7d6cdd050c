//! Terminal runner (default binary).
//!
//! A thin driver around [`Game`]: it samples a monotonic clock every frame,
//! forwards key presses and prints the board as plain text. Set
//! `BLOCKFALL_LOG=<path>` to write tracing output (filtered by `RUST_LOG`)
//! to a file.
//!
//! Usage: `blockfall [SEED] [--no-ghost]`

mod view;

use std::fs::File;
use std::io::{self, Stdout, Write};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, execute, queue, style::Print};
use tracing_subscriber::EnvFilter;

use blockfall::core::{Game, GameConfig, MonotonicTimer};
use blockfall::input::{handle_key_event, should_quit, Command};

const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let config = parse_args(std::env::args().skip(1))?;
    init_tracing()?;
    let mut game = Game::new(config)?;

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = run(&mut game, &mut stdout);

    // Always try to restore terminal state.
    let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    result
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<GameConfig> {
    let mut config = GameConfig::default();
    for arg in args {
        match arg.as_str() {
            "--no-ghost" => config = config.with_ghost(false),
            seed if seed.chars().all(|c| c.is_ascii_digit()) => {
                let seed = seed.parse().with_context(|| format!("seed {seed} out of range"))?;
                config = config.with_seed(seed);
            }
            other => bail!("unrecognized argument `{other}` (usage: blockfall [SEED] [--no-ghost])"),
        }
    }
    Ok(config)
}

fn init_tracing() -> Result<()> {
    let Some(path) = std::env::var_os("BLOCKFALL_LOG") else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("cannot open log file {}", path.to_string_lossy()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(game: &mut Game, out: &mut Stdout) -> Result<()> {
    let mut timer = MonotonicTimer::new();

    loop {
        queue!(
            out,
            cursor::MoveTo(0, 0),
            terminal::Clear(ClearType::All),
            Print(view::render(game))
        )?;
        out.flush()?;

        if event::poll(FRAME)? {
            if let Event::Key(key) = event::read()? {
                // Terminal auto-repeat arrives as Press on most platforms.
                if key.kind != KeyEventKind::Release {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        Some(Command::Play(action)) => {
                            game.apply_action(action);
                        }
                        Some(Command::ToggleGhost) => {
                            game.toggle_ghost_piece();
                        }
                        Some(Command::Restart) => game.reset(),
                        None => {}
                    }
                }
            }
        }

        game.tick(&mut timer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn parses_seed_and_ghost_flag() {
        let config = parse_args(args(&["42", "--no-ghost"])).unwrap();
        assert_eq!(config.seed, 42);
        assert!(!config.ghost_enabled);
    }

    #[test]
    fn defaults_without_arguments() {
        assert_eq!(parse_args(args(&[])).unwrap(), GameConfig::default());
    }

    #[test]
    fn rejects_unknown_arguments() {
        assert!(parse_args(args(&["--fast"])).is_err());
        assert!(parse_args(args(&["99999999999"])).is_err());
    }
}
