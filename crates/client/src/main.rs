//! Terminal life tracker.
//!
//! Composition root: reads configuration from the environment (and `.env`),
//! installs logging on stderr, restores the table and then drives a
//! [`Session`] from one command per stdin line. Stdout carries only the
//! rendered table.
mod command;
mod render;

use std::io::{self, BufRead, Write};
use std::time::Instant;

use anyhow::Result;
use command::Command;
use tracker_core::{GameState, PcgRng};
use tracker_runtime::{FileStateRepository, HoldGesture, Intent, RuntimeConfig, Session};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = RuntimeConfig::from_env();
    let mut session = open_session(&config);

    tracing::info!("Persistence: {}", config.enable_persistence);

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", render::render(session.state()))?;
    stdout.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        match command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => writeln!(stdout, "{}", command::HELP)?,
            Ok(Command::Show) => write!(stdout, "{}", render::render(session.state()))?,
            Ok(Command::StartOver) => {
                session.start_over(&config.game);
                write!(stdout, "{}", render::render(session.state()))?;
            }
            Ok(Command::Intent(intent)) => {
                session.handle(intent);
                write!(stdout, "{}", render::render(session.state()))?;
            }
            Ok(Command::Hold {
                direction,
                player,
                held,
            }) => {
                let pressed_at = Instant::now();
                let Some(released_at) = pressed_at.checked_add(held) else {
                    writeln!(stdout, "error: hold of {held:?} is too long")?;
                    stdout.flush()?;
                    continue;
                };
                let mut gesture = HoldGesture::new(direction);
                gesture.press(pressed_at);
                let delta = gesture
                    .poll(released_at)
                    .delta()
                    .saturating_add(gesture.release(released_at).delta());
                if delta != 0 {
                    session.handle(Intent::AdjustLife { player, delta });
                }
                write!(stdout, "{}", render::render(session.state()))?;
            }
            Err(error) => writeln!(stdout, "error: {error:#}")?,
        }
        stdout.flush()?;
    }

    tracing::info!("Session ended");
    Ok(())
}

fn open_session(config: &RuntimeConfig) -> Session<PcgRng> {
    let rng = PcgRng::new(config.seed());

    if config.enable_persistence {
        let dir = config.data_dir();
        match FileStateRepository::new(&dir) {
            Ok(repository) => {
                tracing::info!("Snapshot file: {}", repository.path().display());
                return Session::restore(Box::new(repository), &config.game, rng);
            }
            Err(error) => {
                tracing::warn!(
                    "Cannot use save directory {}: {}. Continuing without persistence.",
                    dir.display(),
                    error
                );
            }
        }
    }

    Session::new(GameState::from_config(&config.game), rng)
}
