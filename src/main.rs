//! Terminal runner (default binary).
//!
//! Owns the gravity scheduler: the engine has no clock, so this loop ticks it
//! on a deadline that is recomputed from `fall_interval_ms()` after every tick.
//! Rendering is framebuffer based (crossterm only, no widget toolkit).

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::cli::Cli;
use blockfall::core::{Engine, GameSnapshot};
use blockfall::input::{command_for_key, should_quit};
use blockfall::logging;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::GamePhase;

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        logging::init_file_logger(path, cli.log_level)?;
    }

    // Reject bad board sizes before the terminal switches to raw mode.
    let mut engine = Engine::new(cli.config())?;

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, &mut engine));

    // Always try to restore terminal state.
    let restored = term.exit();
    result.and(restored)
}

fn fall_deadline(engine: &Engine) -> Instant {
    Instant::now() + Duration::from_millis(engine.fall_interval_ms() as u64)
}

fn run(term: &mut TerminalRenderer, engine: &mut Engine) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut next_fall = fall_deadline(engine);

    loop {
        engine.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let timeout = next_fall.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = command_for_key(key) {
                        let was_running = engine.phase() == GamePhase::Running;
                        engine.apply(command);
                        // A fresh start or a resume gets a full interval
                        // before the first gravity step.
                        if !was_running && engine.phase() == GamePhase::Running {
                            next_fall = fall_deadline(engine);
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if Instant::now() >= next_fall {
            engine.tick();
            next_fall = fall_deadline(engine);
        }
    }
}
