//! Terminal flashcard runner (default binary).
//!
//! Loads the word list, then runs a fixed-timestep loop: render the current
//! screen, wait for a mouse click until the next tick, and advance the flip
//! timer. Uses crossterm for input and the framebuffer renderer in
//! `flashy::term` (no widget library).

mod logging;

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event;
use tracing::info;

use flashy::adapter::Presenter;
use flashy::input::{map_event, InputOutcome};
use flashy::store::{StoreConfig, WordStore};
use flashy::term::{FlashcardView, FrameBuffer, TerminalRenderer, Viewport};
use flashy::types::{ButtonLayout, TICK_MS};

use crate::logging::LogConfig;

fn main() -> Result<()> {
    LogConfig::from_env().init()?;

    let config = StoreConfig::from_env();
    let store = WordStore::new(config);

    // Load before touching the terminal so a fatal error stays readable.
    let presenter = Presenter::start(store, seed_from_clock()).context("cannot start flashcards")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, presenter);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut presenter: Presenter) -> Result<()> {
    let view = FlashcardView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut buttons = ButtonLayout::default();
    let mut dirty = true;

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            buttons = view.render_into(
                presenter.screen(),
                presenter.notice(),
                Viewport::new(w, h),
                &mut fb,
            );
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match map_event(&event::read()?, &buttons) {
                InputOutcome::Quit => {
                    info!(remaining = presenter.words().len(), "window closed");
                    return Ok(());
                }
                InputOutcome::Intent(intent) => {
                    presenter.handle(intent);
                    dirty = true;
                }
                InputOutcome::Resize => {
                    term.invalidate();
                    dirty = true;
                }
                InputOutcome::Ignore => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            dirty |= presenter.tick(TICK_MS);
        }
    }
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
