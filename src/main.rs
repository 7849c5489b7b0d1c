//! Terminal runner (default binary).
//!
//! Owns the two input sources the core expects to be serialized: keyboard
//! events from crossterm and the gravity timer. Both are handled on this
//! thread; the event poll times out exactly when the next gravity step is due.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, Level};

use blockfall::core::{GameSession, ScoreBoard};
use blockfall::input::{handle_key_event, is_new_game, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// blockfall - falling-block puzzle in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the piece generator (defaults to the clock)
    #[arg(short, long)]
    seed: Option<u32>,

    /// Gravity interval in milliseconds
    #[arg(short, long)]
    fall_ms: Option<u32>,

    /// Write logs to this file; nothing is logged otherwise
    #[arg(short, long)]
    log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let seed = args.seed.unwrap_or_else(clock_seed);
    let mut scoring = ScoreBoard::new();
    if let Some(ms) = args.fall_ms {
        scoring = scoring.with_fall_interval(ms);
    }
    let mut session = GameSession::with_scoring(seed, scoring);
    info!(seed, fall_ms = session.fall_interval_ms(), "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(score = session.score(), lines = session.lines(), "exiting");
    result
}

/// Stdout belongs to the renderer, so logs only go to a file.
fn init_logging(args: &Args) -> Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, session: &mut GameSession) -> Result<()> {
    session.new_game();
    session.start();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&session.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input, with a timeout until the next gravity step.
        let until_fall = Duration::from_millis(session.time_until_fall_ms() as u64);
        let timeout = until_fall.saturating_sub(last_tick.elapsed());

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if is_new_game(key) {
                        session.new_game();
                        session.start();
                        last_tick = Instant::now();
                    } else if let Some(action) = handle_key_event(key) {
                        session.apply_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity. Only whole milliseconds are consumed so the timer never drifts.
        let elapsed_ms = last_tick.elapsed().as_millis() as u32;
        if elapsed_ms > 0 {
            last_tick += Duration::from_millis(elapsed_ms as u64);
            session.tick(elapsed_ms);
        }
    }
}
