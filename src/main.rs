//! Terminal runner (default binary).
//!
//! Owns all I/O: reads keys with crossterm, feeds actions and fixed ticks into
//! the session and draws it with the framebuffer renderer.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event};

use reveal_tetris::cli::{parse_host_args, USAGE};
use reveal_tetris::core::{LockEvent, Session, SessionSnapshot};
use reveal_tetris::input::{map_key, HostCommand};
use reveal_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use reveal_tetris::types::{DEFAULT_SEED, TICK_MS};

/// How long a line-clear message stays in the side panel
const FLASH_MS: u32 = 600;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_host_args(&args)?;
    if config.show_help {
        println!("{}", USAGE);
        return Ok(());
    }

    let seed = config.seed.unwrap_or_else(clock_seed);
    let mut session = Session::with_seed(config.session, seed)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result?;

    println!(
        "score {}  lines {}  seed {}",
        session.score(),
        session.lines_cleared(),
        seed
    );
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(DEFAULT_SEED)
}

fn flash_text(event: &LockEvent) -> Option<&'static str> {
    match event.lines_cleared() {
        0 => None,
        1 => Some("SINGLE +100"),
        2 => Some("DOUBLE +200"),
        3 => Some("TRIPLE +300"),
        _ => Some("TETRIS +400"),
    }
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = SessionSnapshot::default();

    let mut flash: Option<&'static str> = None;
    let mut flash_left_ms = 0u32;

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into_with_status(&snap, flash, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match map_key(key) {
                    Some(HostCommand::Quit) => return Ok(()),
                    Some(HostCommand::AttachImage) => {
                        // Stand-in picture scaled to the board.
                        let (w, h) = (session.width() as u32, session.height() as u32);
                        session.attach_image(w, h)?;
                    }
                    Some(HostCommand::Game(action)) => {
                        session.handle_action(action);
                    }
                    None => {}
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick(TICK_MS);
            flash_left_ms = flash_left_ms.saturating_sub(TICK_MS);
            if flash_left_ms == 0 {
                flash = None;
            }
        }

        if let Some(text) = session.take_last_event().as_ref().and_then(flash_text) {
            flash = Some(text);
            flash_left_ms = FLASH_MS;
        }
    }
}
