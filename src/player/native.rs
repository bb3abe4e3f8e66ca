//! Native terminal player loop.
//!
//! Sets up the raw-mode alternate screen with mouse capture, then runs a
//! single-threaded event loop: input events are handled in arrival order,
//! the controller is polled against the wall clock, and the screen is
//! redrawn when display state changed. A scrub racing a tick needs no
//! reconciliation here; whichever applied last wins.

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute};
use tracing::info;

use crate::config::Config;
use crate::player::input::mouse::HoverTracker;
use crate::player::input::{keyboard, mouse};
use crate::player::render;
use crate::player::state::{InputResult, PlaybackController};
use crate::player::surface::TerminalSurface;

/// Event poll timeout when no playback deadline is pending.
const IDLE_POLL: Duration = Duration::from_millis(50);

/// Run the player for the configured frame sequence until the user quits.
pub fn run_player(config: &Config) -> Result<()> {
    let mut controller =
        PlaybackController::from_config(config).context("invalid playback configuration")?;
    info!(
        frames = controller.sequence().len(),
        folder = %controller.sequence().folder(),
        "starting player"
    );

    let (cols, rows) = crossterm::terminal::size().context("failed to query terminal size")?;
    let mut surface = TerminalSurface::new(cols, rows);

    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        cursor::Hide
    )?;

    let result = run_loop(&mut stdout, &mut controller, &mut surface);

    // Restore the terminal even when the loop errored.
    let _ = execute!(
        stdout,
        cursor::Show,
        DisableMouseCapture,
        LeaveAlternateScreen
    );
    let _ = disable_raw_mode();

    result
}

fn run_loop(
    stdout: &mut io::Stdout,
    controller: &mut PlaybackController,
    surface: &mut TerminalSurface,
) -> Result<()> {
    let mut hover = HoverTracker::new();
    controller.begin(Instant::now(), surface);

    loop {
        if surface.take_dirty() {
            render::draw(stdout, surface, controller)?;
        }

        let timeout = controller
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_POLL)
            .min(IDLE_POLL);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    let result =
                        keyboard::handle_key_event(key, controller, surface, Instant::now());
                    if result == InputResult::Quit {
                        info!("player quit by user");
                        return Ok(());
                    }
                }
                Event::Mouse(m) => {
                    mouse::handle_mouse_event(m, controller, surface, &mut hover, Instant::now());
                }
                Event::Resize(cols, rows) => {
                    surface.resize(cols, rows);
                }
                _ => {}
            }
        }

        controller.poll(Instant::now(), surface);
    }
}
