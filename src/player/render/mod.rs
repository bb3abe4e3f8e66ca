//! UI rendering for the player.
//!
//! Draws the three regions of the widget: the frame pane (image element),
//! the slider row (range control) and the status bar.

mod pane;
mod slider;
mod status;

use std::io::{self, Write};

use anyhow::Result;

pub use slider::{build_slider_chars, SliderLayout};

use crate::player::state::PlaybackController;
use crate::player::surface::TerminalSurface;

/// Draw the full player screen from the current surface and controller
/// state.
pub fn draw(
    stdout: &mut io::Stdout,
    surface: &TerminalSurface,
    controller: &PlaybackController,
) -> Result<()> {
    let (cols, rows) = surface.size();
    let layout = SliderLayout::for_size(cols, rows);
    let sequence = controller.sequence();

    pane::render_frame_pane(
        stdout,
        cols,
        rows,
        sequence.get(surface.position()),
        surface.image_path(),
    )?;
    if rows >= 3 {
        status::render_separator_line(stdout, cols, rows - 3)?;
    }
    slider::render_slider_row(stdout, &layout, surface.position(), sequence.len())?;
    if rows >= 1 {
        status::render_status_bar(stdout, cols, rows - 1, !controller.is_playing())?;
    }
    stdout.flush()?;

    Ok(())
}
