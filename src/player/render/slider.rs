//! Slider rendering for the player.
//!
//! The slider is the range control of the widget: it mirrors the playback
//! position and accepts click/drag scrubbing. Geometry is shared with the
//! mouse handler through [`SliderLayout`].

use std::io::{self, Write};

use anyhow::Result;

/// Geometry of the slider row within the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderLayout {
    /// Row the slider track is rendered on (0-indexed).
    pub row: u16,
    /// Column the track starts at.
    pub bar_start: u16,
    /// Track width in characters.
    pub bar_width: usize,
}

impl SliderLayout {
    /// Compute the slider geometry for a terminal of the given size.
    ///
    /// The track sits on the second row from the bottom and leaves room on
    /// the right for the frame counter display.
    pub fn for_size(cols: u16, rows: u16) -> Self {
        Self {
            row: rows.saturating_sub(2),
            bar_start: 1,
            bar_width: (cols as usize).saturating_sub(14).max(1),
        }
    }

    /// True if the given cell lies on the slider row.
    pub fn contains_row(&self, row: u16) -> bool {
        row == self.row
    }

    /// Map a column on the slider row to a frame index, if the column is
    /// within the track. The result is clamped to `[0, len - 1]`, so the
    /// controller never sees an out-of-range scrub.
    pub fn index_at_column(&self, column: u16, len: usize) -> Option<usize> {
        if len == 0 || column < self.bar_start {
            return None;
        }
        let offset = (column - self.bar_start) as usize;
        if offset >= self.bar_width {
            return None;
        }
        let ratio = offset as f64 / (self.bar_width.saturating_sub(1)).max(1) as f64;
        let index = (ratio * (len - 1) as f64).round() as usize;
        Some(index.min(len - 1))
    }
}

/// Build the slider track character array.
///
/// Returns (track_chars, filled_count): positions before the playhead are
/// filled, the playhead itself is marked, the rest is empty track.
pub fn build_slider_chars(bar_width: usize, position: usize, len: usize) -> (Vec<char>, usize) {
    let ratio = if len > 1 {
        (position as f64 / (len - 1) as f64).clamp(0.0, 1.0)
    } else {
        1.0
    };

    let filled = (bar_width.saturating_sub(1) as f64 * ratio).round() as usize;

    let mut bar: Vec<char> = vec!['─'; bar_width];
    for c in bar.iter_mut().take(filled) {
        *c = '━';
    }
    if filled < bar_width {
        bar[filled] = '⏺';
    }

    (bar, filled)
}

/// Render the slider row.
pub fn render_slider_row(
    stdout: &mut io::Stdout,
    layout: &SliderLayout,
    position: usize,
    len: usize,
) -> Result<()> {
    const GREEN: &str = "\x1b[32m";
    const WHITE: &str = "\x1b[97m";
    const DARK_GREY: &str = "\x1b[90m";
    const GREY: &str = "\x1b[37m";
    const RESET: &str = "\x1b[0m";

    let (bar, filled) = build_slider_chars(layout.bar_width, position, len);
    let counter = format!(" {}/{}", position + 1, len);

    let mut output = String::with_capacity(layout.bar_width * 4);
    output.push_str(&format!("\x1b[{};1H", layout.row + 1)); // Move cursor
    output.push(' ');

    output.push_str(GREEN);
    for (i, &c) in bar.iter().enumerate() {
        if i == filled {
            output.push_str(WHITE);
            output.push(c);
            output.push_str(DARK_GREY);
        } else {
            output.push(c);
        }
    }

    output.push_str(GREY);
    output.push_str(&counter);

    // Pad to overwrite leftovers from a previous longer counter.
    let used = 1 + layout.bar_width + counter.len();
    let total = layout.bar_start as usize + layout.bar_width + 13;
    for _ in used..total {
        output.push(' ');
    }

    output.push_str(RESET);
    write!(stdout, "{}", output)?;

    Ok(())
}
