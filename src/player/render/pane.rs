//! Frame pane rendering.
//!
//! The pane is the image element of the widget: the terminal cannot decode
//! the PNG itself, so it displays the resolved asset path and the frame
//! identity. A missing asset stays silent here, matching the best-effort
//! nature of the widget.

use std::io::{self, Write};

use anyhow::Result;

use crate::sequence::FrameId;

/// Render the frame pane occupying the rows above the separator.
pub fn render_frame_pane(
    stdout: &mut io::Stdout,
    width: u16,
    height: u16,
    frame: Option<FrameId>,
    image_path: &str,
) -> Result<()> {
    const WHITE: &str = "\x1b[97m";
    const DARK_GREY: &str = "\x1b[90m";
    const CYAN: &str = "\x1b[36m";
    const RESET: &str = "\x1b[0m";

    let pane_rows = height.saturating_sub(3);
    if pane_rows == 0 {
        return Ok(());
    }

    let mut output = String::with_capacity((width as usize + 8) * pane_rows as usize);

    // Clear the pane area.
    for row in 0..pane_rows {
        output.push_str(&format!("\x1b[{};1H\x1b[2K", row + 1));
    }

    let center = (pane_rows / 2).max(1);
    if let Some(frame) = frame {
        let label = format!("step {:04} · variant {:04}", frame.base, frame.sub);
        output.push_str(&format!(
            "\x1b[{};{}H{}{}{}",
            center,
            centered_column(width, label.chars().count()),
            CYAN,
            label,
            RESET
        ));
    }

    if center + 2 <= pane_rows {
        let shown_path = truncate_left(image_path, width.saturating_sub(2) as usize);
        output.push_str(&format!(
            "\x1b[{};{}H{}{}{}",
            center + 2,
            centered_column(width, shown_path.chars().count()),
            WHITE,
            shown_path,
            RESET
        ));
    }

    output.push_str(&format!(
        "\x1b[{};{}H{}trajectory playback{}",
        1,
        centered_column(width, 19),
        DARK_GREY,
        RESET
    ));

    write!(stdout, "{}", output)?;
    Ok(())
}

/// 1-based column that centers a string of `len` visible characters.
fn centered_column(width: u16, len: usize) -> usize {
    let width = width as usize;
    if len >= width {
        1
    } else {
        (width - len) / 2 + 1
    }
}

/// Keep the tail of a path that does not fit, prefixed with an ellipsis.
fn truncate_left(s: &str, max_len: usize) -> String {
    let count = s.chars().count();
    if count <= max_len {
        return s.to_string();
    }
    if max_len == 0 {
        return String::new();
    }
    let tail: String = s
        .chars()
        .skip(count - (max_len.saturating_sub(1)))
        .collect();
    format!("…{}", tail)
}
