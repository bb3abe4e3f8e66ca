//! Status bar rendering for the player.
//!
//! Displays the playback state icon and keyboard shortcuts.

use std::io::{self, Write};

use anyhow::Result;

/// Render a separator line.
pub fn render_separator_line(stdout: &mut io::Stdout, width: u16, row: u16) -> Result<()> {
    // Build line as string to minimize syscalls
    let mut output = String::with_capacity(width as usize + 20);
    output.push_str(&format!("\x1b[{};1H\x1b[90m", row + 1)); // Move + dark gray
    for _ in 0..width {
        output.push('─');
    }
    output.push_str("\x1b[0m"); // Reset
    write!(stdout, "{}", output)?;
    Ok(())
}

/// Render the status/controls bar.
pub fn render_status_bar(stdout: &mut io::Stdout, width: u16, row: u16, paused: bool) -> Result<()> {
    const WHITE: &str = "\x1b[97m";
    const DARK_GREY: &str = "\x1b[90m";
    const CYAN: &str = "\x1b[36m";
    const RESET: &str = "\x1b[0m";

    let mut output = String::with_capacity(256);
    let mut visible_len: usize = 0; // Track visible width manually

    output.push_str(&format!("\x1b[{};1H", row + 1));

    output.push_str(WHITE);
    output.push(' ');
    visible_len += 1;

    // State icon (▶ and ⏸ are double-width unicode)
    let state = if paused { "⏸  " } else { "▶  " };
    output.push_str(state);
    visible_len += 4; // icon (2) + 2 spaces

    let play_action = if paused { ":play " } else { ":pause " };
    output.push_str(DARK_GREY);
    output.push_str("│ ");
    visible_len += 2;
    output.push_str(CYAN);
    output.push_str("space");
    visible_len += 5;
    output.push_str(DARK_GREY);
    output.push_str(play_action);
    visible_len += play_action.len();
    output.push_str(CYAN);
    output.push_str("←/→");
    visible_len += 3;
    output.push_str(DARK_GREY);
    output.push_str(":step ");
    visible_len += 6;
    output.push_str(CYAN);
    output.push_str("home/end");
    visible_len += 8;
    output.push_str(DARK_GREY);
    output.push_str(":jump ");
    visible_len += 6;
    output.push_str(CYAN);
    output.push_str("hover");
    visible_len += 5;
    output.push_str(DARK_GREY);
    output.push_str(":hold ");
    visible_len += 6;
    output.push_str(CYAN);
    output.push('q');
    visible_len += 1;
    output.push_str(DARK_GREY);
    output.push_str(":quit");
    visible_len += 5;

    // Pad to full width to overwrite any leftover content
    let padding = (width as usize).saturating_sub(visible_len);
    for _ in 0..padding {
        output.push(' ');
    }

    output.push_str(RESET);
    write!(stdout, "{}", output)?;

    Ok(())
}
