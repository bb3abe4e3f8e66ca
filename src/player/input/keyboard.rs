//! Keyboard input handling for the player.
//!
//! Space toggles autoplay, arrow keys scrub one frame at a time, Home/End
//! jump to the sequence boundaries.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::player::state::{InputResult, PlaybackController};
use crate::player::surface::TerminalSurface;

/// Handle a keyboard event.
pub fn handle_key_event(
    key: KeyEvent,
    controller: &mut PlaybackController,
    surface: &mut TerminalSurface,
    now: Instant,
) -> InputResult {
    match key.code {
        // === Quit ===
        KeyCode::Char('q') => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,
        KeyCode::Esc => InputResult::Quit,

        // === Playback controls ===
        KeyCode::Char(' ') => {
            if controller.is_playing() {
                controller.stop();
            } else {
                controller.start(now);
            }
            surface.mark_dirty();
            InputResult::Continue
        }

        // === Scrubbing ===
        KeyCode::Left => {
            let target = controller.position().saturating_sub(1);
            controller.scrub(target, surface);
            InputResult::Continue
        }
        KeyCode::Right => {
            let last = controller.sequence().last_index();
            let target = (controller.position() + 1).min(last);
            controller.scrub(target, surface);
            InputResult::Continue
        }
        KeyCode::Home => {
            controller.scrub(0, surface);
            InputResult::Continue
        }
        KeyCode::End => {
            let last = controller.sequence().last_index();
            controller.scrub(last, surface);
            InputResult::Continue
        }

        _ => InputResult::Continue,
    }
}
