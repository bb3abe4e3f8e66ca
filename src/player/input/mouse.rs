//! Mouse input handling for the player.
//!
//! The slider row owns all mouse interaction: hovering it pauses autoplay
//! (leaving resumes), and pressing or dragging on the track scrubs to the
//! frame under the cursor.

use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use tracing::debug;

use crate::player::render::SliderLayout;
use crate::player::state::{InputResult, PlaybackController};
use crate::player::surface::TerminalSurface;

/// Tracks whether the pointer is currently over the slider row, so hover
/// transitions fire exactly once per enter/leave.
#[derive(Debug, Default)]
pub struct HoverTracker {
    hovering: bool,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the pointer row; returns the transition, if any.
    fn update(&mut self, over_slider: bool) -> Option<HoverTransition> {
        match (self.hovering, over_slider) {
            (false, true) => {
                self.hovering = true;
                Some(HoverTransition::Entered)
            }
            (true, false) => {
                self.hovering = false;
                Some(HoverTransition::Left)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HoverTransition {
    Entered,
    Left,
}

/// Handle a mouse event.
pub fn handle_mouse_event(
    mouse: MouseEvent,
    controller: &mut PlaybackController,
    surface: &mut TerminalSurface,
    hover: &mut HoverTracker,
    now: Instant,
) -> InputResult {
    let (cols, rows) = surface.size();
    let layout = SliderLayout::for_size(cols, rows);

    match mouse.kind {
        MouseEventKind::Moved => {
            match hover.update(layout.contains_row(mouse.row)) {
                Some(HoverTransition::Entered) => {
                    debug!("pointer entered slider");
                    controller.pointer_enter();
                    surface.mark_dirty();
                }
                Some(HoverTransition::Left) => {
                    debug!("pointer left slider");
                    controller.pointer_leave(now);
                    surface.mark_dirty();
                }
                None => {}
            }
        }
        MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
            if layout.contains_row(mouse.row) {
                if let Some(index) =
                    layout.index_at_column(mouse.column, controller.sequence().len())
                {
                    controller.scrub(index, surface);
                }
            }
        }
        _ => {}
    }

    InputResult::Continue
}
