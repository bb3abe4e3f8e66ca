//! Terminal-backed frame sink.
//!
//! Holds the two pieces of display state the controller drives (slider
//! position and image path) plus terminal dimensions and a dirty flag the
//! player loop uses to decide when to redraw.

use crate::player::state::FrameSink;

/// Display state for the terminal player.
#[derive(Debug)]
pub struct TerminalSurface {
    cols: u16,
    rows: u16,
    position: usize,
    image_path: String,
    dirty: bool,
}

impl TerminalSurface {
    /// Create a surface for a terminal of the given size.
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            position: 0,
            image_path: String::new(),
            dirty: true,
        }
    }

    /// Terminal size as (cols, rows).
    pub fn size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    /// Handle a terminal resize event.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.dirty = true;
    }

    /// Slider position last pushed by the controller.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Image path last pushed by the controller.
    pub fn image_path(&self) -> &str {
        &self.image_path
    }

    /// Request a redraw for state changes that bypass the sink (pause
    /// toggles, resizes already set it directly).
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Consume the dirty flag, returning whether a redraw is due.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl FrameSink for TerminalSurface {
    fn set_position(&mut self, index: usize) {
        self.position = index;
        self.dirty = true;
    }

    fn set_image(&mut self, path: &str) {
        if self.image_path != path {
            self.image_path.clear();
            self.image_path.push_str(path);
        }
        self.dirty = true;
    }
}
