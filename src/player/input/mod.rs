//! Input handling for the player.
//!
//! - `keyboard`: playback controls and scrubbing via key presses
//! - `mouse`: hover pause/resume and click/drag scrubbing on the slider

pub mod keyboard;
pub mod mouse;
