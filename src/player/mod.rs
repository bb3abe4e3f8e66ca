//! Trajectory frame player.
//!
//! Plays the generated frame sequence in the terminal with autoplay,
//! hover-to-pause and manual scrubbing.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `state`: the `PlaybackController` state machine and the `FrameSink`
//!   seam it renders through
//! - `surface`: terminal-backed `FrameSink` holding display state
//! - `input/`: keyboard and mouse handling (hover pause, click-to-scrub)
//! - `render/`: slider, frame pane and status bar drawing
//! - `native`: terminal setup and the event loop
//!
//! # Usage
//!
//! ```no_run
//! use trajview::config::Config;
//! use trajview::player::run_player;
//!
//! let config = Config::default();
//! run_player(&config).unwrap();
//! ```

pub(crate) mod input;
mod native;
pub mod render;
pub mod state;
pub mod surface;

pub use native::run_player;
pub use state::{FrameSink, InputResult, PlaybackController, PlaybackMode};
pub use surface::TerminalSurface;
