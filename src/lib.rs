//! trajview — terminal player for optimization-trajectory frame sequences.
//!
//! The trajectory export produces an ordered set of PNG frames named
//! `grid_{base:04}_opt_idx_{sub:04}.png`. This crate generates that
//! sequence from configuration, binds it to a slider rendered in the
//! terminal, and auto-plays through it with hover-to-pause and manual
//! scrubbing, dwelling briefly at the end of each cycle before looping.
//!
//! Modules:
//! - [`sequence`]: frame sequence generation and path resolution
//! - [`player`]: the playback state machine and the terminal player
//! - [`config`]: TOML configuration loading and saving

pub mod config;
pub mod player;
pub mod sequence;

pub use config::Config;
pub use sequence::{FrameId, FrameSequence, SequenceError};
