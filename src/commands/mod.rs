//! Subcommand handlers for the trajview binary.

pub mod config;
pub mod frames;
pub mod play;

use trajview::Config;

/// Sequence-shape flags shared by `play` and `frames`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct FrameOpts {
    /// Folder prefix frame paths are resolved against
    #[arg(long)]
    pub folder: Option<String>,

    /// Total number of base frames
    #[arg(long)]
    pub frames: Option<u32>,

    /// Number of auxiliary variants for the first frames
    #[arg(long)]
    pub details: Option<u32>,
}

impl FrameOpts {
    /// Overlay these flags onto the loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(folder) = &self.folder {
            config.folder = folder.clone();
        }
        if let Some(frames) = self.frames {
            config.frame_count = frames;
        }
        if let Some(details) = self.details {
            config.detail_count = details;
        }
    }
}

/// Playback timing flags for `play`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct TimingOpts {
    /// Autoplay advance period in milliseconds
    #[arg(long = "tick-ms")]
    pub tick_ms: Option<u64>,

    /// End-of-cycle pause in milliseconds
    #[arg(long = "pause-ms")]
    pub pause_ms: Option<u64>,
}

impl TimingOpts {
    /// Overlay these flags onto the loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms;
        }
        if let Some(pause_ms) = self.pause_ms {
            config.loop_pause_ms = pause_ms;
        }
    }
}
