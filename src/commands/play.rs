//! `play` subcommand handler.

use anyhow::{bail, Result};

use trajview::player::run_player;
use trajview::Config;

use super::{FrameOpts, TimingOpts};

/// Load configuration, overlay CLI flags, and run the player.
pub fn handle_play(frame_opts: &FrameOpts, timing_opts: &TimingOpts) -> Result<()> {
    let mut config = Config::load()?;
    frame_opts.apply(&mut config);
    timing_opts.apply(&mut config);

    if !atty::is(atty::Stream::Stdout) {
        bail!("refusing to start the player: stdout is not a terminal");
    }

    run_player(&config)
}
