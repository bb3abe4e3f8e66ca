//! trajview CLI entry point.

mod commands;

use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::EnvFilter;

use commands::{FrameOpts, TimingOpts};

#[derive(Parser)]
#[command(
    name = "trajview",
    version,
    about = "Terminal player for optimization-trajectory frame sequences",
    long_about = "Plays the generated trajectory frame sequence with autoplay, \
                  hover-to-pause and manual scrubbing. Running without a \
                  subcommand starts the player."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play the frame sequence (the default when no subcommand is given)
    Play {
        #[command(flatten)]
        frame_opts: FrameOpts,
        #[command(flatten)]
        timing_opts: TimingOpts,
    },

    /// Print the generated frame sequence
    Frames {
        #[command(flatten)]
        frame_opts: FrameOpts,
        /// Emit the sequence as JSON records
        #[arg(long)]
        json: bool,
        /// Resolve a single frame index instead of the whole sequence
        #[arg(long)]
        index: Option<usize>,
    },

    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Write the default config file if none exists
    Init,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Play {
        frame_opts: FrameOpts::default(),
        timing_opts: TimingOpts::default(),
    });

    match command {
        Command::Play {
            frame_opts,
            timing_opts,
        } => commands::play::handle_play(&frame_opts, &timing_opts),
        Command::Frames {
            frame_opts,
            json,
            index,
        } => commands::frames::handle_frames(&frame_opts, json, index),
        Command::Config { action } => match action {
            ConfigAction::Show => commands::config::handle_show(),
            ConfigAction::Path => commands::config::handle_path(),
            ConfigAction::Init => commands::config::handle_init(),
        },
        Command::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "trajview", &mut io::stdout());
            Ok(())
        }
    }
}
