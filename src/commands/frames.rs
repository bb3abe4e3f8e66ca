//! `frames` subcommand handler.
//!
//! Prints the generated frame sequence, either as resolved paths (one per
//! line) or as JSON records; `--index` resolves a single frame instead.

use anyhow::Result;
use serde::Serialize;

use trajview::{Config, FrameSequence};

use super::FrameOpts;

/// One JSON record of the sequence listing.
#[derive(Debug, Serialize)]
struct FrameRecord {
    index: usize,
    base: u32,
    sub: u32,
    path: String,
}

/// Print the generated sequence (or one resolved frame).
pub fn handle_frames(frame_opts: &FrameOpts, json: bool, index: Option<usize>) -> Result<()> {
    let mut config = Config::load()?;
    frame_opts.apply(&mut config);

    let sequence =
        FrameSequence::build(&config.folder, config.frame_count, config.detail_count)?;

    if let Some(index) = index {
        // Out-of-range surfaces as the typed sequence error.
        let path = sequence.resolve(index)?;
        if json {
            // resolve() succeeded, so the frame exists.
            let frame = sequence.get(index).expect("resolved frame exists");
            let record = FrameRecord {
                index,
                base: frame.base,
                sub: frame.sub,
                path,
            };
            println!("{}", serde_json::to_string_pretty(&record)?);
        } else {
            println!("{}", path);
        }
        return Ok(());
    }

    if json {
        let records: Vec<FrameRecord> = collect_records(&sequence);
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for i in 0..sequence.len() {
            // Index is always in range here.
            println!("{}", sequence.resolve(i)?);
        }
    }

    Ok(())
}

fn collect_records(sequence: &FrameSequence) -> Vec<FrameRecord> {
    sequence
        .frames()
        .iter()
        .enumerate()
        .map(|(index, frame)| FrameRecord {
            index,
            base: frame.base,
            sub: frame.sub,
            path: format!("{}{}", sequence.folder(), frame.filename()),
        })
        .collect()
}
