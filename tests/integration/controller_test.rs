//! End-to-end playback scenarios through the public library API, driven by
//! a simulated clock.

use std::time::{Duration, Instant};

use trajview::player::{FrameSink, PlaybackController, PlaybackMode};
use trajview::{Config, FrameSequence};

#[derive(Debug, Default)]
struct RecordingSink {
    positions: Vec<usize>,
    images: Vec<String>,
}

impl FrameSink for RecordingSink {
    fn set_position(&mut self, index: usize) {
        self.positions.push(index);
    }
    fn set_image(&mut self, path: &str) {
        self.images.push(path.to_string());
    }
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn full_cycle_renders_every_frame_in_order() {
    let seq = FrameSequence::build("img/", 4, 1).unwrap(); // length 5
    let expected: Vec<String> = (0..seq.len()).map(|i| seq.resolve(i).unwrap()).collect();

    let mut c = PlaybackController::new(seq, ms(100), ms(2500));
    let mut sink = RecordingSink::default();
    let t0 = Instant::now();
    c.begin(t0, &mut sink);

    // Tick until the last index is reached.
    for step in 1..=4u64 {
        c.poll(t0 + ms(step * 100), &mut sink);
    }

    assert_eq!(sink.positions, vec![0, 1, 2, 3, 4]);
    assert_eq!(sink.images, expected);
}

#[test]
fn loop_restarts_at_frame_zero_after_the_dwell() {
    let seq = FrameSequence::build("img/", 3, 0).unwrap();
    let mut c = PlaybackController::new(seq, ms(100), ms(1000));
    let mut sink = RecordingSink::default();
    let t0 = Instant::now();
    c.begin(t0, &mut sink);

    c.poll(t0 + ms(200), &mut sink); // reach last index
    c.poll(t0 + ms(300), &mut sink); // enter the dwell
    c.poll(t0 + ms(1300), &mut sink); // dwell elapses, restart

    assert_eq!(*sink.positions.last().unwrap(), 0);
    assert_eq!(c.mode(), PlaybackMode::Playing);

    // Second cycle plays the same frames again.
    c.poll(t0 + ms(1500), &mut sink);
    assert_eq!(c.position(), 2);
}

#[test]
fn hover_pause_survives_the_dwell_window() {
    let config = Config {
        folder: "img/".to_string(),
        frame_count: 2,
        detail_count: 0,
        tick_interval_ms: 100,
        loop_pause_ms: 500,
    };
    let mut c = PlaybackController::from_config(&config).unwrap();
    let mut sink = RecordingSink::default();
    let t0 = Instant::now();
    c.begin(t0, &mut sink);

    c.poll(t0 + ms(100), &mut sink); // position 1 (last)
    c.poll(t0 + ms(200), &mut sink); // dwell armed

    // Pointer enters the slider during the dwell.
    c.pointer_enter();

    // Long after the dwell would have fired, nothing has moved.
    c.poll(t0 + ms(5000), &mut sink);
    assert_eq!(c.mode(), PlaybackMode::Paused);
    assert_eq!(c.position(), 1);

    // Leaving the slider resumes from where playback stopped.
    c.pointer_leave(t0 + ms(5000));
    assert_eq!(c.mode(), PlaybackMode::Playing);
    c.poll(t0 + ms(5100), &mut sink);
    // Position 1 is the last index, so the resumed tick re-enters the dwell.
    assert_eq!(c.position(), 1);
    c.poll(t0 + ms(5600), &mut sink);
    assert_eq!(c.position(), 0);
}

#[test]
fn scrub_interleaved_with_ticks_applies_last_writer() {
    let seq = FrameSequence::build("img/", 20, 0).unwrap();
    let mut c = PlaybackController::new(seq, ms(100), ms(2500));
    let mut sink = RecordingSink::default();
    let t0 = Instant::now();
    c.begin(t0, &mut sink);

    c.poll(t0 + ms(500), &mut sink);
    assert_eq!(c.position(), 5);

    c.scrub(15, &mut sink);
    c.poll(t0 + ms(600), &mut sink);
    assert_eq!(c.position(), 16);

    c.scrub(2, &mut sink);
    c.poll(t0 + ms(700), &mut sink);
    assert_eq!(c.position(), 3);
}

#[test]
fn reference_config_controller_covers_all_65_positions() {
    let config = Config {
        folder: "img/".to_string(),
        ..Config::default()
    };
    let mut c = PlaybackController::from_config(&config).unwrap();
    assert_eq!(c.sequence().len(), 65);

    let mut sink = RecordingSink::default();
    let t0 = Instant::now();
    c.begin(t0, &mut sink);

    for step in 1..=64u64 {
        c.poll(t0 + ms(step * 100), &mut sink);
    }

    assert_eq!(sink.positions.len(), 65);
    assert_eq!(sink.positions, (0..65).collect::<Vec<_>>());
    // The tick after the last index dwells rather than wrapping.
    c.poll(t0 + ms(6500), &mut sink);
    assert_eq!(c.position(), 64);
    assert_eq!(sink.positions.len(), 65);
}
