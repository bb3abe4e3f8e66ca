//! Playback state management.
//!
//! Contains the `PlaybackController` state machine that owns the frame
//! sequence, the current position and the autoplay schedule, plus the
//! `FrameSink` seam it renders through.

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::config::Config;
use crate::sequence::{FrameSequence, SequenceError};

/// Result of processing an input event.
///
/// Returned by input handlers to signal control flow decisions to the
/// player loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue playback/rendering
    Continue,
    /// Exit the player
    Quit,
}

/// Playback mode. Owned exclusively by the controller; external
/// collaborators trigger operations, never mutate this directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackMode {
    Playing,
    Paused,
}

/// Output seam the controller renders frames through.
///
/// Stands in for the two host UI handles of the widget: the slider position
/// and the displayed image source. The terminal surface implements this for
/// real rendering; tests substitute a recording sink.
pub trait FrameSink {
    /// Sync the slider to the current playback position.
    fn set_position(&mut self, index: usize);
    /// Point the image display at the resolved frame path.
    fn set_image(&mut self, path: &str);
}

/// Drives playback of a frame sequence under either timer-driven or
/// user-driven control.
///
/// Scheduling is deadline-based: the controller stores the next tick (and,
/// during the end-of-cycle dwell, the pending resume) as explicit `Instant`
/// fields and the host loop supplies the clock via [`poll`]. This keeps the
/// state machine free of OS timers and lets tests advance simulated time.
/// At most one of the two deadlines is armed at any moment, so there is
/// never more than one advance source.
///
/// [`poll`]: PlaybackController::poll
#[derive(Debug)]
pub struct PlaybackController {
    sequence: FrameSequence,
    tick_interval: Duration,
    loop_pause: Duration,
    position: usize,
    mode: PlaybackMode,
    /// Recurring advance deadline; armed iff Playing and not dwelling.
    next_tick: Option<Instant>,
    /// One-shot end-of-cycle resume deadline. Cleared by `stop()`, so a
    /// pause during the dwell window can never be overridden by the stale
    /// resume firing later.
    resume_at: Option<Instant>,
}

impl PlaybackController {
    /// Create a controller over an already-built sequence.
    ///
    /// Starts in `Paused` at position 0; call [`begin`](Self::begin) to
    /// render the first frame and enter autoplay.
    pub fn new(sequence: FrameSequence, tick_interval: Duration, loop_pause: Duration) -> Self {
        Self {
            sequence,
            tick_interval,
            loop_pause,
            position: 0,
            mode: PlaybackMode::Paused,
            next_tick: None,
            resume_at: None,
        }
    }

    /// Build the sequence from configuration and wrap it in a controller.
    ///
    /// Fails with the underlying configuration error when the configured
    /// sequence would be empty or malformed.
    pub fn from_config(config: &Config) -> Result<Self, SequenceError> {
        let sequence =
            FrameSequence::build(&config.folder, config.frame_count, config.detail_count)?;
        Ok(Self::new(
            sequence,
            Duration::from_millis(config.tick_interval_ms),
            Duration::from_millis(config.loop_pause_ms),
        ))
    }

    /// Render the first frame and start autoplay.
    pub fn begin(&mut self, now: Instant, sink: &mut dyn FrameSink) {
        self.position = 0;
        self.render_frame(0, sink);
        self.start(now);
    }

    /// Transition to `Playing` and arm the tick. Idempotent: calling this
    /// while already playing never arms a second deadline.
    pub fn start(&mut self, now: Instant) {
        if self.mode == PlaybackMode::Playing {
            return;
        }
        debug!("resumed autoplay");
        self.mode = PlaybackMode::Playing;
        self.next_tick = Some(now + self.tick_interval);
    }

    /// Transition to `Paused` and disarm all deadlines. Idempotent.
    ///
    /// Also invalidates a pending end-of-cycle resume: stopping during the
    /// dwell window wins over the scheduled restart.
    pub fn stop(&mut self) {
        if self.mode == PlaybackMode::Paused && self.resume_at.is_none() {
            return;
        }
        debug!("paused autoplay");
        self.mode = PlaybackMode::Paused;
        self.next_tick = None;
        self.resume_at = None;
    }

    /// Manual scrub: jump to `index` and render it. Playback mode is
    /// unchanged; the next tick advances from the new position.
    ///
    /// The input layer clamps slider positions, so an out-of-range index is
    /// a programming error.
    pub fn scrub(&mut self, index: usize, sink: &mut dyn FrameSink) {
        debug_assert!(index < self.sequence.len(), "scrub index out of range");
        self.position = index.min(self.sequence.last_index());
        self.render_frame(self.position, sink);
    }

    /// Pointer entered the slider: pause autoplay.
    pub fn pointer_enter(&mut self) {
        self.stop();
    }

    /// Pointer left the slider: resume autoplay.
    pub fn pointer_leave(&mut self, now: Instant) {
        self.start(now);
    }

    /// Advance the state machine to `now`, firing any elapsed deadlines.
    ///
    /// Tick semantics: at the last index the tick is disarmed and the
    /// one-shot resume is armed `loop_pause` later, producing a visible
    /// dwell at the end of each cycle instead of an abrupt jump; otherwise
    /// the position advances by one (mod length) and is rendered.
    pub fn poll(&mut self, now: Instant, sink: &mut dyn FrameSink) {
        if let Some(at) = self.resume_at {
            if now >= at {
                self.resume_at = None;
                self.position = 0;
                self.render_frame(0, sink);
                self.next_tick = Some(at + self.tick_interval);
            }
        }

        while let Some(at) = self.next_tick {
            if now < at {
                break;
            }
            if self.position == self.sequence.last_index() {
                self.next_tick = None;
                self.resume_at = Some(at + self.loop_pause);
            } else {
                self.position = (self.position + 1) % self.sequence.len();
                self.render_frame(self.position, sink);
                self.next_tick = Some(at + self.tick_interval);
            }
        }
    }

    /// Earliest pending deadline, for sizing the host loop's event timeout.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.next_tick, self.resume_at) {
            (Some(t), Some(r)) => Some(t.min(r)),
            (t, r) => t.or(r),
        }
    }

    /// Current playback position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Current playback mode.
    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    /// True while autoplay is active (including the end-of-cycle dwell).
    pub fn is_playing(&self) -> bool {
        self.mode == PlaybackMode::Playing
    }

    /// The frame sequence being played.
    pub fn sequence(&self) -> &FrameSequence {
        &self.sequence
    }

    /// Resolve and push the frame at `index` to the sink.
    ///
    /// Internal invariants keep `index` in range; violation is an
    /// unrecoverable programming error, not a runtime condition.
    fn render_frame(&self, index: usize, sink: &mut dyn FrameSink) {
        let path = self
            .sequence
            .resolve(index)
            .expect("playback position within sequence bounds");
        trace!(index, path = %path, "render frame");
        sink.set_position(index);
        sink.set_image(&path);
    }
}
