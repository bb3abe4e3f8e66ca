//! Frame sequence generation for trajectory playback.
//!
//! The sequence is generated from configuration rather than discovered on
//! disk: frames follow the fixed `grid_{base:04}_opt_idx_{sub:04}.png`
//! naming convention produced by the trajectory export. For the first
//! `detail_count` base frames, the auxiliary optimization variants are
//! interleaved before the canonical frame so playback dwells on the early
//! steps where most of the movement happens.

use serde::Serialize;

/// Zero-padding width for both indices in the filename pattern.
const INDEX_PAD: usize = 4;

/// Errors that can occur when building or indexing a frame sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    /// Configured frame count is zero; playback over an empty sequence is
    /// undefined, so construction is rejected outright.
    #[error("invalid configuration: frame count must be at least 1")]
    EmptySequence,

    /// More auxiliary variants than base frames were requested.
    #[error("invalid configuration: detail count {detail_count} exceeds frame count {frame_count}")]
    DetailCountExceedsFrames { detail_count: u32, frame_count: u32 },

    /// A caller asked for an index past the end of the sequence.
    #[error("frame index {index} out of range (sequence length {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// One entry in the generated sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameId {
    /// Primary 0-based position among the base frames.
    pub base: u32,
    /// Auxiliary variant index; 0 is the canonical frame.
    pub sub: u32,
}

impl FrameId {
    /// Render the filename for this frame.
    pub fn filename(&self) -> String {
        format!(
            "grid_{:0pad$}_opt_idx_{:0pad$}.png",
            self.base,
            self.sub,
            pad = INDEX_PAD
        )
    }
}

/// An ordered, immutable sequence of frame identifiers.
///
/// Built once from configuration; order defines both playback order and the
/// slider-position-to-frame mapping. Guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSequence {
    folder: String,
    frames: Vec<FrameId>,
}

impl FrameSequence {
    /// Build the sequence for `frame_count` base frames with `detail_count`
    /// auxiliary variants on the early frames.
    ///
    /// For each base index `i`: if `i < detail_count`, the `detail_count`
    /// auxiliary variants of frame `i` are appended first, then the
    /// canonical (sub-index 0) variant. Net length is
    /// `detail_count² + frame_count`.
    pub fn build(
        folder: &str,
        frame_count: u32,
        detail_count: u32,
    ) -> Result<Self, SequenceError> {
        if frame_count == 0 {
            return Err(SequenceError::EmptySequence);
        }
        if detail_count > frame_count {
            return Err(SequenceError::DetailCountExceedsFrames {
                detail_count,
                frame_count,
            });
        }

        let expected = (detail_count as usize).pow(2) + frame_count as usize;
        let mut frames = Vec::with_capacity(expected);

        for base in 0..frame_count {
            if base < detail_count {
                for sub in 0..detail_count {
                    frames.push(FrameId { base, sub });
                }
            }
            frames.push(FrameId { base, sub: 0 });
        }

        debug_assert_eq!(frames.len(), expected);

        Ok(Self {
            folder: folder.to_string(),
            frames,
        })
    }

    /// Number of frames in the sequence. Always at least 1.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Never true; kept for API completeness.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Index of the last frame.
    pub fn last_index(&self) -> usize {
        self.frames.len() - 1
    }

    /// Folder prefix frames are resolved against.
    pub fn folder(&self) -> &str {
        &self.folder
    }

    /// The frame identifier at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<FrameId> {
        self.frames.get(index).copied()
    }

    /// All frame identifiers in playback order.
    pub fn frames(&self) -> &[FrameId] {
        &self.frames
    }

    /// Resolve the display path for the frame at `index`.
    ///
    /// The folder prefix is joined by plain concatenation; it is expected to
    /// carry its own trailing separator, matching the asset layout the
    /// trajectory export produces.
    pub fn resolve(&self, index: usize) -> Result<String, SequenceError> {
        let frame = self
            .frames
            .get(index)
            .ok_or(SequenceError::IndexOutOfRange {
                index,
                len: self.frames.len(),
            })?;
        Ok(format!("{}{}", self.folder, frame.filename()))
    }
}
