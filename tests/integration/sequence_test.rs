//! Tests for frame sequence generation against the documented construction
//! rule: for frame count N and detail count K, the sequence holds K groups
//! of K auxiliary frames each followed by one canonical frame, then N - K
//! canonical-only frames, for a total of K*K + N entries.

use trajview::{FrameSequence, SequenceError};

#[test]
fn reference_configuration_yields_65_frames() {
    let seq = FrameSequence::build("img/", 40, 5).unwrap();
    assert_eq!(seq.len(), 65);
}

#[test]
fn structure_holds_for_a_range_of_shapes() {
    for (n, k) in [(1u32, 1u32), (5, 5), (10, 2), (40, 5), (100, 0)] {
        let seq = FrameSequence::build("", n, k).unwrap();
        let frames = seq.frames();
        assert_eq!(frames.len(), (k as usize).pow(2) + n as usize);

        let mut pos = 0;
        // First K groups: K auxiliary variants then the canonical frame.
        for base in 0..k {
            for sub in 0..k {
                assert_eq!(frames[pos].base, base, "n={} k={} pos={}", n, k, pos);
                assert_eq!(frames[pos].sub, sub, "n={} k={} pos={}", n, k, pos);
                pos += 1;
            }
            assert_eq!(frames[pos].base, base);
            assert_eq!(frames[pos].sub, 0);
            pos += 1;
        }
        // Remaining N - K entries are canonical-only.
        for base in k..n {
            assert_eq!(frames[pos].base, base);
            assert_eq!(frames[pos].sub, 0);
            pos += 1;
        }
        assert_eq!(pos, frames.len());
    }
}

#[test]
fn detail_prefix_length_is_k_squared_plus_k() {
    let seq = FrameSequence::build("", 40, 5).unwrap();
    // The first 30 entries cover base indices 0..5 only.
    for frame in &seq.frames()[..30] {
        assert!(frame.base < 5);
    }
    // Entry 30 starts the canonical-only tail.
    assert_eq!(seq.frames()[30].base, 5);
    assert_eq!(seq.frames()[30].sub, 0);
}

#[test]
fn resolved_paths_follow_naming_convention() {
    let seq = FrameSequence::build("resources/images/optim/traj_evolution/", 40, 5).unwrap();
    assert_eq!(
        seq.resolve(0).unwrap(),
        "resources/images/optim/traj_evolution/grid_0000_opt_idx_0000.png"
    );
    assert_eq!(
        seq.resolve(1).unwrap(),
        "resources/images/optim/traj_evolution/grid_0000_opt_idx_0001.png"
    );
    // Last frame is the canonical variant of the last base index.
    assert_eq!(
        seq.resolve(64).unwrap(),
        "resources/images/optim/traj_evolution/grid_0039_opt_idx_0000.png"
    );
}

#[test]
fn invalid_shapes_are_rejected() {
    assert_eq!(
        FrameSequence::build("", 0, 0),
        Err(SequenceError::EmptySequence)
    );
    assert!(matches!(
        FrameSequence::build("", 4, 5),
        Err(SequenceError::DetailCountExceedsFrames { .. })
    ));
}

#[test]
fn out_of_range_resolution_is_reported_with_bounds() {
    let seq = FrameSequence::build("", 40, 5).unwrap();
    let err = seq.resolve(65).unwrap_err();
    assert_eq!(err, SequenceError::IndexOutOfRange { index: 65, len: 65 });
    assert!(err.to_string().contains("65"));
}
