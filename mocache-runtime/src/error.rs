//! Playback error types

/// Errors surfaced while applying clip frames to a rig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlaybackError {
    /// Rig target count differs from the frame's object count. Frames
    /// track objects by ordinal index, so a count mismatch means the
    /// clip and rig were authored against different object sets.
    #[error("rig has {actual} targets but the frame has {expected} objects")]
    DimensionMismatch { expected: usize, actual: usize },
}
