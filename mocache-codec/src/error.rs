//! Clip codec error types

/// Errors produced while encoding or decoding a clip blob.
///
/// All variants are local and recoverable; retrying with corrected
/// input is always safe.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// Blob too short to contain the 8-byte header
    #[error("clip blob too short for header: {0} bytes")]
    TruncatedHeader(usize),

    /// Header fails validation (a written header always declares frames)
    #[error("invalid clip header: {frame_count} frames, {object_count} objects")]
    InvalidHeader {
        frame_count: u32,
        object_count: u32,
    },

    /// Blob shorter than the size implied by its header
    #[error("clip blob truncated: header implies {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    /// Frame with a different object count than the rest of the stream
    #[error("frame {frame} has {actual} objects, expected {expected}")]
    ObjectCountMismatch {
        frame: usize,
        expected: usize,
        actual: usize,
    },
}
