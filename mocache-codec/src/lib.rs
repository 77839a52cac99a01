//! MoCache clip binary format (.mcclip)
//!
//! Compressed motion clip containing sampled per-object transforms.
//! POD format with minimal header - no magic bytes.
//!
//! # Layout
//! ```text
//! Header (8 bytes):
//! 0x00: frame_count u32 LE   - Total number of frames
//! 0x04: object_count u32 LE  - Number of objects per frame
//!
//! Keyframe (frame 0, full precision):
//! object_count × { f32 x, f32 y, f32 z }     - positions
//! object_count × { f32 x, f32 y, f32 z }     - rotation xyz (w omitted)
//!
//! Delta frames (frame 1 .. frame_count-1), each:
//! object_count × { i16 dx, i16 dy, i16 dz }  - position delta, quantized
//! object_count × { i16 dx, i16 dy, i16 dz }  - rotation delta xyz, quantized
//! ```
//!
//! A clip with zero frames encodes to a zero-length blob (no header).
//!
//! Deltas are computed between the original frames at encode time but
//! applied to the reconstructed previous frame at decode time, so
//! quantization error accumulates additively over the stream. Frame 0
//! round-trips exactly; later frames drift by at most one quantization
//! step (0.5 / [`QUANTIZE_SCALE`]) per frame.

mod encoding;
mod error;
mod header;
mod quant;
mod quat;
mod types;

#[cfg(test)]
mod tests;

pub use encoding::{decode_clip, encode_clip};
pub use error::CodecError;
pub use header::ClipHeader;
pub use quant::{QUANTIZE_SCALE, dequantize, quantize};
pub use quat::{decode_quat_xyz, encode_quat_xyz};
pub use types::{DELTA_POSE_SIZE, Frame, KEYFRAME_POSE_SIZE, Pose};

/// Conventional file extension for encoded clips
pub const CLIP_EXT: &str = "mcclip";
