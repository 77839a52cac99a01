//! Clip encoding and decoding
//!
//! Frame 0 is written verbatim as a keyframe; every later frame is
//! written as quantized deltas against its predecessor. Encode-side
//! deltas are computed between the original frames, while decode-side
//! reconstruction chains off the previously reconstructed frame, so
//! quantization error accumulates additively over the stream. This is a
//! wire-format property, not a defect: removing it would change the
//! blob layout.

use glam::Vec3;

use super::error::CodecError;
use super::header::ClipHeader;
use super::quant::{dequantize, quantize};
use super::quat::{decode_quat_xyz, encode_quat_xyz};
use super::types::{DELTA_POSE_SIZE, Frame, KEYFRAME_POSE_SIZE};

/// Encode a frame list to a clip blob.
///
/// An empty frame list produces an empty blob. Fails if any frame
/// disagrees with frame 0 on object count (clip invariant: index i
/// refers to the same object in every frame).
pub fn encode_clip(frames: &[Frame]) -> Result<Vec<u8>, CodecError> {
    let Some(first) = frames.first() else {
        return Ok(Vec::new());
    };
    let object_count = first.object_count();

    for (index, frame) in frames.iter().enumerate() {
        if frame.positions.len() != object_count || frame.rotations.len() != object_count {
            let actual = if frame.positions.len() != object_count {
                frame.positions.len()
            } else {
                frame.rotations.len()
            };
            return Err(CodecError::ObjectCountMismatch {
                frame: index,
                expected: object_count,
                actual,
            });
        }
    }

    let header = ClipHeader::new(frames.len() as u32, object_count as u32);
    let mut bytes = Vec::with_capacity(header.blob_size());
    bytes.extend_from_slice(&header.to_bytes());

    // Keyframe: full-precision positions, then rotation xyz components.
    for position in &first.positions {
        write_vec3(&mut bytes, *position);
    }
    for rotation in &first.rotations {
        let [x, y, z] = encode_quat_xyz(*rotation);
        bytes.extend_from_slice(&x.to_le_bytes());
        bytes.extend_from_slice(&y.to_le_bytes());
        bytes.extend_from_slice(&z.to_le_bytes());
    }

    // Delta frames, chained off the original (pre-quantization) data.
    for pair in frames.windows(2) {
        let (previous, current) = (&pair[0], &pair[1]);

        for i in 0..object_count {
            let delta = current.positions[i] - previous.positions[i];
            write_quantized3(&mut bytes, delta.x, delta.y, delta.z);
        }
        for i in 0..object_count {
            let delta = previous.rotations[i].inverse() * current.rotations[i];
            let [x, y, z] = encode_quat_xyz(delta);
            write_quantized3(&mut bytes, x, y, z);
        }
    }

    Ok(bytes)
}

/// Decode a clip blob back into frames.
///
/// An empty blob yields an empty frame list. A blob shorter than its
/// header claims, or one whose header fails validation, errors with
/// [`CodecError`] before any payload read; trailing bytes past the
/// expected size are ignored.
pub fn decode_clip(bytes: &[u8]) -> Result<Vec<Frame>, CodecError> {
    if bytes.is_empty() {
        return Ok(Vec::new());
    }

    let header =
        ClipHeader::from_bytes(bytes).ok_or(CodecError::TruncatedHeader(bytes.len()))?;
    if !header.validate() {
        return Err(CodecError::InvalidHeader {
            frame_count: header.frame_count,
            object_count: header.object_count,
        });
    }

    // Size check in u128 so a lying header cannot wrap the arithmetic.
    let object_count = header.object_count as usize;
    let delta_frames = (header.frame_count as u128).saturating_sub(1);
    let expected = ClipHeader::SIZE as u128
        + header.object_count as u128 * KEYFRAME_POSE_SIZE as u128
        + delta_frames * header.object_count as u128 * DELTA_POSE_SIZE as u128;
    if (bytes.len() as u128) < expected {
        return Err(CodecError::Truncated {
            expected: expected.min(usize::MAX as u128) as usize,
            actual: bytes.len(),
        });
    }

    let mut offset = ClipHeader::SIZE;
    let mut frames: Vec<Frame> = Vec::new();

    // Keyframe
    let mut first = Frame::identity(object_count);
    for position in first.positions.iter_mut() {
        *position = read_vec3(bytes, &mut offset);
    }
    for rotation in first.rotations.iter_mut() {
        let x = read_f32(bytes, &mut offset);
        let y = read_f32(bytes, &mut offset);
        let z = read_f32(bytes, &mut offset);
        *rotation = decode_quat_xyz(x, y, z);
    }
    frames.push(first);

    // Delta frames, chained off the reconstructed predecessor.
    for frame_index in 1..header.frame_count as usize {
        let previous = &frames[frame_index - 1];
        let mut current = Frame::identity(object_count);

        for i in 0..object_count {
            let delta = read_dequantized3(bytes, &mut offset);
            current.positions[i] = previous.positions[i] + delta;
        }
        for i in 0..object_count {
            let delta = read_dequantized3(bytes, &mut offset);
            current.rotations[i] =
                previous.rotations[i] * decode_quat_xyz(delta.x, delta.y, delta.z);
        }

        frames.push(current);
    }

    Ok(frames)
}

#[inline]
fn write_vec3(bytes: &mut Vec<u8>, v: Vec3) {
    bytes.extend_from_slice(&v.x.to_le_bytes());
    bytes.extend_from_slice(&v.y.to_le_bytes());
    bytes.extend_from_slice(&v.z.to_le_bytes());
}

#[inline]
fn write_quantized3(bytes: &mut Vec<u8>, x: f32, y: f32, z: f32) {
    bytes.extend_from_slice(&quantize(x).to_le_bytes());
    bytes.extend_from_slice(&quantize(y).to_le_bytes());
    bytes.extend_from_slice(&quantize(z).to_le_bytes());
}

#[inline]
fn read_f32(bytes: &[u8], offset: &mut usize) -> f32 {
    debug_assert!(*offset + 4 <= bytes.len());
    let value = f32::from_le_bytes([
        bytes[*offset],
        bytes[*offset + 1],
        bytes[*offset + 2],
        bytes[*offset + 3],
    ]);
    *offset += 4;
    value
}

#[inline]
fn read_i16(bytes: &[u8], offset: &mut usize) -> i16 {
    debug_assert!(*offset + 2 <= bytes.len());
    let value = i16::from_le_bytes([bytes[*offset], bytes[*offset + 1]]);
    *offset += 2;
    value
}

#[inline]
fn read_vec3(bytes: &[u8], offset: &mut usize) -> Vec3 {
    let x = read_f32(bytes, offset);
    let y = read_f32(bytes, offset);
    let z = read_f32(bytes, offset);
    Vec3::new(x, y, z)
}

#[inline]
fn read_dequantized3(bytes: &[u8], offset: &mut usize) -> Vec3 {
    let x = dequantize(read_i16(bytes, offset));
    let y = dequantize(read_i16(bytes, offset));
    let z = dequantize(read_i16(bytes, offset));
    Vec3::new(x, y, z)
}
