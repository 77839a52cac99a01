//! Tests for the clip codec

use super::*;
use glam::{Quat, Vec3};

fn quat_dot(a: Quat, b: Quat) -> f32 {
    a.x * b.x + a.y * b.y + a.z * b.z + a.w * b.w
}

// ========================================================================
// Header Tests
// ========================================================================

#[test]
fn test_header_roundtrip() {
    let header = ClipHeader::new(90, 25);
    assert_eq!(header.frame_count, 90);
    assert_eq!(header.object_count, 25);

    let bytes = header.to_bytes();
    assert_eq!(bytes.len(), ClipHeader::SIZE);

    let parsed = ClipHeader::from_bytes(&bytes).unwrap();
    assert_eq!(parsed, header);
}

#[test]
fn test_header_sizes() {
    assert_eq!(ClipHeader::SIZE, 8);
    assert_eq!(KEYFRAME_POSE_SIZE, 24);
    assert_eq!(DELTA_POSE_SIZE, 12);
}

#[test]
fn test_header_blob_size() {
    // 60 frames, 40 objects:
    // 8 header + 40 x 24 keyframe + 59 x 40 x 12 deltas = 29288
    let header = ClipHeader::new(60, 40);
    assert_eq!(header.blob_size(), 8 + 40 * 24 + 59 * 40 * 12);
}

#[test]
fn test_header_from_short_bytes() {
    assert!(ClipHeader::from_bytes(&[0u8; 7]).is_none());
}

#[test]
fn test_header_validation() {
    assert!(ClipHeader::new(1, 0).validate());
    assert!(ClipHeader::new(100, 10).validate());
    assert!(!ClipHeader::new(0, 10).validate());
}

// ========================================================================
// Quaternion xyz Encoding Tests
// ========================================================================

#[test]
fn test_quat_identity_roundtrip() {
    let q = Quat::IDENTITY;
    let [x, y, z] = encode_quat_xyz(q);
    let decoded = decode_quat_xyz(x, y, z);
    assert_eq!(decoded, Quat::IDENTITY);
}

#[test]
fn test_quat_positive_w_roundtrip() {
    // w = cos(0.35) > 0, so the hemisphere is preserved exactly.
    let q = Quat::from_axis_angle(Vec3::new(1.0, 2.0, 3.0).normalize(), 0.7);
    let [x, y, z] = encode_quat_xyz(q);
    let decoded = decode_quat_xyz(x, y, z);

    assert_eq!(decoded.x, q.x);
    assert_eq!(decoded.y, q.y);
    assert_eq!(decoded.z, q.z);
    assert!((decoded.w - q.w).abs() < 1e-6, "w = {} vs {}", decoded.w, q.w);
}

#[test]
fn test_quat_negative_w_loses_hemisphere() {
    let q = -Quat::from_axis_angle(Vec3::Y, 0.5);
    assert!(q.w < 0.0);

    let [x, y, z] = encode_quat_xyz(q);
    let decoded = decode_quat_xyz(x, y, z);

    // Reconstruction always lands in the w >= 0 hemisphere; q and -q
    // are the same rotation, so |dot| stays ~1.
    assert!(decoded.w >= 0.0);
    assert!(quat_dot(decoded, q).abs() > 0.9999);
}

#[test]
fn test_quat_overlong_input_clamps() {
    // Squared norm slightly above 1 must clamp to w = 0, not NaN.
    let decoded = decode_quat_xyz(0.8, 0.6, 0.01);
    assert_eq!(decoded.w, 0.0);
    assert!(!decoded.w.is_nan());
}

// ========================================================================
// Delta Quantization Tests
// ========================================================================

#[test]
fn test_quantize_exact_steps() {
    // Multiples of 1/1024 are exactly representable.
    assert_eq!(quantize(1.0), 1024);
    assert_eq!(dequantize(1024), 1.0);
    assert_eq!(quantize(-0.5), -512);
    assert_eq!(dequantize(-512), -0.5);
    assert_eq!(quantize(0.0), 0);
}

#[test]
fn test_quantize_roundtrip_bound() {
    // Half a quantization step, plus f32 rounding slack near the top
    // of the +/-32 range.
    let bound = 0.5 / QUANTIZE_SCALE + 5e-6;
    for i in -3199..3200 {
        let x = i as f32 * 0.01;
        let error = (dequantize(quantize(x)) - x).abs();
        assert!(error <= bound, "x = {x}: error {error} > {bound}");
    }
}

#[test]
fn test_quantize_saturates() {
    assert_eq!(quantize(100.0), i16::MAX);
    assert_eq!(quantize(-100.0), i16::MIN);
}

// ========================================================================
// Frame Tests
// ========================================================================

#[test]
fn test_frame_pose_accessor() {
    let frame = Frame {
        positions: vec![Vec3::X, Vec3::Y],
        rotations: vec![Quat::IDENTITY, Quat::from_axis_angle(Vec3::Z, 0.5)],
    };

    let pose = frame.pose(1).unwrap();
    assert_eq!(pose.position, Vec3::Y);
    assert_eq!(pose.rotation, frame.rotations[1]);
    assert!(frame.pose(2).is_none());
}

// ========================================================================
// Clip Roundtrip Tests
// ========================================================================

#[test]
fn test_empty_clip_roundtrip() {
    let blob = encode_clip(&[]).unwrap();
    assert!(blob.is_empty());
    assert_eq!(decode_clip(&blob).unwrap(), Vec::<Frame>::new());
}

#[test]
fn test_single_frame_roundtrip_exact() {
    // One frame = keyframe only, no quantization path: positions are
    // bit-exact, rotation xyz are bit-exact, w is recomputed.
    let frame = Frame {
        positions: vec![Vec3::new(1.5, -2.25, 0.001), Vec3::new(1000.0, 0.0, -500.0)],
        rotations: vec![
            Quat::IDENTITY,
            Quat::from_axis_angle(Vec3::Z, 0.9),
        ],
    };

    let blob = encode_clip(std::slice::from_ref(&frame)).unwrap();
    assert_eq!(blob.len(), ClipHeader::new(1, 2).blob_size());

    let decoded = decode_clip(&blob).unwrap();
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].positions, frame.positions);
    for (d, o) in decoded[0].rotations.iter().zip(&frame.rotations) {
        assert_eq!(d.x, o.x);
        assert_eq!(d.y, o.y);
        assert_eq!(d.z, o.z);
        assert!((d.w - o.w).abs() < 1e-6);
    }
}

#[test]
fn test_two_object_scenario() {
    // frame0: objects at origin and (1,1,1); frame1: object 0 moves +1
    // on x; frame2: object 1 moves +1 on x. A delta of exactly 1.0
    // quantizes to 1024, an exact i16, so the moves decode exactly.
    let frames = vec![
        Frame {
            positions: vec![Vec3::ZERO, Vec3::ONE],
            rotations: vec![Quat::IDENTITY, Quat::IDENTITY],
        },
        Frame {
            positions: vec![Vec3::new(1.0, 0.0, 0.0), Vec3::ONE],
            rotations: vec![Quat::IDENTITY, Quat::IDENTITY],
        },
        Frame {
            positions: vec![Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0)],
            rotations: vec![Quat::IDENTITY, Quat::IDENTITY],
        },
    ];

    let decoded = decode_clip(&encode_clip(&frames).unwrap()).unwrap();
    assert_eq!(decoded.len(), 3);
    assert_eq!(decoded[1].positions[0], Vec3::new(1.0, 0.0, 0.0));

    let error = (decoded[2].positions[1] - Vec3::new(2.0, 1.0, 1.0)).abs();
    let tolerance = 0.5 / QUANTIZE_SCALE;
    assert!(error.max_element() <= tolerance, "error = {error}");
}

#[test]
fn test_multi_frame_drift_grows_linearly() {
    // 60 frames of 3 objects in small per-step motion. Decode error at
    // frame k is bounded by k quantization steps per component.
    let frame_count = 60;
    let mut frames = Vec::with_capacity(frame_count);
    for k in 0..frame_count {
        let t = k as f32;
        frames.push(Frame {
            positions: (0..3)
                .map(|j| {
                    let phase = j as f32 * 2.1;
                    Vec3::new(
                        (t * 0.13 + phase).sin() * 5.0,
                        t * 0.05,
                        (t * 0.07 + phase).cos() * 3.0 - j as f32,
                    )
                })
                .collect(),
            rotations: vec![Quat::IDENTITY; 3],
        });
    }

    let decoded = decode_clip(&encode_clip(&frames).unwrap()).unwrap();
    assert_eq!(decoded.len(), frame_count);

    let step = 0.5 / QUANTIZE_SCALE;
    for (k, (decoded, original)) in decoded.iter().zip(&frames).enumerate() {
        let bound = k as f32 * step + 1e-4;
        for (d, o) in decoded.positions.iter().zip(&original.positions) {
            let error = (*d - *o).abs().max_element();
            assert!(error <= bound, "frame {k}: error {error} > bound {bound}");
        }
    }
}

#[test]
fn test_rotation_drift_stays_small() {
    // Steady 0.05 rad/frame yaw; reconstructed orientation should stay
    // within a fraction of a degree of truth over 60 frames.
    let frames: Vec<Frame> = (0..60)
        .map(|k| Frame {
            positions: vec![Vec3::ZERO],
            rotations: vec![Quat::from_axis_angle(Vec3::Y, k as f32 * 0.05)],
        })
        .collect();

    let decoded = decode_clip(&encode_clip(&frames).unwrap()).unwrap();
    for (k, (d, o)) in decoded.iter().zip(&frames).enumerate() {
        let dot = quat_dot(d.rotations[0], o.rotations[0]).abs();
        assert!(dot > 0.995, "frame {k}: dot = {dot}");
    }
}

// ========================================================================
// Byte-Level Layout Tests
// ========================================================================

#[test]
fn test_blob_layout() {
    let frames = vec![
        Frame {
            positions: vec![Vec3::new(1.0, 2.0, 3.0)],
            rotations: vec![Quat::IDENTITY],
        },
        Frame {
            positions: vec![Vec3::new(1.5, 2.0, 3.0)],
            rotations: vec![Quat::IDENTITY],
        },
    ];

    let blob = encode_clip(&frames).unwrap();
    // 8 header + 24 keyframe + 12 delta frame
    assert_eq!(blob.len(), 44);

    // Header
    assert_eq!(u32::from_le_bytes(blob[0..4].try_into().unwrap()), 2);
    assert_eq!(u32::from_le_bytes(blob[4..8].try_into().unwrap()), 1);

    // Keyframe position, full precision
    assert_eq!(f32::from_le_bytes(blob[8..12].try_into().unwrap()), 1.0);
    assert_eq!(f32::from_le_bytes(blob[12..16].try_into().unwrap()), 2.0);
    assert_eq!(f32::from_le_bytes(blob[16..20].try_into().unwrap()), 3.0);

    // Keyframe rotation xyz (identity)
    for chunk in blob[20..32].chunks_exact(4) {
        assert_eq!(f32::from_le_bytes(chunk.try_into().unwrap()), 0.0);
    }

    // Delta frame: +0.5 on x quantizes to 512, everything else 0
    assert_eq!(i16::from_le_bytes(blob[32..34].try_into().unwrap()), 512);
    for chunk in blob[34..44].chunks_exact(2) {
        assert_eq!(i16::from_le_bytes(chunk.try_into().unwrap()), 0);
    }
}

// ========================================================================
// Error Path Tests
// ========================================================================

#[test]
fn test_decode_short_header() {
    assert_eq!(
        decode_clip(&[0u8; 5]),
        Err(CodecError::TruncatedHeader(5))
    );
}

#[test]
fn test_decode_rejects_zero_frame_header() {
    // A zero-frame header is never written; a decoder that accepted it
    // would still read a keyframe and return a frame the header denies.
    let mut blob = ClipHeader::new(0, 1).to_bytes().to_vec();
    blob.extend_from_slice(&[0u8; KEYFRAME_POSE_SIZE]);
    assert_eq!(
        decode_clip(&blob),
        Err(CodecError::InvalidHeader {
            frame_count: 0,
            object_count: 1,
        })
    );
}

#[test]
fn test_decode_truncated_payload() {
    let frames = vec![
        Frame::identity(2),
        Frame::identity(2),
        Frame::identity(2),
    ];
    let blob = encode_clip(&frames).unwrap();

    let cut = &blob[..blob.len() - 4];
    assert_eq!(
        decode_clip(cut),
        Err(CodecError::Truncated {
            expected: blob.len(),
            actual: cut.len(),
        })
    );
}

#[test]
fn test_decode_header_without_payload() {
    let header = ClipHeader::new(2, 1);
    let blob = header.to_bytes();
    assert_eq!(
        decode_clip(&blob),
        Err(CodecError::Truncated {
            expected: header.blob_size(),
            actual: ClipHeader::SIZE,
        })
    );
}

#[test]
fn test_encode_object_count_mismatch() {
    let frames = vec![Frame::identity(2), Frame::identity(3)];
    assert_eq!(
        encode_clip(&frames),
        Err(CodecError::ObjectCountMismatch {
            frame: 1,
            expected: 2,
            actual: 3,
        })
    );
}
