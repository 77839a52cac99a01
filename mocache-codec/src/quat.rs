//! Quaternion xyz encoding
//!
//! Unit quaternions are stored as their x, y, z components only; w is
//! reconstructed from the unit-length constraint. Reconstruction always
//! yields a non-negative w, so rotations encoded with w < 0 come back
//! as their antipodal twin (the same rotation, opposite hemisphere).

use glam::Quat;

/// Emit the x, y, z components of a unit quaternion. w is never written.
#[inline]
pub fn encode_quat_xyz(q: Quat) -> [f32; 3] {
    [q.x, q.y, q.z]
}

/// Rebuild a quaternion from its x, y, z components.
///
/// `w = sqrt(max(0, 1 - (x² + y² + z²)))`. The clamp absorbs inputs
/// whose squared norm slightly exceeds 1 from float error; this never
/// panics and never produces NaN.
#[inline]
pub fn decode_quat_xyz(x: f32, y: f32, z: f32) -> Quat {
    let w = (1.0 - (x * x + y * y + z * z)).max(0.0).sqrt();
    Quat::from_xyzw(x, y, z, w)
}
