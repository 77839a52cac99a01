//! Clip data types

use glam::{Quat, Vec3};

/// Encoded size of one object's pose in the keyframe (24 bytes)
///
/// Position f32 × 3 plus rotation xyz f32 × 3; the quaternion w
/// component is reconstructed on decode.
pub const KEYFRAME_POSE_SIZE: usize = 24;

/// Encoded size of one object's pose in a delta frame (12 bytes)
///
/// Position delta i16 × 3 plus rotation delta xyz i16 × 3.
pub const DELTA_POSE_SIZE: usize = 12;

/// One rigid object's state: position plus unit rotation.
///
/// Objects carry no identity beyond their ordinal position; index i in
/// every frame of a clip refers to the same logical object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Pose {
    /// No translation, no rotation
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// One sampled frame: parallel position/rotation arrays, one entry per
/// tracked object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub positions: Vec<Vec3>,
    pub rotations: Vec<Quat>,
}

impl Frame {
    /// Frame of `object_count` identity poses
    pub fn identity(object_count: usize) -> Self {
        Self {
            positions: vec![Vec3::ZERO; object_count],
            rotations: vec![Quat::IDENTITY; object_count],
        }
    }

    /// Snapshot a pose sequence by value
    pub fn from_poses(poses: &[Pose]) -> Self {
        Self {
            positions: poses.iter().map(|p| p.position).collect(),
            rotations: poses.iter().map(|p| p.rotation).collect(),
        }
    }

    /// Number of objects in this frame
    ///
    /// The position and rotation arrays are kept the same length by
    /// every constructor; positions is authoritative.
    pub fn object_count(&self) -> usize {
        self.positions.len()
    }

    /// Pose of object `index`, or `None` past the end
    pub fn pose(&self, index: usize) -> Option<Pose> {
        Some(Pose {
            position: *self.positions.get(index)?,
            rotation: *self.rotations.get(index)?,
        })
    }
}
