//! Clip header structure and operations

use super::types::{DELTA_POSE_SIZE, KEYFRAME_POSE_SIZE};

/// MoCache clip header (8 bytes)
///
/// Present only for non-empty clips; an empty clip encodes to a
/// zero-length blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipHeader {
    /// Total number of frames in the clip
    pub frame_count: u32,
    /// Number of tracked objects per frame
    pub object_count: u32,
}

impl ClipHeader {
    pub const SIZE: usize = 8;

    pub fn new(frame_count: u32, object_count: u32) -> Self {
        Self {
            frame_count,
            object_count,
        }
    }

    /// Write header to bytes
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..4].copy_from_slice(&self.frame_count.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.object_count.to_le_bytes());
        bytes
    }

    /// Read header from bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        Some(Self {
            frame_count: u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            object_count: u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
        })
    }

    /// Validate header
    pub fn validate(&self) -> bool {
        // A header is only written for clips with at least one frame.
        self.frame_count > 0
    }

    /// Expected payload size in bytes (excluding header)
    pub fn data_size(&self) -> usize {
        let objects = self.object_count as usize;
        let delta_frames = (self.frame_count as usize).saturating_sub(1);
        objects * KEYFRAME_POSE_SIZE + delta_frames * objects * DELTA_POSE_SIZE
    }

    /// Total blob size (header + payload)
    pub fn blob_size(&self) -> usize {
        Self::SIZE + self.data_size()
    }
}
