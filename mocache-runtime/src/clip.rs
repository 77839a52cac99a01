//! Motion clip asset
//!
//! Owns the in-memory frame list and the compressed blob. The frame
//! list is only ever mutated through [`clear`](MotionClip::clear) /
//! [`push_frame`](MotionClip::push_frame) during a recording session or
//! replaced wholesale by [`decompress`](MotionClip::decompress).
//! Persistence itself is the host's job: it stores and retrieves the
//! blob, the clip only produces and consumes it.

use mocache_codec::{CodecError, Frame, decode_clip, encode_clip};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct MotionClip {
    frames: Vec<Frame>,
    blob: Vec<u8>,
}

impl MotionClip {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate a clip from a previously compressed blob.
    pub fn from_blob(blob: Vec<u8>) -> Result<Self, CodecError> {
        let mut clip = Self {
            frames: Vec::new(),
            blob,
        };
        clip.decompress()?;
        Ok(clip)
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Object count of the clip, 0 while empty
    pub fn object_count(&self) -> usize {
        self.frames.first().map_or(0, Frame::object_count)
    }

    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Last compressed blob (empty until [`compress`](Self::compress))
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    /// Drop all in-memory frames (recording session start). The blob
    /// is left alone until the next compress.
    pub fn clear(&mut self) {
        self.frames.clear();
    }

    /// Append one captured frame.
    pub fn push_frame(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Encode the in-memory frames into the blob. The frame list is
    /// left intact.
    pub fn compress(&mut self) -> Result<(), CodecError> {
        self.blob = encode_clip(&self.frames)?;
        debug!(
            frames = self.frames.len(),
            objects = self.object_count(),
            bytes = self.blob.len(),
            "compressed motion clip"
        );
        Ok(())
    }

    /// Replace the in-memory frames with the blob's contents.
    pub fn decompress(&mut self) -> Result<(), CodecError> {
        self.frames = decode_clip(&self.blob)?;
        debug!(
            frames = self.frames.len(),
            objects = self.object_count(),
            bytes = self.blob.len(),
            "decompressed motion clip"
        );
        Ok(())
    }
}
