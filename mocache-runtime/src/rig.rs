//! Pose source/sink seams
//!
//! The runtime reads live poses through [`PoseSource`] while recording
//! and writes decoded poses through [`PoseSink`] during playback. Hosts
//! implement both over whatever owns their actual scene objects.

use mocache_codec::Pose;

/// Provider of live poses, sampled once per capture tick.
pub trait PoseSource {
    /// Number of tracked objects; must stay constant for the lifetime
    /// of a recording session.
    fn object_count(&self) -> usize;

    /// Current pose of object `index` (index < `object_count`)
    fn pose(&self, index: usize) -> Pose;
}

/// Consumer of decoded poses during playback.
pub trait PoseSink {
    /// Number of playback targets
    fn object_count(&self) -> usize;

    /// Apply a decoded pose to target `index` (index < `object_count`)
    fn set_pose(&mut self, index: usize, pose: Pose);
}
