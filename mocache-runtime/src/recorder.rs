//! Frame capture

use mocache_codec::Frame;

use crate::rig::PoseSource;

/// Snapshot every pose of `source` by value as a new frame.
///
/// No interpolation and no deduplication: one call produces exactly one
/// sample, and the capture cadence is whatever cadence the caller
/// invokes this at.
pub fn capture_frame<S: PoseSource + ?Sized>(source: &S) -> Frame {
    let count = source.object_count();
    let mut frame = Frame {
        positions: Vec::with_capacity(count),
        rotations: Vec::with_capacity(count),
    };
    for index in 0..count {
        let pose = source.pose(index);
        frame.positions.push(pose.position);
        frame.rotations.push(pose.rotation);
    }
    frame
}
