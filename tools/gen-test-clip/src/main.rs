//! Generate a sample motion clip for demos and manual inspection
//!
//! Captures a short scene of objects orbiting the origin, compresses it
//! to the clip format, and writes the blob plus a JSON manifest with the
//! capture and size stats.

use std::f32::consts::TAU;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use glam::{Quat, Vec3};
use mocache_codec::{CLIP_EXT, KEYFRAME_POSE_SIZE};
use mocache_runtime::{capture_frame, MotionClip, Pose, PoseSource};
use serde::Serialize;

const OBJECT_COUNT: usize = 4;
const FRAME_COUNT: usize = 120;
const FRAME_RATE: f32 = 30.0;

#[derive(Serialize)]
struct ClipManifest {
    clip: String,
    frame_count: usize,
    object_count: usize,
    frame_rate: f32,
    raw_size: usize,
    compressed_size: usize,
}

/// Objects on circular orbits, each facing its direction of travel.
struct OrbitScene {
    time: f32,
}

impl PoseSource for OrbitScene {
    fn object_count(&self) -> usize {
        OBJECT_COUNT
    }

    fn pose(&self, index: usize) -> Pose {
        let radius = 1.0 + index as f32 * 0.5;
        let speed = 1.0 + index as f32 * 0.25;
        let angle = self.time * speed + index as f32 * (TAU / OBJECT_COUNT as f32);
        Pose {
            position: Vec3::new(
                angle.cos() * radius,
                (self.time * 2.0 + index as f32).sin() * 0.25,
                angle.sin() * radius,
            ),
            rotation: Quat::from_rotation_y(-angle),
        }
    }
}

fn record_orbit_clip() -> MotionClip {
    let mut clip = MotionClip::new();
    let mut scene = OrbitScene { time: 0.0 };
    for _ in 0..FRAME_COUNT {
        clip.push_frame(capture_frame(&scene));
        scene.time += 1.0 / FRAME_RATE;
    }
    clip
}

fn main() -> Result<()> {
    let clip_path = PathBuf::from(format!("demos/assets/orbit.{CLIP_EXT}"));
    if let Some(parent) = clip_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    let mut clip = record_orbit_clip();
    clip.compress()?;

    let manifest = ClipManifest {
        clip: clip_path.display().to_string(),
        frame_count: clip.frame_count(),
        object_count: clip.object_count(),
        frame_rate: FRAME_RATE,
        raw_size: clip.frame_count() * clip.object_count() * KEYFRAME_POSE_SIZE,
        compressed_size: clip.blob().len(),
    };

    fs::write(&clip_path, clip.blob())
        .with_context(|| format!("writing {}", clip_path.display()))?;
    let manifest_path = clip_path.with_extension("json");
    fs::write(&manifest_path, serde_json::to_string_pretty(&manifest)?)
        .with_context(|| format!("writing {}", manifest_path.display()))?;

    println!(
        "Generated {} ({} objects, {} frames, {} -> {} bytes)",
        clip_path.display(),
        manifest.object_count,
        manifest.frame_count,
        manifest.raw_size,
        manifest.compressed_size
    );
    Ok(())
}
