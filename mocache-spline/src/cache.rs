//! Cached spline evaluation with parameter samplers
//!
//! Holds the last evaluation keyed by the path revision it was computed
//! from. Any path mutation or resolution change triggers a wholesale
//! recompute on the next access; readers never observe a partially
//! updated evaluation.

use glam::{Mat3, Quat, Vec3};

use crate::evaluate::{MIN_RESOLUTION, SplineEvaluation, evaluate_spline};
use crate::path::SplinePath;

#[derive(Debug, Default)]
pub struct SplineCache {
    resolution: usize,
    cached: Option<CachedEvaluation>,
}

#[derive(Debug)]
struct CachedEvaluation {
    revision: u64,
    evaluation: SplineEvaluation,
}

impl SplineCache {
    pub fn new(resolution: usize) -> Self {
        Self {
            resolution: resolution.max(MIN_RESOLUTION),
            cached: None,
        }
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Change the sample resolution, dropping any cached evaluation.
    pub fn set_resolution(&mut self, resolution: usize) {
        let resolution = resolution.max(MIN_RESOLUTION);
        if resolution != self.resolution {
            self.resolution = resolution;
            self.cached = None;
        }
    }

    /// Current evaluation for `path`, recomputing if the path changed
    /// since the cached one was built.
    pub fn evaluation(&mut self, path: &SplinePath) -> &SplineEvaluation {
        let revision = path.revision();
        if self
            .cached
            .as_ref()
            .is_none_or(|cached| cached.revision != revision)
        {
            self.cached = None;
        }

        let resolution = self.resolution;
        let cached = self.cached.get_or_insert_with(|| CachedEvaluation {
            revision,
            evaluation: evaluate_spline(
                path.control_points(),
                path.tension(),
                path.closed_loop(),
                resolution,
            ),
        });
        &cached.evaluation
    }

    /// Position at parameter `t` in [0, 1] (nearest sample)
    pub fn point_at(&mut self, path: &SplinePath, t: f32) -> Vec3 {
        let evaluation = self.evaluation(path);
        sample(&evaluation.points, t)
    }

    /// Unit tangent at parameter `t` in [0, 1] (nearest sample)
    pub fn tangent_at(&mut self, path: &SplinePath, t: f32) -> Vec3 {
        let evaluation = self.evaluation(path);
        sample(&evaluation.tangents, t)
    }

    /// Unit normal at parameter `t` in [0, 1] (nearest sample)
    pub fn normal_at(&mut self, path: &SplinePath, t: f32) -> Vec3 {
        let evaluation = self.evaluation(path);
        sample(&evaluation.normals, t)
    }

    /// Binormal completing the right-handed frame at `t`
    pub fn binormal_at(&mut self, path: &SplinePath, t: f32) -> Vec3 {
        let evaluation = self.evaluation(path);
        let tangent = sample(&evaluation.tangents, t);
        let normal = sample(&evaluation.normals, t);
        normal.cross(tangent)
    }

    /// Full frame at `t`: position plus the orientation looking along
    /// the tangent with the normal as up.
    pub fn frame_at(&mut self, path: &SplinePath, t: f32) -> (Vec3, Quat) {
        let evaluation = self.evaluation(path);
        let position = sample(&evaluation.points, t);
        let tangent = sample(&evaluation.tangents, t);
        let normal = sample(&evaluation.normals, t);
        let binormal = normal.cross(tangent);

        let rotation = Quat::from_mat3(&Mat3::from_cols(binormal, normal, tangent));
        (position, rotation)
    }
}

/// Nearest sample for `t` clamped to [0, 1]; zero for empty arrays.
fn sample(values: &[Vec3], t: f32) -> Vec3 {
    if values.is_empty() {
        return Vec3::ZERO;
    }
    let index = (t.clamp(0.0, 1.0) * (values.len() - 1) as f32).round() as usize;
    values[index.min(values.len() - 1)]
}
