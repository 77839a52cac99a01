//! Mesh deformation along a spline frame
//!
//! Maps a mesh's local vertices onto the spline frame at a path
//! parameter, compressing along the path direction and expanding
//! transverse to it. The original vertex buffer is kept untouched so
//! the deformation can be recomputed from scratch every call.

use glam::{Mat3, Vec3};
use rayon::prelude::*;

use crate::evaluate::SplineEvaluation;

/// Per-call deformation parameters
#[derive(Debug, Clone, Copy)]
pub struct DeformParams {
    /// Path parameter t in [0, 1] selecting the spline frame
    pub path_parameter: f32,
    /// Longitudinal squash factor at the end of the path (1.0 = none)
    pub compression: f32,
    /// Longitudinal stretch factor at the start of the path
    pub length: f32,
    /// Uniform vertex scale applied on top of squash/stretch
    pub scale: f32,
}

impl Default for DeformParams {
    fn default() -> Self {
        Self {
            path_parameter: 0.0,
            compression: 1.0,
            length: 1.0,
            scale: 1.0,
        }
    }
}

/// Deforms a fixed vertex set along a spline.
#[derive(Debug, Clone)]
pub struct SplineDeformer {
    original: Vec<Vec3>,
    deformed: Vec<Vec3>,
}

impl SplineDeformer {
    pub fn new(vertices: Vec<Vec3>) -> Self {
        Self {
            deformed: vertices.clone(),
            original: vertices,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.original.len()
    }

    /// Deformed vertices from the last [`deform`](Self::deform) call
    /// (the originals until then).
    pub fn deformed(&self) -> &[Vec3] {
        &self.deformed
    }

    /// Map every original vertex into the spline frame at
    /// `params.path_parameter`.
    ///
    /// Local z compresses from `length` toward `compression` as the
    /// parameter advances; local x/y expand by `sqrt(1/compression)` to
    /// roughly preserve volume. A degenerate evaluation (zero tangent
    /// at the selected frame) leaves the vertices at their originals.
    pub fn deform(&mut self, evaluation: &SplineEvaluation, params: DeformParams) {
        let sample_count = evaluation.sample_count();
        if sample_count == 0 {
            self.deformed.clone_from(&self.original);
            return;
        }

        let t = params.path_parameter.clamp(0.0, 1.0);
        let index = ((t * (sample_count - 1) as f32) as usize).min(sample_count - 1);

        let point = evaluation.points[index];
        let tangent = evaluation.tangents[index];
        let normal = evaluation.normals[index];
        if tangent == Vec3::ZERO || normal == Vec3::ZERO {
            self.deformed.clone_from(&self.original);
            return;
        }
        let binormal = normal.cross(tangent);
        let basis = Mat3::from_cols(binormal, normal, tangent);

        let squash = params.length + (params.compression - params.length) * t;
        let expand = (1.0 / squash).abs().sqrt();
        let longitudinal = squash * params.scale;
        let transverse = expand * params.scale;

        self.deformed = self
            .original
            .par_iter()
            .map(|&vertex| {
                let scaled = Vec3::new(
                    vertex.x * transverse,
                    vertex.y * transverse,
                    vertex.z * longitudinal,
                );
                point + basis * scaled
            })
            .collect();
    }

    /// Restore the deformed buffer to the original vertices.
    pub fn reset(&mut self) {
        self.deformed.clone_from(&self.original);
    }
}
