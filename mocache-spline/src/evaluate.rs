//! Spline evaluation passes
//!
//! Three per-index independent passes, each a parallel map over output
//! slots: points from the control polyline, tangents by finite
//! differences over the points, normals by Gram-Schmidt of a world-up
//! reference against each tangent. Collecting each pass before the next
//! starts is the barrier between them.

use glam::Vec3;
use rayon::prelude::*;

/// Smallest usable resolution; open mode reserves 3 samples worth of
/// parameter range, so anything under 4 would produce no points at all.
pub(crate) const MIN_RESOLUTION: usize = 4;

/// Derived spline data: parallel arrays replaced wholesale on every
/// recompute.
///
/// `points`, `tangents` and `normals` share one length: `resolution`
/// for closed loops, `resolution - 3` for open splines (the usable
/// parameter domain of an open spline is `control_points - 3` cubic
/// segments). `t_values` is always `resolution` long with
/// `t_values[i] = i / (resolution - 1)`; sample i corresponds to
/// `t_values[i]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplineEvaluation {
    pub points: Vec<Vec3>,
    pub tangents: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub t_values: Vec<f32>,
}

impl SplineEvaluation {
    pub fn sample_count(&self) -> usize {
        self.points.len()
    }
}

/// Evaluate a control polyline at the given resolution.
///
/// `resolution` is clamped to a minimum of 4. Open splines with fewer
/// than 4 control points are degenerate: the result keeps its expected
/// shape but every sample is zero, so callers can always index safely.
pub fn evaluate_spline(
    control_points: &[Vec3],
    tension: f32,
    closed_loop: bool,
    resolution: usize,
) -> SplineEvaluation {
    let resolution = resolution.max(MIN_RESOLUTION);
    let sample_count = if closed_loop {
        resolution
    } else {
        resolution - 3
    };

    let t_values: Vec<f32> = (0..resolution)
        .map(|i| i as f32 / (resolution - 1) as f32)
        .collect();

    let degenerate = control_points.is_empty() || (!closed_loop && control_points.len() < 4);
    if degenerate {
        return SplineEvaluation {
            points: vec![Vec3::ZERO; sample_count],
            tangents: vec![Vec3::ZERO; sample_count],
            normals: vec![Vec3::ZERO; sample_count],
            t_values,
        };
    }

    let points: Vec<Vec3> = t_values[..sample_count]
        .par_iter()
        .map(|&t| evaluate_point(control_points, tension, closed_loop, t))
        .collect();

    let last = points.len() - 1;
    let tangents: Vec<Vec3> = (0..points.len())
        .into_par_iter()
        .map(|i| {
            if points.len() < 2 {
                return Vec3::ZERO;
            }
            let difference = if i == 0 {
                points[1] - points[0]
            } else if i == last {
                points[last] - points[last - 1]
            } else {
                points[i + 1] - points[i - 1]
            };
            difference.normalize_or_zero()
        })
        .collect();

    let normals: Vec<Vec3> = tangents
        .par_iter()
        .map(|&tangent| {
            // Fall back to +X when the tangent is nearly parallel to
            // world up, then orthogonalize.
            let up = if tangent.dot(Vec3::Y).abs() > 0.999 {
                Vec3::X
            } else {
                Vec3::Y
            };
            tangent.cross(up).cross(tangent).normalize_or_zero()
        })
        .collect();

    SplineEvaluation {
        points,
        tangents,
        normals,
        t_values,
    }
}

fn evaluate_point(control_points: &[Vec3], tension: f32, closed_loop: bool, t: f32) -> Vec3 {
    let n = control_points.len();

    if closed_loop {
        let segment_t = t * n as f32;
        let mut segment = segment_t.floor() as usize;
        let local_t = segment_t - segment as f32;
        segment %= n;

        let p0 = control_points[(segment + n - 1) % n];
        let p1 = control_points[segment];
        let p2 = control_points[(segment + 1) % n];
        let p3 = control_points[(segment + 2) % n];
        catmull_rom(p0, p1, p2, p3, local_t, tension)
    } else {
        // n - 3 usable segments; the tail sample clamps into the last
        // segment instead of going out of range.
        let segment_t = t * (n - 3) as f32;
        let mut segment = segment_t.floor() as usize;
        let mut local_t = segment_t - segment as f32;
        if segment > n - 4 {
            segment = n - 4;
            local_t = 1.0;
        }

        catmull_rom(
            control_points[segment],
            control_points[segment + 1],
            control_points[segment + 2],
            control_points[segment + 3],
            local_t,
            tension,
        )
    }
}

/// Hermite-basis Catmull-Rom with tension-scaled tangent estimates.
fn catmull_rom(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32, tension: f32) -> Vec3 {
    let t2 = t * t;
    let t3 = t2 * t;

    // tension = 0 is standard Catmull-Rom; 1 zeroes the tangents.
    let alpha = 1.0 - tension;
    let b1 = alpha * (p2 - p0) / 2.0;
    let b2 = alpha * (p3 - p1) / 2.0;

    let h1 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h2 = -2.0 * t3 + 3.0 * t2;
    let h3 = t3 - 2.0 * t2 + t;
    let h4 = t3 - t2;

    p1 * h1 + p2 * h2 + b1 * h3 + b2 * h4
}
