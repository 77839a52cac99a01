//! Spline control-point container

use glam::Vec3;

/// Ordered control points with a tension scalar and a closed-loop flag.
///
/// Every mutation bumps a revision counter; downstream caches compare
/// revisions instead of diffing point lists.
#[derive(Debug, Clone, Default)]
pub struct SplinePath {
    control_points: Vec<Vec3>,
    tension: f32,
    closed_loop: bool,
    revision: u64,
}

impl SplinePath {
    pub fn new(control_points: Vec<Vec3>, tension: f32, closed_loop: bool) -> Self {
        Self {
            control_points,
            tension: tension.clamp(0.0, 1.0),
            closed_loop,
            revision: 0,
        }
    }

    pub fn control_points(&self) -> &[Vec3] {
        &self.control_points
    }

    pub fn control_point_count(&self) -> usize {
        self.control_points.len()
    }

    pub fn control_point(&self, index: usize) -> Option<Vec3> {
        self.control_points.get(index).copied()
    }

    /// Tension in [0, 1]; 0 is standard Catmull-Rom, 1 collapses the
    /// segment tangents to zero (piecewise-linear-looking blend).
    pub fn tension(&self) -> f32 {
        self.tension
    }

    pub fn closed_loop(&self) -> bool {
        self.closed_loop
    }

    /// Monotonic counter bumped by every mutation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn add_control_point(&mut self, point: Vec3) {
        self.control_points.push(point);
        self.revision += 1;
    }

    /// Insert at `index`; out-of-range indices are rejected.
    pub fn insert_control_point(&mut self, index: usize, point: Vec3) -> bool {
        if index > self.control_points.len() {
            return false;
        }
        self.control_points.insert(index, point);
        self.revision += 1;
        true
    }

    /// Move the control point at `index`; out-of-range indices are rejected.
    pub fn update_control_point(&mut self, index: usize, point: Vec3) -> bool {
        let Some(slot) = self.control_points.get_mut(index) else {
            return false;
        };
        *slot = point;
        self.revision += 1;
        true
    }

    /// Remove the control point at `index`; out-of-range indices are rejected.
    pub fn remove_control_point(&mut self, index: usize) -> bool {
        if index >= self.control_points.len() {
            return false;
        }
        self.control_points.remove(index);
        self.revision += 1;
        true
    }

    pub fn clear_control_points(&mut self) {
        self.control_points.clear();
        self.revision += 1;
    }

    pub fn set_tension(&mut self, tension: f32) {
        self.tension = tension.clamp(0.0, 1.0);
        self.revision += 1;
    }

    pub fn set_closed_loop(&mut self, closed: bool) {
        self.closed_loop = closed;
        self.revision += 1;
    }
}
