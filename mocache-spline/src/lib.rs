//! Catmull-Rom spline evaluation engine
//!
//! Computes position samples, tangents and normals for a control-point
//! polyline, open or closed, at a fixed resolution. All three passes
//! are per-index independent and run as parallel maps with a barrier
//! between passes (points, then tangents from points, then normals from
//! tangents). Derived data is cached against a path revision counter
//! and replaced wholesale on every recompute.
//!
//! # Modules
//!
//! - [`path`] - Mutable control-point set with tension and loop flag
//! - [`evaluate`] - The point/tangent/normal evaluation passes
//! - [`cache`] - Revision-keyed cached evaluation with t samplers
//! - [`deform`] - Mesh vertex mapping onto a spline frame

mod cache;
mod deform;
mod evaluate;
mod path;

pub use cache::SplineCache;
pub use deform::{DeformParams, SplineDeformer};
pub use evaluate::{SplineEvaluation, evaluate_spline};
pub use path::SplinePath;
