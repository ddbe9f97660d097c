//! Core geometric and identity types

pub mod geometry;
pub mod handle;
pub mod transform;
pub mod vector;

pub use geometry::{line_intersection, normalize_angle};
pub use handle::Handle;
pub use transform::{ocs_to_world, world_to_ocs, Matrix3, Matrix4, Transform};
pub use vector::{Vector2, Vector3};

/// Tolerance used for zero and parallel tests
pub const EPSILON: f64 = 1e-12;
