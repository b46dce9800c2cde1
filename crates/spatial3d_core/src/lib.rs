//! Core types for spatial3d
//!
//! This crate builds object-level types on top of the math kernel:
//!
//! - [`Transform3D`] - Position, rotation, and uniform scale in 3D space

mod transform;

pub use transform::Transform3D;

// Re-export commonly used types from spatial3d_math for convenience
pub use spatial3d_math::{BatchError, Matrix, NormalTransform, Quaternion, Vector3, VectorTransform};
