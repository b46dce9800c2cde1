//! spatial3d - 3D vector and quaternion kernel
//!
//! This crate ties the workspace together:
//!
//! - [`config`] - layered application configuration
//! - [`spin`] - a rotating-ring workload that drives the batched transforms
//!
//! The math itself lives in `spatial3d_math`; `spatial3d_core` adds
//! object-level transforms on top.

pub mod config;
pub mod spin;

pub use spatial3d_core::Transform3D;
pub use spatial3d_math::{BatchError, Matrix, NormalTransform, Quaternion, Vector3, VectorTransform};
