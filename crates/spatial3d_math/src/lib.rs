//! 3D Mathematics Kernel
//!
//! This crate provides the vector and rotation value types used on the
//! per-vertex, per-bone hot path of the spatial3d pipeline.
//!
//! ## Core Types
//!
//! - [`Vector3`] - 3D vector with x, y, z components
//! - [`Quaternion`] - rotation with vector part (x, y, z) and scalar part w
//! - [`Matrix`] - 4x4 affine matrix layout read by the transforms
//!
//! ## Batched Transforms
//!
//! - [`VectorTransform`] - applies a [`Matrix`], [`Quaternion`] or
//!   [`NormalTransform`] across runs of vectors without allocating
//! - [`BatchError`] - range violations reported by the batch methods
//!
//! Numeric edge cases (zero-length normalize, division by zero) propagate as
//! IEEE infinities and NaN rather than panicking.

mod vector3;
mod quaternion;
pub mod matrix;
pub mod batch;
mod batch_error;

pub use vector3::Vector3;
pub use quaternion::Quaternion;
pub use matrix::Matrix;
pub use batch::{NormalTransform, VectorTransform};
pub use batch_error::BatchError;
