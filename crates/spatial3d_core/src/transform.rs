//! 3D Transform (position, rotation, scale)
//!
//! A Transform3D represents the position, rotation, and uniform scale of an
//! object in 3D space. It can be flattened into an affine [`Matrix`] so large
//! vertex buffers go through the kernel's batched matrix path.

use serde::{Deserialize, Serialize};
use spatial3d_math::{BatchError, Matrix, NormalTransform, Quaternion, Vector3, VectorTransform};

/// A 3D transform with position, rotation, and uniform scale
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform3D {
    /// Position in 3D space
    pub position: Vector3,
    /// Rotation as a unit quaternion
    pub rotation: Quaternion,
    /// Uniform scale factor
    pub scale: f32,
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform3D {
    /// Create an identity transform (no translation, rotation, or scale change)
    pub fn identity() -> Self {
        Self {
            position: Vector3::ZERO,
            rotation: Quaternion::IDENTITY,
            scale: 1.0,
        }
    }

    /// Create a transform with just a position
    pub fn from_position(position: Vector3) -> Self {
        Self {
            position,
            ..Self::identity()
        }
    }

    /// Create a transform with position and rotation
    pub fn from_position_rotation(position: Vector3, rotation: Quaternion) -> Self {
        Self {
            position,
            rotation,
            scale: 1.0,
        }
    }

    /// Builder-style scale override
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Transform a point from local space to world space
    ///
    /// Applies scale, then rotation, then translation.
    pub fn transform_point(&self, p: Vector3) -> Vector3 {
        (p * self.scale).rotate(self.rotation) + self.position
    }

    /// Transform a direction from local space to world space
    ///
    /// Applies scale and rotation, but not translation.
    pub fn transform_direction(&self, d: Vector3) -> Vector3 {
        (d * self.scale).rotate(self.rotation)
    }

    /// Flatten into a row-vector affine matrix
    ///
    /// Rows 1-3 are the scaled, rotated basis vectors; row 4 is the position.
    pub fn to_matrix(&self) -> Matrix {
        let x = Vector3::UNIT_X.rotate(self.rotation) * self.scale;
        let y = Vector3::UNIT_Y.rotate(self.rotation) * self.scale;
        let z = Vector3::UNIT_Z.rotate(self.rotation) * self.scale;
        let p = self.position;
        Matrix::from_rows([
            [x.x, x.y, x.z, 0.0],
            [y.x, y.y, y.z, 0.0],
            [z.x, z.y, z.z, 0.0],
            [p.x, p.y, p.z, 1.0],
        ])
    }

    /// Transform a run of points through the matrix path
    ///
    /// `destination` must be at least as long as `points`.
    pub fn transform_points(
        &self,
        points: &[Vector3],
        destination: &mut [Vector3],
    ) -> Result<(), BatchError> {
        self.to_matrix().apply_all(points, destination)
    }

    /// Transform a run of directions, ignoring position
    pub fn transform_directions(
        &self,
        directions: &[Vector3],
        destination: &mut [Vector3],
    ) -> Result<(), BatchError> {
        let m = self.to_matrix();
        NormalTransform(&m).apply_all(directions, destination)
    }

    /// Transform a vertex buffer in place
    pub fn transform_points_in_place(&self, points: &mut [Vector3]) {
        self.to_matrix().apply_all_in_place(points);
    }

    /// Compute the inverse transform
    ///
    /// The inverse transform undoes this transform:
    /// `transform.inverse().transform_point(transform.transform_point(p)) == p`
    pub fn inverse(&self) -> Self {
        let inv_scale = if self.scale.abs() > 1e-10 {
            1.0 / self.scale
        } else {
            log::warn!("Inverting a transform with zero scale; keeping unit scale");
            1.0
        };
        let inv_rotation = self.rotation.conjugate();
        let inv_position = (-self.position).rotate(inv_rotation) * inv_scale;

        Self {
            position: inv_position,
            rotation: inv_rotation,
            scale: inv_scale,
        }
    }

    /// Compose two transforms: result = self * other
    ///
    /// The composed transform applies `other` first, then `self`.
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            position: self.transform_point(other.position),
            rotation: self.rotation * other.rotation,
            scale: self.scale * other.scale,
        }
    }

    /// Translate the transform by an offset
    pub fn translate(&mut self, offset: Vector3) {
        self.position += offset;
    }

    /// Rotate the transform by a quaternion, applied after the current rotation
    pub fn rotate(&mut self, rotation: Quaternion) {
        self.rotation = (rotation * self.rotation).normalized();
    }

    /// Set uniform scale
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }
}
