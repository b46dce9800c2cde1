//! 4x4 affine matrix layout consumed by the kernel
//!
//! The kernel never builds or multiplies matrices itself; it only reads their
//! sixteen elements. The layout follows the row-vector convention:
//! - rows 1-3 (`m11..m33`) hold the transformed basis vectors
//! - row 4 (`m41, m42, m43`) holds the translation
//!
//! A point `p` is transformed as `p * M`, so `x' = x*m11 + y*m21 + z*m31 + m41`.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::Vector3;

/// 4x4 matrix, element `mRC` is row `R`, column `C`
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Matrix {
    pub m11: f32,
    pub m12: f32,
    pub m13: f32,
    pub m14: f32,
    pub m21: f32,
    pub m22: f32,
    pub m23: f32,
    pub m24: f32,
    pub m31: f32,
    pub m32: f32,
    pub m33: f32,
    pub m34: f32,
    pub m41: f32,
    pub m42: f32,
    pub m43: f32,
    pub m44: f32,
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix {
    /// Identity matrix
    pub const IDENTITY: Self = Self::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    /// Build a matrix from its four rows
    ///
    /// # Example
    /// ```
    /// use spatial3d_math::{Matrix, Vector3};
    /// // Pure translation by (1, 2, 3)
    /// let m = Matrix::from_rows([
    ///     [1.0, 0.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0, 0.0],
    ///     [0.0, 0.0, 1.0, 0.0],
    ///     [1.0, 2.0, 3.0, 1.0],
    /// ]);
    /// assert_eq!(Vector3::ZERO.transform(&m), Vector3::new(1.0, 2.0, 3.0));
    /// ```
    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        let [r1, r2, r3, r4] = rows;
        Self {
            m11: r1[0],
            m12: r1[1],
            m13: r1[2],
            m14: r1[3],
            m21: r2[0],
            m22: r2[1],
            m23: r2[2],
            m24: r2[3],
            m31: r3[0],
            m32: r3[1],
            m33: r3[2],
            m34: r3[3],
            m41: r4[0],
            m42: r4[1],
            m43: r4[2],
            m44: r4[3],
        }
    }

    /// The four rows of the matrix
    pub const fn to_rows(&self) -> [[f32; 4]; 4] {
        [
            [self.m11, self.m12, self.m13, self.m14],
            [self.m21, self.m22, self.m23, self.m24],
            [self.m31, self.m32, self.m33, self.m34],
            [self.m41, self.m42, self.m43, self.m44],
        ]
    }

    /// Translation row
    #[inline]
    pub fn translation(&self) -> Vector3 {
        Vector3::new(self.m41, self.m42, self.m43)
    }
}

impl From<[[f32; 4]; 4]> for Matrix {
    #[inline]
    fn from(rows: [[f32; 4]; 4]) -> Self {
        Self::from_rows(rows)
    }
}

impl From<Matrix> for [[f32; 4]; 4] {
    #[inline]
    fn from(m: Matrix) -> Self {
        m.to_rows()
    }
}
