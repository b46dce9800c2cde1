//! Quaternion for representing rotations in 3D space
//!
//! A quaternion has a vector part (x, y, z) and a scalar part (w).
//! Unit quaternions encode rotations; q and -q encode the same rotation,
//! which is why the interpolators flip sign when the inputs face away from
//! each other.
//!
//! Two composition orders coexist:
//! - `a * b` (Hamilton product) applies `b` first, then `a`
//! - [`Quaternion::concatenate`]`(a, b)` applies `a` first, then `b`

use std::fmt;
use std::hash::{Hash, Hasher};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::vector3::hash_component;
use crate::{Matrix, Vector3};

/// Above this cosine Slerp switches to linear weights; `sin(θ)` is too close to zero
const SLERP_PARALLEL_THRESHOLD: f32 = 0.999_999;

/// Quaternion with vector part (x, y, z) and scalar part w
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    /// Identity quaternion (no rotation)
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Build from a vector part and a scalar part
    #[inline]
    pub const fn from_vector_scalar(v: Vector3, w: f32) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// Vector part
    #[inline]
    pub const fn xyz(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Rotation of `angle` radians about `axis`
    ///
    /// The axis is used as given; pass a unit vector to get a unit quaternion.
    pub fn from_axis_angle(axis: Vector3, angle: f32) -> Self {
        let half = angle * 0.5;
        let sin_h = half.sin();
        let cos_h = half.cos();
        Self::new(axis.x * sin_h, axis.y * sin_h, axis.z * sin_h, cos_h)
    }

    /// Extract the rotation from the upper 3x3 of an affine matrix
    ///
    /// Picks the formula whose divisor is largest: the trace when positive,
    /// otherwise the dominant diagonal element.
    pub fn from_rotation_matrix(m: &Matrix) -> Self {
        let trace = m.m11 + m.m22 + m.m33;

        if trace > 0.0 {
            let root = (trace + 1.0).sqrt();
            let half = 0.5 / root;
            Self::new(
                (m.m23 - m.m32) * half,
                (m.m31 - m.m13) * half,
                (m.m12 - m.m21) * half,
                root * 0.5,
            )
        } else if m.m11 >= m.m22 && m.m11 >= m.m33 {
            let root = (1.0 + m.m11 - m.m22 - m.m33).sqrt();
            let half = 0.5 / root;
            Self::new(
                0.5 * root,
                (m.m12 + m.m21) * half,
                (m.m13 + m.m31) * half,
                (m.m23 - m.m32) * half,
            )
        } else if m.m22 > m.m33 {
            let root = (1.0 + m.m22 - m.m11 - m.m33).sqrt();
            let half = 0.5 / root;
            Self::new(
                (m.m21 + m.m12) * half,
                0.5 * root,
                (m.m32 + m.m23) * half,
                (m.m31 - m.m13) * half,
            )
        } else {
            let root = (1.0 + m.m33 - m.m11 - m.m22).sqrt();
            let half = 0.5 / root;
            Self::new(
                (m.m31 + m.m13) * half,
                (m.m32 + m.m23) * half,
                0.5 * root,
                (m.m12 - m.m21) * half,
            )
        }
    }

    /// Rotation from Euler angles in radians: yaw about Y, pitch about X, roll about Z
    pub fn from_yaw_pitch_roll(yaw: f32, pitch: f32, roll: f32) -> Self {
        let (sin_roll, cos_roll) = (roll * 0.5).sin_cos();
        let (sin_pitch, cos_pitch) = (pitch * 0.5).sin_cos();
        let (sin_yaw, cos_yaw) = (yaw * 0.5).sin_cos();

        Self::new(
            cos_yaw * sin_pitch * cos_roll + sin_yaw * cos_pitch * sin_roll,
            sin_yaw * cos_pitch * cos_roll - cos_yaw * sin_pitch * sin_roll,
            cos_yaw * cos_pitch * sin_roll - sin_yaw * sin_pitch * cos_roll,
            cos_yaw * cos_pitch * cos_roll + sin_yaw * sin_pitch * sin_roll,
        )
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Scale to unit length; a zero quaternion yields NaN components
    #[inline]
    pub fn normalized(self) -> Self {
        self * (1.0 / self.length())
    }

    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Negate the vector part
    ///
    /// For unit quaternions this is the inverse rotation.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Multiplicative inverse, `conjugate / length_squared`
    #[inline]
    pub fn inverse(self) -> Self {
        self.conjugate() * (1.0 / self.length_squared())
    }

    /// Compose so that `first` is applied, then `second`
    ///
    /// Equivalent to `second * first`.
    #[inline]
    pub fn concatenate(first: Self, second: Self) -> Self {
        second * first
    }

    /// Rotate a vector
    #[inline]
    pub fn rotate(self, v: Vector3) -> Vector3 {
        v.rotate(self)
    }

    /// Normalized linear interpolation along the shorter arc
    ///
    /// The endpoints are returned as given: `self` at `t == 0` and `other` at
    /// `t == 1`, even when the blend would have picked `-other`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        if t == 0.0 {
            return self;
        }
        if t == 1.0 {
            return other;
        }
        let s = 1.0 - t;
        let blended = if self.dot(other) >= 0.0 {
            self * s + other * t
        } else {
            self * s - other * t
        };
        blended.normalized()
    }

    /// Spherical linear interpolation along the shorter arc
    ///
    /// Nearly parallel inputs fall back to linear weights. The result is not
    /// re-normalized.
    pub fn slerp(self, other: Self, t: f32) -> Self {
        let mut cos_theta = self.dot(other);
        let flip = cos_theta < 0.0;
        if flip {
            cos_theta = -cos_theta;
        }

        let target = if flip { -other } else { other };

        if cos_theta > SLERP_PARALLEL_THRESHOLD {
            // Linear weights, written so equal inputs come back unchanged
            return self + (target - self) * t;
        }

        let theta = cos_theta.acos();
        let inv_sin = 1.0 / theta.sin();
        let w1 = ((1.0 - t) * theta).sin() * inv_sin;
        let w2 = (t * theta).sin() * inv_sin;

        self * w1 + target * w2
    }
}

impl Hash for Quaternion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_component(self.x, state);
        hash_component(self.y, state);
        hash_component(self.z, state);
        hash_component(self.w, state);
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{X:{} Y:{} Z:{} W:{}}}", self.x, self.y, self.z, self.w)
    }
}

// Conversions

impl From<[f32; 4]> for Quaternion {
    #[inline]
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<Quaternion> for [f32; 4] {
    #[inline]
    fn from(q: Quaternion) -> Self {
        q.to_array()
    }
}

impl From<(f32, f32, f32, f32)> for Quaternion {
    #[inline]
    fn from((x, y, z, w): (f32, f32, f32, f32)) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<Quaternion> for (f32, f32, f32, f32) {
    #[inline]
    fn from(q: Quaternion) -> Self {
        (q.x, q.y, q.z, q.w)
    }
}

#[cfg(feature = "glam")]
impl From<glam::Quat> for Quaternion {
    #[inline]
    fn from(q: glam::Quat) -> Self {
        Self::new(q.x, q.y, q.z, q.w)
    }
}

#[cfg(feature = "glam")]
impl From<Quaternion> for glam::Quat {
    #[inline]
    fn from(q: Quaternion) -> Self {
        glam::Quat::from_xyzw(q.x, q.y, q.z, q.w)
    }
}

// Operator overloads

impl std::ops::Add for Quaternion {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl std::ops::Sub for Quaternion {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }
}

/// Hamilton product: `self * other` applies `other` first, then `self`
impl std::ops::Mul for Quaternion {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        let a = self;
        let b = other;
        Self::new(
            a.x * b.w + b.x * a.w + (a.y * b.z - a.z * b.y),
            a.y * b.w + b.y * a.w + (a.z * b.x - a.x * b.z),
            a.z * b.w + b.z * a.w + (a.x * b.y - a.y * b.x),
            a.w * b.w - (a.x * b.x + a.y * b.y + a.z * b.z),
        )
    }
}

impl std::ops::MulAssign for Quaternion {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl std::ops::Mul<f32> for Quaternion {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::new(
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
            self.w * scalar,
        )
    }
}

/// `self * other.inverse()`
impl std::ops::Div for Quaternion {
    type Output = Self;
    #[inline]
    fn div(self, other: Self) -> Self {
        self * other.inverse()
    }
}

impl std::ops::Neg for Quaternion {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn quat_approx_eq(a: Quaternion, b: Quaternion) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z) && approx_eq(a.w, b.w)
    }

    fn vec_approx_eq(a: Vector3, b: Vector3) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
    }

    /// Same rotation, either sign
    fn same_rotation(a: Quaternion, b: Quaternion) -> bool {
        quat_approx_eq(a, b) || quat_approx_eq(a, -b)
    }

    /// Row-vector rotation about Z, the layout `from_rotation_matrix` reads
    fn rotation_z(angle: f32) -> Matrix {
        let (s, c) = angle.sin_cos();
        Matrix::from_rows([
            [c, s, 0.0, 0.0],
            [-s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Build the row-vector matrix for `q` by rotating the basis vectors
    fn matrix_from(q: Quaternion) -> Matrix {
        let x = Vector3::UNIT_X.rotate(q);
        let y = Vector3::UNIT_Y.rotate(q);
        let z = Vector3::UNIT_Z.rotate(q);
        Matrix::from_rows([
            [x.x, x.y, x.z, 0.0],
            [y.x, y.y, y.z, 0.0],
            [z.x, z.y, z.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    #[test]
    fn test_identity() {
        let q = Quaternion::IDENTITY;
        assert_eq!(q, Quaternion::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Quaternion::default(), q);
        assert_eq!(q.length(), 1.0);
    }

    #[test]
    fn test_from_vector_scalar() {
        let q = Quaternion::from_vector_scalar(Vector3::new(1.0, 2.0, 3.0), 4.0);
        assert_eq!(q, Quaternion::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(q.xyz(), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_axis_angle_is_unit() {
        let axes = [
            Vector3::UNIT_X,
            Vector3::UNIT_Y,
            Vector3::UNIT_Z,
            Vector3::new(1.0, 2.0, -3.0).normalized(),
        ];
        for axis in axes {
            for angle in [0.0, 0.3, FRAC_PI_2, PI, 5.0, -2.0] {
                let q = Quaternion::from_axis_angle(axis, angle);
                assert!(approx_eq(q.length(), 1.0), "axis {:?} angle {}", axis, angle);
            }
        }
    }

    #[test]
    fn test_axis_angle_components() {
        let q = Quaternion::from_axis_angle(Vector3::UNIT_Z, FRAC_PI_2);
        let h = FRAC_PI_4;
        assert!(quat_approx_eq(q, Quaternion::new(0.0, 0.0, h.sin(), h.cos())));
    }

    #[test]
    fn test_axis_angle_does_not_normalize_axis() {
        let q = Quaternion::from_axis_angle(Vector3::new(0.0, 0.0, 2.0), PI);
        assert!(approx_eq(q.z, 2.0));
    }

    #[test]
    fn test_rotation_matrix_identity_is_exact() {
        assert_eq!(Quaternion::from_rotation_matrix(&Matrix::IDENTITY), Quaternion::IDENTITY);
    }

    #[test]
    fn test_rotation_matrix_trace_branch() {
        let m = rotation_z(FRAC_PI_2);
        let q = Quaternion::from_rotation_matrix(&m);
        let expected = Quaternion::from_axis_angle(Vector3::UNIT_Z, FRAC_PI_2);
        assert!(quat_approx_eq(q, expected), "got {:?}", q);
    }

    #[test]
    fn test_rotation_matrix_diagonal_branches() {
        // 180° rotations have trace -1 and exercise each diagonal branch
        let cases = [Vector3::UNIT_X, Vector3::UNIT_Y, Vector3::UNIT_Z];
        for axis in cases {
            let q = Quaternion::from_axis_angle(axis, PI);
            let back = Quaternion::from_rotation_matrix(&matrix_from(q));
            assert!(same_rotation(back, q), "axis {:?}: got {:?}", axis, back);
        }
    }

    #[test]
    fn test_rotation_matrix_round_trip() {
        let q = Quaternion::from_yaw_pitch_roll(0.7, -1.1, 2.9);
        let back = Quaternion::from_rotation_matrix(&matrix_from(q));
        assert!(same_rotation(back, q), "expected {:?}, got {:?}", q, back);
        assert!(approx_eq(back.length(), 1.0));
    }

    #[test]
    fn test_rotation_matrix_agrees_with_vector_transform() {
        let m = rotation_z(0.9);
        let q = Quaternion::from_rotation_matrix(&m);
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert!(vec_approx_eq(v.rotate(q), v.transform(&m)));
    }

    #[test]
    fn test_yaw_pitch_roll_single_axes() {
        let yaw = Quaternion::from_yaw_pitch_roll(0.4, 0.0, 0.0);
        assert!(quat_approx_eq(yaw, Quaternion::from_axis_angle(Vector3::UNIT_Y, 0.4)));

        let pitch = Quaternion::from_yaw_pitch_roll(0.0, 0.4, 0.0);
        assert!(quat_approx_eq(pitch, Quaternion::from_axis_angle(Vector3::UNIT_X, 0.4)));

        let roll = Quaternion::from_yaw_pitch_roll(0.0, 0.0, 0.4);
        assert!(quat_approx_eq(roll, Quaternion::from_axis_angle(Vector3::UNIT_Z, 0.4)));
    }

    #[test]
    fn test_yaw_pitch_roll_matches_concatenated_axes() {
        let (yaw, pitch, roll) = (0.3, -0.8, 1.4);
        let q = Quaternion::from_yaw_pitch_roll(yaw, pitch, roll);

        // Roll first, then pitch, then yaw
        let r = Quaternion::from_axis_angle(Vector3::UNIT_Z, roll);
        let p = Quaternion::from_axis_angle(Vector3::UNIT_X, pitch);
        let y = Quaternion::from_axis_angle(Vector3::UNIT_Y, yaw);
        let composed = Quaternion::concatenate(Quaternion::concatenate(r, p), y);

        assert!(quat_approx_eq(q, composed), "expected {:?}, got {:?}", composed, q);
        assert!(approx_eq(q.length(), 1.0));
    }

    #[test]
    fn test_multiply_order() {
        // a * b applies b first
        let a = Quaternion::from_axis_angle(Vector3::UNIT_Z, FRAC_PI_2);
        let b = Quaternion::from_axis_angle(Vector3::UNIT_X, FRAC_PI_2);
        let v = Vector3::UNIT_Y;

        let composed = (a * b).rotate(v);
        let stepwise = a.rotate(b.rotate(v));
        assert!(vec_approx_eq(composed, stepwise), "{:?} vs {:?}", composed, stepwise);

        // The other order gives a different answer
        assert!(!vec_approx_eq((b * a).rotate(v), stepwise));
    }

    #[test]
    fn test_concatenate_is_reverse_multiply() {
        let a = Quaternion::from_yaw_pitch_roll(0.1, 0.2, 0.3);
        let b = Quaternion::from_yaw_pitch_roll(-0.5, 0.9, 0.0);
        assert_eq!(Quaternion::concatenate(a, b), b * a);

        let v = Vector3::new(1.0, -2.0, 0.5);
        let composed = Quaternion::concatenate(a, b).rotate(v);
        assert!(vec_approx_eq(composed, b.rotate(a.rotate(v))));
    }

    #[test]
    fn test_multiply_identity() {
        let q = Quaternion::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(q * Quaternion::IDENTITY, q);
        assert_eq!(Quaternion::IDENTITY * q, q);
    }

    #[test]
    fn test_add_sub_neg_scale() {
        let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let b = Quaternion::new(0.5, 0.5, 0.5, 0.5);
        assert_eq!(a + b, Quaternion::new(1.5, 2.5, 3.5, 4.5));
        assert_eq!(a - b, Quaternion::new(0.5, 1.5, 2.5, 3.5));
        assert_eq!(-a, Quaternion::new(-1.0, -2.0, -3.0, -4.0));
        assert_eq!(a * 2.0, Quaternion::new(2.0, 4.0, 6.0, 8.0));

        let mut c = a;
        c *= Quaternion::IDENTITY;
        assert_eq!(c, a);
    }

    #[test]
    fn test_conjugate_twice() {
        let q = Quaternion::new(0.1, -0.2, 0.3, 0.9);
        assert_eq!(q.conjugate().conjugate(), q);
        assert_eq!(q.conjugate(), Quaternion::new(-0.1, 0.2, -0.3, 0.9));
    }

    #[test]
    fn test_inverse_times_q_is_identity() {
        let q = Quaternion::from_yaw_pitch_roll(1.0, 0.5, -0.25);
        assert!(quat_approx_eq(q.inverse() * q, Quaternion::IDENTITY));
        assert!(quat_approx_eq(q * q.inverse(), Quaternion::IDENTITY));
    }

    #[test]
    fn test_inverse_non_unit() {
        let q = Quaternion::new(0.0, 0.0, 0.0, 2.0);
        assert_eq!(q.inverse(), Quaternion::new(0.0, 0.0, 0.0, 0.5));
    }

    #[test]
    fn test_divide() {
        let a = Quaternion::from_axis_angle(Vector3::UNIT_Y, 1.0);
        let b = Quaternion::from_axis_angle(Vector3::UNIT_Y, 0.25);
        assert!(quat_approx_eq(a / b, Quaternion::from_axis_angle(Vector3::UNIT_Y, 0.75)));
        assert!(quat_approx_eq(a / a, Quaternion::IDENTITY));
    }

    #[test]
    fn test_normalize() {
        let q = Quaternion::new(1.0, 1.0, 1.0, 1.0);
        let n = q.normalized();
        assert_eq!(n, Quaternion::new(0.5, 0.5, 0.5, 0.5));

        let mut m = q;
        m.normalize();
        assert_eq!(m, n);

        assert!(Quaternion::new(0.0, 0.0, 0.0, 0.0).normalized().w.is_nan());
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Quaternion::IDENTITY;
        let b = Quaternion::new(0.0, 0.0, 1.0, 0.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn test_lerp_endpoints_general_rotation() {
        // Re-normalizing these would move the last bit
        let a = Quaternion::from_yaw_pitch_roll(0.3, -1.1, 2.0);
        let b = Quaternion::from_axis_angle(Vector3::new(1.0, 2.0, -0.5).normalized(), 2.7);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(-b, 1.0), -b);
    }

    #[test]
    fn test_lerp_is_normalized() {
        let a = Quaternion::IDENTITY;
        let b = Quaternion::from_axis_angle(Vector3::UNIT_X, 2.0);
        let mid = a.lerp(b, 0.5);
        assert!(approx_eq(mid.length(), 1.0));
    }

    #[test]
    fn test_lerp_takes_shorter_path() {
        let a = Quaternion::from_axis_angle(Vector3::UNIT_Z, 0.2);
        let b = Quaternion::from_axis_angle(Vector3::UNIT_Z, 0.6);
        // -b is the same rotation as b
        let direct = a.lerp(b, 0.5);
        let flipped = a.lerp(-b, 0.5);
        assert!(quat_approx_eq(direct, flipped), "{:?} vs {:?}", direct, flipped);
    }

    #[test]
    fn test_slerp_same_input_is_exact() {
        let q = Quaternion::new(0.5, 0.5, 0.5, 0.5);
        for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_eq!(q.slerp(q, t), q);
        }
        assert_eq!(Quaternion::IDENTITY.slerp(Quaternion::IDENTITY, 0.625), Quaternion::IDENTITY);
    }

    #[test]
    fn test_slerp_same_general_rotation_is_exact() {
        let q = Quaternion::from_yaw_pitch_roll(0.1, 0.2, 0.3);
        for i in 0..=100 {
            let t = i as f32 / 100.0;
            assert_eq!(q.slerp(q, t), q, "t = {}", t);
        }
    }

    #[test]
    fn test_slerp_same_rotation_opposite_sign() {
        let q = Quaternion::from_axis_angle(Vector3::new(0.0, 3.0, 4.0).normalized(), 1.2);
        for t in [0.0, 0.3, 0.5, 1.0] {
            assert_eq!(q.slerp(-q, t), q);
        }
    }

    #[test]
    fn test_slerp_midpoint() {
        let a = Quaternion::IDENTITY;
        let b = Quaternion::from_axis_angle(Vector3::UNIT_Y, FRAC_PI_2);
        let mid = a.slerp(b, 0.5);
        assert!(approx_eq(mid.length(), 1.0));
        assert!(quat_approx_eq(mid, Quaternion::from_axis_angle(Vector3::UNIT_Y, FRAC_PI_4)));
    }

    #[test]
    fn test_slerp_endpoints() {
        let a = Quaternion::from_axis_angle(Vector3::UNIT_X, 0.3);
        let b = Quaternion::from_axis_angle(Vector3::UNIT_Z, 1.3);
        assert!(quat_approx_eq(a.slerp(b, 0.0), a));
        assert!(quat_approx_eq(a.slerp(b, 1.0), b));
    }

    #[test]
    fn test_slerp_takes_shorter_path() {
        let a = Quaternion::IDENTITY;
        let b = Quaternion::from_axis_angle(Vector3::UNIT_Y, 1.0);
        let direct = a.slerp(b, 0.5);
        let flipped = a.slerp(-b, 0.5);
        assert!(quat_approx_eq(direct, flipped));
        assert!(quat_approx_eq(direct, Quaternion::from_axis_angle(Vector3::UNIT_Y, 0.5)));
    }

    #[test]
    fn test_slerp_nearly_parallel_is_finite() {
        let a = Quaternion::IDENTITY;
        let b = Quaternion::from_axis_angle(Vector3::UNIT_X, 1e-4);
        let r = a.slerp(b, 0.5);
        assert!(r.x.is_finite() && r.w.is_finite());
        assert!(approx_eq(r.length(), 1.0));
    }

    #[test]
    fn test_hash_consistent_with_eq() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Quaternion::new(0.0, 0.0, 0.0, 1.0));
        assert!(set.contains(&Quaternion::new(-0.0, 0.0, -0.0, 1.0)));
        assert!(!set.contains(&Quaternion::new(0.0, 0.0, 0.0, -1.0)));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Quaternion::IDENTITY), "{X:0 Y:0 Z:0 W:1}");
    }

    #[test]
    fn test_array_and_tuple_round_trip_bit_identical() {
        let q = Quaternion::new(0.1, -0.0, 3.3e-39, 0.7);

        let arr: [f32; 4] = q.into();
        let back = Quaternion::from(arr);
        assert_eq!(back.to_array().map(f32::to_bits), q.to_array().map(f32::to_bits));

        let tuple: (f32, f32, f32, f32) = q.into();
        let back = Quaternion::from(tuple);
        assert_eq!(back.to_array().map(f32::to_bits), q.to_array().map(f32::to_bits));
    }

    #[cfg(feature = "glam")]
    #[test]
    fn test_glam_round_trip() {
        let q = Quaternion::from_yaw_pitch_roll(0.1, 0.2, 0.3);
        let g: glam::Quat = q.into();
        assert_eq!(Quaternion::from(g), q);
    }
}
