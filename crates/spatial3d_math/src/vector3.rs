//! 3D Vector type
//!
//! Every operation is plain IEEE arithmetic: zero divisors and zero-length
//! normalization produce infinities or NaN instead of panicking. Callers that
//! care check `length_squared() > 0.0` first.

use std::fmt;
use std::hash::{Hash, Hasher};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::{Matrix, Quaternion};

/// 3D Vector with x, y, z components
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);
    /// Forward is -Z (right-handed, camera looks down -Z)
    pub const FORWARD: Self = Self::new(0.0, 0.0, -1.0);
    pub const BACKWARD: Self = Self::new(0.0, 0.0, 1.0);

    /// Create a new Vector3
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Vector with all three components set to `value`
    #[inline]
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value, value)
    }

    /// Components as an array
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// View a vertex buffer as a flat run of floats (x0, y0, z0, x1, ...)
    #[inline]
    pub fn as_flat(vectors: &[Self]) -> &[f32] {
        bytemuck::cast_slice(vectors)
    }

    /// Mutable flat view of a vertex buffer
    #[inline]
    pub fn as_flat_mut(vectors: &mut [Self]) -> &mut [f32] {
        bytemuck::cast_slice_mut(vectors)
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product (right-handed)
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - other.y * self.z,
            -(self.x * other.z - other.x * self.z),
            self.x * other.y - other.x * self.y,
        )
    }

    /// Length squared (faster than length)
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Length (magnitude)
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Distance squared between two points
    #[inline]
    pub fn distance_squared(self, other: Self) -> f32 {
        (self - other).length_squared()
    }

    /// Distance between two points
    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Scale to unit length
    ///
    /// A zero vector yields NaN components.
    #[inline]
    pub fn normalized(self) -> Self {
        self * (1.0 / self.length())
    }

    /// Scale this vector to unit length in place
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Linear interpolation `a + (b - a) * t`, unclamped
    ///
    /// Returns `other` exactly at `t == 1`, where `b - a` may have dropped bits.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        if t == 1.0 {
            return other;
        }
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
            self.z + (other.z - self.z) * t,
        )
    }

    /// Linear interpolation `(1 - t) * a + t * b`
    ///
    /// Slightly slower than [`lerp`](Self::lerp) but lands on `other` more
    /// accurately as `t` approaches 1.
    #[inline]
    pub fn lerp_precise(self, other: Self, t: f32) -> Self {
        Self::new(
            (1.0 - t) * self.x + other.x * t,
            (1.0 - t) * self.y + other.y * t,
            (1.0 - t) * self.z + other.z * t,
        )
    }

    /// Cubic Hermite spline between `self` and `other` with the given tangents
    pub fn hermite(self, tangent1: Self, other: Self, tangent2: Self, t: f32) -> Self {
        Self::new(
            hermite(self.x, tangent1.x, other.x, tangent2.x, t),
            hermite(self.y, tangent1.y, other.y, tangent2.y, t),
            hermite(self.z, tangent1.z, other.z, tangent2.z, t),
        )
    }

    /// Catmull-Rom spline through `v2` and `v3`, using `v1` and `v4` as
    /// neighbouring control points
    pub fn catmull_rom(v1: Self, v2: Self, v3: Self, v4: Self, t: f32) -> Self {
        Self::new(
            catmull_rom(v1.x, v2.x, v3.x, v4.x, t),
            catmull_rom(v1.y, v2.y, v3.y, v4.y, t),
            catmull_rom(v1.z, v2.z, v3.z, v4.z, t),
        )
    }

    /// Smooth Hermite interpolation with zero tangents; `t` is clamped to [0, 1]
    pub fn smooth_step(self, other: Self, t: f32) -> Self {
        let t = clamp(t, 0.0, 1.0);
        Self::new(
            hermite(self.x, 0.0, other.x, 0.0, t),
            hermite(self.y, 0.0, other.y, 0.0, t),
            hermite(self.z, 0.0, other.z, 0.0, t),
        )
    }

    /// Point in the triangle (v1, v2, v3) given barycentric weights for v2 and v3
    #[inline]
    pub fn barycentric(v1: Self, v2: Self, v3: Self, amount1: f32, amount2: f32) -> Self {
        Self::new(
            v1.x + (v2.x - v1.x) * amount1 + (v3.x - v1.x) * amount2,
            v1.y + (v2.y - v1.y) * amount1 + (v3.y - v1.y) * amount2,
            v1.z + (v2.z - v1.z) * amount1 + (v3.z - v1.z) * amount2,
        )
    }

    /// Reflect an incident vector about a unit normal
    ///
    /// `normal` is assumed to be normalized already.
    #[inline]
    pub fn reflect(self, normal: Self) -> Self {
        let d = 2.0 * self.dot(normal);
        Self::new(
            self.x - normal.x * d,
            self.y - normal.y * d,
            self.z - normal.z * d,
        )
    }

    /// Component-wise ceiling
    #[inline]
    pub fn ceil(self) -> Self {
        self.map(f32::ceil)
    }

    /// Component-wise floor
    #[inline]
    pub fn floor(self) -> Self {
        self.map(f32::floor)
    }

    /// Component-wise rounding, halfway cases to even
    #[inline]
    pub fn round(self) -> Self {
        self.map(f32::round_ties_even)
    }

    #[inline]
    pub fn ceil_in_place(&mut self) {
        *self = self.ceil();
    }

    #[inline]
    pub fn floor_in_place(&mut self) {
        *self = self.floor();
    }

    #[inline]
    pub fn round_in_place(&mut self) {
        *self = self.round();
    }

    /// Clamp each component between corresponding min and max values
    ///
    /// Never panics: when `min > max` for a component, `min` wins.
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self::new(
            clamp(self.x, min.x, max.x),
            clamp(self.y, min.y, max.y),
            clamp(self.z, min.z, max.z),
        )
    }

    /// Component-wise maximum
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(
            if self.x > other.x { self.x } else { other.x },
            if self.y > other.y { self.y } else { other.y },
            if self.z > other.z { self.z } else { other.z },
        )
    }

    /// Component-wise minimum
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(
            if self.x < other.x { self.x } else { other.x },
            if self.y < other.y { self.y } else { other.y },
            if self.z < other.z { self.z } else { other.z },
        )
    }

    /// Transform a position by an affine matrix (row vector, translation applied)
    #[inline]
    pub fn transform(self, m: &Matrix) -> Self {
        Self::new(
            self.x * m.m11 + self.y * m.m21 + self.z * m.m31 + m.m41,
            self.x * m.m12 + self.y * m.m22 + self.z * m.m32 + m.m42,
            self.x * m.m13 + self.y * m.m23 + self.z * m.m33 + m.m43,
        )
    }

    /// Transform a direction or normal by a matrix, ignoring translation
    #[inline]
    pub fn transform_normal(self, m: &Matrix) -> Self {
        Self::new(
            self.x * m.m11 + self.y * m.m21 + self.z * m.m31,
            self.x * m.m12 + self.y * m.m22 + self.z * m.m32,
            self.x * m.m13 + self.y * m.m23 + self.z * m.m33,
        )
    }

    /// Rotate by a quaternion
    #[inline]
    pub fn rotate(self, q: Quaternion) -> Self {
        let x = 2.0 * (q.y * self.z - q.z * self.y);
        let y = 2.0 * (q.z * self.x - q.x * self.z);
        let z = 2.0 * (q.x * self.y - q.y * self.x);

        Self::new(
            self.x + x * q.w + (q.y * z - q.z * y),
            self.y + y * q.w + (q.z * x - q.x * z),
            self.z + z * q.w + (q.x * y - q.y * x),
        )
    }

    #[inline]
    fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }
}

/// Scalar cubic Hermite, exact at both ends
fn hermite(value1: f32, tangent1: f32, value2: f32, tangent2: f32, t: f32) -> f32 {
    if t == 0.0 {
        return value1;
    }
    if t == 1.0 {
        return value2;
    }
    let t2 = t * t;
    let t3 = t2 * t;
    (2.0 * value1 - 2.0 * value2 + tangent2 + tangent1) * t3
        + (3.0 * value2 - 3.0 * value1 - 2.0 * tangent1 - tangent2) * t2
        + tangent1 * t
        + value1
}

fn catmull_rom(v1: f32, v2: f32, v3: f32, v4: f32, t: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * (2.0 * v2
        + (v3 - v1) * t
        + (2.0 * v1 - 5.0 * v2 + 4.0 * v3 - v4) * t2
        + (3.0 * v2 - v1 - 3.0 * v3 + v4) * t3)
}

#[inline]
fn clamp(value: f32, min: f32, max: f32) -> f32 {
    let value = if value > max { max } else { value };
    if value < min {
        min
    } else {
        value
    }
}

/// Hash a component consistently with `==`: 0.0 and -0.0 hash alike
#[inline]
pub(crate) fn hash_component<H: Hasher>(value: f32, state: &mut H) {
    let bits = if value == 0.0 { 0 } else { value.to_bits() };
    bits.hash(state);
}

impl Hash for Vector3 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_component(self.x, state);
        hash_component(self.y, state);
        hash_component(self.z, state);
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{X:{} Y:{} Z:{}}}", self.x, self.y, self.z)
    }
}

// Conversions

impl From<[f32; 3]> for Vector3 {
    #[inline]
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f32; 3] {
    #[inline]
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

impl From<(f32, f32, f32)> for Vector3 {
    #[inline]
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for (f32, f32, f32) {
    #[inline]
    fn from(v: Vector3) -> Self {
        (v.x, v.y, v.z)
    }
}

#[cfg(feature = "glam")]
impl From<glam::Vec3> for Vector3 {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

#[cfg(feature = "glam")]
impl From<Vector3> for glam::Vec3 {
    #[inline]
    fn from(v: Vector3) -> Self {
        glam::Vec3::new(v.x, v.y, v.z)
    }
}

// Operator overloads

impl std::ops::Add for Vector3 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl std::ops::AddAssign for Vector3 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl std::ops::Sub for Vector3 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl std::ops::SubAssign for Vector3 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl std::ops::Mul for Vector3 {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }
}

impl std::ops::MulAssign for Vector3 {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl std::ops::Mul<f32> for Vector3 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl std::ops::Mul<Vector3> for f32 {
    type Output = Vector3;
    #[inline]
    fn mul(self, v: Vector3) -> Vector3 {
        v * self
    }
}

impl std::ops::MulAssign<f32> for Vector3 {
    #[inline]
    fn mul_assign(&mut self, scalar: f32) {
        *self = *self * scalar;
    }
}

impl std::ops::Div for Vector3 {
    type Output = Self;
    #[inline]
    fn div(self, other: Self) -> Self {
        Self::new(self.x / other.x, self.y / other.y, self.z / other.z)
    }
}

impl std::ops::DivAssign for Vector3 {
    #[inline]
    fn div_assign(&mut self, other: Self) {
        *self = *self / other;
    }
}

impl std::ops::Div<f32> for Vector3 {
    type Output = Self;
    #[inline]
    fn div(self, divider: f32) -> Self {
        self * (1.0 / divider)
    }
}

impl std::ops::DivAssign<f32> for Vector3 {
    #[inline]
    fn div_assign(&mut self, divider: f32) {
        *self = *self / divider;
    }
}

impl std::ops::Neg for Vector3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}
