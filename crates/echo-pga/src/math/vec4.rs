// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::ops::{Mul, Neg};

use bytemuck::{Pod, Zeroable};

use crate::math::{Point3, Vec3};

/// 4D vector on **e**₁, **e**₂, **e**₃, **e**₄.
///
/// Interpreted as a homogeneous point: `w = 1` is a location, `w = 0` a
/// direction (point at infinity). Other weights represent the point
/// `(x/w, y/w, z/w)`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec4 {
    /// Coordinate on **e**₁.
    pub x: f32,
    /// Coordinate on **e**₂.
    pub y: f32,
    /// Coordinate on **e**₃.
    pub z: f32,
    /// Projective coordinate on **e**₄.
    pub w: f32,
}

impl Vec4 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Returns the `(x, y, z)` part, dropping `w`.
    pub fn xyz(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// 4D dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Divides through by `w`. A zero `w` produces non-finite coordinates.
    pub fn project(&self) -> Point3 {
        let inv = 1.0 / self.w;
        Point3::new(self.x * inv, self.y * inv, self.z * inv)
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from(value: [f32; 4]) -> Self {
        Self::new(value[0], value[1], value[2], value[3])
    }
}

impl From<Point3> for Vec4 {
    fn from(point: Point3) -> Self {
        point.to_vec4()
    }
}

impl Mul<f32> for Vec4 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl Neg for Vec4 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}
