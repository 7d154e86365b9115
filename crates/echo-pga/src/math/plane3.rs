// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::ops::{Mul, Neg};

use bytemuck::{Pod, Zeroable};

use crate::math::{inverse_sqrt, sqrt, Point3, Vec3, Vec4};

/// Plane on **e**₄₂₃, **e**₄₃₁, **e**₄₁₂, **e**₃₂₁.
///
/// `(x, y, z)` is the normal and `w` the offset: a point `p` lies on the
/// plane when `x·p.x + y·p.y + z·p.z + w = 0`. The plane is unitized when
/// its normal has unit length, in which case that expression is the signed
/// distance from the plane.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane3 {
    /// Coordinate on **e**₄₂₃ (normal x).
    pub x: f32,
    /// Coordinate on **e**₄₃₁ (normal y).
    pub y: f32,
    /// Coordinate on **e**₄₁₂ (normal z).
    pub z: f32,
    /// Coordinate on **e**₃₂₁ (offset).
    pub w: f32,
}

impl Plane3 {
    /// The zero plane.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a plane from components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Plane with the given normal passing through `point`.
    pub fn from_normal_point(normal: Vec3, point: Point3) -> Self {
        Self::new(
            normal.x,
            normal.y,
            normal.z,
            -normal.dot(&point.to_vec3()),
        )
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Normal direction `(x, y, z)`.
    pub fn normal(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Length of the normal.
    pub fn weight_norm(&self) -> f32 {
        sqrt(self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// Scales in place to a unit normal. A zero normal leaves non-finite
    /// components.
    pub fn unitize(&mut self) -> &mut Self {
        *self = *self * inverse_sqrt(self.x * self.x + self.y * self.y + self.z * self.z);
        self
    }

    /// By-value form of [`Plane3::unitize`].
    pub fn unitized(mut self) -> Self {
        self.unitize();
        self
    }

    /// Signed distance of `point` from a unitized plane.
    pub fn signed_distance(&self, point: &Point3) -> f32 {
        self.x * point.x + self.y * point.y + self.z * point.z + self.w
    }

    /// Antiwedge with a homogeneous point: zero when the point lies on the plane.
    pub fn antiwedge(&self, point: &Vec4) -> f32 {
        self.x * point.x + self.y * point.y + self.z * point.z + self.w * point.w
    }
}

impl From<[f32; 4]> for Plane3 {
    fn from(value: [f32; 4]) -> Self {
        Self::new(value[0], value[1], value[2], value[3])
    }
}

impl Mul<f32> for Plane3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl Neg for Plane3 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}
