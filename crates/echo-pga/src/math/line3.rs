// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::ops::Neg;

use bytemuck::{Pod, Zeroable};

use crate::math::{inverse_sqrt, Bivec3, Point3, Vec3};

/// Line in Plücker form.
///
/// * `v`: direction on **e**₄₁, **e**₄₂, **e**₄₃.
/// * `m`: moment on **e**₂₃, **e**₃₁, **e**₁₂.
///
/// The line through `p` and `q` (the join `p ∧ q`) has `v = q − p` and
/// `m = p × q`. A line is unitized when `|v| = 1`; valid lines satisfy
/// `v · m = 0`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line3 {
    /// Direction part.
    pub v: Vec3,
    /// Moment part.
    pub m: Bivec3,
}

impl Line3 {
    /// Creates a line from its direction and moment.
    pub const fn new(v: Vec3, m: Bivec3) -> Self {
        Self { v, m }
    }

    /// Creates a line from the six Plücker coordinates.
    pub const fn from_components(vx: f32, vy: f32, vz: f32, mx: f32, my: f32, mz: f32) -> Self {
        Self::new(Vec3::new(vx, vy, vz), Bivec3::new(mx, my, mz))
    }

    /// Join of two points, oriented from `p` toward `q`.
    pub fn from_points(p: &Point3, q: &Point3) -> Self {
        let a = p.to_vec3();
        let b = q.to_vec3();
        let m = a.cross(&b);
        Self::new(b - a, Bivec3::new(m.x, m.y, m.z))
    }

    /// Line through `point` running along `direction`.
    pub fn from_point_direction(point: &Point3, direction: Vec3) -> Self {
        let m = point.to_vec3().cross(&direction);
        Self::new(direction, Bivec3::new(m.x, m.y, m.z))
    }

    /// Returns `[vx, vy, vz, mx, my, mz]`.
    pub fn to_array(self) -> [f32; 6] {
        [self.v.x, self.v.y, self.v.z, self.m.x, self.m.y, self.m.z]
    }

    /// Scales in place to a unit direction.
    pub fn unitize(&mut self) -> &mut Self {
        let s = inverse_sqrt(self.v.length_squared());
        self.v = self.v.scale(s);
        self.m = Bivec3::new(self.m.x * s, self.m.y * s, self.m.z * s);
        self
    }

    /// By-value form of [`Line3::unitize`].
    pub fn unitized(mut self) -> Self {
        self.unitize();
        self
    }
}

impl Neg for Line3 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.v, -self.m)
    }
}
