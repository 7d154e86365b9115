// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Flectors: improper rigid transforms (reflections composed with rotation
//! and translation).
//!
//! A flector is the sum of a vector `p` and a plane `g`:
//!
//! ```text
//! F = p.x e₁ + p.y e₂ + p.z e₃ + p.w e₄ + g.x e₄₂₃ + g.y e₄₃₁ + g.z e₄₁₂ + g.w e₃₂₁
//! ```
//!
//! It is unitized when `p.w² + g.x² + g.y² + g.z² = 1`, and well formed when
//! `p.x g.x + p.y g.y + p.z g.z + p.w g.w = 0`. Every constructor in this
//! module yields a well-formed flector; the plain component constructors
//! take the caller's word for it.
//!
//! Products follow the geometric antiproduct, so `b * a` applies `a` first.
//! Two flectors compose into a [`Motor3`](crate::math::Motor3).

use core::ops::{Div, DivAssign, Mul, MulAssign, Neg};

use bytemuck::{Pod, Zeroable};
use tracing::trace;

use crate::math::{inverse_sqrt, sqrt, Point3, Plane3, Vec4};

mod apply;
mod construct;
mod matrix;
mod product;

pub use construct::{make_rotoreflection, make_rotoreflection_about_line, make_transflection};

/// Improper isometry of 3D space in projective geometric algebra.
///
/// Zero-initialized by [`Default`]; the all-zero flector is not a valid
/// transform but is a convenient placeholder before [`Flector3::set`].
///
/// # Examples
/// ```
/// use echo_pga::math::{Flector3, Plane3, Vec3};
/// let mirror = Flector3::make_transflection(Vec3::ZERO, Plane3::new(0.0, 0.0, 1.0, 0.0));
/// assert_eq!(mirror, Flector3::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0));
/// ```
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flector3 {
    /// Vector part on `e₁ e₂ e₃ e₄`.
    pub p: Vec4,
    /// Plane part on `e₄₂₃ e₄₃₁ e₄₁₂ e₃₂₁`.
    pub g: Plane3,
}

// Views reinterpret `[f32; 8]` runs as flectors.
const _: () = assert!(core::mem::size_of::<Flector3>() == 32);
const _: () = assert!(core::mem::align_of::<Flector3>() == core::mem::align_of::<f32>());

impl Flector3 {
    /// Creates a flector from its eight components.
    pub const fn new(
        px: f32,
        py: f32,
        pz: f32,
        pw: f32,
        gx: f32,
        gy: f32,
        gz: f32,
        gw: f32,
    ) -> Self {
        Self {
            p: Vec4::new(px, py, pz, pw),
            g: Plane3::new(gx, gy, gz, gw),
        }
    }

    /// Creates a flector from a vector part and a plane part.
    pub const fn from_parts(p: Vec4, g: Plane3) -> Self {
        Self { p, g }
    }

    /// Creates a flector from a point (weight 1) and a plane.
    pub const fn from_point_plane(point: Point3, g: Plane3) -> Self {
        Self {
            p: Vec4::new(point.x, point.y, point.z, 1.0),
            g,
        }
    }

    /// Overwrites all eight components.
    pub fn set(
        &mut self,
        px: f32,
        py: f32,
        pz: f32,
        pw: f32,
        gx: f32,
        gy: f32,
        gz: f32,
        gw: f32,
    ) -> &mut Self {
        *self = Self::new(px, py, pz, pw, gx, gy, gz, gw);
        self
    }

    /// Overwrites both parts.
    pub fn set_parts(&mut self, p: Vec4, g: Plane3) -> &mut Self {
        self.p = p;
        self.g = g;
        self
    }

    /// Overwrites both parts from a point (weight 1) and a plane.
    pub fn set_point_plane(&mut self, point: Point3, g: Plane3) -> &mut Self {
        *self = Self::from_point_plane(point, g);
        self
    }

    /// Returns `[px, py, pz, pw, gx, gy, gz, gw]`.
    pub fn to_array(self) -> [f32; 8] {
        [
            self.p.x, self.p.y, self.p.z, self.p.w, self.g.x, self.g.y, self.g.z, self.g.w,
        ]
    }

    /// Negates the vector part. For flectors the reverse and the
    /// antireverse coincide.
    pub fn antireverse(&self) -> Self {
        Self::from_parts(-self.p, self.g)
    }

    /// Same as [`Flector3::antireverse`].
    pub fn reverse(&self) -> Self {
        self.antireverse()
    }

    /// Magnitude of the bulk components `(p.x, p.y, p.z, g.w)`.
    pub fn bulk_norm(&self) -> f32 {
        sqrt(self.p.x * self.p.x + self.p.y * self.p.y + self.p.z * self.p.z + self.g.w * self.g.w)
    }

    /// Magnitude of the weight components `(p.w, g.x, g.y, g.z)`.
    pub fn weight_norm(&self) -> f32 {
        sqrt(self.weight_norm_squared())
    }

    fn weight_norm_squared(&self) -> f32 {
        self.p.w * self.p.w + self.g.x * self.g.x + self.g.y * self.g.y + self.g.z * self.g.z
    }

    /// Scales in place to unit weight. A zero weight leaves non-finite
    /// components.
    pub fn unitize(&mut self) -> &mut Self {
        let w2 = self.weight_norm_squared();
        if w2 <= 0.0 {
            trace!("unitizing a flector with zero weight");
        }
        *self *= inverse_sqrt(w2);
        self
    }

    /// By-value form of [`Flector3::unitize`].
    pub fn unitized(mut self) -> Self {
        self.unitize();
        self
    }
}

impl From<[f32; 8]> for Flector3 {
    fn from(c: [f32; 8]) -> Self {
        Self::new(c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7])
    }
}

impl From<Vec4> for Flector3 {
    fn from(p: Vec4) -> Self {
        Self::from_parts(p, Plane3::ZERO)
    }
}

impl From<Point3> for Flector3 {
    fn from(point: Point3) -> Self {
        Self::from_parts(point.to_vec4(), Plane3::ZERO)
    }
}

impl From<Plane3> for Flector3 {
    fn from(g: Plane3) -> Self {
        Self::from_parts(Vec4::ZERO, g)
    }
}

impl Neg for Flector3 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::from_parts(-self.p, -self.g)
    }
}

impl Mul<f32> for Flector3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self::Output {
        Self::from_parts(self.p * rhs, self.g * rhs)
    }
}

impl Mul<Flector3> for f32 {
    type Output = Flector3;
    fn mul(self, rhs: Flector3) -> Self::Output {
        rhs * self
    }
}

impl Div<f32> for Flector3 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self::Output {
        self * (1.0 / rhs)
    }
}

impl MulAssign<f32> for Flector3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for Flector3 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

/// Free-function form of [`Flector3::reverse`].
pub fn reverse(f: &Flector3) -> Flector3 {
    f.reverse()
}

/// Free-function form of [`Flector3::antireverse`].
pub fn antireverse(f: &Flector3) -> Flector3 {
    f.antireverse()
}

/// Returns a unitized copy of `f`.
pub fn unitize(f: &Flector3) -> Flector3 {
    f.unitized()
}

/// Free-function form of [`Flector3::bulk_norm`].
pub fn bulk_norm(f: &Flector3) -> f32 {
    f.bulk_norm()
}

/// Free-function form of [`Flector3::weight_norm`].
pub fn weight_norm(f: &Flector3) -> f32 {
    f.weight_norm()
}
