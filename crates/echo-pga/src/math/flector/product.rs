// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Geometric antiproducts involving flectors.
//!
//! Each product is the grade-restricted antiproduct table written out term
//! by term. The right operand is the transform applied first.

use core::ops::{Mul, MulAssign};

use super::Flector3;
use crate::math::{Motor3, Plane3, Vec4};

impl Flector3 {
    /// `self ⟇ b`: the motor applying `b` and then `self`.
    pub fn antiproduct_flector(&self, b: &Flector3) -> Motor3 {
        let a = self;
        Motor3::new(
            Vec4::new(
                a.g.z * b.g.y - a.g.x * b.p.w - a.g.y * b.g.z - a.p.w * b.g.x,
                a.g.x * b.g.z - a.g.y * b.p.w - a.g.z * b.g.x - a.p.w * b.g.y,
                a.g.y * b.g.x - a.g.x * b.g.y - a.g.z * b.p.w - a.p.w * b.g.z,
                a.g.x * b.g.x + a.g.y * b.g.y + a.g.z * b.g.z - a.p.w * b.p.w,
            ),
            Vec4::new(
                a.g.x * b.g.w + a.g.y * b.p.z + a.p.w * b.p.x + a.p.z * b.g.y
                    - a.g.w * b.g.x
                    - a.g.z * b.p.y
                    - a.p.x * b.p.w
                    - a.p.y * b.g.z,
                a.g.y * b.g.w + a.g.z * b.p.x + a.p.w * b.p.y + a.p.x * b.g.z
                    - a.g.w * b.g.y
                    - a.g.x * b.p.z
                    - a.p.y * b.p.w
                    - a.p.z * b.g.x,
                a.g.x * b.p.y + a.g.z * b.g.w + a.p.w * b.p.z + a.p.y * b.g.x
                    - a.g.w * b.g.z
                    - a.g.y * b.p.x
                    - a.p.x * b.g.y
                    - a.p.z * b.p.w,
                a.p.w * b.g.w + a.p.x * b.g.x + a.p.y * b.g.y + a.p.z * b.g.z
                    - a.g.w * b.p.w
                    - a.g.x * b.p.x
                    - a.g.y * b.p.y
                    - a.g.z * b.p.z,
            ),
        )
    }

    /// `self ⟇ q`: the flector applying `q` and then `self`.
    pub fn antiproduct_motor(&self, q: &Motor3) -> Flector3 {
        let f = self;
        Flector3::from_parts(
            Vec4::new(
                f.g.w * q.v.x + f.g.z * q.m.y + f.p.x * q.v.w + f.p.y * q.v.z
                    - f.g.x * q.m.w
                    - f.g.y * q.m.z
                    - f.p.w * q.m.x
                    - f.p.z * q.v.y,
                f.g.w * q.v.y + f.g.x * q.m.z + f.p.y * q.v.w + f.p.z * q.v.x
                    - f.g.y * q.m.w
                    - f.g.z * q.m.x
                    - f.p.w * q.m.y
                    - f.p.x * q.v.z,
                f.g.w * q.v.z + f.g.y * q.m.x + f.p.x * q.v.y + f.p.z * q.v.w
                    - f.g.x * q.m.y
                    - f.g.z * q.m.w
                    - f.p.w * q.m.z
                    - f.p.y * q.v.x,
                f.p.w * q.v.w - f.g.x * q.v.x - f.g.y * q.v.y - f.g.z * q.v.z,
            ),
            Plane3::new(
                f.g.x * q.v.w + f.g.y * q.v.z + f.p.w * q.v.x - f.g.z * q.v.y,
                f.g.y * q.v.w + f.g.z * q.v.x + f.p.w * q.v.y - f.g.x * q.v.z,
                f.g.x * q.v.y + f.g.z * q.v.w + f.p.w * q.v.z - f.g.y * q.v.x,
                f.g.w * q.v.w + f.g.x * q.m.x + f.g.y * q.m.y + f.g.z * q.m.z
                    - f.p.w * q.m.w
                    - f.p.x * q.v.x
                    - f.p.y * q.v.y
                    - f.p.z * q.v.z,
            ),
        )
    }
}

impl Motor3 {
    /// `self ⟇ f`: the flector applying `f` and then `self`.
    pub fn antiproduct_flector(&self, f: &Flector3) -> Flector3 {
        let q = self;
        Flector3::from_parts(
            Vec4::new(
                f.g.w * q.v.x + f.g.x * q.m.w + f.g.z * q.m.y + f.p.w * q.m.x + f.p.x * q.v.w
                    + f.p.z * q.v.y
                    - f.g.y * q.m.z
                    - f.p.y * q.v.z,
                f.g.w * q.v.y + f.g.x * q.m.z + f.g.y * q.m.w + f.p.w * q.m.y + f.p.x * q.v.z
                    + f.p.y * q.v.w
                    - f.g.z * q.m.x
                    - f.p.z * q.v.x,
                f.g.w * q.v.z + f.g.y * q.m.x + f.g.z * q.m.w + f.p.w * q.m.z + f.p.y * q.v.x
                    + f.p.z * q.v.w
                    - f.g.x * q.m.y
                    - f.p.x * q.v.y,
                f.p.w * q.v.w - f.g.x * q.v.x - f.g.y * q.v.y - f.g.z * q.v.z,
            ),
            Plane3::new(
                f.g.x * q.v.w + f.g.z * q.v.y + f.p.w * q.v.x - f.g.y * q.v.z,
                f.g.x * q.v.z + f.g.y * q.v.w + f.p.w * q.v.y - f.g.z * q.v.x,
                f.g.y * q.v.x + f.g.z * q.v.w + f.p.w * q.v.z - f.g.x * q.v.y,
                f.g.w * q.v.w + f.p.w * q.m.w
                    - f.g.x * q.m.x
                    - f.g.y * q.m.y
                    - f.g.z * q.m.z
                    - f.p.x * q.v.x
                    - f.p.y * q.v.y
                    - f.p.z * q.v.z,
            ),
        )
    }
}

impl Mul for Flector3 {
    type Output = Motor3;
    fn mul(self, rhs: Flector3) -> Self::Output {
        self.antiproduct_flector(&rhs)
    }
}

impl Mul<Motor3> for Flector3 {
    type Output = Flector3;
    fn mul(self, rhs: Motor3) -> Self::Output {
        self.antiproduct_motor(&rhs)
    }
}

impl Mul<Flector3> for Motor3 {
    type Output = Flector3;
    fn mul(self, rhs: Flector3) -> Self::Output {
        self.antiproduct_flector(&rhs)
    }
}

impl MulAssign<Motor3> for Flector3 {
    fn mul_assign(&mut self, rhs: Motor3) {
        *self = self.antiproduct_motor(&rhs);
    }
}
