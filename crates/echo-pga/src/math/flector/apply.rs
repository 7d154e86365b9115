// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Applying a flector to primitives without building a matrix.
//!
//! The formulas are the sandwich antiproducts expanded per primitive. They
//! are homogeneous in the flector, so a flector scaled by `s` scales the
//! result by `s²`; unitize first when exact magnitudes matter.

use super::Flector3;
use crate::math::{Bivec3, Line3, Plane3, Point3, Transform, Vec3, Vec4};

struct Parts {
    rows: [Vec3; 3],
    /// Forward translation.
    t: Vec3,
    /// Inverse translation, used by planes.
    u: Vec3,
    /// Squared weight norm.
    w2: f32,
}

impl Parts {
    fn rotate(&self, v: &Vec3) -> Vec3 {
        Vec3::new(self.rows[0].dot(v), self.rows[1].dot(v), self.rows[2].dot(v))
    }
}

impl Flector3 {
    fn parts(&self) -> Parts {
        let (pw, gx, gy, gz) = (self.p.w, self.g.x, self.g.y, self.g.z);
        let (xx, yy, zz, ww) = (gx * gx, gy * gy, gz * gz, pw * pw);
        let rows = [
            Vec3::new(
                yy + zz - xx - ww,
                2.0 * (gz * pw - gx * gy),
                -2.0 * (gx * gz + gy * pw),
            ),
            Vec3::new(
                -2.0 * (gx * gy + gz * pw),
                xx + zz - yy - ww,
                2.0 * (gx * pw - gy * gz),
            ),
            Vec3::new(
                2.0 * (gy * pw - gx * gz),
                -2.0 * (gx * pw + gy * gz),
                xx + yy - zz - ww,
            ),
        ];
        let (a, b) = self.translation_terms();
        Parts {
            rows,
            t: (a + b) * 2.0,
            u: (a - b) * 2.0,
            w2: xx + yy + zz + ww,
        }
    }

    /// Moment coupling term for lines: `m' = −R m − 2 C v`.
    fn line_coupling(&self, v: &Vec3) -> Vec3 {
        let (px, py, pz, pw) = (self.p.x, self.p.y, self.p.z, self.p.w);
        let (gx, gy, gz, gw) = (self.g.x, self.g.y, self.g.z, self.g.w);
        let c0 = Vec3::new(
            gw * pw + gx * px - gy * py - gz * pz,
            gx * py + gy * px - gw * gz - pw * pz,
            gw * gy + gx * pz + gz * px + pw * py,
        );
        let c1 = Vec3::new(
            gw * gz + gx * py + gy * px + pw * pz,
            gw * pw + gy * py - gx * px - gz * pz,
            gy * pz + gz * py - gw * gx - pw * px,
        );
        let c2 = Vec3::new(
            gx * pz + gz * px - gw * gy - pw * py,
            gw * gx + gy * pz + gz * py + pw * px,
            gw * pw + gz * pz - gx * px - gy * py,
        );
        Vec3::new(c0.dot(v), c1.dot(v), c2.dot(v))
    }
}

impl Transform<Flector3> for Vec3 {
    fn transform(&self, op: &Flector3) -> Self {
        op.parts().rotate(self)
    }
}

impl Transform<Flector3> for Bivec3 {
    fn transform(&self, op: &Flector3) -> Self {
        let b = op.parts().rotate(&Vec3::new(self.x, self.y, self.z));
        Bivec3::new(-b.x, -b.y, -b.z)
    }
}

impl Transform<Flector3> for Vec4 {
    fn transform(&self, op: &Flector3) -> Self {
        let parts = op.parts();
        let r = parts.rotate(&self.xyz()) + parts.t * self.w;
        Vec4::new(r.x, r.y, r.z, parts.w2 * self.w)
    }
}

impl Transform<Flector3> for Point3 {
    fn transform(&self, op: &Flector3) -> Self {
        let parts = op.parts();
        let r = parts.rotate(&self.to_vec3()) + parts.t;
        Point3::new(r.x, r.y, r.z)
    }
}

impl Transform<Flector3> for Line3 {
    fn transform(&self, op: &Flector3) -> Self {
        let parts = op.parts();
        let v = parts.rotate(&self.v);
        let rm = parts.rotate(&Vec3::new(self.m.x, self.m.y, self.m.z));
        let m = -rm - op.line_coupling(&self.v) * 2.0;
        Line3::new(v, Bivec3::new(m.x, m.y, m.z))
    }
}

impl Transform<Flector3> for Plane3 {
    fn transform(&self, op: &Flector3) -> Self {
        let parts = op.parts();
        let n = self.normal();
        let r = parts.rotate(&n);
        Plane3::new(r.x, r.y, r.z, parts.w2 * self.w + parts.u.dot(&n))
    }
}
