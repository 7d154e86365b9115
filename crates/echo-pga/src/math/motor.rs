// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::ops::{Mul, MulAssign, Neg};

use bytemuck::{Pod, Zeroable};
use tracing::trace;

use crate::math::{
    cos_sin, inverse_sqrt, sqrt, Bivec3, Line3, Mat4, Plane3, Point3, Transform, Vec3, Vec4,
};

/// Proper rigid motion (rotation and translation) as a PGA motor.
///
/// * `v`: weight: **e**₄₁, **e**₄₂, **e**₄₃, **e**₁₂₃₄.
/// * `m`: bulk: **e**₂₃, **e**₃₁, **e**₁₂, and the scalar **1**.
///
/// A motor is unitized when `|v| = 1`. Composition follows the geometric
/// antiproduct: `b * a` applies `a` first.
///
/// # Examples
/// ```
/// use echo_pga::math::{Motor3, Point3, Transform, Vec3};
/// let m = Motor3::make_translation(Vec3::new(1.0, 2.0, 3.0));
/// let p = Point3::ORIGIN.transform(&m);
/// assert_eq!(p.to_array(), [1.0, 2.0, 3.0]);
/// ```
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Motor3 {
    /// Weight part (`e₄₁ e₄₂ e₄₃ e₁₂₃₄`).
    pub v: Vec4,
    /// Bulk part (`e₂₃ e₃₁ e₁₂ 𝟙`).
    pub m: Vec4,
}

const _: () = assert!(core::mem::size_of::<Motor3>() == 32);

impl Motor3 {
    /// Creates a motor from its weight and bulk parts.
    pub const fn new(v: Vec4, m: Vec4) -> Self {
        Self { v, m }
    }

    /// The motor that leaves everything in place.
    pub const fn identity() -> Self {
        Self::new(Vec4::new(0.0, 0.0, 0.0, 1.0), Vec4::ZERO)
    }

    /// Translation by `offset`.
    pub fn make_translation(offset: Vec3) -> Self {
        Self::new(
            Vec4::new(0.0, 0.0, 0.0, 1.0),
            Vec4::new(offset.x * 0.5, offset.y * 0.5, offset.z * 0.5, 0.0),
        )
    }

    /// Rotation by `angle` radians about a unitized `axis` line.
    pub fn make_rotation(angle: f32, axis: &Line3) -> Self {
        let (c, s) = cos_sin(angle * 0.5);
        Self::new(
            Vec4::new(axis.v.x * s, axis.v.y * s, axis.v.z * s, c),
            Vec4::new(axis.m.x * s, axis.m.y * s, axis.m.z * s, 0.0),
        )
    }

    /// Returns `[vx, vy, vz, vw, mx, my, mz, mw]`.
    pub fn to_array(self) -> [f32; 8] {
        [
            self.v.x, self.v.y, self.v.z, self.v.w, self.m.x, self.m.y, self.m.z, self.m.w,
        ]
    }

    /// Negates the bivector parts; the inverse motion for a unitized motor.
    pub fn antireverse(&self) -> Self {
        Self::new(
            Vec4::new(-self.v.x, -self.v.y, -self.v.z, self.v.w),
            Vec4::new(-self.m.x, -self.m.y, -self.m.z, self.m.w),
        )
    }

    /// Magnitude of the bulk part.
    pub fn bulk_norm(&self) -> f32 {
        sqrt(self.m.dot(&self.m))
    }

    /// Magnitude of the weight part.
    pub fn weight_norm(&self) -> f32 {
        sqrt(self.v.dot(&self.v))
    }

    /// Scales in place to unit weight. A zero weight leaves non-finite
    /// components.
    pub fn unitize(&mut self) -> &mut Self {
        let w2 = self.v.dot(&self.v);
        if w2 <= 0.0 {
            trace!("unitizing a motor with zero weight");
        }
        *self = *self * inverse_sqrt(w2);
        self
    }

    /// By-value form of [`Motor3::unitize`].
    pub fn unitized(mut self) -> Self {
        self.unitize();
        self
    }

    /// Rotation rows and translation of a unitized motor.
    fn rigid_parts(&self) -> ([Vec3; 3], Vec3) {
        let Vec4 { x: vx, y: vy, z: vz, w: vw } = self.v;
        let Vec4 { x: mx, y: my, z: mz, w: mw } = self.m;
        let rows = [
            Vec3::new(
                1.0 - 2.0 * (vy * vy + vz * vz),
                2.0 * (vx * vy - vw * vz),
                2.0 * (vx * vz + vw * vy),
            ),
            Vec3::new(
                2.0 * (vx * vy + vw * vz),
                1.0 - 2.0 * (vx * vx + vz * vz),
                2.0 * (vy * vz - vw * vx),
            ),
            Vec3::new(
                2.0 * (vx * vz - vw * vy),
                2.0 * (vy * vz + vw * vx),
                1.0 - 2.0 * (vx * vx + vy * vy),
            ),
        ];
        let t = Vec3::new(
            2.0 * (vw * mx + vy * mz - vz * my - vx * mw),
            2.0 * (vw * my + vz * mx - vx * mz - vy * mw),
            2.0 * (vw * mz + vx * my - vy * mx - vz * mw),
        );
        (rows, t)
    }

    /// Matrix of the motion for a unitized motor.
    pub fn transform_matrix(&self) -> Mat4 {
        let ([r0, r1, r2], t) = self.rigid_parts();
        Mat4::from_rows(
            [r0.x, r0.y, r0.z, t.x],
            [r1.x, r1.y, r1.z, t.y],
            [r2.x, r2.y, r2.z, t.z],
        )
    }

    /// Matrix of the inverse motion for a unitized motor.
    pub fn inverse_transform_matrix(&self) -> Mat4 {
        self.antireverse().transform_matrix()
    }
}

fn rotate(rows: &[Vec3; 3], v: &Vec3) -> Vec3 {
    Vec3::new(rows[0].dot(v), rows[1].dot(v), rows[2].dot(v))
}

impl From<[f32; 8]> for Motor3 {
    fn from(value: [f32; 8]) -> Self {
        Self::new(
            Vec4::new(value[0], value[1], value[2], value[3]),
            Vec4::new(value[4], value[5], value[6], value[7]),
        )
    }
}

impl Neg for Motor3 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.v, -self.m)
    }
}

impl Mul<f32> for Motor3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(self.v * rhs, self.m * rhs)
    }
}

/// Geometric antiproduct: `self * rhs` applies `rhs` first.
impl Mul for Motor3 {
    type Output = Self;
    fn mul(self, r: Self) -> Self::Output {
        let q = self;
        Self::new(
            Vec4::new(
                q.v.w * r.v.x + q.v.x * r.v.w + q.v.y * r.v.z - q.v.z * r.v.y,
                q.v.w * r.v.y + q.v.y * r.v.w + q.v.z * r.v.x - q.v.x * r.v.z,
                q.v.w * r.v.z + q.v.x * r.v.y + q.v.z * r.v.w - q.v.y * r.v.x,
                q.v.w * r.v.w - q.v.x * r.v.x - q.v.y * r.v.y - q.v.z * r.v.z,
            ),
            Vec4::new(
                q.m.w * r.v.x + q.m.x * r.v.w + q.m.y * r.v.z + q.v.w * r.m.x + q.v.x * r.m.w
                    + q.v.y * r.m.z
                    - q.m.z * r.v.y
                    - q.v.z * r.m.y,
                q.m.w * r.v.y + q.m.y * r.v.w + q.m.z * r.v.x + q.v.w * r.m.y + q.v.y * r.m.w
                    + q.v.z * r.m.x
                    - q.m.x * r.v.z
                    - q.v.x * r.m.z,
                q.m.w * r.v.z + q.m.x * r.v.y + q.m.z * r.v.w + q.v.w * r.m.z + q.v.x * r.m.y
                    + q.v.z * r.m.w
                    - q.m.y * r.v.x
                    - q.v.y * r.m.x,
                q.m.w * r.v.w + q.v.w * r.m.w
                    - q.m.x * r.v.x
                    - q.m.y * r.v.y
                    - q.m.z * r.v.z
                    - q.v.x * r.m.x
                    - q.v.y * r.m.y
                    - q.v.z * r.m.z,
            ),
        )
    }
}

impl MulAssign for Motor3 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Transform<Motor3> for Vec3 {
    fn transform(&self, op: &Motor3) -> Self {
        let (rows, _) = op.rigid_parts();
        rotate(&rows, self)
    }
}

impl Transform<Motor3> for Bivec3 {
    fn transform(&self, op: &Motor3) -> Self {
        let (rows, _) = op.rigid_parts();
        let b = rotate(&rows, &Vec3::new(self.x, self.y, self.z));
        Bivec3::new(b.x, b.y, b.z)
    }
}

impl Transform<Motor3> for Vec4 {
    fn transform(&self, op: &Motor3) -> Self {
        let (rows, t) = op.rigid_parts();
        let r = rotate(&rows, &self.xyz());
        Vec4::new(
            r.x + t.x * self.w,
            r.y + t.y * self.w,
            r.z + t.z * self.w,
            self.w,
        )
    }
}

impl Transform<Motor3> for Point3 {
    fn transform(&self, op: &Motor3) -> Self {
        let (rows, t) = op.rigid_parts();
        let r = rotate(&rows, &self.to_vec3()) + t;
        Point3::new(r.x, r.y, r.z)
    }
}

impl Transform<Motor3> for Line3 {
    fn transform(&self, op: &Motor3) -> Self {
        let (rows, t) = op.rigid_parts();
        let v = rotate(&rows, &self.v);
        let m = rotate(&rows, &Vec3::new(self.m.x, self.m.y, self.m.z)) + t.cross(&v);
        Line3::new(v, Bivec3::new(m.x, m.y, m.z))
    }
}

impl Transform<Motor3> for Plane3 {
    fn transform(&self, op: &Motor3) -> Self {
        let (rows, t) = op.rigid_parts();
        let n = rotate(&rows, &self.normal());
        Plane3::new(n.x, n.y, n.z, self.w - n.dot(&t))
    }
}
