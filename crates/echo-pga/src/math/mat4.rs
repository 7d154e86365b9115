// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::ops::{Mul, MulAssign};

use bytemuck::{Pod, Zeroable};

use crate::math::{cos_sin, Plane3, Point3, Vec3, Vec4};

/// Column‑major 4×4 matrix matching Echo’s math layout.
///
/// - Stored in column‑major order to align with GPU uploads.
/// - Points and vectors are column vectors premultiplied by the matrix
///   (`M · p`); planes are row vectors postmultiplied by the *inverse*
///   matrix (`g · M⁻¹`).
///
/// # Examples
/// ```
/// use echo_pga::math::{Mat4, Point3};
/// let t = Mat4::translation(5.0, -3.0, 2.0);
/// let p = Point3::new(2.0, 4.0, -1.0);
/// assert_eq!(t.transform_point(&p).to_array(), [7.0, 1.0, 1.0]);
/// ```
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat4 {
    data: [f32; 16],
}

impl Mat4 {
    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // col 0
                0.0, 1.0, 0.0, 0.0, // col 1
                0.0, 0.0, 1.0, 0.0, // col 2
                0.0, 0.0, 0.0, 1.0, // col 3
            ],
        }
    }

    /// Builds a translation matrix.
    ///
    /// Column-major layout: translation occupies the last column.
    pub const fn translation(tx: f32, ty: f32, tz: f32) -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // col 0
                0.0, 1.0, 0.0, 0.0, // col 1
                0.0, 0.0, 1.0, 0.0, // col 2
                tx, ty, tz, 1.0,    // col 3 (translation)
            ],
        }
    }

    /// Builds a non-uniform scale matrix. A single negative factor gives a
    /// reflection through a coordinate plane.
    pub const fn scale(sx: f32, sy: f32, sz: f32) -> Self {
        Self {
            data: [
                sx, 0.0, 0.0, 0.0, // col 0
                0.0, sy, 0.0, 0.0, // col 1
                0.0, 0.0, sz, 0.0, // col 2
                0.0, 0.0, 0.0, 1.0, // col 3
            ],
        }
    }

    /// Builds a rotation matrix around the X axis by `angle` radians.
    pub fn rotation_x(angle: f32) -> Self {
        let (c, s) = cos_sin(angle);
        Self::new([
            1.0, 0.0, 0.0, 0.0,
            0.0, c,   s,   0.0,
            0.0, -s,  c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation matrix around the Y axis by `angle` radians.
    pub fn rotation_y(angle: f32) -> Self {
        let (c, s) = cos_sin(angle);
        Self::new([
            c,   0.0, -s,  0.0,
            0.0, 1.0, 0.0, 0.0,
            s,   0.0, c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation matrix around the Z axis by `angle` radians.
    pub fn rotation_z(angle: f32) -> Self {
        let (c, s) = cos_sin(angle);
        Self::new([
            c,   s,   0.0, 0.0,
            -s,  c,   0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Creates a matrix from column-major array data.
    pub const fn new(data: [f32; 16]) -> Self {
        Self { data }
    }

    /// Creates a matrix from the top three rows of an affine transform; the
    /// bottom row is `(0, 0, 0, 1)`.
    ///
    /// Rows read the way the matrix is written on paper, which keeps closed-form
    /// constructions legible.
    pub const fn from_rows(r0: [f32; 4], r1: [f32; 4], r2: [f32; 4]) -> Self {
        Self {
            data: [
                r0[0], r1[0], r2[0], 0.0, // col 0
                r0[1], r1[1], r2[1], 0.0, // col 1
                r0[2], r1[2], r2[2], 0.0, // col 2
                r0[3], r1[3], r2[3], 1.0, // col 3
            ],
        }
    }

    /// Returns the matrix as a column‑major array.
    pub fn to_array(self) -> [f32; 16] {
        self.data
    }

    /// Entry at `row`, `col` (both `0..4`).
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[col * 4 + row]
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    ///
    /// # Examples
    /// ```
    /// use echo_pga::math::Mat4;
    /// let a = Mat4::identity();
    /// let b = Mat4::scale(2.0, 3.0, 4.0);
    /// assert_eq!(a.multiply(&b).to_array(), b.to_array());
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.get(row, k) * rhs.get(k, col);
                }
                out[col * 4 + row] = sum;
            }
        }
        Self::new(out)
    }

    /// Transforms a homogeneous vector (`M · v`), including its `w`.
    pub fn transform_vec4(&self, v: &Vec4) -> Vec4 {
        Vec4::new(
            self.get(0, 0) * v.x + self.get(0, 1) * v.y + self.get(0, 2) * v.z + self.get(0, 3) * v.w,
            self.get(1, 0) * v.x + self.get(1, 1) * v.y + self.get(1, 2) * v.z + self.get(1, 3) * v.w,
            self.get(2, 0) * v.x + self.get(2, 1) * v.y + self.get(2, 2) * v.z + self.get(2, 3) * v.w,
            self.get(3, 0) * v.x + self.get(3, 1) * v.y + self.get(3, 2) * v.z + self.get(3, 3) * v.w,
        )
    }

    /// Transforms a point (assumes `w = 1`, no perspective divide).
    pub fn transform_point(&self, point: &Point3) -> Point3 {
        let (x, y, z) = (point.x, point.y, point.z);
        Point3::new(
            self.get(0, 0) * x + self.get(0, 1) * y + self.get(0, 2) * z + self.get(0, 3),
            self.get(1, 0) * x + self.get(1, 1) * y + self.get(1, 2) * z + self.get(1, 3),
            self.get(2, 0) * x + self.get(2, 1) * y + self.get(2, 2) * z + self.get(2, 3),
        )
    }

    /// Transforms a direction vector (ignores translation, `w = 0`).
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        let (x, y, z) = (direction.x, direction.y, direction.z);
        Vec3::new(
            self.get(0, 0) * x + self.get(0, 1) * y + self.get(0, 2) * z,
            self.get(1, 0) * x + self.get(1, 1) * y + self.get(1, 2) * z,
            self.get(2, 0) * x + self.get(2, 1) * y + self.get(2, 2) * z,
        )
    }

    /// Postmultiplies a plane treated as a row vector (`g · M`).
    ///
    /// Pass the inverse of a point transform to move a plane along with the
    /// points it contains.
    pub fn transform_plane(&self, plane: &Plane3) -> Plane3 {
        let (x, y, z, w) = (plane.x, plane.y, plane.z, plane.w);
        Plane3::new(
            x * self.get(0, 0) + y * self.get(1, 0) + z * self.get(2, 0) + w * self.get(3, 0),
            x * self.get(0, 1) + y * self.get(1, 1) + z * self.get(2, 1) + w * self.get(3, 1),
            x * self.get(0, 2) + y * self.get(1, 2) + z * self.get(2, 2) + w * self.get(3, 2),
            x * self.get(0, 3) + y * self.get(1, 3) + z * self.get(2, 3) + w * self.get(3, 3),
        )
    }

    /// Determinant of the upper-left 3×3 block.
    ///
    /// `+1` for a proper rigid transform, `−1` for an improper one.
    pub fn determinant3(&self) -> f32 {
        let a = Vec3::new(self.get(0, 0), self.get(1, 0), self.get(2, 0));
        let b = Vec3::new(self.get(0, 1), self.get(1, 1), self.get(2, 1));
        let c = Vec3::new(self.get(0, 2), self.get(1, 2), self.get(2, 2));
        a.dot(&b.cross(&c))
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(value: [f32; 16]) -> Self {
        Self { data: value }
    }
}

impl Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<&Mat4> for Mat4 {
    type Output = Self;
    fn mul(self, rhs: &Mat4) -> Self::Output {
        self.multiply(rhs)
    }
}

impl MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl MulAssign<&Mat4> for Mat4 {
    fn mul_assign(&mut self, rhs: &Mat4) {
        *self = self.multiply(rhs);
    }
}
