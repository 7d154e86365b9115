// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Conversion between flectors and 4×4 transform matrices.

use super::Flector3;
use crate::math::{sqrt, Mat4, Vec3};

impl Flector3 {
    /// Translation terms shared by the forward and inverse matrices.
    ///
    /// The forward translation is `2(a + b)`; the inverse is `2(a − b)`.
    pub(super) fn translation_terms(&self) -> (Vec3, Vec3) {
        let (p, g) = (self.p, self.g);
        let a = Vec3::new(
            p.w * p.x - g.w * g.x,
            p.w * p.y - g.w * g.y,
            p.w * p.z - g.w * g.z,
        );
        let b = Vec3::new(
            g.y * p.z - g.z * p.y,
            g.z * p.x - g.x * p.z,
            g.x * p.y - g.y * p.x,
        );
        (a, b)
    }

    /// Upper 3×3 block, row-major. The inverse uses its transpose.
    fn linear_rows(&self) -> [[f32; 3]; 3] {
        let (pw, gx, gy, gz) = (self.p.w, self.g.x, self.g.y, self.g.z);
        [
            [
                1.0 - 2.0 * (gx * gx + pw * pw),
                2.0 * (gz * pw - gx * gy),
                -2.0 * (gx * gz + gy * pw),
            ],
            [
                -2.0 * (gx * gy + gz * pw),
                1.0 - 2.0 * (gy * gy + pw * pw),
                2.0 * (gx * pw - gy * gz),
            ],
            [
                2.0 * (gy * pw - gx * gz),
                -2.0 * (gx * pw + gy * gz),
                1.0 - 2.0 * (gz * gz + pw * pw),
            ],
        ]
    }

    /// Matrix `M` such that `M · p` applies this unitized flector to a point.
    pub fn transform_matrix(&self) -> Mat4 {
        let r = self.linear_rows();
        let (a, b) = self.translation_terms();
        let t = (a + b) * 2.0;
        Mat4::from_rows(
            [r[0][0], r[0][1], r[0][2], t.x],
            [r[1][0], r[1][1], r[1][2], t.y],
            [r[2][0], r[2][1], r[2][2], t.z],
        )
    }

    /// Inverse of [`Flector3::transform_matrix`], read straight off the
    /// components.
    pub fn inverse_transform_matrix(&self) -> Mat4 {
        let r = self.linear_rows();
        let (a, b) = self.translation_terms();
        let u = (a - b) * 2.0;
        Mat4::from_rows(
            [r[0][0], r[1][0], r[2][0], u.x],
            [r[0][1], r[1][1], r[2][1], u.y],
            [r[0][2], r[1][2], r[2][2], u.z],
        )
    }

    /// Forward and inverse matrices together, sharing intermediate terms.
    pub fn transform_matrices(&self) -> (Mat4, Mat4) {
        let r = self.linear_rows();
        let (a, b) = self.translation_terms();
        let t = (a + b) * 2.0;
        let u = (a - b) * 2.0;
        (
            Mat4::from_rows(
                [r[0][0], r[0][1], r[0][2], t.x],
                [r[1][0], r[1][1], r[1][2], t.y],
                [r[2][0], r[2][1], r[2][2], t.z],
            ),
            Mat4::from_rows(
                [r[0][0], r[1][0], r[2][0], u.x],
                [r[0][1], r[1][1], r[2][1], u.y],
                [r[0][2], r[1][2], r[2][2], u.z],
            ),
        )
    }

    /// Replaces this flector with the one equivalent to `m`.
    ///
    /// `m` must be orthogonal in its upper 3×3 block with determinant `−1`;
    /// the bottom row is ignored. Other matrices produce a finite but
    /// meaningless flector. The result may differ from a previously
    /// extracted flector by an overall sign, which is the same transform.
    pub fn set_transform_matrix(&mut self, m: &Mat4) -> &mut Self {
        #[cfg(any(debug_assertions, feature = "validate_release"))]
        crate::validate::improper_orthogonal("set_transform_matrix", m);

        // Negating the block yields a proper rotation; extract its quaternion.
        let m00 = -m.get(0, 0);
        let m11 = -m.get(1, 1);
        let m22 = -m.get(2, 2);
        let (m01, m02) = (-m.get(0, 1), -m.get(0, 2));
        let (m10, m12) = (-m.get(1, 0), -m.get(1, 2));
        let (m20, m21) = (-m.get(2, 0), -m.get(2, 1));

        let trace = m00 + m11 + m22;
        let (x, y, z, w);
        if trace > 0.0 {
            w = sqrt(trace + 1.0) * 0.5;
            let f = 0.25 / w;
            x = (m21 - m12) * f;
            y = (m02 - m20) * f;
            z = (m10 - m01) * f;
        } else if m00 > m11 && m00 > m22 {
            x = sqrt(m00 - m11 - m22 + 1.0) * 0.5;
            let f = 0.25 / x;
            y = (m10 + m01) * f;
            z = (m02 + m20) * f;
            w = (m21 - m12) * f;
        } else if m11 > m22 {
            y = sqrt(m11 - m00 - m22 + 1.0) * 0.5;
            let f = 0.25 / y;
            x = (m10 + m01) * f;
            z = (m21 + m12) * f;
            w = (m02 - m20) * f;
        } else {
            z = sqrt(m22 - m00 - m11 + 1.0) * 0.5;
            let f = 0.25 / z;
            x = (m02 + m20) * f;
            y = (m21 + m12) * f;
            w = (m10 - m01) * f;
        }

        let tx = m.get(0, 3) * 0.5;
        let ty = m.get(1, 3) * 0.5;
        let tz = m.get(2, 3) * 0.5;

        self.set(
            w * tx + z * ty - y * tz,
            w * ty + x * tz - z * tx,
            w * tz + y * tx - x * ty,
            w,
            x,
            y,
            z,
            -x * tx - y * ty - z * tz,
        )
    }

    /// Flector equivalent to the improper rigid transform `m`.
    pub fn from_transform_matrix(m: &Mat4) -> Self {
        let mut f = Self::default();
        f.set_transform_matrix(m);
        f
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_terms_vanish_for_plane_through_origin() {
        let f = Flector3::new(0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0);
        let (a, b) = f.translation_terms();
        assert_eq!(a, Vec3::ZERO);
        assert_eq!(b, Vec3::ZERO);
    }

    #[test]
    fn linear_rows_of_x_mirror_flip_x() {
        let f = Flector3::new(0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0);
        let r = f.linear_rows();
        assert_eq!(r[0][0], -1.0);
        assert_eq!(r[1][1], 1.0);
        assert_eq!(r[2][2], 1.0);
    }
}
