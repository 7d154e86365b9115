// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Closed-form builders for common flectors.
//!
//! Each builder equals the antiproduct of a motor with a plane, expanded so
//! no intermediate motor is formed.

use super::Flector3;
use crate::math::{cos_sin, Bivec3, Line3, Plane3, Vec3};

impl Flector3 {
    /// Reflection through `plane` followed by translation by `offset`.
    ///
    /// Unitized when `plane` has a unit normal.
    ///
    /// # Examples
    /// ```
    /// use echo_pga::math::{Flector3, Plane3, Point3, Transform, Vec3};
    /// let f = Flector3::make_transflection(Vec3::new(0.0, 4.0, 0.0), Plane3::new(1.0, 0.0, 0.0, 0.0));
    /// let p = Point3::new(1.0, 0.0, 0.0).transform(&f);
    /// assert_eq!(p.to_array(), [-1.0, 4.0, 0.0]);
    /// ```
    pub fn make_transflection(offset: Vec3, plane: Plane3) -> Self {
        #[cfg(any(debug_assertions, feature = "validate_release"))]
        crate::validate::unit_plane("make_transflection", &plane);

        let (o, g) = (offset, plane);
        Self::new(
            (o.y * g.z - o.z * g.y) * 0.5,
            (o.z * g.x - o.x * g.z) * 0.5,
            (o.x * g.y - o.y * g.x) * 0.5,
            0.0,
            g.x,
            g.y,
            g.z,
            g.w - (o.x * g.x + o.y * g.y + o.z * g.z) * 0.5,
        )
    }

    /// Reflection through `plane` followed by a rotation of `angle` radians
    /// about the axis through the origin with direction `axis`.
    ///
    /// `axis` must have unit length.
    pub fn make_rotoreflection(angle: f32, axis: Bivec3, plane: Plane3) -> Self {
        #[cfg(any(debug_assertions, feature = "validate_release"))]
        {
            crate::validate::unit_plane("make_rotoreflection", &plane);
            crate::validate::unit_axis("make_rotoreflection", &axis);
        }

        let (c, s) = cos_sin(angle * 0.5);
        let v = Vec3::new(axis.x * s, axis.y * s, axis.z * s);
        let g = plane;
        Self::new(
            v.x * g.w,
            v.y * g.w,
            v.z * g.w,
            -(v.x * g.x + v.y * g.y + v.z * g.z),
            c * g.x + v.y * g.z - v.z * g.y,
            c * g.y + v.z * g.x - v.x * g.z,
            c * g.z + v.x * g.y - v.y * g.x,
            c * g.w,
        )
    }

    /// Reflection through `plane` followed by a rotation of `angle` radians
    /// about the unitized line `axis`.
    pub fn make_rotoreflection_about_line(angle: f32, axis: Line3, plane: Plane3) -> Self {
        #[cfg(any(debug_assertions, feature = "validate_release"))]
        {
            crate::validate::unit_plane("make_rotoreflection_about_line", &plane);
            crate::validate::unit_line("make_rotoreflection_about_line", &axis);
        }

        let (c, s) = cos_sin(angle * 0.5);
        let v = axis.v * s;
        let m = Vec3::new(axis.m.x * s, axis.m.y * s, axis.m.z * s);
        let g = plane;
        Self::new(
            v.x * g.w + m.y * g.z - m.z * g.y,
            v.y * g.w + m.z * g.x - m.x * g.z,
            v.z * g.w + m.x * g.y - m.y * g.x,
            -(v.x * g.x + v.y * g.y + v.z * g.z),
            c * g.x + v.y * g.z - v.z * g.y,
            c * g.y + v.z * g.x - v.x * g.z,
            c * g.z + v.x * g.y - v.y * g.x,
            c * g.w - (m.x * g.x + m.y * g.y + m.z * g.z),
        )
    }
}

/// Free-function form of [`Flector3::make_transflection`].
pub fn make_transflection(offset: Vec3, plane: Plane3) -> Flector3 {
    Flector3::make_transflection(offset, plane)
}

/// Free-function form of [`Flector3::make_rotoreflection`].
pub fn make_rotoreflection(angle: f32, axis: Bivec3, plane: Plane3) -> Flector3 {
    Flector3::make_rotoreflection(angle, axis, plane)
}

/// Free-function form of [`Flector3::make_rotoreflection_about_line`].
pub fn make_rotoreflection_about_line(angle: f32, axis: Line3, plane: Plane3) -> Flector3 {
    Flector3::make_rotoreflection_about_line(angle, axis, plane)
}
