// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// Applies a rigid operator (a [`crate::math::Motor3`] or
/// [`crate::math::Flector3`]) to a geometric primitive.
///
/// Implemented for [`crate::math::Vec3`], [`crate::math::Bivec3`],
/// [`crate::math::Vec4`], [`crate::math::Point3`], [`crate::math::Line3`],
/// and [`crate::math::Plane3`]. Points, vectors, and lines agree with the
/// operator's forward matrix; planes agree with postmultiplication by the
/// inverse matrix.
///
/// # Examples
/// ```
/// use echo_pga::math::{Flector3, Plane3, Point3, Transform, Vec3};
/// let mirror = Flector3::make_transflection(Vec3::ZERO, Plane3::new(0.0, 0.0, 1.0, 0.0));
/// let p = Point3::new(1.0, 2.0, 3.0).transform(&mirror);
/// assert_eq!(p.to_array(), [1.0, 2.0, -3.0]);
/// ```
pub trait Transform<Op> {
    /// Returns `self` moved by `op`.
    fn transform(&self, op: &Op) -> Self;
}

/// Free-function form of [`Transform::transform`].
pub fn transform<T, Op>(primitive: &T, op: &Op) -> T
where
    T: Transform<Op>,
{
    primitive.transform(op)
}
