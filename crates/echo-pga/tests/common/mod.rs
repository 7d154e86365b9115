// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(dead_code)]

use echo_pga::math::{Bivec3, Flector3, Line3, Mat4, Motor3, Plane3, Point3, Vec3};

pub const ABS_TOL: f32 = 1e-4;
pub const REL_TOL: f32 = 1e-4;

pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() <= ABS_TOL.max(REL_TOL * a.abs().max(b.abs()))
}

pub fn assert_close<const N: usize>(actual: [f32; N], expected: [f32; N], what: &str) {
    for i in 0..N {
        assert!(
            approx_eq(actual[i], expected[i]),
            "{what} component {i}: got {actual:?}, expected {expected:?}"
        );
    }
}

pub fn assert_mat_close(actual: &Mat4, expected: &Mat4, what: &str) {
    assert_close(actual.to_array(), expected.to_array(), what);
}

/// Equal up to an overall sign, which is the same transform.
pub fn assert_same_flector(actual: &Flector3, expected: &Flector3, what: &str) {
    let a = actual.to_array();
    let e = expected.to_array();
    let same = (0..8).all(|i| approx_eq(a[i], e[i]));
    let flipped = (0..8).all(|i| approx_eq(a[i], -e[i]));
    assert!(same || flipped, "{what}: got {a:?}, expected ±{e:?}");
}

pub fn unit_plane(x: f32, y: f32, z: f32, w: f32) -> Plane3 {
    Plane3::new(x, y, z, w).unitized()
}

pub fn unit_line(point: Point3, direction: Vec3) -> Line3 {
    Line3::from_point_direction(&point, direction.normalize())
}

/// Unitized, well-formed flectors covering pure mirrors, transflections, and
/// rotoreflections about origin axes and offset lines.
pub fn sample_flectors() -> Vec<Flector3> {
    vec![
        Flector3::make_transflection(Vec3::ZERO, Plane3::new(0.0, 0.0, 1.0, 0.0)),
        Flector3::make_transflection(Vec3::new(1.0, -2.0, 3.0), Plane3::new(0.6, 0.0, 0.8, -1.5)),
        Flector3::make_transflection(Vec3::new(0.25, 0.5, -4.0), unit_plane(1.0, 2.0, -2.0, 0.75)),
        Flector3::make_rotoreflection(1.0, Bivec3::new(0.6, 0.8, 0.0), Plane3::new(0.6, 0.0, 0.8, -1.5)),
        Flector3::make_rotoreflection(-2.2, Bivec3::new(0.0, 1.0, 0.0), Plane3::new(0.48, 0.6, 0.64, 0.5)),
        Flector3::make_rotoreflection_about_line(
            0.75,
            unit_line(Point3::new(0.0, 0.0, 3.0), Vec3::new(0.6, 0.8, 0.0)),
            Plane3::new(0.0, 1.0, 0.0, 2.0),
        ),
        Flector3::make_rotoreflection_about_line(
            2.9,
            unit_line(Point3::new(-1.0, 2.0, 0.5), Vec3::new(1.0, 1.0, 1.0)),
            unit_plane(-3.0, 1.0, 2.0, -1.0),
        ),
    ]
}

/// Unitized motors: identity, translations, and rotations about offset lines.
pub fn sample_motors() -> Vec<Motor3> {
    vec![
        Motor3::identity(),
        Motor3::make_translation(Vec3::new(1.5, -0.5, 2.0)),
        Motor3::make_rotation(0.7, &unit_line(Point3::new(1.0, 2.0, 0.0), Vec3::UNIT_Z)),
        Motor3::make_rotation(-1.9, &unit_line(Point3::new(0.0, -1.0, 3.0), Vec3::new(2.0, -1.0, 0.5))),
    ]
}

pub fn sample_points() -> Vec<Point3> {
    vec![
        Point3::ORIGIN,
        Point3::new(1.0, 2.0, 3.0),
        Point3::new(-4.5, 0.25, 1.0),
        Point3::new(0.0, -3.0, -2.0),
    ]
}

pub fn sample_lines() -> Vec<Line3> {
    vec![
        Line3::from_points(&Point3::new(1.0, 2.0, 0.0), &Point3::new(1.0, 2.0, 1.0)),
        Line3::from_points(&Point3::new(-2.0, 0.5, 1.0), &Point3::new(3.0, -1.0, 2.0)),
        unit_line(Point3::new(0.0, 0.0, 3.0), Vec3::new(0.6, 0.8, 0.0)),
    ]
}

pub fn sample_planes() -> Vec<Plane3> {
    vec![
        Plane3::new(0.0, 0.0, 1.0, 0.0),
        Plane3::new(0.6, 0.0, 0.8, -1.5),
        unit_plane(1.0, -2.0, 2.0, 3.0),
    ]
}
