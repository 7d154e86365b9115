// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use echo_pga::math::{
    transform, Bivec3, Flector3, Line3, Plane3, Point3, Transform, Vec3, Vec4,
};

mod common;
use common::{
    assert_close, sample_flectors, sample_lines, sample_motors, sample_planes, sample_points,
};

fn line_through(p: Point3, q: Point3) -> Line3 {
    Line3::from_points(&p, &q)
}

#[test]
fn points_follow_the_forward_matrix() {
    for f in sample_flectors() {
        let m = f.transform_matrix();
        for p in sample_points() {
            assert_close(p.transform(&f).to_array(), m.transform_point(&p).to_array(), "point");
        }
    }
}

#[test]
fn homogeneous_vectors_keep_their_weight() {
    for f in sample_flectors() {
        let m = f.transform_matrix();
        for v in [Vec4::new(1.0, 2.0, 3.0, 1.0), Vec4::new(-1.0, 0.5, 2.0, 0.0), Vec4::new(2.0, 4.0, 6.0, 2.0)] {
            let moved = v.transform(&f);
            assert_close(moved.to_array(), m.transform_vec4(&v).to_array(), "vec4");
        }
    }
}

#[test]
fn directions_ignore_translation() {
    for f in sample_flectors() {
        let m = f.transform_matrix();
        let d = Vec3::new(0.3, -1.2, 2.0);
        assert_close(d.transform(&f).to_array(), m.transform_direction(&d).to_array(), "vec3");
    }
}

#[test]
fn bivectors_pick_up_the_orientation_flip() {
    // Cross products of mirrored vectors are the negated mirror of the cross product.
    for f in sample_flectors() {
        let a = Vec3::new(1.0, 0.5, -2.0);
        let b = Vec3::new(-0.25, 3.0, 1.0);
        let c = a.cross(&b);
        let expected = a.transform(&f).cross(&b.transform(&f));
        let moved = Bivec3::new(c.x, c.y, c.z).transform(&f);
        assert_close(moved.to_array(), expected.to_array(), "bivector");
    }
}

#[test]
fn planes_follow_the_inverse_matrix() {
    for f in sample_flectors() {
        let inv = f.inverse_transform_matrix();
        for g in sample_planes() {
            assert_close(g.transform(&f).to_array(), inv.transform_plane(&g).to_array(), "plane");
        }
    }
}

#[test]
fn planes_keep_their_points() {
    for f in sample_flectors() {
        let g = Plane3::from_normal_point(Vec3::new(0.0, 0.6, 0.8), Point3::new(1.0, 2.0, -1.0));
        let on_plane = Point3::new(1.0, 2.0, -1.0);
        let moved_plane = g.transform(&f);
        let moved_point = on_plane.transform(&f);
        assert!(moved_plane.signed_distance(&moved_point).abs() < 1e-4);
    }
}

#[test]
fn lines_follow_their_endpoints() {
    let pairs = [
        (Point3::new(1.0, 2.0, 3.0), Point3::new(-1.0, 0.0, 4.0)),
        (Point3::ORIGIN, Point3::new(0.0, 0.0, 1.0)),
        (Point3::new(-2.0, 5.0, 0.5), Point3::new(3.0, -1.0, -1.5)),
    ];
    for f in sample_flectors() {
        for (p, q) in pairs {
            let moved = line_through(p, q).transform(&f);
            let expected = line_through(p.transform(&f), q.transform(&f));
            assert_close(moved.to_array(), expected.to_array(), "line");
        }
    }
}

#[test]
fn composition_matches_the_motor_product_for_every_primitive() {
    let flectors = sample_flectors();
    for a in &flectors {
        for b in &flectors {
            let motor = *b * *a;
            for p in sample_points() {
                assert_close(
                    p.transform(a).transform(b).to_array(),
                    p.transform(&motor).to_array(),
                    "point",
                );
                let v = p.to_vec4() * 2.0;
                assert_close(
                    v.transform(a).transform(b).to_array(),
                    v.transform(&motor).to_array(),
                    "vec4",
                );
            }
            for l in sample_lines() {
                assert_close(
                    l.transform(a).transform(b).to_array(),
                    l.transform(&motor).to_array(),
                    "line",
                );
                assert_close(
                    l.v.transform(a).transform(b).to_array(),
                    l.v.transform(&motor).to_array(),
                    "vec3",
                );
                assert_close(
                    l.m.transform(a).transform(b).to_array(),
                    l.m.transform(&motor).to_array(),
                    "bivector",
                );
            }
            for g in sample_planes() {
                assert_close(
                    g.transform(a).transform(b).to_array(),
                    g.transform(&motor).to_array(),
                    "plane",
                );
            }
        }
    }
}

#[test]
fn mixed_composition_matches_for_lines_and_planes() {
    for f in sample_flectors() {
        for q in sample_motors() {
            let after_motor = f * q;
            let before_motor = q * f;
            for l in sample_lines() {
                assert_close(
                    l.transform(&q).transform(&f).to_array(),
                    l.transform(&after_motor).to_array(),
                    "line f∘q",
                );
                assert_close(
                    l.transform(&f).transform(&q).to_array(),
                    l.transform(&before_motor).to_array(),
                    "line q∘f",
                );
            }
            for g in sample_planes() {
                assert_close(
                    g.transform(&q).transform(&f).to_array(),
                    g.transform(&after_motor).to_array(),
                    "plane f∘q",
                );
            }
        }
    }
}

#[test]
fn free_function_delegates_to_trait() {
    let f = sample_flectors()[1];
    let p = Point3::new(0.5, -1.0, 2.0);
    assert_eq!(transform(&p, &f), p.transform(&f));
    let g = Plane3::new(0.0, 1.0, 0.0, -1.0);
    assert_eq!(transform(&g, &f), g.transform(&f));
}

#[test]
fn unnormalized_flector_scales_homogeneous_weight() {
    let f: Flector3 = sample_flectors()[2] * 2.0;
    let v = Vec4::new(1.0, 2.0, 3.0, 1.0).transform(&f);
    assert_close([v.w], [4.0], "weight");
    let unit = Vec4::new(1.0, 2.0, 3.0, 1.0).transform(&sample_flectors()[2]);
    assert_close(v.project().to_array(), unit.project().to_array(), "projected point");
}

#[test]
fn incidence_survives_the_transform() {
    // A point on a plane stays on the moved plane.
    for f in sample_flectors() {
        for g in sample_planes() {
            let n = g.normal();
            let p = Point3::new(-g.w * n.x, -g.w * n.y, -g.w * n.z);
            assert!(g.antiwedge(&p.to_vec4()).abs() < 1e-5, "{p:?} not on {g:?}");
            let moved = g.transform(&f).antiwedge(&p.transform(&f).to_vec4());
            assert!(moved.abs() < 1e-3, "incidence lost: {moved}");
        }
    }
}
