// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use echo_pga::math::{self, Flector3, Plane3, Point3, Vec4};

mod common;
use common::{approx_eq, assert_close};

fn sample() -> Flector3 {
    Flector3::new(1.0, -2.0, 3.0, 0.5, 0.25, -0.75, 2.0, -4.0)
}

#[test]
fn component_constructor_places_fields_in_order() {
    let f = sample();
    assert_eq!(f.p, Vec4::new(1.0, -2.0, 3.0, 0.5));
    assert_eq!(f.g, Plane3::new(0.25, -0.75, 2.0, -4.0));
    assert_eq!(f.to_array(), [1.0, -2.0, 3.0, 0.5, 0.25, -0.75, 2.0, -4.0]);
    assert_eq!(Flector3::from(f.to_array()), f);
}

#[test]
fn part_constructors_fill_missing_part_with_zero() {
    let p = Vec4::new(1.0, 2.0, 3.0, 4.0);
    let g = Plane3::new(5.0, 6.0, 7.0, 8.0);
    assert_eq!(Flector3::from(p).to_array(), [1.0, 2.0, 3.0, 4.0, 0.0, 0.0, 0.0, 0.0]);
    assert_eq!(Flector3::from(g).to_array(), [0.0, 0.0, 0.0, 0.0, 5.0, 6.0, 7.0, 8.0]);
    assert_eq!(
        Flector3::from(Point3::new(1.0, 2.0, 3.0)).to_array(),
        [1.0, 2.0, 3.0, 1.0, 0.0, 0.0, 0.0, 0.0]
    );
    assert_eq!(Flector3::from_parts(p, g).to_array(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    assert_eq!(
        Flector3::from_point_plane(Point3::new(1.0, 2.0, 3.0), g).to_array(),
        [1.0, 2.0, 3.0, 1.0, 5.0, 6.0, 7.0, 8.0]
    );
}

#[test]
fn setters_overwrite_and_chain() {
    let mut f = Flector3::default();
    f.set(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0)
        .set_parts(Vec4::new(0.0, 0.0, 0.0, 1.0), Plane3::ZERO);
    assert_eq!(f.to_array(), [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0]);

    let plane = Plane3::new(0.0, 1.0, 0.0, -2.0);
    let before = *f.set_point_plane(Point3::new(4.0, 5.0, 6.0), plane);
    assert_eq!(before, Flector3::from_point_plane(Point3::new(4.0, 5.0, 6.0), plane));
}

#[test]
fn equality_is_componentwise() {
    let a = sample();
    let mut b = a;
    assert_eq!(a, b);
    b.g.w = -4.0001;
    assert_ne!(a, b);
}

#[test]
fn negation_flips_every_component() {
    let n = -sample();
    assert_eq!(n.to_array(), [-1.0, 2.0, -3.0, -0.5, -0.25, 0.75, -2.0, 4.0]);
}

#[test]
fn reverse_and_antireverse_negate_vector_part_only() {
    let f = sample();
    let expected = [-1.0, 2.0, -3.0, -0.5, 0.25, -0.75, 2.0, -4.0];
    assert_eq!(f.antireverse().to_array(), expected);
    assert_eq!(f.reverse(), f.antireverse());
    assert_eq!(math::reverse(&f), f.antireverse());
    assert_eq!(math::antireverse(&f), f.antireverse());
}

#[test]
fn scalar_operators_scale_all_components() {
    let f = sample();
    assert_eq!((f * 2.0).to_array(), [2.0, -4.0, 6.0, 1.0, 0.5, -1.5, 4.0, -8.0]);
    assert_eq!(2.0 * f, f * 2.0);
    assert_eq!((f / 2.0).to_array(), [0.5, -1.0, 1.5, 0.25, 0.125, -0.375, 1.0, -2.0]);

    let mut g = f;
    g *= 4.0;
    g /= 4.0;
    assert_eq!(g, f);
}

#[test]
fn division_by_zero_is_unchecked() {
    let f = sample() / 0.0;
    assert!(f.p.x.is_infinite());
    assert!(f.g.w.is_infinite());
}

#[test]
fn norms_split_bulk_and_weight() {
    let f = Flector3::new(2.0, 3.0, 6.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    assert!(approx_eq(f.bulk_norm(), 7.0));
    assert!(approx_eq(f.weight_norm(), 0.0));

    let g = Flector3::new(0.0, 0.0, 0.0, 2.0, 4.0, 4.0, 0.0, 9.0);
    assert!(approx_eq(g.weight_norm(), 6.0));
    assert!(approx_eq(g.bulk_norm(), 9.0));
    assert!(approx_eq(math::bulk_norm(&g), 9.0));
    assert!(approx_eq(math::weight_norm(&g), 6.0));
}

#[test]
fn norm_squares_sum_to_component_squares() {
    let f = sample();
    let total: f32 = f.to_array().iter().map(|c| c * c).sum();
    let split = f.bulk_norm().powi(2) + f.weight_norm().powi(2);
    assert!(approx_eq(split, total), "{split} vs {total}");
}

#[test]
fn unitize_scales_weight_to_one() {
    let mut f = Flector3::new(1.0, 2.0, 3.0, 0.0, 0.0, 0.0, 2.0, 4.0);
    f.unitize();
    assert_close(f.to_array(), [0.5, 1.0, 1.5, 0.0, 0.0, 0.0, 1.0, 2.0], "unitize");
    assert!(approx_eq(f.weight_norm(), 1.0));

    let g = Flector3::new(0.0, 0.0, 0.0, 3.0, 4.0, 0.0, 0.0, 1.0);
    assert_eq!(g.unitized(), math::unitize(&g));
    assert_close(g.unitized().to_array(), [0.0, 0.0, 0.0, 0.6, 0.8, 0.0, 0.0, 0.2], "unitized");
}

#[test]
fn unitize_zero_weight_is_not_finite() {
    let f = Flector3::new(1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0).unitized();
    assert!(!f.p.x.is_finite());
}

#[test]
fn flector_is_a_plain_send_sync_value() {
    fn assert_traits<T: Send + Sync + Copy + Default + 'static>() {}
    assert_traits::<Flector3>();
    assert_eq!(core::mem::size_of::<Flector3>(), 32);
}
