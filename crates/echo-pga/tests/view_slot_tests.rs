// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use std::sync::Arc;
use std::thread;

use echo_pga::math::Flector3;
use echo_pga::view::{self, ViewError};
use echo_pga::FlectorSlot;

#[test]
fn single_view_reads_components_in_order() {
    let raw = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
    let f = view::flector_from_floats(&raw).expect("eight floats");
    assert_eq!(*f, Flector3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0));
}

#[test]
fn single_view_rejects_wrong_length() {
    let raw = [0.0_f32; 9];
    assert_eq!(
        view::flector_from_floats(&raw),
        Err(ViewError::LengthMismatch {
            expected: 8,
            actual: 9
        })
    );
}

#[test]
fn slice_view_splits_packed_floats() {
    let raw: Vec<f32> = (0..24_u8).map(f32::from).collect();
    let flectors = view::flectors_from_floats(&raw).expect("multiple of eight");
    assert_eq!(flectors.len(), 3);
    assert_eq!(flectors[1].p.x, 8.0);
    assert_eq!(flectors[2].g.w, 23.0);
    assert_eq!(view::as_floats(flectors), raw.as_slice());
}

#[test]
fn slice_view_rejects_ragged_length() {
    let raw = [0.0_f32; 12];
    let err = view::flectors_from_floats(&raw).expect_err("not a multiple of eight");
    assert_eq!(err, ViewError::NotMultiple { len: 12, stride: 8 });
    assert_eq!(err.to_string(), "length 12 is not a multiple of 8");
}

#[test]
fn byte_view_round_trips_native_bytes() {
    let source = [
        Flector3::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0),
        Flector3::new(-0.5, 1.0, 0.25, 0.0, 0.6, 0.0, 0.8, -3.0),
    ];
    let bytes: &[u8] = bytemuck::cast_slice(&source);
    assert_eq!(bytes.len(), 64);
    let viewed = view::flectors_from_bytes(bytes).expect("aligned bytes");
    assert_eq!(viewed, &source);
}

#[test]
fn byte_view_rejects_ragged_length() {
    let source = [0.0_f32; 16];
    let bytes: &[u8] = bytemuck::cast_slice(&source);
    let err = view::flectors_from_bytes(&bytes[..40]).expect_err("not a multiple of 32");
    assert_eq!(err, ViewError::NotMultiple { len: 40, stride: 32 });
}

#[test]
fn slot_publishes_and_loads() {
    let slot = FlectorSlot::default();
    assert_eq!(slot.load(), Flector3::default());
    let f = Flector3::new(1.0, -2.0, 3.0, 0.0, 0.0, 0.6, 0.8, -1.0);
    slot.publish(&f);
    assert_eq!(slot.load(), f);
    assert_eq!(FlectorSlot::from(f).load(), f);
}

#[test]
fn slot_preserves_exact_bits() {
    let f = Flector3::new(-0.0, f32::MIN_POSITIVE, f32::MAX, 1.0e-40, 0.1, 0.2, 0.3, -7.5);
    let slot = FlectorSlot::new(&f);
    let back = slot.load().to_array();
    for (a, b) in back.iter().zip(f.to_array()) {
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

#[test]
fn slot_readers_see_only_published_components() {
    // Each writer publishes a flector whose components all equal one value;
    // a reader may see a mix across writes but never a value nobody wrote.
    let slot = Arc::new(FlectorSlot::default());
    let writer = {
        let slot = Arc::clone(&slot);
        thread::spawn(move || {
            for i in 1..=500_u16 {
                let v = f32::from(i);
                slot.publish(&Flector3::new(v, v, v, v, v, v, v, v));
            }
        })
    };
    for _ in 0..500 {
        for c in slot.load().to_array() {
            assert!(c.fract() == 0.0 && (0.0..=500.0).contains(&c), "component {c}");
        }
    }
    writer.join().expect("writer thread");
    assert_eq!(slot.load().to_array(), [500.0; 8]);
}
