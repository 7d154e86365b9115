// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Precondition diagnostics for flector builders.
//!
//! # Cfg Gating
//!
//! Compiled when `debug_assertions` is set or the `validate_release` feature
//! is enabled. Checks emit `tracing::warn!` events and never alter results.

use tracing::warn;

use crate::math::{Bivec3, Line3, Mat4, Plane3, VALIDATION_TOLERANCE};

fn exceeds(deviation: f32) -> bool {
    deviation.is_nan() || deviation > VALIDATION_TOLERANCE
}

fn off_by(value: f32, target: f32) -> bool {
    exceeds((value - target).abs())
}

/// Warns when `plane` does not have a unit normal.
pub(crate) fn unit_plane(op: &'static str, plane: &Plane3) {
    let weight2 = plane.x * plane.x + plane.y * plane.y + plane.z * plane.z;
    if off_by(weight2, 1.0) {
        warn!(op, weight2, "plane is not unitized");
    }
}

/// Warns when a rotation axis through the origin is not unit length.
pub(crate) fn unit_axis(op: &'static str, axis: &Bivec3) {
    let length2 = axis.x * axis.x + axis.y * axis.y + axis.z * axis.z;
    if off_by(length2, 1.0) {
        warn!(op, length2, "rotation axis is not unitized");
    }
}

/// Warns when `line` is not unitized or its parts are not perpendicular.
pub(crate) fn unit_line(op: &'static str, line: &Line3) {
    let length2 = line.v.length_squared();
    if off_by(length2, 1.0) {
        warn!(op, length2, "rotation axis is not unitized");
    }
    let incidence = line.v.x * line.m.x + line.v.y * line.m.y + line.v.z * line.m.z;
    if off_by(incidence, 0.0) {
        warn!(op, incidence, "rotation axis direction and moment are not perpendicular");
    }
}

/// Warns when the upper 3×3 block of `m` is not orthogonal with
/// determinant `−1`.
pub(crate) fn improper_orthogonal(op: &'static str, m: &Mat4) {
    let mut worst = 0.0_f32;
    let mut skewed = false;
    for i in 0..3 {
        for j in 0..3 {
            let dot = (0..3).map(|k| m.get(k, i) * m.get(k, j)).sum::<f32>();
            let target = if i == j { 1.0 } else { 0.0 };
            let deviation = (dot - target).abs();
            skewed |= exceeds(deviation);
            // `f32::max` drops NaN; keep it visible in the event.
            worst = if worst.is_nan() || deviation.is_nan() {
                f32::NAN
            } else {
                worst.max(deviation)
            };
        }
    }
    if skewed {
        warn!(op, deviation = worst, "matrix is not orthogonal");
    }
    let determinant = m.determinant3();
    if off_by(determinant, -1.0) {
        warn!(op, determinant, "matrix is not an improper rigid transform");
    }
}
