// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Rigid-motion math in 3D projective geometric algebra.
//!
//! Basis conventions (metric `e₁² = e₂² = e₃² = 1`, `e₄² = 0`):
//!
//! | type      | components                                   |
//! |-----------|----------------------------------------------|
//! | [`Vec3`]  | `e₁ e₂ e₃`                                   |
//! | [`Vec4`]  | `e₁ e₂ e₃ e₄`                                |
//! | [`Bivec3`]| `e₂₃ e₃₁ e₁₂`                                |
//! | [`Line3`] | `v: e₄₁ e₄₂ e₄₃`, `m: e₂₃ e₃₁ e₁₂`           |
//! | [`Plane3`]| `e₄₂₃ e₄₃₁ e₄₁₂ e₃₂₁`                        |
//! | [`Motor3`]| `v: e₄₁ e₄₂ e₄₃ e₁₂₃₄`, `m: e₂₃ e₃₁ e₁₂ 𝟙`     |
//! | [`Flector3`] | `p: e₁ e₂ e₃ e₄`, `g: e₄₂₃ e₄₃₁ e₄₁₂ e₃₂₁` |
//!
//! All operations run in `f32`. Transcendentals go through `libm` so results
//! do not depend on the host's math library.

mod bivec3;
mod flector;
mod line3;
mod mat4;
mod motor;
mod plane3;
mod point3;
mod transform;
mod vec3;
mod vec4;

pub use bivec3::Bivec3;
pub use flector::{
    antireverse, bulk_norm, make_rotoreflection, make_rotoreflection_about_line,
    make_transflection, reverse, unitize, weight_norm, Flector3,
};
pub use line3::Line3;
pub use mat4::Mat4;
pub use motor::Motor3;
pub use plane3::Plane3;
pub use point3::Point3;
pub use transform::{transform, Transform};
pub use vec3::Vec3;
pub use vec4::Vec4;

/// Global epsilon used by math routines when detecting degenerate values.
pub const EPSILON: f32 = 1e-6;

/// Slack allowed by precondition diagnostics before a unit-weight or
/// orthogonality check is reported.
pub const VALIDATION_TOLERANCE: f32 = 1e-3;

/// Square root with float32 rounding.
#[inline]
pub fn sqrt(value: f32) -> f32 {
    libm::sqrtf(value)
}

/// Reciprocal square root. Zero input yields `+inf`.
#[inline]
pub fn inverse_sqrt(value: f32) -> f32 {
    1.0 / libm::sqrtf(value)
}

/// Returns `(cos(angle), sin(angle))` for `angle` in radians.
#[inline]
pub fn cos_sin(angle: f32) -> (f32, f32) {
    let (s, c) = libm::sincosf(angle);
    (c, s)
}
