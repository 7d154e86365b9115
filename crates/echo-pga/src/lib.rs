// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! echo-pga: flectors and motors for 3D projective geometric algebra.
//!
//! A [`Flector3`](math::Flector3) encodes an improper rigid transform (a
//! reflection, optionally followed by rotation and translation) in eight
//! floats. Flectors compose with each other into [`Motor3`](math::Motor3)s
//! and with motors into flectors, apply directly to points, vectors, lines,
//! and planes, and convert to and from column-major [`Mat4`](math::Mat4)s.
//!
//! ```
//! use echo_pga::math::{Flector3, Motor3, Plane3, Point3, Transform, Vec3};
//!
//! let mirror = Flector3::make_transflection(Vec3::ZERO, Plane3::new(0.0, 0.0, 1.0, 0.0));
//! assert_eq!(mirror * mirror, Motor3::identity());
//!
//! let p = Point3::new(1.0, 2.0, 3.0).transform(&mirror);
//! assert_eq!(p.to_array(), [1.0, 2.0, -3.0]);
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::use_self
)]

/// PGA value types (Vec3, Vec4, Point3, Bivec3, Line3, Plane3, Mat4, Motor3, Flector3).
pub mod math;
/// Atomic publish/load cell for sharing a flector across threads.
pub mod slot;
/// Zero-copy views of packed buffers as flectors.
pub mod view;

#[cfg(any(debug_assertions, feature = "validate_release"))]
mod validate;

// Re-exports for stable public API
/// Core value types.
pub use math::{Flector3, Mat4, Motor3, Transform};
/// Shared flector cell.
pub use slot::FlectorSlot;
/// View failure.
pub use view::ViewError;
