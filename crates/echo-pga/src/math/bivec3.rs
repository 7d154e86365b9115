// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::ops::Neg;

use bytemuck::{Pod, Zeroable};

/// 3D bivector on **e**₂₃, **e**₃₁, **e**₁₂.
///
/// Used for oriented areas, line moments, and (by its components) the axis
/// direction of a rotation through the origin.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bivec3 {
    /// Coordinate on **e**₂₃.
    pub x: f32,
    /// Coordinate on **e**₃₁.
    pub y: f32,
    /// Coordinate on **e**₁₂.
    pub z: f32,
}

impl Bivec3 {
    /// The zero bivector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a bivector from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f32; 3]> for Bivec3 {
    fn from(value: [f32; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl Neg for Bivec3 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}
