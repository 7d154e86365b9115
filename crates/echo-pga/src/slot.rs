// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared flector cell with per-component atomic stores.
//!
//! A writer thread publishes a flector that reader threads (render, audio,
//! IO polling) sample without locking. Each of the eight components is
//! stored indivisibly with relaxed ordering, but the eight stores are not a
//! single transaction: a reader racing a writer can observe a mix of old and
//! new components. Synchronize externally when a torn read matters.

use core::sync::atomic::{AtomicU32, Ordering};

use crate::math::Flector3;

/// Eight relaxed atomic `f32` cells holding one flector.
#[derive(Debug, Default)]
pub struct FlectorSlot {
    bits: [AtomicU32; 8],
}

impl FlectorSlot {
    /// Creates a slot holding `value`.
    pub fn new(value: &Flector3) -> Self {
        let slot = Self::default();
        slot.publish(value);
        slot
    }

    /// Stores every component of `value`, one relaxed store each.
    pub fn publish(&self, value: &Flector3) {
        for (cell, component) in self.bits.iter().zip(value.to_array()) {
            cell.store(component.to_bits(), Ordering::Relaxed);
        }
    }

    /// Loads every component, one relaxed load each.
    pub fn load(&self) -> Flector3 {
        let mut out = [0.0_f32; 8];
        for (slot, cell) in out.iter_mut().zip(&self.bits) {
            *slot = f32::from_bits(cell.load(Ordering::Relaxed));
        }
        Flector3::from(out)
    }
}

impl From<Flector3> for FlectorSlot {
    fn from(value: Flector3) -> Self {
        Self::new(&value)
    }
}
