// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Zero-copy flector views over float and byte buffers.
//!
//! A flector is eight contiguous `f32`s in `px py pz pw gx gy gz gw` order,
//! so packed buffers (GPU readbacks, animation tracks, shared memory) can be
//! read in place. Views are read-only borrows; mutate the owned data instead.

use bytemuck::PodCastError;
use thiserror::Error;

use crate::math::Flector3;

/// Floats per flector.
pub const FLECTOR_FLOATS: usize = 8;

/// Bytes per flector.
pub const FLECTOR_BYTES: usize = core::mem::size_of::<Flector3>();

/// Errors returned when a buffer cannot be viewed as flectors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewError {
    /// A single-flector view was given the wrong number of elements.
    #[error("expected {expected} elements, got {actual}")]
    LengthMismatch {
        /// Required element count.
        expected: usize,
        /// Element count supplied.
        actual: usize,
    },

    /// A multi-flector view was given a length that does not divide evenly.
    #[error("length {len} is not a multiple of {stride}")]
    NotMultiple {
        /// Length supplied.
        len: usize,
        /// Required stride.
        stride: usize,
    },

    /// Data not properly aligned for the target type.
    #[error("cast error: {0}")]
    Cast(#[from] PodCastError),
}

/// Views exactly eight floats as one flector.
///
/// # Errors
///
/// Returns [`ViewError::LengthMismatch`] unless `floats.len() == 8`.
///
/// # Examples
/// ```
/// use echo_pga::view::flector_from_floats;
/// let raw = [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0];
/// let f = flector_from_floats(&raw)?;
/// assert_eq!(f.g.z, 1.0);
/// # Ok::<(), echo_pga::view::ViewError>(())
/// ```
pub fn flector_from_floats(floats: &[f32]) -> Result<&Flector3, ViewError> {
    if floats.len() != FLECTOR_FLOATS {
        return Err(ViewError::LengthMismatch {
            expected: FLECTOR_FLOATS,
            actual: floats.len(),
        });
    }
    Ok(bytemuck::try_from_bytes(bytemuck::cast_slice(floats))?)
}

/// Views a packed float buffer as a slice of flectors.
///
/// # Errors
///
/// Returns [`ViewError::NotMultiple`] unless the length is a multiple of 8.
pub fn flectors_from_floats(floats: &[f32]) -> Result<&[Flector3], ViewError> {
    if floats.len() % FLECTOR_FLOATS != 0 {
        return Err(ViewError::NotMultiple {
            len: floats.len(),
            stride: FLECTOR_FLOATS,
        });
    }
    Ok(bytemuck::try_cast_slice(floats)?)
}

/// Views a byte buffer (native endianness) as a slice of flectors.
///
/// # Errors
///
/// Returns [`ViewError::NotMultiple`] unless the length is a multiple of 32,
/// and [`ViewError::Cast`] when a non-empty buffer is not 4-byte aligned.
pub fn flectors_from_bytes(bytes: &[u8]) -> Result<&[Flector3], ViewError> {
    if bytes.len() % FLECTOR_BYTES != 0 {
        return Err(ViewError::NotMultiple {
            len: bytes.len(),
            stride: FLECTOR_BYTES,
        });
    }
    // An empty `&[u8]` carries a byte-aligned dangling pointer.
    if bytes.is_empty() {
        return Ok(&[]);
    }
    Ok(bytemuck::try_cast_slice(bytes)?)
}

/// Flattens flectors back to their packed floats.
pub fn as_floats(flectors: &[Flector3]) -> &[f32] {
    bytemuck::cast_slice(flectors)
}
