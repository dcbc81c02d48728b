//! Error types for blammo-core operations.
//!
//! This module provides the error type shared by the volume container and
//! every crate that builds or loads volumes.
//!
//! # Overview
//!
//! The [`Error`] enum covers the failure modes of:
//! - Volume allocation (zero or overflowing sizes)
//! - Texel addressing (bounds checking)
//! - Wrapping foreign byte buffers (length mismatches)
//!
//! # Usage
//!
//! ```rust
//! use blammo_core::{Error, Result};
//!
//! fn check_texel(i: usize, size: usize) -> Result<()> {
//!     if i >= size {
//!         return Err(Error::out_of_bounds(i, 0, 0, size));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::volume::NoiseVolume`] - Buffer operations
//! - `blammo-noise` - Volume building
//! - `blammo-io` - Raw volume loading

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while creating or addressing a noise volume.
///
/// # Categories
///
/// - **Bounds errors**: [`OutOfBounds`](Error::OutOfBounds)
/// - **Dimension errors**: [`InvalidDimensions`](Error::InvalidDimensions), [`LengthMismatch`](Error::LengthMismatch)
#[derive(Debug, Error)]
pub enum Error {
    /// Texel coordinates are outside the volume.
    ///
    /// Returned when any of `i`, `j` or `k` is `>= size`.
    #[error("texel ({i}, {j}, {k}) out of bounds for volume of size {size}")]
    OutOfBounds {
        /// Slowest-varying coordinate
        i: usize,
        /// Middle coordinate
        j: usize,
        /// Fastest-varying coordinate
        k: usize,
        /// Edge length of the volume
        size: usize,
    },

    /// Invalid volume dimensions.
    ///
    /// Returned when the edge length is zero or `size³ × 4` would overflow.
    #[error("invalid volume size {size} ({reason})")]
    InvalidDimensions {
        /// Requested edge length
        size: usize,
        /// Reason why the size is invalid
        reason: String,
    },

    /// Byte buffer length doesn't match the volume size.
    #[error("expected {expected} bytes for volume of size {size}, got {got}")]
    LengthMismatch {
        /// Edge length of the volume
        size: usize,
        /// Required byte count
        expected: usize,
        /// Provided byte count
        got: usize,
    },
}

impl Error {
    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(i: usize, j: usize, k: usize, size: usize) -> Self {
        Self::OutOfBounds { i, j, k, size }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(size: usize, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            size,
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}
