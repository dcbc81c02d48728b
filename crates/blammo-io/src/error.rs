//! Error types for volume I/O.

use std::io;
use thiserror::Error;

/// Volume I/O error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// File length is not `4 * n^3` bytes for any `n >= 1`.
    #[error("invalid raw volume length: {len} bytes is not 4 * n^3")]
    InvalidLength {
        /// File length in bytes.
        len: usize,
    },

    /// Encoding error.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Volume construction or addressing error.
    #[error(transparent)]
    Volume(#[from] blammo_core::Error),
}

/// Result type for volume I/O.
pub type IoResult<T> = Result<T, IoError>;
