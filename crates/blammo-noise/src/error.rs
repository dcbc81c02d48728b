//! Noise error types.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for noise operations.
pub type NoiseResult<T> = Result<T, NoiseError>;

/// Errors that can occur while configuring a generator or building a volume.
///
/// Point queries never fail; everything here comes from parameters that
/// would otherwise produce out-of-range table lookups or garbage output.
#[derive(Debug, Error)]
pub enum NoiseError {
    /// Frequency (table size) of zero or above `MAX_FREQUENCY`.
    #[error("invalid frequency {frequency}: must be in 1..={max}", max = crate::MAX_FREQUENCY)]
    InvalidFrequency {
        /// Requested frequency
        frequency: u32,
    },

    /// More octaves than an RGBA volume has channels.
    #[error("{octaves} octaves requested, a volume holds at most {max}")]
    TooManyOctaves {
        /// Requested octave count
        octaves: usize,
        /// Channel count of the volume
        max: usize,
    },

    /// Any other out-of-range parameter.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Volume allocation or addressing error.
    #[error("volume error: {0}")]
    Volume(#[from] blammo_core::Error),

    /// Config file not found.
    #[error("config file not found: {path}")]
    ConfigNotFound {
        /// Path that was searched
        path: PathBuf,
    },

    /// I/O error reading config files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
