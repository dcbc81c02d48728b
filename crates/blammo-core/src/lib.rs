//! # blammo-core
//!
//! Core types for the Blammo noise workspace.
//!
//! - [`NoiseVolume`] - Owned cubic RGBA byte buffer (a baked noise texture)
//! - [`Channel`] - Channel selector; octave `n` lives in channel `n`
//! - [`Error`], [`Result`] - Errors for volume allocation and addressing
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. The other crates build on it:
//!
//! ```text
//! blammo-core (this crate)
//!    ^
//!    |
//!    +-- blammo-noise (generator, volume builder)
//!    +-- blammo-io (raw and PNG output)
//!    +-- blammo-cli
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod volume;

pub use error::*;
pub use volume::{Channel, ChannelStats, NoiseVolume, CHANNELS};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::volume::{Channel, ChannelStats, NoiseVolume, CHANNELS};
}
