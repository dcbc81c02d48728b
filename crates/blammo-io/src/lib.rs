//! # blammo-io
//!
//! Reading and writing baked noise volumes.
//!
//! - [`raw`] - headerless `size³ × 4` RGBA files, the format of a pre-baked
//!   octave texture
//! - [`png`] - single-layer PNG export for inspection (feature `png`)
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use blammo_io::raw;
//!
//! raw::write("noise.raw", &volume)?;
//! let volume = raw::read("noise.raw")?;
//! ```
//!
//! # Dependencies
//!
//! - [`blammo-core`] - `NoiseVolume`
//! - [`png`] - PNG encoding
//! - [`tracing`] - logging
//! - [`thiserror`] - error types
//!
//! # Used By
//!
//! - `blammo-cli` - `volume`, `info` and `slice` commands

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod raw;

#[cfg(feature = "png")]
pub mod png;

pub use error::{IoError, IoResult};
