//! # blammo-noise
//!
//! Classic lattice gradient noise (the 1985 reference algorithm) and the
//! tileable RGBA noise volumes baked from it.
//!
//! # Overview
//!
//! - [`NoiseTables`] - one generation of permutation and gradient tables,
//!   with `noise1`/`noise2`/`noise3` over them
//! - [`PerlinNoise`] - stateful generator: injected RNG, lazy table
//!   build, [`set_frequency`](PerlinNoise::set_frequency) reshuffles
//! - [`fractal`] - `Σ noise(p·βⁱ) / αⁱ` sums
//! - [`volume`] - four-octave RGBA volume builder ([`VolumeOptions`])
//! - [`TableCache`] - per-frequency tables shared across threads
//! - [`NoiseConfig`] - YAML settings
//!
//! # Usage
//!
//! ```rust
//! use blammo_noise::PerlinNoise;
//!
//! let mut noise = PerlinNoise::seeded(1234);
//!
//! let n = noise.noise2(0.5, 0.25);
//! let turbulence = noise.fractal_sum_3d(0.5, 0.25, 0.125, 2.0, 2.0, 6);
//! assert!(n.is_finite() && turbulence.is_finite());
//!
//! let volume = noise.build_noise_volume(32).unwrap();
//! assert_eq!(volume.size(), 32);
//! ```
//!
//! # Features
//!
//! - `parallel` (default) - fill volume layers with rayon
//!
//! # Dependencies
//!
//! - [`blammo-core`] - `NoiseVolume`
//! - [`blammo-math`] - `s_curve`, `lerp`, gradient vectors
//! - [`rand`] - injected random source
//! - [`serde`], [`serde_yaml`] - configuration
//! - [`tracing`] - logging
//! - [`thiserror`] - error types
//!
//! # Used By
//!
//! - `blammo-cli` - volume generation and sampling commands
//! - `blammo-io` callers - baked volumes are written with `blammo_io::raw`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod cache;
mod config;
mod error;
pub mod fractal;
mod perlin;
mod tables;
pub mod volume;

pub use cache::TableCache;
pub use config::NoiseConfig;
pub use error::{NoiseError, NoiseResult};
pub use fractal::{fractal_sum_1d, fractal_sum_2d, fractal_sum_3d};
pub use perlin::{NoiseState, PerlinNoise};
pub use tables::{NoiseTables, ShuffleMode, DEFAULT_FREQUENCY, LATTICE_OFFSET, MAX_FREQUENCY};
pub use volume::{ByteMapping, Octave, VolumeOptions, DEFAULT_VOLUME_SIZE, MAX_OCTAVES};

pub use rand::rngs::StdRng;
