//! Shared per-frequency table cache.
//!
//! [`PerlinNoise`](crate::PerlinNoise) is single-owner: it takes `&mut self`
//! and reshuffles on every frequency change. [`TableCache`] is the shared
//! alternative. It keeps one immutable [`NoiseTables`] per frequency, built
//! on first request from an RNG seeded with `(seed, frequency)`, and hands
//! out `Arc`s that any number of threads can sample concurrently.
//!
//! Table seeds come from `StdRng`, so a cache's output is fixed for a given
//! `rand` release (0.8 in this workspace) but may change when `rand` is
//! upgraded.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use blammo_noise::{ShuffleMode, TableCache};
//!
//! let cache = TableCache::new(42, ShuffleMode::Uniform);
//! let a = cache.tables(16).unwrap();
//! let b = cache.tables(16).unwrap();
//! assert!(Arc::ptr_eq(&a, &b));
//!
//! let v = cache.noise3(16, 0.5, 0.25, 0.125).unwrap();
//! assert!(v.is_finite());
//! ```

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use blammo_core::NoiseVolume;
use rand::rngs::StdRng;
use rand::SeedableRng;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

use crate::fractal;
use crate::tables::{checked_frequency, NoiseTables, ShuffleMode};
use crate::volume::{fill_channel, VolumeOptions};
use crate::NoiseResult;

/// Seed of the table set for one frequency.
#[inline]
fn table_seed(seed: u64, frequency: u32) -> u64 {
    seed ^ u64::from(frequency).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Thread-safe cache of noise tables keyed by frequency.
pub struct TableCache {
    seed: u64,
    shuffle: ShuffleMode,
    tables: RwLock<HashMap<u32, Arc<NoiseTables>>>,
}

impl TableCache {
    /// Creates an empty cache.
    pub fn new(seed: u64, shuffle: ShuffleMode) -> Self {
        Self {
            seed,
            shuffle,
            tables: RwLock::new(HashMap::new()),
        }
    }

    /// Base seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle mode used for every table set.
    pub fn shuffle_mode(&self) -> ShuffleMode {
        self.shuffle
    }

    /// Tables for `frequency`, building them on first request.
    ///
    /// Concurrent first requests may both build; only the first insert is
    /// kept, so every caller sees the same `Arc`. Frequencies outside
    /// `1..=MAX_FREQUENCY` fail without touching the cache.
    pub fn tables(&self, frequency: u32) -> NoiseResult<Arc<NoiseTables>> {
        let nonzero = checked_frequency(frequency)?;

        {
            let map = self.tables.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(t) = map.get(&frequency) {
                return Ok(Arc::clone(t));
            }
        }

        debug!(frequency, seed = self.seed, "caching noise tables");
        let mut rng = StdRng::seed_from_u64(table_seed(self.seed, frequency));
        let built = Arc::new(NoiseTables::build(nonzero, &mut rng, self.shuffle));

        let mut map = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(map.entry(frequency).or_insert(built)))
    }

    /// 1D noise with the tables for `frequency`.
    pub fn noise1(&self, frequency: u32, x: f64) -> NoiseResult<f64> {
        Ok(self.tables(frequency)?.noise1(x))
    }

    /// 2D noise with the tables for `frequency`.
    pub fn noise2(&self, frequency: u32, x: f64, y: f64) -> NoiseResult<f64> {
        Ok(self.tables(frequency)?.noise2(x, y))
    }

    /// 3D noise with the tables for `frequency`.
    pub fn noise3(&self, frequency: u32, x: f64, y: f64, z: f64) -> NoiseResult<f64> {
        Ok(self.tables(frequency)?.noise3(x, y, z))
    }

    /// Fractal sum of 2D noise with the tables for `frequency`.
    pub fn fractal_sum_2d(&self, frequency: u32, x: f64, y: f64, alpha: f64, beta: f64, octaves: u32) -> NoiseResult<f64> {
        let t = self.tables(frequency)?;
        Ok(fractal::fractal_sum_2d(&t, x, y, alpha, beta, octaves))
    }

    /// Fractal sum of 3D noise with the tables for `frequency`.
    #[allow(clippy::too_many_arguments)]
    pub fn fractal_sum_3d(
        &self,
        frequency: u32,
        x: f64,
        y: f64,
        z: f64,
        alpha: f64,
        beta: f64,
        octaves: u32,
    ) -> NoiseResult<f64> {
        let t = self.tables(frequency)?;
        Ok(fractal::fractal_sum_3d(&t, x, y, z, alpha, beta, octaves))
    }

    /// Builds a volume from cached tables.
    ///
    /// Unlike [`PerlinNoise::build_volume`](crate::PerlinNoise::build_volume)
    /// the result depends only on the seed and the options, so repeated
    /// builds are byte-identical.
    pub fn build_volume(&self, options: &VolumeOptions) -> NoiseResult<NoiseVolume> {
        options.validate()?;
        let mut volume = NoiseVolume::new(options.size)?;
        for octave in options.schedule() {
            let tables = self.tables(octave.frequency)?;
            fill_channel(&mut volume, &tables, &octave, options.mapping);
        }
        info!(size = options.size, seed = self.seed, "built noise volume from cache");
        Ok(volume)
    }

    /// Number of cached frequencies.
    pub fn len(&self) -> usize {
        self.tables.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every cached table set. Outstanding `Arc`s stay valid.
    pub fn clear(&self) {
        self.tables.write().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl std::fmt::Debug for TableCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableCache")
            .field("seed", &self.seed)
            .field("shuffle", &self.shuffle)
            .field("cached", &self.len())
            .finish()
    }
}
