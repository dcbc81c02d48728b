//! Stateful Perlin noise generator.
//!
//! [`PerlinNoise`] owns an injected random source and lazily builds its
//! [`NoiseTables`] on the first query. Changing the frequency drops the
//! tables, and the next query builds a fresh, independently shuffled set:
//!
//! ```text
//! Uninitialized --(first query)--> Initialized
//!       ^                               |
//!       +-------(set_frequency)---------+
//! ```
//!
//! Every query takes `&mut self`, so a generator can't be raced by two
//! threads. For shared, read-only access across threads use
//! [`TableCache`](crate::TableCache).
//!
//! # Example
//!
//! ```rust
//! use blammo_noise::PerlinNoise;
//!
//! let mut noise = PerlinNoise::seeded(42);
//! assert!(!noise.is_initialized());
//!
//! let v = noise.noise3(0.5, 1.25, 2.0);
//! assert!(v.abs() <= 1.2);
//! assert!(noise.is_initialized());
//! ```

use std::num::NonZeroU32;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::fractal;
use crate::tables::{checked_frequency, NoiseTables, ShuffleMode, DEFAULT_TABLE_SIZE};
use crate::NoiseResult;

/// Table state of a [`PerlinNoise`] generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseState {
    /// No tables yet; the next query builds them.
    Uninitialized,
    /// Tables built for the current frequency.
    Initialized,
}

/// Classic gradient noise generator with lazily built tables.
pub struct PerlinNoise<R = StdRng> {
    rng: R,
    frequency: NonZeroU32,
    shuffle: ShuffleMode,
    tables: Option<NoiseTables>,
}

impl PerlinNoise<StdRng> {
    /// Creates a generator seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a reproducible generator.
    ///
    /// The same seed yields the same tables for a given build. `StdRng`
    /// does not promise an identical stream across `rand` releases, so a
    /// dependency upgrade may change the output of a seed. The workspace
    /// pins `rand` 0.8, whose `StdRng` is ChaCha12.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for PerlinNoise<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PerlinNoise<R> {
    /// Creates a generator drawing from `rng`, at
    /// [`DEFAULT_FREQUENCY`](crate::DEFAULT_FREQUENCY).
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            frequency: DEFAULT_TABLE_SIZE,
            shuffle: ShuffleMode::default(),
            tables: None,
        }
    }

    /// Sets the shuffle mode used by subsequent table builds.
    ///
    /// Resets the generator to [`NoiseState::Uninitialized`].
    pub fn with_shuffle(mut self, shuffle: ShuffleMode) -> Self {
        self.shuffle = shuffle;
        self.tables = None;
        self
    }

    /// Shuffle mode used for table builds.
    #[inline]
    pub fn shuffle_mode(&self) -> ShuffleMode {
        self.shuffle
    }

    /// Current frequency (table size).
    #[inline]
    pub fn frequency(&self) -> u32 {
        self.frequency.get()
    }

    /// Current table state.
    #[inline]
    pub fn state(&self) -> NoiseState {
        if self.tables.is_some() {
            NoiseState::Initialized
        } else {
            NoiseState::Uninitialized
        }
    }

    /// `true` once tables exist for the current frequency.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.tables.is_some()
    }

    /// Sets the table size and marks the tables for rebuilding.
    ///
    /// Every call invalidates the tables, even for an unchanged frequency,
    /// so each call yields a fresh shuffle. The noise is periodic with
    /// period `frequency` along every axis.
    ///
    /// Fails with [`NoiseError::InvalidFrequency`](crate::NoiseError::InvalidFrequency)
    /// for 0 or anything above [`MAX_FREQUENCY`](crate::MAX_FREQUENCY),
    /// leaving the generator unchanged.
    pub fn set_frequency(&mut self, frequency: u32) -> NoiseResult<()> {
        let nonzero = checked_frequency(frequency)?;
        trace!(frequency, "set_frequency");
        self.frequency = nonzero;
        self.tables = None;
        Ok(())
    }

    /// Tables for the current frequency, building them if needed.
    pub fn tables(&mut self) -> &NoiseTables {
        let frequency = self.frequency;
        let shuffle = self.shuffle;
        let rng = &mut self.rng;
        self.tables.get_or_insert_with(|| {
            debug!(frequency = frequency.get(), ?shuffle, "building noise tables");
            NoiseTables::build(frequency, rng, shuffle)
        })
    }

    /// 1D noise at `x`.
    pub fn noise1(&mut self, x: f64) -> f64 {
        self.tables().noise1(x)
    }

    /// 2D noise at `(x, y)`, nominally in `[-1, 1]`.
    pub fn noise2(&mut self, x: f64, y: f64) -> f64 {
        self.tables().noise2(x, y)
    }

    /// 3D noise at `(x, y, z)`, nominally in `[-1, 1]`.
    pub fn noise3(&mut self, x: f64, y: f64, z: f64) -> f64 {
        self.tables().noise3(x, y, z)
    }

    /// Fractal sum of 1D noise. See [`fractal::fractal_sum_1d`].
    pub fn fractal_sum_1d(&mut self, x: f64, alpha: f64, beta: f64, octaves: u32) -> f64 {
        fractal::fractal_sum_1d(self.tables(), x, alpha, beta, octaves)
    }

    /// Fractal sum of 2D noise. See [`fractal::fractal_sum_2d`].
    pub fn fractal_sum_2d(&mut self, x: f64, y: f64, alpha: f64, beta: f64, octaves: u32) -> f64 {
        fractal::fractal_sum_2d(self.tables(), x, y, alpha, beta, octaves)
    }

    /// Fractal sum of 3D noise. See [`fractal::fractal_sum_3d`].
    pub fn fractal_sum_3d(&mut self, x: f64, y: f64, z: f64, alpha: f64, beta: f64, octaves: u32) -> f64 {
        fractal::fractal_sum_3d(self.tables(), x, y, z, alpha, beta, octaves)
    }
}

impl<R> std::fmt::Debug for PerlinNoise<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PerlinNoise")
            .field("frequency", &self.frequency)
            .field("shuffle", &self.shuffle)
            .field("initialized", &self.tables.is_some())
            .finish()
    }
}
