//! YAML configuration for noise generation.
//!
//! Every field is optional; a missing field takes its default.
//!
//! A fixed `seed` reproduces the same volume for a given build. Seeds feed
//! `rand`'s `StdRng`, whose stream is not guaranteed stable across `rand`
//! releases, so bakes may differ after a `rand` upgrade. The workspace pins
//! `rand` 0.8.
//!
//! ```yaml
//! seed: 1234
//! shuffle: classic     # or "uniform" (default)
//! volume:
//!   size: 128
//!   octaves: 4
//!   start_frequency: 4
//!   start_amplitude: 0.5
//!   mapping: clamp     # or "wrap"
//! ```
//!
//! # Example
//!
//! ```rust
//! use blammo_noise::{NoiseConfig, ShuffleMode};
//!
//! let cfg = NoiseConfig::from_yaml_str("seed: 7\nvolume:\n  size: 32\n").unwrap();
//! assert_eq!(cfg.seed, Some(7));
//! assert_eq!(cfg.shuffle, ShuffleMode::Uniform);
//! assert_eq!(cfg.volume.size, 32);
//! ```

use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cache::TableCache;
use crate::perlin::PerlinNoise;
use crate::tables::ShuffleMode;
use crate::volume::VolumeOptions;
use crate::{NoiseError, NoiseResult};

/// Generator and volume settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NoiseConfig {
    /// RNG seed. `None` seeds from OS entropy. Reproducible within one
    /// `rand` release.
    pub seed: Option<u64>,
    /// Permutation shuffle.
    pub shuffle: ShuffleMode,
    /// Volume build options.
    pub volume: VolumeOptions,
}

impl NoiseConfig {
    /// Loads and validates a config file.
    pub fn from_file(path: impl AsRef<Path>) -> NoiseResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(NoiseError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading noise config");
        Self::from_yaml_str(&content)
    }

    /// Parses and validates YAML. Blank input yields the defaults.
    pub fn from_yaml_str(yaml: &str) -> NoiseResult<Self> {
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Serializes to YAML.
    pub fn to_yaml_string(&self) -> NoiseResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Checks the volume options.
    pub fn validate(&self) -> NoiseResult<()> {
        self.volume.validate()
    }

    /// Generator with this config's seed and shuffle.
    pub fn generator(&self) -> PerlinNoise<StdRng> {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        PerlinNoise::with_rng(rng).with_shuffle(self.shuffle)
    }

    /// Table cache with this config's seed and shuffle.
    ///
    /// An unset seed draws one from OS entropy.
    pub fn table_cache(&self) -> TableCache {
        let seed = self.seed.unwrap_or_else(rand::random);
        TableCache::new(seed, self.shuffle)
    }
}
