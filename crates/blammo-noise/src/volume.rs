//! Tileable RGBA noise volumes.
//!
//! A volume packs one noise octave per channel into a cubic byte texture.
//! The default schedule is four octaves at frequencies 4, 8, 16 and 32 with
//! amplitudes 0.5, 0.25, 0.125 and 0.0625, written to R, G, B and A:
//!
//! ```text
//! byte = (noise3(i * step, j * step, k * step) + 1) * amplitude * 128
//! step = 1 / (size / frequency)      // integer division, floored at 1
//! ```
//!
//! When the size is a multiple of every octave frequency, each channel
//! covers a whole number of noise periods and the texture wraps cleanly on
//! all three axes.
//!
//! # Usage
//!
//! ```rust
//! use blammo_noise::PerlinNoise;
//!
//! let mut noise = PerlinNoise::seeded(3);
//! let volume = noise.build_noise_volume(16).expect("non-zero size");
//! assert_eq!(volume.len(), 16 * 16 * 16 * 4);
//! assert_eq!(volume.texel(0, 0, 0).unwrap(), [64, 32, 16, 8]);
//! ```

use blammo_core::{Channel, NoiseVolume, CHANNELS};
use rand::Rng;
use serde::{Deserialize, Serialize};
#[allow(unused_imports)]
use tracing::{debug, info, trace, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::perlin::PerlinNoise;
use crate::tables::{checked_frequency, NoiseTables, MAX_FREQUENCY};
use crate::{NoiseError, NoiseResult};

/// Most octaves a volume can hold, one per channel.
pub const MAX_OCTAVES: usize = CHANNELS;

/// Edge length used when no size is configured.
pub const DEFAULT_VOLUME_SIZE: usize = 64;

/// How an out-of-range sample is turned into a byte.
///
/// The default schedule never leaves `[0, 255]`; larger amplitudes can.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteMapping {
    /// Saturate to `[0, 255]`.
    #[default]
    Clamp,
    /// Truncate to an integer and keep the low eight bits.
    Wrap,
}

impl ByteMapping {
    /// Maps a scaled sample to a byte.
    #[inline]
    pub fn apply(self, value: f64) -> u8 {
        match self {
            ByteMapping::Clamp => value.clamp(0.0, 255.0) as u8,
            ByteMapping::Wrap => (value as i64).rem_euclid(256) as u8,
        }
    }
}

/// Octave schedule and size of a volume build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VolumeOptions {
    /// Edge length in texels.
    pub size: usize,
    /// Number of octaves, `1..=4`. Octave `n` goes to channel `n`.
    pub octaves: usize,
    /// Frequency of the first octave; each further octave doubles it.
    pub start_frequency: u32,
    /// Amplitude of the first octave; each further octave halves it.
    pub start_amplitude: f64,
    /// Sample-to-byte mapping.
    pub mapping: ByteMapping,
}

impl Default for VolumeOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_VOLUME_SIZE,
            octaves: MAX_OCTAVES,
            start_frequency: 4,
            start_amplitude: 0.5,
            mapping: ByteMapping::Clamp,
        }
    }
}

/// One entry of the octave schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Octave {
    /// Destination channel.
    pub channel: Channel,
    /// Table size for this octave.
    pub frequency: u32,
    /// Byte amplitude.
    pub amplitude: f64,
}

impl VolumeOptions {
    /// Default schedule at the given size.
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Checks every field.
    pub fn validate(&self) -> NoiseResult<()> {
        NoiseVolume::byte_len(self.size)?;

        if self.octaves == 0 {
            return Err(NoiseError::InvalidParameter("octaves must be >= 1".into()));
        }
        if self.octaves > MAX_OCTAVES {
            return Err(NoiseError::TooManyOctaves {
                octaves: self.octaves,
                max: MAX_OCTAVES,
            });
        }
        checked_frequency(self.start_frequency)?;
        let shift = (self.octaves - 1) as u32;
        let top = u64::from(self.start_frequency) << shift;
        if top > u64::from(MAX_FREQUENCY) {
            return Err(NoiseError::InvalidParameter(format!(
                "start frequency {} exceeds {} after {} octaves",
                self.start_frequency, MAX_FREQUENCY, self.octaves
            )));
        }
        if !self.start_amplitude.is_finite() || self.start_amplitude <= 0.0 {
            return Err(NoiseError::InvalidParameter(format!(
                "start amplitude must be finite and > 0, got {}",
                self.start_amplitude
            )));
        }
        Ok(())
    }

    /// Octaves in build order. Call [`validate`](Self::validate) first.
    pub fn schedule(&self) -> impl Iterator<Item = Octave> + '_ {
        Channel::ALL
            .into_iter()
            .take(self.octaves.min(MAX_OCTAVES))
            .enumerate()
            .map(move |(n, channel)| Octave {
                channel,
                frequency: self.start_frequency.wrapping_shl(n as u32),
                amplitude: self.start_amplitude / (1u32 << n) as f64,
            })
    }
}

/// Lattice units per texel for an octave.
///
/// `size / frequency` is integer division; a quotient of zero (volume smaller
/// than the period) is treated as one cell per texel.
#[inline]
pub fn lattice_step(size: usize, frequency: u32) -> f64 {
    let cells = (size / frequency.max(1) as usize).max(1);
    1.0 / cells as f64
}

/// Writes one octave into its channel of `volume`.
///
/// Layers along `i` are filled in parallel when the `parallel` feature is on;
/// the result is identical either way.
pub fn fill_channel(volume: &mut NoiseVolume, tables: &NoiseTables, octave: &Octave, mapping: ByteMapping) {
    let size = volume.size();
    let layer_len = volume.layer_len();
    let step = lattice_step(size, octave.frequency);
    let octave = *octave;

    trace!(frequency = octave.frequency, step, "fill_channel");

    #[cfg(feature = "parallel")]
    volume
        .as_bytes_mut()
        .par_chunks_mut(layer_len)
        .enumerate()
        .for_each(|(i, layer)| fill_layer(layer, i, size, step, tables, &octave, mapping));

    #[cfg(not(feature = "parallel"))]
    volume
        .as_bytes_mut()
        .chunks_mut(layer_len)
        .enumerate()
        .for_each(|(i, layer)| fill_layer(layer, i, size, step, tables, &octave, mapping));
}

fn fill_layer(
    layer: &mut [u8],
    i: usize,
    size: usize,
    step: f64,
    tables: &NoiseTables,
    octave: &Octave,
    mapping: ByteMapping,
) {
    let ch = octave.channel.index();
    let x = i as f64 * step;
    for j in 0..size {
        let y = j as f64 * step;
        let row = j * size;
        for k in 0..size {
            let z = k as f64 * step;
            let n = tables.noise3(x, y, z);
            layer[(row + k) * CHANNELS + ch] = mapping.apply((n + 1.0) * octave.amplitude * 128.0);
        }
    }
}

impl<R: Rng> PerlinNoise<R> {
    /// Builds a volume with the given schedule.
    ///
    /// Every octave calls [`set_frequency`](Self::set_frequency), so each
    /// gets freshly shuffled tables and the generator is left at the last
    /// octave's frequency.
    pub fn build_volume(&mut self, options: &VolumeOptions) -> NoiseResult<NoiseVolume> {
        options.validate()?;
        let mut volume = NoiseVolume::new(options.size)?;

        debug!(size = options.size, octaves = options.octaves, "building noise volume");

        for octave in options.schedule() {
            self.set_frequency(octave.frequency)?;
            debug!(
                channel = %octave.channel,
                frequency = octave.frequency,
                amplitude = octave.amplitude,
                "octave"
            );
            fill_channel(&mut volume, self.tables(), &octave, options.mapping);
        }

        info!(size = options.size, bytes = volume.len(), "built noise volume");
        Ok(volume)
    }

    /// Builds the default four-octave volume of edge `size`.
    ///
    /// Returns `None` for `size == 0` or a size whose byte count overflows.
    pub fn build_noise_volume(&mut self, size: usize) -> Option<NoiseVolume> {
        if size == 0 {
            return None;
        }
        self.build_volume(&VolumeOptions::with_size(size))
            .inspect_err(|e| warn!(size, error = %e, "noise volume build failed"))
            .ok()
    }
}
