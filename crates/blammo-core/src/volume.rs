//! Cubic RGBA noise volume.
//!
//! [`NoiseVolume`] is the owned byte buffer produced by the volume builder
//! and consumed by whatever uploads it as a 3D texture.
//!
//! # Memory Layout
//!
//! Texels are stored row-major over `(i, j, k)` with `k` varying fastest,
//! four interleaved 8-bit channels per texel:
//!
//! ```text
//! offset(i, j, k) = ((i * size + j) * size + k) * 4
//! Memory: [R G B A R G B A ...]  ← i = 0, j = 0, k = 0..size
//! ```
//!
//! A fixed `i` therefore addresses one contiguous `size × size` RGBA layer.
//!
//! # Ownership
//!
//! The volume owns its bytes. [`NoiseVolume::into_bytes`] hands them to the
//! caller without copying; nothing else keeps a reference.
//!
//! # Usage
//!
//! ```rust
//! use blammo_core::{Channel, NoiseVolume};
//!
//! let mut volume = NoiseVolume::new(8).unwrap();
//! volume.set_channel(1, 2, 3, Channel::G, 200).unwrap();
//! assert_eq!(volume.texel(1, 2, 3).unwrap(), [0, 200, 0, 0]);
//! assert_eq!(volume.len(), 8 * 8 * 8 * 4);
//! ```

use crate::{Error, Result};

/// Number of interleaved channels per texel.
pub const CHANNELS: usize = 4;

/// One of the four interleaved channels of a [`NoiseVolume`].
///
/// The volume builder writes octave `n` into channel `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red, octave 0
    R,
    /// Green, octave 1
    G,
    /// Blue, octave 2
    B,
    /// Alpha, octave 3
    A,
}

impl Channel {
    /// All channels in memory order.
    pub const ALL: [Channel; CHANNELS] = [Channel::R, Channel::G, Channel::B, Channel::A];

    /// Byte offset of this channel inside a texel.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Channel::R => 0,
            Channel::G => 1,
            Channel::B => 2,
            Channel::A => 3,
        }
    }

    /// Channel for a byte offset (or octave number), if one exists.
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Lowercase single-letter name.
    pub fn name(self) -> &'static str {
        match self {
            Channel::R => "r",
            Channel::G => "g",
            Channel::B => "b",
            Channel::A => "a",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Summary statistics of one channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelStats {
    /// Smallest byte value
    pub min: u8,
    /// Largest byte value
    pub max: u8,
    /// Mean byte value
    pub mean: f64,
}

/// Owned cubic RGBA byte volume.
#[derive(Clone, PartialEq, Eq)]
pub struct NoiseVolume {
    size: usize,
    data: Vec<u8>,
}

impl NoiseVolume {
    /// Number of bytes needed for a volume with edge length `size`.
    ///
    /// Fails for `size == 0` or when `size³ × 4` overflows `usize`.
    pub fn byte_len(size: usize) -> Result<usize> {
        if size == 0 {
            return Err(Error::invalid_dimensions(size, "size must be > 0"));
        }
        size.checked_mul(size)
            .and_then(|v| v.checked_mul(size))
            .and_then(|v| v.checked_mul(CHANNELS))
            .ok_or_else(|| Error::invalid_dimensions(size, "byte count overflows"))
    }

    /// Creates a zero-filled volume.
    pub fn new(size: usize) -> Result<Self> {
        let len = Self::byte_len(size)?;
        Ok(Self {
            size,
            data: vec![0; len],
        })
    }

    /// Wraps existing RGBA bytes.
    ///
    /// `data.len()` must be exactly `size³ × 4`.
    pub fn from_raw(size: usize, data: Vec<u8>) -> Result<Self> {
        let expected = Self::byte_len(size)?;
        if data.len() != expected {
            return Err(Error::LengthMismatch {
                size,
                expected,
                got: data.len(),
            });
        }
        Ok(Self { size, data })
    }

    /// Edge length in texels.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of texels (`size³`).
    #[inline]
    pub fn texel_count(&self) -> usize {
        self.data.len() / CHANNELS
    }

    /// Number of bytes (`size³ × 4`).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`: a volume has at least one texel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes in one `i` layer (`size² × 4`).
    #[inline]
    pub fn layer_len(&self) -> usize {
        self.size * self.size * CHANNELS
    }

    /// Raw RGBA bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw RGBA bytes.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the volume and returns its bytes.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    fn offset(&self, i: usize, j: usize, k: usize) -> Result<usize> {
        if i >= self.size || j >= self.size || k >= self.size {
            return Err(Error::out_of_bounds(i, j, k, self.size));
        }
        Ok(((i * self.size + j) * self.size + k) * CHANNELS)
    }

    /// Reads the four channels of texel `(i, j, k)`.
    pub fn texel(&self, i: usize, j: usize, k: usize) -> Result<[u8; CHANNELS]> {
        let at = self.offset(i, j, k)?;
        let mut out = [0u8; CHANNELS];
        out.copy_from_slice(&self.data[at..at + CHANNELS]);
        Ok(out)
    }

    /// Writes one channel of texel `(i, j, k)`.
    pub fn set_channel(&mut self, i: usize, j: usize, k: usize, channel: Channel, value: u8) -> Result<()> {
        let at = self.offset(i, j, k)?;
        self.data[at + channel.index()] = value;
        Ok(())
    }

    /// Iterates the values of one channel in memory order.
    pub fn channel_values(&self, channel: Channel) -> impl Iterator<Item = u8> + '_ {
        self.data.iter().skip(channel.index()).step_by(CHANNELS).copied()
    }

    /// Min, max and mean of one channel.
    pub fn channel_stats(&self, channel: Channel) -> ChannelStats {
        let mut min = u8::MAX;
        let mut max = u8::MIN;
        let mut sum = 0u64;
        for v in self.channel_values(channel) {
            min = min.min(v);
            max = max.max(v);
            sum += u64::from(v);
        }
        ChannelStats {
            min,
            max,
            mean: sum as f64 / self.texel_count() as f64,
        }
    }

    /// The contiguous RGBA layer at index `i` (`size × size` texels).
    pub fn layer_rgba(&self, i: usize) -> Result<&[u8]> {
        if i >= self.size {
            return Err(Error::out_of_bounds(i, 0, 0, self.size));
        }
        let len = self.layer_len();
        Ok(&self.data[i * len..(i + 1) * len])
    }

    /// One channel of the layer at index `i`, as `size × size` bytes.
    pub fn layer_channel(&self, i: usize, channel: Channel) -> Result<Vec<u8>> {
        let layer = self.layer_rgba(i)?;
        Ok(layer.iter().skip(channel.index()).step_by(CHANNELS).copied().collect())
    }
}

impl std::fmt::Debug for NoiseVolume {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseVolume")
            .field("size", &self.size)
            .field("bytes", &self.data.len())
            .finish()
    }
}
