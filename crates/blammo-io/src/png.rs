//! PNG export of volume layers.
//!
//! A layer is the `size × size` slab at a fixed `i`, written with `j` as the
//! row and `k` as the column. Handy for eyeballing a bake; the raw format
//! remains the interchange format.
//!
//! # Example
//!
//! ```rust,ignore
//! use blammo_core::Channel;
//! use blammo_io::png;
//!
//! png::write_layer("layer0.png", &volume, 0)?;
//! png::write_channel("layer0_r.png", &volume, 0, Channel::R)?;
//! ```

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use blammo_core::{Channel, NoiseVolume};
use tracing::info;

use crate::{IoError, IoResult};

/// Writes layer `i` as an 8-bit RGBA image.
pub fn write_layer<P: AsRef<Path>>(path: P, volume: &NoiseVolume, i: usize) -> IoResult<()> {
    let data = volume.layer_rgba(i)?;
    encode(path.as_ref(), volume.size(), png::ColorType::Rgba, data)?;
    info!(path = %path.as_ref().display(), layer = i, "wrote RGBA layer");
    Ok(())
}

/// Writes one channel of layer `i` as an 8-bit greyscale image.
pub fn write_channel<P: AsRef<Path>>(path: P, volume: &NoiseVolume, i: usize, channel: Channel) -> IoResult<()> {
    let data = volume.layer_channel(i, channel)?;
    encode(path.as_ref(), volume.size(), png::ColorType::Grayscale, &data)?;
    info!(path = %path.as_ref().display(), layer = i, %channel, "wrote channel layer");
    Ok(())
}

fn encode(path: &Path, size: usize, color_type: png::ColorType, data: &[u8]) -> IoResult<()> {
    let side = u32::try_from(size)
        .map_err(|_| IoError::EncodeError(format!("layer size {} exceeds PNG limits", size)))?;

    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, side, side);
    encoder.set_color(color_type);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());

    let mut png_writer = encoder.write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    png_writer.write_image_data(data)
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    Ok(())
}
