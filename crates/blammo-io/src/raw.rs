//! Headerless raw RGBA volumes.
//!
//! The file is the volume's bytes and nothing else: `size³` texels of four
//! interleaved channels, `k` fastest. This is the layout a GPU 3D texture
//! upload expects, so a baked octave texture can be shipped as-is.
//!
//! Since there is no header, [`read`] infers the edge length from the file
//! length. Use [`read_with_size`] to enforce a known size.
//!
//! # Example
//!
//! ```rust,ignore
//! use blammo_io::raw;
//!
//! raw::write("noise.raw", &volume)?;
//! let back = raw::read("noise.raw")?;
//! assert_eq!(back.size(), volume.size());
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use blammo_core::{NoiseVolume, CHANNELS};
use tracing::{debug, info};

use crate::{IoError, IoResult};

/// Writes `volume` to `path`, replacing any existing file.
pub fn write<P: AsRef<Path>>(path: P, volume: &NoiseVolume) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(volume.as_bytes())?;
    writer.flush()?;

    info!(path = %path.display(), size = volume.size(), bytes = volume.len(), "wrote raw volume");
    Ok(())
}

/// Reads a volume, inferring its edge length from the file length.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<NoiseVolume> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    let size = size_from_len(data.len()).ok_or(IoError::InvalidLength { len: data.len() })?;

    debug!(path = %path.display(), size, "read raw volume");
    Ok(NoiseVolume::from_raw(size, data)?)
}

/// Reads a volume of known edge length.
///
/// Fails with a length mismatch if the file is not exactly `size³ * 4` bytes.
pub fn read_with_size<P: AsRef<Path>>(path: P, size: usize) -> IoResult<NoiseVolume> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;

    debug!(path = %path.display(), size, "read raw volume");
    Ok(NoiseVolume::from_raw(size, data)?)
}

/// Edge length `n` with `len == 4 * n³`, if any.
pub fn size_from_len(len: usize) -> Option<usize> {
    if len == 0 || len % CHANNELS != 0 {
        return None;
    }
    let texels = len / CHANNELS;
    let guess = (texels as f64).cbrt().round() as usize;
    // The float root can be off by one for large values.
    (guess.saturating_sub(1)..=guess + 1)
        .filter(|&n| n > 0)
        .find(|&n| n.checked_mul(n).and_then(|sq| sq.checked_mul(n)) == Some(texels))
}
