//! CLI command implementations

pub mod fractal;
pub mod info;
pub mod sample;
pub mod slice;
pub mod volume;

use anyhow::{Context, Result};
use blammo_core::NoiseVolume;
use blammo_noise::PerlinNoise;
use std::path::Path;

/// Load a raw volume from path
pub fn load_volume(path: &Path) -> Result<NoiseVolume> {
    blammo_io::raw::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Generator for an optional seed
pub fn generator(seed: Option<u64>) -> PerlinNoise {
    match seed {
        Some(seed) => PerlinNoise::seeded(seed),
        None => PerlinNoise::new(),
    }
}

/// Format file size for display
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
