//! Volume bake command.
//!
//! Settings come from `--config` (or defaults), then `--size`, `--seed` and
//! `--classic` override them.

use crate::VolumeArgs;
use anyhow::{Context, Result};
use blammo_noise::{NoiseConfig, ShuffleMode};
use std::time::Instant;
use tracing::info;

pub fn run(args: VolumeArgs, verbose: u8) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => NoiseConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => NoiseConfig::default(),
    };
    apply_overrides(&mut config, &args);
    config.validate().context("Invalid volume settings")?;

    if verbose > 0 {
        println!(
            "Baking {}^3 volume ({} octaves from frequency {})",
            config.volume.size, config.volume.octaves, config.volume.start_frequency
        );
    }

    let start = Instant::now();
    let mut noise = config.generator();
    let volume = noise.build_volume(&config.volume)?;
    info!(elapsed_ms = start.elapsed().as_millis() as u64, "bake finished");

    blammo_io::raw::write(&args.output, &volume)
        .with_context(|| format!("Failed to write: {}", args.output.display()))?;

    if let Some(layer) = args.png_layer {
        let png_path = args.output.with_extension("png");
        blammo_io::png::write_layer(&png_path, &volume, layer)
            .with_context(|| format!("Failed to write layer {} to {}", layer, png_path.display()))?;
        if verbose > 0 {
            println!("Layer {} -> {}", layer, png_path.display());
        }
    }

    println!(
        "{} ({}^3, {})",
        args.output.display(),
        volume.size(),
        super::format_size(volume.len() as u64)
    );
    Ok(())
}

fn apply_overrides(config: &mut NoiseConfig, args: &VolumeArgs) {
    if let Some(size) = args.size {
        config.volume.size = size;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.classic {
        config.shuffle = ShuffleMode::Classic;
    }
}
