//! Fractal sum command.

use crate::FractalArgs;
use anyhow::{ensure, Result};

pub fn run(args: FractalArgs, verbose: u8) -> Result<()> {
    ensure!(args.alpha != 0.0, "alpha must be non-zero");

    let mut noise = super::generator(args.seed);
    let value = match args.z {
        Some(z) => noise.fractal_sum_3d(args.x, args.y, z, args.alpha, args.beta, args.octaves),
        None => noise.fractal_sum_2d(args.x, args.y, args.alpha, args.beta, args.octaves),
    };

    if verbose > 0 {
        println!(
            "fractal(alpha={}, beta={}, octaves={}) = {}",
            args.alpha, args.beta, args.octaves, value
        );
    } else {
        println!("{}", value);
    }
    Ok(())
}
