//! Single noise sample command.

use crate::SampleArgs;
use anyhow::Result;

pub fn run(args: SampleArgs, verbose: u8) -> Result<()> {
    let mut noise = super::generator(args.seed);
    noise.set_frequency(args.frequency)?;

    let value = sample(&mut noise, &args);
    if verbose > 0 {
        match args.z {
            Some(z) => println!("noise3({}, {}, {}) @ {} = {}", args.x, args.y, z, args.frequency, value),
            None => println!("noise2({}, {}) @ {} = {}", args.x, args.y, args.frequency, value),
        }
    } else {
        println!("{}", value);
    }
    Ok(())
}

fn sample(noise: &mut blammo_noise::PerlinNoise, args: &SampleArgs) -> f64 {
    match args.z {
        Some(z) => noise.noise3(args.x, args.y, z),
        None => noise.noise2(args.x, args.y),
    }
}
