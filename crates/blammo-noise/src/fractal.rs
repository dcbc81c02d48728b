//! Fractal sums of gradient noise.
//!
//! Each function sums `octaves` noise samples. Octave `i` is sampled at the
//! input scaled by `beta^i` and weighted by `1 / alpha^i`:
//!
//! ```text
//! sum = noise(p) + noise(p * beta) / alpha + noise(p * beta^2) / alpha^2 + ...
//! ```
//!
//! `alpha = 2, beta = 2` gives the usual 1/f turbulence-like sum. No input
//! is rejected: zero octaves sum to `0.0`, and `alpha == 0` yields infinities
//! the way plain float division would.

use blammo_math::{DVec2, DVec3};

use crate::tables::NoiseTables;

/// Fractal sum of 1D noise.
pub fn fractal_sum_1d(tables: &NoiseTables, x: f64, alpha: f64, beta: f64, octaves: u32) -> f64 {
    let mut p = x;
    let mut scale = 1.0;
    let mut sum = 0.0;
    for _ in 0..octaves {
        sum += tables.noise1(p) / scale;
        scale *= alpha;
        p *= beta;
    }
    sum
}

/// Fractal sum of 2D noise.
pub fn fractal_sum_2d(tables: &NoiseTables, x: f64, y: f64, alpha: f64, beta: f64, octaves: u32) -> f64 {
    let mut p = DVec2::new(x, y);
    let mut scale = 1.0;
    let mut sum = 0.0;
    for _ in 0..octaves {
        sum += tables.noise2(p.x, p.y) / scale;
        scale *= alpha;
        p *= beta;
    }
    sum
}

/// Fractal sum of 3D noise.
///
/// # Example
///
/// ```rust
/// use blammo_noise::{fractal_sum_3d, NoiseTables, ShuffleMode};
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
/// let tables = NoiseTables::generate(256, &mut rng, ShuffleMode::Uniform).unwrap();
///
/// let single = tables.noise3(0.3, 0.6, 0.9);
/// assert_eq!(fractal_sum_3d(&tables, 0.3, 0.6, 0.9, 2.0, 2.0, 1), single);
/// assert_eq!(fractal_sum_3d(&tables, 0.3, 0.6, 0.9, 2.0, 2.0, 0), 0.0);
/// ```
pub fn fractal_sum_3d(tables: &NoiseTables, x: f64, y: f64, z: f64, alpha: f64, beta: f64, octaves: u32) -> f64 {
    let mut p = DVec3::new(x, y, z);
    let mut scale = 1.0;
    let mut sum = 0.0;
    for _ in 0..octaves {
        sum += tables.noise3(p.x, p.y, p.z) / scale;
        scale *= alpha;
        p *= beta;
    }
    sum
}
