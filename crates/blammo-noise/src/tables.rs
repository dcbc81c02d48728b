//! Permutation and gradient tables, and the noise functions over them.
//!
//! A [`NoiseTables`] value is one "table generation": a shuffled permutation
//! of `[0, B)` plus 1D, 2D and 3D gradients, all stored with `2B + 2`
//! entries. The tail `[B, 2B + 2)` mirrors the head `[0, B + 2)` so corner
//! hashing can read `p[i + j]` for any two cell indices without wrapping.
//!
//! The table size `B` doubles as the noise frequency: cell indices are
//! taken modulo `B`, so the noise repeats every `B` units along each axis.
//! The volume builder relies on this to produce tileable textures.
//!
//! Tables are immutable once built and can be shared across threads.

use std::num::NonZeroU32;

use blammo_math::{lerp, normalize2, normalize3, s_curve, DVec2, DVec3};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{NoiseError, NoiseResult};

/// Default table size, the period of the permutation.
pub const DEFAULT_FREQUENCY: u32 = 256;

pub(crate) const DEFAULT_TABLE_SIZE: NonZeroU32 = match NonZeroU32::new(DEFAULT_FREQUENCY) {
    Some(f) => f,
    None => unreachable!(),
};

/// Largest accepted table size.
///
/// One table generation holds `2B + 2` entries of 56 bytes each, so the cap
/// keeps a build near 7 MiB.
pub const MAX_FREQUENCY: u32 = 1 << 16;

/// Offset added to every coordinate before taking the cell index.
///
/// Keeps the integer part positive for any input above `-LATTICE_OFFSET`.
pub const LATTICE_OFFSET: f64 = 4096.0;

/// How the permutation is shuffled after it is filled with `0..B`.
///
/// Both modes produce a valid permutation. They differ in distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShuffleMode {
    /// The 1985 reference pass: for `i` from `B - 1` down to `1`, swap
    /// `p[i]` with `p[rand % B]`. Slot 0 is never chosen as `i`, and the
    /// result is slightly biased.
    Classic,
    /// Unbiased Fisher-Yates.
    #[default]
    Uniform,
}

/// One generation of permutation and gradient tables.
#[derive(Clone)]
pub struct NoiseTables {
    frequency: NonZeroU32,
    p: Vec<usize>,
    g1: Vec<f64>,
    g2: Vec<DVec2>,
    g3: Vec<DVec3>,
}

impl NoiseTables {
    /// Builds tables of size `frequency` from `rng`.
    ///
    /// Fails with [`NoiseError::InvalidFrequency`] unless
    /// `1 <= frequency <= MAX_FREQUENCY`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use blammo_noise::{NoiseTables, ShuffleMode};
    /// use rand::SeedableRng;
    ///
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    /// let tables = NoiseTables::generate(16, &mut rng, ShuffleMode::Uniform).unwrap();
    /// assert_eq!(tables.permutation().len(), 34);
    /// assert_eq!(tables.noise3(1.0, 2.0, 3.0), 0.0);
    /// ```
    pub fn generate<R: Rng + ?Sized>(frequency: u32, rng: &mut R, shuffle: ShuffleMode) -> NoiseResult<Self> {
        Ok(Self::build(checked_frequency(frequency)?, rng, shuffle))
    }

    pub(crate) fn build<R: Rng + ?Sized>(frequency: NonZeroU32, rng: &mut R, shuffle: ShuffleMode) -> Self {
        let b = frequency.get() as usize;
        let len = b + b + 2;

        let mut p = vec![0usize; len];
        let mut g1 = vec![0.0f64; len];
        let mut g2 = vec![DVec2::ZERO; len];
        let mut g3 = vec![DVec3::ZERO; len];

        for i in 0..b {
            p[i] = i;
            g1[i] = component(rng, b);
            g2[i] = gradient2(rng, b);
            g3[i] = gradient3(rng, b);
        }

        match shuffle {
            ShuffleMode::Classic => {
                for i in (1..b).rev() {
                    let j = rng.gen_range(0..b);
                    p.swap(i, j);
                }
            }
            ShuffleMode::Uniform => p[..b].shuffle(rng),
        }

        for i in 0..b + 2 {
            p[b + i] = p[i];
            g1[b + i] = g1[i];
            g2[b + i] = g2[i];
            g3[b + i] = g3[i];
        }

        Self {
            frequency,
            p,
            g1,
            g2,
            g3,
        }
    }

    /// Table size `B`.
    #[inline]
    pub fn frequency(&self) -> u32 {
        self.frequency.get()
    }

    /// Permutation, `2B + 2` entries.
    pub fn permutation(&self) -> &[usize] {
        &self.p
    }

    /// 1D gradients in `[-1, 1)`, not normalised.
    pub fn gradients_1d(&self) -> &[f64] {
        &self.g1
    }

    /// Unit 2D gradients.
    pub fn gradients_2d(&self) -> &[DVec2] {
        &self.g2
    }

    /// Unit 3D gradients.
    pub fn gradients_3d(&self) -> &[DVec3] {
        &self.g3
    }

    /// Cell indices and offsets along one axis.
    ///
    /// Returns `(b0, b1, r0, r1)`: the lower and upper cell index and the
    /// offset of `v` from each. Both indices are reduced modulo `B`, so
    /// neighbouring cells agree on their shared corner for any table size.
    #[inline]
    fn setup(&self, v: f64) -> (usize, usize, f64, f64) {
        let b = i64::from(self.frequency.get());
        let t = v + LATTICE_OFFSET;
        let cell = t.floor();
        let b0 = (cell as i64).rem_euclid(b) as usize;
        let b1 = (b0 + 1) % b as usize;
        let r0 = t - cell;
        (b0, b1, r0, r0 - 1.0)
    }

    /// 1D gradient noise.
    pub fn noise1(&self, x: f64) -> f64 {
        let (bx0, bx1, rx0, rx1) = self.setup(x);

        let sx = s_curve(rx0);
        let u = rx0 * self.g1[self.p[bx0]];
        let v = rx1 * self.g1[self.p[bx1]];

        lerp(u, v, sx)
    }

    /// 2D gradient noise, nominally in `[-1, 1]`.
    pub fn noise2(&self, x: f64, y: f64) -> f64 {
        let (bx0, bx1, rx0, rx1) = self.setup(x);
        let (by0, by1, ry0, ry1) = self.setup(y);

        let i = self.p[bx0];
        let j = self.p[bx1];

        let b00 = self.p[i + by0];
        let b10 = self.p[j + by0];
        let b01 = self.p[i + by1];
        let b11 = self.p[j + by1];

        let sx = s_curve(rx0);
        let sy = s_curve(ry0);

        let u = self.g2[b00].dot(DVec2::new(rx0, ry0));
        let v = self.g2[b10].dot(DVec2::new(rx1, ry0));
        let a = lerp(u, v, sx);

        let u = self.g2[b01].dot(DVec2::new(rx0, ry1));
        let v = self.g2[b11].dot(DVec2::new(rx1, ry1));
        let b = lerp(u, v, sx);

        lerp(a, b, sy)
    }

    /// 3D gradient noise, nominally in `[-1, 1]`.
    pub fn noise3(&self, x: f64, y: f64, z: f64) -> f64 {
        let (bx0, bx1, rx0, rx1) = self.setup(x);
        let (by0, by1, ry0, ry1) = self.setup(y);
        let (bz0, bz1, rz0, rz1) = self.setup(z);

        let i = self.p[bx0];
        let j = self.p[bx1];

        let b00 = self.p[i + by0];
        let b10 = self.p[j + by0];
        let b01 = self.p[i + by1];
        let b11 = self.p[j + by1];

        let t = s_curve(rx0);
        let sy = s_curve(ry0);
        let sz = s_curve(rz0);

        let u = self.g3[b00 + bz0].dot(DVec3::new(rx0, ry0, rz0));
        let v = self.g3[b10 + bz0].dot(DVec3::new(rx1, ry0, rz0));
        let a = lerp(u, v, t);

        let u = self.g3[b01 + bz0].dot(DVec3::new(rx0, ry1, rz0));
        let v = self.g3[b11 + bz0].dot(DVec3::new(rx1, ry1, rz0));
        let b = lerp(u, v, t);

        let c = lerp(a, b, sy);

        let u = self.g3[b00 + bz1].dot(DVec3::new(rx0, ry0, rz1));
        let v = self.g3[b10 + bz1].dot(DVec3::new(rx1, ry0, rz1));
        let a = lerp(u, v, t);

        let u = self.g3[b01 + bz1].dot(DVec3::new(rx0, ry1, rz1));
        let v = self.g3[b11 + bz1].dot(DVec3::new(rx1, ry1, rz1));
        let b = lerp(u, v, t);

        let d = lerp(a, b, sy);

        lerp(c, d, sz)
    }
}

impl std::fmt::Debug for NoiseTables {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseTables")
            .field("frequency", &self.frequency)
            .field("entries", &self.p.len())
            .finish()
    }
}

/// Checks `frequency` against `1..=MAX_FREQUENCY`.
pub(crate) fn checked_frequency(frequency: u32) -> NoiseResult<NonZeroU32> {
    NonZeroU32::new(frequency)
        .filter(|f| f.get() <= MAX_FREQUENCY)
        .ok_or(NoiseError::InvalidFrequency { frequency })
}

/// Uniform over `[-B, B)` scaled to `[-1, 1)`.
#[inline]
fn component<R: Rng + ?Sized>(rng: &mut R, b: usize) -> f64 {
    (rng.gen_range(0..b + b) as f64 - b as f64) / b as f64
}

// Zero-length draws are redrawn; with B = 4 roughly one 2D draw in 64 is zero.
fn gradient2<R: Rng + ?Sized>(rng: &mut R, b: usize) -> DVec2 {
    loop {
        let v = DVec2::new(component(rng, b), component(rng, b));
        if let Some(g) = normalize2(v) {
            return g;
        }
    }
}

fn gradient3<R: Rng + ?Sized>(rng: &mut R, b: usize) -> DVec3 {
    loop {
        let v = DVec3::new(component(rng, b), component(rng, b), component(rng, b));
        if let Some(g) = normalize3(v) {
            return g;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn tables(frequency: u32, seed: u64, shuffle: ShuffleMode) -> NoiseTables {
        let mut rng = StdRng::seed_from_u64(seed);
        NoiseTables::generate(frequency, &mut rng, shuffle).unwrap()
    }

    fn assert_permutation(t: &NoiseTables) {
        let b = t.frequency() as usize;
        let mut seen = vec![false; b];
        for &v in &t.permutation()[..b] {
            assert!(v < b, "index {} out of range", v);
            assert!(!seen[v], "duplicate index {}", v);
            seen[v] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_zero_frequency_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = NoiseTables::generate(0, &mut rng, ShuffleMode::Uniform).unwrap_err();
        assert!(matches!(err, NoiseError::InvalidFrequency { frequency: 0 }));
    }

    #[test]
    fn test_permutation_valid() {
        for &freq in &[1, 2, 4, 5, 32, 256] {
            for mode in [ShuffleMode::Classic, ShuffleMode::Uniform] {
                assert_permutation(&tables(freq, 42, mode));
            }
        }
    }

    #[test]
    fn test_tail_mirrors_head() {
        let t = tables(16, 3, ShuffleMode::Classic);
        let b = 16;
        assert_eq!(t.permutation().len(), 2 * b + 2);
        for i in 0..b + 2 {
            assert_eq!(t.permutation()[b + i], t.permutation()[i]);
            assert_eq!(t.gradients_1d()[b + i], t.gradients_1d()[i]);
            assert_eq!(t.gradients_2d()[b + i], t.gradients_2d()[i]);
            assert_eq!(t.gradients_3d()[b + i], t.gradients_3d()[i]);
        }
    }

    #[test]
    fn test_gradients_unit_length() {
        // Small tables draw zero vectors often; they must be redrawn.
        for &freq in &[1, 4, 256] {
            let t = tables(freq, 11, ShuffleMode::Uniform);
            for g in t.gradients_2d() {
                assert_abs_diff_eq!(g.length(), 1.0, epsilon = 1e-5);
            }
            for g in t.gradients_3d() {
                assert_abs_diff_eq!(g.length(), 1.0, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn test_gradients_1d_range() {
        let t = tables(256, 5, ShuffleMode::Uniform);
        for &g in t.gradients_1d() {
            assert!((-1.0..1.0).contains(&g));
        }
    }

    #[test]
    fn test_zero_on_lattice() {
        let t = tables(256, 9, ShuffleMode::Uniform);
        for &(x, y, z) in &[(0.0, 0.0, 0.0), (3.0, -7.0, 12.0), (255.0, 1.0, 100.0)] {
            assert_eq!(t.noise1(x), 0.0);
            assert_eq!(t.noise2(x, y), 0.0);
            assert_eq!(t.noise3(x, y, z), 0.0);
        }
    }

    #[test]
    fn test_deterministic() {
        let a = tables(256, 1234, ShuffleMode::Uniform);
        let b = tables(256, 1234, ShuffleMode::Uniform);
        for i in 0..100 {
            let x = i as f64 * 0.37;
            let y = i as f64 * -1.13;
            let z = i as f64 * 2.71;
            assert_eq!(a.noise2(x, y).to_bits(), a.noise2(x, y).to_bits());
            assert_eq!(a.noise3(x, y, z).to_bits(), b.noise3(x, y, z).to_bits());
        }
    }

    #[test]
    fn test_range_and_finite() {
        let t = tables(256, 77, ShuffleMode::Uniform);
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..2000 {
            let x = rng.gen_range(-500.0..500.0);
            let y = rng.gen_range(-500.0..500.0);
            let z = rng.gen_range(-500.0..500.0);
            for n in [t.noise1(x), t.noise2(x, y), t.noise3(x, y, z)] {
                assert!(n.is_finite());
                assert!((-1.2..=1.2).contains(&n), "noise {} out of range", n);
            }
        }
    }

    #[test]
    fn test_continuity() {
        let t = tables(256, 8, ShuffleMode::Uniform);
        let eps = 1e-4;
        for i in 0..500 {
            let x = i as f64 * 0.173;
            let y = i as f64 * 0.291;
            let z = i as f64 * 0.057;
            assert!((t.noise2(x, y) - t.noise2(x + eps, y)).abs() < 1e-2);
            assert!((t.noise3(x, y, z) - t.noise3(x, y, z + eps)).abs() < 1e-2);
        }
    }

    #[test]
    fn test_period_equals_frequency() {
        let t = tables(8, 21, ShuffleMode::Uniform);
        for i in 0..50 {
            let x = i as f64 * 0.31;
            let y = i as f64 * 0.17;
            let z = i as f64 * 0.53;
            assert_abs_diff_eq!(t.noise3(x, y, z), t.noise3(x + 8.0, y, z), epsilon = 1e-9);
            assert_abs_diff_eq!(t.noise3(x, y, z), t.noise3(x, y + 8.0, z + 16.0), epsilon = 1e-9);
            assert_abs_diff_eq!(t.noise2(x, y), t.noise2(x - 8.0, y), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_far_negative_input_is_finite() {
        let t = tables(64, 2, ShuffleMode::Classic);
        assert!(t.noise3(-10_000.5, -9_999.25, 1e7).is_finite());
        assert!(t.noise2(-1e9 + 0.5, 3.5).is_finite());
    }

    #[test]
    fn test_frequency_above_cap_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        for freq in [MAX_FREQUENCY + 1, 4_000_000_000, u32::MAX] {
            let err = NoiseTables::generate(freq, &mut rng, ShuffleMode::Uniform).unwrap_err();
            assert!(matches!(err, NoiseError::InvalidFrequency { frequency } if frequency == freq));
        }
        assert!(checked_frequency(MAX_FREQUENCY).is_ok());
    }

    #[test]
    fn test_continuous_across_cells_any_size() {
        // Corner indices must agree on both sides of every integer.
        for &freq in &[3, 5, 6, 7, 12, 256] {
            for seed in 0..20 {
                let t = tables(freq, seed, ShuffleMode::Uniform);
                for i in -20..20 {
                    let x = i as f64;
                    let y = 0.37 + i as f64 * 0.11;
                    let z = 1.61 - i as f64 * 0.07;
                    let (lo, hi) = (x - 1e-9, x + 1e-9);
                    assert!((t.noise1(lo) - t.noise1(hi)).abs() < 1e-6, "B={} seed={} x={}", freq, seed, x);
                    assert!((t.noise2(lo, y) - t.noise2(hi, y)).abs() < 1e-6, "B={} seed={} x={}", freq, seed, x);
                    assert!((t.noise2(y, lo) - t.noise2(y, hi)).abs() < 1e-6, "B={} seed={} y={}", freq, seed, x);
                    assert!((t.noise3(lo, y, z) - t.noise3(hi, y, z)).abs() < 1e-6, "B={} seed={} x={}", freq, seed, x);
                    assert!((t.noise3(z, y, lo) - t.noise3(z, y, hi)).abs() < 1e-6, "B={} seed={} z={}", freq, seed, x);
                }
            }
        }
    }

    #[test]
    fn test_non_power_of_two_period() {
        let t = tables(6, 4, ShuffleMode::Classic);
        for i in 0..60 {
            let x = i as f64 * 0.41 - 7.0;
            let y = i as f64 * 0.23;
            let z = i as f64 * -0.19;
            assert_abs_diff_eq!(t.noise3(x, y, z), t.noise3(x + 6.0, y, z), epsilon = 1e-9);
            assert_abs_diff_eq!(t.noise3(x, y, z), t.noise3(x, y - 12.0, z + 6.0), epsilon = 1e-9);
            assert_abs_diff_eq!(t.noise2(x, y), t.noise2(x, y + 6.0), epsilon = 1e-9);
        }
    }
}
