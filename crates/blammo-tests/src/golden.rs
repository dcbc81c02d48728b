//! Hash checks for baked volume stability.
//!
//! Volumes are compared by SHA256 of their bytes, so a regression shows up
//! as one hash mismatch instead of a wall of differing texels.
//!
//! Reference hashes are tied to `rand` 0.8, whose `StdRng` is ChaCha12.
//! A `rand` upgrade that changes the stream will change them too.
//!
//! # Running
//!
//! ```bash
//! cargo test --package blammo-tests golden
//! ```

use blammo_core::NoiseVolume;
use blammo_noise::{PerlinNoise, ShuffleMode, TableCache, VolumeOptions};
use sha2::{Digest, Sha256};

// ---------------------------------------------------------------------------
// Hash utilities
// ---------------------------------------------------------------------------

/// SHA256 of raw bytes as lowercase hex.
fn compute_hash(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

fn volume_hash(volume: &NoiseVolume) -> String {
    compute_hash(volume.as_bytes())
}

// ---------------------------------------------------------------------------
// Reference hashes
// ---------------------------------------------------------------------------

/// `PerlinNoise::seeded(0xB1A3)`, uniform shuffle, 32^3 default schedule.
const PERLIN_B1A3_32: &str = "477bb2160442983c93c4c12af7a6d14089f4f132be544f6bdaebf071a45d6369";

/// `PerlinNoise::seeded(9)`, classic shuffle, 16^3 default schedule.
const PERLIN_9_16_CLASSIC: &str = "d6d17f8e5ce55ffa0eeb3a119bd17e1805897a5e2d8ce335651be02fa7cf0df7";

/// `TableCache::new(4, Uniform)`, 32^3 default schedule.
const CACHE_4_32: &str = "ea444ac278d704218c98908a2ad0eac3c8286898320f12db0fcf6b06df3c6d19";

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn golden_seeded_generator_stable() {
    let a = PerlinNoise::seeded(0xB1A3).build_noise_volume(16).unwrap();
    let b = PerlinNoise::seeded(0xB1A3).build_noise_volume(16).unwrap();
    assert_eq!(volume_hash(&a), volume_hash(&b));
    assert_eq!(volume_hash(&a).len(), 64);
}

#[test]
fn golden_perlin_volume_reference() {
    let volume = PerlinNoise::seeded(0xB1A3).build_noise_volume(32).unwrap();
    assert_eq!(volume.texel(0, 0, 0).unwrap(), [64, 32, 16, 8]);
    assert_eq!(volume.texel(1, 2, 3).unwrap(), [64, 29, 17, 8]);
    assert_eq!(volume.texel(31, 5, 16).unwrap(), [77, 24, 13, 8]);
    assert_eq!(volume_hash(&volume), PERLIN_B1A3_32);
}

#[test]
fn golden_perlin_classic_reference() {
    let volume = PerlinNoise::seeded(9)
        .with_shuffle(ShuffleMode::Classic)
        .build_noise_volume(16)
        .unwrap();
    assert_eq!(volume.texel(1, 2, 3).unwrap(), [57, 23, 16, 8]);
    assert_eq!(volume.texel(15, 5, 8).unwrap(), [49, 38, 16, 8]);
    assert_eq!(volume_hash(&volume), PERLIN_9_16_CLASSIC);
}

#[test]
fn golden_cache_volume_reference() {
    let volume = TableCache::new(4, ShuffleMode::Uniform)
        .build_volume(&VolumeOptions::with_size(32))
        .unwrap();
    assert_eq!(volume.texel(1, 2, 3).unwrap(), [65, 39, 17, 8]);
    assert_eq!(volume.texel(31, 5, 16).unwrap(), [52, 33, 14, 8]);
    assert_eq!(volume_hash(&volume), CACHE_4_32);
}

#[test]
fn golden_seed_changes_hash() {
    let a = PerlinNoise::seeded(1).build_noise_volume(16).unwrap();
    let b = PerlinNoise::seeded(2).build_noise_volume(16).unwrap();
    assert_ne!(volume_hash(&a), volume_hash(&b));
}

#[test]
fn golden_shuffle_mode_changes_hash() {
    let a = PerlinNoise::seeded(9).with_shuffle(ShuffleMode::Classic).build_noise_volume(16).unwrap();
    let b = PerlinNoise::seeded(9).with_shuffle(ShuffleMode::Uniform).build_noise_volume(16).unwrap();
    assert_ne!(volume_hash(&a), volume_hash(&b));
}

#[test]
fn golden_raw_file_hash_matches_memory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("v.raw");
    let volume = TableCache::new(4, ShuffleMode::Uniform)
        .build_volume(&VolumeOptions::with_size(8))
        .unwrap();

    blammo_io::raw::write(&path, &volume).unwrap();
    let on_disk = std::fs::read(&path).unwrap();
    assert_eq!(compute_hash(&on_disk), volume_hash(&volume));
}

#[test]
fn golden_empty_hash() {
    assert_eq!(
        compute_hash(b""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

// ---------------------------------------------------------------------------
// Hex encoding (avoid extra dependency)
// ---------------------------------------------------------------------------

mod hex {
    const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        let bytes = bytes.as_ref();
        let mut s = String::with_capacity(bytes.len() * 2);
        for &b in bytes {
            s.push(HEX_CHARS[(b >> 4) as usize] as char);
            s.push(HEX_CHARS[(b & 0xf) as usize] as char);
        }
        s
    }
}
