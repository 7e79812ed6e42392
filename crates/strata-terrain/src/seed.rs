//! Deterministic seeding.
//!
//! Every random source in a build is derived from the single terrain seed, so
//! the same seed and parameters always reproduce the same terrain.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use noise::Perlin;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Generation stages that consume randomness.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoiseStage {
    /// The smooth noise primitive shared by the value and fractal fields.
    Smooth,
    /// Site placement for the cellular field.
    Cellular,
}

/// Derive a u64 seed for one stage from the terrain seed.
///
/// Uses SipHash (via std's `DefaultHasher`) so neighbouring terrain seeds
/// give unrelated stage seeds.
pub fn derive_stage_seed(seed: u64, stage: NoiseStage) -> u64 {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    stage.hash(&mut hasher);
    hasher.finish()
}

/// Deterministic RNG for a stage.
pub fn stage_rng(seed: u64, stage: NoiseStage) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(derive_stage_seed(seed, stage))
}

/// The smooth noise primitive for a terrain seed.
pub fn smooth_noise(seed: u64) -> Perlin {
    Perlin::new(derive_stage_seed(seed, NoiseStage::Smooth) as u32)
}
