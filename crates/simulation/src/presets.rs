//! Built-in profiles and the seeded random profile generator.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::height_profile::HeightProfile;

/// Profile shown at start-up.
pub const DEFAULT_PROFILE: [u32; 10] = [0, 4, 0, 0, 0, 6, 0, 6, 4, 0];

/// A single peak that traps nothing on its own, so it always shows the
/// boundary towers.
pub const SYMMETRIC_PEAK_PROFILE: [u32; 7] = [1, 2, 3, 4, 3, 2, 1];

pub fn default_profile() -> HeightProfile {
    HeightProfile::from(DEFAULT_PROFILE)
}

pub fn symmetric_peak_profile() -> HeightProfile {
    HeightProfile::from(SYMMETRIC_PEAK_PROFILE)
}

/// Deterministic random profile of `len` columns with heights in
/// `0..=max_height`. The same seed always yields the same profile.
pub fn random_profile(seed: u64, len: usize, max_height: u32) -> HeightProfile {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(0..=max_height)).collect()
}
