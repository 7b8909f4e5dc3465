//! Prefix/suffix-maximum water calculator and the boundary-tower fallback.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_SENTINEL_HEIGHT;
use crate::height_profile::HeightProfile;

/// Outcome of `compute_water`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterResult {
    /// Units of water trapped by `display_profile`.
    pub total_water: u64,
    /// True when the raw profile trapped nothing and boundary towers were added.
    pub boundaries_added: bool,
    /// The profile to draw: the input, or the input with boundary towers.
    pub display_profile: HeightProfile,
}

/// Water held above each column.
///
/// `left_max[i]` covers `[0..=i]` and `right_max[i]` covers `[i..n]`, so
/// both include the column itself and the difference never underflows.
pub fn trapped_per_column(heights: &[u32]) -> Vec<u32> {
    let n = heights.len();
    if n == 0 {
        return Vec::new();
    }

    let mut left_max = vec![0u32; n];
    left_max[0] = heights[0];
    for i in 1..n {
        left_max[i] = left_max[i - 1].max(heights[i]);
    }

    let mut right_max = vec![0u32; n];
    right_max[n - 1] = heights[n - 1];
    for i in (0..n - 1).rev() {
        right_max[i] = right_max[i + 1].max(heights[i]);
    }

    heights
        .iter()
        .enumerate()
        .map(|(i, &h)| left_max[i].min(right_max[i]).saturating_sub(h))
        .collect()
}

/// Total water trapped by `heights`, without any fallback.
pub fn trapped_total(heights: &[u32]) -> u64 {
    trapped_per_column(heights)
        .into_iter()
        .map(u64::from)
        .sum()
}

/// Trapped water for `heights`, adding boundary towers of `sentinel_height`
/// when the raw profile traps nothing.
///
/// The fallback is a display aid: a flat or monotonic profile reports the
/// water held between the synthetic towers, not zero.
pub fn compute_water(heights: &HeightProfile, sentinel_height: u32) -> WaterResult {
    if heights.is_empty() {
        return WaterResult::default();
    }

    let direct = trapped_total(heights);
    if direct > 0 {
        return WaterResult {
            total_water: direct,
            boundaries_added: false,
            display_profile: heights.clone(),
        };
    }

    let augmented = heights.with_boundaries(sentinel_height);
    WaterResult {
        total_water: trapped_total(&augmented),
        boundaries_added: true,
        display_profile: augmented,
    }
}

/// `compute_water` with the default boundary tower height.
pub fn compute_water_default(heights: &HeightProfile) -> WaterResult {
    compute_water(heights, DEFAULT_SENTINEL_HEIGHT)
}
