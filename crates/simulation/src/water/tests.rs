//! Tests for the water calculator: reference profiles, the boundary-tower
//! fallback and the invariants it must hold for any profile.

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use crate::config::DEFAULT_SENTINEL_HEIGHT;
    use crate::height_profile::HeightProfile;
    use crate::water::*;

    fn profile(heights: &[u32]) -> HeightProfile {
        HeightProfile::from(heights)
    }

    // -------------------------------------------------------------------------
    // Reference profiles
    // -------------------------------------------------------------------------

    #[test]
    fn test_reference_profile_traps_water_directly() {
        let result = compute_water_default(&profile(&[0, 4, 0, 0, 0, 6, 0, 6, 4, 0]));
        assert_eq!(result.total_water, 18);
        assert!(!result.boundaries_added);
        assert_eq!(
            result.display_profile.as_slice(),
            &[0, 4, 0, 0, 0, 6, 0, 6, 4, 0]
        );
    }

    #[test]
    fn test_reference_profile_per_column() {
        assert_eq!(
            trapped_per_column(&[0, 4, 0, 0, 0, 6, 0, 6, 4, 0]),
            vec![0, 0, 4, 4, 4, 0, 6, 0, 0, 0]
        );
    }

    #[test]
    fn test_symmetric_peak_falls_back_to_boundaries() {
        let heights = [1, 2, 3, 4, 3, 2, 1];
        assert_eq!(trapped_total(&heights), 0);

        let result = compute_water_default(&profile(&heights));
        assert!(result.boundaries_added);
        assert_eq!(
            result.display_profile.as_slice(),
            &[5, 1, 2, 3, 4, 3, 2, 1, 5]
        );
        // Every inner column fills up to the boundary towers
        assert_eq!(
            trapped_per_column(&result.display_profile),
            vec![0, 4, 3, 2, 1, 2, 3, 4, 0]
        );
        assert_eq!(result.total_water, 19);
    }

    #[test]
    fn test_empty_profile() {
        let result = compute_water_default(&HeightProfile::default());
        assert_eq!(result.total_water, 0);
        assert!(!result.boundaries_added);
        assert!(result.display_profile.is_empty());
        assert_eq!(result, WaterResult::default());
    }

    #[test]
    fn test_flat_profile_falls_back_to_boundaries() {
        let result = compute_water_default(&profile(&[3, 3, 3]));
        assert!(result.boundaries_added);
        assert_eq!(result.display_profile.as_slice(), &[5, 3, 3, 3, 5]);
        assert_eq!(result.total_water, 6);
    }

    #[test]
    fn test_boundaries_shorter_than_columns_trap_nothing() {
        let result = compute_water(&profile(&[8, 8]), 5);
        assert!(result.boundaries_added);
        assert_eq!(result.display_profile.as_slice(), &[5, 8, 8, 5]);
        assert_eq!(result.total_water, 0);
    }

    #[test]
    fn test_custom_sentinel_height() {
        let result = compute_water(&profile(&[0, 0]), 2);
        assert_eq!(result.display_profile.as_slice(), &[2, 0, 0, 2]);
        assert_eq!(result.total_water, 4);
    }

    #[test]
    fn test_single_column() {
        assert_eq!(trapped_per_column(&[7]), vec![0]);
        let result = compute_water_default(&profile(&[7]));
        assert!(result.boundaries_added);
        assert_eq!(result.display_profile.as_slice(), &[5, 7, 5]);
        assert_eq!(result.total_water, 0);
    }

    #[test]
    fn test_classic_profile() {
        let heights = [0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1];
        assert_eq!(trapped_total(&heights), 6);
    }

    #[test]
    fn test_large_heights_do_not_overflow_total() {
        let heights = [u32::MAX, 0, 0, u32::MAX];
        assert_eq!(trapped_total(&heights), 2 * u64::from(u32::MAX));
    }

    // -------------------------------------------------------------------------
    // Invariants over seeded random profiles
    // -------------------------------------------------------------------------

    fn random_heights(rng: &mut ChaCha8Rng) -> Vec<u32> {
        let len = rng.gen_range(0..40);
        (0..len).map(|_| rng.gen_range(0..12)).collect()
    }

    #[test]
    fn test_display_profile_shape_invariant() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        for _ in 0..500 {
            let heights = random_heights(&mut rng);
            let result = compute_water_default(&profile(&heights));
            if result.boundaries_added {
                let display = &result.display_profile;
                assert_eq!(display.len(), heights.len() + 2);
                assert_eq!(display[0], DEFAULT_SENTINEL_HEIGHT);
                assert_eq!(display[display.len() - 1], DEFAULT_SENTINEL_HEIGHT);
                assert_eq!(&display[1..display.len() - 1], heights.as_slice());
            } else {
                assert_eq!(result.display_profile.as_slice(), heights.as_slice());
            }
        }
    }

    #[test]
    fn test_fallback_engages_only_when_direct_is_zero() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..500 {
            let heights = random_heights(&mut rng);
            let direct = trapped_total(&heights);
            let result = compute_water_default(&profile(&heights));
            if heights.is_empty() {
                assert!(!result.boundaries_added);
            } else {
                assert_eq!(result.boundaries_added, direct == 0, "{heights:?}");
            }
            if !result.boundaries_added {
                assert_eq!(result.total_water, direct);
            }
        }
    }

    #[test]
    fn test_total_matches_per_column_sum() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..200 {
            let heights = random_heights(&mut rng);
            let per_column = trapped_per_column(&heights);
            assert_eq!(per_column.len(), heights.len());
            let sum: u64 = per_column.iter().map(|&w| u64::from(w)).sum();
            assert_eq!(sum, trapped_total(&heights));
        }
    }

    #[test]
    fn test_water_never_rises_above_either_wall() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..200 {
            let heights = random_heights(&mut rng);
            let per_column = trapped_per_column(&heights);
            for (i, &w) in per_column.iter().enumerate() {
                let left = heights[..=i].iter().copied().max().unwrap_or(0);
                let right = heights[i..].iter().copied().max().unwrap_or(0);
                assert!(heights[i] + w <= left.min(right).max(heights[i]));
            }
        }
    }

    #[test]
    fn test_monotonic_profiles_trap_nothing_directly() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..100 {
            let mut heights = random_heights(&mut rng);
            heights.sort_unstable();
            assert_eq!(trapped_total(&heights), 0);
            heights.reverse();
            assert_eq!(trapped_total(&heights), 0);
            if !heights.is_empty() {
                assert!(compute_water_default(&profile(&heights)).boundaries_added);
            }
        }
    }

    #[test]
    fn test_compute_water_is_idempotent() {
        let heights = profile(&[2, 0, 3, 1, 0, 4]);
        let first = compute_water_default(&heights);
        let second = compute_water_default(&heights);
        assert_eq!(first, second);
    }

    // -------------------------------------------------------------------------
    // WaterResult serde round-trip
    // -------------------------------------------------------------------------

    #[test]
    fn test_water_result_serde_roundtrip() {
        let result = compute_water_default(&profile(&[3, 3, 3]));
        let json = serde_json::to_string(&result).expect("serialize");
        let back: WaterResult = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, result);
        assert!(json.contains("\"boundaries_added\":true"));
    }
}
