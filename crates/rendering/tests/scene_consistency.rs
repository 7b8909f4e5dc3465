//! The projector and the calculator must agree on every column of every
//! display profile.
//!
//! Run: cargo test -p rendering --test scene_consistency

use rendering::palette::Paint;
use rendering::scene::{column_water_levels, project, SceneDescription, Shape};
use simulation::config::UNIT_SIZE;
use simulation::presets::{default_profile, random_profile, symmetric_peak_profile};
use simulation::water::trapped_per_column;
use simulation::{compute_water_default, HeightProfile};

fn water_area(scene: &SceneDescription) -> u64 {
    scene
        .shapes_with(Paint::Water)
        .map(|s| match *s {
            Shape::Rect { height, .. } => height,
            Shape::Line { .. } => 0,
        })
        .sum()
}

// ---------------------------------------------------------------------------
// 1. Per-column agreement
// ---------------------------------------------------------------------------

#[test]
fn test_column_levels_agree_on_random_profiles() {
    for seed in 0..500u64 {
        let len = (seed % 30) as usize;
        let heights = random_profile(seed, len, 12);
        let result = compute_water_default(&heights);
        assert_eq!(
            column_water_levels(&result.display_profile),
            trapped_per_column(&result.display_profile),
            "seed {seed}: {}",
            result.display_profile
        );
    }
}

// ---------------------------------------------------------------------------
// 2. Drawn water adds up to the reported total
// ---------------------------------------------------------------------------

#[test]
fn test_water_rect_heights_sum_to_total() {
    let unit = u64::from(UNIT_SIZE);
    let mut profiles: Vec<HeightProfile> = (0..200u64)
        .map(|seed| random_profile(seed, 1 + (seed % 20) as usize, 9))
        .collect();
    profiles.push(default_profile());
    profiles.push(symmetric_peak_profile());

    for heights in profiles {
        let result = compute_water_default(&heights);
        let scene = project(&result.display_profile, result.boundaries_added);
        assert_eq!(water_area(&scene), result.total_water * unit, "{heights}");
    }
}

// ---------------------------------------------------------------------------
// 3. Reference scene
// ---------------------------------------------------------------------------

#[test]
fn test_reference_scene_matches_per_column_water() {
    let heights = default_profile();
    let result = compute_water_default(&heights);
    let scene = project(&result.display_profile, result.boundaries_added);
    let unit = u64::from(UNIT_SIZE);

    assert_eq!(scene.width, 10 * unit);
    assert_eq!(scene.height, 7 * unit);

    let per_column = trapped_per_column(&heights);
    let expected: Vec<(u64, u64)> = per_column
        .iter()
        .enumerate()
        .filter(|&(_, &w)| w > 0)
        .map(|(i, &w)| (i as u64 * unit, u64::from(w) * unit))
        .collect();
    let drawn: Vec<(u64, u64)> = scene
        .shapes_with(Paint::Water)
        .filter_map(|s| match *s {
            Shape::Rect { x, height, .. } => Some((x, height)),
            Shape::Line { .. } => None,
        })
        .collect();
    assert_eq!(drawn, expected);
}
