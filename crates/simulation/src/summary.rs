//! Human-readable result text shown next to the scene.

use crate::height_profile::HeightProfile;
use crate::water::WaterResult;

/// One-line total, mentioning the boundary towers when they were added.
pub fn summary_message(result: &WaterResult) -> String {
    if result.boundaries_added {
        format!(
            "Total water units with boundary towers: {} (Boundary towers added as original would trap zero water)",
            result.total_water
        )
    } else {
        format!("Total water units: {}", result.total_water)
    }
}

/// Lengths and values of the input and display profiles.
pub fn diagnostics_lines(input: &HeightProfile, result: &WaterResult) -> [String; 2] {
    [
        format!("Input array length: {}, Values: {}", input.len(), input),
        format!(
            "Display array length: {}, Values: {}",
            result.display_profile.len(),
            result.display_profile
        ),
    ]
}
