//! Bevy resources and systems that hold the current profile and its result.
//!
//! `CurrentProfile` is the only retained state. Whoever owns the app (the
//! egui panel, a test, a preset button) changes it through the
//! `SubmitProfileText` and `SetProfile` events; `recompute_water` then
//! rebuilds `WaterState` from scratch.

use bevy::prelude::*;

use crate::config::BasinConfig;
use crate::height_profile::HeightProfile;
use crate::input::apply_profile_text;
use crate::presets::default_profile;
use crate::water::{compute_water, WaterResult};

// =============================================================================
// Resources
// =============================================================================

/// The profile currently on display, before any boundary towers.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct CurrentProfile(pub HeightProfile);

impl Default for CurrentProfile {
    fn default() -> Self {
        Self(default_profile())
    }
}

/// Latest calculation for `CurrentProfile`.
#[derive(Resource, Debug, Clone, Default)]
pub struct WaterState {
    /// The profile the result was computed from.
    pub input: HeightProfile,
    pub result: WaterResult,
}

// =============================================================================
// Events
// =============================================================================

/// Raw comma-separated text from the input field.
#[derive(Event, Debug, Clone)]
pub struct SubmitProfileText(pub String);

/// An already-built profile (preset or random).
#[derive(Event, Debug, Clone)]
pub struct SetProfile(pub HeightProfile);

// =============================================================================
// Systems
// =============================================================================

/// Apply queued submissions to `CurrentProfile`. Submissions that produce an
/// empty profile leave the current one in place.
pub fn apply_profile_submissions(
    mut text_events: EventReader<SubmitProfileText>,
    mut set_events: EventReader<SetProfile>,
    mut current: ResMut<CurrentProfile>,
) {
    for ev in text_events.read() {
        let mut next = current.0.clone();
        if apply_profile_text(&mut next, &ev.0) {
            info!("Profile updated from input: {}", next);
            current.0 = next;
        } else {
            warn!("Ignoring profile input '{}': no valid heights", ev.0);
        }
    }

    for ev in set_events.read() {
        if ev.0.is_empty() {
            warn!("Ignoring empty profile");
            continue;
        }
        info!("Profile set: {}", ev.0);
        current.0 = ev.0.clone();
    }
}

/// Recompute `WaterState` whenever the profile or config changes.
pub fn recompute_water(
    current: Res<CurrentProfile>,
    config: Res<BasinConfig>,
    mut state: ResMut<WaterState>,
) {
    if !current.is_changed() && !config.is_changed() {
        return;
    }

    let result = compute_water(&current.0, config.sentinel_height);
    if result.boundaries_added {
        info!(
            "Profile traps no water; added boundary towers of height {} -> {} units",
            config.sentinel_height, result.total_water
        );
    } else {
        info!("Profile traps {} units of water", result.total_water);
    }
    debug!("Display profile: {}", result.display_profile);

    state.input = current.0.clone();
    state.result = result;
}

// =============================================================================
// Plugin
// =============================================================================

pub struct BasinPlugin;

impl Plugin for BasinPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BasinConfig>()
            .init_resource::<CurrentProfile>()
            .init_resource::<WaterState>()
            .add_event::<SubmitProfileText>()
            .add_event::<SetProfile>()
            .add_systems(
                Update,
                (apply_profile_submissions, recompute_water).chain(),
            );
    }
}
