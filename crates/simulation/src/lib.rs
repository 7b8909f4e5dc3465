use bevy::prelude::*;

pub mod basin;
pub mod config;
pub mod height_profile;
pub mod input;
pub mod presets;
pub mod summary;
pub mod water;

pub use height_profile::{HeightProfile, ProfileError};
pub use water::{compute_water, compute_water_default, WaterResult};

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(basin::BasinPlugin);
    }
}
