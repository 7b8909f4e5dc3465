use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod keybinds;
pub mod profile_panel;
pub mod theme;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<profile_panel::ProfilePanelState>()
            .add_systems(Startup, theme::apply_basin_theme)
            .add_systems(
                Update,
                (
                    profile_panel::sync_panel_text,
                    profile_panel::profile_panel_ui,
                )
                    .chain()
                    .after(simulation::basin::recompute_water),
            )
            .add_systems(
                Update,
                keybinds::export_page_keybind.before(rendering::export::handle_export_page),
            );
    }
}
