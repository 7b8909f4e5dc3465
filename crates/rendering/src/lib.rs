use bevy::prelude::*;

pub mod camera;
pub mod egui_input_guard;
pub mod export;
pub mod palette;
pub mod scene;
pub mod scene_render;
pub mod svg;

use export::ExportPage;
use palette::Palette;
use scene_render::DrawnScenes;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Palette>()
            .init_resource::<DrawnScenes>()
            .add_event::<ExportPage>()
            .add_systems(Startup, camera::setup_camera)
            .add_systems(
                Update,
                (
                    camera::camera_pan_drag,
                    camera::camera_zoom,
                    camera::apply_view_camera,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    scene_render::rebuild_scenes,
                    scene_render::spawn_scene_sprites,
                    scene_render::frame_scenes.before(camera::apply_view_camera),
                    scene_render::draw_scene_grid,
                )
                    .chain()
                    .after(simulation::basin::recompute_water),
            )
            .add_systems(
                Update,
                export::handle_export_page.after(simulation::basin::recompute_water),
            );
    }
}
