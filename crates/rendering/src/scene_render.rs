//! Draws the projected scenes in the Bevy window.
//!
//! Rectangles become sprites, respawned whenever the scenes are rebuilt.
//! Grid lines are immediate-mode gizmos drawn every frame. The full scene
//! sits at the world origin and the water-only scene directly below it,
//! both in scene coordinates with y flipped to point up.

use bevy::prelude::*;
use bevy::sprite::Anchor;
use bevy::window::PrimaryWindow;

use simulation::basin::WaterState;
use simulation::config::BasinConfig;

use crate::camera::ViewCamera;
use crate::palette::{Paint, Palette};
use crate::scene::{SceneDescription, SceneLayout, Shape};

/// Vertical space between the two scenes, in drawing units.
pub const SCENE_SPACING: u64 = 50;

/// Marker for sprites spawned from scene rectangles.
#[derive(Component)]
pub struct SceneShape;

/// The scenes currently on screen.
#[derive(Resource, Debug, Clone, Default)]
pub struct DrawnScenes {
    pub main: SceneDescription,
    pub water_only: SceneDescription,
}

impl DrawnScenes {
    /// Scene-space y at which the water-only scene starts.
    pub fn water_only_offset(&self) -> u64 {
        self.main.height + SCENE_SPACING
    }

    /// Width and height covered by both scenes.
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(
            self.main.width.max(self.water_only.width) as f32,
            (self.water_only_offset() + self.water_only.height) as f32,
        )
    }
}

/// Scene coordinates (y down) to world coordinates (y up).
pub fn scene_to_world(x: u64, y: u64, offset_y: u64) -> Vec2 {
    Vec2::new(x as f32, -((y + offset_y) as f32))
}

/// Rebuild both scenes when the water result or the config changes.
pub fn rebuild_scenes(
    state: Res<WaterState>,
    config: Res<BasinConfig>,
    mut drawn: ResMut<DrawnScenes>,
) {
    if !state.is_changed() && !config.is_changed() {
        return;
    }
    let layout = SceneLayout::from(&*config);
    let heights = &state.result.display_profile;
    drawn.main = layout.project(heights, state.result.boundaries_added);
    drawn.water_only = layout.project_water_only(heights);
    debug!(
        "Rebuilt scenes: {}x{} with {} shapes",
        drawn.main.width,
        drawn.main.height,
        drawn.main.shapes.len()
    );
}

/// Respawn sprites for every rectangle of both scenes.
pub fn spawn_scene_sprites(
    mut commands: Commands,
    drawn: Res<DrawnScenes>,
    palette: Res<Palette>,
    existing: Query<Entity, With<SceneShape>>,
) {
    if !drawn.is_changed() {
        return;
    }
    for entity in &existing {
        commands.entity(entity).despawn();
    }

    for (scene, offset_y) in [
        (&drawn.main, 0),
        (&drawn.water_only, drawn.water_only_offset()),
    ] {
        for shape in &scene.shapes {
            let Shape::Rect {
                x,
                y,
                width,
                height,
                fill,
            } = *shape
            else {
                continue;
            };
            if width == 0 || height == 0 {
                continue;
            }
            // Water above columns so the translucency blends over them
            let z = if fill == Paint::Water { 1.0 } else { 0.0 };
            commands.spawn((
                SceneShape,
                Sprite {
                    color: palette.color(fill),
                    custom_size: Some(Vec2::new(width as f32, height as f32)),
                    anchor: Anchor::TopLeft,
                    ..default()
                },
                Transform::from_translation(scene_to_world(x, y, offset_y).extend(z)),
            ));
        }
    }
}

/// Draw grid lines for both scenes.
pub fn draw_scene_grid(mut gizmos: Gizmos, drawn: Res<DrawnScenes>, palette: Res<Palette>) {
    for (scene, offset_y) in [
        (&drawn.main, 0),
        (&drawn.water_only, drawn.water_only_offset()),
    ] {
        for shape in &scene.shapes {
            if let Shape::Line {
                x1,
                y1,
                x2,
                y2,
                stroke,
            } = *shape
            {
                gizmos.line_2d(
                    scene_to_world(x1, y1, offset_y),
                    scene_to_world(x2, y2, offset_y),
                    palette.color(stroke),
                );
            }
        }
    }
}

/// Re-centre the camera on the scenes after a rebuild.
pub fn frame_scenes(
    drawn: Res<DrawnScenes>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut view: ResMut<ViewCamera>,
) {
    if !drawn.is_changed() {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    let bounds = drawn.bounds();
    let center = Vec2::new(bounds.x / 2.0, -bounds.y / 2.0);
    *view = ViewCamera::framing(center, bounds, Vec2::new(window.width(), window.height()));
}
