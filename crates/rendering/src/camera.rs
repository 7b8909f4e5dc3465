use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::egui_input_guard::egui_wants_pointer;

const ZOOM_SPEED: f32 = 0.15;
const MIN_ZOOM: f32 = 0.05;
const MAX_ZOOM: f32 = 50.0;
/// Fraction of the window left empty around a freshly framed scene.
const FRAME_MARGIN: f32 = 1.15;

/// 2D view state: the world point at the window centre and the
/// world-units-per-pixel scale.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ViewCamera {
    pub focus: Vec2,
    pub zoom: f32,
}

impl Default for ViewCamera {
    fn default() -> Self {
        Self {
            focus: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl ViewCamera {
    /// View that shows the whole `size` rectangle centred on `center`
    /// inside a `window` of the given pixel size.
    pub fn framing(center: Vec2, size: Vec2, window: Vec2) -> Self {
        let zoom = if window.x > 0.0 && window.y > 0.0 {
            (size.x / window.x).max(size.y / window.y) * FRAME_MARGIN
        } else {
            1.0
        };
        Self {
            focus: center,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
        }
    }
}

#[derive(Resource, Default)]
pub struct CameraDrag {
    pub dragging: bool,
    pub last_pos: Vec2,
}

pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
    commands.init_resource::<ViewCamera>();
    commands.init_resource::<CameraDrag>();
}

/// System: apply ViewCamera state to the camera transform and projection.
pub fn apply_view_camera(
    view: Res<ViewCamera>,
    mut query: Query<(&mut Transform, &mut OrthographicProjection), With<Camera2d>>,
) {
    if !view.is_changed() {
        return;
    }
    let Ok((mut transform, mut projection)) = query.get_single_mut() else {
        return;
    };
    transform.translation.x = view.focus.x;
    transform.translation.y = view.focus.y;
    projection.scale = view.zoom;
}

/// Middle-mouse drag: pan. A drag cannot start over the panel.
pub fn camera_pan_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut contexts: EguiContexts,
    mut drag: ResMut<CameraDrag>,
    mut view: ResMut<ViewCamera>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    if buttons.just_pressed(MouseButton::Middle) && !egui_wants_pointer(&mut contexts) {
        if let Some(pos) = window.cursor_position() {
            drag.dragging = true;
            drag.last_pos = pos;
        }
    }

    if buttons.just_released(MouseButton::Middle) {
        drag.dragging = false;
    }

    if drag.dragging {
        if let Some(pos) = window.cursor_position() {
            let delta = pos - drag.last_pos;
            // Window y grows downwards, world y upwards
            let zoom = view.zoom;
            view.focus.x -= delta.x * zoom;
            view.focus.y += delta.y * zoom;
            drag.last_pos = pos;
        }
    }
}

/// Scroll wheel: zoom. Scrolling over the panel belongs to egui.
pub fn camera_zoom(
    mut scroll_evts: EventReader<MouseWheel>,
    mut contexts: EguiContexts,
    mut view: ResMut<ViewCamera>,
) {
    if egui_wants_pointer(&mut contexts) {
        scroll_evts.clear();
        return;
    }
    for evt in scroll_evts.read() {
        view.zoom = zoom_after_scroll(view.zoom, evt);
    }
}

/// Zoom level after one wheel event. Scrolling up zooms in.
pub fn zoom_after_scroll(zoom: f32, evt: &MouseWheel) -> f32 {
    let dy = match evt.unit {
        MouseScrollUnit::Line => evt.y,
        MouseScrollUnit::Pixel => evt.y / 100.0,
    };
    let factor = 1.0 - dy * ZOOM_SPEED;
    (zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framing_fits_wider_dimension() {
        let view = ViewCamera::framing(
            Vec2::new(250.0, -350.0),
            Vec2::new(500.0, 700.0),
            Vec2::new(1000.0, 700.0),
        );
        assert_eq!(view.focus, Vec2::new(250.0, -350.0));
        // Height is the limiting dimension: 700 / 700
        assert!((view.zoom - FRAME_MARGIN).abs() < 1e-6);
    }

    #[test]
    fn test_framing_zero_window_falls_back() {
        let view = ViewCamera::framing(Vec2::ZERO, Vec2::new(10.0, 10.0), Vec2::ZERO);
        assert!((view.zoom - 1.0).abs() < 1e-6);
    }

    fn wheel(unit: MouseScrollUnit, y: f32) -> MouseWheel {
        MouseWheel {
            unit,
            x: 0.0,
            y,
            window: Entity::PLACEHOLDER,
        }
    }

    #[test]
    fn test_scroll_up_zooms_in() {
        let zoom = zoom_after_scroll(1.0, &wheel(MouseScrollUnit::Line, 1.0));
        assert!((zoom - (1.0 - ZOOM_SPEED)).abs() < 1e-6);
        let pixel = zoom_after_scroll(1.0, &wheel(MouseScrollUnit::Pixel, 100.0));
        assert!((pixel - zoom).abs() < 1e-6);
    }

    #[test]
    fn test_scroll_zoom_is_clamped() {
        let zoom = zoom_after_scroll(MIN_ZOOM, &wheel(MouseScrollUnit::Line, 5.0));
        assert!((zoom - MIN_ZOOM).abs() < 1e-6);
    }

    #[test]
    fn test_framing_clamps_zoom() {
        let view = ViewCamera::framing(
            Vec2::ZERO,
            Vec2::new(1.0e9, 1.0),
            Vec2::new(100.0, 100.0),
        );
        assert!((view.zoom - MAX_ZOOM).abs() < 1e-6);
    }
}
