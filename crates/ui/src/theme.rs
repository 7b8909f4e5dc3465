use bevy_egui::{egui, EguiContexts};

/// Light theme with blue accents to sit next to the water colour.
pub fn apply_basin_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();

    let accent = egui::Color32::from_rgb(0x46, 0x82, 0xB4);
    let hover = egui::Color32::from_rgb(0xB0, 0xD8, 0xEE);

    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.bg_fill = accent;
    style.visuals.widgets.active.weak_bg_fill = accent;
    style.visuals.selection.bg_fill = accent;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, accent);
    style.visuals.window_corner_radius = egui::CornerRadius::same(6);

    ctx.set_style(style);
}
