//! Stops the world camera from reacting to the mouse while it is over the
//! profile panel.

use bevy_egui::{egui, EguiContexts};

/// `true` when the cursor is over an egui area or egui is handling a drag.
pub fn pointer_captured(ctx: &egui::Context) -> bool {
    ctx.wants_pointer_input() || ctx.is_pointer_over_area()
}

/// [`pointer_captured`] for the primary egui context.
pub fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    pointer_captured(contexts.ctx_mut())
}
