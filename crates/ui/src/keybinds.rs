//! Keyboard shortcuts. They are skipped while egui has keyboard focus, so
//! typing into the profile field never triggers one.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use rendering::export::ExportPage;

/// Writes the current page to the configured export path.
pub const EXPORT_KEY: KeyCode = KeyCode::KeyE;

/// Whether the export shortcut fired this frame.
pub fn export_shortcut_pressed(keys: &ButtonInput<KeyCode>, egui_has_keyboard: bool) -> bool {
    !egui_has_keyboard && keys.just_pressed(EXPORT_KEY)
}

pub fn export_page_keybind(
    keys: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut events: EventWriter<ExportPage>,
) {
    let egui_has_keyboard = contexts.ctx_mut().wants_keyboard_input();
    if export_shortcut_pressed(&keys, egui_has_keyboard) {
        events.send(ExportPage);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pressed(key: KeyCode) -> ButtonInput<KeyCode> {
        let mut keys = ButtonInput::default();
        keys.press(key);
        keys
    }

    #[test]
    fn test_export_key_fires_without_focus() {
        assert!(export_shortcut_pressed(&pressed(KeyCode::KeyE), false));
    }

    #[test]
    fn test_typing_e_in_text_field_does_not_export() {
        assert!(!export_shortcut_pressed(&pressed(KeyCode::KeyE), true));
    }

    #[test]
    fn test_other_keys_do_not_export() {
        assert!(!export_shortcut_pressed(&pressed(KeyCode::KeyR), false));
        assert!(!export_shortcut_pressed(&ButtonInput::default(), false));
    }

    #[test]
    fn test_held_key_fires_once() {
        let mut keys = pressed(KeyCode::KeyE);
        keys.clear();
        assert!(keys.pressed(KeyCode::KeyE));
        assert!(!export_shortcut_pressed(&keys, false));
    }
}
