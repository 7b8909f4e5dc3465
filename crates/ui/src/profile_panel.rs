//! Profile panel: the input field, preset buttons and the result text.
//!
//! The panel never touches `CurrentProfile` directly. It sends
//! `SubmitProfileText` / `SetProfile` and shows whatever `WaterState` holds.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use rendering::export::ExportPage;
use simulation::basin::{SetProfile, SubmitProfileText, WaterState};
use simulation::presets::{random_profile, symmetric_peak_profile, SYMMETRIC_PEAK_PROFILE};
use simulation::summary::{diagnostics_lines, summary_message};
use simulation::HeightProfile;

/// Columns in a randomized profile.
const RANDOM_LEN: usize = 12;
/// Tallest column in a randomized profile.
const RANDOM_MAX_HEIGHT: u32 = 8;

#[derive(Resource, Default)]
pub struct ProfilePanelState {
    /// Contents of the input field.
    pub text: String,
    /// Seed for the next "Randomize" press.
    pub next_seed: u64,
}

/// `[0, 4, 0]` as `0, 4, 0`, the format the input field accepts.
pub fn profile_text(profile: &HeightProfile) -> String {
    profile
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn test_case_label() -> String {
    format!("Test [{}] Case", profile_text(&symmetric_peak_profile()).replace(' ', ""))
}

/// Keep the input field in step with the profile actually on display.
pub fn sync_panel_text(state: Res<WaterState>, mut panel: ResMut<ProfilePanelState>) {
    if !state.is_changed() {
        return;
    }
    panel.text = profile_text(&state.input);
}

pub fn profile_panel_ui(
    mut contexts: EguiContexts,
    mut panel: ResMut<ProfilePanelState>,
    state: Res<WaterState>,
    mut submit: EventWriter<SubmitProfileText>,
    mut set_profile: EventWriter<SetProfile>,
    mut export: EventWriter<ExportPage>,
) {
    egui::Window::new("Rain Basin")
        .default_width(360.0)
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(8.0, 8.0))
        .resizable(false)
        .show(contexts.ctx_mut(), |ui| {
            ui.label("Column heights (comma separated):");
            let text_edit = ui.text_edit_singleline(&mut panel.text);
            let enter_pressed =
                text_edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            ui.horizontal(|ui| {
                if ui.button("Update").clicked() || enter_pressed {
                    submit.send(SubmitProfileText(panel.text.clone()));
                }
                if ui.button(test_case_label()).clicked() {
                    set_profile.send(SetProfile(HeightProfile::from(SYMMETRIC_PEAK_PROFILE)));
                }
            });
            ui.horizontal(|ui| {
                if ui.button("Randomize").clicked() {
                    let seed = panel.next_seed;
                    panel.next_seed += 1;
                    set_profile.send(SetProfile(random_profile(
                        seed,
                        RANDOM_LEN,
                        RANDOM_MAX_HEIGHT,
                    )));
                }
                if ui.button("Export (E)").clicked() {
                    export.send(ExportPage);
                }
            });

            ui.separator();
            ui.strong(summary_message(&state.result));

            ui.add_space(4.0);
            let [input_line, display_line] = diagnostics_lines(&state.input, &state.result);
            ui.small(input_line);
            ui.small(display_line);
        });
}
