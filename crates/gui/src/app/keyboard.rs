//! Keyboard shortcut handling

use eframe::egui;

use crate::state::{AppState, ViewerAction};
use crate::ui::editor;

/// Handle keyboard shortcuts for the application
pub fn handle_keyboard(ctx: &egui::Context, state: &mut AppState) {
    // Don't handle shortcuts when a text field is focused
    if ctx.memory(|m| m.focused().is_some()) {
        return;
    }

    ctx.input(|i| {
        // Ctrl+E — export settings
        if i.modifiers.command && i.key_pressed(egui::Key::E) {
            editor::action_export(state);
        }
        // Ctrl+O — import settings
        if i.modifiers.command && i.key_pressed(egui::Key::O) {
            editor::action_import(state);
        }
        // Ctrl+R — reset settings, behind the same confirmation as the button
        if i.modifiers.command && i.key_pressed(egui::Key::R) {
            editor::action_reset(state);
        }
        // Tab — toggle the editor panel
        if i.key_pressed(egui::Key::Tab) {
            state.panels.editor = !state.panels.editor;
        }
        // Home — reset the camera
        if i.key_pressed(egui::Key::Home) {
            state.preview.push_action(ViewerAction::ResetCamera);
        }
    });
}
