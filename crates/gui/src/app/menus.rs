//! Application menu bar

use eframe::egui;

use crate::state::{AppState, ViewerAction};
use crate::ui::editor;
use crate::viewport::ViewportPanel;

/// Show the file menu
pub fn file_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button("File", |ui| {
        if ui.button("Export Settings…").clicked() {
            ui.close_menu();
            editor::action_export(state);
        }
        if ui.button("Import Settings…").clicked() {
            ui.close_menu();
            editor::action_import(state);
        }
        ui.separator();
        if ui.button("Reset to Default…").clicked() {
            ui.close_menu();
            editor::action_reset(state);
        }
        ui.separator();
        if ui.button("Quit").clicked() {
            std::process::exit(0);
        }
    });
}

/// Show the view menu
pub fn view_menu(ui: &mut egui::Ui, state: &mut AppState, viewport: &mut ViewportPanel) {
    ui.menu_button("View", |ui| {
        ui.checkbox(&mut state.panels.editor, "Editor Panel");
        ui.checkbox(&mut state.panels.gallery, "Gallery Strip");
        ui.separator();
        if ui.button("Reset Camera").clicked() {
            state.preview.push_action(ViewerAction::ResetCamera);
            ui.close_menu();
        }
        if ui.button("Fit to View").clicked() {
            state.preview.push_action(ViewerAction::Frame);
            ui.close_menu();
        }
        if ui.button("Fullscreen").clicked() {
            state.preview.push_action(ViewerAction::ToggleFullscreen);
            ui.close_menu();
        }
        ui.separator();
        if ui.button("Reload Model").clicked() {
            viewport.reload();
            ui.close_menu();
        }
    });
}
