use egui::Ui;

use crate::state::AppState;
use crate::ui::editor;
use crate::viewport::ViewportPanel;

pub fn show(ui: &mut Ui, state: &AppState, viewport: &ViewportPanel) {
    ui.horizontal(|ui| {
        match &state.notice {
            Some(notice) => {
                ui.colored_label(editor::notice_color(notice), &notice.text);
            }
            None => {
                ui.weak("Ready");
            }
        }

        ui.separator();

        if viewport.is_loading() {
            ui.colored_label(egui::Color32::from_rgb(255, 200, 100), "Loading model…");
        } else if let Some(error) = viewport.load_error() {
            ui.colored_label(egui::Color32::from_rgb(220, 80, 80), error);
        } else {
            ui.weak(format!(
                "{} meshes · {} triangles",
                viewport.mesh_count(),
                viewport.triangle_count()
            ));
        }

        ui.separator();
        ui.weak(viewport.source().describe());

        // Right-aligned version
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak("Vitrine v0.1");
        });
    });
}
