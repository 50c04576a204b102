//! Per-button style editor
//!
//! Edits one entry of the button map at a time; the selection lives in
//! the store so export/import round-trip it.

use egui::Ui;

use shared::ShadowLevel;

use crate::state::store::ButtonUpdate;
use crate::state::AppState;
use crate::style;
use crate::ui::editor;

/// Ids and labels of the buttons the preview renders
const BUTTON_IDS: [(&str, &str); 6] = [
    ("addToCart", "Add to Cart"),
    ("fixedArms", "Fixed Arms"),
    ("movableArms", "Movable Arms"),
    ("viewInRoom", "View in Room"),
    ("galleryThumbnail", "Gallery Thumbnail"),
    ("controlButton", "Control Buttons"),
];

const SHADOW_LEVELS: [(ShadowLevel, &str); 5] = [
    (ShadowLevel::None, "None"),
    (ShadowLevel::Sm, "Small"),
    (ShadowLevel::Md, "Medium"),
    (ShadowLevel::Lg, "Large"),
    (ShadowLevel::Xl, "Extra large"),
];

pub fn show(ui: &mut Ui, state: &mut AppState) {
    let selected_id = state.store.button().selected_button.clone();

    ui.horizontal(|ui| {
        ui.label("Button:");
        egui::ComboBox::from_id_salt("button_role")
            .selected_text(button_label(&selected_id))
            .show_ui(ui, |ui| {
                for (id, label) in BUTTON_IDS {
                    if ui.selectable_label(selected_id == id, label).clicked() {
                        state.store.select_button(id);
                    }
                }
            });
    });

    let current = state.store.selected_button_style().clone();

    if let Some(hex) = editor::color_row(
        ui,
        state,
        &format!("button_bg:{selected_id}"),
        "Background:",
        &current.bg_color,
    ) {
        state
            .store
            .set_button(&selected_id, ButtonUpdate::BgColor(hex));
    }
    if let Some(hex) = editor::color_row(
        ui,
        state,
        &format!("button_text:{selected_id}"),
        "Text:",
        &current.text_color,
    ) {
        state
            .store
            .set_button(&selected_id, ButtonUpdate::TextColor(hex));
    }

    let mut radius = current.radius;
    if ui
        .add(egui::Slider::new(&mut radius, 0..=50).text("Radius").suffix(" px"))
        .changed()
    {
        state
            .store
            .set_button(&selected_id, ButtonUpdate::Radius(radius));
    }

    ui.horizontal(|ui| {
        ui.label("Shadow:");
        egui::ComboBox::from_id_salt("button_shadow")
            .selected_text(shadow_label(current.shadow))
            .show_ui(ui, |ui| {
                for (level, label) in SHADOW_LEVELS {
                    if ui.selectable_label(current.shadow == level, label).clicked() {
                        state
                            .store
                            .set_button(&selected_id, ButtonUpdate::Shadow(level));
                    }
                }
            });
    });

    ui.label("Alignment:");
    if let Some(alignment) = editor::alignment_row(ui, "button_align", current.alignment) {
        state
            .store
            .set_button(&selected_id, ButtonUpdate::Alignment(alignment));
    }

    ui.add_space(6.0);
    preview_chip(ui, state, &selected_id);
}

/// Live sample drawn with the same resolver the preview uses
fn preview_chip(ui: &mut Ui, state: &AppState, id: &str) {
    let resolved =
        style::resolved_button(state.store.button_style(id), state.store.typography());

    let mut text = egui::RichText::new(button_label(id))
        .font(resolved.font.clone())
        .color(resolved.text_color);
    if resolved.strong {
        text = text.strong();
    }

    ui.with_layout(style::row_layout(resolved_alignment(state, id)), |ui| {
        egui::Frame::new()
            .shadow(resolved.shadow)
            .corner_radius(resolved.corner)
            .show(ui, |ui| {
                let _ = ui.add(
                    egui::Button::new(text)
                        .fill(resolved.fill)
                        .corner_radius(resolved.corner)
                        .min_size(egui::vec2(120.0, 32.0)),
                );
            });
    });
}

fn resolved_alignment(state: &AppState, id: &str) -> shared::Alignment {
    state.store.button_style(id).alignment
}

fn button_label(id: &str) -> &'static str {
    BUTTON_IDS
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, label)| *label)
        .unwrap_or("Custom")
}

fn shadow_label(level: ShadowLevel) -> &'static str {
    SHADOW_LEVELS
        .iter()
        .find(|(key, _)| *key == level)
        .map(|(_, label)| *label)
        .unwrap_or("None")
}
