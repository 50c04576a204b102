//! Settings editor panel
//!
//! One accordion section per settings slice. Every control reads through
//! the store getters and writes through the discriminated setters, so the
//! preview and the 3D viewer pick changes up on the same frame.

use egui::Ui;

use shared::{color, Alignment, FontRole, LayoutVariant, MaterialSlot};

use crate::state::editor::{font_family_label, EditorSection, FONT_FAMILIES};
use crate::state::store::{GalleryUpdate, LayoutUpdate, ThemeUpdate, TypographyUpdate};
use crate::state::{AppState, Notice, NoticeLevel};
use crate::style;
use crate::ui::button_controls;

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.heading("UI Customizer");
    ui.separator();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for section in EditorSection::all() {
                show_section(ui, state, section);
            }

            ui.add_space(8.0);
            ui.separator();
            settings_block(ui, state);
        });
}

/// One controlled accordion section; opening it closes the others
fn show_section(ui: &mut Ui, state: &mut AppState, section: EditorSection) {
    let open = state.editor.is_open(section);
    let response = egui::CollapsingHeader::new(section.title())
        .id_salt(section.title())
        .open(Some(open))
        .show(ui, |ui| match section {
            EditorSection::Layout => layout_variant_section(ui, state),
            EditorSection::Typography => typography_section(ui, state),
            EditorSection::Buttons => button_controls::show(ui, state),
            EditorSection::Gallery => gallery_section(ui, state),
            EditorSection::Theme => theme_section(ui, state),
            EditorSection::GeneralLayout => general_layout_section(ui, state),
            EditorSection::Border => border_section(ui, state),
            EditorSection::Material => material_section(ui, state),
        });
    if response.header_response.clicked() {
        state.editor.toggle_section(section);
    }
}

// ── Sections ─────────────────────────────────────────────────

fn layout_variant_section(ui: &mut Ui, state: &mut AppState) {
    let current = state.store.current_layout();
    ui.horizontal(|ui| {
        if ui
            .selectable_label(current == LayoutVariant::Layout1, "Layout 1")
            .clicked()
        {
            state.store.switch_layout(LayoutVariant::Layout1);
        }
        if ui
            .selectable_label(current == LayoutVariant::Layout2, "Layout 2")
            .clicked()
        {
            state.store.switch_layout(LayoutVariant::Layout2);
        }
    });
    ui.weak("Layout 1 shows finish categories as tabs, Layout 2 stacks them.");
}

fn typography_section(ui: &mut Ui, state: &mut AppState) {
    let typography = state.store.typography().clone();

    egui::Grid::new("typography_grid")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            ui.label("Font family:");
            egui::ComboBox::from_id_salt("font_family")
                .selected_text(font_family_label(&typography.font_family).to_string())
                .show_ui(ui, |ui| {
                    for (label, value) in FONT_FAMILIES {
                        if ui
                            .selectable_label(typography.font_family == value, label)
                            .clicked()
                        {
                            state
                                .store
                                .set_typography(TypographyUpdate::FontFamily(value.to_string()));
                        }
                    }
                });
            ui.end_row();

            ui.label("Weight:");
            egui::ComboBox::from_id_salt("font_weight")
                .selected_text(typography.font_weight.to_string())
                .show_ui(ui, |ui| {
                    for weight in [300u16, 400, 500, 600, 700] {
                        if ui
                            .selectable_label(typography.font_weight == weight, weight.to_string())
                            .clicked()
                        {
                            state
                                .store
                                .set_typography(TypographyUpdate::FontWeight(weight));
                        }
                    }
                });
            ui.end_row();

            ui.label("Size of:");
            egui::ComboBox::from_id_salt("font_role")
                .selected_text(typography.selected_font_size_type.display_name())
                .show_ui(ui, |ui| {
                    for &role in FontRole::all() {
                        if ui
                            .selectable_label(
                                typography.selected_font_size_type == role,
                                role.display_name(),
                            )
                            .clicked()
                        {
                            state
                                .store
                                .set_typography(TypographyUpdate::SelectedRole(role));
                        }
                    }
                });
            ui.end_row();

            let role = typography.selected_font_size_type;
            let mut size = typography.font_sizes.get(role);
            ui.label(format!("{} size:", role.display_name()));
            if ui
                .add(egui::Slider::new(&mut size, 10.0..=60.0).suffix(" px"))
                .changed()
            {
                let mut sizes = typography.font_sizes.clone();
                sizes.set(role, size);
                state
                    .store
                    .set_typography(TypographyUpdate::FontSizes(sizes));
            }
            ui.end_row();
        });
}

fn gallery_section(ui: &mut Ui, state: &mut AppState) {
    let gallery = state.store.gallery().clone();

    ui.label("Alignment:");
    if let Some(alignment) = alignment_row(ui, "gallery_align", gallery.alignment) {
        state.store.set_gallery(GalleryUpdate::Alignment(alignment));
    }

    let mut spacing = gallery.spacing;
    if ui
        .add(egui::Slider::new(&mut spacing, 0..=32).text("Spacing").suffix(" px"))
        .changed()
    {
        state.store.set_gallery(GalleryUpdate::Spacing(spacing));
    }

    let mut radius = gallery.border_radius;
    if ui
        .add(egui::Slider::new(&mut radius, 0..=24).text("Image radius").suffix(" px"))
        .changed()
    {
        state.store.set_gallery(GalleryUpdate::BorderRadius(radius));
    }
}

fn theme_section(ui: &mut Ui, state: &mut AppState) {
    let theme = state.store.theme().clone();

    if let Some(hex) = color_row(ui, state, "theme_primary", "Primary:", &theme.primary_color) {
        state.store.set_theme(ThemeUpdate::PrimaryColor(hex));
    }
    if let Some(hex) = color_row(
        ui,
        state,
        "theme_secondary",
        "Secondary:",
        &theme.secondary_color,
    ) {
        state.store.set_theme(ThemeUpdate::SecondaryColor(hex));
    }
}

fn general_layout_section(ui: &mut Ui, state: &mut AppState) {
    let layout = state.store.layout().clone();

    if let Some(hex) = color_row(ui, state, "layout_bg", "Background:", &layout.bg_color) {
        state.store.set_layout(LayoutUpdate::BgColor(hex));
    }

    let mut card_radius = layout.card_radius;
    if ui
        .add(egui::Slider::new(&mut card_radius, 0..=32).text("Card radius").suffix(" px"))
        .changed()
    {
        state.store.set_layout(LayoutUpdate::CardRadius(card_radius));
    }

    let mut padding = layout.padding;
    if ui
        .add(egui::Slider::new(&mut padding, 0..=64).text("Padding").suffix(" px"))
        .changed()
    {
        state.store.set_layout(LayoutUpdate::Padding(padding));
    }
}

fn border_section(ui: &mut Ui, state: &mut AppState) {
    let layout = state.store.layout().clone();

    let mut enabled = layout.border_enabled;
    if ui.checkbox(&mut enabled, "Show card border").changed() {
        state.store.set_layout(LayoutUpdate::BorderEnabled(enabled));
    }

    // Width and color only make sense while the border is on
    if !enabled {
        return;
    }

    if let Some(hex) = color_row(ui, state, "border_color", "Color:", &layout.border_color) {
        state.store.set_layout(LayoutUpdate::BorderColor(hex));
    }

    let mut width = layout.border_width;
    if ui
        .add(egui::Slider::new(&mut width, 1..=8).text("Width").suffix(" px"))
        .changed()
    {
        state.store.set_layout(LayoutUpdate::BorderWidth(width));
    }
}

fn material_section(ui: &mut Ui, state: &mut AppState) {
    let selected = state.store.selected_material();

    ui.horizontal(|ui| {
        ui.label("Material:");
        egui::ComboBox::from_id_salt("material_slot")
            .selected_text(selected.display_name())
            .show_ui(ui, |ui| {
                for &slot in MaterialSlot::all() {
                    if ui
                        .selectable_label(selected == slot, slot.display_name())
                        .clicked()
                    {
                        state.store.select_material(slot);
                    }
                }
            });
    });

    let stored = state.store.materials().get(selected).color.clone();
    if let Some(hex) = color_row(ui, state, "material_tint", "Tint:", &stored) {
        state.store.set_material_color(selected, hex);
    }
    ui.weak("Applied to the model in the viewer.");
}

// ── Shared widgets ───────────────────────────────────────────

/// Left / Center / Right selector; returns the clicked value
pub(crate) fn alignment_row(ui: &mut Ui, id: &str, current: Alignment) -> Option<Alignment> {
    let mut picked = None;
    ui.push_id(id, |ui| {
        ui.horizontal(|ui| {
            for (label, value) in [
                ("Left", Alignment::Left),
                ("Center", Alignment::Center),
                ("Right", Alignment::Right),
            ] {
                if ui.selectable_label(current == value, label).clicked() {
                    picked = Some(value);
                }
            }
        });
    });
    picked
}

/// Color picker plus hex text field. Returns a lowercase hex string when
/// either control produced a valid new color. The text field keeps its
/// in-progress buffer until blur so half-typed values never snap back.
pub(crate) fn color_row(
    ui: &mut Ui,
    state: &mut AppState,
    key: &str,
    label: &str,
    stored: &str,
) -> Option<String> {
    let mut committed = None;
    ui.horizontal(|ui| {
        ui.label(label);

        let mut picked = style::color32(stored);
        if ui.color_edit_button_srgba(&mut picked).changed() {
            state.editor.clear_hex_text(key);
            committed = Some(color::format_hex([picked.r(), picked.g(), picked.b()]));
        }

        let mut text = state.editor.hex_text(key, stored);
        let response = ui.add(
            egui::TextEdit::singleline(&mut text)
                .desired_width(72.0)
                .font(egui::TextStyle::Monospace),
        );
        if response.changed() {
            if let Some(rgb) = color::parse_hex(&text) {
                committed = Some(color::format_hex(rgb));
            }
            state.editor.set_hex_text(key, text);
        }
        if response.lost_focus() {
            state.editor.clear_hex_text(key);
        }
    });
    committed
}

// ── Settings management ──────────────────────────────────────

fn settings_block(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal_wrapped(|ui| {
        if ui.button("Export Settings").clicked() {
            action_export(state);
        }
        if ui.button("Import Settings").clicked() {
            action_import(state);
        }
        if ui.button("Reset to Default").clicked() {
            action_reset(state);
        }
    });

    if let Some(notice) = state.notice.clone() {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.colored_label(notice_color(&notice), &notice.text);
            if ui.small_button("✕").clicked() {
                state.notice = None;
            }
        });
    }
}

pub(crate) fn notice_color(notice: &Notice) -> egui::Color32 {
    match notice.level {
        NoticeLevel::Info => egui::Color32::from_rgb(60, 130, 80),
        NoticeLevel::Error => egui::Color32::from_rgb(190, 60, 60),
    }
}

/// Write the current snapshot to a JSON file picked by the user
pub fn action_export(state: &mut AppState) {
    let Some(path) = rfd::FileDialog::new()
        .set_title("Export settings")
        .add_filter("JSON", &["json"])
        .set_file_name("ui-settings.json")
        .save_file()
    else {
        return;
    };

    let json = match serde_json::to_string_pretty(&state.store.export()) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!("Failed to serialize settings: {e}");
            state.notice = Some(Notice::error("Error exporting settings."));
            return;
        }
    };

    match std::fs::write(&path, json) {
        Ok(()) => {
            tracing::info!("Exported settings to {}", path.display());
            state.notice = Some(Notice::info("Settings exported."));
        }
        Err(e) => {
            tracing::error!("Failed to write settings to {}: {e}", path.display());
            state.notice = Some(Notice::error(format!("Could not write {}", path.display())));
        }
    }
}

/// Read a JSON settings file picked by the user into the store.
/// A rejected document leaves the current settings untouched.
pub fn action_import(state: &mut AppState) {
    let Some(path) = rfd::FileDialog::new()
        .set_title("Import settings")
        .add_filter("JSON", &["json"])
        .pick_file()
    else {
        return;
    };

    match std::fs::read_to_string(&path) {
        Ok(json) => match state.store.import_json(&json) {
            Ok(()) => {
                tracing::info!("Imported settings from {}", path.display());
                state.notice = Some(Notice::info("Settings imported successfully!"));
            }
            Err(e) => {
                tracing::error!("Failed to import settings from {}: {e}", path.display());
                state.notice = Some(Notice::error(
                    "Error importing settings. Please check the file format.",
                ));
            }
        },
        Err(e) => {
            tracing::error!("Failed to read settings file {}: {e}", path.display());
            state.notice = Some(Notice::error(
                "Error importing settings. Please check the file format.",
            ));
        }
    }
}

/// Reset every slice to defaults, after a confirmation dialog
pub fn action_reset(state: &mut AppState) {
    let confirmed = rfd::MessageDialog::new()
        .set_title("Reset settings")
        .set_description(
            "Are you sure you want to reset all settings to default? This action cannot be undone.",
        )
        .set_buttons(rfd::MessageButtons::YesNo)
        .show()
        == rfd::MessageDialogResult::Yes;

    if confirmed {
        state.store.reset();
        state.notice = Some(Notice::info("All settings have been reset to default!"));
    }
}
