//! Application style configuration

use eframe::egui;

/// Configure initial application styles
pub fn configure_styles(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    // Light theme, matching the product-page look
    style.visuals = egui::Visuals::light();

    // Rounding
    style.visuals.window_corner_radius = egui::CornerRadius::same(6);
    style.visuals.menu_corner_radius = egui::CornerRadius::same(4);
    style.visuals.widgets.noninteractive.corner_radius = egui::CornerRadius::same(3);
    style.visuals.widgets.inactive.corner_radius = egui::CornerRadius::same(3);
    style.visuals.widgets.hovered.corner_radius = egui::CornerRadius::same(3);
    style.visuals.widgets.active.corner_radius = egui::CornerRadius::same(3);

    // Spacing
    style.spacing.item_spacing = egui::vec2(6.0, 4.0);
    style.spacing.button_padding = egui::vec2(6.0, 3.0);
    style.spacing.menu_margin = egui::Margin::same(4);
    style.spacing.slider_width = 140.0;

    // Soft panel backgrounds so the editor reads as chrome, not content
    style.visuals.panel_fill = egui::Color32::from_rgb(250, 250, 251);
    style.visuals.window_fill = egui::Color32::from_rgb(255, 255, 255);

    // Selection highlight in the product accent
    style.visuals.selection.bg_fill = egui::Color32::from_rgb(198, 97, 77);
    style.visuals.selection.stroke =
        egui::Stroke::new(1.0, egui::Color32::from_rgb(255, 255, 255));

    ctx.set_style(style);
}
