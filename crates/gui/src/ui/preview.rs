//! Shopper-facing preview drawn over the 3D viewer.
//!
//! Four overlays float on the viewer rect: the gallery strip, a view in
//! room button, the viewer control column and the product card with its
//! accordions. Every color, font and corner comes through
//! [`ResolvedStyles`], so a settings edit restyles the whole scene on
//! the next frame.

use egui::{
    pos2, vec2, Align2, Color32, CornerRadius, FontId, Id, Margin, Rect, RichText, Sense, Stroke,
    Ui,
};
use shared::LayoutVariant;

use crate::catalog::{self, Finish, FinishCategory};
use crate::state::preview::{ArmType, PreviewAccordion};
use crate::state::{AppState, ViewerAction};
use crate::style::{self, ResolvedButton, ResolvedStyles};

const CARD_WIDTH: f32 = 350.0;
const EDGE_MARGIN: f32 = 40.0;
const GALLERY_TILES: usize = 6;
const TEXT_GRAY: Color32 = Color32::from_rgb(107, 114, 128);
const SUBTITLE_GRAY: Color32 = Color32::from_rgb(170, 170, 170);
const BORDER_GRAY: Color32 = Color32::from_rgb(209, 213, 219);

/// Draw every overlay over the viewer rect. Runs after the viewport so
/// the widgets sit above the painted model and win pointer input.
pub fn show(ui: &mut Ui, rect: Rect, state: &mut AppState) {
    state.preview.refresh(&state.store);
    let styles = state.preview.styles().clone();
    let ctx = ui.ctx().clone();

    if state.panels.gallery {
        gallery_strip(&ctx, rect, &styles);
    }
    view_in_room(&ctx, rect, &styles);
    control_column(&ctx, rect, state, &styles);
    product_card(&ctx, rect, state, &styles);
}

// ── Gallery strip ───────────────────────────────────────────────────────────

/// Vertical strip of product photo tiles along the left edge. Spacing,
/// corner and alignment come from the gallery slice; the tile chrome is
/// the gallery thumbnail button style.
fn gallery_strip(ctx: &egui::Context, rect: Rect, styles: &ResolvedStyles) {
    let pos = pos2(rect.left() + EDGE_MARGIN, rect.top() + rect.height() * 0.25);
    egui::Area::new(Id::new("gallery_strip"))
        .pivot(Align2::LEFT_TOP)
        .fixed_pos(pos)
        .show(ctx, |ui| {
            ui.spacing_mut().item_spacing.y = styles.gallery_spacing;
            ui.with_layout(egui::Layout::top_down(styles.gallery_align), |ui| {
                // Column wider than the tiles so the alignment has room
                ui.set_width(56.0);
                for _ in 0..GALLERY_TILES {
                    gallery_tile(ui, styles);
                }
            });
        });
}

fn gallery_tile(ui: &mut Ui, styles: &ResolvedStyles) {
    let tile = &styles.gallery_thumbnail;
    egui::Frame::new()
        .fill(tile.fill)
        .corner_radius(styles.gallery_corner)
        .shadow(tile.shadow)
        .show(ui, |ui| {
            let (tile_rect, _) = ui.allocate_exact_size(vec2(40.0, 40.0), Sense::hover());
            if ui.is_rect_visible(tile_rect) {
                ui.painter().text(
                    tile_rect.center(),
                    Align2::CENTER_CENTER,
                    "🖼",
                    FontId::proportional(16.0),
                    tile.text_color,
                );
            }
        });
}

// ── View in room ────────────────────────────────────────────────────────────

fn view_in_room(ctx: &egui::Context, rect: Rect, styles: &ResolvedStyles) {
    let pos = pos2(rect.left() + EDGE_MARGIN, rect.bottom() - EDGE_MARGIN);
    egui::Area::new(Id::new("view_in_room"))
        .pivot(Align2::LEFT_BOTTOM)
        .fixed_pos(pos)
        .show(ctx, |ui| {
            let button = &styles.view_in_room;
            let widget = egui::Button::new(styled_text("📦 View in your room", button))
                .fill(button.fill)
                .stroke(Stroke::new(1.0, BORDER_GRAY))
                .corner_radius(button.corner);
            frame_with_shadow(ui, button, |ui| {
                let _ = ui.add_sized(vec2(180.0, 40.0), widget);
            });
        });
}

// ── Viewer controls ─────────────────────────────────────────────────────────

/// Control column to the left of the product card. Camera presses go
/// through the action queue the viewport drains once per frame; the
/// settings toggle flips the editor panel directly.
fn control_column(ctx: &egui::Context, rect: Rect, state: &mut AppState, styles: &ResolvedStyles) {
    let pos = pos2(
        rect.right() - EDGE_MARGIN - CARD_WIDTH - 48.0,
        rect.top() + rect.height() * 2.0 / 3.0,
    );
    egui::Area::new(Id::new("viewer_controls"))
        .pivot(Align2::CENTER_CENTER)
        .fixed_pos(pos)
        .show(ctx, |ui| {
            ui.spacing_mut().item_spacing.y = 8.0;
            let button = &styles.control_button;
            if control_button(ui, button, "⚙", "Settings") {
                state.panels.editor = !state.panels.editor;
            }
            if control_button(ui, button, "🔍", "Fit to view") {
                state.preview.push_action(ViewerAction::Frame);
            }
            if control_button(ui, button, "🗖", "Fullscreen") {
                state.preview.push_action(ViewerAction::ToggleFullscreen);
            }
            if control_button(ui, button, "➕", "Zoom in") {
                state.preview.push_action(ViewerAction::ZoomIn);
            }
            if control_button(ui, button, "➖", "Zoom out") {
                state.preview.push_action(ViewerAction::ZoomOut);
            }
        });
}

fn control_button(ui: &mut Ui, button: &ResolvedButton, glyph: &str, tip: &str) -> bool {
    let mut clicked = false;
    frame_with_shadow(ui, button, |ui| {
        let widget = egui::Button::new(RichText::new(glyph).size(14.0).color(button.text_color))
            .fill(button.fill)
            .corner_radius(button.corner);
        clicked = ui
            .add_sized(vec2(32.0, 32.0), widget)
            .on_hover_text(tip)
            .clicked();
    });
    clicked
}

// ── Product card ────────────────────────────────────────────────────────────

/// The price card on the right: header, shopper accordions and the
/// price row. Card chrome comes from the layout slice.
fn product_card(ctx: &egui::Context, rect: Rect, state: &mut AppState, styles: &ResolvedStyles) {
    let pos = pos2(rect.right() - EDGE_MARGIN, rect.center().y);
    // Accordions scroll once the card would outgrow the viewer
    let max_body = (rect.height() - 280.0).max(120.0);
    egui::Area::new(Id::new("product_card"))
        .pivot(Align2::RIGHT_CENTER)
        .fixed_pos(pos)
        .show(ctx, |ui| {
            styles.card.show(ui, |ui| {
                ui.set_width(CARD_WIDTH);
                card_header(ui, styles);
                ui.add_space(10.0);
                egui::ScrollArea::vertical()
                    .max_height(max_body)
                    .auto_shrink([false, true])
                    .show(ui, |ui| {
                        accordions(ui, state, styles);
                    });
                ui.add_space(10.0);
                ui.separator();
                price_row(ui, styles);
            });
        });
}

fn card_header(ui: &mut Ui, styles: &ResolvedStyles) {
    ui.label(
        RichText::new("Gaming Chair")
            .font(styles.heading.clone())
            .color(Color32::BLACK)
            .strong(),
    );
    ui.label(
        RichText::new("By Mittal Furniture")
            .font(styles.small.clone())
            .color(TEXT_GRAY),
    );
    ui.add_space(8.0);
    ui.label(
        RichText::new("Customize your Chair")
            .font(styles.body.clone())
            .color(Color32::BLACK),
    );
}

fn accordions(ui: &mut Ui, state: &mut AppState, styles: &ResolvedStyles) {
    let arm_label = state.preview.arm_type.label();
    let finish_name = state.preview.selected_finish.name;
    let legs_name = state.preview.selected_legs_finish.name;
    accordion_item(
        ui,
        state,
        styles,
        PreviewAccordion::Arms,
        "1. Arms",
        arm_label,
        arms_body,
    );
    accordion_item(
        ui,
        state,
        styles,
        PreviewAccordion::ArmsFinish,
        "2. Arms Finish",
        finish_name,
        arms_finish_body,
    );
    accordion_item(
        ui,
        state,
        styles,
        PreviewAccordion::LegsFinish,
        "3. Legs Finish",
        legs_name,
        legs_finish_body,
    );
}

/// One accordion entry: a click row with thumbnail, title and current
/// selection, then the body while open. The open entry is tinted with
/// the secondary theme color.
fn accordion_item(
    ui: &mut Ui,
    state: &mut AppState,
    styles: &ResolvedStyles,
    entry: PreviewAccordion,
    title: &str,
    subtitle: &str,
    body: fn(&mut Ui, &mut AppState, &ResolvedStyles),
) {
    let open = state.preview.open_accordion == Some(entry);
    let fill = if open {
        styles.secondary
    } else {
        Color32::TRANSPARENT
    };
    egui::Frame::new()
        .fill(fill)
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::same(6))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            let row = ui.horizontal(|ui| {
                let (thumb, _) = ui.allocate_exact_size(vec2(40.0, 40.0), Sense::hover());
                if ui.is_rect_visible(thumb) {
                    ui.painter()
                        .rect_filled(thumb, CornerRadius::same(6), Color32::from_gray(235));
                }
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(title)
                            .font(styles.body.clone())
                            .color(Color32::BLACK),
                    );
                    ui.label(
                        RichText::new(subtitle)
                            .font(styles.small.clone())
                            .color(SUBTITLE_GRAY),
                    );
                });
            });
            // The whole row width toggles, not just the text
            let mut click_rect = row.response.rect;
            click_rect.max.x = ui.max_rect().right();
            let response = ui.interact(click_rect, ui.id().with(title), Sense::click());
            if response.clicked() {
                state.preview.toggle_accordion(entry);
            }
            if open {
                ui.add_space(4.0);
                body(ui, state, styles);
            }
        });
    ui.add_space(4.0);
}

// ── Accordion bodies ────────────────────────────────────────────────────────

/// Arm type choice. The selected side carries its own configured button
/// style, the other stays neutral.
fn arms_body(ui: &mut Ui, state: &mut AppState, styles: &ResolvedStyles) {
    egui::Frame::new()
        .fill(Color32::from_rgb(249, 250, 251))
        .corner_radius(CornerRadius::same(4))
        .inner_margin(Margin::same(10))
        .show(ui, |ui| {
            ui.columns(2, |columns| {
                arm_button(&mut columns[0], state, ArmType::Fixed, &styles.fixed_arms);
                arm_button(&mut columns[1], state, ArmType::Movable, &styles.movable_arms);
            });
        });
}

fn arm_button(ui: &mut Ui, state: &mut AppState, arm: ArmType, resolved: &ResolvedButton) {
    let selected = state.preview.arm_type == arm;
    let widget = if selected {
        egui::Button::new(styled_text(arm.label(), resolved))
            .fill(resolved.fill)
            .corner_radius(resolved.corner)
    } else {
        egui::Button::new(
            RichText::new(arm.label())
                .font(resolved.font.clone())
                .color(Color32::BLACK),
        )
        .fill(Color32::WHITE)
        .stroke(Stroke::new(1.0, BORDER_GRAY))
        .corner_radius(resolved.corner)
    };
    let size = vec2(ui.available_width(), 36.0);
    if ui.add_sized(size, widget).clicked() {
        state.preview.arm_type = arm;
    }
}

fn arms_finish_body(ui: &mut Ui, state: &mut AppState, styles: &ResolvedStyles) {
    let pick = finish_body(
        ui,
        styles,
        &catalog::ARM_FINISH_CATEGORIES,
        state.preview.active_category,
        state.preview.selected_finish,
    );
    match pick {
        Some(FinishPick::Category(category)) => state.preview.active_category = category,
        Some(FinishPick::Swatch(finish)) => state.preview.selected_finish = finish,
        None => {}
    }
}

fn legs_finish_body(ui: &mut Ui, state: &mut AppState, styles: &ResolvedStyles) {
    let pick = finish_body(
        ui,
        styles,
        &catalog::LEG_FINISH_CATEGORIES,
        state.preview.active_legs_category,
        state.preview.selected_legs_finish,
    );
    match pick {
        Some(FinishPick::Category(category)) => state.preview.active_legs_category = category,
        Some(FinishPick::Swatch(finish)) => state.preview.selected_legs_finish = finish,
        None => {}
    }
}

// ── Finish picker ───────────────────────────────────────────────────────────

enum FinishPick {
    Category(&'static FinishCategory),
    Swatch(&'static Finish),
}

/// Finish picker body. Layout 1 tabs through the categories, layout 2
/// stacks them all with their headers.
fn finish_body(
    ui: &mut Ui,
    styles: &ResolvedStyles,
    categories: &'static [FinishCategory],
    active: &'static FinishCategory,
    selected: &'static Finish,
) -> Option<FinishPick> {
    let mut pick = None;
    egui::Frame::new()
        .fill(Color32::WHITE)
        .corner_radius(CornerRadius::same(4))
        .inner_margin(Margin::same(10))
        .show(ui, |ui| match styles.layout {
            LayoutVariant::Layout1 => {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 14.0;
                    for category in categories {
                        let is_active = std::ptr::eq(category, active);
                        if category_tab(ui, category.name, is_active, &styles.small) {
                            pick = Some(FinishPick::Category(category));
                        }
                    }
                });
                ui.add_space(10.0);
                if let Some(finish) = swatch_grid(ui, active.finishes, selected, styles.primary) {
                    pick = Some(FinishPick::Swatch(finish));
                }
            }
            LayoutVariant::Layout2 => {
                for category in categories {
                    ui.label(
                        RichText::new(category.name)
                            .font(styles.small.clone())
                            .color(TEXT_GRAY),
                    );
                    ui.add_space(4.0);
                    if let Some(finish) = swatch_grid(ui, category.finishes, selected, styles.primary)
                    {
                        pick = Some(FinishPick::Swatch(finish));
                    }
                    ui.add_space(8.0);
                }
            }
        });
    pick
}

fn category_tab(ui: &mut Ui, name: &str, active: bool, small: &FontId) -> bool {
    let color = if active { Color32::BLACK } else { TEXT_GRAY };
    let text = RichText::new(name).font(small.clone()).color(color);
    let response = ui.add(egui::Label::new(text).sense(Sense::click()));
    if active {
        let rect = response.rect;
        ui.painter()
            .hline(rect.x_range(), rect.bottom() + 2.0, Stroke::new(2.0, Color32::BLACK));
    }
    response.clicked()
}

/// Swatches five per row, in catalog order
fn swatch_grid(
    ui: &mut Ui,
    finishes: &'static [Finish],
    selected: &'static Finish,
    ring: Color32,
) -> Option<&'static Finish> {
    let mut picked = None;
    for row in finishes.chunks(5) {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 10.0;
            for finish in row {
                // Selection compares by hex, so identical colors in
                // different categories highlight together
                if swatch(ui, finish, finish.hex == selected.hex, ring) {
                    picked = Some(finish);
                }
            }
        });
        ui.add_space(6.0);
    }
    picked
}

fn swatch(ui: &mut Ui, finish: &'static Finish, selected: bool, ring: Color32) -> bool {
    let (rect, response) = ui.allocate_exact_size(vec2(38.0, 38.0), Sense::click());
    if ui.is_rect_visible(rect) {
        let center = rect.center();
        let painter = ui.painter();
        painter.circle_filled(center, 13.0, style::color32(finish.hex));
        if selected {
            // White gap between the swatch and the accent ring
            painter.circle_stroke(center, 14.5, Stroke::new(2.0, Color32::WHITE));
            painter.circle_stroke(center, 16.5, Stroke::new(2.0, ring));
        }
    }
    let response = response.on_hover_ui(|ui| swatch_tooltip(ui, finish));
    response.clicked()
}

/// Hover card: a color block above the finish name and hex
fn swatch_tooltip(ui: &mut Ui, finish: &Finish) {
    let (rect, _) = ui.allocate_exact_size(vec2(96.0, 56.0), Sense::hover());
    ui.painter()
        .rect_filled(rect, CornerRadius::same(4), style::color32(finish.hex));
    ui.label(RichText::new(finish.name).strong());
    ui.weak(finish.hex);
}

// ── Price row ───────────────────────────────────────────────────────────────

fn price_row(ui: &mut Ui, styles: &ResolvedStyles) {
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(
                RichText::new("Product Price")
                    .font(styles.small.clone())
                    .color(TEXT_GRAY),
            );
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("$ 200")
                        .font(styles.body.clone())
                        .color(Color32::BLACK)
                        .strong(),
                );
                ui.label(
                    RichText::new("$ 245")
                        .font(styles.small.clone())
                        .color(Color32::from_rgb(156, 163, 175))
                        .strikethrough(),
                );
            });
        });
        let button = &styles.add_to_cart;
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            frame_with_shadow(ui, button, |ui| {
                let widget = egui::Button::new(styled_text("Add to cart", button))
                    .fill(button.fill)
                    .corner_radius(button.corner);
                let _ = ui.add_sized(vec2(150.0, 40.0), widget);
            });
        });
    });
}

// ── Shared helpers ──────────────────────────────────────────────────────────

fn styled_text(text: &str, button: &ResolvedButton) -> RichText {
    let mut rich = RichText::new(text)
        .font(button.font.clone())
        .color(button.text_color);
    if button.strong {
        rich = rich.strong();
    }
    rich
}

/// Shadow has to wrap the button in its own frame, plain buttons do not
/// cast one.
fn frame_with_shadow(ui: &mut Ui, button: &ResolvedButton, add_contents: impl FnOnce(&mut Ui)) {
    egui::Frame::new()
        .shadow(button.shadow)
        .corner_radius(button.corner)
        .show(ui, add_contents);
}
