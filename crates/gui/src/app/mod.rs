//! Main application module

mod keyboard;
mod menus;
mod styles;

use eframe::egui;

use crate::loader::ModelSource;
use crate::state::AppState;
use crate::ui::{editor, preview, status_bar};
use crate::viewport::ViewportPanel;

/// Main application
pub struct StudioApp {
    state: AppState,
    viewport: ViewportPanel,
}

impl StudioApp {
    pub fn new(cc: &eframe::CreationContext<'_>, source: ModelSource) -> Self {
        let state = AppState::default();

        styles::configure_styles(&cc.egui_ctx);

        let mut viewport = ViewportPanel::new(source);

        // Initialize GL renderer if glow context is available
        if let Some(gl) = cc.gl.as_ref() {
            viewport.init_gl(gl);
        }

        Self { state, viewport }
    }
}

impl eframe::App for StudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        keyboard::handle_keyboard(ctx, &mut self.state);

        // ── Menu bar ──────────────────────────────────────────
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                menus::file_menu(ui, &mut self.state);
                menus::view_menu(ui, &mut self.state, &mut self.viewport);
            });
        });

        // ── Status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(22.0)
            .frame(
                egui::Frame::side_top_panel(&ctx.style())
                    .inner_margin(egui::Margin::symmetric(8, 2)),
            )
            .show(ctx, |ui| {
                status_bar::show(ui, &self.state, &self.viewport);
            });

        // ── Right panel: settings editor ─────────────────────
        if self.state.panels.editor {
            egui::SidePanel::right("editor_panel")
                .default_width(300.0)
                .width_range(240.0..=420.0)
                .resizable(true)
                .frame(
                    egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(6)),
                )
                .show(ctx, |ui| {
                    editor::show(ui, &mut self.state);
                });
        }

        // ── Central panel: viewer + preview overlays ─────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let rect = self.viewport.show(ui, &mut self.state);
                preview::show(ui, rect, &mut self.state);
            });

        // Queued viewer actions drain once per frame, after every panel ran
        self.viewport.apply_actions(ctx, &mut self.state);
    }
}
