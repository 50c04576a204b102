//! 3D viewport panel with OpenGL rendering

mod camera;
mod gl_renderer;
pub use vitrine_gui_lib::viewport::mesh;

use std::sync::{Arc, Mutex};

use egui::Ui;

use crate::loader::{ModelLoader, ModelSource};
use crate::state::{AppState, ViewerAction};
use camera::OrbitCamera;
use gl_renderer::GlRenderer;
use mesh::{Aabb, MeshData};

/// Clear color of the viewer area, independent of the card background
const VIEWPORT_BG: [u8; 3] = [229, 231, 235];

/// Fallback tint when the stored material color does not parse
const FALLBACK_TINT: [f32; 3] = [0.8, 0.8, 0.8];

/// 3D viewport panel with OpenGL rendering
pub struct ViewportPanel {
    camera: OrbitCamera,
    gl_renderer: Option<Arc<Mutex<GlRenderer>>>,
    source: ModelSource,
    loader: Option<ModelLoader>,
    meshes: Vec<MeshData>,
    model_bounds: Option<Aabb>,
    load_error: Option<String>,
    /// Version counter so the GL side re-uploads only on new meshes
    model_version: u64,
}

impl ViewportPanel {
    pub fn new(source: ModelSource) -> Self {
        let loader = ModelLoader::spawn(source.clone());
        Self {
            camera: OrbitCamera::new(),
            gl_renderer: None,
            source,
            loader: Some(loader),
            meshes: Vec::new(),
            model_bounds: None,
            load_error: None,
            model_version: 0,
        }
    }

    /// Initialize GL renderer (must be called with a GL context)
    pub fn init_gl(&mut self, gl: &glow::Context) {
        let renderer = GlRenderer::new(gl);
        self.gl_renderer = Some(Arc::new(Mutex::new(renderer)));
    }

    pub fn reset_camera(&mut self) {
        self.camera = OrbitCamera::new();
        if let Some(bounds) = &self.model_bounds {
            self.camera.frame(bounds);
        }
    }

    /// Fit the loaded model into view
    pub fn frame_model(&mut self) {
        if let Some(bounds) = &self.model_bounds {
            self.camera.frame(bounds);
        }
    }

    /// Drop the current model and fetch it again from the same source
    pub fn reload(&mut self) {
        self.loader = Some(ModelLoader::spawn(self.source.clone()));
        self.load_error = None;
    }

    pub fn is_loading(&self) -> bool {
        self.loader.is_some()
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn source(&self) -> &ModelSource {
        &self.source
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.meshes.iter().map(|m| m.indices.len() / 3).sum()
    }

    pub fn show(&mut self, ui: &mut Ui, state: &mut AppState) -> egui::Rect {
        let (rect, response) = ui.allocate_exact_size(
            ui.available_size(),
            egui::Sense::click_and_drag(),
        );

        // ── Camera controls ─────────────────────────────
        let shift = ui.input(|i| i.modifiers.shift);
        if response.dragged_by(egui::PointerButton::Secondary)
            || (response.dragged_by(egui::PointerButton::Primary) && shift)
        {
            let delta = response.drag_delta();
            self.camera.pan(delta.x * 0.01, delta.y * 0.01);
        } else if response.dragged_by(egui::PointerButton::Primary) {
            let delta = response.drag_delta();
            self.camera.rotate(delta.x * 0.5, delta.y * 0.5);
        }

        // ── Scroll zoom ─────────────────────────────
        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll.abs() > 0.1 {
                self.camera.zoom(scroll * 0.01);
            }
        }

        // ── Model loading ───────────────────────────
        self.poll_loader(ui);

        if !ui.is_rect_visible(rect) {
            return rect;
        }

        // ── GL rendering ────────────────────────────
        self.render_gl(ui, rect, state);

        // ── Overlays ────────────────────────────────
        self.draw_overlays(ui, rect);

        rect
    }

    /// Apply control-button and shortcut requests queued on the preview state
    pub fn apply_actions(&mut self, ctx: &egui::Context, state: &mut AppState) {
        for action in state.preview.take_actions() {
            match action {
                ViewerAction::ZoomIn => self.camera.zoom(0.12),
                ViewerAction::ZoomOut => self.camera.zoom(-0.12),
                ViewerAction::Frame => self.frame_model(),
                ViewerAction::ResetCamera => self.reset_camera(),
                ViewerAction::ToggleFullscreen => {
                    let fullscreen =
                        ctx.input(|i| i.viewport().fullscreen.unwrap_or(false));
                    ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(!fullscreen));
                }
            }
        }
    }

    fn poll_loader(&mut self, ui: &Ui) {
        let Some(loader) = &mut self.loader else {
            return;
        };
        match loader.poll() {
            Some(Ok(meshes)) => {
                tracing::info!(count = meshes.len(), "model loaded");
                self.model_bounds = Aabb::from_meshes(&meshes);
                self.meshes = meshes;
                self.model_version += 1;
                self.load_error = None;
                if let Some(bounds) = &self.model_bounds {
                    self.camera.frame(bounds);
                }
                self.loader = None;
            }
            Some(Err(err)) => {
                tracing::error!("model load failed: {err}");
                self.load_error = Some(err);
                self.loader = None;
            }
            None => {
                // Keep polling while the worker runs
                ui.ctx().request_repaint();
            }
        }
    }

    fn render_gl(&self, ui: &mut Ui, rect: egui::Rect, state: &AppState) {
        let Some(gl_renderer) = &self.gl_renderer else {
            return;
        };
        if let Ok(r) = gl_renderer.lock() {
            drop(r); // Release lock before callback

            let renderer_clone = gl_renderer.clone();
            let camera_yaw = self.camera.yaw;
            let camera_pitch = self.camera.pitch;
            let camera_distance = self.camera.distance;
            let camera_target = self.camera.target;
            let camera_fov = self.camera.fov;

            let meshes = self.meshes.clone();
            let version = self.model_version;
            let tint = selected_tint(state);

            let callback = egui::PaintCallback {
                rect,
                callback: Arc::new(eframe::egui_glow::CallbackFn::new(
                    move |info, painter| {
                        let gl = painter.gl();

                        let camera = OrbitCamera {
                            yaw: camera_yaw,
                            pitch: camera_pitch,
                            distance: camera_distance,
                            target: camera_target,
                            fov: camera_fov,
                        };

                        let clip = info.clip_rect_in_pixels();
                        let viewport = [
                            clip.left_px as f32,
                            clip.from_bottom_px as f32,
                            clip.width_px as f32,
                            clip.height_px as f32,
                        ];

                        if let Ok(mut r) = renderer_clone.lock() {
                            r.sync_model(gl, &meshes, version);

                            let render_params = gl_renderer::RenderParams {
                                viewport,
                                bg_color: VIEWPORT_BG,
                                tint,
                            };
                            r.paint(gl, &camera, &render_params);
                        }
                    },
                )),
            };

            ui.painter().add(callback);
        }
    }

    fn draw_overlays(&self, ui: &mut Ui, rect: egui::Rect) {
        let painter = ui.painter_at(rect);

        if self.meshes.is_empty() {
            self.draw_placeholder(ui, &painter, rect);
        } else {
            painter.text(
                egui::pos2(rect.center().x, rect.bottom() - 8.0),
                egui::Align2::CENTER_BOTTOM,
                "Drag to orbit · Scroll to zoom · Shift-drag to pan",
                egui::FontId::proportional(11.0),
                egui::Color32::from_rgb(140, 140, 150),
            );
        }

        self.draw_camera_info(&painter, rect);
    }

    /// Spinner and text shown until meshes arrive; stays up on failure
    fn draw_placeholder(&self, ui: &mut Ui, painter: &egui::Painter, rect: egui::Rect) {
        let center = rect.center();
        let spinner_rect =
            egui::Rect::from_center_size(center - egui::vec2(0.0, 24.0), egui::vec2(32.0, 32.0));
        ui.put(spinner_rect, egui::Spinner::new().size(32.0));

        painter.text(
            center + egui::vec2(0.0, 10.0),
            egui::Align2::CENTER_CENTER,
            "Loading model…",
            egui::FontId::proportional(14.0),
            egui::Color32::from_rgb(90, 90, 100),
        );

        if let Some(err) = &self.load_error {
            painter.text(
                center + egui::vec2(0.0, 32.0),
                egui::Align2::CENTER_CENTER,
                err,
                egui::FontId::proportional(11.0),
                egui::Color32::from_rgb(180, 90, 90),
            );
        }
    }

    fn draw_camera_info(&self, painter: &egui::Painter, rect: egui::Rect) {
        let overlay_rect = egui::Rect::from_min_size(
            egui::pos2(rect.right() - 140.0, rect.top() + 4.0),
            egui::vec2(136.0, 44.0),
        );
        painter.rect_filled(
            overlay_rect,
            4.0,
            egui::Color32::from_rgba_premultiplied(0, 0, 0, 140),
        );
        painter.text(
            overlay_rect.min + egui::vec2(6.0, 4.0),
            egui::Align2::LEFT_TOP,
            format!(
                "Dist: {:.1}\nYaw: {:.0}  Pitch: {:.0}",
                self.camera.distance,
                self.camera.yaw.to_degrees(),
                self.camera.pitch.to_degrees(),
            ),
            egui::FontId::monospace(10.0),
            egui::Color32::from_rgb(160, 160, 170),
        );
    }
}

/// Tint for the model from the currently selected material slot
fn selected_tint(state: &AppState) -> [f32; 3] {
    let slot = state.store.selected_material();
    let hex = &state.store.materials().get(slot).color;
    match shared::color::parse_hex(hex) {
        Some([r, g, b]) => [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0],
        None => FALLBACK_TINT,
    }
}
