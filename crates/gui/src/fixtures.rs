//! Factory functions for creating test data.
//!
//! Settings documents in various states plus tiny GLB models, used by
//! unit tests, the headless harness and the loader tests.

use serde_json::json;
use shared::*;

use crate::gltf::{
    CHUNK_TYPE_BIN, CHUNK_TYPE_JSON, FLOAT, GLB_MAGIC, GLB_VERSION, UNSIGNED_SHORT,
};

// ── Settings documents ──────────────────────────────────────────

/// Snapshot with every slice moved off its default.
pub fn custom_snapshot() -> EditorSnapshot {
    let mut snapshot = EditorSnapshot::default();
    snapshot.typography.font_family = "Inter, sans-serif".to_string();
    snapshot.typography.font_sizes.heading = 24.0;
    snapshot.typography.selected_font_size_type = FontRole::Heading;
    snapshot.typography.font_weight = 700;
    snapshot.layout.bg_color = "#1e1e28".to_string();
    snapshot.layout.padding = 12;
    snapshot.layout.card_radius = 16;
    snapshot.layout.border_enabled = false;
    snapshot.gallery.alignment = Alignment::Right;
    snapshot.gallery.spacing = 16;
    snapshot.gallery.border_radius = 10;
    snapshot.theme.primary_color = "#3a7bd5".to_string();
    snapshot.theme.secondary_color = "#dce9fb".to_string();
    snapshot.current_layout = LayoutVariant::Layout2;
    if let Some(style) = snapshot.button.buttons.get_mut(DEFAULT_BUTTON_ID) {
        style.bg_color = "#222222".to_string();
        style.radius = 20;
        style.shadow = ShadowLevel::Xl;
    }
    snapshot.materials.leather.color = "#58504a".to_string();
    snapshot.selected_material = MaterialSlot::Silicon;
    snapshot
}

/// The custom snapshot serialized the way the editor exports it.
pub fn settings_json() -> String {
    serde_json::to_string_pretty(&custom_snapshot()).unwrap_or_default()
}

/// Document carrying only a gallery and a theme slice.
pub fn partial_settings_json() -> &'static str {
    r#"{"gallery":{"alignment":"right","spacing":20},"theme":{"primaryColor":"#202020"}}"#
}

/// Syntactically broken document.
pub fn malformed_settings_json() -> &'static str {
    "{\"gallery\": {"
}

/// Parses as JSON but carries a wrongly typed field.
pub fn wrong_shape_settings_json() -> &'static str {
    r#"{"gallery":{"spacing":"wide"}}"#
}

// ── GLB models ──────────────────────────────────────────────────

pub fn floats_to_bytes(values: &[f32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

pub fn u16s_to_bytes(values: &[u16]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

pub fn u32s_to_bytes(values: &[u32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

/// Assemble a GLB container around a JSON document and a binary chunk.
pub fn glb_container(json: &str, bin: &[u8]) -> Vec<u8> {
    let mut json_bytes = json.as_bytes().to_vec();
    while json_bytes.len() % 4 != 0 {
        json_bytes.push(b' ');
    }
    let mut bin_bytes = bin.to_vec();
    while bin_bytes.len() % 4 != 0 {
        bin_bytes.push(0);
    }

    let mut total = 12 + 8 + json_bytes.len();
    if !bin.is_empty() {
        total += 8 + bin_bytes.len();
    }

    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(&GLB_MAGIC.to_le_bytes());
    out.extend_from_slice(&GLB_VERSION.to_le_bytes());
    out.extend_from_slice(&(total as u32).to_le_bytes());
    out.extend_from_slice(&(json_bytes.len() as u32).to_le_bytes());
    out.extend_from_slice(&CHUNK_TYPE_JSON.to_le_bytes());
    out.extend_from_slice(&json_bytes);
    if !bin.is_empty() {
        out.extend_from_slice(&(bin_bytes.len() as u32).to_le_bytes());
        out.extend_from_slice(&CHUNK_TYPE_BIN.to_le_bytes());
        out.extend_from_slice(&bin_bytes);
    }
    out
}

/// One CCW triangle in the XY plane with +Z normals and u16 indices.
pub fn triangle_glb() -> Vec<u8> {
    let mut bin = floats_to_bytes(&[
        0.0, 0.0, 0.0, //
        1.0, 0.0, 0.0, //
        0.0, 1.0, 0.0,
    ]);
    bin.extend(floats_to_bytes(&[
        0.0, 0.0, 1.0, //
        0.0, 0.0, 1.0, //
        0.0, 0.0, 1.0,
    ]));
    bin.extend(u16s_to_bytes(&[0, 1, 2]));

    let doc = json!({
        "asset": {"version": "2.0"},
        "scene": 0,
        "scenes": [{"nodes": [0]}],
        "nodes": [{"mesh": 0}],
        "meshes": [{"primitives": [{
            "attributes": {"POSITION": 0, "NORMAL": 1},
            "indices": 2
        }]}],
        "accessors": [
            {"bufferView": 0, "componentType": FLOAT, "count": 3, "type": "VEC3"},
            {"bufferView": 1, "componentType": FLOAT, "count": 3, "type": "VEC3"},
            {"bufferView": 2, "componentType": UNSIGNED_SHORT, "count": 3, "type": "SCALAR"}
        ],
        "bufferViews": [
            {"buffer": 0, "byteOffset": 0, "byteLength": 36},
            {"buffer": 0, "byteOffset": 36, "byteLength": 36},
            {"buffer": 0, "byteOffset": 72, "byteLength": 6}
        ],
        "buffers": [{"byteLength": 78}]
    });
    glb_container(&doc.to_string(), &bin)
}
