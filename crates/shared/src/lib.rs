//! Shared data model for the configurator studio: the settings slices, the
//! exportable snapshot, the import patch types, and the constants the studio
//! and the asset server agree on.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub mod color;

/// Route the asset server exposes the product model under.
pub const MODEL_ROUTE: &str = "/api/model";

/// Content type for binary glTF payloads.
pub const MODEL_CONTENT_TYPE: &str = "model/gltf-binary";

/// Model file the asset server serves by default.
pub const DEFAULT_MODEL_FILE: &str = "gaming-chair.glb";

/// Port the asset server binds to.
pub const SERVER_PORT: u16 = 3001;

/// Button id unknown lookups fall back to.
pub const DEFAULT_BUTTON_ID: &str = "addToCart";

/// Text role a font size applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontRole {
    Heading,
    #[default]
    Body,
    Small,
    Button,
}

impl FontRole {
    /// Display name for combo boxes
    pub fn display_name(&self) -> &'static str {
        match self {
            FontRole::Heading => "Heading",
            FontRole::Body => "Body",
            FontRole::Small => "Small",
            FontRole::Button => "Button",
        }
    }

    /// All roles in display order
    pub fn all() -> &'static [FontRole] {
        &[FontRole::Heading, FontRole::Body, FontRole::Small, FontRole::Button]
    }
}

/// Font size per text role, in pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSizes {
    pub heading: f32,
    pub body: f32,
    pub small: f32,
    pub button: f32,
}

impl FontSizes {
    /// Size for one role
    pub fn get(&self, role: FontRole) -> f32 {
        match role {
            FontRole::Heading => self.heading,
            FontRole::Body => self.body,
            FontRole::Small => self.small,
            FontRole::Button => self.button,
        }
    }

    /// Set the size for one role
    pub fn set(&mut self, role: FontRole, px: f32) {
        match role {
            FontRole::Heading => self.heading = px,
            FontRole::Body => self.body = px,
            FontRole::Small => self.small = px,
            FontRole::Button => self.button = px,
        }
    }
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            heading: 18.0,
            body: 16.0,
            small: 14.0,
            button: 16.0,
        }
    }
}

/// Typography slice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyState {
    /// Font family stack, first entry is the one loaded
    pub font_family: String,
    pub font_sizes: FontSizes,
    /// Role currently targeted by the size control
    pub selected_font_size_type: FontRole,
    pub font_weight: u16,
}

impl Default for TypographyState {
    fn default() -> Self {
        Self {
            font_family: "Poppins, sans-serif".to_string(),
            font_sizes: FontSizes::default(),
            selected_font_size_type: FontRole::Body,
            font_weight: 500,
        }
    }
}

/// Drop shadow preset, ordered by intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowLevel {
    #[default]
    None,
    Sm,
    Md,
    Lg,
    Xl,
}

impl ShadowLevel {
    /// Display name for combo boxes
    pub fn display_name(&self) -> &'static str {
        match self {
            ShadowLevel::None => "None",
            ShadowLevel::Sm => "Small",
            ShadowLevel::Md => "Medium",
            ShadowLevel::Lg => "Large",
            ShadowLevel::Xl => "Extra large",
        }
    }

    /// All levels, weakest first
    pub fn all() -> &'static [ShadowLevel] {
        &[
            ShadowLevel::None,
            ShadowLevel::Sm,
            ShadowLevel::Md,
            ShadowLevel::Lg,
            ShadowLevel::Xl,
        ]
    }
}

/// Horizontal placement of a block inside its row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

impl Alignment {
    /// Display name for alignment pickers
    pub fn display_name(&self) -> &'static str {
        match self {
            Alignment::Left => "Left",
            Alignment::Center => "Center",
            Alignment::Right => "Right",
        }
    }

    /// All alignments in display order
    pub fn all() -> &'static [Alignment] {
        &[Alignment::Left, Alignment::Center, Alignment::Right]
    }
}

/// Visual style of one button role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonStyle {
    /// Fill color as `#rrggbb`
    pub bg_color: String,
    /// Label color as `#rrggbb`
    pub text_color: String,
    /// Corner radius in pixels
    pub radius: u8,
    pub shadow: ShadowLevel,
    pub alignment: Alignment,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            bg_color: "#FFFFFF".to_string(),
            text_color: "#000000".to_string(),
            radius: 4,
            shadow: ShadowLevel::None,
            alignment: Alignment::Center,
        }
    }
}

/// Button slice: styles keyed by button id plus the id being edited
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonState {
    /// BTreeMap so exports list buttons in a stable order
    pub buttons: BTreeMap<String, ButtonStyle>,
    pub selected_button: String,
}

impl Default for ButtonState {
    fn default() -> Self {
        let style = |bg: &str, text: &str, radius: u8, shadow: ShadowLevel, alignment: Alignment| {
            ButtonStyle {
                bg_color: bg.to_string(),
                text_color: text.to_string(),
                radius,
                shadow,
                alignment,
            }
        };
        let mut buttons = BTreeMap::new();
        buttons.insert(
            "addToCart".to_string(),
            style("#C6614D", "#FFFFFF", 8, ShadowLevel::Md, Alignment::Center),
        );
        buttons.insert(
            "fixedArms".to_string(),
            style("#000000", "#FFFFFF", 8, ShadowLevel::None, Alignment::Center),
        );
        buttons.insert(
            "movableArms".to_string(),
            style("#FFFFFF", "#000000", 8, ShadowLevel::None, Alignment::Center),
        );
        buttons.insert(
            "viewInRoom".to_string(),
            style("#FFFFFF", "#000000", 8, ShadowLevel::Sm, Alignment::Left),
        );
        buttons.insert(
            "galleryThumbnail".to_string(),
            style("#FFFFFF", "#000000", 4, ShadowLevel::None, Alignment::Center),
        );
        buttons.insert(
            "controlButton".to_string(),
            style("#FFFFFF", "#000000", 4, ShadowLevel::Sm, Alignment::Center),
        );
        Self {
            buttons,
            selected_button: DEFAULT_BUTTON_ID.to_string(),
        }
    }
}

/// Card chrome slice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutState {
    pub bg_color: String,
    /// Inner padding in pixels
    pub padding: u8,
    pub card_radius: u8,
    pub border_enabled: bool,
    pub border_width: u8,
    pub border_color: String,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            bg_color: "#ffffff".to_string(),
            padding: 0,
            card_radius: 8,
            border_enabled: true,
            border_width: 1,
            border_color: "#d9d9d9".to_string(),
        }
    }
}

/// Gallery strip slice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryState {
    pub alignment: Alignment,
    /// Gap between thumbnails in pixels
    pub spacing: u8,
    pub border_radius: u8,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            alignment: Alignment::Left,
            spacing: 8,
            border_radius: 4,
        }
    }
}

/// Theme accent colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeState {
    pub primary_color: String,
    pub secondary_color: String,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self {
            primary_color: "#C6614D".to_string(),
            secondary_color: "#ffdbd4".to_string(),
        }
    }
}

/// Which preview arrangement is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutVariant {
    #[default]
    Layout1,
    Layout2,
}

impl LayoutVariant {
    /// Display name for the layout switch
    pub fn display_name(&self) -> &'static str {
        match self {
            LayoutVariant::Layout1 => "Layout 1",
            LayoutVariant::Layout2 => "Layout 2",
        }
    }

    /// Both variants in display order
    pub fn all() -> &'static [LayoutVariant] {
        &[LayoutVariant::Layout1, LayoutVariant::Layout2]
    }
}

/// Tint of one product material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialState {
    pub color: String,
}

/// Product material slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialSlot {
    #[default]
    Leather,
    Silicon,
    Aluminum,
}

impl MaterialSlot {
    /// Display name for the material picker
    pub fn display_name(&self) -> &'static str {
        match self {
            MaterialSlot::Leather => "Leather",
            MaterialSlot::Silicon => "Silicon",
            MaterialSlot::Aluminum => "Aluminum",
        }
    }

    /// All slots in display order
    pub fn all() -> &'static [MaterialSlot] {
        &[
            MaterialSlot::Leather,
            MaterialSlot::Silicon,
            MaterialSlot::Aluminum,
        ]
    }
}

/// Tints for the three product materials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSet {
    pub leather: MaterialState,
    pub silicon: MaterialState,
    pub aluminum: MaterialState,
}

impl MaterialSet {
    /// Tint of one slot
    pub fn get(&self, slot: MaterialSlot) -> &MaterialState {
        match slot {
            MaterialSlot::Leather => &self.leather,
            MaterialSlot::Silicon => &self.silicon,
            MaterialSlot::Aluminum => &self.aluminum,
        }
    }

    /// Mutable tint of one slot
    pub fn get_mut(&mut self, slot: MaterialSlot) -> &mut MaterialState {
        match slot {
            MaterialSlot::Leather => &mut self.leather,
            MaterialSlot::Silicon => &mut self.silicon,
            MaterialSlot::Aluminum => &mut self.aluminum,
        }
    }
}

impl Default for MaterialSet {
    fn default() -> Self {
        Self {
            leather: MaterialState { color: "#F5F5F5".to_string() },
            silicon: MaterialState { color: "#5A5A5A".to_string() },
            aluminum: MaterialState { color: "#D3D3D3".to_string() },
        }
    }
}

/// Complete editor state. Serializes to the settings file format; field
/// order here is the key order of exported documents.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorSnapshot {
    pub typography: TypographyState,
    pub layout: LayoutState,
    pub gallery: GalleryState,
    pub theme: ThemeState,
    pub current_layout: LayoutVariant,
    pub button: ButtonState,
    pub materials: MaterialSet,
    pub selected_material: MaterialSlot,
}

/// Names one section of the snapshot, for change notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slice {
    Typography,
    Layout,
    Gallery,
    Theme,
    CurrentLayout,
    Button,
    Materials,
    SelectedMaterial,
}

impl Slice {
    /// All sections in snapshot order
    pub fn all() -> &'static [Slice] {
        &[
            Slice::Typography,
            Slice::Layout,
            Slice::Gallery,
            Slice::Theme,
            Slice::CurrentLayout,
            Slice::Button,
            Slice::Materials,
            Slice::SelectedMaterial,
        ]
    }
}

// ============================================================================
// Import patches — partial settings documents
// ============================================================================

/// Partial typography update; absent fields keep their current values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Replaces all four sizes when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_sizes: Option<FontSizes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_font_size_type: Option<FontRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,
}

/// Partial button-slice update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonStatePatch {
    /// Replaces the whole style map when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buttons: Option<BTreeMap<String, ButtonStyle>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_button: Option<String>,
}

/// Partial layout update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_radius: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
}

/// Partial gallery update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u8>,
}

/// Partial theme update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
}

/// Partial material-set update; each slot replaces wholesale when present
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialSetPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leather: Option<MaterialState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub silicon: Option<MaterialState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aluminum: Option<MaterialState>,
}

/// Partial settings document, as read from an imported file. Absent
/// sections and fields leave the current values untouched; unknown keys
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typography: Option<TypographyPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery: Option<GalleryPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemePatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_layout: Option<LayoutVariant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button: Option<ButtonStatePatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub materials: Option<MaterialSetPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_material: Option<MaterialSlot>,
}

impl SnapshotPatch {
    /// Sections present in this patch, in snapshot order
    pub fn sections(&self) -> Vec<Slice> {
        let mut out = Vec::new();
        if self.typography.is_some() {
            out.push(Slice::Typography);
        }
        if self.layout.is_some() {
            out.push(Slice::Layout);
        }
        if self.gallery.is_some() {
            out.push(Slice::Gallery);
        }
        if self.theme.is_some() {
            out.push(Slice::Theme);
        }
        if self.current_layout.is_some() {
            out.push(Slice::CurrentLayout);
        }
        if self.button.is_some() {
            out.push(Slice::Button);
        }
        if self.materials.is_some() {
            out.push(Slice::Materials);
        }
        if self.selected_material.is_some() {
            out.push(Slice::SelectedMaterial);
        }
        out
    }
}

impl TypographyState {
    /// Overwrite the fields present in `patch`, keep the rest
    pub fn apply(&mut self, patch: TypographyPatch) {
        if let Some(v) = patch.font_family {
            self.font_family = v;
        }
        if let Some(v) = patch.font_sizes {
            self.font_sizes = v;
        }
        if let Some(v) = patch.selected_font_size_type {
            self.selected_font_size_type = v;
        }
        if let Some(v) = patch.font_weight {
            self.font_weight = v;
        }
    }
}

impl ButtonState {
    /// Overwrite the fields present in `patch`, keep the rest
    pub fn apply(&mut self, patch: ButtonStatePatch) {
        if let Some(v) = patch.buttons {
            self.buttons = v;
        }
        if let Some(v) = patch.selected_button {
            self.selected_button = v;
        }
    }
}

impl LayoutState {
    /// Overwrite the fields present in `patch`, keep the rest
    pub fn apply(&mut self, patch: LayoutPatch) {
        if let Some(v) = patch.bg_color {
            self.bg_color = v;
        }
        if let Some(v) = patch.padding {
            self.padding = v;
        }
        if let Some(v) = patch.card_radius {
            self.card_radius = v;
        }
        if let Some(v) = patch.border_enabled {
            self.border_enabled = v;
        }
        if let Some(v) = patch.border_width {
            self.border_width = v;
        }
        if let Some(v) = patch.border_color {
            self.border_color = v;
        }
    }
}

impl GalleryState {
    /// Overwrite the fields present in `patch`, keep the rest
    pub fn apply(&mut self, patch: GalleryPatch) {
        if let Some(v) = patch.alignment {
            self.alignment = v;
        }
        if let Some(v) = patch.spacing {
            self.spacing = v;
        }
        if let Some(v) = patch.border_radius {
            self.border_radius = v;
        }
    }
}

impl ThemeState {
    /// Overwrite the fields present in `patch`, keep the rest
    pub fn apply(&mut self, patch: ThemePatch) {
        if let Some(v) = patch.primary_color {
            self.primary_color = v;
        }
        if let Some(v) = patch.secondary_color {
            self.secondary_color = v;
        }
    }
}

impl MaterialSet {
    /// Overwrite the slots present in `patch`, keep the rest
    pub fn apply(&mut self, patch: MaterialSetPatch) {
        if let Some(v) = patch.leather {
            self.leather = v;
        }
        if let Some(v) = patch.silicon {
            self.silicon = v;
        }
        if let Some(v) = patch.aluminum {
            self.aluminum = v;
        }
    }
}

impl EditorSnapshot {
    /// Merge `patch` into the snapshot. Present fields overwrite, absent
    /// fields keep their current values. Returns the sections the patch
    /// touched, in snapshot order.
    pub fn apply_patch(&mut self, patch: SnapshotPatch) -> Vec<Slice> {
        let sections = patch.sections();
        if let Some(p) = patch.typography {
            self.typography.apply(p);
        }
        if let Some(p) = patch.layout {
            self.layout.apply(p);
        }
        if let Some(p) = patch.gallery {
            self.gallery.apply(p);
        }
        if let Some(p) = patch.theme {
            self.theme.apply(p);
        }
        if let Some(v) = patch.current_layout {
            self.current_layout = v;
        }
        if let Some(p) = patch.button {
            self.button.apply(p);
        }
        if let Some(p) = patch.materials {
            self.materials.apply(p);
        }
        if let Some(v) = patch.selected_material {
            self.selected_material = v;
        }
        sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip<T: Serialize + for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug>(val: &T) {
        let json = serde_json::to_string(val).expect("serialize");
        let back: T = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(*val, back);
    }

    // --- enums ---

    #[test]
    fn test_font_role_serde() {
        let json = serde_json::to_string(&FontRole::Heading).unwrap();
        assert_eq!(json, r#""heading""#);
        for role in FontRole::all() {
            roundtrip(role);
        }
    }

    #[test]
    fn test_shadow_level_serde() {
        let json = serde_json::to_string(&ShadowLevel::Md).unwrap();
        assert_eq!(json, r#""md""#);
        let json = serde_json::to_string(&ShadowLevel::None).unwrap();
        assert_eq!(json, r#""none""#);
        for level in ShadowLevel::all() {
            roundtrip(level);
        }
    }

    #[test]
    fn test_alignment_serde() {
        let json = serde_json::to_string(&Alignment::Left).unwrap();
        assert_eq!(json, r#""left""#);
        for a in Alignment::all() {
            roundtrip(a);
        }
    }

    #[test]
    fn test_layout_variant_serde() {
        let json = serde_json::to_string(&LayoutVariant::Layout1).unwrap();
        assert_eq!(json, r#""layout1""#);
        let json = serde_json::to_string(&LayoutVariant::Layout2).unwrap();
        assert_eq!(json, r#""layout2""#);
    }

    #[test]
    fn test_material_slot_serde() {
        let json = serde_json::to_string(&MaterialSlot::Aluminum).unwrap();
        assert_eq!(json, r#""aluminum""#);
        for slot in MaterialSlot::all() {
            roundtrip(slot);
        }
    }

    // --- slice defaults ---

    #[test]
    fn test_typography_defaults() {
        let t = TypographyState::default();
        assert_eq!(t.font_family, "Poppins, sans-serif");
        assert_eq!(t.font_sizes.heading, 18.0);
        assert_eq!(t.font_sizes.body, 16.0);
        assert_eq!(t.font_sizes.small, 14.0);
        assert_eq!(t.font_sizes.button, 16.0);
        assert_eq!(t.selected_font_size_type, FontRole::Body);
        assert_eq!(t.font_weight, 500);
    }

    #[test]
    fn test_button_state_defaults() {
        let b = ButtonState::default();
        assert_eq!(b.buttons.len(), 6);
        assert_eq!(b.selected_button, "addToCart");
        for id in [
            "addToCart",
            "fixedArms",
            "movableArms",
            "viewInRoom",
            "galleryThumbnail",
            "controlButton",
        ] {
            assert!(b.buttons.contains_key(id), "missing default button {id}");
        }
        let cart = &b.buttons["addToCart"];
        assert_eq!(cart.bg_color, "#C6614D");
        assert_eq!(cart.text_color, "#FFFFFF");
        assert_eq!(cart.radius, 8);
        assert_eq!(cart.shadow, ShadowLevel::Md);
        assert_eq!(cart.alignment, Alignment::Center);
    }

    #[test]
    fn test_layout_defaults() {
        let l = LayoutState::default();
        assert_eq!(l.bg_color, "#ffffff");
        assert_eq!(l.padding, 0);
        assert_eq!(l.card_radius, 8);
        assert!(l.border_enabled);
        assert_eq!(l.border_width, 1);
        assert_eq!(l.border_color, "#d9d9d9");
    }

    #[test]
    fn test_gallery_defaults() {
        let g = GalleryState::default();
        assert_eq!(g.alignment, Alignment::Left);
        assert_eq!(g.spacing, 8);
        assert_eq!(g.border_radius, 4);
    }

    #[test]
    fn test_material_defaults() {
        let m = MaterialSet::default();
        assert_eq!(m.leather.color, "#F5F5F5");
        assert_eq!(m.silicon.color, "#5A5A5A");
        assert_eq!(m.aluminum.color, "#D3D3D3");
        assert_eq!(m.get(MaterialSlot::Silicon).color, "#5A5A5A");
    }

    #[test]
    fn test_material_set_get_mut() {
        let mut m = MaterialSet::default();
        m.get_mut(MaterialSlot::Aluminum).color = "#123456".to_string();
        assert_eq!(m.aluminum.color, "#123456");
        assert_eq!(m.leather.color, "#F5F5F5");
    }

    #[test]
    fn test_font_sizes_get_set() {
        let mut s = FontSizes::default();
        assert_eq!(s.get(FontRole::Heading), 18.0);
        s.set(FontRole::Small, 11.0);
        assert_eq!(s.small, 11.0);
        assert_eq!(s.get(FontRole::Small), 11.0);
    }

    // --- snapshot ---

    #[test]
    fn test_snapshot_top_level_keys() {
        let json = serde_json::to_value(EditorSnapshot::default()).unwrap();
        let obj = json.as_object().unwrap();
        let keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "typography",
                "layout",
                "gallery",
                "theme",
                "currentLayout",
                "button",
                "materials",
                "selectedMaterial",
            ]
        );
    }

    #[test]
    fn test_snapshot_camel_case_fields() {
        let json = serde_json::to_string(&EditorSnapshot::default()).unwrap();
        assert!(json.contains(r#""fontFamily""#));
        assert!(json.contains(r#""selectedFontSizeType""#));
        assert!(json.contains(r#""bgColor""#));
        assert!(json.contains(r#""selectedButton""#));
        assert!(json.contains(r#""borderRadius""#));
        assert!(json.contains(r#""primaryColor""#));
        assert!(json.contains(r#""currentLayout":"layout1""#));
        assert!(json.contains(r#""selectedMaterial":"leather""#));
    }

    #[test]
    fn test_snapshot_roundtrip() {
        roundtrip(&EditorSnapshot::default());

        let mut snap = EditorSnapshot::default();
        snap.theme.primary_color = "#0000ff".to_string();
        snap.current_layout = LayoutVariant::Layout2;
        snap.button.buttons.insert("custom".to_string(), ButtonStyle::default());
        roundtrip(&snap);
    }

    // --- patches ---

    #[test]
    fn test_patch_only_present_fields_applied() {
        let mut snap = EditorSnapshot::default();
        let patch: SnapshotPatch =
            serde_json::from_str(r#"{"theme":{"primaryColor":"#111111"}}"#).unwrap();
        let touched = snap.apply_patch(patch);

        assert_eq!(touched, vec![Slice::Theme]);
        assert_eq!(snap.theme.primary_color, "#111111");
        assert_eq!(snap.theme.secondary_color, "#ffdbd4");
        assert_eq!(snap.typography, TypographyState::default());
        assert_eq!(snap.layout, LayoutState::default());
    }

    #[test]
    fn test_patch_sections_in_snapshot_order() {
        let patch: SnapshotPatch = serde_json::from_str(
            r#"{"selectedMaterial":"silicon","typography":{"fontWeight":600},"layout":{"padding":12}}"#,
        )
        .unwrap();
        assert_eq!(
            patch.sections(),
            vec![Slice::Typography, Slice::Layout, Slice::SelectedMaterial]
        );
    }

    #[test]
    fn test_patch_unknown_keys_ignored() {
        let patch: SnapshotPatch = serde_json::from_str(
            r#"{"theme":{"primaryColor":"#222222","glow":true},"vendor":"acme"}"#,
        )
        .unwrap();
        assert_eq!(
            patch.theme,
            Some(ThemePatch {
                primary_color: Some("#222222".to_string()),
                secondary_color: None,
            })
        );
    }

    #[test]
    fn test_patch_wrong_shape_fails() {
        let result: Result<SnapshotPatch, _> = serde_json::from_str(r#"{"theme":42}"#);
        assert!(result.is_err());

        let result: Result<SnapshotPatch, _> =
            serde_json::from_str(r#"{"currentLayout":"layout9"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_patch_font_sizes_replace_wholesale() {
        let mut snap = EditorSnapshot::default();
        let patch: SnapshotPatch = serde_json::from_str(
            r#"{"typography":{"fontSizes":{"heading":30,"body":20,"small":12,"button":18}}}"#,
        )
        .unwrap();
        snap.apply_patch(patch);
        assert_eq!(snap.typography.font_sizes.heading, 30.0);
        assert_eq!(snap.typography.font_sizes.button, 18.0);
        // siblings of fontSizes untouched
        assert_eq!(snap.typography.font_family, "Poppins, sans-serif");
        assert_eq!(snap.typography.font_weight, 500);
    }

    #[test]
    fn test_patch_buttons_replace_map() {
        let mut snap = EditorSnapshot::default();
        let mut buttons = BTreeMap::new();
        buttons.insert("only".to_string(), ButtonStyle::default());
        let patch = SnapshotPatch {
            button: Some(ButtonStatePatch {
                buttons: Some(buttons),
                selected_button: None,
            }),
            ..Default::default()
        };
        snap.apply_patch(patch);
        assert_eq!(snap.button.buttons.len(), 1);
        assert!(snap.button.buttons.contains_key("only"));
        // selectedButton was absent from the patch
        assert_eq!(snap.button.selected_button, "addToCart");
    }

    #[test]
    fn test_full_export_reimports_identically() {
        let mut snap = EditorSnapshot::default();
        snap.gallery.spacing = 20;
        snap.materials.silicon.color = "#804040".to_string();
        snap.selected_material = MaterialSlot::Silicon;

        let json = serde_json::to_string_pretty(&snap).unwrap();
        let patch: SnapshotPatch = serde_json::from_str(&json).unwrap();
        let mut fresh = EditorSnapshot::default();
        fresh.apply_patch(patch);

        assert_eq!(fresh, snap);
    }

    #[test]
    fn test_empty_patch_touches_nothing() {
        let mut snap = EditorSnapshot::default();
        let before = snap.clone();
        let touched = snap.apply_patch(SnapshotPatch::default());
        assert!(touched.is_empty());
        assert_eq!(snap, before);
    }
}
