//! The settings store: single source of truth for every visual setting.
//!
//! Panels read through the getters and write through the typed update
//! operations; registered listeners are invoked synchronously before a
//! setter returns, so a read anywhere in the same frame already sees the
//! new value.

use shared::{
    Alignment, ButtonState, ButtonStyle, EditorSnapshot, FontRole, FontSizes, GalleryState,
    LayoutState, LayoutVariant, MaterialSet, MaterialSlot, ShadowLevel, Slice, SnapshotPatch,
    ThemeState, TypographyState, DEFAULT_BUTTON_ID,
};

/// Handle returned by [`SettingsStore::subscribe`]
pub type ListenerId = u64;

type ListenerFn = Box<dyn FnMut(Slice, &EditorSnapshot)>;

struct Listener {
    id: ListenerId,
    callback: ListenerFn,
}

/// Single-field update of the typography slice
#[derive(Debug, Clone, PartialEq)]
pub enum TypographyUpdate {
    FontFamily(String),
    /// Replaces all four role sizes
    FontSizes(FontSizes),
    SelectedRole(FontRole),
    FontWeight(u16),
}

/// Single-field update of one button style
#[derive(Debug, Clone, PartialEq)]
pub enum ButtonUpdate {
    BgColor(String),
    TextColor(String),
    Radius(u8),
    Shadow(ShadowLevel),
    Alignment(Alignment),
}

/// Single-field update of the layout slice
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutUpdate {
    BgColor(String),
    Padding(u8),
    CardRadius(u8),
    BorderEnabled(bool),
    BorderWidth(u8),
    BorderColor(String),
}

/// Single-field update of the gallery slice
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryUpdate {
    Alignment(Alignment),
    Spacing(u8),
    BorderRadius(u8),
}

/// Single-field update of the theme slice
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeUpdate {
    PrimaryColor(String),
    SecondaryColor(String),
}

/// Why an import was rejected
#[derive(Debug)]
pub enum ImportError {
    /// The file could not be read
    Read(std::io::Error),
    /// The contents were not a valid settings document
    Parse(serde_json::Error),
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Read(e) => write!(f, "could not read settings file: {}", e),
            ImportError::Parse(e) => write!(f, "not a valid settings document: {}", e),
        }
    }
}

impl std::error::Error for ImportError {}

/// Reactive container for the whole editor snapshot.
///
/// Owned by the app state and passed by reference into panels; mutations
/// only ever happen on the UI thread.
pub struct SettingsStore {
    snapshot: EditorSnapshot,
    /// Fixed reset target, captured at creation
    defaults: EditorSnapshot,
    listeners: Vec<Listener>,
    next_listener_id: ListenerId,
    version: u64,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self {
            snapshot: EditorSnapshot::default(),
            defaults: EditorSnapshot::default(),
            listeners: Vec::new(),
            next_listener_id: 1,
            version: 0,
        }
    }

    // ── Reads ──

    pub fn snapshot(&self) -> &EditorSnapshot {
        &self.snapshot
    }

    /// Bumped on every change notification; cheap staleness check for
    /// derived caches.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn typography(&self) -> &TypographyState {
        &self.snapshot.typography
    }

    pub fn button(&self) -> &ButtonState {
        &self.snapshot.button
    }

    pub fn layout(&self) -> &LayoutState {
        &self.snapshot.layout
    }

    pub fn gallery(&self) -> &GalleryState {
        &self.snapshot.gallery
    }

    pub fn theme(&self) -> &ThemeState {
        &self.snapshot.theme
    }

    pub fn current_layout(&self) -> LayoutVariant {
        self.snapshot.current_layout
    }

    pub fn materials(&self) -> &MaterialSet {
        &self.snapshot.materials
    }

    pub fn selected_material(&self) -> MaterialSlot {
        self.snapshot.selected_material
    }

    /// Style for a button id. Unknown ids resolve to the default button so
    /// callers never have to handle a miss; the miss is logged because it
    /// usually means a typo at the call site.
    pub fn button_style(&self, id: &str) -> &ButtonStyle {
        if let Some(style) = self.snapshot.button.buttons.get(id) {
            return style;
        }
        tracing::warn!(button = id, "unknown button id, using {}", DEFAULT_BUTTON_ID);
        if let Some(style) = self.snapshot.button.buttons.get(DEFAULT_BUTTON_ID) {
            return style;
        }
        // An import can drop the default entry; the baked-in defaults
        // always have it.
        &self.defaults.button.buttons[DEFAULT_BUTTON_ID]
    }

    /// Style of the button currently picked in the editor
    pub fn selected_button_style(&self) -> &ButtonStyle {
        self.button_style(self.snapshot.button.selected_button.as_str())
    }

    // ── Writes ──

    pub fn set_typography(&mut self, update: TypographyUpdate) {
        match update {
            TypographyUpdate::FontFamily(v) => self.snapshot.typography.font_family = v,
            TypographyUpdate::FontSizes(v) => self.snapshot.typography.font_sizes = v,
            TypographyUpdate::SelectedRole(v) => {
                self.snapshot.typography.selected_font_size_type = v
            }
            TypographyUpdate::FontWeight(v) => self.snapshot.typography.font_weight = v,
        }
        self.notify(Slice::Typography);
    }

    /// Update one field of one button style. Writing to an id that has no
    /// entry creates it from [`ButtonStyle::default`] first.
    pub fn set_button(&mut self, id: &str, update: ButtonUpdate) {
        let style = self
            .snapshot
            .button
            .buttons
            .entry(id.to_string())
            .or_default();
        match update {
            ButtonUpdate::BgColor(v) => style.bg_color = v,
            ButtonUpdate::TextColor(v) => style.text_color = v,
            ButtonUpdate::Radius(v) => style.radius = v,
            ButtonUpdate::Shadow(v) => style.shadow = v,
            ButtonUpdate::Alignment(v) => style.alignment = v,
        }
        self.notify(Slice::Button);
    }

    pub fn select_button(&mut self, id: impl Into<String>) {
        self.snapshot.button.selected_button = id.into();
        self.notify(Slice::Button);
    }

    pub fn set_layout(&mut self, update: LayoutUpdate) {
        match update {
            LayoutUpdate::BgColor(v) => self.snapshot.layout.bg_color = v,
            LayoutUpdate::Padding(v) => self.snapshot.layout.padding = v,
            LayoutUpdate::CardRadius(v) => self.snapshot.layout.card_radius = v,
            LayoutUpdate::BorderEnabled(v) => self.snapshot.layout.border_enabled = v,
            LayoutUpdate::BorderWidth(v) => self.snapshot.layout.border_width = v,
            LayoutUpdate::BorderColor(v) => self.snapshot.layout.border_color = v,
        }
        self.notify(Slice::Layout);
    }

    pub fn set_gallery(&mut self, update: GalleryUpdate) {
        match update {
            GalleryUpdate::Alignment(v) => self.snapshot.gallery.alignment = v,
            GalleryUpdate::Spacing(v) => self.snapshot.gallery.spacing = v,
            GalleryUpdate::BorderRadius(v) => self.snapshot.gallery.border_radius = v,
        }
        self.notify(Slice::Gallery);
    }

    pub fn set_theme(&mut self, update: ThemeUpdate) {
        match update {
            ThemeUpdate::PrimaryColor(v) => self.snapshot.theme.primary_color = v,
            ThemeUpdate::SecondaryColor(v) => self.snapshot.theme.secondary_color = v,
        }
        self.notify(Slice::Theme);
    }

    pub fn set_material_color(&mut self, slot: MaterialSlot, color: impl Into<String>) {
        self.snapshot.materials.get_mut(slot).color = color.into();
        self.notify(Slice::Materials);
    }

    pub fn select_material(&mut self, slot: MaterialSlot) {
        self.snapshot.selected_material = slot;
        self.notify(Slice::SelectedMaterial);
    }

    pub fn switch_layout(&mut self, variant: LayoutVariant) {
        self.snapshot.current_layout = variant;
        self.notify(Slice::CurrentLayout);
    }

    // ── Subscriptions ──

    /// Register a listener invoked synchronously after every change, with
    /// the changed section and the post-change snapshot.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(Slice, &EditorSnapshot) + 'static,
    ) -> ListenerId {
        let id = self.next_listener_id;
        self.next_listener_id += 1;
        self.listeners.push(Listener {
            id,
            callback: Box::new(callback),
        });
        id
    }

    /// Drop a listener; returns false when the id was already gone
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        self.listeners.len() < before
    }

    // ── Bulk operations ──

    /// Deep copy of the current snapshot, detached from the store
    pub fn export(&self) -> EditorSnapshot {
        self.snapshot.clone()
    }

    /// Merge a partial settings document; one notification per section
    /// present, in snapshot order.
    pub fn import(&mut self, patch: SnapshotPatch) {
        let touched = self.snapshot.apply_patch(patch);
        for slice in touched {
            self.notify(slice);
        }
    }

    /// Parse and merge a settings document. On a parse failure the
    /// snapshot is left untouched and the error is returned for the UI
    /// to surface.
    pub fn import_json(&mut self, json: &str) -> Result<(), ImportError> {
        let patch: SnapshotPatch = serde_json::from_str(json).map_err(ImportError::Parse)?;
        self.import(patch);
        Ok(())
    }

    /// Restore the canonical defaults and notify every section
    pub fn reset(&mut self) {
        self.snapshot = self.defaults.clone();
        for slice in Slice::all() {
            self.notify(*slice);
        }
    }

    fn notify(&mut self, slice: Slice) {
        self.version += 1;
        let snapshot = &self.snapshot;
        for listener in &mut self.listeners {
            (listener.callback)(slice, snapshot);
        }
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}
