//! UI state of the editor panel: which accordion section is open and
//! in-progress hex text edits not yet committed to the store.

use std::collections::HashMap;

/// Accordion sections of the editor panel, at most one open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorSection {
    Layout,
    Typography,
    Buttons,
    Gallery,
    Theme,
    GeneralLayout,
    Border,
    Material,
}

impl EditorSection {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Layout => "Layout",
            Self::Typography => "Typography",
            Self::Buttons => "Buttons",
            Self::Gallery => "Gallery",
            Self::Theme => "Theme",
            Self::GeneralLayout => "General Layout",
            Self::Border => "Border",
            Self::Material => "Material",
        }
    }

    pub fn all() -> Vec<EditorSection> {
        vec![
            Self::Layout,
            Self::Typography,
            Self::Buttons,
            Self::Gallery,
            Self::Theme,
            Self::GeneralLayout,
            Self::Border,
            Self::Material,
        ]
    }
}

/// Font families offered by the typography section: (label, stored value).
pub const FONT_FAMILIES: [(&str, &str); 6] = [
    ("Roboto", "Roboto, sans-serif"),
    ("Inter", "Inter, sans-serif"),
    ("Poppins", "Poppins, sans-serif"),
    ("Montserrat", "Montserrat, sans-serif"),
    ("Open Sans", "Open Sans, sans-serif"),
    ("Lato", "Lato, sans-serif"),
];

/// Combo label for a stored family value. Unknown values (from imported
/// documents) are shown as-is.
pub fn font_family_label(value: &str) -> &str {
    FONT_FAMILIES
        .iter()
        .find(|(_, stored)| *stored == value)
        .map(|(label, _)| *label)
        .unwrap_or(value)
}

#[derive(Default)]
pub struct EditorPanelState {
    pub open_section: Option<EditorSection>,
    /// Live text of hex fields that are being edited, keyed by field name.
    /// A field with no entry shows the stored color.
    hex_edits: HashMap<String, String>,
}

impl EditorPanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a section, closing whichever was open; clicking the open
    /// section closes it.
    pub fn toggle_section(&mut self, section: EditorSection) {
        self.open_section = if self.open_section == Some(section) {
            None
        } else {
            Some(section)
        };
    }

    pub fn is_open(&self, section: EditorSection) -> bool {
        self.open_section == Some(section)
    }

    /// Text a hex field should display: the in-progress edit if there is
    /// one, the stored value otherwise.
    pub fn hex_text(&self, key: &str, stored: &str) -> String {
        self.hex_edits
            .get(key)
            .cloned()
            .unwrap_or_else(|| stored.to_string())
    }

    pub fn set_hex_text(&mut self, key: &str, text: String) {
        self.hex_edits.insert(key.to_string(), text);
    }

    /// Drop the in-progress edit so the field resyncs to the store.
    pub fn clear_hex_text(&mut self, key: &str) {
        self.hex_edits.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_section_is_exclusive() {
        let mut editor = EditorPanelState::new();
        assert_eq!(editor.open_section, None);

        editor.toggle_section(EditorSection::Theme);
        assert!(editor.is_open(EditorSection::Theme));

        editor.toggle_section(EditorSection::Gallery);
        assert!(editor.is_open(EditorSection::Gallery));
        assert!(!editor.is_open(EditorSection::Theme));

        editor.toggle_section(EditorSection::Gallery);
        assert_eq!(editor.open_section, None);
    }

    #[test]
    fn test_hex_text_falls_back_to_stored() {
        let mut editor = EditorPanelState::new();
        assert_eq!(editor.hex_text("theme.primary", "#c6614d"), "#c6614d");

        editor.set_hex_text("theme.primary", "#c6".to_string());
        assert_eq!(editor.hex_text("theme.primary", "#c6614d"), "#c6");

        editor.clear_hex_text("theme.primary");
        assert_eq!(editor.hex_text("theme.primary", "#c6614d"), "#c6614d");
    }

    #[test]
    fn test_hex_edits_are_keyed_per_field() {
        let mut editor = EditorPanelState::new();
        editor.set_hex_text("layout.bg", "#12".to_string());
        assert_eq!(editor.hex_text("theme.primary", "#c6614d"), "#c6614d");
    }

    #[test]
    fn test_font_family_label() {
        assert_eq!(font_family_label("Poppins, sans-serif"), "Poppins");
        assert_eq!(font_family_label("Comic Sans MS"), "Comic Sans MS");
    }

    #[test]
    fn test_section_titles_unique() {
        let sections = EditorSection::all();
        for (i, a) in sections.iter().enumerate() {
            for b in sections.iter().skip(i + 1) {
                assert_ne!(a.title(), b.title());
            }
        }
    }
}
