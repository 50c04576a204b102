pub mod editor;
pub mod preview;
pub mod store;

pub use editor::{EditorPanelState, EditorSection};
pub use preview::{PreviewAccordion, PreviewState, ViewerAction};
pub use store::SettingsStore;

/// Panel visibility flags
pub struct PanelVisibility {
    pub editor: bool,
    pub gallery: bool,
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self {
            editor: true,
            gallery: true,
        }
    }
}

/// Severity of a status-bar message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Transient message shown in the status bar after an editor action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

/// Combined application state
pub struct AppState {
    pub store: SettingsStore,
    pub editor: EditorPanelState,
    pub preview: PreviewState,
    pub panels: PanelVisibility,
    /// Outcome of the last export/import/reset, shown in the status bar
    pub notice: Option<Notice>,
}

impl Default for AppState {
    fn default() -> Self {
        let mut store = SettingsStore::new();
        let preview = PreviewState::new(&mut store);
        Self {
            store,
            editor: EditorPanelState::default(),
            preview,
            panels: PanelVisibility::default(),
            notice: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_app_state_is_wired() {
        let mut state = AppState::default();
        assert!(state.panels.editor);
        assert!(state.panels.gallery);
        assert!(state.notice.is_none());
        // the preview subscription is live from the start
        state
            .store
            .set_theme(store::ThemeUpdate::PrimaryColor("#000000".to_string()));
        assert!(state.preview.refresh(&state.store));
    }
}
