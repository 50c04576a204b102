//! Headless test harness for driving the studio without a window.
//!
//! Wraps the settings store and the preview cache together with a
//! recording listener, for integration tests of the edit, resolve and
//! notify cycle.

use std::cell::RefCell;
use std::rc::Rc;

use shared::{EditorSnapshot, Slice};

use crate::state::preview::PreviewState;
use crate::state::store::{ImportError, SettingsStore};
use crate::style::ResolvedStyles;

/// Headless studio: store, preview cache and a log of notifications.
pub struct StudioHarness {
    pub store: SettingsStore,
    pub preview: PreviewState,
    events: Rc<RefCell<Vec<Slice>>>,
}

impl StudioHarness {
    /// Harness with factory defaults and the recorder already subscribed.
    pub fn new() -> Self {
        let mut store = SettingsStore::new();
        let events = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&events);
        store.subscribe(move |slice, _| log.borrow_mut().push(slice));
        let preview = PreviewState::new(&mut store);
        Self {
            store,
            preview,
            events,
        }
    }

    // ── Documents ─────────────────────────────────────────────

    /// Export the current settings as JSON
    pub fn export_json(&self) -> String {
        serde_json::to_string_pretty(&self.store.export()).unwrap_or_default()
    }

    /// Import a settings document from a JSON string
    pub fn import_json(&mut self, json: &str) -> Result<(), ImportError> {
        self.store.import_json(json)
    }

    /// Reset every slice to factory defaults
    pub fn reset(&mut self) {
        self.store.reset();
    }

    pub fn snapshot(&self) -> &EditorSnapshot {
        self.store.snapshot()
    }

    // ── Styles ────────────────────────────────────────────────

    /// Current resolved styles, refreshing the preview cache first
    pub fn styles(&mut self) -> &ResolvedStyles {
        self.preview.refresh(&self.store);
        self.preview.styles()
    }

    // ── Notifications ─────────────────────────────────────────

    /// Slices notified since the last call, in dispatch order
    pub fn take_events(&mut self) -> Vec<Slice> {
        std::mem::take(&mut *self.events.borrow_mut())
    }
}

impl Default for StudioHarness {
    fn default() -> Self {
        Self::new()
    }
}
