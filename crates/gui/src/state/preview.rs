//! State behind the live preview: a cached style resolution that is
//! rebuilt when the store notifies a relevant change, plus the
//! shopper-facing selections that are not part of the settings document.

use std::cell::Cell;
use std::rc::Rc;

use shared::Slice;

use crate::catalog::{self, Finish, FinishCategory};
use crate::state::store::{ListenerId, SettingsStore};
use crate::style::ResolvedStyles;

/// Camera commands queued by the preview's control buttons and drained
/// by the viewport once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerAction {
    ZoomIn,
    ZoomOut,
    Frame,
    ResetCamera,
    ToggleFullscreen,
}

/// Arm variant offered in the first accordion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArmType {
    #[default]
    Fixed,
    Movable,
}

impl ArmType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fixed => "Fixed Arms",
            Self::Movable => "Movable Arms",
        }
    }
}

/// Shopper accordions in the preview card, at most one open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewAccordion {
    Arms,
    ArmsFinish,
    LegsFinish,
}

pub struct PreviewState {
    styles: ResolvedStyles,
    dirty: Rc<Cell<bool>>,
    listener: ListenerId,
    pub open_accordion: Option<PreviewAccordion>,
    pub arm_type: ArmType,
    pub active_category: &'static FinishCategory,
    pub selected_finish: &'static Finish,
    pub active_legs_category: &'static FinishCategory,
    pub selected_legs_finish: &'static Finish,
    pending_actions: Vec<ViewerAction>,
}

impl PreviewState {
    /// Build the initial style cache and subscribe for invalidation.
    /// Material edits only move the 3D tint, so they do not mark the
    /// styles dirty.
    pub fn new(store: &mut SettingsStore) -> Self {
        let dirty = Rc::new(Cell::new(false));
        let flag = Rc::clone(&dirty);
        let listener = store.subscribe(move |slice, _| {
            if !matches!(slice, Slice::Materials | Slice::SelectedMaterial) {
                flag.set(true);
            }
        });
        Self {
            styles: ResolvedStyles::from_snapshot(store.snapshot()),
            dirty,
            listener,
            open_accordion: None,
            arm_type: ArmType::default(),
            active_category: &catalog::ARM_FINISH_CATEGORIES[0],
            selected_finish: &catalog::ARM_FINISH_CATEGORIES[0].finishes[0],
            active_legs_category: &catalog::LEG_FINISH_CATEGORIES[0],
            selected_legs_finish: &catalog::LEG_FINISH_CATEGORIES[0].finishes[0],
            pending_actions: Vec::new(),
        }
    }

    /// Rebuild the cached styles if anything relevant changed since the
    /// last call. Returns whether a rebuild happened.
    pub fn refresh(&mut self, store: &SettingsStore) -> bool {
        if self.dirty.replace(false) {
            self.styles = ResolvedStyles::from_snapshot(store.snapshot());
            true
        } else {
            false
        }
    }

    pub fn styles(&self) -> &ResolvedStyles {
        &self.styles
    }

    pub fn toggle_accordion(&mut self, accordion: PreviewAccordion) {
        self.open_accordion = if self.open_accordion == Some(accordion) {
            None
        } else {
            Some(accordion)
        };
    }

    pub fn push_action(&mut self, action: ViewerAction) {
        self.pending_actions.push(action);
    }

    /// Drain queued camera commands in the order they were pressed.
    pub fn take_actions(&mut self) -> Vec<ViewerAction> {
        std::mem::take(&mut self.pending_actions)
    }

    /// Remove the store subscription. The preview keeps its last styles
    /// but stops noticing changes.
    pub fn detach(&mut self, store: &mut SettingsStore) -> bool {
        store.unsubscribe(self.listener)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::store::ThemeUpdate;
    use shared::MaterialSlot;

    #[test]
    fn test_styles_start_clean() {
        let mut store = SettingsStore::new();
        let mut preview = PreviewState::new(&mut store);
        assert!(!preview.refresh(&store));
    }

    #[test]
    fn test_theme_change_rebuilds_styles() {
        let mut store = SettingsStore::new();
        let mut preview = PreviewState::new(&mut store);

        store.set_theme(ThemeUpdate::PrimaryColor("#112233".to_string()));
        assert!(preview.refresh(&store));
        assert_eq!(
            preview.styles().primary,
            egui::Color32::from_rgb(0x11, 0x22, 0x33)
        );
        // nothing new since the rebuild
        assert!(!preview.refresh(&store));
    }

    #[test]
    fn test_material_change_does_not_rebuild_styles() {
        let mut store = SettingsStore::new();
        let mut preview = PreviewState::new(&mut store);

        store.set_material_color(MaterialSlot::Leather, "#123456");
        store.select_material(MaterialSlot::Silicon);
        assert!(!preview.refresh(&store));
    }

    #[test]
    fn test_detach_stops_invalidation() {
        let mut store = SettingsStore::new();
        let mut preview = PreviewState::new(&mut store);
        assert!(preview.detach(&mut store));

        store.set_theme(ThemeUpdate::PrimaryColor("#112233".to_string()));
        assert!(!preview.refresh(&store));
    }

    #[test]
    fn test_accordion_toggles_exclusively() {
        let mut store = SettingsStore::new();
        let mut preview = PreviewState::new(&mut store);

        preview.toggle_accordion(PreviewAccordion::Arms);
        assert_eq!(preview.open_accordion, Some(PreviewAccordion::Arms));
        preview.toggle_accordion(PreviewAccordion::LegsFinish);
        assert_eq!(preview.open_accordion, Some(PreviewAccordion::LegsFinish));
        preview.toggle_accordion(PreviewAccordion::LegsFinish);
        assert_eq!(preview.open_accordion, None);
    }

    #[test]
    fn test_actions_drain_in_order() {
        let mut store = SettingsStore::new();
        let mut preview = PreviewState::new(&mut store);

        preview.push_action(ViewerAction::ZoomIn);
        preview.push_action(ViewerAction::Frame);
        assert_eq!(
            preview.take_actions(),
            vec![ViewerAction::ZoomIn, ViewerAction::Frame]
        );
        assert!(preview.take_actions().is_empty());
    }

    #[test]
    fn test_default_shopper_selections() {
        let mut store = SettingsStore::new();
        let preview = PreviewState::new(&mut store);

        assert_eq!(preview.arm_type, ArmType::Fixed);
        assert_eq!(preview.active_category.name, "LEATHER");
        assert_eq!(preview.selected_finish.name, "Charcoal Brown");
        assert_eq!(preview.active_legs_category.name, "Steel");
        assert_eq!(preview.selected_legs_finish.name, "Polished Steel");
        assert_eq!(preview.open_accordion, None);
    }
}
