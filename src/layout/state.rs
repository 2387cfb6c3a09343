//! Layout state store.
//!
//! Holds the responsive layout state (breakpoint, mode, pane collapse and
//! focus) and embeds the [`NavigationState`]. All mutation goes through the
//! store's methods; an instance is owned by one widget session.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::breakpoints::{Breakpoint, LayoutMode, Resolver};
use super::config::{LayoutConfig, LayoutTable, PaneWidths};
use crate::navigation::{FlowType, NavigationHistoryItem, NavigationState, PaneSnapshot};

/// Width the store assumes until the host reports one.
pub const DEFAULT_SCREEN_WIDTH: i32 = 1440;

/// One of the two UI regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pane {
    /// Interactive chat pane.
    Left,
    /// Preview pane.
    Right,
}

impl Pane {
    pub fn other(self) -> Pane {
        match self {
            Pane::Left => Pane::Right,
            Pane::Right => Pane::Left,
        }
    }
}

impl fmt::Display for Pane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pane::Left => f.write_str("left"),
            Pane::Right => f.write_str("right"),
        }
    }
}

/// Which panes are on screen, and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "arrangement", rename_all = "kebab-case")]
pub enum VisiblePanes {
    /// Side by side (dual-pane).
    SideBySide { left: bool, right: bool },
    /// Left pane only, with the right pane optionally overlaid on top.
    Overlay { right_overlay: bool },
    /// Vertically stacked (mobile).
    Stacked { left: bool, right: bool },
}

impl VisiblePanes {
    pub fn shows(&self, pane: Pane) -> bool {
        match (*self, pane) {
            (VisiblePanes::SideBySide { left, .. }, Pane::Left)
            | (VisiblePanes::Stacked { left, .. }, Pane::Left) => left,
            (VisiblePanes::SideBySide { right, .. }, Pane::Right)
            | (VisiblePanes::Stacked { right, .. }, Pane::Right) => right,
            (VisiblePanes::Overlay { .. }, Pane::Left) => true,
            (VisiblePanes::Overlay { right_overlay }, Pane::Right) => right_overlay,
        }
    }
}

/// The persisted subset of the layout state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PanePreferences {
    pub left_pane_collapsed: bool,
    pub right_pane_collapsed: bool,
    pub focused_pane: Option<Pane>,
}

/// Layout state plus embedded navigation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutState {
    pub screen_width: i32,
    pub current_breakpoint: Breakpoint,
    pub current_mode: LayoutMode,
    pub is_dual_pane: bool,
    pub is_mobile_view: bool,
    pub layout_config: LayoutConfig,
    pub left_pane_collapsed: bool,
    pub right_pane_collapsed: bool,
    pub focused_pane: Option<Pane>,
    pub navigation: NavigationState,
}

/// Store owning a [`LayoutState`] and the tables used to derive it.
#[derive(Debug, Clone)]
pub struct LayoutStore {
    state: LayoutState,
    resolver: Resolver,
    table: LayoutTable,
}

impl Default for LayoutStore {
    fn default() -> Self {
        Self::new(Resolver::default(), LayoutTable::default(), DEFAULT_SCREEN_WIDTH)
    }
}

impl LayoutStore {
    /// Create a store and apply `initial_width` as the first screen width.
    ///
    /// The right pane starts collapsed when the starting tier hides it by
    /// default; it can still be toggled open afterwards.
    pub fn new(resolver: Resolver, table: LayoutTable, initial_width: i32) -> Self {
        let resolution = resolver.resolve(initial_width);
        let layout_config = *table.config_for(resolution.breakpoint);
        let mut store = Self {
            state: LayoutState {
                screen_width: initial_width,
                current_breakpoint: resolution.breakpoint,
                current_mode: resolution.mode,
                is_dual_pane: resolution.mode == LayoutMode::DualPane,
                is_mobile_view: resolution.mode == LayoutMode::MobileStack,
                layout_config,
                left_pane_collapsed: !layout_config.left_pane.visible_by_default,
                right_pane_collapsed: !layout_config.right_pane.visible_by_default,
                focused_pane: None,
                navigation: NavigationState::new(),
            },
            resolver,
            table,
        };
        store.set_screen_width(initial_width);
        store
    }

    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.state.navigation
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub fn table(&self) -> &LayoutTable {
        &self.table
    }

    // ========================================================================
    // Screen size
    // ========================================================================

    /// Recompute every width-derived field at once.
    ///
    /// Entering single-pane mode collapses the right pane and clears focus.
    /// The collapse is sticky: widening back to dual-pane does not reopen
    /// the right pane.
    pub fn set_screen_width(&mut self, width: i32) {
        let resolution = self.resolver.resolve(width);
        let state = &mut self.state;

        if resolution.breakpoint != state.current_breakpoint || resolution.mode != state.current_mode {
            tracing::debug!(
                width,
                breakpoint = %resolution.breakpoint,
                mode = %resolution.mode,
                "layout tier changed"
            );
        }

        state.screen_width = width;
        state.current_breakpoint = resolution.breakpoint;
        state.current_mode = resolution.mode;
        state.is_dual_pane = resolution.mode == LayoutMode::DualPane;
        state.is_mobile_view = resolution.mode == LayoutMode::MobileStack;
        state.layout_config = *self.table.config_for(resolution.breakpoint);

        if resolution.mode == LayoutMode::SinglePane {
            state.right_pane_collapsed = true;
            state.focused_pane = None;
        }
    }

    // ========================================================================
    // Panes
    // ========================================================================

    pub fn toggle_left_pane(&mut self) {
        self.state.left_pane_collapsed = !self.state.left_pane_collapsed;
    }

    pub fn toggle_right_pane(&mut self) {
        self.state.right_pane_collapsed = !self.state.right_pane_collapsed;
    }

    pub fn set_focused_pane(&mut self, pane: Option<Pane>) {
        self.state.focused_pane = pane;
    }

    /// Set one pane's collapsed flag directly.
    pub fn collapse_pane(&mut self, pane: Pane, collapsed: bool) {
        match pane {
            Pane::Left => self.state.left_pane_collapsed = collapsed,
            Pane::Right => self.state.right_pane_collapsed = collapsed,
        }
    }

    pub fn is_collapsed(&self, pane: Pane) -> bool {
        match pane {
            Pane::Left => self.state.left_pane_collapsed,
            Pane::Right => self.state.right_pane_collapsed,
        }
    }

    /// Current pane snapshot, as recorded in history items.
    pub fn pane_snapshot(&self) -> PaneSnapshot {
        PaneSnapshot {
            left_collapsed: self.state.left_pane_collapsed,
            right_collapsed: self.state.right_pane_collapsed,
            focused_pane: self.state.focused_pane,
        }
    }

    pub fn visible_panes(&self) -> VisiblePanes {
        let state = &self.state;
        match state.current_mode {
            LayoutMode::DualPane => VisiblePanes::SideBySide {
                left: !state.left_pane_collapsed,
                right: !state.right_pane_collapsed,
            },
            LayoutMode::SinglePane => VisiblePanes::Overlay {
                right_overlay: !state.right_pane_collapsed,
            },
            LayoutMode::MobileStack => VisiblePanes::Stacked {
                left: !state.left_pane_collapsed,
                right: !state.right_pane_collapsed,
            },
        }
    }

    /// Pixel widths for the current screen width and pane visibility.
    ///
    /// Only side-by-side arrangements split the width; overlays and stacks
    /// give each shown pane the full width.
    pub fn pane_widths(&self) -> PaneWidths {
        let container = self.state.screen_width.max(0) as u32;
        match self.visible_panes() {
            VisiblePanes::SideBySide { left, right } => {
                self.state.layout_config.pane_widths(container, left, right)
            }
            VisiblePanes::Overlay { right_overlay } => PaneWidths {
                left: container,
                right: if right_overlay { container } else { 0 },
            },
            VisiblePanes::Stacked { left, right } => PaneWidths {
                left: if left { container } else { 0 },
                right: if right { container } else { 0 },
            },
        }
    }

    // ========================================================================
    // Preferences
    // ========================================================================

    pub fn pane_preferences(&self) -> PanePreferences {
        PanePreferences {
            left_pane_collapsed: self.state.left_pane_collapsed,
            right_pane_collapsed: self.state.right_pane_collapsed,
            focused_pane: self.state.focused_pane,
        }
    }

    /// Apply persisted preferences, then re-run the single-pane rules so a
    /// saved preference cannot reopen a pane the current width collapses.
    pub fn apply_preferences(&mut self, prefs: PanePreferences) {
        self.state.left_pane_collapsed = prefs.left_pane_collapsed;
        self.state.right_pane_collapsed = prefs.right_pane_collapsed;
        self.state.focused_pane = prefs.focused_pane;
        let width = self.state.screen_width;
        self.set_screen_width(width);
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    pub fn navigate_to_stage(&mut self, stage: impl Into<String>, flow: Option<FlowType>) {
        let snapshot = self.pane_snapshot();
        self.state
            .navigation
            .navigate_to_stage_with(stage, flow, snapshot);
    }

    pub fn navigate_back(&mut self) -> Option<NavigationHistoryItem> {
        self.state.navigation.navigate_back()
    }

    pub fn reset_navigation(&mut self) {
        self.state.navigation.reset_navigation();
    }

    /// Relabel the current flow without recording a navigation.
    pub fn set_current_flow(&mut self, flow: FlowType) {
        self.state.navigation.set_current_flow(flow);
    }

    /// Expand both panes, clear focus and reset navigation, keeping the last
    /// known screen width.
    pub fn reset_layout(&mut self) {
        self.state.left_pane_collapsed = false;
        self.state.right_pane_collapsed = false;
        self.state.focused_pane = None;
        self.reset_navigation();
        let width = self.state.screen_width;
        self.set_screen_width(width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_at(width: i32) -> LayoutStore {
        LayoutStore::new(Resolver::default(), LayoutTable::default(), width)
    }

    #[test]
    fn test_default_store_is_dual_pane() {
        let store = LayoutStore::default();
        let state = store.state();
        assert_eq!(state.current_breakpoint, Breakpoint::Lg);
        assert_eq!(state.current_mode, LayoutMode::DualPane);
        assert!(state.is_dual_pane);
        assert!(!state.is_mobile_view);
        assert!(!state.right_pane_collapsed);
    }

    #[test]
    fn test_initial_single_pane_width_collapses_right() {
        let store = store_at(900);
        assert_eq!(store.state().current_mode, LayoutMode::SinglePane);
        assert!(store.state().right_pane_collapsed);
    }

    #[test]
    fn test_resize_sequence_right_collapse_is_sticky() {
        let mut store = store_at(1500);
        assert_eq!(store.state().current_breakpoint, Breakpoint::Lg);
        assert_eq!(store.state().current_mode, LayoutMode::DualPane);
        assert!(!store.state().right_pane_collapsed);

        store.set_screen_width(800);
        assert_eq!(store.state().current_mode, LayoutMode::SinglePane);
        assert!(store.state().right_pane_collapsed);

        store.set_screen_width(1000);
        assert!(store.state().right_pane_collapsed);

        store.set_screen_width(1500);
        assert_eq!(store.state().current_mode, LayoutMode::DualPane);
        assert!(store.state().right_pane_collapsed);
    }

    #[test]
    fn test_single_pane_clears_focus() {
        let mut store = store_at(1500);
        store.set_focused_pane(Some(Pane::Right));
        store.set_screen_width(800);
        assert_eq!(store.state().focused_pane, None);
    }

    #[test]
    fn test_mobile_stack_keeps_focus_and_right_flag() {
        let mut store = store_at(1500);
        store.set_focused_pane(Some(Pane::Left));
        store.set_screen_width(400);
        assert_eq!(store.state().current_mode, LayoutMode::MobileStack);
        assert!(store.state().is_mobile_view);
        assert_eq!(store.state().focused_pane, Some(Pane::Left));
        assert!(!store.state().right_pane_collapsed);
    }

    #[test]
    fn test_layout_config_follows_breakpoint() {
        let mut store = store_at(1500);
        store.set_screen_width(2000);
        assert_eq!(store.state().current_breakpoint, Breakpoint::Xxl);
        assert_eq!(
            store.state().layout_config,
            *LayoutTable::default().config_for(Breakpoint::Xxl)
        );
    }

    #[test]
    fn test_toggles_are_unconditional() {
        let mut store = store_at(1500);
        store.toggle_left_pane();
        assert!(store.state().left_pane_collapsed);
        store.toggle_right_pane();
        assert!(store.state().right_pane_collapsed);
        store.toggle_left_pane();
        store.toggle_right_pane();
        assert!(!store.state().left_pane_collapsed);
        assert!(!store.state().right_pane_collapsed);
    }

    #[test]
    fn test_collapse_pane_sets_by_identifier() {
        let mut store = store_at(1500);
        store.collapse_pane(Pane::Right, true);
        assert!(store.is_collapsed(Pane::Right));
        store.collapse_pane(Pane::Right, true);
        assert!(store.is_collapsed(Pane::Right));
        store.collapse_pane(Pane::Left, true);
        store.collapse_pane(Pane::Left, false);
        assert!(!store.is_collapsed(Pane::Left));
    }

    #[test]
    fn test_visible_panes_per_mode() {
        let mut store = store_at(1500);
        assert_eq!(
            store.visible_panes(),
            VisiblePanes::SideBySide { left: true, right: true }
        );

        store.set_screen_width(900);
        assert_eq!(store.visible_panes(), VisiblePanes::Overlay { right_overlay: false });
        store.toggle_right_pane();
        assert!(store.visible_panes().shows(Pane::Right));

        store.set_screen_width(500);
        assert_eq!(
            store.visible_panes(),
            VisiblePanes::Stacked { left: true, right: true }
        );
    }

    #[test]
    fn test_phone_store_starts_with_preview_hidden_and_toggles_it() {
        let mut store = store_at(500);
        assert_eq!(store.state().current_mode, LayoutMode::MobileStack);
        assert!(store.state().right_pane_collapsed);
        assert!(!store.visible_panes().shows(Pane::Right));

        let mut seen = Vec::new();
        for _ in 0..3 {
            store.toggle_right_pane();
            seen.push((store.state().right_pane_collapsed, store.visible_panes().shows(Pane::Right)));
        }
        assert_eq!(seen, [(false, true), (true, false), (false, true)]);
        assert_eq!(store.pane_widths(), PaneWidths { left: 500, right: 500 });
    }

    #[test]
    fn test_pane_widths_side_by_side() {
        let store = store_at(1500);
        let widths = store.pane_widths();
        assert_eq!(widths.left + widths.right, 1500 - 16);
    }

    #[test]
    fn test_navigation_records_pane_snapshot() {
        let mut store = store_at(1500);
        store.collapse_pane(Pane::Left, true);
        store.navigate_to_stage("selection", None);
        let item = &store.navigation().navigation_history[0];
        assert!(item.pane_state.left_collapsed);
        assert_eq!(item.stage, "welcome");
    }

    #[test]
    fn test_set_current_flow_is_not_navigation() {
        let mut store = store_at(1500);
        store.set_current_flow(FlowType::Favorites);
        assert_eq!(store.navigation().current_flow, FlowType::Favorites);
        assert!(store.navigation().navigation_history.is_empty());
    }

    #[test]
    fn test_apply_preferences_respects_single_pane() {
        let mut store = store_at(900);
        store.apply_preferences(PanePreferences {
            left_pane_collapsed: true,
            right_pane_collapsed: false,
            focused_pane: Some(Pane::Right),
        });
        assert!(store.state().left_pane_collapsed);
        assert!(store.state().right_pane_collapsed);
        assert_eq!(store.state().focused_pane, None);
    }

    #[test]
    fn test_reset_layout() {
        let mut store = store_at(1500);
        store.toggle_left_pane();
        store.toggle_right_pane();
        store.set_focused_pane(Some(Pane::Left));
        store.navigate_to_stage("selection", None);

        store.reset_layout();
        let state = store.state();
        assert!(!state.left_pane_collapsed);
        assert!(!state.right_pane_collapsed);
        assert_eq!(state.focused_pane, None);
        assert_eq!(state.navigation, NavigationState::default());
        assert_eq!(state.screen_width, 1500);
    }
}
