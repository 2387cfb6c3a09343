//! Navigation history store.
//!
//! Tracks where the user is in the ordering conversation as a
//! `(flow, stage)` pair plus an append-only stack of earlier positions.
//! Stages are opaque strings; the store never validates that a stage belongs
//! to a flow.

mod breadcrumbs;

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::layout::Pane;

pub use breadcrumbs::{breadcrumb_label, breadcrumbs, Breadcrumb};

/// Well-known stage identifiers.
pub mod stages {
    pub const WELCOME: &str = "welcome";
    pub const LOCATION: &str = "location";
    pub const SELECTION: &str = "selection";
    pub const CUSTOMIZATION: &str = "customization";
    pub const REVIEW: &str = "review";
    pub const CONFIRMATION: &str = "confirmation";
    pub const LIST: &str = "list";
    pub const HISTORY: &str = "history";
}

/// Top-level conversation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlowType {
    #[default]
    BowlBuilding,
    CartManagement,
    OrderReview,
    Favorites,
}

impl FlowType {
    pub const ALL: [FlowType; 4] = [
        FlowType::BowlBuilding,
        FlowType::CartManagement,
        FlowType::OrderReview,
        FlowType::Favorites,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            FlowType::BowlBuilding => "bowl-building",
            FlowType::CartManagement => "cart-management",
            FlowType::OrderReview => "order-review",
            FlowType::Favorites => "favorites",
        }
    }
}

impl fmt::Display for FlowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlowType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FlowType::ALL
            .into_iter()
            .find(|flow| flow.as_str() == s)
            .ok_or_else(|| {
                ConfigError::invalid_value(
                    "flow",
                    s,
                    "expected bowl-building, cart-management, order-review or favorites",
                )
            })
    }
}

/// Pane state captured alongside each history item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaneSnapshot {
    pub left_collapsed: bool,
    pub right_collapsed: bool,
    pub focused_pane: Option<Pane>,
}

/// A point-in-time record of where the user was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationHistoryItem {
    pub stage: String,
    pub flow: FlowType,
    pub timestamp: DateTime<Utc>,
    pub pane_state: PaneSnapshot,
}

/// Current position plus back-navigation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub current_flow: FlowType,
    pub current_stage: String,
    pub previous_stage: Option<String>,
    pub can_navigate_back: bool,
    pub navigation_history: Vec<NavigationHistoryItem>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current_flow: FlowType::BowlBuilding,
            current_stage: stages::WELCOME.to_string(),
            previous_stage: None,
            can_navigate_back: false,
            navigation_history: Vec::new(),
        }
    }
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the current position is `(flow, stage)`.
    pub fn is_at(&self, flow: FlowType, stage: &str) -> bool {
        self.current_flow == flow && self.current_stage == stage
    }

    /// Navigate forward with an empty pane snapshot.
    ///
    /// See [`NavigationState::navigate_to_stage_with`].
    pub fn navigate_to_stage(&mut self, stage: impl Into<String>, flow: Option<FlowType>) {
        self.navigate_to_stage_with(stage, flow, PaneSnapshot::default());
    }

    /// Push the current position onto the history and move to `stage`.
    ///
    /// `flow` defaults to the current flow. After this call
    /// `can_navigate_back` is always true.
    pub fn navigate_to_stage_with(
        &mut self,
        stage: impl Into<String>,
        flow: Option<FlowType>,
        pane_state: PaneSnapshot,
    ) {
        let stage = stage.into();
        let flow = flow.unwrap_or(self.current_flow);

        self.navigation_history.push(NavigationHistoryItem {
            stage: self.current_stage.clone(),
            flow: self.current_flow,
            timestamp: Utc::now(),
            pane_state,
        });

        tracing::debug!(
            from_flow = %self.current_flow,
            from_stage = %self.current_stage,
            to_flow = %flow,
            to_stage = %stage,
            depth = self.navigation_history.len(),
            "navigate to stage"
        );

        let old_stage = std::mem::replace(&mut self.current_stage, stage);
        self.previous_stage = Some(old_stage);
        self.current_flow = flow;
        self.can_navigate_back = true;
    }

    /// Pop the last history item and make it current.
    ///
    /// No-op (returns `None`) when back navigation is disabled or the
    /// history is empty. `can_navigate_back` is computed from the history
    /// length *before* the pop (`len > 1`), so a single forward navigation
    /// followed by a back navigation leaves it false even though nothing is
    /// left to pop either way, while two forward navigations followed by
    /// one back leave it true with one item remaining.
    pub fn navigate_back(&mut self) -> Option<NavigationHistoryItem> {
        if !self.can_navigate_back {
            return None;
        }
        let len_before_pop = self.navigation_history.len();
        let item = self.navigation_history.pop()?;

        let left_stage = std::mem::replace(&mut self.current_stage, item.stage.clone());
        self.previous_stage = Some(left_stage);
        self.current_flow = item.flow;
        self.can_navigate_back = len_before_pop > 1;

        tracing::debug!(
            flow = %self.current_flow,
            stage = %self.current_stage,
            depth = self.navigation_history.len(),
            "navigate back"
        );
        Some(item)
    }

    /// Return to bowl-building/welcome with no history.
    pub fn reset_navigation(&mut self) {
        *self = Self::default();
        tracing::debug!("navigation reset");
    }

    /// Relabel the current flow without touching history.
    ///
    /// Unlike [`NavigationState::navigate_to_stage`], this is not a
    /// navigation: nothing is pushed and `previous_stage` is unchanged.
    pub fn set_current_flow(&mut self, flow: FlowType) {
        self.current_flow = flow;
    }

    /// Breadcrumb trail for the current history.
    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        breadcrumbs(self)
    }
}
