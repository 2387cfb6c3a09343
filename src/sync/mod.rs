//! Conversation step ↔ navigation stage synchronization.
//!
//! The chatbot emits step identifiers ("signature-bowls", "cart-review",
//! ...). Navigation works in `(flow, stage)` pairs. Two static tables
//! translate between them:
//!
//! - forward: many steps may map to the same `(flow, stage)`
//! - inverse: exactly one step per `(flow, stage)`
//!
//! [`StepSynchronizer`] applies one direction per UI event and remembers the
//! last step it handled, so a step echoed back from a menu selection does
//! not navigate a second time.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::layout::LayoutStore;
use crate::navigation::{stages, FlowType};

/// A navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StageFlow {
    pub flow: FlowType,
    pub stage: &'static str,
}

impl StageFlow {
    pub const fn new(flow: FlowType, stage: &'static str) -> Self {
        Self { flow, stage }
    }
}

/// Target used for steps missing from the forward table.
pub const FALLBACK_STAGE_FLOW: StageFlow = StageFlow::new(FlowType::BowlBuilding, stages::WELCOME);

/// Known conversation step identifiers.
pub mod steps {
    pub const WELCOME: &str = "welcome";
    pub const LOCATION_SELECTION: &str = "location-selection";
    pub const SIGNATURE_BOWLS: &str = "signature-bowls";
    pub const BOWL_MENU: &str = "bowl-menu";
    pub const CREATE_YOUR_OWN: &str = "create-your-own";
    pub const CUSTOMIZE_SIGNATURE: &str = "customize-signature";
    pub const CART_REVIEW: &str = "cart-review";
    pub const UPSELL: &str = "upsell";
    pub const CHECKOUT: &str = "checkout";
    pub const ORDER_CONFIRMATION: &str = "order-confirmation";
    pub const FAVORITES: &str = "favorites";
    pub const ORDER_HISTORY: &str = "order-history";
}

const STEP_TABLE: &[(&str, StageFlow)] = &[
    (steps::WELCOME, StageFlow::new(FlowType::BowlBuilding, stages::WELCOME)),
    (steps::LOCATION_SELECTION, StageFlow::new(FlowType::BowlBuilding, stages::LOCATION)),
    (steps::SIGNATURE_BOWLS, StageFlow::new(FlowType::BowlBuilding, stages::SELECTION)),
    (steps::BOWL_MENU, StageFlow::new(FlowType::BowlBuilding, stages::SELECTION)),
    (steps::CREATE_YOUR_OWN, StageFlow::new(FlowType::BowlBuilding, stages::CUSTOMIZATION)),
    (steps::CUSTOMIZE_SIGNATURE, StageFlow::new(FlowType::BowlBuilding, stages::CUSTOMIZATION)),
    (steps::CART_REVIEW, StageFlow::new(FlowType::CartManagement, stages::REVIEW)),
    (steps::UPSELL, StageFlow::new(FlowType::CartManagement, stages::REVIEW)),
    (steps::CHECKOUT, StageFlow::new(FlowType::OrderReview, stages::REVIEW)),
    (steps::ORDER_CONFIRMATION, StageFlow::new(FlowType::OrderReview, stages::CONFIRMATION)),
    (steps::FAVORITES, StageFlow::new(FlowType::Favorites, stages::LIST)),
    (steps::ORDER_HISTORY, StageFlow::new(FlowType::Favorites, stages::HISTORY)),
];

const INVERSE_TABLE: &[(StageFlow, &str)] = &[
    (StageFlow::new(FlowType::BowlBuilding, stages::WELCOME), steps::WELCOME),
    (StageFlow::new(FlowType::BowlBuilding, stages::LOCATION), steps::LOCATION_SELECTION),
    (StageFlow::new(FlowType::BowlBuilding, stages::SELECTION), steps::SIGNATURE_BOWLS),
    (StageFlow::new(FlowType::BowlBuilding, stages::CUSTOMIZATION), steps::CREATE_YOUR_OWN),
    (StageFlow::new(FlowType::CartManagement, stages::REVIEW), steps::CART_REVIEW),
    (StageFlow::new(FlowType::OrderReview, stages::REVIEW), steps::CHECKOUT),
    (StageFlow::new(FlowType::OrderReview, stages::CONFIRMATION), steps::ORDER_CONFIRMATION),
    (StageFlow::new(FlowType::Favorites, stages::LIST), steps::FAVORITES),
    (StageFlow::new(FlowType::Favorites, stages::HISTORY), steps::ORDER_HISTORY),
];

static STEP_INDEX: Lazy<HashMap<&'static str, StageFlow>> =
    Lazy::new(|| STEP_TABLE.iter().copied().collect());

static INVERSE_INDEX: Lazy<HashMap<FlowType, HashMap<&'static str, &'static str>>> =
    Lazy::new(|| {
        let mut index: HashMap<FlowType, HashMap<&'static str, &'static str>> = HashMap::new();
        for (target, step) in INVERSE_TABLE {
            index.entry(target.flow).or_default().insert(target.stage, *step);
        }
        index
    });

/// Forward lookup: conversation step → navigation target.
pub fn step_to_stage_flow(step: &str) -> Option<StageFlow> {
    STEP_INDEX.get(step).copied()
}

/// Inverse lookup: navigation target → canonical conversation step.
pub fn stage_flow_to_step(flow: FlowType, stage: &str) -> Option<&'static str> {
    INVERSE_INDEX
        .get(&flow)
        .and_then(|by_stage| by_stage.get(stage))
        .copied()
}

/// All known steps in table order.
pub fn known_steps() -> impl Iterator<Item = &'static str> {
    STEP_TABLE.iter().map(|(step, _)| *step)
}

/// What a synchronization call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The store navigated to the target.
    Navigated(StageFlow),
    /// The store was already at the target.
    AlreadyCurrent(StageFlow),
    /// The step was the one handled last; nothing was looked up.
    Unchanged,
}

/// One-direction-per-event synchronizer between chatbot steps and navigation.
#[derive(Debug, Clone, Default)]
pub struct StepSynchronizer {
    last_step: Option<String>,
}

impl StepSynchronizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_step(&self) -> Option<&str> {
        self.last_step.as_deref()
    }

    /// Record `step` as handled without navigating.
    ///
    /// Used when navigation moved first (back navigation) and the chatbot
    /// is being told about it.
    pub fn mark_handled(&mut self, step: &str) {
        self.last_step = Some(step.to_string());
    }

    /// Forget the last handled step.
    pub fn reset(&mut self) {
        self.last_step = None;
    }

    /// Apply an external step change to navigation.
    ///
    /// Unmapped steps navigate to [`FALLBACK_STAGE_FLOW`].
    pub fn on_step_changed(&mut self, step: &str, store: &mut LayoutStore) -> SyncOutcome {
        if self.last_step.as_deref() == Some(step) {
            return SyncOutcome::Unchanged;
        }
        self.last_step = Some(step.to_string());

        let target = step_to_stage_flow(step).unwrap_or_else(|| {
            tracing::debug!(step, "unmapped conversation step, using fallback");
            FALLBACK_STAGE_FLOW
        });
        navigate_if_needed(target, store)
    }

    /// Apply a breadcrumb or menu selection.
    ///
    /// Navigates to `(flow, stage)` and returns the step the chatbot should
    /// switch to. The returned step is recorded as handled, so feeding it
    /// back through [`StepSynchronizer::on_step_changed`] is a no-op. A
    /// target without a step forgets the last handled step, so the chatbot
    /// can re-enter it.
    pub fn on_menu_select(
        &mut self,
        flow: FlowType,
        stage: &str,
        store: &mut LayoutStore,
    ) -> Option<&'static str> {
        if !store.navigation().is_at(flow, stage) {
            store.navigate_to_stage(stage, Some(flow));
        }
        let step = stage_flow_to_step(flow, stage);
        match step {
            Some(step) => self.mark_handled(step),
            None => {
                tracing::debug!(%flow, stage, "menu target has no conversation step");
                self.reset();
            }
        }
        step
    }
}

fn navigate_if_needed(target: StageFlow, store: &mut LayoutStore) -> SyncOutcome {
    if store.navigation().is_at(target.flow, target.stage) {
        SyncOutcome::AlreadyCurrent(target)
    } else {
        store.navigate_to_stage(target.stage, Some(target.flow));
        SyncOutcome::Navigated(target)
    }
}
