//! Breadcrumb reconstruction from navigation history.

use serde::Serialize;

use super::{stages, FlowType, NavigationState};

/// One entry of the breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub label: &'static str,
    pub flow: FlowType,
    pub stage: String,
    pub is_current: bool,
}

/// Label of a significant `(flow, stage)` pair, `None` for stages that do
/// not appear in breadcrumbs.
pub fn breadcrumb_label(flow: FlowType, stage: &str) -> Option<&'static str> {
    let label = match (flow, stage) {
        (FlowType::BowlBuilding, stages::WELCOME) => "Home",
        (FlowType::BowlBuilding, stages::LOCATION) => "Location",
        (FlowType::BowlBuilding, stages::SELECTION) => "Bowls",
        (FlowType::BowlBuilding, stages::CUSTOMIZATION) => "Customize",
        (FlowType::CartManagement, stages::REVIEW) => "Cart",
        (FlowType::OrderReview, stages::REVIEW) => "Checkout",
        (FlowType::OrderReview, stages::CONFIRMATION) => "Confirmed",
        (FlowType::Favorites, stages::LIST) => "Favorites",
        (FlowType::Favorites, stages::HISTORY) => "Past Orders",
        _ => return None,
    };
    Some(label)
}

/// Build the trail from history followed by the current position.
///
/// Only significant stages are kept. Revisiting a stage already on the trail
/// truncates the trail back to that stage, so loops collapse instead of
/// growing the trail.
pub fn breadcrumbs(nav: &NavigationState) -> Vec<Breadcrumb> {
    let positions = nav
        .navigation_history
        .iter()
        .map(|item| (item.flow, item.stage.as_str()))
        .chain(std::iter::once((nav.current_flow, nav.current_stage.as_str())));

    let mut trail: Vec<Breadcrumb> = Vec::new();
    for (flow, stage) in positions {
        let Some(label) = breadcrumb_label(flow, stage) else {
            continue;
        };
        if let Some(idx) = trail.iter().position(|c| c.flow == flow && c.stage == stage) {
            trail.truncate(idx + 1);
            continue;
        }
        trail.push(Breadcrumb {
            label,
            flow,
            stage: stage.to_string(),
            is_current: false,
        });
    }

    if let Some(last) = trail.last_mut() {
        last.is_current = nav.is_at(last.flow, &last.stage);
    }
    trail
}
