// Integration tests for a full ordering conversation
// Drives a widget session the way the chatbot host does and checks
// navigation, routing and breadcrumbs stay consistent.

use heybo_widget::navigation::{stages, FlowType, NavigationState};
use heybo_widget::router::{route_content, PaneContent, Route};
use heybo_widget::sync::{stage_flow_to_step, step_to_stage_flow, steps, SyncOutcome};
use heybo_widget::widget::WidgetSession;

fn labels(session: &WidgetSession) -> Vec<&'static str> {
    session.breadcrumbs().iter().map(|c| c.label).collect()
}

// =============================================================================
// Happy path
// =============================================================================

#[test]
fn test_order_from_welcome_to_confirmation() {
    let mut session = WidgetSession::default();

    for step in [
        steps::LOCATION_SELECTION,
        steps::SIGNATURE_BOWLS,
        steps::CUSTOMIZE_SIGNATURE,
        steps::CART_REVIEW,
        steps::CHECKOUT,
        steps::ORDER_CONFIRMATION,
    ] {
        assert!(matches!(session.set_step(step), SyncOutcome::Navigated(_)), "{step}");
    }

    assert_eq!(session.route(), Route::OrderConfirmation);
    assert_eq!(session.content().left, PaneContent::ConfirmationMessage);
    assert_eq!(
        labels(&session),
        vec!["Home", "Location", "Bowls", "Customize", "Cart", "Checkout", "Confirmed"]
    );
    assert!(session.breadcrumbs().last().is_some_and(|c| c.is_current));
}

#[test]
fn test_steps_sharing_a_stage_navigate_once() {
    let mut session = WidgetSession::default();
    session.set_step(steps::CART_REVIEW);
    let depth = session.layout().navigation().navigation_history.len();

    let outcome = session.set_step(steps::UPSELL);
    assert!(matches!(outcome, SyncOutcome::AlreadyCurrent(_)));
    assert_eq!(session.layout().navigation().navigation_history.len(), depth);
    assert_eq!(session.content().right, PaneContent::UpsellSuggestions);
}

// =============================================================================
// Back navigation
// =============================================================================

#[test]
fn test_back_walks_the_history() {
    let mut session = WidgetSession::default();
    session.set_step(steps::SIGNATURE_BOWLS);
    session.set_step(steps::CREATE_YOUR_OWN);
    session.set_step(steps::CART_REVIEW);

    assert!(session.go_back());
    assert_eq!(session.route(), Route::BowlCustomization);
    assert_eq!(session.chatbot().current_step, steps::CREATE_YOUR_OWN);

    assert!(session.go_back());
    assert!(session.go_back());
    assert_eq!(session.route(), Route::Welcome);
    assert!(!session.go_back());
}

#[test]
fn test_single_round_trip_leaves_no_back() {
    let mut nav = NavigationState::new();
    nav.navigate_to_stage(stages::SELECTION, None);
    assert!(nav.can_navigate_back);

    nav.navigate_back();
    assert_eq!(nav.current_stage, stages::WELCOME);
    assert_eq!(nav.current_flow, FlowType::BowlBuilding);
    assert!(!nav.can_navigate_back);
    assert!(nav.navigation_history.is_empty());
}

// =============================================================================
// Breadcrumb clicks
// =============================================================================

#[test]
fn test_breadcrumb_click_moves_chatbot_without_echo() {
    let mut session = WidgetSession::default();
    session.set_step(steps::SIGNATURE_BOWLS);
    session.set_step(steps::CART_REVIEW);

    let step = session.select_breadcrumb(FlowType::BowlBuilding, stages::SELECTION);
    assert_eq!(step, Some(steps::SIGNATURE_BOWLS));
    assert_eq!(labels(&session), vec!["Home", "Bowls"]);

    let depth = session.layout().navigation().navigation_history.len();
    assert_eq!(session.set_step(steps::SIGNATURE_BOWLS), SyncOutcome::Unchanged);
    assert_eq!(session.layout().navigation().navigation_history.len(), depth);
}

#[test]
fn test_unmapped_position_shows_placeholder() {
    let mut session = WidgetSession::default();
    session
        .layout_mut()
        .navigate_to_stage(stages::CONFIRMATION, Some(FlowType::Favorites));

    assert!(!session.route().is_mapped());
    assert!(session.content().is_placeholder());
    assert_eq!(session.route().key(), "favorites-confirmation");
}

// =============================================================================
// Tables
// =============================================================================

#[test]
fn test_inverse_table_points_back_at_a_step_of_the_same_position() {
    for flow in FlowType::ALL {
        for stage in [
            stages::WELCOME,
            stages::LOCATION,
            stages::SELECTION,
            stages::CUSTOMIZATION,
            stages::REVIEW,
            stages::CONFIRMATION,
            stages::LIST,
            stages::HISTORY,
        ] {
            if let Some(step) = stage_flow_to_step(flow, stage) {
                let target = step_to_stage_flow(step).expect("inverse step is known");
                assert_eq!((target.flow, target.stage), (flow, stage));
            }
        }
    }
}

#[test]
fn test_every_route_has_real_content() {
    for route in [
        Route::Welcome,
        Route::LocationSelection,
        Route::BowlSelection,
        Route::BowlCustomization,
        Route::CartReview,
        Route::OrderReview,
        Route::OrderConfirmation,
        Route::FavoritesList,
        Route::OrderHistory,
    ] {
        assert!(!route_content(&route, None).is_placeholder(), "{route}");
    }
}
