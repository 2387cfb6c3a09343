//! Content routing.
//!
//! Maps a navigation position to the content mounted in each pane. Known
//! `(flow, stage)` pairs are [`Route`] variants so every one of them is
//! handled by an exhaustive `match`; anything else is
//! [`Route::Unmapped`] and shows the "being developed" placeholder.

use std::fmt;

use serde::Serialize;

use crate::navigation::{stages, FlowType, NavigationState};
use crate::sync::steps;

/// A routable navigation position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "route", rename_all = "kebab-case")]
pub enum Route {
    Welcome,
    LocationSelection,
    BowlSelection,
    BowlCustomization,
    CartReview,
    OrderReview,
    OrderConfirmation,
    FavoritesList,
    OrderHistory,
    Unmapped { flow: FlowType, stage: String },
}

impl Route {
    pub fn from_parts(flow: FlowType, stage: &str) -> Route {
        match (flow, stage) {
            (FlowType::BowlBuilding, stages::WELCOME) => Route::Welcome,
            (FlowType::BowlBuilding, stages::LOCATION) => Route::LocationSelection,
            (FlowType::BowlBuilding, stages::SELECTION) => Route::BowlSelection,
            (FlowType::BowlBuilding, stages::CUSTOMIZATION) => Route::BowlCustomization,
            (FlowType::CartManagement, stages::REVIEW) => Route::CartReview,
            (FlowType::OrderReview, stages::REVIEW) => Route::OrderReview,
            (FlowType::OrderReview, stages::CONFIRMATION) => Route::OrderConfirmation,
            (FlowType::Favorites, stages::LIST) => Route::FavoritesList,
            (FlowType::Favorites, stages::HISTORY) => Route::OrderHistory,
            (flow, stage) => Route::Unmapped {
                flow,
                stage: stage.to_string(),
            },
        }
    }

    pub fn current(nav: &NavigationState) -> Route {
        Route::from_parts(nav.current_flow, &nav.current_stage)
    }

    /// The `(flow, stage)` pair this route was built from.
    pub fn parts(&self) -> (FlowType, &str) {
        match self {
            Route::Welcome => (FlowType::BowlBuilding, stages::WELCOME),
            Route::LocationSelection => (FlowType::BowlBuilding, stages::LOCATION),
            Route::BowlSelection => (FlowType::BowlBuilding, stages::SELECTION),
            Route::BowlCustomization => (FlowType::BowlBuilding, stages::CUSTOMIZATION),
            Route::CartReview => (FlowType::CartManagement, stages::REVIEW),
            Route::OrderReview => (FlowType::OrderReview, stages::REVIEW),
            Route::OrderConfirmation => (FlowType::OrderReview, stages::CONFIRMATION),
            Route::FavoritesList => (FlowType::Favorites, stages::LIST),
            Route::OrderHistory => (FlowType::Favorites, stages::HISTORY),
            Route::Unmapped { flow, stage } => (*flow, stage.as_str()),
        }
    }

    /// Route key: `flow + "-" + stage`.
    pub fn key(&self) -> String {
        let (flow, stage) = self.parts();
        format!("{}-{}", flow, stage)
    }

    pub fn is_mapped(&self) -> bool {
        !matches!(self, Route::Unmapped { .. })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

/// Named content a pane can mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaneContent {
    WelcomeChat,
    BrandHero,
    LocationPicker,
    StoreMap,
    SignatureBowlList,
    BowlPreview,
    IngredientPicker,
    SignatureBowlPreview,
    NutritionPreview,
    CartSummary,
    CartPreview,
    UpsellSuggestions,
    CheckoutForm,
    OrderSummary,
    ConfirmationMessage,
    PickupDetails,
    FavoritesList,
    FavoriteBowlPreview,
    OrderHistoryList,
    ReorderPreview,
    /// "This content is being developed" placeholder.
    Placeholder,
}

impl PaneContent {
    pub fn title(self) -> &'static str {
        match self {
            PaneContent::WelcomeChat => "Welcome",
            PaneContent::BrandHero => "HeyBo",
            PaneContent::LocationPicker => "Choose a store",
            PaneContent::StoreMap => "Store map",
            PaneContent::SignatureBowlList => "Signature bowls",
            PaneContent::BowlPreview => "Bowl preview",
            PaneContent::IngredientPicker => "Build your bowl",
            PaneContent::SignatureBowlPreview => "Signature bowl",
            PaneContent::NutritionPreview => "Nutrition",
            PaneContent::CartSummary => "Your cart",
            PaneContent::CartPreview => "Cart preview",
            PaneContent::UpsellSuggestions => "Add a side?",
            PaneContent::CheckoutForm => "Checkout",
            PaneContent::OrderSummary => "Order summary",
            PaneContent::ConfirmationMessage => "Order confirmed",
            PaneContent::PickupDetails => "Pickup details",
            PaneContent::FavoritesList => "Favorites",
            PaneContent::FavoriteBowlPreview => "Favorite bowl",
            PaneContent::OrderHistoryList => "Past orders",
            PaneContent::ReorderPreview => "Reorder",
            PaneContent::Placeholder => "This content is being developed",
        }
    }
}

/// Content for both panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaneAssignment {
    pub left: PaneContent,
    pub right: PaneContent,
}

impl PaneAssignment {
    const fn new(left: PaneContent, right: PaneContent) -> Self {
        Self { left, right }
    }

    pub fn is_placeholder(&self) -> bool {
        self.left == PaneContent::Placeholder && self.right == PaneContent::Placeholder
    }
}

/// Select pane content for `route`, refined by the chatbot's current step.
pub fn route_content(route: &Route, current_step: Option<&str>) -> PaneAssignment {
    use PaneContent::*;

    match route {
        Route::Welcome => PaneAssignment::new(WelcomeChat, BrandHero),
        Route::LocationSelection => PaneAssignment::new(LocationPicker, StoreMap),
        Route::BowlSelection => PaneAssignment::new(SignatureBowlList, BowlPreview),
        Route::BowlCustomization => match current_step {
            Some(steps::CUSTOMIZE_SIGNATURE) => PaneAssignment::new(IngredientPicker, SignatureBowlPreview),
            Some(steps::CREATE_YOUR_OWN) => PaneAssignment::new(IngredientPicker, BowlPreview),
            _ => PaneAssignment::new(IngredientPicker, NutritionPreview),
        },
        Route::CartReview => match current_step {
            Some(steps::UPSELL) => PaneAssignment::new(CartSummary, UpsellSuggestions),
            _ => PaneAssignment::new(CartSummary, CartPreview),
        },
        Route::OrderReview => PaneAssignment::new(CheckoutForm, OrderSummary),
        Route::OrderConfirmation => PaneAssignment::new(ConfirmationMessage, PickupDetails),
        Route::FavoritesList => PaneAssignment::new(FavoritesList, FavoriteBowlPreview),
        Route::OrderHistory => PaneAssignment::new(OrderHistoryList, ReorderPreview),
        Route::Unmapped { .. } => PaneAssignment::new(Placeholder, Placeholder),
    }
}
