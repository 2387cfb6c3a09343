//! Widget session.
//!
//! A [`WidgetSession`] owns the three stores of one widget instance (layout
//! with embedded navigation, chatbot, widget state) and keeps them in step.
//! Sessions are plain values passed by reference; several can coexist.
//!
//! Each UI event drives exactly one direction of step/stage
//! synchronization:
//!
//! - [`WidgetSession::set_step`]: chatbot step → navigation
//! - [`WidgetSession::select_breadcrumb`]: navigation → chatbot step
//! - [`WidgetSession::go_back`]: navigation → chatbot step

mod chatbot;
mod debounce;
mod pacing;
mod widget_state;

pub use chatbot::{bot_script, ChatMessage, ChatbotState, Sender};
pub use debounce::ResizeDebouncer;
pub use pacing::MessagePacer;
pub use widget_state::WidgetState;

use std::time::Instant;

use crate::config::WidgetConfig;
use crate::error::WidgetResult;
use crate::layout::{state::DEFAULT_SCREEN_WIDTH, LayoutStore, Pane};
use crate::navigation::{Breadcrumb, FlowType};
use crate::router::{route_content, PaneAssignment, Route};
use crate::sync::{stage_flow_to_step, StepSynchronizer, SyncOutcome};
use crate::traits::{Delay, PreferencesProvider};
use crate::view_state::WidgetViewState;

#[derive(Debug, Clone)]
pub struct WidgetSession {
    layout: LayoutStore,
    chatbot: ChatbotState,
    widget: WidgetState,
    sync: StepSynchronizer,
}

impl Default for WidgetSession {
    fn default() -> Self {
        Self::new(LayoutStore::default())
    }
}

impl WidgetSession {
    pub fn new(layout: LayoutStore) -> Self {
        Self {
            layout,
            chatbot: ChatbotState::new(),
            widget: WidgetState::default(),
            sync: StepSynchronizer::new(),
        }
    }

    /// Build a session from validated configuration.
    ///
    /// The layout table must declare, for every tier, the mode the resolver
    /// reports for that tier's widths.
    pub fn from_config(config: &WidgetConfig, initial_width: Option<i32>) -> WidgetResult<Self> {
        let resolver = config.resolver()?;
        let table = config.layout_table()?;
        table.check_modes(&resolver)?;
        let layout = LayoutStore::new(resolver, table, initial_width.unwrap_or(DEFAULT_SCREEN_WIDTH));
        Ok(Self::new(layout))
    }

    pub fn layout(&self) -> &LayoutStore {
        &self.layout
    }

    /// Direct access for pane operations (toggle, focus, collapse).
    pub fn layout_mut(&mut self) -> &mut LayoutStore {
        &mut self.layout
    }

    pub fn chatbot(&self) -> &ChatbotState {
        &self.chatbot
    }

    pub fn widget(&self) -> &WidgetState {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut WidgetState {
        &mut self.widget
    }

    pub fn set_screen_width(&mut self, width: i32) {
        self.layout.set_screen_width(width);
    }

    /// The chatbot moved to `step`; navigation follows.
    pub fn set_step(&mut self, step: &str) -> SyncOutcome {
        self.chatbot.set_current_step(step);
        self.sync.on_step_changed(step, &mut self.layout)
    }

    /// A breadcrumb or menu entry was clicked; the chatbot follows.
    ///
    /// Returns the step the chatbot switched to, if the target has one.
    pub fn select_breadcrumb(&mut self, flow: FlowType, stage: &str) -> Option<&'static str> {
        let step = self.sync.on_menu_select(flow, stage, &mut self.layout);
        if let Some(step) = step {
            self.chatbot.set_current_step(step);
        }
        step
    }

    /// Navigate back one level and move the chatbot to the matching step.
    ///
    /// Returns false when there was nothing to go back to.
    pub fn go_back(&mut self) -> bool {
        if self.layout.navigate_back().is_none() {
            return false;
        }
        let nav = self.layout.navigation();
        match stage_flow_to_step(nav.current_flow, &nav.current_stage) {
            Some(step) => {
                self.sync.mark_handled(step);
                self.chatbot.set_current_step(step);
            }
            None => self.sync.reset(),
        }
        true
    }

    /// Reset every store to its initial values and start a new session id.
    pub fn reset_session(&mut self) {
        self.layout.reset_layout();
        self.chatbot.reset();
        self.widget.reset();
        self.sync.reset();
        tracing::info!(session_id = %self.widget.session_id, "widget session reset");
    }

    pub fn route(&self) -> Route {
        Route::current(self.layout.navigation())
    }

    pub fn content(&self) -> PaneAssignment {
        route_content(&self.route(), Some(&self.chatbot.current_step))
    }

    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        self.layout.navigation().breadcrumbs()
    }

    /// Cycle keyboard focus Left → Right → none → Left.
    pub fn cycle_focus(&mut self) {
        let next = match self.layout.state().focused_pane {
            None => Some(Pane::Left),
            Some(Pane::Left) => Some(Pane::Right),
            Some(Pane::Right) => None,
        };
        self.layout.set_focused_pane(next);
    }

    pub fn view_state(&self) -> WidgetViewState<'_> {
        WidgetViewState::new(self)
    }

    /// Pace the bot lines scripted for the current step into the chat log.
    pub async fn deliver_step_messages<D>(&mut self, pacer: &MessagePacer, delay: &D) -> usize
    where
        D: Delay + ?Sized,
    {
        let lines = bot_script(&self.chatbot.current_step);
        pacer.deliver(delay, &mut self.chatbot, lines).await
    }

    /// Queue the bot lines scripted for the current step, first one due at `now`.
    pub fn queue_step_messages(&self, pacer: &mut MessagePacer, now: Instant) {
        pacer.enqueue(bot_script(&self.chatbot.current_step), now);
    }

    /// Append the next queued bot line if it is due.
    pub fn poll_messages(&mut self, pacer: &mut MessagePacer, now: Instant) -> bool {
        pacer.poll(&mut self.chatbot, now)
    }

    /// Load and apply persisted pane preferences.
    ///
    /// Returns whether anything was stored.
    pub async fn load_preferences<P>(&mut self, provider: &P) -> WidgetResult<bool>
    where
        P: PreferencesProvider + ?Sized,
    {
        match provider.load().await? {
            Some(prefs) => {
                self.layout.apply_preferences(prefs);
                tracing::info!(?prefs, "pane preferences restored");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub async fn save_preferences<P>(&self, provider: &P) -> WidgetResult<()>
    where
        P: PreferencesProvider + ?Sized,
    {
        let prefs = self.layout.pane_preferences();
        provider.save(&prefs).await?;
        tracing::info!(?prefs, "pane preferences saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{InMemoryPreferences, RecordingDelay};
    use crate::layout::{LayoutMode, PanePreferences};
    use crate::navigation::stages;
    use crate::router::PaneContent;
    use crate::sync::steps;
    use std::time::Duration;

    #[test]
    fn test_set_step_navigates_and_routes() {
        let mut session = WidgetSession::default();
        session.set_step(steps::SIGNATURE_BOWLS);

        assert_eq!(session.route(), Route::BowlSelection);
        assert_eq!(session.content().left, PaneContent::SignatureBowlList);
        assert_eq!(session.chatbot().current_step, steps::SIGNATURE_BOWLS);
    }

    #[test]
    fn test_select_breadcrumb_updates_step_without_double_navigation() {
        let mut session = WidgetSession::default();
        session.set_step(steps::CART_REVIEW);

        let step = session.select_breadcrumb(FlowType::BowlBuilding, stages::WELCOME);
        assert_eq!(step, Some(steps::WELCOME));
        assert_eq!(session.chatbot().current_step, steps::WELCOME);
        let depth = session.layout().navigation().navigation_history.len();

        // Host echoes the step back
        assert_eq!(session.set_step(steps::WELCOME), SyncOutcome::Unchanged);
        assert_eq!(session.layout().navigation().navigation_history.len(), depth);
    }

    #[test]
    fn test_go_back_moves_chatbot_step() {
        let mut session = WidgetSession::default();
        session.set_step(steps::SIGNATURE_BOWLS);
        session.set_step(steps::CART_REVIEW);

        assert!(session.go_back());
        assert_eq!(session.route(), Route::BowlSelection);
        assert_eq!(session.chatbot().current_step, steps::SIGNATURE_BOWLS);
        assert_eq!(session.set_step(steps::SIGNATURE_BOWLS), SyncOutcome::Unchanged);
    }

    #[test]
    fn test_chatbot_can_return_to_step_after_stepless_breadcrumb() {
        let mut session = WidgetSession::default();
        session.set_step(steps::CART_REVIEW);
        assert_eq!(session.select_breadcrumb(FlowType::Favorites, "shared"), None);

        let outcome = session.set_step(steps::CART_REVIEW);
        assert!(matches!(outcome, SyncOutcome::Navigated(_)));
        assert_eq!(session.route(), Route::CartReview);
    }

    #[test]
    fn test_chatbot_can_return_to_step_after_going_back_to_stepless_stage() {
        let mut session = WidgetSession::default();
        session.select_breadcrumb(FlowType::Favorites, "shared");
        session.set_step(steps::CART_REVIEW);

        assert!(session.go_back());
        assert!(session.layout().navigation().is_at(FlowType::Favorites, "shared"));
        assert!(!session.route().is_mapped());

        let outcome = session.set_step(steps::CART_REVIEW);
        assert!(matches!(outcome, SyncOutcome::Navigated(_)));
        assert_eq!(session.route(), Route::CartReview);
    }

    #[test]
    fn test_go_back_on_fresh_session() {
        let mut session = WidgetSession::default();
        assert!(!session.go_back());
    }

    #[test]
    fn test_reset_session() {
        let mut session = WidgetSession::default();
        let id = session.widget().session_id;
        session.set_step(steps::CHECKOUT);
        session.layout_mut().toggle_left_pane();

        session.reset_session();
        assert_eq!(session.route(), Route::Welcome);
        assert_eq!(session.chatbot().current_step, steps::WELCOME);
        assert!(!session.layout().state().left_pane_collapsed);
        assert_ne!(session.widget().session_id, id);
        // The synchronizer forgot the last step
        assert!(matches!(
            session.set_step(steps::CHECKOUT),
            SyncOutcome::Navigated(_)
        ));
    }

    #[test]
    fn test_cycle_focus() {
        let mut session = WidgetSession::default();
        session.cycle_focus();
        assert_eq!(session.layout().state().focused_pane, Some(Pane::Left));
        session.cycle_focus();
        assert_eq!(session.layout().state().focused_pane, Some(Pane::Right));
        session.cycle_focus();
        assert_eq!(session.layout().state().focused_pane, None);
    }

    #[test]
    fn test_from_config_uses_initial_width() {
        let session = WidgetSession::from_config(&WidgetConfig::default(), Some(800)).unwrap();
        assert_eq!(session.layout().state().current_mode, LayoutMode::SinglePane);
    }

    #[tokio::test]
    async fn test_deliver_step_messages() {
        let mut session = WidgetSession::default();
        session.set_step(steps::WELCOME);
        let pacer = MessagePacer::new(Duration::from_millis(400));
        let delay = RecordingDelay::new();

        let sent = session.deliver_step_messages(&pacer, &delay).await;
        assert_eq!(sent, bot_script(steps::WELCOME).len());
        assert_eq!(session.chatbot().messages.len(), sent);
        assert_eq!(delay.requested().len(), sent - 1);
    }

    #[tokio::test]
    async fn test_preferences_round_trip() {
        let provider = InMemoryPreferences::new();
        let mut session = WidgetSession::default();
        session.layout_mut().collapse_pane(Pane::Left, true);
        session.save_preferences(&provider).await.unwrap();

        let mut restored = WidgetSession::default();
        assert!(restored.load_preferences(&provider).await.unwrap());
        assert_eq!(
            restored.layout().pane_preferences(),
            PanePreferences {
                left_pane_collapsed: true,
                right_pane_collapsed: false,
                focused_pane: None,
            }
        );
    }

    #[tokio::test]
    async fn test_preferences_failure_is_recoverable() {
        let provider = InMemoryPreferences::new();
        provider.set_load_should_fail(true);
        let mut session = WidgetSession::default();

        let err = session.load_preferences(&provider).await.unwrap_err();
        assert!(err.is_recoverable());
        assert!(!session.layout().state().left_pane_collapsed);
    }
}
