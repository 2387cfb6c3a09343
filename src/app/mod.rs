//! Interactive `watch` driver.
//!
//! `App` wraps one [`WidgetSession`] with the bits a terminal host needs:
//! key bindings, resize debouncing and paced bot messages. Both timers are
//! polled with an explicit `now`, and the event loop in [`run`] sleeps until
//! [`App::next_deadline`] while still reading input.

mod handlers;
mod run;

pub use run::run_watch;

use std::time::Instant;

use crate::config::WidgetConfig;
use crate::widget::{MessagePacer, ResizeDebouncer, WidgetSession};

pub struct App {
    pub session: WidgetSession,
    pub config: WidgetConfig,
    debouncer: ResizeDebouncer,
    pacer: MessagePacer,
    pub should_quit: bool,
    pub needs_redraw: bool,
}

impl App {
    pub fn new(session: WidgetSession, config: WidgetConfig) -> Self {
        Self {
            session,
            debouncer: ResizeDebouncer::new(config.resize_debounce),
            pacer: MessagePacer::new(config.message_delay),
            config,
            should_quit: false,
            needs_redraw: true,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Queue the current step's bot script, replacing unsent lines.
    pub fn queue_step_messages(&mut self) {
        self.queue_step_messages_at(Instant::now());
    }

    pub fn queue_step_messages_at(&mut self, now: Instant) {
        self.session.queue_step_messages(&mut self.pacer, now);
    }

    pub fn messages_pending(&self) -> bool {
        self.pacer.pending() > 0
    }

    pub fn message_deadline(&self) -> Option<Instant> {
        self.pacer.next_due()
    }

    /// Append the next bot line if due. Returns whether one was appended.
    pub fn poll_messages(&mut self, now: Instant) -> bool {
        let sent = self.session.poll_messages(&mut self.pacer, now);
        if sent {
            self.mark_dirty();
        }
        sent
    }

    /// Earliest instant at which a timer needs polling.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.resize_deadline(), self.message_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Poll every timer at `now`.
    pub fn on_tick(&mut self, now: Instant) {
        self.poll_resize(now);
        self.poll_messages(now);
    }

    // ========================================================================
    // Resize
    // ========================================================================

    /// Record a terminal resize; applied once the debounce window passes.
    pub fn on_resize(&mut self, columns: u16, now: Instant) {
        self.debouncer.push(self.config.columns_to_px(columns), now);
    }

    pub fn resize_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Apply a due resize. Returns whether the width changed.
    pub fn poll_resize(&mut self, now: Instant) -> bool {
        match self.debouncer.poll(now) {
            Some(width) => {
                self.session.set_screen_width(width);
                self.mark_dirty();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutMode;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::time::Duration;

    fn app() -> App {
        App::new(WidgetSession::default(), WidgetConfig::default())
    }

    #[test]
    fn test_resize_is_debounced() {
        let mut app = app();
        let start = Instant::now();
        app.on_resize(125, start);
        app.on_resize(66, start + Duration::from_millis(50));

        assert!(!app.poll_resize(start + Duration::from_millis(100)));
        assert_eq!(app.session.layout().state().screen_width, 1440);

        assert!(app.poll_resize(start + Duration::from_millis(200)));
        let state = app.session.layout().state();
        assert_eq!(state.screen_width, 792);
        assert_eq!(state.current_mode, LayoutMode::SinglePane);
    }

    #[test]
    fn test_resize_deadline_follows_latest_event() {
        let mut app = app();
        assert!(app.resize_deadline().is_none());
        let start = Instant::now();
        app.on_resize(100, start);
        assert_eq!(app.resize_deadline(), Some(start + Duration::from_millis(150)));
    }

    #[test]
    fn test_paced_lines_arrive_one_per_tick() {
        let mut app = app();
        let start = Instant::now();
        let delay = app.config.message_delay;
        app.queue_step_messages_at(start);
        let script_len = crate::widget::bot_script(&app.session.chatbot().current_step).len();
        assert!(script_len > 1);

        app.needs_redraw = false;
        app.on_tick(start);
        assert_eq!(app.session.chatbot().messages.len(), 1);
        assert!(app.needs_redraw);
        assert_eq!(app.next_deadline(), Some(start + delay));

        // Nothing new before the pause elapses
        app.needs_redraw = false;
        app.on_tick(start + delay / 2);
        assert_eq!(app.session.chatbot().messages.len(), 1);
        assert!(!app.needs_redraw);
    }

    #[test]
    fn test_key_press_is_handled_between_paced_lines() {
        let mut app = app();
        let start = Instant::now();
        let delay = app.config.message_delay;
        app.queue_step_messages_at(start);
        assert!(app.poll_messages(start));

        app.handle_key(KeyEvent::new(KeyCode::Char(']'), KeyModifiers::NONE));
        assert!(app.session.layout().state().right_pane_collapsed);
        assert_eq!(app.session.chatbot().messages.len(), 1);
        assert!(app.messages_pending());

        assert!(app.poll_messages(start + delay));
        assert_eq!(app.session.chatbot().messages.len(), 2);
    }

    #[test]
    fn test_next_deadline_is_earliest_timer() {
        let mut app = app();
        let start = Instant::now();
        app.queue_step_messages_at(start + Duration::from_secs(1));
        app.on_resize(100, start);
        assert_eq!(app.next_deadline(), Some(start + Duration::from_millis(150)));
    }
}
