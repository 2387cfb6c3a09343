//! Key handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use crate::navigation::{stages, FlowType};
use crate::sync::{known_steps, SyncOutcome};

impl App {
    /// Handle a key press. Every key marks the app dirty.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('[') => self.session.layout_mut().toggle_left_pane(),
            KeyCode::Char(']') => self.session.layout_mut().toggle_right_pane(),
            KeyCode::Tab => self.session.cycle_focus(),
            KeyCode::Char('b') | KeyCode::Backspace => {
                if self.session.go_back() {
                    self.queue_step_messages();
                }
            }
            KeyCode::Char('r') => {
                self.session.reset_session();
                self.queue_step_messages();
            }
            KeyCode::Char('f') => self.select(FlowType::Favorites, stages::LIST),
            KeyCode::Char('o') => self.select(FlowType::Favorites, stages::HISTORY),
            KeyCode::Char('h') => self.select(FlowType::BowlBuilding, stages::WELCOME),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(step) = step_for_digit(c) {
                    if self.session.set_step(step) != SyncOutcome::Unchanged {
                        self.queue_step_messages();
                    }
                }
            }
            _ => {}
        }
    }

    fn select(&mut self, flow: FlowType, stage: &str) {
        if self.session.select_breadcrumb(flow, stage).is_some() {
            self.queue_step_messages();
        }
    }
}

/// `1`..`9` pick the first nine known steps, `0` the tenth.
fn step_for_digit(c: char) -> Option<&'static str> {
    let digit = c.to_digit(10)? as usize;
    let index = if digit == 0 { 9 } else { digit - 1 };
    known_steps().nth(index)
}
