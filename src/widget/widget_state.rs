//! Widget-state store: session identity and open/minimized flags.

use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetState {
    pub session_id: Uuid,
    pub is_open: bool,
    pub is_minimized: bool,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            is_open: false,
            is_minimized: false,
        }
    }
}

impl WidgetState {
    pub fn open(&mut self) {
        self.is_open = true;
        self.is_minimized = false;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn toggle_minimized(&mut self) {
        self.is_minimized = !self.is_minimized;
    }

    /// Start a new session; the open flag is kept.
    pub fn reset(&mut self) {
        self.session_id = Uuid::new_v4();
        self.is_minimized = false;
    }
}
