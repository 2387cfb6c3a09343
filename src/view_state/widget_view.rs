//! Borrowed snapshot of a widget session.

use serde::Serialize;
use uuid::Uuid;

use crate::layout::{Breakpoint, LayoutMode, Pane, PaneWidths, VisiblePanes};
use crate::navigation::{Breadcrumb, FlowType};
use crate::router::PaneAssignment;
use crate::widget::{ChatMessage, WidgetSession};

/// Everything the renderer needs, borrowed from a [`WidgetSession`].
#[derive(Debug, Clone, Serialize)]
pub struct WidgetViewState<'a> {
    // =========================================================================
    // Session
    // =========================================================================
    pub session_id: Uuid,
    pub is_open: bool,
    pub current_step: &'a str,

    // =========================================================================
    // Layout
    // =========================================================================
    pub screen_width: i32,
    pub breakpoint: Breakpoint,
    pub mode: LayoutMode,
    pub left_pane_collapsed: bool,
    pub right_pane_collapsed: bool,
    pub focused_pane: Option<Pane>,
    pub visible_panes: VisiblePanes,
    pub pane_widths: PaneWidths,

    // =========================================================================
    // Navigation
    // =========================================================================
    pub flow: FlowType,
    pub stage: &'a str,
    pub previous_stage: Option<&'a str>,
    pub can_navigate_back: bool,
    pub history_len: usize,
    pub route_key: String,
    pub content: PaneAssignment,
    pub breadcrumbs: Vec<Breadcrumb>,

    #[serde(skip)]
    pub messages: &'a [ChatMessage],
}

impl<'a> WidgetViewState<'a> {
    pub fn new(session: &'a WidgetSession) -> Self {
        let layout = session.layout();
        let state = layout.state();
        let nav = &state.navigation;
        let chatbot = session.chatbot();

        Self {
            session_id: session.widget().session_id,
            is_open: session.widget().is_open,
            current_step: &chatbot.current_step,
            screen_width: state.screen_width,
            breakpoint: state.current_breakpoint,
            mode: state.current_mode,
            left_pane_collapsed: state.left_pane_collapsed,
            right_pane_collapsed: state.right_pane_collapsed,
            focused_pane: state.focused_pane,
            visible_panes: layout.visible_panes(),
            pane_widths: layout.pane_widths(),
            flow: nav.current_flow,
            stage: &nav.current_stage,
            previous_stage: nav.previous_stage.as_deref(),
            can_navigate_back: nav.can_navigate_back,
            history_len: nav.navigation_history.len(),
            route_key: session.route().key(),
            content: session.content(),
            breadcrumbs: nav.breadcrumbs(),
            messages: &chatbot.messages,
        }
    }
}
