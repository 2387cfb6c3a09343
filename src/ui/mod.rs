//! Terminal preview of the widget.
//!
//! Renders one [`WidgetViewState`] into a frame:
//! - Header: tier, mode, width and the breadcrumb trail
//! - Body: the visible panes, arranged side by side, overlaid or stacked
//! - Footer: key hints
//!
//! Pane widths come from the layout store in pixels and are converted back
//! to columns with the configured pixels-per-column factor.

mod theme;

pub use theme::{
    COLOR_ACTIVE, COLOR_BORDER, COLOR_BOT, COLOR_DIM, COLOR_FOCUS, COLOR_HEADER,
    COLOR_OVERLAY_BG, COLOR_PLACEHOLDER, COLOR_USER,
};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::layout::{Pane, VisiblePanes};
use crate::router::PaneContent;
use crate::view_state::WidgetViewState;
use crate::widget::{ChatMessage, Sender};

const KEY_HINTS: &str = "[ ] panes  Tab focus  b back  r reset  0-9 step  q quit";

// ============================================================================
// Main Rendering
// ============================================================================

pub fn render(frame: &mut Frame, view: &WidgetViewState<'_>, px_per_column: u32) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Panes
            Constraint::Length(1), // Hints
        ])
        .split(frame.area());

    render_header(frame, chunks[0], view);
    render_body(frame, chunks[1], view, px_per_column);
    frame.render_widget(
        Paragraph::new(Span::styled(KEY_HINTS, Style::default().fg(COLOR_DIM))),
        chunks[2],
    );
}

fn render_header(frame: &mut Frame, area: Rect, view: &WidgetViewState<'_>) {
    let status = Line::from(vec![
        Span::styled(
            "HeyBo ",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{} · {} · {}px", view.breakpoint, view.mode, view.screen_width),
            Style::default().fg(COLOR_DIM),
        ),
    ]);

    let mut trail = Vec::new();
    for (i, crumb) in view.breadcrumbs.iter().enumerate() {
        if i > 0 {
            trail.push(Span::styled(" › ", Style::default().fg(COLOR_DIM)));
        }
        let style = if crumb.is_current {
            Style::default().fg(COLOR_ACTIVE).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        trail.push(Span::styled(crumb.label, style));
    }

    frame.render_widget(Paragraph::new(vec![status, Line::from(trail)]), area);
}

// ============================================================================
// Panes
// ============================================================================

fn render_body(frame: &mut Frame, area: Rect, view: &WidgetViewState<'_>, px_per_column: u32) {
    match view.visible_panes {
        VisiblePanes::SideBySide { left, right } if left && right => {
            let left_cols = columns(view.pane_widths.left, px_per_column).min(area.width);
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(left_cols),
                    Constraint::Length(1),
                    Constraint::Min(0),
                ])
                .split(area);
            render_pane(frame, chunks[0], view, Pane::Left);
            render_pane(frame, chunks[2], view, Pane::Right);
        }
        VisiblePanes::Stacked { left, right } if left && right => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(area);
            render_pane(frame, chunks[0], view, Pane::Left);
            render_pane(frame, chunks[1], view, Pane::Right);
        }
        VisiblePanes::SideBySide { left, right } | VisiblePanes::Stacked { left, right } => {
            match (left, right) {
                (true, _) => render_pane(frame, area, view, Pane::Left),
                (_, true) => render_pane(frame, area, view, Pane::Right),
                _ => render_empty(frame, area),
            }
        }
        VisiblePanes::Overlay { right_overlay } => {
            render_pane(frame, area, view, Pane::Left);
            if right_overlay {
                let overlay = centered_rect(80, 70, area);
                frame.render_widget(Clear, overlay);
                frame.render_widget(
                    Block::default().style(Style::default().bg(COLOR_OVERLAY_BG)),
                    overlay,
                );
                render_pane(frame, overlay, view, Pane::Right);
            }
        }
    }
}

fn render_pane(frame: &mut Frame, area: Rect, view: &WidgetViewState<'_>, pane: Pane) {
    let content = match pane {
        Pane::Left => view.content.left,
        Pane::Right => view.content.right,
    };
    let focused = view.focused_pane == Some(pane);
    let border = if focused { COLOR_FOCUS } else { COLOR_BORDER };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if focused { BorderType::Thick } else { BorderType::Plain })
        .border_style(Style::default().fg(border))
        .title(Span::styled(
            format!(" {} ", content.title()),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    if content == PaneContent::Placeholder {
        lines.push(Line::from(Span::styled(
            format!("{} ({})", content.title(), view.route_key),
            Style::default().fg(COLOR_PLACEHOLDER),
        )));
    }
    if pane == Pane::Left {
        lines.extend(message_lines(view.messages, inner.height));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn render_empty(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new(Span::styled(
            "All panes collapsed",
            Style::default().fg(COLOR_DIM),
        )),
        area,
    );
}

/// The most recent messages that fit in `height` rows.
fn message_lines(messages: &[ChatMessage], height: u16) -> Vec<Line<'_>> {
    let skip = messages.len().saturating_sub(usize::from(height));
    messages[skip..]
        .iter()
        .map(|message| {
            let (who, color) = match message.sender {
                Sender::Bot => ("HeyBo", COLOR_BOT),
                Sender::User => ("You", COLOR_USER),
            };
            Line::from(vec![
                Span::styled(format!("{who}: "), Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::raw(message.text.as_str()),
            ])
        })
        .collect()
}

// ============================================================================
// Helpers
// ============================================================================

fn columns(px: u32, px_per_column: u32) -> u16 {
    let cols = px / px_per_column.max(1);
    u16::try_from(cols).unwrap_or(u16::MAX)
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = (u32::from(area.width) * u32::from(percent_x.min(100)) / 100) as u16;
    let height = (u32::from(area.height) * u32::from(percent_y.min(100)) / 100) as u16;
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
