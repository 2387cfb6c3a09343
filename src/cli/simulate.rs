//! `simulate`: replay scripted events and print one JSON snapshot per line.

use std::io::Write;

use serde::Serialize;

use super::args::{SimEvent, SimulateArgs};
use crate::config::WidgetConfig;
use crate::error::WidgetResult;
use crate::view_state::WidgetViewState;
use crate::widget::WidgetSession;

#[derive(Serialize)]
struct SnapshotLine<'a> {
    event: String,
    state: WidgetViewState<'a>,
}

/// Apply one event to the session.
pub fn apply_event(session: &mut WidgetSession, event: &SimEvent) {
    match event {
        SimEvent::Width(px) => session.set_screen_width(*px),
        SimEvent::Step(step) => {
            session.set_step(step);
        }
        SimEvent::Select { flow, stage } => {
            session.select_breadcrumb(*flow, stage);
        }
        SimEvent::Focus(pane) => session.layout_mut().set_focused_pane(*pane),
        SimEvent::Back => {
            session.go_back();
        }
        SimEvent::Reset => session.reset_session(),
        SimEvent::ToggleLeft => session.layout_mut().toggle_left_pane(),
        SimEvent::ToggleRight => session.layout_mut().toggle_right_pane(),
        SimEvent::Open => session.widget_mut().open(),
        SimEvent::Close => session.widget_mut().close(),
        SimEvent::Minimize => session.widget_mut().toggle_minimized(),
    }
}

/// Write the initial snapshot, then one snapshot after each event.
pub fn run_events<W: Write>(
    session: &mut WidgetSession,
    events: &[SimEvent],
    out: &mut W,
) -> WidgetResult<()> {
    write_line(out, "init".to_string(), session)?;
    for event in events {
        apply_event(session, event);
        tracing::debug!(%event, "simulated event applied");
        write_line(out, event.to_string(), session)?;
    }
    out.flush()?;
    Ok(())
}

/// Handle the `simulate` command against stdout.
pub fn handle_simulate_command(args: &SimulateArgs, config: WidgetConfig) -> WidgetResult<()> {
    let config = match &args.layout_table {
        Some(path) => config.with_layout_table_path(path),
        None => config,
    };
    let mut session = WidgetSession::from_config(&config, None)?;
    let stdout = std::io::stdout();
    run_events(&mut session, &args.events, &mut stdout.lock())
}

fn write_line<W: Write>(out: &mut W, event: String, session: &WidgetSession) -> WidgetResult<()> {
    let line = SnapshotLine {
        event,
        state: session.view_state(),
    };
    serde_json::to_writer(&mut *out, &line)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Pane;
    use crate::navigation::FlowType;

    fn lines(events: &[SimEvent]) -> Vec<serde_json::Value> {
        let mut session = WidgetSession::default();
        let mut out = Vec::new();
        run_events(&mut session, events, &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_one_line_per_event_plus_initial() {
        let out = lines(&[SimEvent::Width(1500), SimEvent::Width(800)]);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0]["event"], "init");
        assert_eq!(out[1]["state"]["mode"], "dual-pane");
        assert_eq!(out[2]["event"], "width=800");
        assert_eq!(out[2]["state"]["right_pane_collapsed"], true);
    }

    #[test]
    fn test_select_then_back() {
        let out = lines(&[
            SimEvent::Step("signature-bowls".to_string()),
            SimEvent::Select {
                flow: FlowType::Favorites,
                stage: "list".to_string(),
            },
            SimEvent::Back,
        ]);
        assert_eq!(out[2]["state"]["current_step"], "favorites");
        assert_eq!(out[3]["state"]["stage"], "selection");
        assert_eq!(out[3]["state"]["current_step"], "signature-bowls");
    }

    #[test]
    fn test_pane_and_widget_events() {
        let mut session = WidgetSession::default();
        apply_event(&mut session, &SimEvent::Focus(Some(Pane::Right)));
        apply_event(&mut session, &SimEvent::ToggleLeft);
        apply_event(&mut session, &SimEvent::Open);
        apply_event(&mut session, &SimEvent::Minimize);

        assert_eq!(session.layout().state().focused_pane, Some(Pane::Right));
        assert!(session.layout().state().left_pane_collapsed);
        assert!(session.widget().is_open);
        assert!(session.widget().is_minimized);
    }
}
