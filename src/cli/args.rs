//! Command-line argument parsing.
//!
//! ```text
//! heybo-widget [--layout-table PATH] [watch]
//! heybo-widget [--layout-table PATH] simulate EVENT...
//! heybo-widget --version | --help
//! ```
//!
//! Simulate events are single tokens: `width=1500`, `step=signature-bowls`,
//! `select=favorites/list`, `focus=left|right|none`, `back`, `reset`,
//! `toggle-left`, `toggle-right`, `open`, `close`, `minimize`.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::is_json_path;
use crate::error::ConfigError;
use crate::layout::Pane;
use crate::navigation::FlowType;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Version,
    Help,
    /// Replay events and print a JSON snapshot after each one.
    Simulate(SimulateArgs),
    /// Interactive terminal preview (default).
    Watch(WatchArgs),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimulateArgs {
    pub layout_table: Option<PathBuf>,
    pub events: Vec<SimEvent>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WatchArgs {
    pub layout_table: Option<PathBuf>,
}

/// One scripted widget event.
#[derive(Debug, Clone, PartialEq)]
pub enum SimEvent {
    Width(i32),
    Step(String),
    Select { flow: FlowType, stage: String },
    Focus(Option<Pane>),
    Back,
    Reset,
    ToggleLeft,
    ToggleRight,
    Open,
    Close,
    Minimize,
}

impl FromStr for SimEvent {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ConfigError::invalid_value("event", s, reason);

        if let Some((key, value)) = s.split_once('=') {
            return match key {
                "width" => value
                    .parse::<i32>()
                    .map(SimEvent::Width)
                    .map_err(|e| invalid(&e.to_string())),
                "step" if !value.is_empty() => Ok(SimEvent::Step(value.to_string())),
                "select" => {
                    let (flow, stage) = value
                        .split_once('/')
                        .ok_or_else(|| invalid("expected select=FLOW/STAGE"))?;
                    Ok(SimEvent::Select {
                        flow: flow.parse()?,
                        stage: stage.to_string(),
                    })
                }
                "focus" => match value {
                    "left" => Ok(SimEvent::Focus(Some(Pane::Left))),
                    "right" => Ok(SimEvent::Focus(Some(Pane::Right))),
                    "none" => Ok(SimEvent::Focus(None)),
                    _ => Err(invalid("expected focus=left, right or none")),
                },
                _ => Err(invalid("unknown event")),
            };
        }

        match s {
            "back" => Ok(SimEvent::Back),
            "reset" => Ok(SimEvent::Reset),
            "toggle-left" => Ok(SimEvent::ToggleLeft),
            "toggle-right" => Ok(SimEvent::ToggleRight),
            "open" => Ok(SimEvent::Open),
            "close" => Ok(SimEvent::Close),
            "minimize" => Ok(SimEvent::Minimize),
            _ => Err(invalid("unknown event")),
        }
    }
}

impl fmt::Display for SimEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimEvent::Width(px) => write!(f, "width={px}"),
            SimEvent::Step(step) => write!(f, "step={step}"),
            SimEvent::Select { flow, stage } => write!(f, "select={flow}/{stage}"),
            SimEvent::Focus(Some(pane)) => write!(f, "focus={pane}"),
            SimEvent::Focus(None) => f.write_str("focus=none"),
            SimEvent::Back => f.write_str("back"),
            SimEvent::Reset => f.write_str("reset"),
            SimEvent::ToggleLeft => f.write_str("toggle-left"),
            SimEvent::ToggleRight => f.write_str("toggle-right"),
            SimEvent::Open => f.write_str("open"),
            SimEvent::Close => f.write_str("close"),
            SimEvent::Minimize => f.write_str("minimize"),
        }
    }
}

/// Parse command-line arguments, skipping the program name.
pub fn parse_args<I>(args: I) -> Result<CliCommand, ConfigError>
where
    I: Iterator<Item = String>,
{
    let mut layout_table = None;
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--layout-table" => {
                let path = args
                    .next()
                    .map(PathBuf::from)
                    .ok_or_else(|| ConfigError::invalid_value("--layout-table", "", "missing path"))?;
                if !is_json_path(&path) {
                    return Err(ConfigError::invalid_value(
                        "--layout-table",
                        path.display().to_string(),
                        "expected a .json file",
                    ));
                }
                layout_table = Some(path);
            }
            "simulate" => {
                let events = args
                    .map(|event| event.parse::<SimEvent>())
                    .collect::<Result<Vec<_>, _>>()?;
                return Ok(CliCommand::Simulate(SimulateArgs {
                    layout_table,
                    events,
                }));
            }
            "watch" => return Ok(CliCommand::Watch(WatchArgs { layout_table })),
            other => {
                return Err(ConfigError::invalid_value("argument", other, "unknown argument; see --help"));
            }
        }
    }
    Ok(CliCommand::Watch(WatchArgs { layout_table }))
}

pub const USAGE: &str = "\
Usage:
  heybo-widget [--layout-table PATH] [watch]
  heybo-widget [--layout-table PATH] simulate EVENT...
  heybo-widget --version | --help

Events:
  width=PX            set the viewport width in pixels
  step=STEP           move the chatbot to STEP
  select=FLOW/STAGE   click a breadcrumb or menu entry
  focus=PANE          left, right or none
  back | reset        navigate back, reset the session
  toggle-left | toggle-right
  open | close | minimize";

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliCommand, ConfigError> {
        let args: Vec<String> = std::iter::once("heybo-widget")
            .chain(args.iter().copied())
            .map(String::from)
            .collect();
        parse_args(args.into_iter())
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]).unwrap(), CliCommand::Version);
        assert_eq!(parse(&["-V"]).unwrap(), CliCommand::Version);
    }

    #[test]
    fn test_parse_help_flag() {
        assert_eq!(parse(&["-h"]).unwrap(), CliCommand::Help);
    }

    #[test]
    fn test_parse_no_args_watches() {
        assert_eq!(parse(&[]).unwrap(), CliCommand::Watch(WatchArgs::default()));
    }

    #[test]
    fn test_parse_simulate_events() {
        let command = parse(&[
            "simulate",
            "width=1500",
            "step=signature-bowls",
            "select=favorites/list",
            "focus=none",
            "back",
            "toggle-right",
        ])
        .unwrap();

        let CliCommand::Simulate(args) = command else {
            panic!("expected simulate, got {:?}", command);
        };
        assert_eq!(
            args.events,
            vec![
                SimEvent::Width(1500),
                SimEvent::Step("signature-bowls".to_string()),
                SimEvent::Select {
                    flow: FlowType::Favorites,
                    stage: "list".to_string(),
                },
                SimEvent::Focus(None),
                SimEvent::Back,
                SimEvent::ToggleRight,
            ]
        );
    }

    #[test]
    fn test_event_display_parses_back() {
        for token in ["width=-20", "step=upsell", "select=order-review/confirmation", "focus=right", "minimize"] {
            let event: SimEvent = token.parse().unwrap();
            assert_eq!(event.to_string(), token);
        }
    }

    #[test]
    fn test_parse_layout_table() {
        let command = parse(&["--layout-table", "table.json", "watch"]).unwrap();
        assert_eq!(
            command,
            CliCommand::Watch(WatchArgs {
                layout_table: Some(PathBuf::from("table.json")),
            })
        );
    }

    #[test]
    fn test_parse_rejects_non_json_table() {
        assert!(parse(&["--layout-table", "table.toml"]).is_err());
        assert!(parse(&["--layout-table"]).is_err());
    }

    #[test]
    fn test_parse_rejects_bad_events() {
        assert!(parse(&["simulate", "width=wide"]).is_err());
        assert!(parse(&["simulate", "select=checkout/review"]).is_err());
        assert!(parse(&["simulate", "jump"]).is_err());
        assert!(parse(&["simulate", "step="]).is_err());
    }

    #[test]
    fn test_parse_unknown_argument() {
        let err = parse(&["--sync"]).unwrap_err();
        assert!(err.to_string().contains("--sync"));
    }
}
