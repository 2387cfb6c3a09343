//! Command-line interface.
//!
//! Parse early in `main()`; `watch` is the default and is handled by the
//! caller because it needs the terminal and the async runtime.
//!
//! ```ignore
//! use heybo_widget::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! if let Some(result) = run_cli_command(&command, config) {
//!     return result;
//! }
//! // start the watch loop
//! ```

pub mod args;
pub mod simulate;
pub mod version;

pub use args::{parse_args, CliCommand, SimEvent, SimulateArgs, WatchArgs, USAGE};
pub use simulate::{apply_event, handle_simulate_command, run_events};
pub use version::{handle_help_command, handle_version_command, VERSION};

use crate::config::WidgetConfig;
use crate::error::WidgetResult;

/// Run a non-interactive command.
///
/// Returns `None` for `Watch`.
pub fn run_cli_command(command: &CliCommand, config: WidgetConfig) -> Option<WidgetResult<()>> {
    match command {
        CliCommand::Version => {
            handle_version_command();
            Some(Ok(()))
        }
        CliCommand::Help => {
            handle_help_command();
            Some(Ok(()))
        }
        CliCommand::Simulate(args) => {
            crate::logging::init_stderr();
            Some(handle_simulate_command(args, config))
        }
        CliCommand::Watch(_) => None,
    }
}
