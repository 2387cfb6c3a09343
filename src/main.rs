use color_eyre::Result;
use heybo_widget::app::run_watch;
use heybo_widget::cli::{parse_args, run_cli_command, CliCommand, USAGE};
use heybo_widget::config::WidgetConfig;

fn main() -> Result<()> {
    color_eyre::install()?;

    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("Error: {}\n\n{}", err, USAGE);
            std::process::exit(2);
        }
    };

    let config = WidgetConfig::from_env()?;

    if let Some(result) = run_cli_command(&command, config.clone()) {
        if let Err(err) = result {
            eprintln!("Error [{}]: {}", err.error_code(), err.user_message());
            std::process::exit(1);
        }
        return Ok(());
    }

    let CliCommand::Watch(args) = command else {
        return Ok(());
    };
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_watch(config, &args))
}
