//! The `watch` event loop.

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use std::time::Instant;

use super::App;
use crate::adapters::{FilePreferencesProvider, TokioDelay};
use crate::cli::WatchArgs;
use crate::config::WidgetConfig;
use crate::error::WidgetError;
use crate::terminal::{setup_panic_hook, TerminalManager};
use crate::traits::Delay;
use crate::ui;
use crate::widget::WidgetSession;

/// Run the interactive preview until the user quits.
pub async fn run_watch(config: WidgetConfig, args: &WatchArgs) -> Result<()> {
    let config = match &args.layout_table {
        Some(path) => config.with_layout_table_path(path),
        None => config,
    };
    let data_dir = config.data_dir()?;
    let log_path = crate::logging::init_file(&data_dir)?;
    tracing::info!(log = %log_path.display(), "watch started");

    let preferences = FilePreferencesProvider::in_dir(&data_dir);

    setup_panic_hook();
    let mut manager = TerminalManager::new()?;
    let columns = manager.size()?.width;

    let session = WidgetSession::from_config(&config, Some(config.columns_to_px(columns)))?;
    let mut app = App::new(session, config);
    app.session.widget_mut().open();

    if let Err(err) = app.session.load_preferences(&preferences).await {
        warn_or_fail(err)?;
    }
    app.queue_step_messages();

    let result = event_loop(&mut app, &mut manager).await;

    if let Err(err) = app.session.save_preferences(&preferences).await {
        tracing::warn!(code = err.error_code(), error = %err, "could not save pane preferences");
    }
    manager.restore()?;
    result
}

fn warn_or_fail(err: WidgetError) -> Result<()> {
    if err.is_recoverable() {
        tracing::warn!(code = err.error_code(), error = %err, "{}", err.user_message());
        Ok(())
    } else {
        Err(err.into())
    }
}

async fn event_loop(app: &mut App, manager: &mut TerminalManager) -> Result<()> {
    let mut events = EventStream::new();
    let delay = TokioDelay;

    while !app.should_quit {
        if app.needs_redraw {
            let view = app.session.view_state();
            let px_per_column = app.config.px_per_column;
            manager
                .terminal()
                .draw(|frame| ui::render(frame, &view, px_per_column))?;
            app.needs_redraw = false;
        }

        // Sleep until the next paced line or debounced resize, whichever
        // comes first, while input keeps being read.
        let wait = app
            .next_deadline()
            .map(|at| at.saturating_duration_since(Instant::now()));
        let timer = async {
            match wait {
                Some(duration) => delay.sleep(duration).await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            _ = timer => app.on_tick(Instant::now()),
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Some(Ok(Event::Resize(columns, _))) => app.on_resize(columns, Instant::now()),
                Some(Ok(_)) => {}
                Some(Err(err)) => return Err(err.into()),
                None => app.quit(),
            },
        }
    }
    Ok(())
}
