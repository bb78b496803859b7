use buzzboard::api::DashboardApi;
use buzzboard::app::{App, AppMessage, Screen};
use buzzboard::cli::{parse_args, run_cli_command, CliCommand};
use buzzboard::config::DashboardConfig;
use buzzboard::logging::init_logging;
use buzzboard::sync::DataSource;
use buzzboard::terminal::{setup_panic_hook, TerminalManager};
use buzzboard::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Frame tick for animations (spinner, refresh indicator expiry).
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let command = parse_args(std::env::args());
    if command == CliCommand::Version {
        buzzboard::cli::handle_version_command();
    }

    color_eyre::install()?;

    let config = DashboardConfig::load()?;
    let log_path = config.log_path();
    if let Err(e) = init_logging(&log_path) {
        eprintln!("Warning: logging disabled ({}): {}", log_path.display(), e);
    }

    let runtime = tokio::runtime::Runtime::new()?;

    if let Some(result) = run_cli_command(command, &config, &runtime) {
        return result;
    }

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let source: Arc<dyn DataSource> = Arc::new(DashboardApi::from_config(&config));

    runtime.block_on(async {
        let mut term_manager = TerminalManager::new()?;
        let mut app = App::new(source, &config);
        app.mount(Screen::Feed);

        let result = run_app(term_manager.terminal(), &mut app).await;

        app.shutdown();
        term_manager.restore();
        result
    })
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: mpsc::UnboundedReceiver<AppMessage> = match app.take_message_rx() {
        Some(rx) => rx,
        None => return Err(color_eyre::eyre::eyre!("message receiver already taken")),
    };

    let mut ticker = tokio::time::interval(TICK);

    loop {
        // Draw only when state changed, or every tick while a spinner runs
        if app.needs_redraw || app.is_animating() {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            return Ok(());
        }

        tokio::select! {
            _ = ticker.tick() => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => app.handle_key(key),
                    Some(Ok(Event::Resize(width, height))) => {
                        tracing::debug!("Terminal resized to {}x{}", width, height);
                        app.mark_dirty();
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!("Terminal event error: {}", e);
                        return Err(e.into());
                    }
                    None => return Ok(()),
                }
            }

            Some(message) = message_rx.recv() => {
                app.handle_message(message);
            }
        }
    }
}
