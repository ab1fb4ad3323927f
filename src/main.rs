use contenthub::adapters::SystemClipboard;
use contenthub::app::{App, AppMessage};
use contenthub::cli::{parse_args, run_cli_command};
use contenthub::config::AppConfig;
use contenthub::content::ContentStore;
use contenthub::logging::init_logging;
use contenthub::terminal::{set_window_title, setup_panic_hook, TerminalManager};
use contenthub::ui;

use color_eyre::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use tokio::sync::mpsc;

fn main() -> Result<()> {
    // CLI flags run before any terminal setup
    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(result) = run_cli_command(&command) {
        if let Err(e) = result {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return Ok(());
    }

    color_eyre::install()?;

    let config = AppConfig::from_env();
    match init_logging(&config) {
        Ok(path) => tracing::info!(path = %path.display(), "logging initialized"),
        Err(e) => eprintln!("Warning: logging disabled: {}", e),
    }

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let store = ContentStore::builtin()?;
    tracing::info!(
        posts = store.post_count(),
        weeks = store.weeks().len(),
        "content store loaded"
    );

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let mut term = TerminalManager::new(config.mouse_capture)?;
        if let Err(e) = set_window_title(term.terminal().backend_mut(), &store.metadata().title) {
            tracing::warn!(error = %e, "failed to set window title");
        }

        let mut app = App::new(store, Box::new(SystemClipboard::new()), config);
        let result = run_app(term.terminal(), &mut app).await;

        term.restore()?;
        tracing::info!("exiting");
        result
    })
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();
    let tick_rate = app.config().tick_rate;

    loop {
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, &mut *app);
            })?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(tick_rate);

        tokio::select! {
            _ = timeout => {}

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(event)) => app.handle_event(event),
                    Some(Err(e)) => {
                        tracing::error!(error = %e, "terminal event stream failed");
                        return Err(e.into());
                    }
                    None => app.quit(),
                }
            }

            Some(message) = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(message);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
