use trivia_tui::adapters::ReqwestHttpClient;
use trivia_tui::api::TriviaClient;
use trivia_tui::app::{App, AppMessage};
use trivia_tui::cli::{parse_args, run_cli_command};
use trivia_tui::config::ApiConfig;
use trivia_tui::logging::init_logging;
use trivia_tui::terminal::{setup_panic_hook, TerminalManager};
use trivia_tui::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};

fn main() -> Result<()> {
    // Handle CLI flags before any terminal setup
    let command = parse_args(std::env::args());
    if run_cli_command(&command) {
        return Ok(());
    }

    color_eyre::install()?;
    if let Some(path) = init_logging()? {
        debug!("Log file: {}", path.display());
    }

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;

    let client = TriviaClient::new(Arc::new(ReqwestHttpClient::new()), ApiConfig::default());
    info!("Starting trivia-tui against {}", client.config().base_url);
    let mut app = App::new(client);

    let mut term_manager = TerminalManager::new()?;

    let result = runtime.block_on(async {
        // The token request needs the runtime, so it starts here
        app.request_token();
        run_app(term_manager.terminal(), &mut app).await
    });

    term_manager.restore()?;
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            app.sync_screen();
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            info!("Quitting");
            return Ok(());
        }

        // 16ms tick drives the loading spinner
        let timeout = tokio::time::sleep(std::time::Duration::from_millis(16));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(err)) => return Err(err.into()),
                    None => return Ok(()),
                }
            }

            // Results from spawned network tasks
            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }
    }
}
