use std::io;
use std::sync::Arc;
use std::time::Duration;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use lookbook::adapters::ReqwestHttpClient;
use lookbook::api::CatalogClient;
use lookbook::app::App;
use lookbook::auth::{IdentityService, RestIdentityProvider};
use lookbook::config::Config;
use lookbook::terminal::{enter_tui_mode, leave_tui_mode, setup_panic_hook};
use lookbook::traits::HttpClient;
use lookbook::ui;

/// Send logs to a file; stdout belongs to the TUI. If no data directory is
/// available, run without logging rather than fail startup.
fn init_tracing() {
    let Some(dir) = dirs::data_local_dir().map(|d| d.join("lookbook")) else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::File::create(dir.join("lookbook.log")) else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let config = Config::from_env();
    info!(api_base = %config.api_base, "starting lookbook");

    let http: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new());
    let api = Arc::new(CatalogClient::new(
        Arc::clone(&http),
        config.api_base.clone(),
    ));
    let provider = Arc::new(RestIdentityProvider::new(Arc::clone(&http), &config));
    let identity = Arc::new(IdentityService::new(provider));

    let mut app = App::new(api, identity);

    setup_panic_hook();
    let mut stdout = io::stdout();
    enter_tui_mode(&mut stdout)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    app.start();
    let result = run_app(&mut terminal, &mut app).await;

    leave_tui_mode(terminal.backend_mut());
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx = app
        .message_rx
        .take()
        .ok_or_else(|| color_eyre::eyre::eyre!("message receiver already taken"))?;

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(Duration::from_millis(100));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    match event {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            app.handle_key(key);
                        }
                        Event::Mouse(mouse) => app.handle_mouse(mouse),
                        Event::Resize(_, _) => app.mark_dirty(),
                        _ => {}
                    }
                }
            }

            message = message_rx.recv() => {
                if let Some(message) = message {
                    app.handle_message(message);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
