use physioconnect::app::{App, AppMessage};
use physioconnect::cli::{parse_args, run_cli_command, CliCommand};
use physioconnect::config::AppConfig;
use physioconnect::content::Content;
use physioconnect::error::{PhysioError, UiError};
use physioconnect::terminal::{setup_panic_hook, TerminalManager};
use physioconnect::{logging, ui};

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use tokio::sync::mpsc;
use tokio::time::Instant;

fn main() -> Result<()> {
    color_eyre::install()?;

    let command = parse_args(std::env::args());
    if let Some(result) = run_cli_command(&command) {
        return result;
    }
    let CliCommand::RunTui(options) = command else {
        return Ok(());
    };
    let config = options.apply(AppConfig::from_env());

    match logging::init_logging(config.log_file.as_deref()) {
        Ok(path) => tracing::info!(path = %path.display(), "logging to file"),
        Err(e) => eprintln!("{}", e.user_message()),
    }

    let content = Content::load_or_embedded(config.content_path.as_deref())?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(config, content))
}

async fn run(config: AppConfig, content: Content) -> Result<()> {
    setup_panic_hook();
    let mut manager = TerminalManager::new()?;
    let (width, height) = manager.size()?;

    let mut app = App::new(config, Box::new(content));
    app.on_resize(width, height);
    spawn_ctrl_c_forwarder(app.message_tx.clone());

    let result = run_app(manager.terminal(), &mut app).await;

    app.shutdown();
    manager.restore()?;
    result
}

/// Turn SIGINT into a quit message so the loop can exit cleanly.
fn spawn_ctrl_c_forwarder(tx: mpsc::UnboundedSender<AppMessage>) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = tx.send(AppMessage::Quit);
        }
    });
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let started = Instant::now();
    let mut event_stream = EventStream::new();
    let mut message_rx = app.message_rx.take();
    let mut tick = tokio::time::interval(app.config.tick_rate);

    loop {
        app.advance(started.elapsed());

        if app.take_layout_request() {
            terminal.clear()?;
            app.mark_dirty();
        }

        if app.needs_redraw {
            let screen = app.current_screen();
            terminal.draw(|f| ui::render(f, app)).map_err(|e| {
                PhysioError::from(UiError::RenderFailed {
                    component: screen.route().to_string(),
                    message: e.to_string(),
                })
            })?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            return Ok(());
        }

        tokio::select! {
            _ = tick.tick() => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.mark_dirty();
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Resize(width, height))) => {
                        app.on_resize(width, height);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, "terminal event error");
                    }
                    None => {
                        tracing::info!("terminal event stream closed");
                        app.quit();
                    }
                }
            }

            Some(msg) = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(msg);
            }
        }
    }
}
