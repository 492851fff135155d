use covidash::app::{App, AppMessage};
use covidash::cli::{self, parse_args, CliCommand, USAGE};
use covidash::config::DashConfig;
use covidash::input::CommandRegistry;
use covidash::logging::init_logging;
use covidash::terminal::{setup_panic_hook, TerminalManager};
use covidash::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = match parse_args(std::env::args()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    match &args.command {
        CliCommand::Version => cli::handle_version_command(),
        CliCommand::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        _ => {}
    }

    let config = args.apply_to(DashConfig::load()?);
    config.validate()?;

    if let Some(path) = init_logging(&config) {
        info!(log_file = %path.display(), version = cli::VERSION, "covidash starting");
    }

    if let CliCommand::Snapshot(selection) = args.command {
        cli::handle_snapshot_command(&config, selection).await?;
        return Ok(());
    }

    setup_panic_hook();

    let mut app = App::from_config(&config)?;
    let mut manager = TerminalManager::new()?;

    app.initialize();

    let registry = CommandRegistry::new();
    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let result = run_app(manager.terminal(), &mut app, &registry, tick_rate).await;

    manager.restore()?;
    if let Err(e) = &result {
        error!("dashboard exited with error: {}", e);
    }
    info!("covidash stopped");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    registry: &CommandRegistry,
    tick_rate: Duration,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // select! needs ownership of the receiver
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Draw only when something changed
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, &app.view_state());
            })?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(tick_rate);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(registry, key);
                    }
                    Some(Ok(Event::Resize(_, _))) => {
                        app.mark_dirty();
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        error!("terminal event error: {}", e);
                    }
                    // Input closed; nothing left to drive the dashboard
                    None => app.quit(),
                }
            }

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

        if app.should_quit {
            return Ok(());
        }
    }
}
