//! Nomad TUI - terminal jobs list for a Nomad cluster.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize terminal, logging, and async runtime.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - REST API implementation (see `crates/client`).
//! - Configuration resolution (see `crates/config`).
//! - Async API calls (see `runtime::side_effects`).
//!
//! Invariants:
//! - The TUI enters raw mode and alternate screen on startup.
//! - `load_dotenv()` is called at startup to support `.env` configuration.
//! - Configuration precedence: CLI args > env vars > config file > defaults.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{EnterAlternateScreen, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::channel;
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use nomad_config::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_UI_TICK_MS};
use nomad_tui::action::Action;
use nomad_tui::app::App;
use nomad_tui::cli::Cli;
use nomad_tui::runtime::{
    client::create_shared_client,
    config::load_config,
    dispatch::{Flow, process_action},
    input::spawn_input_task,
    side_effects::TaskTracker,
    terminal::TerminalGuard,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Create logs directory if it doesn't exist
    std::fs::create_dir_all(&cli.log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "nomad-tui.log");
    let (non_blocking, _guard) = non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    // Note: _guard must live for entire main() duration to ensure logs are flushed

    let config = load_config(&cli)?;
    let client = create_shared_client(&config)?;
    tracing::info!(
        address = %config.connection.address,
        namespace = ?config.connection.namespace,
        page_size = config.jobs.page_size,
        "Starting nomad-tui"
    );

    let mut app = App::new(&config);
    let task_tracker = TaskTracker::new();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Restores the terminal on panic/unwind as well as on normal exit
    let _terminal_guard = TerminalGuard::new();

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);

    // Input stream task. Key and resize events are never dropped.
    let input_task = spawn_input_task(EventStream::new(), tx.clone());

    // UI tick interval for toast expiry
    let mut tick_interval =
        tokio::time::interval(tokio::time::Duration::from_millis(DEFAULT_UI_TICK_MS));

    // Data refresh interval (decoupled from UI tick)
    let mut refresh_interval = tokio::time::interval(config.jobs.refresh_interval);
    // The first tick completes immediately; the initial visit already loads
    refresh_interval.tick().await;

    let mut flow = process_action(
        &mut app,
        Action::Visit(cli.location.clone()),
        &client,
        &tx,
        &task_tracker,
    )
    .await;

    // Main event loop
    while flow == Flow::Continue {
        terminal.draw(|f| app.render(f))?;

        let action = tokio::select! {
            Some(action) = rx.recv() => action,
            _ = tick_interval.tick() => Action::Tick,
            _ = refresh_interval.tick() => Action::RefreshTick,
        };

        flow = process_action(&mut app, action, &client, &tx, &task_tracker).await;
    }

    tracing::info!("Shutting down");

    // The input task idles on the terminal and is not tracked
    input_task.abort();
    drop(rx);
    task_tracker.close();
    if tokio::time::timeout(
        tokio::time::Duration::from_secs(2),
        task_tracker.wait(),
    )
    .await
    .is_err()
    {
        tracing::warn!("Timed out waiting for background tasks");
    }

    terminal.show_cursor()?;
    Ok(())
}
