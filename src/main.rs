//! ShowScout - search the TVmaze show directory and browse episode lists
//!
//! # Usage
//!
//! ```bash
//! # Launch interactive TUI
//! showscout
//!
//! # CLI mode (for automation)
//! showscout search "batman"
//! showscout episodes 975 --json
//! ```

use std::io::{stdout, Stdout};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use showscout::app::{self, App, Response};
use showscout::cli::{Cli, Command, ExitCode, Output};
use showscout::commands;
use showscout::{Config, Document, TvMazeClient};

/// Terminal type alias for convenience
type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(!cli.is_cli_mode());

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let mut client = TvMazeClient::from_config(&config);
    if let Some(url) = &cli.base_url {
        client = client.at_base_url(url.as_str());
    }
    info!(base_url = client.base_url(), "starting showscout");

    if cli.is_cli_mode() {
        let exit_code = run_cli(cli, &client, &config).await;
        std::process::exit(exit_code.into());
    } else {
        run_tui(client).await
    }
}

/// Run CLI command and return exit code
async fn run_cli(cli: Cli, client: &TvMazeClient, config: &Config) -> ExitCode {
    let output = Output::new(&cli);

    match cli.command {
        Some(Command::Search(cmd)) => commands::search_cmd(cmd, client, config, &output).await,
        Some(Command::Episodes(cmd)) => commands::episodes_cmd(cmd, client, &output).await,
        Some(Command::Page(cmd)) => commands::page_cmd(cmd, client, &output).await,
        None => ExitCode::Success,
    }
}

// =============================================================================
// Logging
// =============================================================================

/// CLI mode logs to stderr. TUI mode logs to a file so the screen stays
/// clean, and logs nowhere if no cache directory exists.
fn init_logging(tui: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "showscout=warn".into());

    if !tui {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
        return;
    }

    let Some(file) = open_log_file() else {
        return;
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .init();
}

fn open_log_file() -> Option<std::fs::File> {
    let dir = dirs::cache_dir()?.join("showscout");
    std::fs::create_dir_all(&dir).ok()?;
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("showscout.log"))
        .ok()
}

// =============================================================================
// TUI Mode
// =============================================================================

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run interactive TUI
async fn run_tui(client: TvMazeClient) -> Result<()> {
    let mut terminal = init_terminal()?;
    let mut app = App::new();
    let mut doc = Document::new();

    let result = run_event_loop(&mut terminal, &mut app, &mut doc, client).await;

    // Always restore terminal, even on error
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop - handles input, spawns fetches, applies their responses
///
/// Fetches run on their own tasks; overlapping responses are sorted out by
/// the sequence check in `App::apply`.
async fn run_event_loop(terminal: &mut Tui, app: &mut App, doc: &mut Document, client: TvMazeClient) -> Result<()> {
    const TICK_RATE: Duration = Duration::from_millis(100);

    let (tx, mut rx) = mpsc::unbounded_channel::<Response>();

    while app.running {
        terminal.draw(|frame| showscout::ui::draw(frame, app, doc))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (ignore releases on Windows)
                if key.kind == KeyEventKind::Press {
                    if let Some(request) = app.handle_key(key, doc) {
                        let client = client.clone();
                        let tx = tx.clone();
                        tokio::spawn(async move {
                            let response = app::execute(&client, request).await;
                            if tx.send(response).is_err() {
                                warn!("event loop gone, dropping response");
                            }
                        });
                    }
                }
            }
        }

        while let Ok(response) = rx.try_recv() {
            app.apply(response, doc);
        }
    }

    Ok(())
}
