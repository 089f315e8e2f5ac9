use std::io;
use std::time::Duration;

use clap::Parser;
use ratatui::Terminal;
use ratatui::crossterm::event;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::CrosstermBackend;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use daybrief_core::{config_file, date, from_root};

mod action;
mod app;
mod backend;
mod input;
mod model;
mod theme;
mod tui_event;
mod view;

use app::App;

/// Daybrief TUI — browse dated briefings from the terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Briefing root: an http(s) base URL or a local directory
    root: Option<String>,

    /// Start at a specific date (YYYY-MM-DD) instead of the most recent
    #[arg(long)]
    date: Option<String>,

    /// Color theme: paper (default) or dark
    #[arg(long)]
    theme: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let config = config_file::load_config();

    // Resolve the briefing root from CLI arg > env var > config file
    let root = args
        .root
        .or_else(|| std::env::var("DAYBRIEF_ROOT").ok().filter(|r| !r.is_empty()))
        .or_else(|| config.source.as_ref().and_then(|s| s.root.clone()))
        .ok_or_else(|| {
            anyhow::anyhow!(
                "no briefing root configured: pass <root>, set DAYBRIEF_ROOT, \
                 or add [source] root to the config file"
            )
        })?;

    let start_date = match &args.date {
        Some(s) => Some(
            date::parse_iso(s)
                .ok_or_else(|| anyhow::anyhow!("invalid --date {s}: expected YYYY-MM-DD"))?,
        ),
        None => None,
    };

    // Select theme from CLI flag > config file
    let theme_name = args
        .theme
        .or_else(|| config.display.as_ref().and_then(|d| d.theme.clone()))
        .unwrap_or_else(|| "paper".to_string());
    let theme = theme::Theme::by_name(&theme_name);

    // The terminal owns stdout; logs go to a file in the cache directory.
    let _log_guard = init_logging();

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Install panic hook that restores terminal before printing panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let backend_terminal = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend_terminal)?;

    // Drain any stray input events (e.g. Enter keypress from launching the command)
    while event::poll(Duration::from_millis(50)).unwrap_or(false) {
        let _ = event::read();
    }

    let mut app = App::new(theme, theme_name);
    app.root = Some(root.clone());
    app.start_date = start_date;
    if let Some(sidebar) = config.display.as_ref().and_then(|d| d.sidebar) {
        app.sidebar_visible = sidebar;
    }

    let source = from_root(&root);

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<tui_event::BackendCommand>();
    let cancel = CancellationToken::new();

    app.backend_cmd_tx = Some(cmd_tx.clone());

    // Spawn the backend fetch listener
    tokio::spawn(backend::run(source, cmd_rx, event_tx));

    // Kick off the one-time index load
    app.loading_index = true;
    let _ = cmd_tx.send(tui_event::BackendCommand::LoadIndex);

    // Also handle Ctrl+C at the OS level for clean shutdown
    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel_for_signal.cancel();
        }
    });

    // Main event loop
    let tick_rate = Duration::from_millis(100);

    loop {
        // Draw
        terminal.draw(|f| app.view(f))?;

        tokio::select! {
            // Backend events (non-blocking drain)
            maybe_event = event_rx.recv() => {
                if let Some(backend_event) = maybe_event {
                    app.handle_backend_event(backend_event);
                    // Drain any additional queued backend events
                    while let Ok(evt) = event_rx.try_recv() {
                        app.handle_backend_event(evt);
                    }
                }
            }
            _ = cancel.cancelled() => {
                app.should_quit = true;
            }
            // Terminal input events
            _ = async {
                if event::poll(tick_rate).unwrap_or(false) {
                    if let Ok(evt) = event::read() {
                        let action = input::map_event(&evt, &app.input_mode);
                        app.update(action);
                    }
                }
            } => {}
        }

        // Process tick
        app.update(action::Action::Tick);

        if app.should_quit {
            cancel.cancel();
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;

    Ok(())
}

/// Set up file logging under the platform cache directory. Returns the
/// writer guard so buffered lines flush on exit.
fn init_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let dir = dirs::cache_dir()?.join("daybrief");
    std::fs::create_dir_all(&dir).ok()?;
    let appender = tracing_appender::rolling::never(dir, "daybrief-tui.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Some(guard)
}
