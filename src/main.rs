//! TripGuide - plan trips from the terminal
//!
//! A terminal UI for building a day-trip itinerary, tracking spending against
//! a budget and browsing destinations, past trips and travel guides.

use std::io;
use std::panic;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use tripguide::app::App;
use tripguide::cli::{Cli, StartupConfig};
use tripguide::config::{Settings, SettingsStore};
use tripguide::{logging, ui};

/// Sets up a panic hook that restores the terminal before printing the panic message.
/// This ensures the terminal is usable even if the application panics.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Draws and handles input until the user quits
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases too
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let startup = match StartupConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Logging is best effort; the app works without a log directory.
    let _log_guard = logging::default_log_dir().and_then(|dir| logging::init(&dir).ok());

    let store = match &startup.config_path {
        Some(path) => Some(SettingsStore::with_path(path.clone())),
        None => SettingsStore::new().ok(),
    };
    let settings = store.as_ref().map(SettingsStore::load).unwrap_or_default();
    tracing::info!(
        screen = startup.screen.label(),
        settings = ?store.as_ref().map(SettingsStore::path),
        "starting tripguide"
    );

    match start(startup, settings, store) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "terminal error");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn start(
    startup: StartupConfig,
    settings: Settings,
    store: Option<SettingsStore>,
) -> io::Result<()> {
    setup_panic_hook();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::with_startup_config(startup, settings, store);
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result
}
