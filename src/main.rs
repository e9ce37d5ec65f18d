//! tagpick - a terminal multi-select tag picker.
//!
//! Reads a JSON items file, runs a full-screen picker with a tag-chip input
//! and a filterable candidate dropdown, and prints the accepted selection to
//! stdout, one entry per line.

mod app;
mod cli;
mod config;
mod error;
mod events;
mod logging;
mod source;
mod ui;

use std::io;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::warn;

use app::{App, Outcome};
use cli::Cli;
use config::Config;
use error::{AppError, Result};
use events::EventHandler;
use source::ItemSource;
use ui::{init_theme, Theme};

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("Warning: could not initialize logging: {}", e);
    }

    let code = match run(cli) {
        Ok(Some(lines)) => {
            for line in lines {
                println!("{}", line);
            }
            0
        }
        // Cancelled: print nothing.
        Ok(None) => 1,
        Err(e) => {
            warn!(error = %e, "fatal error");
            eprintln!("Error: {}", e.user_message());
            1
        }
    };

    logging::shutdown();
    std::process::exit(code);
}

/// Run the picker and return the lines to print, or `None` when cancelled.
fn run(cli: Cli) -> Result<Option<Vec<String>>> {
    let mut config = Config::load().unwrap_or_else(|e| {
        warn!(error = %e, "failed to load config, using defaults");
        Config::default()
    });

    // A theme passed on the command line becomes the persisted preference.
    if let Some(theme_arg) = cli.theme {
        let preference = theme_arg.into();
        if config.settings.theme != Some(preference) {
            config.settings.theme = Some(preference);
            if let Err(e) = config.save() {
                warn!(error = %e, "failed to persist theme preference");
            }
        }
    }

    init_theme(Theme::from_preference(config.settings.theme));

    let source = ItemSource::load(&cli.items)?;
    let placeholder = cli
        .placeholder
        .unwrap_or_else(|| config.settings.placeholder.clone());

    let mut app = App::new(source.clone(), placeholder, &cli.preselect);
    if let Some(filter) = cli.filter {
        app.set_initial_filter(filter);
    }

    let events = EventHandler::with_tick_rate(config.settings.tick_rate_ms);
    let mut terminal = setup_terminal()?;
    let loop_result = run_loop(&mut terminal, &mut app, &events);
    restore_terminal(&mut terminal)?;
    loop_result?;

    match app.outcome() {
        Some(Outcome::Accepted(ids)) => {
            let lines = if cli.print_labels {
                ids.iter()
                    .map(|id| {
                        source
                            .get(id)
                            .map(|item| item.label.clone())
                            .unwrap_or_else(|| id.clone())
                    })
                    .collect()
            } else {
                ids.clone()
            };
            Ok(Some(lines))
        }
        Some(Outcome::Cancelled) | None => Ok(None),
    }
}

/// Draw and process events until the application asks to quit.
fn run_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| app.view(frame))?;
        let event = events.next()?;
        app.update(event);
    }
    Ok(())
}

/// Put the terminal into raw mode on the alternate screen.
fn setup_terminal() -> Result<Tui> {
    enable_raw_mode().map_err(|e| AppError::terminal(e.to_string()))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| AppError::terminal(e.to_string()))?;
    Terminal::new(CrosstermBackend::new(stdout)).map_err(|e| AppError::terminal(e.to_string()))
}

/// Restore the terminal to its normal state.
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode().map_err(|e| AppError::terminal(e.to_string()))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(|e| AppError::terminal(e.to_string()))?;
    terminal
        .show_cursor()
        .map_err(|e| AppError::terminal(e.to_string()))
}
