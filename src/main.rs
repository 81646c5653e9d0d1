//! Production Entry TUI - terminal data-entry form for manufacturing
//! production events
//!
//! A Ratatui-based form that records operation, equipment, product,
//! quantity, location, waste and downtime, validates the entry and hands
//! each accepted record to a consumer.

mod app;
mod config;
mod logging;
mod platform;
mod services;
mod state;
mod ui;

use anyhow::{Context, Result};
use app::App;
use config::TuiConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use services::{ConfiguredCauses, LogConsumer};
use std::io;
use std::time::Duration;

fn main() -> Result<()> {
    let config = TuiConfig::load().context("failed to load configuration")?;

    let (log_writer, _log_guard) = logging::file_writer(&TuiConfig::log_dir())?;
    logging::init(&config, log_writer);

    if let Some(path) = TuiConfig::config_path().filter(|p| !p.exists()) {
        match TuiConfig::template().save_to(&path) {
            Ok(()) => tracing::info!("Wrote default config to {}", path.display()),
            Err(err) => tracing::warn!("Could not write default config: {err}"),
        }
    }

    let causes = ConfiguredCauses::from_config(&config);
    let mut app = App::new(&config, &causes, Box::new(LogConsumer::new()));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return instead of exiting so `_log_guard` flushes the log file
    if let Err(err) = &result {
        tracing::error!("Exiting on error: {err:?}");
    }

    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    // Redraw often enough to keep the header clock ticking
    let poll_duration = Duration::from_millis(250);

    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }

                    app.handle_key(key)?;
                }
                Event::Resize(_width, _height) => {
                    // Layout is recalculated on next draw
                }
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
