//! Terminal setup and teardown
//!
//! Raw mode plus the alternate screen, with a panic hook that restores the
//! terminal before the panic message is printed.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::config::paths::RoiPaths;
use crate::config::settings::Settings;
use crate::error::RoiError;
use crate::models::Worksheet;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the calculator until the user quits
pub fn run_tui(settings: &Settings, paths: &RoiPaths, worksheet: Worksheet) -> Result<()> {
    let mut terminal = init_terminal()?;
    let mut app = App::with_worksheet(settings, paths, worksheet);
    tracing::info!("tui started");

    let result = event_loop(&mut terminal, &mut app);

    restore_terminal()?;
    tracing::info!("tui stopped");
    result
}

fn event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let events = EventHandler::default();

    loop {
        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        let event = events
            .next()
            .map_err(|_| RoiError::Tui("terminal event stream closed".into()))?;

        match event {
            Event::Resize(_, _) => {
                // Redrawn on the next pass
            }
            event => handle_event(app, event)?,
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
