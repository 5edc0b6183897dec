//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;

use crate::config::Settings;
use crate::error::OnboardError;
use crate::host::CompletionRecord;
use crate::theme::ThemeHandle;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic info
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    // Enable raw mode and enter alternate screen
    enable_raw_mode().map_err(|e| OnboardError::tui("Failed to enable raw mode", e))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| OnboardError::tui("Failed to enter alternate screen", e))?;

    // Create terminal
    let backend = CrosstermBackend::new(stdout);
    let terminal =
        Terminal::new(backend).map_err(|e| OnboardError::tui("Failed to create terminal", e))?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

/// Internal implementation of terminal restoration
fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode().map_err(|e| OnboardError::tui("Failed to disable raw mode", e))?;
    execute!(io::stdout(), LeaveAlternateScreen)
        .map_err(|e| OnboardError::tui("Failed to leave alternate screen", e))?;
    Ok(())
}

/// Run the TUI application
///
/// Returns the record of the last completed onboarding, if the user finished
/// the wizard before quitting.
pub fn run_tui(theme: ThemeHandle, settings: &Settings) -> Result<Option<CompletionRecord>> {
    // Initialize terminal
    let mut terminal = init_terminal()?;

    // Create app state
    let mut app = App::new(theme, settings);

    // Create event handler
    let events = EventHandler::new(Duration::from_millis(settings.tick_rate_ms));

    let result = event_loop(&mut terminal, &mut app, &events);

    // Restore terminal even if the loop failed
    restore_terminal()?;
    result?;

    tracing::info!("tui closed");
    Ok(app.host.take_completed())
}

fn event_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    loop {
        // Render
        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        // Handle events
        match events.next()? {
            Event::Resize(_, _) => {
                // Terminal will redraw automatically
            }
            event => handle_event(app, event)?,
        }

        // Check if we should quit
        if app.should_quit {
            return Ok(());
        }
    }
}
