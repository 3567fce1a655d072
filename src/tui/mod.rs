//! Interactive terminal dashboard for the markets feed.
//!
//! Key components:
//! - Application state with background fetches delivered over a channel
//! - Keyboard-driven search and sort over the fetched snapshot
//! - ratatui table rendering with a search bar and key-hint footer

pub mod app;
pub mod events;
pub mod ui;

pub use app::{App, InputMode};
pub use events::EventHandler;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::markets::MarketsClient;

const TICK_RATE: Duration = Duration::from_millis(250);

/// Run the dashboard until the user quits. Fetches once on entry.
pub async fn run(client: MarketsClient) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    client: MarketsClient,
) -> Result<()> {
    let mut app = App::new(client);
    let mut events = EventHandler::new(TICK_RATE);

    // Initial load
    app.spawn_fetch();

    while !app.should_quit {
        app.poll_fetch_outcomes();
        terminal.draw(|frame| ui::draw(frame, &app))?;

        match events.next().await {
            Some(events::Event::Key(key)) => app.handle_key(key),
            Some(events::Event::Tick) => app.tick(),
            Some(events::Event::Error(e)) => {
                tracing::error!("Terminal event error: {}", e);
                app.set_status(e);
            }
            None => break,
        }
    }

    Ok(())
}
