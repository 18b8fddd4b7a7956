//! Signup TUI - terminal registration form
//!
//! A Ratatui-based registration form with real-time field validation, a
//! password strength meter and a simulated account creation flow.

mod app;
mod config;
mod platform;
mod state;
mod submission;
mod ui;

use anyhow::Result;
use app::App;
use config::TuiConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use state::AppState;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use submission::SimulatedSubmission;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "signup_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = TuiConfig::load().unwrap_or_else(|err| {
        tracing::warn!("Failed to load config, using defaults: {err}");
        TuiConfig::default()
    });

    // Build the form before touching the terminal so binding errors print cleanly
    let state = AppState::new(&config)?;
    let client = Arc::new(SimulatedSubmission::new(config.submit_delay()));
    let mut app = App::new(state, client);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Apply finished submissions before drawing
        app.poll_submissions();

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Use faster polling while the strength bar moves or a submission is
        // in flight (16ms = ~60fps), normal polling (100ms) otherwise
        let poll_duration = if app.is_animating() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        // Yield so the submission task can make progress between polls
        tokio::task::yield_now().await;

        if event::poll(poll_duration)? {
            match event::read()? {
                // Windows reports releases as well
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key)?,
                Event::Resize(_width, _height) => {
                    // Layout is recalculated on next draw
                }
                _ => {}
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
