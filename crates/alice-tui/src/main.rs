use alice_core::settings::Settings;
use alice_core::{HttpAgent, PlainText, SessionController};
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{stdout, Stdout};
use std::sync::Arc;
mod ui;
use ui::app::App;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    let settings = match Settings::new() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Warning: Failed to load settings: {}. Using defaults.", e);
            Settings::default()
        }
    };

    tracing::info!(
        base_url = %settings.base_url,
        agent_id = %settings.agent_id,
        "starting session"
    );

    let agent = Arc::new(HttpAgent::new(&settings));
    let controller = Arc::new(SessionController::new(agent, Arc::new(PlainText)));

    let mut terminal = init_terminal()?;
    let mut app = App::new(settings, controller);

    let result = app.run(&mut terminal);

    restore_terminal(&mut terminal)?;
    tracing::info!("session ended");

    result
}

/// Logs go to a file; the terminal itself belongs to the UI.
fn init_tracing() -> Result<()> {
    let log_file = std::fs::File::create("alice-term.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(log_file)
        .with_ansi(false)
        .init();
    Ok(())
}

fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
