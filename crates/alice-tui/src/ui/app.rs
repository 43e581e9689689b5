use super::{chat::render_chat, footer::render_footer, header::render_header};
use alice_core::settings::Settings;
use alice_core::theme::Theme;
use alice_core::SessionController;
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::prelude::{Constraint, CrosstermBackend, Direction, Layout, Terminal};
use std::io::Stdout;
use std::sync::Arc;

pub struct App {
    should_quit: bool,
    theme: Theme,
    settings: Settings,
    controller: Arc<SessionController>,
    input: String,
}

impl App {
    pub fn new(settings: Settings, controller: Arc<SessionController>) -> Self {
        let theme = Theme::new(settings.theme);
        Self {
            should_quit: false,
            theme,
            settings,
            controller,
            input: String::new(),
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        while !self.should_quit {
            self.draw(terminal)?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        terminal.draw(|frame| {
            let area = frame.size();
            let app_chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(0),
                    Constraint::Length(3),
                ])
                .split(area);

            render_header(
                frame,
                app_chunks[0],
                &self.theme,
                &self.settings,
                self.controller.phase(),
            );
            render_chat(
                frame,
                app_chunks[1],
                &self.theme,
                &self.controller.entries(),
            );
            render_footer(
                frame,
                app_chunks[2],
                &self.theme,
                self.controller.prompt(),
                &self.input,
            );
        })?;
        Ok(())
    }

    fn handle_events(&mut self) -> Result<()> {
        // 50 ms poll keeps the spinner and typewriter visibly moving
        // between keystrokes.
        if !event::poll(std::time::Duration::from_millis(50))? {
            return Ok(());
        }
        let Event::Key(key) = event::read()? else {
            return Ok(());
        };
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        // Quit and theme toggle work regardless of the busy state.
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return Ok(());
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return Ok(());
            }
            KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.theme.toggle();
                self.settings.theme = self.theme.variant();
                self.settings.save().unwrap_or_default();
                return Ok(());
            }
            _ => {}
        }

        // An empty prompt means a turn is in flight: typing is disabled
        // until the controller is idle again.
        if self.controller.prompt().is_empty() {
            return Ok(());
        }

        match key.code {
            KeyCode::Char(c) => self.input.push(c),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => self.submit_line(),
            _ => {}
        }
        Ok(())
    }

    /// Hand the typed line to the controller and let the turn run in
    /// the background; the draw loop keeps rendering while the reply
    /// animates in.
    fn submit_line(&mut self) {
        let line = std::mem::take(&mut self.input);
        if line.trim().is_empty() {
            return;
        }
        let controller = Arc::clone(&self.controller);
        tokio::spawn(async move {
            controller.submit(&line).await;
        });
    }
}
