use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::DefaultTerminal;
use tracing::debug;

use crate::app::{App, Message, Model, input, update};

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization fails or the event
    /// loop encounters an I/O failure.
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal; jotter requires an interactive terminal")?;
        let size = terminal.size()?;

        let mut model = Model::new(
            self.identity.clone(),
            self.entries.clone(),
            (size.width, size.height),
        );
        model.sidebar_visible = self.sidebar_visible;
        // The composer is the landing view; the parent page is one GoBack away.
        model = update(model, Message::StartWriting);

        let result = Self::event_loop(&mut terminal, &mut model);

        ratatui::restore();
        result
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let mut needs_render = true;
        loop {
            if needs_render {
                terminal.draw(|frame| crate::ui::render(model, frame))?;
                needs_render = false;
            }

            if event::poll(Duration::from_millis(250))? {
                if let Some(msg) = input::handle_event(&event::read()?, model) {
                    debug!(?msg, "dispatch");
                    *model = update(std::mem::take(model), msg);
                    needs_render = true;
                }

                // Coalesce input bursts (key repeat, paste) into one render.
                while event::poll(Duration::from_millis(0))? {
                    if let Some(msg) = input::handle_event(&event::read()?, model) {
                        *model = update(std::mem::take(model), msg);
                        needs_render = true;
                    }
                }
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }
}
