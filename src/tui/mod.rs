//! Interactive terminal form for credit risk scoring.
//!
//! This module provides the keyboard-driven form using `ratatui`: eleven
//! bounded input widgets arranged in a grid, a continuously derived
//! loan-to-income ratio, and a result panel fed by the scoring
//! collaborator.
//!
//! # Usage
//!
//! ```rust,ignore
//! use riskform::scoring::LogisticModel;
//! use riskform::tui::FormTui;
//!
//! let mut tui = FormTui::new(Box::new(LogisticModel::default()))?;
//! tui.run()?;
//! // Terminal cleanup happens automatically on drop
//! ```

pub mod app;
pub mod fields;
pub mod form_view;
pub mod theme;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::scoring::Scorer;

use app::FormApp;

/// Form TUI manager owning the terminal and the application state.
pub struct FormTui {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: FormApp,
}

impl FormTui {
    /// Initialize the terminal and build the form around a scoring
    /// collaborator.
    pub fn new(scorer: Box<dyn Scorer>) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app: FormApp::new(scorer),
        })
    }

    /// Run the blocking event loop until the user quits.
    ///
    /// A scorer fault propagates out of this loop; the `Drop` impl still
    /// restores the terminal.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.terminal.draw(|f| form_view::render(f, &self.app))?;

            if event::poll(std::time::Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }

                    // Handle Ctrl+C to quit
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        break;
                    }

                    if self.app.handle_key(key)? {
                        break; // Exit requested
                    }
                }
            }
        }

        self.cleanup()?;
        Ok(())
    }

    /// Clean up and restore terminal
    fn cleanup(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for FormTui {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
