use crate::config::Config;
use crate::core::branch::BranchRecord;
use crate::core::git::GitOperations;
use crate::ui::keymap::map_key;
use crate::ui::renderer;
use crate::ui::session::InteractiveSession;
use crate::utils::{DustyError, Result};
use anyhow::Result as AnyhowResult;
use crossterm::{
    cursor,
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    widgets::TableState,
    Terminal,
};
use std::io::{self, Write};
use tracing::{info, warn};

pub struct App<'a, G: GitOperations + ?Sized> {
    session: InteractiveSession<'a, G>,
    table_state: TableState,
}

impl<'a, G: GitOperations + ?Sized> App<'a, G> {
    pub fn new(config: &Config, git: &'a G, branches: Vec<BranchRecord>) -> Self {
        Self {
            session: InteractiveSession::new(branches, git, config.on_exhausted),
            table_state: TableState::default(),
        }
    }

    /// Takes over the terminal for the session. Whatever happens after raw mode
    /// is switched on, the terminal is handed back before returning.
    pub fn run(&mut self) -> AnyhowResult<()> {
        enable_raw_mode()?;

        let result = self.run_in_terminal();
        let restored = restore_terminal(&mut io::stdout());

        result.and(restored)
    }

    fn run_in_terminal(&mut self) -> AnyhowResult<()> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        self.run_app(&mut terminal)
    }

    /// Reads one key at a time, applies it to the session and redraws.
    pub fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> AnyhowResult<()> {
        self.draw(terminal)?;

        loop {
            match event::read()? {
                Event::Key(key) => {
                    let Some(session_event) = map_key(key) else {
                        continue;
                    };
                    self.session.handle(session_event);
                    if self.session.is_terminated() {
                        break;
                    }
                    self.draw(terminal)?;
                }
                Event::Resize(_, _) => self.draw(terminal)?,
                _ => {}
            }
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> AnyhowResult<()> {
        let session = &self.session;
        let table_state = &mut self.table_state;
        terminal.draw(|f| renderer::render(f, session, table_state))?;
        Ok(())
    }
}

/// Leaves raw mode and the alternate screen and shows the cursor. Every step is
/// attempted even if an earlier one fails; the first error is returned.
fn restore_terminal<W: Write>(out: &mut W) -> AnyhowResult<()> {
    let raw = disable_raw_mode();
    let screen = execute!(out, LeaveAlternateScreen, cursor::Show);

    if let Err(e) = &raw {
        warn!(event = "cli.interactive.raw_mode_restore_failed", error = %e);
    }
    if let Err(e) = &screen {
        warn!(event = "cli.interactive.screen_restore_failed", error = %e);
    }

    raw?;
    screen?;
    Ok(())
}

pub fn execute<G: GitOperations + ?Sized>(
    config: &Config,
    git: &G,
    branches: Vec<BranchRecord>,
) -> Result<()> {
    info!(
        event = "cli.interactive.started",
        branches = branches.len()
    );

    let mut app = App::new(config, git, branches);
    app.run()
        .map_err(|e| DustyError::terminal(format!("Interactive UI error: {}", e)))
}
