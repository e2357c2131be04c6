//! Terminal UI surface.

mod app;
mod input;
mod ui;

pub use app::{App, KeyOutcome, NameEdit, TuiSurface};
pub use ui::{cell_at, draw};

use crate::{GameConfig, SurfaceError};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use hotseat_tictactoe::GameEngine;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Owns the terminal in raw mode. Restores it on drop.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    /// Puts the terminal into raw mode on the alternate screen.
    ///
    /// Fails when stdout is not a terminal or the terminal refuses
    /// either mode; nothing is left half set up.
    #[instrument]
    pub fn enter() -> Result<Self, SurfaceError> {
        let mut stdout = io::stdout();
        if !stdout.is_terminal() {
            return Err(SurfaceError::new("stdout is not a terminal"));
        }

        enable_raw_mode()?;
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(e) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
                let _ = disable_raw_mode();
                Err(e.into())
            }
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

/// Runs the terminal game until the player quits.
///
/// The game loop never starts if the terminal cannot be set up.
pub fn run_tui(config: &GameConfig) -> Result<()> {
    info!("Starting hotseat TUI");

    let mut guard = TerminalGuard::enter()?;

    let engine = GameEngine::with_players(
        config.players().one().clone(),
        config.players().two().clone(),
    );
    let mut app = App::new(engine);
    app.start();

    let res = run_app(&mut guard.terminal, &mut app);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        let area = terminal.draw(|f| draw(f, app))?.area;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                // Skip key release events (crossterm fires both press and release).
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if app.handle_key(key) == KeyOutcome::Quit {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left)
                    && app.editing().is_none()
                {
                    if let Some(pos) = cell_at(area, mouse.column, mouse.row) {
                        debug!(%pos, "Cell clicked");
                        app.play(pos.to_index());
                    }
                }
            }
            _ => {}
        }
    }
}
