//! Terminal UI for the widget.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, action_for};

use crate::config::WidgetConfig;
use crate::games::tictactoe::GameEngine;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use std::io;
use tracing::{error, info, instrument};

/// Runs the interactive widget until the user quits.
#[instrument(skip_all)]
pub fn run_tui(config: &WidgetConfig) -> Result<()> {
    let mut engine = GameEngine::new();
    match config.victory_chime() {
        Some(chime) => engine.subscribe(chime),
        None => info!("Audio disabled"),
    }
    let mut app = App::new(engine);

    info!("Starting terminal widget");
    let res = with_terminal(ratatui::try_init, ratatui::restore, |terminal| {
        run_loop(terminal, &mut app)
    });

    if let Err(err) = &res {
        error!(error = ?err, "Widget loop error");
    }
    res
}

/// Runs `restore` when dropped, covering early returns and unwinding.
struct RestoreGuard<F: FnMut()>(F);

impl<F: FnMut()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        (self.0)();
    }
}

/// Sets up a terminal, runs `body` on it and restores the terminal however
/// `body` ends, including when `setup` fails partway.
fn with_terminal<T, R>(
    setup: impl FnOnce() -> io::Result<T>,
    restore: impl FnMut(),
    body: impl FnOnce(&mut T) -> Result<R>,
) -> Result<R> {
    let _guard = RestoreGuard(restore);
    let mut terminal = setup()?;
    body(&mut terminal)
}

fn run_loop(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::render(f, app))?;
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }
    info!("User quit");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[test]
    fn test_restores_after_normal_exit() {
        let restored = Cell::new(0);
        let res = with_terminal(|| Ok(()), || restored.set(restored.get() + 1), |_| Ok(7));
        assert_eq!(res.unwrap(), 7);
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn test_restores_when_setup_fails() {
        let restored = Cell::new(0);
        let res = with_terminal(
            || Err::<(), _>(io::Error::other("no tty")),
            || restored.set(restored.get() + 1),
            |_| Ok(()),
        );
        assert!(res.is_err());
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn test_restores_when_loop_fails() {
        let restored = Cell::new(0);
        let res: Result<()> = with_terminal(
            || Ok(()),
            || restored.set(restored.get() + 1),
            |_| Err(anyhow::anyhow!("event read failed")),
        );
        assert!(res.is_err());
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn test_restores_when_loop_panics() {
        let restored = Cell::new(0);
        let res = catch_unwind(AssertUnwindSafe(|| {
            with_terminal(
                || Ok(()),
                || restored.set(restored.get() + 1),
                |_| -> Result<()> { panic!("render bug") },
            )
        }));
        assert!(res.is_err());
        assert_eq!(restored.get(), 1);
    }
}
