//! mcqtest-tui: Interactive terminal shell.
//!
//! The only crate that knows about ratatui and crossterm. It owns the
//! [`Session`] for the lifetime of the shell and feeds it submit events.
//!
//! ## Event flow
//!
//! A keyboard reader task and a one-second ticker task send [`ShellEvent`]s
//! into one channel. The loop in [`run`] drains that channel, updates the
//! session and the pane state, and redraws. Nothing else writes to the
//! screen.

pub mod event;
pub mod state;
mod ui;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;

use mcqtest_core::session::{Advance, Session};
use mcqtest_core::timer::TICK_PERIOD;

pub use event::ShellEvent;
pub use state::{ShellAction, ShellState};

/// How the shell ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellExit {
    /// Every question was answered and the table was written.
    Completed { path: PathBuf },
    /// The user quit before the end; nothing was saved.
    Quit { answered: usize },
}

/// Take over the terminal and run the session until the user quits.
pub async fn run(mut session: Session) -> Result<ShellExit> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut session).await;
    ratatui::restore();
    result
}

async fn event_loop(terminal: &mut DefaultTerminal, session: &mut Session) -> Result<ShellExit> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let _tasks = event::TaskGuard(vec![
        event::spawn_input_reader(tx.clone()),
        event::spawn_ticker(tx, TICK_PERIOD),
    ]);
    let mut shell = ShellState::new(session);
    let mut answered = 0usize;

    loop {
        terminal.draw(|frame| ui::draw(frame, &shell))?;

        let Some(event) = rx.recv().await else {
            tracing::warn!("event sources closed");
            break;
        };

        match event {
            ShellEvent::Tick => shell.refresh_timer(session, Instant::now()),
            ShellEvent::Resize => {}
            ShellEvent::Key(key) => match shell.on_key(key) {
                ShellAction::Quit => break,
                ShellAction::Submit => {
                    let input = shell.take_input();
                    let advance = session.advance(&input, Instant::now())?;
                    if matches!(advance, Advance::Recorded { .. } | Advance::Completed { .. }) {
                        answered += 1;
                    }
                    shell.apply(&advance, session);
                }
                ShellAction::None => {}
            },
        }
    }

    Ok(match shell.saved_to {
        Some(path) => ShellExit::Completed { path },
        None => {
            tracing::info!(answered, "quit before end of test, nothing saved");
            ShellExit::Quit { answered }
        }
    })
}
