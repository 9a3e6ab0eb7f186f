//! Interactive dashboard loop.
//!
//! One consumer thread owns the terminal and both controllers; a small
//! input thread forwards key events, and fetch tasks settle over the same
//! channel. Updates are serialized by the loop, so the controllers never
//! see concurrent mutation — only interleaved fetch results, which they
//! resolve by sequence number.

use std::io;
use std::sync::mpsc::{Receiver, channel};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{Event, poll, read},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::runtime::Runtime;

use crate::context::AppContext;
use crate::tui::{AppState, TuiEvent, fetch, ui};

const INPUT_POLL: Duration = Duration::from_millis(100);

/// Restores the terminal even when the loop errors out.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        execute!(io::stdout(), EnterAlternateScreen)?;
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

pub fn handle(ctx: &AppContext, runtime: &Runtime) -> Result<()> {
    let guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let (tx, rx) = channel::<TuiEvent>();

    // Input thread: keys plus a periodic tick so the loop can redraw
    // spinners even when nothing settles.
    let input_tx = tx.clone();
    std::thread::Builder::new()
        .name("flopboard-input".to_string())
        .spawn(move || {
            loop {
                let event = match poll(INPUT_POLL) {
                    Ok(true) => match read() {
                        Ok(Event::Key(key)) => TuiEvent::Input(key),
                        Ok(_) => continue,
                        Err(_) => break,
                    },
                    Ok(false) => TuiEvent::Tick,
                    Err(_) => break,
                };
                if input_tx.send(event).is_err() {
                    break;
                }
            }
        })?;

    let mut app = AppState::new();
    for job in app.on_mount() {
        fetch::spawn(runtime.handle(), ctx.api.clone(), tx.clone(), job);
    }

    run_loop(&mut terminal, &mut app, &rx, |job| {
        fetch::spawn(runtime.handle(), ctx.api.clone(), tx.clone(), job);
    })?;

    drop(guard);
    Ok(())
}

fn run_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    rx: &Receiver<TuiEvent>,
    mut spawn_job: impl FnMut(fetch::FetchJob),
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let Ok(event) = rx.recv() else {
            break;
        };
        for job in app.on_event(event) {
            spawn_job(job);
        }
        if app.should_quit {
            break;
        }
    }
    Ok(())
}
