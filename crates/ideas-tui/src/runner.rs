//! Main TUI runner - entry point and event loop
//!
//! Contains the application lifecycle:
//! - `run`: Sets up the terminal, starts loading ideas, runs the loop
//! - `run_loop`: Drains background messages, renders, polls terminal events

use tokio::sync::mpsc;

use ideas_app::process::process_message;
use ideas_app::signals;
use ideas_app::{ActionContext, AppState, Message, SystemClipboard};
use ideas_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI until the user quits
///
/// `initial` starts the idea load, usually from [`Message::load_from`].
pub async fn run(mut state: AppState, initial: Message) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    // Initialize terminal
    let mut term = ratatui::init();
    if let Err(e) = terminal::enable_mouse_capture() {
        warn!("{}", e);
    }

    // Unified message channel (loader task, signal handler)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    signals::spawn_signal_handler(msg_tx.clone());

    let mut ctx = ActionContext::new(Box::new(SystemClipboard::new()));

    process_message(&mut state, initial, &msg_tx, &mut ctx);

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &mut ctx);

    // Restore terminal
    terminal::disable_mouse_capture();
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    ctx: &mut ActionContext,
) -> Result<()> {
    while !state.should_quit() {
        // Process external messages (loader results, signals, action outcomes)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, ctx);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, ctx);
        }
    }

    info!("Exiting");
    Ok(())
}
