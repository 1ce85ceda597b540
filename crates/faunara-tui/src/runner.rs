//! Main TUI runner - entry point and event loop
//!
//! - `run`: owns the terminal for the lifetime of the app
//! - `run_loop`: drains request completions, renders, then polls input

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use faunara_api::{FaunaraApi, HttpClient};
use faunara_app::config::Settings;
use faunara_app::message::Message;
use faunara_app::process::process_message;
use faunara_app::state::AppState;
use faunara_core::prelude::*;

use crate::event::{self, TerminalEvent};
use crate::{layout, render, terminal};

/// Run the TUI against the service configured in `settings`
pub async fn run(settings: Settings) -> Result<()> {
    let api = Arc::new(HttpClient::new(&settings.server.base_url)?);
    info!("Using FAUNARA service at {}", api.base_url());

    terminal::install_panic_hook();
    let mut term = ratatui::init();

    let tick_rate = Duration::from_millis(settings.ui.tick_rate_ms.max(1));
    let mut state = AppState::with_settings(settings);

    // Request tasks report back through this channel
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(64);

    let result = match terminal::enable_mouse_capture() {
        Ok(()) => run_loop(&mut term, &mut state, msg_rx, msg_tx, &api, tick_rate),
        Err(e) => Err(e),
    };

    terminal::disable_mouse_capture();
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop<A>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    api: &Arc<A>,
    tick_rate: Duration,
) -> Result<()>
where
    A: FaunaraApi + Send + Sync + 'static,
{
    while !state.should_quit() {
        // Completions from request tasks, in arrival order
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, api);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        let message = match event::poll(tick_rate)? {
            Some(TerminalEvent::Message(message)) => Some(message),
            Some(TerminalEvent::Click { column, row }) => {
                let screen = terminal.get_frame().area();
                layout::click_to_message(state, screen, column, row)
            }
            None => None,
        };

        if let Some(message) = message {
            process_message(state, message, &msg_tx, api);
        }
    }

    info!("Quitting");
    Ok(())
}
