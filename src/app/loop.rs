use crate::app::{
    action::Action, command::Command, features::execution::spawn_invocation, host::Host,
    input::map_event_to_action, reducer, state::AppState, ui,
};

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(100);

pub async fn run_loop<B: Backend, H: Host>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    host: &mut H,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, host, event_rx).await
}

pub async fn run_loop_with_events<B: Backend, H: Host>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    host: &mut H,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &app_state, &*host);
        })?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = res?;
                let size = terminal.size()?;
                map_event_to_action(event, &app_state, size)
            },

            // Async Results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            let command = reducer::update(&mut app_state, action);

            if app_state.should_quit {
                if app_state.is_open {
                    host.set_scroll_locked(false);
                    host.restore_focus();
                }
                break;
            }

            if let Some(cmd) = command {
                handle_command(cmd, host, action_tx.clone());
            }
        }
    }

    Ok(())
}

pub(crate) fn handle_command<H: Host + ?Sized>(
    command: Command,
    host: &mut H,
    tx: mpsc::Sender<Action>,
) {
    match command {
        Command::Opened => {
            host.capture_focus();
            host.set_scroll_locked(true);
            host.focus_query();
        }
        Command::Closed => {
            host.set_scroll_locked(false);
            host.restore_focus();
        }
        Command::RefocusQuery => host.focus_query(),
        Command::FocusNextHost => host.focus_next(),
        Command::ScrollPage(delta) => host.scroll_by(delta),
        Command::Invoke { command, args } => spawn_invocation(command, args, tx),
    }
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
