use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppState, PaletteMode},
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::TogglePalette => {
            if state.is_open {
                UpdateResult::Handled(close(state))
            } else {
                UpdateResult::Handled(open(state))
            }
        }
        Action::OpenPalette => {
            if state.is_open {
                return UpdateResult::Handled(None);
            }
            UpdateResult::Handled(open(state))
        }
        Action::ClosePalette | Action::ClickOutside => UpdateResult::Handled(close(state)),
        Action::CancelMode => match state.mode() {
            PaletteMode::Closed => UpdateResult::Handled(None),
            _ if state.is_executing => {
                tracing::debug!("Ignoring escape while a command is running");
                UpdateResult::Handled(None)
            }
            PaletteMode::CollectingParameter => {
                state.leave_parameter_mode();
                UpdateResult::Handled(None)
            }
            PaletteMode::Browsing => UpdateResult::Handled(close(state)),
        },
        Action::FocusNext => {
            if state.is_open {
                UpdateResult::Handled(Some(Command::RefocusQuery))
            } else {
                UpdateResult::Handled(Some(Command::FocusNextHost))
            }
        }
        Action::ScrollPage(delta) => UpdateResult::Handled(Some(Command::ScrollPage(*delta))),
        _ => UpdateResult::NotHandled,
    }
}

fn open(state: &mut AppState) -> Option<Command> {
    state.open_session();
    tracing::debug!(results = state.results.len(), "Palette opened");
    Some(Command::Opened)
}

/// Closes the palette unless it is already closed or a command is running.
pub(crate) fn close(state: &mut AppState) -> Option<Command> {
    if !state.is_open {
        return None;
    }
    if state.is_executing {
        tracing::debug!("Ignoring close while a command is running");
        return None;
    }
    state.close_session();
    tracing::debug!("Palette closed");
    Some(Command::Closed)
}
