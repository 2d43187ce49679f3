use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    features::lifecycle,
    state::{AppState, PaletteMode},
};
use crate::domain::models::{CommandArgs, CommandRecord};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Execute => UpdateResult::Handled(execute(state)),
        Action::ActivateResult(idx) => {
            if state.mode() != PaletteMode::Browsing || *idx >= state.results.len() {
                return UpdateResult::Handled(None);
            }
            if !state.is_executing {
                state.selected_index = *idx;
            }
            UpdateResult::Handled(execute(state))
        }
        Action::ExecutionFinished {
            command_id,
            outcome,
        } => {
            state.is_executing = false;
            match outcome {
                Ok(()) => tracing::info!(command = %command_id, "Command finished"),
                Err(e) => tracing::error!(command = %command_id, error = %e, "Command failed"),
            }
            UpdateResult::Handled(lifecycle::close(state))
        }
        _ => UpdateResult::NotHandled,
    }
}

fn execute(state: &mut AppState) -> Option<Command> {
    if state.is_executing {
        tracing::debug!("Ignoring execute while a command is running");
        return None;
    }
    match state.mode() {
        PaletteMode::Closed => None,
        PaletteMode::CollectingParameter => {
            let command = state.active_command.clone()?;
            let param = command.first_parameter()?;
            let mut args = CommandArgs::new();
            args.insert(param.id.clone(), state.query.text());
            invoke(state, command, Some(args))
        }
        PaletteMode::Browsing => {
            let command = state.selected_result()?.command.clone();
            if command.parameters.is_empty() {
                invoke(state, command, None)
            } else {
                tracing::debug!(command = %command.id, "Collecting parameter");
                state.enter_parameter_mode(command);
                None
            }
        }
    }
}

/// The palette closes once the action reports back, whatever the outcome.
fn invoke(
    state: &mut AppState,
    command: CommandRecord,
    args: Option<CommandArgs>,
) -> Option<Command> {
    state.is_executing = true;
    Some(Command::Invoke { command, args })
}
