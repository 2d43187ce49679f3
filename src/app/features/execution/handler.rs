use crate::app::action::Action;
use crate::domain::models::{CommandArgs, CommandRecord};
use tokio::sync::mpsc;

/// Runs the command's action off the event loop and reports back with
/// `Action::ExecutionFinished`. Errors and panics are both failures.
pub fn spawn_invocation(
    command: CommandRecord,
    args: Option<CommandArgs>,
    tx: mpsc::Sender<Action>,
) {
    let command_id = command.id.clone();
    let action = command.action.clone();
    tokio::spawn(async move {
        tracing::info!(command = %command_id, with_args = args.is_some(), "Running command");
        let task = tokio::spawn(async move { action.invoke(args).await });
        let outcome = match task.await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(format!("{e:#}")),
            Err(e) => Err(format!("Command aborted: {e}")),
        };
        let _ = tx
            .send(Action::ExecutionFinished {
                command_id,
                outcome,
            })
            .await;
    });
}
