use crate::app::persistence::Settings;
use crate::app::state::AppState;
use crate::domain::action;
use crate::domain::models::{CommandGroup, CommandParameter, CommandRecord};
use crate::domain::registry::CommandRegistry;

/// Closed palette over a registry holding two plain commands.
pub fn palette_state() -> AppState<'static> {
    let mut registry = CommandRegistry::new();
    registry.register(CommandGroup::new(
        "test",
        vec![
            CommandRecord::new("1", "Action One", action::noop()).with_shortcut(["mod", "1"]),
            CommandRecord::new("2", "Action Two", action::noop()),
        ],
    ));
    AppState::new(&Settings::default(), registry)
}

pub fn parameterised_command() -> CommandRecord {
    CommandRecord::new("rename", "Rename Branch", action::noop())
        .with_parameter(CommandParameter::text("branch", "Branch Name"))
}
