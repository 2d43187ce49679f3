use crate::app::{
    action::{Action, UpdateResult},
    state::AppState,
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::RegisterGroup(group) => {
            tracing::debug!(group = %group.name, commands = group.commands.len(), "Registering commands");
            state.registry.register(group.clone());
            refresh(state);
            UpdateResult::Handled(None)
        }
        Action::UnregisterGroup(name) => {
            if state.registry.unregister(name) {
                tracing::debug!(group = %name, "Unregistered commands");
                refresh(state);
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

fn refresh(state: &mut AppState) {
    state.refresh_results();
    state.clamp_selection();
}
