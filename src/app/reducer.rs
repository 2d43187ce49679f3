use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    let features: [fn(&mut AppState, &Action) -> UpdateResult; 5] = [
        features::lifecycle::update,
        features::query::update,
        features::navigation::update,
        features::execution::update,
        features::sources::update,
    ];
    for feature in features {
        if let UpdateResult::Handled(command) = feature(state, &action) {
            return command;
        }
    }

    match action {
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
        }
        Action::Quit => {
            state.should_quit = true;
        }
        _ => {}
    }
    None
}
