use crate::app::{
    action::{Action, UpdateResult},
    state::AppState,
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::QueryInput(key) => {
            if state.is_open && state.query.input(*key) {
                on_query_changed(state);
            }
            UpdateResult::Handled(None)
        }
        Action::SetQuery(text) => {
            if state.is_open && state.query.text() != *text {
                state.query.set_text(text);
                on_query_changed(state);
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

// While collecting a parameter the text is the value itself, so nothing is searched.
fn on_query_changed(state: &mut AppState) {
    state.selected_index = 0;
    state.refresh_results();
}
