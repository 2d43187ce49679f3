use crate::app::{
    action::{Action, UpdateResult},
    state::{AppState, PaletteMode},
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::SelectNext => {
            move_selection(state, 1);
            UpdateResult::Handled(None)
        }
        Action::SelectPrev => {
            move_selection(state, -1);
            UpdateResult::Handled(None)
        }
        Action::SelectIndex(idx) => {
            if state.mode() == PaletteMode::Browsing && *idx < state.results.len() {
                state.selected_index = *idx;
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Steps the selection by `delta`, wrapping at both ends.
fn move_selection(state: &mut AppState, delta: isize) {
    let len = state.results.len();
    if state.mode() != PaletteMode::Browsing || len == 0 {
        return;
    }
    let len = len as isize;
    state.selected_index = (state.selected_index as isize + delta).rem_euclid(len) as usize;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::reducer::update as reduce;
    use crate::app::test_support::palette_state;

    #[test]
    fn test_navigation_wraps() {
        let mut state = palette_state();
        reduce(&mut state, Action::TogglePalette);
        let n = state.results.len();
        assert!(n > 1);

        for _ in 0..n {
            reduce(&mut state, Action::SelectNext);
        }
        assert_eq!(state.selected_index, 0);

        reduce(&mut state, Action::SelectPrev);
        assert_eq!(state.selected_index, n - 1);

        reduce(&mut state, Action::SelectNext);
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn test_navigation_on_empty_results_is_noop() {
        let mut state = palette_state();
        reduce(&mut state, Action::TogglePalette);
        reduce(&mut state, Action::SetQuery("xyz123".to_string()));
        reduce(&mut state, Action::SelectNext);
        reduce(&mut state, Action::SelectPrev);
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn test_hover_selects_only_existing_rows() {
        let mut state = palette_state();
        reduce(&mut state, Action::TogglePalette);
        reduce(&mut state, Action::SelectIndex(1));
        assert_eq!(state.selected_index, 1);
        reduce(&mut state, Action::SelectIndex(99));
        assert_eq!(state.selected_index, 1);
    }
}
