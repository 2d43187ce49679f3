use crate::app::{action::Action, state::AppState};
use crate::components::palette::{modal_contains, result_at};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::{Rect, Size};

const SCROLL_STEP: i16 = 3;

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    if let Event::Key(key) = &event {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if app_state.keymap.toggle.matches(key) {
            return Some(Action::TogglePalette);
        }
        if app_state.keymap.quit.matches(key) {
            return Some(Action::Quit);
        }
    }

    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
    if app_state.is_open {
        map_palette_event(event, app_state, area)
    } else {
        map_page_event(event)
    }
}

fn map_palette_event(event: Event, app_state: &AppState<'_>, area: Rect) -> Option<Action> {
    match event {
        Event::Key(key) => Some(map_palette_key(key)),
        Event::Paste(text) => Some(Action::SetQuery(format!(
            "{}{}",
            app_state.query.text(),
            text.replace(['\r', '\n'], "")
        ))),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Moved => {
                result_at(app_state, area, mouse.column, mouse.row).map(Action::SelectIndex)
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(idx) = result_at(app_state, area, mouse.column, mouse.row) {
                    Some(Action::ActivateResult(idx))
                } else if modal_contains(area, mouse.column, mouse.row) {
                    None
                } else {
                    Some(Action::ClickOutside)
                }
            }
            // the host drops these while the palette holds the scroll lock
            MouseEventKind::ScrollDown => Some(Action::ScrollPage(SCROLL_STEP)),
            MouseEventKind::ScrollUp => Some(Action::ScrollPage(-SCROLL_STEP)),
            _ => None,
        },
        _ => None,
    }
}

fn map_palette_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc => Action::CancelMode,
        KeyCode::Tab | KeyCode::BackTab => Action::FocusNext,
        KeyCode::Up => Action::SelectPrev,
        KeyCode::Down => Action::SelectNext,
        KeyCode::Enter => Action::Execute,
        _ => Action::QueryInput(key),
    }
}

fn map_page_event(event: Event) -> Option<Action> {
    match event {
        Event::Key(key) => match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollPage(1)),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollPage(-1)),
            KeyCode::PageDown => Some(Action::ScrollPage(10)),
            KeyCode::PageUp => Some(Action::ScrollPage(-10)),
            KeyCode::Tab | KeyCode::BackTab => Some(Action::FocusNext),
            _ => None,
        },
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollDown => Some(Action::ScrollPage(SCROLL_STEP)),
            MouseEventKind::ScrollUp => Some(Action::ScrollPage(-SCROLL_STEP)),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::reducer::update;
    use crate::app::test_support::{palette_state, parameterised_command};
    use crate::components::palette::palette_layout;
    use crossterm::event::{KeyEventState, KeyModifiers, MouseEvent};

    const SIZE: Size = Size {
        width: 100,
        height: 40,
    };

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_toggle_chord_works_in_every_mode() {
        let mut state = palette_state();
        let toggle = key(KeyCode::Char('k'), KeyModifiers::CONTROL);
        assert_eq!(
            map_event_to_action(toggle.clone(), &state, SIZE),
            Some(Action::TogglePalette)
        );

        update(&mut state, Action::TogglePalette);
        assert_eq!(
            map_event_to_action(toggle.clone(), &state, SIZE),
            Some(Action::TogglePalette)
        );

        state.enter_parameter_mode(parameterised_command());
        assert_eq!(
            map_event_to_action(toggle, &state, SIZE),
            Some(Action::TogglePalette)
        );
    }

    #[test]
    fn test_release_events_are_ignored() {
        let state = palette_state();
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('k'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(map_event_to_action(release, &state, SIZE), None);
    }

    #[test]
    fn test_palette_keys() {
        let mut state = palette_state();
        update(&mut state, Action::TogglePalette);
        let none = KeyModifiers::NONE;

        let cases = [
            (KeyCode::Esc, Action::CancelMode),
            (KeyCode::Tab, Action::FocusNext),
            (KeyCode::BackTab, Action::FocusNext),
            (KeyCode::Up, Action::SelectPrev),
            (KeyCode::Down, Action::SelectNext),
            (KeyCode::Enter, Action::Execute),
        ];
        for (code, expected) in cases {
            assert_eq!(
                map_event_to_action(key(code, none), &state, SIZE),
                Some(expected)
            );
        }

        // plain letters go to the query, not to page bindings
        assert_eq!(
            map_event_to_action(key(KeyCode::Char('q'), none), &state, SIZE),
            Some(Action::QueryInput(KeyEvent::new(KeyCode::Char('q'), none)))
        );
    }

    #[test]
    fn test_page_keys_when_closed() {
        let state = palette_state();
        let none = KeyModifiers::NONE;
        assert_eq!(
            map_event_to_action(key(KeyCode::Char('q'), none), &state, SIZE),
            Some(Action::Quit)
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::Char('j'), none), &state, SIZE),
            Some(Action::ScrollPage(1))
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::Up, none), &state, SIZE),
            Some(Action::ScrollPage(-1))
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::Char('x'), none), &state, SIZE),
            None
        );
    }

    #[test]
    fn test_mouse_over_results() {
        let mut state = palette_state();
        update(&mut state, Action::TogglePalette);
        let body = palette_layout(Rect::new(0, 0, SIZE.width, SIZE.height)).body;

        assert_eq!(
            map_event_to_action(mouse(MouseEventKind::Moved, body.x + 3, body.y + 1), &state, SIZE),
            Some(Action::SelectIndex(1))
        );
        assert_eq!(
            map_event_to_action(
                mouse(MouseEventKind::Down(MouseButton::Left), body.x + 3, body.y),
                &state,
                SIZE
            ),
            Some(Action::ActivateResult(0))
        );
        // inside the panel but not on a row
        assert_eq!(
            map_event_to_action(
                mouse(MouseEventKind::Down(MouseButton::Left), body.x + 3, body.y + 5),
                &state,
                SIZE
            ),
            None
        );
        assert_eq!(
            map_event_to_action(mouse(MouseEventKind::Down(MouseButton::Left), 0, 0), &state, SIZE),
            Some(Action::ClickOutside)
        );
    }

    #[test]
    fn test_paste_appends_to_query() {
        let mut state = palette_state();
        update(&mut state, Action::TogglePalette);
        update(&mut state, Action::SetQuery("ac".to_string()));
        assert_eq!(
            map_event_to_action(Event::Paste("tion\n".to_string()), &state, SIZE),
            Some(Action::SetQuery("action".to_string()))
        );
    }
}
