use crate::app::{host::Host, state::AppState};
use crate::components::palette::{palette_layout, query_input_area, PaletteModal};
use ratatui::{layout::Rect, text::Line, Frame};

pub fn draw<H: Host + ?Sized>(f: &mut Frame, app_state: &AppState, host: &H) {
    let area = f.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    host.render(area, f.buffer_mut(), &app_state.theme);

    if app_state.is_open {
        f.render_widget(
            PaletteModal {
                theme: &app_state.theme,
                state: app_state,
            },
            area,
        );
        if let Some((x, y)) = query_cursor(app_state, area) {
            f.set_cursor_position((x, y));
        }
    }
}

fn query_cursor(app_state: &AppState, area: Rect) -> Option<(u16, u16)> {
    if app_state.is_executing {
        return None;
    }
    let input = query_input_area(app_state, palette_layout(area).query);
    let (row, col) = app_state.query.cursor();
    let before: String = app_state
        .query
        .lines()
        .get(row)
        .map(|line| line.chars().take(col).collect())
        .unwrap_or_default();
    let offset = u16::try_from(Line::raw(before).width()).unwrap_or(u16::MAX);
    let x = input.x.saturating_add(offset);
    (x < input.right()).then_some((x, input.y))
}
