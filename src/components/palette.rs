use crate::app::state::{AppState, PaletteMode};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use super::helpers::{draw_drop_shadow, top_anchored_rect};

const WIDTH_PERCENT: u16 = 60;
const TOP_PERCENT: u16 = 15;
const HEIGHT: u16 = 20;
const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteLayout {
    pub modal: Rect,
    pub query: Rect,
    pub status: Rect,
    pub body: Rect,
    pub footer: Rect,
}

#[must_use]
pub fn palette_layout(area: Rect) -> PaletteLayout {
    let modal = top_anchored_rect(WIDTH_PERCENT, TOP_PERCENT, HEIGHT, area);
    let inner = Block::default().borders(Borders::ALL).inner(modal);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Query input
            Constraint::Length(1), // Separator
            Constraint::Min(0),    // Results
            Constraint::Length(1), // Separator
            Constraint::Length(1), // Footer
        ])
        .split(inner);

    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(16)])
        .split(rows[0]);

    PaletteLayout {
        modal,
        query: header[0],
        status: header[1],
        body: rows[2],
        footer: rows[4],
    }
}

/// First result index shown so the selection stays on screen.
#[must_use]
pub fn visible_offset(selected: usize, rows: usize) -> usize {
    if rows == 0 {
        return 0;
    }
    selected.saturating_sub(rows - 1)
}

/// Result index under a terminal cell, if any.
#[must_use]
pub fn result_at(state: &AppState, area: Rect, column: u16, row: u16) -> Option<usize> {
    if state.mode() != PaletteMode::Browsing {
        return None;
    }
    let body = palette_layout(area).body;
    if !body.contains((column, row).into()) {
        return None;
    }
    let offset = visible_offset(state.selected_index, body.height as usize);
    let idx = offset + (row - body.y) as usize;
    (idx < state.results.len()).then_some(idx)
}

#[must_use]
pub fn modal_contains(area: Rect, column: u16, row: u16) -> bool {
    palette_layout(area).modal.contains((column, row).into())
}

/// Splits `title` into plain and highlighted spans. `matches` are char ranges.
pub fn highlight_title<'a>(
    title: &'a str,
    matches: &[(usize, usize)],
    base: Style,
    highlight: Style,
) -> Vec<Span<'a>> {
    let bounds: Vec<usize> = title
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(title.len()))
        .collect();
    let byte = |c: usize| bounds[c.min(bounds.len() - 1)];

    let mut spans = Vec::new();
    let mut last = 0;
    for &(start, end) in matches {
        if start < last || start >= end {
            continue;
        }
        if start > last {
            spans.push(Span::styled(&title[byte(last)..byte(start)], base));
        }
        spans.push(Span::styled(&title[byte(start)..byte(end)], highlight));
        last = end;
    }
    if byte(last) < title.len() {
        spans.push(Span::styled(&title[byte(last)..], base));
    }
    spans
}

const QUERY_PROMPT: &str = "> ";

fn badge_line(title: &str, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {title} "), style),
        Span::raw(" "),
    ])
}

/// Where the editable query sits once the prompt or command badge is drawn.
#[must_use]
pub fn query_input_area(state: &AppState, query: Rect) -> Rect {
    let prefix = match &state.active_command {
        Some(cmd) => badge_line(&cmd.title, Style::default()).width(),
        None => Line::raw(QUERY_PROMPT).width(),
    };
    let prefix = u16::try_from(prefix).unwrap_or(u16::MAX).min(query.width);
    Rect {
        x: query.x.saturating_add(prefix),
        width: query.width - prefix,
        ..query
    }
}

fn key_label(key: &str) -> String {
    if key == "mod" {
        "Ctrl".to_string()
    } else {
        key.to_uppercase()
    }
}

pub struct PaletteModal<'a, 'q> {
    pub theme: &'a Theme,
    pub state: &'a AppState<'q>,
}

impl PaletteModal<'_, '_> {
    fn render_header(&self, layout: &PaletteLayout, buf: &mut Buffer) {
        let query_area = query_input_area(self.state, layout.query);
        let prefix = Rect {
            width: query_area.x - layout.query.x,
            ..layout.query
        };
        match &self.state.active_command {
            Some(cmd) => buf.set_line(
                prefix.x,
                prefix.y,
                &badge_line(&cmd.title, self.theme.badge),
                prefix.width,
            ),
            None => buf.set_line(
                prefix.x,
                prefix.y,
                &Line::styled(QUERY_PROMPT, self.theme.footer_segment_key),
                prefix.width,
            ),
        };
        buf.set_style(query_area, self.theme.query);
        Widget::render(&self.state.query, query_area, buf);

        let mut status = vec![Span::styled(
            format!("{:.2}ms ", self.state.last_search.as_secs_f64() * 1000.0),
            self.theme.latency,
        )];
        if self.state.is_executing {
            let frame = SPINNER[(self.state.frame_count % SPINNER.len() as u64) as usize];
            status.push(Span::styled(format!("{frame} "), self.theme.spinner));
        }
        status.push(Span::styled(" ESC ", self.theme.shortcut));
        let status = Line::from(status).right_aligned();
        status.render(layout.status, buf);
    }

    fn render_results(&self, area: Rect, buf: &mut Buffer) {
        let rows = area.height as usize;
        let offset = visible_offset(self.state.selected_index, rows);

        for (row, (idx, result)) in self
            .state
            .results
            .iter()
            .enumerate()
            .skip(offset)
            .take(rows)
            .enumerate()
        {
            let selected = idx == self.state.selected_index;
            let (base, highlight) = if selected {
                (
                    self.theme.list_selected,
                    self.theme.match_highlight_selected,
                )
            } else {
                (self.theme.list_item, self.theme.match_highlight)
            };

            let mut spans = vec![Span::styled(if selected { "> " } else { "  " }, base)];
            spans.extend(highlight_title(
                &result.command.title,
                &result.matches,
                base,
                highlight,
            ));
            if let Some(description) = &result.command.description {
                spans.push(Span::styled(format!("  {description}"), self.theme.description));
            }
            if let Some(category) = &result.command.category {
                spans.push(Span::styled(format!("  [{category}]"), self.theme.dimmed));
            }

            let y = area.y + row as u16;
            if selected {
                buf.set_style(Rect::new(area.x, y, area.width, 1), base);
            }
            buf.set_line(area.x, y, &Line::from(spans), area.width);

            if !result.command.shortcut.is_empty() {
                let keys: Vec<Span> = result
                    .command
                    .shortcut
                    .iter()
                    .flat_map(|k| {
                        [
                            Span::styled(format!(" {} ", key_label(k)), self.theme.shortcut),
                            Span::raw(" "),
                        ]
                    })
                    .collect();
                Line::from(keys)
                    .right_aligned()
                    .render(Rect::new(area.x, y, area.width, 1), buf);
            }
        }
    }

    fn render_message(&self, area: Rect, buf: &mut Buffer, lines: Vec<Line<'_>>) {
        let top = area.y + area.height.saturating_sub(lines.len() as u16) / 2;
        for (i, line) in lines.into_iter().enumerate() {
            let y = top + i as u16;
            if y >= area.bottom() {
                break;
            }
            line.centered().render(Rect::new(area.x, y, area.width, 1), buf);
        }
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let hints: &[(&str, &str)] = match self.state.mode() {
            PaletteMode::CollectingParameter => &[("↵", "Submit"), ("ESC", "Back")],
            _ => &[("↑↓", "Navigate"), ("↵", "Execute"), ("ESC", "Close")],
        };
        let mut spans = Vec::new();
        for (key, label) in hints {
            spans.push(Span::styled(format!(" {key} "), self.theme.footer_segment_key));
            spans.push(Span::styled(format!(" {label}  "), self.theme.footer));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

impl Widget for PaletteModal<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = palette_layout(area);
        let modal_area = layout.modal;
        if modal_area.width < 4 || modal_area.height < 6 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" COMMAND PALETTE ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);
        block.render(modal_area, buf);

        self.render_header(&layout, buf);

        let separator = "─".repeat(layout.body.width as usize);
        buf.set_string(layout.body.x, layout.body.y - 1, &separator, self.theme.border);
        buf.set_string(layout.footer.x, layout.footer.y - 1, &separator, self.theme.border);

        let query = self.state.query.text();
        match self.state.mode() {
            PaletteMode::CollectingParameter => {
                let parameter = self
                    .state
                    .active_command
                    .as_ref()
                    .and_then(|c| c.first_parameter());
                let label = parameter
                    .map(|p| p.label.to_lowercase())
                    .unwrap_or_default();
                let mut lines = vec![
                    Line::styled("Action required", self.theme.list_item),
                    Line::styled(format!("Please enter the {label}"), self.theme.description),
                ];
                if let Some(p) = parameter.filter(|p| !p.options.is_empty()) {
                    let choices: Vec<&str> = p.options.iter().map(|o| o.label.as_str()).collect();
                    lines.push(Line::styled(
                        format!("One of: {}", choices.join(", ")),
                        self.theme.dimmed,
                    ));
                }
                self.render_message(layout.body, buf, lines);
            }
            _ if !self.state.results.is_empty() => self.render_results(layout.body, buf),
            _ if !query.is_empty() => self.render_message(
                layout.body,
                buf,
                vec![Line::styled(
                    format!("No results found for \"{query}\""),
                    self.theme.dimmed,
                )],
            ),
            _ => self.render_message(
                layout.body,
                buf,
                vec![Line::styled("No commands registered.", self.theme.dimmed)],
            ),
        }

        self.render_footer(layout.footer, buf);
    }
}
