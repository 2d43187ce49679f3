use crate::app::host::{HostFocus, TerminalHost};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::helpers::dim_area;

/// The demo page the palette floats over.
pub struct PageView<'a> {
    pub host: &'a TerminalHost,
    pub theme: &'a Theme,
}

impl PageView<'_> {
    fn block(&self, title: &str, focused: bool) -> Block<'static> {
        Block::default()
            .title(Span::styled(format!(" {title} "), self.theme.header_active))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if focused {
                self.theme.border_focus
            } else {
                self.theme.border
            })
    }
}

impl Widget for PageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(24), Constraint::Min(0)])
            .split(rows[0]);

        let focus = self.host.focus;
        let item_style = if focus == HostFocus::Sidebar {
            self.theme.page_focus
        } else {
            self.theme.list_item
        };
        let sidebar: Vec<Line> = self
            .host
            .sidebar
            .iter()
            .map(|item| Line::styled(format!(" {item}"), item_style))
            .collect();
        Paragraph::new(sidebar)
            .block(self.block("Sidebar", focus == HostFocus::Sidebar))
            .render(columns[0], buf);

        let lines: Vec<Line> = self
            .host
            .lines
            .iter()
            .map(|l| Line::styled(l.as_str(), self.theme.page))
            .collect();
        Paragraph::new(lines)
            .scroll((self.host.scroll, 0))
            .block(self.block("Page", focus == HostFocus::Page))
            .render(columns[1], buf);

        let footer = Line::from(vec![
            Span::styled(" CTRL+K ", self.theme.footer_segment_key),
            Span::styled(" Command palette  ", self.theme.footer),
            Span::styled(" J/K ", self.theme.footer_segment_key),
            Span::styled(" Scroll  ", self.theme.footer),
            Span::styled(" TAB ", self.theme.footer_segment_key),
            Span::styled(" Focus  ", self.theme.footer),
            Span::styled(" Q ", self.theme.footer_segment_key),
            Span::styled(" Quit ", self.theme.footer),
        ]);
        buf.set_line(rows[1].x, rows[1].y, &footer, rows[1].width);

        if self.host.scroll_locked {
            dim_area(buf, area);
        }
    }
}
