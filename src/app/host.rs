use crate::components::page::PageView;
use crate::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

/// The application the palette floats over.
///
/// The runtime calls these when the palette opens or closes; how focus and
/// scrolling are actually tracked is up to the implementation.
#[cfg_attr(test, mockall::automock)]
pub trait Host {
    /// Remember what had focus before the palette opened.
    fn capture_focus(&mut self);
    fn focus_query(&mut self);
    /// Give focus back to whatever `capture_focus` saw.
    fn restore_focus(&mut self);
    fn focus_next(&mut self);
    fn set_scroll_locked(&mut self, locked: bool);
    fn scroll_by(&mut self, delta: i16);
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme);
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HostFocus {
    Page,
    Sidebar,
    Query,
}

/// Demo host: a scrollable page with a sidebar.
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalHost {
    pub lines: Vec<String>,
    pub sidebar: Vec<String>,
    pub scroll: u16,
    pub scroll_locked: bool,
    pub focus: HostFocus,
    pub saved_focus: Option<HostFocus>,
}

impl TerminalHost {
    #[must_use]
    pub fn new(lines: Vec<String>, sidebar: Vec<String>) -> Self {
        Self {
            lines,
            sidebar,
            scroll: 0,
            scroll_locked: false,
            focus: HostFocus::Page,
            saved_focus: None,
        }
    }
}

impl Host for TerminalHost {
    fn capture_focus(&mut self) {
        self.saved_focus = Some(self.focus);
    }

    fn focus_query(&mut self) {
        self.focus = HostFocus::Query;
    }

    fn restore_focus(&mut self) {
        if let Some(focus) = self.saved_focus.take() {
            self.focus = focus;
        }
    }

    fn focus_next(&mut self) {
        self.focus = match self.focus {
            HostFocus::Page => HostFocus::Sidebar,
            HostFocus::Sidebar => HostFocus::Page,
            // the query field is the only stop while the palette is up
            HostFocus::Query => HostFocus::Query,
        };
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    fn scroll_by(&mut self, delta: i16) {
        if self.scroll_locked {
            return;
        }
        let max_scroll = self.lines.len().saturating_sub(1) as u16;
        self.scroll = if delta < 0 {
            self.scroll.saturating_sub(delta.unsigned_abs())
        } else {
            self.scroll.saturating_add(delta as u16).min(max_scroll)
        };
    }

    fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        PageView { host: self, theme }.render(area, buf);
    }
}
