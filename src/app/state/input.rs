use crossterm::event::KeyEvent;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;
use std::ops::Deref;
use tui_textarea::{CursorMove, TextArea};

/// Single-line text field holding the palette query.
pub struct QueryField<'a>(TextArea<'a>);

impl QueryField<'_> {
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut area = TextArea::new(vec![text.to_string()]);
        area.set_cursor_line_style(Style::default());
        area.set_placeholder_style(Style::default().add_modifier(Modifier::DIM));
        area.move_cursor(CursorMove::End);
        Self(area)
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.0.lines().join("")
    }

    pub fn is_empty(&self) -> bool {
        self.0.lines().iter().all(String::is_empty)
    }

    /// Replaces the text, keeping the placeholder.
    pub fn set_text(&mut self, text: &str) {
        let placeholder = self.0.placeholder_text().to_string();
        *self = Self::from_text(text);
        self.set_placeholder(&placeholder);
    }

    pub fn clear(&mut self) {
        self.set_text("");
    }

    pub fn set_placeholder(&mut self, text: &str) {
        self.0.set_placeholder_text(text);
    }

    /// Applies an editing key. Returns true if the text changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        let before = self.text();
        self.0.input(key);
        if self.0.lines().len() > 1 {
            // line breaks never make it into a query
            let joined = self.text();
            self.set_text(&joined);
        }
        self.text() != before
    }
}

impl Default for QueryField<'_> {
    fn default() -> Self {
        Self::from_text("")
    }
}

impl Clone for QueryField<'_> {
    fn clone(&self) -> Self {
        let mut field = Self::from_text(&self.text());
        let (row, col) = self.0.cursor();
        field.0.move_cursor(CursorMove::Jump(row as u16, col as u16));
        field.set_placeholder(self.0.placeholder_text());
        field
    }
}

impl std::fmt::Debug for QueryField<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryField")
            .field("text", &self.text())
            .field("cursor", &self.0.cursor())
            .finish()
    }
}

impl PartialEq for QueryField<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.lines() == other.0.lines() && self.0.cursor() == other.0.cursor()
    }
}

impl<'a> Deref for QueryField<'a> {
    type Target = TextArea<'a>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Widget for &QueryField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self.0, area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_backspace_report_changes() {
        let mut field = QueryField::default();
        assert!(field.input(key(KeyCode::Char('g'))));
        assert!(field.input(key(KeyCode::Char('i'))));
        assert_eq!(field.text(), "gi");
        assert!(!field.input(key(KeyCode::Left)));
        assert!(field.input(key(KeyCode::Backspace)));
        assert_eq!(field.text(), "i");
    }

    #[test]
    fn test_newlines_are_stripped() {
        let mut field = QueryField::from_text("ab");
        field.input(key(KeyCode::Enter));
        assert_eq!(field.text(), "ab");
        assert_eq!(field.lines().len(), 1);
    }

    #[test]
    fn test_set_text_keeps_placeholder() {
        let mut field = QueryField::default();
        field.set_placeholder("Search commands...");
        field.set_text("x");
        field.clear();
        assert!(field.is_empty());
        assert_eq!(field.placeholder_text(), "Search commands...");
    }
}
