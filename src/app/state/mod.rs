use super::keymap::KeyMap;
use super::persistence::Settings;
use crate::domain::models::{CommandRecord, SearchResult};
use crate::domain::registry::CommandRegistry;
use crate::domain::search::search;
use crate::theme::Theme;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub mod input;

// Re-exports
pub use input::QueryField;

pub const SEARCH_PLACEHOLDER: &str = "Search commands...";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PaletteMode {
    Closed,              // Palette hidden
    Browsing,            // Searching and navigating results
    CollectingParameter, // Query text is the value for the active command
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState<'a> {
    pub should_quit: bool,

    // --- Session ---
    pub is_open: bool,
    pub query: QueryField<'a>,
    pub selected_index: usize,
    pub active_command: Option<CommandRecord>,
    pub is_executing: bool,

    // --- Derived ---
    pub results: Vec<SearchResult>,
    pub last_search: Duration,

    // --- Command Source ---
    pub registry: CommandRegistry,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub theme: Theme,

    // --- Animation ---
    pub frame_count: u64,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(settings: &Settings, registry: CommandRegistry) -> Self {
        Self {
            keymap: Arc::new(KeyMap::from_config(&settings.keys)),
            theme: Theme::from_palette_type(settings.theme),
            registry,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn mode(&self) -> PaletteMode {
        match (self.is_open, &self.active_command) {
            (false, _) => PaletteMode::Closed,
            (true, None) => PaletteMode::Browsing,
            (true, Some(_)) => PaletteMode::CollectingParameter,
        }
    }

    #[must_use]
    pub fn selected_result(&self) -> Option<&SearchResult> {
        self.results.get(self.selected_index)
    }

    /// Re-runs the search for the current query. Only browsing shows results.
    pub fn refresh_results(&mut self) {
        if self.mode() != PaletteMode::Browsing {
            self.results.clear();
            return;
        }
        let started = Instant::now();
        self.results = search(&self.query.text(), &self.registry.commands());
        self.last_search = started.elapsed();
    }

    /// Keeps the selection inside the result list after it shrank.
    pub fn clamp_selection(&mut self) {
        if self.selected_index >= self.results.len() {
            self.selected_index = self.results.len().saturating_sub(1);
        }
    }

    pub fn open_session(&mut self) {
        self.is_open = true;
        self.active_command = None;
        self.reset_query(SEARCH_PLACEHOLDER);
    }

    pub fn close_session(&mut self) {
        self.is_open = false;
        self.active_command = None;
        self.reset_query(SEARCH_PLACEHOLDER);
    }

    pub fn enter_parameter_mode(&mut self, command: CommandRecord) {
        let placeholder = command
            .first_parameter()
            .map(|p| format!("Enter {}...", p.label))
            .unwrap_or_default();
        self.active_command = Some(command);
        self.reset_query(&placeholder);
    }

    pub fn leave_parameter_mode(&mut self) {
        self.active_command = None;
        self.reset_query(SEARCH_PLACEHOLDER);
    }

    fn reset_query(&mut self, placeholder: &str) {
        self.query.clear();
        self.query.set_placeholder(placeholder);
        self.selected_index = 0;
        self.refresh_results();
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self {
            should_quit: false,
            is_open: false,
            query: QueryField::default(),
            selected_index: 0,
            active_command: None,
            is_executing: false,
            results: Vec::new(),
            last_search: Duration::ZERO,
            registry: CommandRegistry::default(),
            keymap: Arc::new(KeyMap::default()),
            theme: Theme::default(),
            frame_count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::action;
    use crate::domain::models::{CommandGroup, CommandParameter};

    fn state_with(titles: &[&str]) -> AppState<'static> {
        let mut registry = CommandRegistry::new();
        registry.register(CommandGroup::new(
            "test",
            titles
                .iter()
                .enumerate()
                .map(|(i, t)| CommandRecord::new(i.to_string(), *t, action::noop()))
                .collect(),
        ));
        AppState::new(&Settings::default(), registry)
    }

    #[test]
    fn test_starts_closed_and_empty() {
        let state = state_with(&["One"]);
        assert_eq!(state.mode(), PaletteMode::Closed);
        assert!(state.query.is_empty());
        assert!(state.results.is_empty());
        assert!(!state.is_executing);
    }

    #[test]
    fn test_open_session_lists_every_command() {
        let mut state = state_with(&["One", "Two"]);
        state.open_session();
        assert_eq!(state.mode(), PaletteMode::Browsing);
        assert_eq!(state.results.len(), 2);
        assert_eq!(state.query.placeholder_text(), SEARCH_PLACEHOLDER);
    }

    #[test]
    fn test_parameter_mode_hides_results() {
        let mut state = state_with(&["One"]);
        state.open_session();
        let command = CommandRecord::new("r", "Rename", action::noop())
            .with_parameter(CommandParameter::text("name", "Name"));
        state.enter_parameter_mode(command);
        assert_eq!(state.mode(), PaletteMode::CollectingParameter);
        assert!(state.results.is_empty());
        assert_eq!(state.query.placeholder_text(), "Enter Name...");

        state.leave_parameter_mode();
        assert_eq!(state.mode(), PaletteMode::Browsing);
        assert_eq!(state.results.len(), 1);
    }

    #[test]
    fn test_clamp_selection() {
        let mut state = state_with(&["One", "Two"]);
        state.open_session();
        state.selected_index = 5;
        state.clamp_selection();
        assert_eq!(state.selected_index, 1);

        state.results.clear();
        state.clamp_selection();
        assert_eq!(state.selected_index, 0);
    }
}
