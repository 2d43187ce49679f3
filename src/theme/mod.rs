use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod palette;

pub use palette::{dim_color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub header_active: Style,
    pub badge: Style,
    pub query: Style,
    pub latency: Style,
    pub spinner: Style,

    pub list_item: Style,
    pub list_selected: Style,
    pub match_highlight: Style,
    pub match_highlight_selected: Style,
    pub description: Style,
    pub shortcut: Style,

    pub footer_segment_key: Style,
    pub footer: Style,

    pub page: Style,
    pub page_focus: Style,
    pub dimmed: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    #[default]
    CatppuccinMocha,
    Nord,
}

impl PaletteType {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PaletteType::CatppuccinMocha => "Catppuccin (Mocha)",
            PaletteType::Nord => "Nord",
        }
    }
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::CatppuccinMocha => Self::from_palette(&Palette::CATPPUCCIN_MOCHA),
            PaletteType::Nord => Self::from_palette(&Palette::NORD),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.blue),

            header_active: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            badge: Style::default()
                .fg(p.blue)
                .bg(dim_color(p.blue, 0.25))
                .add_modifier(Modifier::BOLD),
            query: Style::default().fg(p.text),
            latency: Style::default().fg(p.subtext0).add_modifier(Modifier::DIM),
            spinner: Style::default().fg(p.peach).add_modifier(Modifier::BOLD),

            list_item: Style::default().fg(p.text),
            list_selected: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            match_highlight: Style::default().fg(p.mauve).add_modifier(Modifier::BOLD),
            match_highlight_selected: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            description: Style::default().fg(p.subtext0),
            shortcut: Style::default()
                .bg(p.surface0)
                .fg(p.yellow)
                .add_modifier(Modifier::BOLD),

            footer_segment_key: Style::default()
                .bg(p.surface0)
                .fg(p.blue)
                .add_modifier(Modifier::BOLD),
            footer: Style::default().bg(p.crust).fg(p.subtext0),

            page: Style::default().bg(p.base).fg(p.text),
            page_focus: Style::default().bg(p.surface1).fg(p.green),
            dimmed: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_type_parses_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            theme: PaletteType,
        }
        let w: Wrapper = toml::from_str("theme = \"nord\"").unwrap();
        assert_eq!(w.theme, PaletteType::Nord);
        assert_ne!(
            Theme::from_palette_type(PaletteType::Nord),
            Theme::default()
        );
    }
}
