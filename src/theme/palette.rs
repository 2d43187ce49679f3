use ratatui::style::Color;

/// Named colour slots the theme is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub base: Color,
    pub crust: Color,
    pub text: Color,
    pub subtext0: Color,
    pub surface0: Color,
    pub surface1: Color,
    pub surface2: Color,
    pub overlay0: Color,
    pub blue: Color,
    pub green: Color,
    pub yellow: Color,
    pub peach: Color,
    pub mauve: Color,
}

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb(r, g, b)
}

impl Palette {
    pub const CATPPUCCIN_MOCHA: Palette = Palette {
        base: rgb(30, 30, 46),
        crust: rgb(17, 17, 27),
        text: rgb(205, 214, 244),
        subtext0: rgb(166, 173, 200),
        surface0: rgb(49, 50, 68),
        surface1: rgb(69, 71, 90),
        surface2: rgb(88, 91, 112),
        overlay0: rgb(108, 112, 134),
        blue: rgb(137, 180, 250),
        green: rgb(166, 227, 161),
        yellow: rgb(249, 226, 175),
        peach: rgb(250, 179, 135),
        mauve: rgb(203, 166, 247),
    };

    pub const NORD: Palette = Palette {
        base: rgb(46, 52, 64),
        crust: rgb(43, 48, 59),
        text: rgb(236, 239, 244),
        subtext0: rgb(216, 222, 233),
        surface0: rgb(76, 86, 106),
        surface1: rgb(59, 66, 82),
        surface2: rgb(67, 76, 94),
        overlay0: rgb(129, 161, 193),
        blue: rgb(136, 192, 208),
        green: rgb(163, 190, 140),
        yellow: rgb(235, 203, 139),
        peach: rgb(208, 135, 112),
        mauve: rgb(180, 142, 173),
    };
}

/// Darkens an RGB colour towards black; other colours pass through.
#[must_use]
pub fn dim_color(c: Color, factor: f32) -> Color {
    match c {
        Color::Rgb(r, g, b) => {
            let scale = |v: u8| (f32::from(v) * factor.clamp(0.0, 1.0)) as u8;
            rgb(scale(r), scale(g), scale(b))
        }
        other => other,
    }
}
