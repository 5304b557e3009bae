//! Light/dark palettes, looked up by a single `dark` flag.
//!
//! The quiz engine never sees colours; components receive a `&Palette`
//! as a prop.

use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    pub on_primary: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub success_fg: Color,
    pub success_bg: Color,
    pub error_fg: Color,
    pub error_bg: Color,
}

const LIGHT: Palette = Palette {
    primary: Color::Rgb(0, 128, 128),
    on_primary: Color::Rgb(255, 255, 255),
    text: Color::Rgb(34, 34, 34),
    muted: Color::Rgb(120, 120, 120),
    border: Color::Rgb(200, 200, 200),
    success_fg: Color::Rgb(6, 95, 70),
    success_bg: Color::Rgb(209, 250, 229),
    error_fg: Color::Rgb(153, 27, 27),
    error_bg: Color::Rgb(254, 226, 226),
};

const DARK: Palette = Palette {
    primary: Color::Rgb(45, 212, 191),
    on_primary: Color::Rgb(15, 23, 42),
    text: Color::Rgb(229, 231, 235),
    muted: Color::Rgb(148, 163, 184),
    border: Color::Rgb(71, 85, 105),
    success_fg: Color::Rgb(167, 243, 208),
    success_bg: Color::Rgb(6, 78, 59),
    error_fg: Color::Rgb(254, 202, 202),
    error_bg: Color::Rgb(127, 29, 29),
};

pub fn palette(dark: bool) -> &'static Palette {
    if dark { &DARK } else { &LIGHT }
}
