use ratatui::style::{Color, Modifier, Style};

pub const BG: Color = Color::Rgb(24, 20, 14);
pub const SURFACE: Color = Color::Rgb(34, 28, 18);
pub const BORDER: Color = Color::Rgb(72, 58, 34);
pub const BORDER_FOCUS: Color = Color::Rgb(240, 178, 54);
pub const TEXT: Color = Color::Rgb(238, 224, 196);
pub const TEXT_DIM: Color = Color::Rgb(140, 124, 96);
pub const SUN: Color = Color::Rgb(240, 178, 54);
pub const GREEN: Color = Color::Rgb(110, 168, 92);
pub const ORANGE: Color = Color::Rgb(226, 130, 50);
pub const RED: Color = Color::Rgb(196, 80, 58);
pub const SKY: Color = Color::Rgb(96, 148, 186);

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn sun() -> Style {
    Style::default().fg(SUN)
}

pub fn green() -> Style {
    Style::default().fg(GREEN)
}

pub fn orange() -> Style {
    Style::default().fg(ORANGE)
}

pub fn red() -> Style {
    Style::default().fg(RED)
}

pub fn sky() -> Style {
    Style::default().fg(SKY)
}

pub fn bold() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn surface() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}
