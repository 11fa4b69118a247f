use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightCyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const PORT: Color = Color::Cyan;
pub const SERVICE: Color = Color::Green;
pub const SERVICE_UNKNOWN: Color = Color::BrightBlack;
