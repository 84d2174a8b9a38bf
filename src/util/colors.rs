use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x00c084fc);
pub const SECONDARY: Color = Color::from_u32(0x006d28d9);
pub const NEUTRAL: Color = Color::from_u32(0x00404040);
pub const BACKGROUND: Color = Color::from_u32(0x00100a1c);
pub const ACCENT: Color = Color::from_u32(0x00f0abfc);
pub const ERROR: Color = Color::from_u32(0x00f87171);
