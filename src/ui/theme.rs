use ratatui::style::Color;

pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MATCH_COUNT: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const QUERY_TEXT: Color = Color::Rgb(0xfa, 0xfa, 0xfa);
pub const QUERY_PLACEHOLDER: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const LIST_TEXT: Color = Color::Rgb(0xd4, 0xd4, 0xd4);
pub const LIST_ID: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const SELECTED_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const EMPTY_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
