use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub title: Color,
    pub comment: Color,       // Grey
    pub bar: Color,           // Neutral bars
    pub primary: Color,       // Green
    pub secondary: Color,     // Red
    pub accent: Color,        // Orange
    pub status_bg: Color,
    pub key_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    title: Color::Rgb(249, 226, 175), // Yellow
    comment: Color::Rgb(108, 112, 134),
    bar: Color::Rgb(123, 123, 123),
    primary: Color::Rgb(0, 202, 78),
    secondary: Color::Rgb(255, 96, 92),
    accent: Color::Rgb(250, 179, 135),
    status_bg: Color::Rgb(50, 50, 70),
    key_bg: Color::Rgb(108, 112, 134),
};
