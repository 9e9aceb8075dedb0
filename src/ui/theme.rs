use crate::render::Tone;
use ratatui::style::{Color, Style};

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border: Color,
    pub status_bg: Color,
    pub moved_disk: Color,   // Red, wins over settled
    pub settled_disk: Color, // Green
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border: Color::Rgb(108, 112, 134),
    status_bg: Color::Rgb(50, 50, 70),
    moved_disk: Color::Red,
    settled_disk: Color::Green,
};

impl Theme {
    /// Style for a piece of the board
    pub fn tone(&self, tone: Tone) -> Style {
        match tone {
            Tone::Plain => Style::default().fg(self.fg),
            Tone::Moved => Style::default().fg(self.moved_disk),
            Tone::Settled => Style::default().fg(self.settled_disk),
        }
    }
}
