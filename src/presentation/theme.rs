//! Console colors
//!
//! Every color the console sink uses comes from here.

use crossterm::style::Color;

use crate::domain::ports::Tone;

pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const FAILURE: Color = Color::Red;
    pub const INFO: Color = Color::Yellow;
    pub const DIM: Color = Color::DarkGrey;
}

/// Foreground color for a tone; plain text is left unstyled
pub fn tone_color(tone: Tone) -> Option<Color> {
    match tone {
        Tone::Success => Some(colors::SUCCESS),
        Tone::Failure => Some(colors::FAILURE),
        Tone::Info => Some(colors::INFO),
        Tone::Plain => None,
    }
}
