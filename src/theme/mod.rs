//! Widget configuration: colors and metrics shared by every widget.
//!
//! A [`Theme`] is passed to each widget at construction. Hosts either start
//! from [`Theme::default`] or parse a declaration block:
//!
//! ```
//! use widget_engine::theme::{Color, Theme};
//!
//! let theme = Theme::parse("Theme { hover: #00f; scroll-step: 12; }").unwrap();
//! assert_eq!(theme.hover, Color::BLUE);
//! assert_eq!(theme.scroll_step, 12.0);
//! ```

pub mod parser;
pub mod tokenizer;

use std::fmt;

pub use parser::{apply_theme, parse_theme, ParseError};

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An opaque RGB fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 128, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);
    pub const GRAY: Color = Color::new(128, 128, 128);
    pub const LIGHT_GRAY: Color = Color::new(211, 211, 211);
    pub const DARK_GRAY: Color = Color::new(85, 85, 85);
    pub const PINK: Color = Color::new(255, 192, 203);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb` or `#rrggbb`.
    pub fn from_hex(hex: &str) -> Option<Color> {
        let digits = hex.strip_prefix('#')?;
        if !digits.is_ascii() {
            return None;
        }
        match digits.len() {
            3 => {
                let mut channels = digits
                    .chars()
                    .map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
                Some(Color::new(
                    channels.next()??,
                    channels.next()??,
                    channels.next()??,
                ))
            }
            6 => {
                let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
                Some(Color::new(channel(0)?, channel(2)?, channel(4)?))
            }
            _ => None,
        }
    }

    /// Look up a named color (case-insensitive).
    pub fn from_name(name: &str) -> Option<Color> {
        let color = match name.to_ascii_lowercase().as_str() {
            "black" => Color::BLACK,
            "white" => Color::WHITE,
            "red" => Color::RED,
            "green" => Color::GREEN,
            "blue" => Color::BLUE,
            "gray" | "grey" => Color::GRAY,
            "lightgray" | "lightgrey" => Color::LIGHT_GRAY,
            "darkgray" | "darkgrey" => Color::DARK_GRAY,
            "pink" => Color::PINK,
            _ => return None,
        };
        Some(color)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// Colors and metrics handed to every widget at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Fill of an interactive shape at rest.
    pub idle: Color,
    /// Fill while the pointer is over the shape.
    pub hover: Color,
    /// Fill while the pointer button is held on the shape.
    pub pressed: Color,
    /// Checked box, selected option, progress fill, slider indicator.
    pub accent: Color,
    /// Fill of tracks and frames.
    pub track: Color,
    /// Fill of the scrollbar thumb.
    pub thumb: Color,
    pub text: Color,
    pub caret: Color,
    /// Pixels moved by one scrollbar step button press.
    pub scroll_step: f64,
    /// Space kept free at the right edge of a text box.
    pub text_padding: f64,
    /// Edge length of the scrollbar step buttons.
    pub step_button: f64,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            idle: Color::RED,
            hover: Color::BLUE,
            pressed: Color::RED,
            accent: Color::GREEN,
            track: Color::LIGHT_GRAY,
            thumb: Color::DARK_GRAY,
            text: Color::BLACK,
            caret: Color::BLACK,
            scroll_step: 10.0,
            text_padding: 5.0,
            step_button: 20.0,
        }
    }
}

impl Theme {
    /// Parse a declaration block over the defaults. See [`parse_theme`].
    pub fn parse(input: &str) -> Result<Theme, ParseError> {
        parse_theme(input)
    }
}
