//! Color parsing and theme-aware correction.
//!
//! Token colors arrive as arbitrary strings from an upstream classifier and
//! are not pre-validated. A well-formed `#RRGGBB` value (or the canonical
//! `black` / `white` aliases) parses; anything else substitutes the theme's
//! default text color. Parsing never fails the render.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Pure black, the dark-theme legibility collision.
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Pure white, the light-theme legibility collision.
pub const WHITE: Rgb = Rgb {
    r: 0xFF,
    g: 0xFF,
    b: 0xFF,
};

impl Rgb {
    /// Create a color from components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Components as unit-interval floats, the form PDF fill operators take.
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        )
    }
}

fn hex_color_regex() -> &'static Regex {
    static HEX_COLOR: OnceLock<Regex> = OnceLock::new();
    HEX_COLOR.get_or_init(|| Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap())
}

/// Parse a declared color string.
///
/// Accepts a 6-hex-digit `#RRGGBB` value or the canonical named aliases
/// `black` and `white` (case-insensitive). Everything else is malformed and
/// returns `None`.
pub fn parse_color(raw: &str) -> Option<Rgb> {
    if raw.eq_ignore_ascii_case("black") {
        return Some(BLACK);
    }
    if raw.eq_ignore_ascii_case("white") {
        return Some(WHITE);
    }
    if !hex_color_regex().is_match(raw) {
        return None;
    }

    let r = u8::from_str_radix(&raw[1..3], 16).ok()?;
    let g = u8::from_str_radix(&raw[3..5], 16).ok()?;
    let b = u8::from_str_radix(&raw[5..7], 16).ok()?;
    Some(Rgb::new(r, g, b))
}

/// A named foreground/background color policy applied uniformly to a render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark text on an unfilled (white) page
    #[default]
    Light,
    /// Light text on a dark page fill
    Dark,
}

impl Theme {
    /// Background fill, if the theme requires one.
    pub fn background(self) -> Option<Rgb> {
        match self {
            Theme::Light => None,
            Theme::Dark => Some(Rgb::new(0x1E, 0x1E, 0x1E)),
        }
    }

    /// Default text color, also the substitute for malformed colors.
    pub fn foreground(self) -> Rgb {
        match self {
            Theme::Light => Rgb::new(0x1A, 0x1A, 0x1A),
            Theme::Dark => Rgb::new(0xE8, 0xE8, 0xE8),
        }
    }

    /// Resolve a declared color string to the fill color actually rendered.
    ///
    /// Malformed values substitute the theme foreground. Valid values pass
    /// through except for the two canonical collisions: pure black on the
    /// dark fill and pure white on the light page both remap to the theme
    /// foreground. No general contrast correction is attempted.
    pub fn resolve(self, raw: &str) -> Rgb {
        let Some(color) = parse_color(raw) else {
            return self.foreground();
        };
        match self {
            Theme::Dark if color == BLACK => self.foreground(),
            Theme::Light if color == WHITE => self.foreground(),
            _ => color,
        }
    }
}
