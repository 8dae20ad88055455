//! Color value parsing for style tokens.
//!
//! Supports:
//!
//! - Named colors: `red`, `green`, `blue`, etc. (8 ANSI colors, `gray`/`grey`)
//! - Bright variants: `bright red` inside a token, mapped to palette 8-15
//! - 256-color palette: `0` through `255`
//! - RGB hex: `#ff6b35` or `#fff`, approximated to the 256-color palette

use console::Color;

/// A parsed color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDef {
    /// Named ANSI color.
    Named(Color),
    /// 256-color palette index.
    Color256(u8),
    /// True color RGB.
    Rgb(u8, u8, u8),
}

impl ColorDef {
    /// Parses a single color word (no modifiers).
    pub fn parse_word(word: &str) -> Result<Self, String> {
        if let Some(hex) = word.strip_prefix('#') {
            return Self::parse_hex(hex);
        }
        if !word.is_empty() && word.bytes().all(|b| b.is_ascii_digit()) {
            return word
                .parse::<u8>()
                .map(ColorDef::Color256)
                .map_err(|_| format!("color palette index {} out of range (0-255)", word));
        }
        Self::parse_named(word)
    }

    /// Parses a color word that followed `bright`.
    pub fn parse_bright(word: &str) -> Result<Self, String> {
        let index = match word.to_lowercase().as_str() {
            "black" => 8,
            "red" => 9,
            "green" => 10,
            "yellow" => 11,
            "blue" => 12,
            "magenta" => 13,
            "cyan" => 14,
            "white" => 15,
            _ => return Err(format!("unknown bright color 'bright {}'", word)),
        };
        Ok(ColorDef::Color256(index))
    }

    fn parse_named(name: &str) -> Result<Self, String> {
        let color = match name.to_lowercase().as_str() {
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            "gray" | "grey" => Color::Color256(8),
            _ => return Err(format!("unknown color or attribute '{}'", name)),
        };
        Ok(ColorDef::Named(color))
    }

    fn parse_hex(hex: &str) -> Result<Self, String> {
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("invalid hex color '#{}'", hex));
        }
        let component = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| format!("invalid hex color '#{}'", hex))
        };
        match hex.len() {
            // #rgb -> #rrggbb
            3 => Ok(ColorDef::Rgb(
                component(&hex[0..1])? * 17,
                component(&hex[1..2])? * 17,
                component(&hex[2..3])? * 17,
            )),
            6 => Ok(ColorDef::Rgb(
                component(&hex[0..2])?,
                component(&hex[2..4])?,
                component(&hex[4..6])?,
            )),
            _ => Err(format!(
                "invalid hex color '#{}' (must be 3 or 6 digits)",
                hex
            )),
        }
    }

    /// Converts to a `console::Color`.
    pub fn to_console_color(self) -> Color {
        match self {
            ColorDef::Named(c) => c,
            ColorDef::Color256(n) => Color::Color256(n),
            ColorDef::Rgb(r, g, b) => Color::Color256(rgb_to_ansi256((r, g, b))),
        }
    }
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// ```rust
/// use speedtable_render::style::rgb_to_ansi256;
///
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
/// assert_eq!(rgb_to_ansi256((0, 255, 0)), 46);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}
