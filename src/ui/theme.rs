//! Light and dark palettes.
//!
//! The palette is chosen from the presentation hints, not from the
//! navigator: the dark flag picks the palette and the theme-color hint sets
//! the header accent.

use ratatui::style::Color;

use crate::environment::{hint, HintStore};
use crate::traits::PresentationHost;

/// Brand blue, used for primary actions and the cursor.
pub const COLOR_PRIMARY: Color = Color::Rgb(37, 99, 235); // #2563EB

/// Teal used by the splash and feature accents.
pub const COLOR_SECONDARY: Color = Color::Rgb(13, 148, 136); // #0D9488

pub const COLOR_SUCCESS: Color = Color::Rgb(22, 163, 74); // #16A34A
pub const COLOR_WARNING: Color = Color::Rgb(234, 179, 8); // #EAB308
pub const COLOR_DANGER: Color = Color::Rgb(220, 38, 38); // #DC2626

/// Colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    /// Header accent, taken from the theme-color hint
    pub accent: Color,
    pub primary: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
}

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(248, 250, 252),
    surface: Color::Rgb(255, 255, 255),
    text: Color::Rgb(15, 23, 42),
    muted: Color::Rgb(100, 116, 139),
    border: Color::Rgb(203, 213, 225),
    accent: Color::Rgb(255, 255, 255),
    primary: COLOR_PRIMARY,
    success: COLOR_SUCCESS,
    warning: COLOR_WARNING,
    danger: COLOR_DANGER,
};

pub const DARK: Palette = Palette {
    background: Color::Rgb(2, 6, 23),
    surface: Color::Rgb(15, 23, 42),
    text: Color::Rgb(241, 245, 249),
    muted: Color::Rgb(148, 163, 184),
    border: Color::Rgb(51, 65, 85),
    accent: Color::Rgb(15, 23, 42),
    primary: Color::Rgb(96, 165, 250),
    success: Color::Rgb(74, 222, 128),
    warning: Color::Rgb(250, 204, 21),
    danger: Color::Rgb(248, 113, 113),
};

impl Palette {
    /// Palette for the hints currently published.
    pub fn from_hints(hints: &HintStore) -> Self {
        let base = if hints.is_dark() { DARK } else { LIGHT };
        match hints.hint(hint::THEME_COLOR).and_then(parse_hex_color) {
            Some(accent) => Palette { accent, ..base },
            None => base,
        }
    }

    /// Text color that stays readable on the accent.
    pub fn on_accent(&self) -> Color {
        match self.accent {
            Color::Rgb(r, g, b) if luminance(r, g, b) < 128 => Color::White,
            _ => Color::Black,
        }
    }
}

/// Parse `#rrggbb`.
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

fn luminance(r: u8, g: u8, b: u8) -> u32 {
    (u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114) / 1000
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{THEME_COLOR_DARK, THEME_COLOR_LIGHT};

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color(THEME_COLOR_DARK), Some(Color::Rgb(15, 23, 42)));
        assert_eq!(parse_hex_color(THEME_COLOR_LIGHT), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(parse_hex_color("0f172a"), None);
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
    }

    #[test]
    fn test_palette_follows_dark_flag() {
        let mut hints = HintStore::new();
        assert_eq!(Palette::from_hints(&hints), LIGHT);

        hints.set_dark_class(true);
        hints.set_hint(hint::THEME_COLOR, THEME_COLOR_DARK);
        let palette = Palette::from_hints(&hints);
        assert_eq!(palette.background, DARK.background);
        assert_eq!(palette.accent, Color::Rgb(15, 23, 42));
        assert_eq!(palette.on_accent(), Color::White);
    }

    #[test]
    fn test_light_accent_uses_dark_text() {
        let mut hints = HintStore::new();
        hints.set_hint(hint::THEME_COLOR, THEME_COLOR_LIGHT);
        assert_eq!(Palette::from_hints(&hints).on_accent(), Color::Black);
    }
}
