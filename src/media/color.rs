// SPDX-License-Identifier: MPL-2.0
//! Hex colour parsing shared by the renderers.

use crate::config::{DEFAULT_BACKGROUND_COLOR, DEFAULT_PALETTE};

/// An opaque sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` (the leading `#` is optional).
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    #[must_use]
    pub fn to_rgba(self) -> image_rs::Rgba<u8> {
        image_rs::Rgba([self.r, self.g, self.b, 255])
    }

    #[must_use]
    pub fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, 255)
    }
}

/// Background shared by the avatars and the hero animation.
#[must_use]
pub fn default_background() -> Rgb {
    Rgb::from_hex(DEFAULT_BACKGROUND_COLOR).unwrap_or(Rgb::new(0x13, 0x13, 0x13))
}

/// The five brand colours, in order.
#[must_use]
pub fn default_palette() -> Vec<Rgb> {
    DEFAULT_PALETTE.iter().filter_map(|hex| Rgb::from_hex(hex)).collect()
}

/// Parses a configured palette, skipping invalid entries.
///
/// Falls back to [`default_palette`] when nothing valid remains.
#[must_use]
pub fn parse_palette(entries: &[String]) -> Vec<Rgb> {
    let parsed: Vec<Rgb> = entries
        .iter()
        .filter_map(|entry| {
            let color = Rgb::from_hex(entry);
            if color.is_none() {
                tracing::warn!(entry = %entry, "ignoring invalid palette colour");
            }
            color
        })
        .collect();
    if parsed.is_empty() {
        default_palette()
    } else {
        parsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex() {
        assert_eq!(Rgb::from_hex("#7ac893"), Some(Rgb::new(0x7a, 0xc8, 0x93)));
        assert_eq!(Rgb::from_hex("E4586B"), Some(Rgb::new(0xe4, 0x58, 0x6b)));
        assert_eq!(Rgb::from_hex("#fff"), None);
        assert_eq!(Rgb::from_hex("#gg0000"), None);
        assert_eq!(Rgb::from_hex("#ééé"), None);
    }

    #[test]
    fn sign_characters_are_not_hex_digits() {
        assert_eq!(Rgb::from_hex("#+f+f+f"), None);
        assert_eq!(Rgb::from_hex("-1ffff"), None);
    }

    #[test]
    fn hex_is_lowercase() {
        assert_eq!(Rgb::new(0x13, 0x13, 0x13).to_hex(), "#131313");
    }

    #[test]
    fn defaults_are_valid() {
        assert_eq!(default_palette().len(), DEFAULT_PALETTE.len());
        assert_eq!(default_background(), Rgb::new(0x13, 0x13, 0x13));
    }

    #[test]
    fn invalid_palette_falls_back() {
        assert_eq!(parse_palette(&["nope".to_string()]), default_palette());
        assert_eq!(
            parse_palette(&["#000000".to_string(), "bad".to_string()]),
            vec![Rgb::new(0, 0, 0)]
        );
    }
}
