//! Colour names understood by fixture specs.
//!
//! Values follow the X11/CSS colour table, which is what the fixture
//! colours (`lightblue`, `darkgreen`, ...) are defined against.

use crate::error::{FixtureError, Result};
use image::Rgb;

const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("white", [255, 255, 255]),
    ("red", [255, 0, 0]),
    ("green", [0, 128, 0]),
    ("blue", [0, 0, 255]),
    ("yellow", [255, 255, 0]),
    ("gray", [128, 128, 128]),
    ("grey", [128, 128, 128]),
    ("lightblue", [173, 216, 230]),
    ("darkblue", [0, 0, 139]),
    ("lightgreen", [144, 238, 144]),
    ("darkgreen", [0, 100, 0]),
    ("lightgray", [211, 211, 211]),
    ("darkgray", [169, 169, 169]),
];

/// Parse a colour name (case-insensitive) or a `#rrggbb` hex string.
pub fn parse_color(value: &str) -> Result<Rgb<u8>> {
    let value = value.trim();

    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| FixtureError::InvalidColor(value.to_string()));
    }

    NAMED_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(value))
        .map(|(_, rgb)| Rgb(*rgb))
        .ok_or_else(|| FixtureError::InvalidColor(value.to_string()))
}

fn parse_hex(hex: &str) -> Option<Rgb<u8>> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_colors_resolve() {
        assert_eq!(parse_color("lightblue").unwrap(), Rgb([173, 216, 230]));
        assert_eq!(parse_color("darkblue").unwrap(), Rgb([0, 0, 139]));
        assert_eq!(parse_color("lightgreen").unwrap(), Rgb([144, 238, 144]));
        assert_eq!(parse_color("darkgreen").unwrap(), Rgb([0, 100, 0]));
    }

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(parse_color("DarkBlue").unwrap(), Rgb([0, 0, 139]));
    }

    #[test]
    fn hex_colors() {
        assert_eq!(parse_color("#ff8000").unwrap(), Rgb([255, 128, 0]));
        assert!(parse_color("#ff80").is_err());
        assert!(parse_color("#gg0000").is_err());
    }

    #[test]
    fn unknown_name_is_rejected() {
        match parse_color("chartreuse-ish") {
            Err(FixtureError::InvalidColor(name)) => assert_eq!(name, "chartreuse-ish"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
