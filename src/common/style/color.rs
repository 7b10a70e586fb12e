//! sRGB color values as written into DrawingML `srgbClr` elements.

use crate::common::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// An sRGB color.
///
/// # Examples
///
/// ```rust
/// use insight_deck::common::RGBColor;
///
/// let blue = RGBColor::from_hex("A7D3F1").unwrap();
/// assert_eq!(blue, RGBColor::new(0xA7, 0xD3, 0xF1));
/// assert_eq!(blue.to_hex(), "A7D3F1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a six-digit hex string, with or without a leading `#`.
    ///
    /// Returns `None` for anything else, including three-digit shorthand.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Uppercase hex without `#`, the form DrawingML expects.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for RGBColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s).ok_or_else(|| Error::InvalidColor(s.to_string()))
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_with_and_without_hash() {
        assert_eq!(RGBColor::from_hex("#BFE7C6"), Some(RGBColor::new(0xBF, 0xE7, 0xC6)));
        assert_eq!(RGBColor::from_hex("bfe7c6"), Some(RGBColor::new(0xBF, 0xE7, 0xC6)));
    }

    #[test]
    fn test_rejects_malformed() {
        for bad in ["", "FFF", "GGGGGG", "+12345", "1234567", "#12 456", "ééé"] {
            assert!(RGBColor::from_hex(bad).is_none(), "accepted {:?}", bad);
        }

        let err = "blue".parse::<RGBColor>().unwrap_err();
        assert!(matches!(err, Error::InvalidColor(ref s) if s == "blue"));
    }

    #[test]
    fn test_display() {
        assert_eq!(RGBColor::new(0x22, 0x22, 0x22).to_string(), "#222222");
    }

    proptest! {
        #[test]
        fn prop_hex_round_trip(r: u8, g: u8, b: u8) {
            let color = RGBColor::new(r, g, b);
            prop_assert_eq!(RGBColor::from_hex(&color.to_hex()), Some(color));
            prop_assert_eq!(color.to_string().parse::<RGBColor>().ok(), Some(color));
        }
    }
}
