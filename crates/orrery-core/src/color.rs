use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// RGBA display color. Components in 0.0–1.0.
///
/// Catalog records carry colors as `#RRGGBB` hex strings; `Color`
/// serializes back to the same form so selection payloads round-trip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Color from RGB u8 values (0-255) with full opacity.
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Parse a `#RRGGBB` hex string. Returns None on any malformed input.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
        Some(Self::rgb8(r, g, b))
    }

    /// `#RRGGBB` form (alpha dropped).
    pub fn to_hex(self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8
        )
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const GRAY: Self = Self::rgb(0.5, 0.5, 0.5);
    pub const BACKGROUND: Self = Self::rgb(0.04, 0.04, 0.04);
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Color::from_hex(&hex).ok_or_else(|| D::Error::custom(format!("invalid hex color {hex:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex() {
        let c = Color::from_hex("#FDB813").unwrap();
        assert!((c.r - 253.0 / 255.0).abs() < 1e-6);
        assert!((c.g - 184.0 / 255.0).abs() < 1e-6);
        assert!((c.b - 19.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(Color::from_hex("FDB813").is_none());
        assert!(Color::from_hex("#FDB8").is_none());
        assert!(Color::from_hex("#GGGGGG").is_none());
        assert!(Color::from_hex("#FDB81355").is_none());
    }

    #[test]
    fn hex_round_trips() {
        let c = Color::from_hex("#4169E1").unwrap();
        assert_eq!(c.to_hex(), "#4169E1");
    }

    #[test]
    fn serde_uses_hex_strings() {
        let c: Color = serde_json::from_str("\"#CD5C5C\"").unwrap();
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"#CD5C5C\"");
    }
}
