//! RGBA color type with parsing and contrast math.
//!
//! This module provides the [`Color`] type used for every palette entry and
//! derived color in a theme pack. Pack colors are authored as 6-digit hex
//! strings (`#rrggbb`); translucent colors only appear as the result of a
//! derivation (for example a border at reduced opacity) or inside a shadow
//! descriptor.
//!
//! ## Color Math
//!
//! - [`Color::relative_luminance`]: WCAG 2.x relative luminance
//! - [`Color::contrast_ratio`]: WCAG contrast ratio between two colors
//! - [`Color::blend`]: per-channel linear interpolation
//! - [`Color::composite_over`]: source-over alpha compositing
//!
//! ```
//! use tokens::types::Color;
//!
//! let paper = Color::from_hex("#ffffff").unwrap();
//! let ink = Color::from_hex("#0b1f2c").unwrap();
//! assert!(paper.contrast_ratio(&ink) > 4.5);
//! ```

use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Error returned when color parsing fails.
///
/// Contains a descriptive message about what went wrong.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{message}")]
pub struct ColorParseError {
    /// Human-readable description of the parsing error.
    pub message: String,
}

/// An sRGB color with straight (non-premultiplied) alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0.0 = transparent, 1.0 = opaque).
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl Color {
    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    /// Returns a fully transparent color.
    pub const fn transparent() -> Self {
        Self::rgba(0, 0, 0, 0.0)
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parses a strict `#rrggbb` hex color, the only format a theme pack accepts.
    pub fn from_hex(input: &str) -> Result<Self, ColorParseError> {
        let input = input.trim();
        let Some(hex) = input.strip_prefix('#') else {
            return Err(ColorParseError {
                message: format!("color `{}` must start with '#'", input),
            });
        };

        let chars: Vec<char> = hex.chars().collect();
        if chars.len() != 6 {
            return Err(ColorParseError {
                message: format!("invalid hex color length: {}", chars.len()),
            });
        }

        let r = Self::parse_hex_pair(chars[0], chars[1])?;
        let g = Self::parse_hex_pair(chars[2], chars[3])?;
        let b = Self::parse_hex_pair(chars[4], chars[5])?;
        Ok(Self::rgb(r, g, b))
    }

    fn parse_hex_digit(c: char) -> Result<u8, ColorParseError> {
        match c.to_ascii_lowercase() {
            d @ '0'..='9' => Ok(d as u8 - b'0'),
            d @ 'a'..='f' => Ok(d as u8 - b'a' + 10),
            _ => Err(ColorParseError {
                message: format!("invalid hex digit: {}", c),
            }),
        }
    }

    fn parse_hex_pair(c1: char, c2: char) -> Result<u8, ColorParseError> {
        let high = Self::parse_hex_digit(c1)?;
        let low = Self::parse_hex_digit(c2)?;
        Ok(high * 16 + low)
    }

    /// Returns a copy of this color with the specified alpha, clamped to `[0, 1]`.
    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self {
            a: alpha.clamp(0.0, 1.0),
            ..*self
        }
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// Linear per-channel interpolation toward `other`.
    ///
    /// `ratio` is the weight of `other` and is clamped to `[0, 1]`:
    /// `0.0` returns `self`, `1.0` returns `other`.
    pub fn blend(&self, other: &Color, ratio: f32) -> Self {
        let t = ratio.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 * (1.0 - t) + b as f32 * t).round() as u8;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: self.a * (1.0 - t) + other.a * t,
        }
    }

    /// Composites this color on top of `base` (source-over).
    pub fn composite_over(&self, base: &Color) -> Self {
        let out_a = self.a + base.a * (1.0 - self.a);
        if out_a <= 0.0 {
            return Self::transparent();
        }
        let channel = |src: u8, dst: u8| {
            ((src as f32 * self.a + dst as f32 * base.a * (1.0 - self.a)) / out_a).round() as u8
        };
        Self {
            r: channel(self.r, base.r),
            g: channel(self.g, base.g),
            b: channel(self.b, base.b),
            a: out_a,
        }
    }

    /// WCAG 2.x relative luminance of the color channels (alpha ignored).
    ///
    /// Returns a value between 0.0 (black) and 1.0 (white).
    pub fn relative_luminance(&self) -> f64 {
        let r = Self::srgb_to_linear(self.r);
        let g = Self::srgb_to_linear(self.g);
        let b = Self::srgb_to_linear(self.b);

        0.2126 * r + 0.7152 * g + 0.0722 * b
    }

    /// Converts an sRGB channel to linear light.
    fn srgb_to_linear(channel: u8) -> f64 {
        let c = channel as f64 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    /// WCAG contrast ratio, from 1.0 (identical) to 21.0 (black on white).
    pub fn contrast_ratio(&self, other: &Color) -> f64 {
        let l1 = self.relative_luminance();
        let l2 = other.relative_luminance();
        let (hi, lo) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
        (hi + 0.05) / (lo + 0.05)
    }

    /// Formats the color channels as `#rrggbb`, ignoring alpha.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    /// Opaque colors print as `#rrggbb`, translucent ones as `rgba(r, g, b, a)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "{}", self.to_hex())
        } else {
            let alpha = (self.a * 1000.0).round() / 1000.0;
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== HEX FORMAT TESTS ====================

    #[test]
    fn test_hex_6_digit() {
        assert_eq!(Color::from_hex("#ff0000").unwrap(), Color::rgb(255, 0, 0));
        assert_eq!(Color::from_hex("#0c3250").unwrap(), Color::rgb(0x0c, 0x32, 0x50));
        assert_eq!(Color::from_hex("#9932CC").unwrap(), Color::rgb(0x99, 0x32, 0xCC));
    }

    #[test]
    fn test_hex_whitespace_trimming() {
        assert_eq!(Color::from_hex("  #fffaf2 ").unwrap(), Color::rgb(255, 250, 242));
    }

    #[test]
    fn test_hex_rejects_other_formats() {
        assert!(Color::from_hex("#fff").is_err());
        assert!(Color::from_hex("#ff000080").is_err());
        assert!(Color::from_hex("ff0000").is_err());
        assert!(Color::from_hex("#gg0000").is_err());
        assert!(Color::from_hex("red").is_err());
        assert!(Color::from_hex("").is_err());
    }

    // ==================== MATH TESTS ====================

    #[test]
    fn test_blend_endpoints_and_midpoint() {
        let white = Color::white();
        let black = Color::black();
        assert_eq!(white.blend(&black, 0.0), white);
        assert_eq!(white.blend(&black, 1.0), black);
        assert_eq!(white.blend(&black, 0.5), Color::rgb(128, 128, 128));
    }

    #[test]
    fn test_blend_ratio_is_clamped() {
        let white = Color::white();
        let black = Color::black();
        assert_eq!(white.blend(&black, -3.0), white);
        assert_eq!(white.blend(&black, 7.0), black);
    }

    #[test]
    fn test_with_alpha_clamps() {
        assert_eq!(Color::white().with_alpha(1.5).a, 1.0);
        assert_eq!(Color::white().with_alpha(-0.5).a, 0.0);
    }

    #[test]
    fn test_composite_over_opaque_base() {
        let overlay = Color::black().with_alpha(0.5);
        let result = overlay.composite_over(&Color::white());
        assert_eq!(result, Color::rgb(128, 128, 128));

        let opaque = Color::rgb(10, 20, 30);
        assert_eq!(opaque.composite_over(&Color::white()), opaque);
    }

    #[test]
    fn test_contrast_ratio_extremes() {
        let ratio = Color::white().contrast_ratio(&Color::black());
        assert!((ratio - 21.0).abs() < 1e-9);
        assert!((Color::white().contrast_ratio(&Color::white()) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_contrast_ratio_is_symmetric() {
        let a = Color::rgb(0x2e, 0x69, 0xa1);
        let b = Color::rgb(0xff, 0xfa, 0xf2);
        assert_eq!(a.contrast_ratio(&b), b.contrast_ratio(&a));
    }

    // ==================== DISPLAY TESTS ====================

    #[test]
    fn test_display_opaque_and_translucent() {
        assert_eq!(Color::rgb(14, 58, 90).to_string(), "#0e3a5a");
        assert_eq!(
            Color::rgb(14, 58, 90).with_alpha(0.2).to_string(),
            "rgba(14, 58, 90, 0.2)"
        );
    }
}
