use crate::types::color::Color;
use crate::types::geometry::Length;
use serde::{Serialize, Serializer};
use std::fmt;

/// One elevation level, parsed from a `box-shadow`-style descriptor such as
/// `0 10px 30px rgba(0, 0, 0, 0.18)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxShadow {
    pub inset: bool,
    pub offset_x: Length,
    pub offset_y: Length,
    pub blur: Length,
    pub spread: Length,
    pub color: Color,
}

impl fmt::Display for BoxShadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inset {
            write!(f, "inset ")?;
        }
        write!(f, "{} {}", css_length(self.offset_x), css_length(self.offset_y))?;
        if !self.blur.is_zero() || !self.spread.is_zero() {
            write!(f, " {}", css_length(self.blur))?;
        }
        if !self.spread.is_zero() {
            write!(f, " {}", css_length(self.spread))?;
        }
        write!(f, " {}", self.color)
    }
}

/// Zero lengths print unitless, matching how shadows are usually authored.
fn css_length(length: Length) -> String {
    if length.is_zero() {
        "0".to_string()
    } else {
        length.to_string()
    }
}

impl Serialize for BoxShadow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_authored_form() {
        let shadow = BoxShadow {
            inset: false,
            offset_x: Length::ZERO,
            offset_y: Length::px(10.0),
            blur: Length::px(30.0),
            spread: Length::ZERO,
            color: Color::rgba(0, 0, 0, 0.18),
        };
        assert_eq!(shadow.to_string(), "0 10px 30px rgba(0, 0, 0, 0.18)");
    }

    #[test]
    fn display_includes_spread_and_inset() {
        let shadow = BoxShadow {
            inset: true,
            offset_x: Length::px(1.0),
            offset_y: Length::px(1.0),
            blur: Length::ZERO,
            spread: Length::px(2.0),
            color: Color::rgb(12, 50, 80),
        };
        assert_eq!(shadow.to_string(), "inset 1px 1px 0 2px #0c3250");
    }
}
