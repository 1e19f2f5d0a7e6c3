//! Value parsing for theme pack fields.
//!
//! - Shadow descriptors: `[inset] <x> <y> [blur [spread]] <color>`
//! - Shadow colors: `#rrggbb`, `rgb(r, g, b)`, `rgba(r, g, b, a)`
//! - Font stacks: CSS `font-family` lists such as `'Inter', Arial, sans-serif`

use crate::parser::units::{parse_loose_length, parse_number};
use crate::types::color::Color;
use crate::types::geometry::Length;
use crate::types::shadow::BoxShadow;
use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_while_m_n},
    character::complete::{char, digit1, multispace0, multispace1},
    combinator::{all_consuming, map_res, opt, recognize},
    sequence::{delimited, preceded, terminated},
};

fn parse_channel(input: &str) -> IResult<&str, u8> {
    map_res(digit1, |s: &str| s.parse::<u8>())(input)
}

fn comma(input: &str) -> IResult<&str, char> {
    delimited(multispace0, char(','), multispace0)(input)
}

fn rgb_name(input: &str) -> IResult<&str, &str> {
    alt((tag("rgba"), tag("rgb")))(input)
}

/// Parse `rgb(r, g, b)` or `rgba(r, g, b, a)`.
fn parse_rgb_func(input: &str) -> IResult<&str, Color> {
    let (input, _) = rgb_name(input)?;
    let (input, _) = preceded(multispace0, char('('))(input)?;
    let (input, r) = preceded(multispace0, parse_channel)(input)?;
    let (input, g) = preceded(comma, parse_channel)(input)?;
    let (input, b) = preceded(comma, parse_channel)(input)?;
    let (input, alpha) = opt(preceded(comma, parse_number))(input)?;
    let (input, _) = preceded(multispace0, char(')'))(input)?;

    Ok((input, Color::rgb(r, g, b).with_alpha(alpha.unwrap_or(1.0) as f32)))
}

/// Parse a `#rrggbb` color.
fn parse_hex_color(input: &str) -> IResult<&str, Color> {
    map_res(
        recognize(preceded(
            char('#'),
            take_while_m_n(6, 6, |c: char| c.is_ascii_hexdigit()),
        )),
        Color::from_hex,
    )(input)
}

/// Parse a color inside a shadow descriptor.
pub fn parse_shadow_color(input: &str) -> IResult<&str, Color> {
    alt((parse_rgb_func, parse_hex_color))(input)
}

fn inset_keyword(input: &str) -> IResult<&str, &str> {
    terminated(tag("inset"), multispace1)(input)
}

fn next_length(input: &str) -> IResult<&str, Length> {
    preceded(multispace1, parse_loose_length)(input)
}

/// Parse a single box-shadow descriptor (e.g., "0 10px 30px rgba(0, 0, 0, 0.18)").
pub fn parse_box_shadow(input: &str) -> IResult<&str, BoxShadow> {
    let (input, _) = multispace0(input)?;
    let (input, inset) = opt(inset_keyword)(input)?;
    let (input, offset_x) = parse_loose_length(input)?;
    let (input, offset_y) = next_length(input)?;
    let (input, blur) = opt(next_length)(input)?;
    let (input, spread) = match blur {
        Some(_) => opt(next_length)(input)?,
        None => (input, None),
    };
    let (input, color) = preceded(multispace1, parse_shadow_color)(input)?;
    let (input, _) = multispace0(input)?;

    Ok((
        input,
        BoxShadow {
            inset: inset.is_some(),
            offset_x,
            offset_y,
            blur: blur.unwrap_or(Length::ZERO),
            spread: spread.unwrap_or(Length::ZERO),
            color,
        },
    ))
}

/// Parses a complete shadow descriptor, rejecting trailing input.
pub fn shadow_from_str(input: &str) -> Option<BoxShadow> {
    all_consuming(parse_box_shadow)(input).ok().map(|(_, shadow)| shadow)
}

/// Splits a CSS `font-family` list into family names, dropping quotes.
pub fn split_font_stack(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|family| family.trim().trim_matches(|c| c == '\'' || c == '"').trim())
        .filter(|family| !family.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shadow_with_rgba() {
        let shadow = shadow_from_str("0 1px 2px rgba(0, 0, 0, 0.12)").unwrap();
        assert_eq!(shadow.offset_x, Length::ZERO);
        assert_eq!(shadow.offset_y, Length::px(1.0));
        assert_eq!(shadow.blur, Length::px(2.0));
        assert_eq!(shadow.spread, Length::ZERO);
        assert_eq!(shadow.color, Color::rgba(0, 0, 0, 0.12));
        assert!(!shadow.inset);
    }

    #[test]
    fn test_shadow_with_spread_hex_and_inset() {
        let shadow = shadow_from_str("inset 0 4px 8px 2px #0c3250").unwrap();
        assert!(shadow.inset);
        assert_eq!(shadow.spread, Length::px(2.0));
        assert_eq!(shadow.color, Color::rgb(0x0c, 0x32, 0x50));
    }

    #[test]
    fn test_shadow_offsets_only() {
        let shadow = shadow_from_str("2px 2px rgb(10, 20, 30)").unwrap();
        assert_eq!(shadow.blur, Length::ZERO);
        assert_eq!(shadow.color, Color::rgb(10, 20, 30));
    }

    #[test]
    fn test_shadow_rejects_malformed() {
        assert!(shadow_from_str("0 1px").is_none());
        assert!(shadow_from_str("big and dark").is_none());
        assert!(shadow_from_str("0 1px 2px rgba(0, 0, 0)").is_some());
        assert!(shadow_from_str("0 1px 2px rgba(300, 0, 0, 0.1)").is_none());
        assert!(shadow_from_str("0 1px 2px #000").is_none());
        assert!(shadow_from_str("0 1px 2px red").is_none());
    }

    #[test]
    fn test_font_stack_split() {
        let families = split_font_stack("'Poppins', 'Segoe UI', Roboto, \"Helvetica Neue\", sans-serif");
        assert_eq!(
            families,
            vec!["Poppins", "Segoe UI", "Roboto", "Helvetica Neue", "sans-serif"]
        );
    }

    #[test]
    fn test_font_stack_ignores_empty_entries() {
        assert_eq!(split_font_stack("Inter,, ,Arial"), vec!["Inter", "Arial"]);
        assert!(split_font_stack("").is_empty());
    }
}
