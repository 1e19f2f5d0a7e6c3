use crate::types::geometry::Length;
use nom::{
    IResult,
    bytes::complete::tag,
    character::complete::{char, digit1},
    combinator::{all_consuming, map_res, opt, recognize},
    sequence::{pair, tuple},
};

/// Parse a floating point or integer number.
pub fn parse_number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((
            opt(char('-')),
            digit1,
            opt(pair(char('.'), digit1)),
        ))),
        |s: &str| s.parse::<f64>(),
    )(input)
}

fn px_suffix(input: &str) -> IResult<&str, &str> {
    tag("px")(input)
}

/// Parse a pixel length (e.g., "14px", "0.5px").
///
/// The `px` suffix may only be omitted for zero.
pub fn parse_px_length(input: &str) -> IResult<&str, Length> {
    let (remaining, value) = parse_number(input)?;
    let (remaining, unit) = opt(px_suffix)(remaining)?;

    if unit.is_none() && value != 0.0 {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Tag,
        )));
    }

    Ok((remaining, Length::px(value)))
}

/// Parse a length where the unit is optional (box-shadow offsets).
pub fn parse_loose_length(input: &str) -> IResult<&str, Length> {
    let (input, value) = parse_number(input)?;
    let (input, _) = opt(px_suffix)(input)?;
    Ok((input, Length::px(value)))
}

/// Parses a complete pixel length, rejecting trailing input.
pub fn length_from_str(input: &str) -> Option<Length> {
    all_consuming(parse_px_length)(input.trim())
        .ok()
        .map(|(_, length)| length)
}
