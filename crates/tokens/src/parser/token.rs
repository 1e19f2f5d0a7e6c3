//! Component token classification.
//!
//! A component field holds either a literal value or an alias token that
//! refers to another part of the pack. This module turns raw field values
//! into the tagged [`Token`] form:
//!
//! | Field kind | Literal forms | Alias forms |
//! |------------|---------------|-------------|
//! | Color | `#rrggbb`, `transparent` | palette role, `<role>-muted`, `on<Role>`, `auto` |
//! | Radius | `"12px"`, number | radii key (`sm`, `md`, ...) |
//! | Shadow | `none`, descriptor | level name (`sm`..`xl`) or index |
//! | Spacing | `"12px"`, number | scale step (`xs`..`xxl`) |
//!
//! Classification never looks at the pack itself; whether an alias target
//! exists is checked by validation and resolution.

use crate::error::ValidationErrorKind;
use crate::parser::units::length_from_str;
use crate::parser::values::shadow_from_str;
use crate::types::color::Color;
use crate::types::geometry::{BorderStyle, Length};
use crate::types::pack::TokenValue;
use crate::types::shadow::BoxShadow;

/// Spacing scale step names, indexed into `spacing.scale`.
pub const SPACING_STEPS: [&str; 6] = ["xs", "sm", "md", "lg", "xl", "xxl"];

/// Shadow level names, indexed into `shadows`.
pub const SHADOW_LEVELS: [&str; 4] = ["sm", "md", "lg", "xl"];

/// What a component field holds, derived from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Color,
    /// A color field that draws a border; enables the `auto` border rule.
    BorderColor,
    Radius,
    Shadow,
    Spacing,
    Number,
    BorderStyle,
    Keyword,
}

impl FieldKind {
    pub fn for_field(name: &str) -> Self {
        match name {
            "borderColor" => FieldKind::BorderColor,
            "background" | "color" | "foreground" => FieldKind::Color,
            "radius" => FieldKind::Radius,
            "shadow" | "elevation" => FieldKind::Shadow,
            "padding" | "gap" | "margin" => FieldKind::Spacing,
            "borderStyle" => FieldKind::BorderStyle,
            _ if name.ends_with("BorderColor") => FieldKind::BorderColor,
            _ if name.ends_with("Background") || name.ends_with("Color") || name.ends_with("Text") => {
                FieldKind::Color
            }
            _ if name.ends_with("Radius") => FieldKind::Radius,
            _ if name.ends_with("Shadow") => FieldKind::Shadow,
            _ if name.ends_with("Token") => FieldKind::Spacing,
            _ if name.ends_with("Width") => FieldKind::Number,
            _ => FieldKind::Keyword,
        }
    }

    pub fn is_color(&self) -> bool {
        matches!(self, FieldKind::Color | FieldKind::BorderColor)
    }

    /// What a value of this kind looks like, for type mismatch reports.
    pub fn expected(&self) -> &'static str {
        match self {
            FieldKind::Color | FieldKind::BorderColor => "a color or palette alias",
            FieldKind::Radius | FieldKind::Spacing => "a length or scale alias",
            FieldKind::Shadow => "a shadow descriptor or level",
            FieldKind::Number => "a number",
            FieldKind::BorderStyle => "a border style",
            FieldKind::Keyword => "a number or string",
        }
    }
}

/// The kinds of alias a token can name. Each kind has exactly one
/// resolution rule (see `resolver::alias`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AliasKind {
    /// A palette role, e.g. `accentStrong`.
    Palette,
    /// `<role>-muted`: the role blended toward `surface`.
    Muted,
    /// `on<Role>`: readable foreground for the role.
    OnColor,
    /// `auto` on a border color: translucent background hue.
    AutoBorder,
    /// `auto` on any other color: readable foreground for the component.
    AutoForeground,
    Radius,
    Spacing,
    Shadow,
}

impl AliasKind {
    /// Human-readable description of what the alias key must name.
    pub fn target(&self) -> &'static str {
        match self {
            AliasKind::Palette | AliasKind::Muted | AliasKind::OnColor => "palette role",
            AliasKind::AutoBorder | AliasKind::AutoForeground => "palette role",
            AliasKind::Radius => "radius",
            AliasKind::Spacing => "spacing step",
            AliasKind::Shadow => "shadow level",
        }
    }
}

/// A literal component value.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Color(Color),
    Length(Length),
    Shadow(Option<BoxShadow>),
    Number(f64),
    BorderStyle(BorderStyle),
    Keyword(String),
}

/// A classified component value: either concrete or a reference to resolve.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Literal(Literal),
    /// Alias kind plus the key it refers to (a palette role, radius key,
    /// step name or level index).
    Alias(AliasKind, String),
}

/// Classifies a raw field value according to the field's kind.
pub fn parse_token(kind: FieldKind, value: &TokenValue) -> Result<Token, ValidationErrorKind> {
    match (kind, value) {
        (_, TokenValue::Other(raw)) => Err(wrong_type(kind, raw)),
        (FieldKind::Keyword, TokenValue::Text(text)) => Ok(Token::Literal(Literal::Keyword(text.clone()))),
        (FieldKind::Keyword | FieldKind::Number, TokenValue::Number(n)) => {
            Ok(Token::Literal(Literal::Number(*n)))
        }
        (FieldKind::Number, TokenValue::Text(text)) => length_from_str(text)
            .map(|length| Token::Literal(Literal::Length(length)))
            .ok_or_else(|| ValidationErrorKind::InvalidNumber(text.clone())),
        (FieldKind::BorderStyle, value) => {
            let text = value.to_string();
            text.parse::<BorderStyle>()
                .map(|style| Token::Literal(Literal::BorderStyle(style)))
                .map_err(|_| ValidationErrorKind::InvalidBorderStyle(text))
        }
        (FieldKind::Color | FieldKind::BorderColor, TokenValue::Number(n)) => {
            Err(ValidationErrorKind::InvalidColor(n.to_string()))
        }
        (FieldKind::Color | FieldKind::BorderColor, TokenValue::Text(text)) => parse_color_token(kind, text),
        (FieldKind::Radius, value) => parse_length_token(AliasKind::Radius, value),
        (FieldKind::Spacing, value) => parse_length_token(AliasKind::Spacing, value),
        (FieldKind::Shadow, value) => parse_shadow_token(value),
    }
}

fn wrong_type(kind: FieldKind, raw: &serde_json::Value) -> ValidationErrorKind {
    ValidationErrorKind::WrongType {
        expected: kind.expected(),
        found: raw.to_string(),
    }
}

fn parse_color_token(kind: FieldKind, text: &str) -> Result<Token, ValidationErrorKind> {
    let text = text.trim();

    if text.starts_with('#') {
        return Color::from_hex(text)
            .map(|color| Token::Literal(Literal::Color(color)))
            .map_err(|_| ValidationErrorKind::InvalidColor(text.to_string()));
    }

    if text == "transparent" {
        return Ok(Token::Literal(Literal::Color(Color::transparent())));
    }

    if text == "auto" {
        let alias = if kind == FieldKind::BorderColor {
            AliasKind::AutoBorder
        } else {
            AliasKind::AutoForeground
        };
        return Ok(Token::Alias(alias, "background".to_string()));
    }

    if let Some(role) = text.strip_suffix("-muted") {
        return Ok(Token::Alias(AliasKind::Muted, role.to_string()));
    }

    if let Some(role) = on_color_role(text) {
        return Ok(Token::Alias(AliasKind::OnColor, role));
    }

    Ok(Token::Alias(AliasKind::Palette, text.to_string()))
}

/// `onAccentStrong` → `accentStrong`.
fn on_color_role(text: &str) -> Option<String> {
    let rest = text.strip_prefix("on")?;
    let mut chars = rest.chars();
    let first = chars.next()?;
    if !first.is_ascii_uppercase() {
        return None;
    }
    Some(first.to_ascii_lowercase().to_string() + chars.as_str())
}

fn parse_length_token(alias: AliasKind, value: &TokenValue) -> Result<Token, ValidationErrorKind> {
    match value {
        TokenValue::Number(n) => Ok(Token::Literal(Literal::Length(Length::px(*n)))),
        TokenValue::Text(text) => Ok(match length_from_str(text) {
            Some(length) => Token::Literal(Literal::Length(length)),
            None => Token::Alias(alias, text.trim().to_string()),
        }),
        TokenValue::Other(raw) => Err(wrong_type(FieldKind::Radius, raw)),
    }
}

fn parse_shadow_token(value: &TokenValue) -> Result<Token, ValidationErrorKind> {
    match value {
        TokenValue::Number(n) if n.fract() == 0.0 && *n >= 0.0 => {
            Ok(Token::Alias(AliasKind::Shadow, (*n as usize).to_string()))
        }
        TokenValue::Number(n) => Err(ValidationErrorKind::InvalidShadow(n.to_string())),
        TokenValue::Text(text) => {
            let text = text.trim();
            if text == "none" {
                return Ok(Token::Literal(Literal::Shadow(None)));
            }
            if let Some(shadow) = shadow_from_str(text) {
                return Ok(Token::Literal(Literal::Shadow(Some(shadow))));
            }
            Ok(Token::Alias(AliasKind::Shadow, text.to_string()))
        }
        TokenValue::Other(raw) => Err(wrong_type(FieldKind::Shadow, raw)),
    }
}

/// Index into `spacing.scale` named by a step alias.
pub fn spacing_step_index(key: &str) -> Option<usize> {
    SPACING_STEPS.iter().position(|step| *step == key)
}

/// Index into `shadows` named by a level alias (`md`) or a numeric index (`1`).
pub fn shadow_level_index(key: &str) -> Option<usize> {
    SHADOW_LEVELS
        .iter()
        .position(|level| *level == key)
        .or_else(|| key.parse::<usize>().ok())
}
