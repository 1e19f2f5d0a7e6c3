//! Alias resolution dispatch.
//!
//! Every [`AliasKind`] maps to exactly one [`AliasFn`]; consumers of the
//! resolved theme never see alias keys.

use crate::contrast::ContrastEngine;
use crate::error::ValidationErrorKind;
use crate::parser::token::{AliasKind, Literal, Token, shadow_level_index, spacing_step_index};
use crate::types::color::Color;
use crate::types::resolved::{ResolvedPalette, ResolvedRadii, ResolvedValue};
use crate::types::shadow::BoxShadow;
use crate::types::geometry::Length;

/// Theme-level values every alias resolves against.
pub(crate) struct ResolveContext<'a> {
    pub engine: &'a ContrastEngine,
    pub palette: &'a ResolvedPalette,
    pub radii: &'a ResolvedRadii,
    pub scale: &'a [u32],
    pub shadows: &'a [BoxShadow],
}

/// Per-component state: the opaque color the component is drawn on.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Scope {
    pub surface: Color,
}

pub(crate) type AliasFn =
    fn(&ResolveContext<'_>, Scope, &str) -> Result<ResolvedValue, ValidationErrorKind>;

impl AliasKind {
    pub(crate) fn resolver(self) -> AliasFn {
        match self {
            AliasKind::Palette => resolve_palette,
            AliasKind::Muted => resolve_muted,
            AliasKind::OnColor => resolve_on_color,
            AliasKind::AutoBorder => resolve_auto_border,
            AliasKind::AutoForeground => resolve_auto_foreground,
            AliasKind::Radius => resolve_radius,
            AliasKind::Spacing => resolve_spacing,
            AliasKind::Shadow => resolve_shadow,
        }
    }
}

impl ResolveContext<'_> {
    /// Resolves a classified token within `scope`.
    pub fn resolve_token(&self, scope: Scope, token: Token) -> Result<ResolvedValue, ValidationErrorKind> {
        match token {
            Token::Literal(literal) => Ok(literal_value(literal)),
            Token::Alias(kind, key) => {
                let value = (kind.resolver())(self, scope, &key)?;
                log::trace!("{:?} alias `{}` -> {:?}", kind, key, value);
                Ok(value)
            }
        }
    }

    fn role(&self, alias: AliasKind, key: &str) -> Result<Color, ValidationErrorKind> {
        self.palette.get(key).ok_or_else(|| unknown(alias, key))
    }
}

fn unknown(alias: AliasKind, key: &str) -> ValidationErrorKind {
    ValidationErrorKind::UnknownAlias {
        alias: key.to_string(),
        target: alias.target(),
    }
}

fn literal_value(literal: Literal) -> ResolvedValue {
    match literal {
        Literal::Color(color) => ResolvedValue::Color(color),
        Literal::Length(length) => ResolvedValue::Length(length),
        Literal::Shadow(shadow) => ResolvedValue::Shadow(shadow),
        Literal::Number(n) => ResolvedValue::Number(n),
        Literal::BorderStyle(style) => ResolvedValue::BorderStyle(style),
        Literal::Keyword(keyword) => ResolvedValue::Keyword(keyword),
    }
}

fn resolve_palette(ctx: &ResolveContext<'_>, _: Scope, key: &str) -> Result<ResolvedValue, ValidationErrorKind> {
    ctx.role(AliasKind::Palette, key).map(ResolvedValue::Color)
}

fn resolve_muted(ctx: &ResolveContext<'_>, _: Scope, key: &str) -> Result<ResolvedValue, ValidationErrorKind> {
    let base = ctx.role(AliasKind::Muted, key)?;
    Ok(ResolvedValue::Color(ctx.engine.muted(base, ctx.palette.surface)))
}

fn resolve_on_color(ctx: &ResolveContext<'_>, _: Scope, key: &str) -> Result<ResolvedValue, ValidationErrorKind> {
    let background = ctx.role(AliasKind::OnColor, key)?;
    Ok(ResolvedValue::Color(ctx.engine.contrasting_foreground(background)))
}

fn resolve_auto_border(
    ctx: &ResolveContext<'_>,
    scope: Scope,
    key: &str,
) -> Result<ResolvedValue, ValidationErrorKind> {
    let hue = ctx.role(AliasKind::AutoBorder, key)?;
    Ok(ResolvedValue::Color(ctx.engine.auto_border(hue, scope.surface)))
}

fn resolve_auto_foreground(
    ctx: &ResolveContext<'_>,
    scope: Scope,
    _: &str,
) -> Result<ResolvedValue, ValidationErrorKind> {
    Ok(ResolvedValue::Color(ctx.engine.contrasting_foreground(scope.surface)))
}

fn resolve_radius(ctx: &ResolveContext<'_>, _: Scope, key: &str) -> Result<ResolvedValue, ValidationErrorKind> {
    ctx.radii
        .get(key)
        .map(ResolvedValue::Length)
        .ok_or_else(|| unknown(AliasKind::Radius, key))
}

fn resolve_spacing(ctx: &ResolveContext<'_>, _: Scope, key: &str) -> Result<ResolvedValue, ValidationErrorKind> {
    spacing_step_index(key)
        .and_then(|i| ctx.scale.get(i))
        .map(|&step| ResolvedValue::Length(Length::px(f64::from(step))))
        .ok_or_else(|| unknown(AliasKind::Spacing, key))
}

fn resolve_shadow(ctx: &ResolveContext<'_>, _: Scope, key: &str) -> Result<ResolvedValue, ValidationErrorKind> {
    shadow_level_index(key)
        .and_then(|i| ctx.shadows.get(i))
        .map(|&shadow| ResolvedValue::Shadow(Some(shadow)))
        .ok_or_else(|| unknown(AliasKind::Shadow, key))
}
