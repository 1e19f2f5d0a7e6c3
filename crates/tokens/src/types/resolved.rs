//! Fully resolved theme values.
//!
//! A [`ResolvedTheme`] mirrors the shape of a [`ThemePack`](crate::types::ThemePack)
//! with every alias replaced by a concrete value. Serializing it produces the
//! same camelCase layout as the authored pack, so a rendering layer can
//! consume it without knowing anything about alias syntax.

use crate::types::color::Color;
use crate::types::geometry::{BorderStyle, Density, Length};
use crate::types::shadow::BoxShadow;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTheme {
    pub id: String,
    pub name: String,
    pub palette: ResolvedPalette,
    pub typography: ResolvedTypography,
    pub spacing: ResolvedSpacing,
    pub radii: ResolvedRadii,
    pub shadows: Vec<BoxShadow>,
    pub grid: ResolvedGrid,
    pub components: BTreeMap<String, ResolvedComponent>,
}

impl ResolvedTheme {
    pub fn component(&self, name: &str) -> Option<&ResolvedComponent> {
        self.components.get(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPalette {
    pub background: Color,
    pub surface: Color,
    pub paper: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub accent: Color,
    pub accent_strong: Color,
    /// Additional roles beyond the seven standard ones.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Color>,
}

impl ResolvedPalette {
    /// Looks up a role by its authored (camelCase) name.
    pub fn get(&self, role: &str) -> Option<Color> {
        match role {
            "background" => Some(self.background),
            "surface" => Some(self.surface),
            "paper" => Some(self.paper),
            "textPrimary" => Some(self.text_primary),
            "textSecondary" => Some(self.text_secondary),
            "accent" => Some(self.accent),
            "accentStrong" => Some(self.accent_strong),
            _ => self.extra.get(role).copied(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTypography {
    pub heading: Vec<String>,
    pub body: Vec<String>,
    pub weight_heading: u16,
    pub weight_body: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSpacing {
    pub scale: Vec<u32>,
    pub density: Density,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedRadii {
    pub none: Length,
    pub sm: Length,
    pub md: Length,
    pub lg: Length,
}

impl ResolvedRadii {
    pub fn get(&self, key: &str) -> Option<Length> {
        match key {
            "none" => Some(self.none),
            "sm" => Some(self.sm),
            "md" => Some(self.md),
            "lg" => Some(self.lg),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedGrid {
    pub columns: u32,
    pub column_gap: u32,
    pub row_unit: u32,
}

/// A concrete component field value.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedValue {
    Color(Color),
    Length(Length),
    /// `None` means the component casts no shadow.
    Shadow(Option<BoxShadow>),
    Number(f64),
    BorderStyle(BorderStyle),
    Keyword(String),
}

impl Serialize for ResolvedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ResolvedValue::Color(color) => color.serialize(serializer),
            ResolvedValue::Length(length) => length.serialize(serializer),
            ResolvedValue::Shadow(Some(shadow)) => shadow.serialize(serializer),
            ResolvedValue::Shadow(None) => serializer.serialize_str("none"),
            ResolvedValue::Number(n) => serializer.serialize_f64(*n),
            ResolvedValue::BorderStyle(style) => style.serialize(serializer),
            ResolvedValue::Keyword(keyword) => serializer.serialize_str(keyword),
        }
    }
}

/// Resolved fields of one component, ordered by field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResolvedComponent(pub BTreeMap<String, ResolvedValue>);

impl ResolvedComponent {
    pub fn get(&self, field: &str) -> Option<&ResolvedValue> {
        self.0.get(field)
    }

    pub fn color(&self, field: &str) -> Option<Color> {
        match self.0.get(field) {
            Some(ResolvedValue::Color(color)) => Some(*color),
            _ => None,
        }
    }

    pub fn length(&self, field: &str) -> Option<Length> {
        match self.0.get(field) {
            Some(ResolvedValue::Length(length)) => Some(*length),
            _ => None,
        }
    }

    pub fn shadow(&self, field: &str) -> Option<Option<BoxShadow>> {
        match self.0.get(field) {
            Some(ResolvedValue::Shadow(shadow)) => Some(*shadow),
            _ => None,
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &ResolvedValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }
}
