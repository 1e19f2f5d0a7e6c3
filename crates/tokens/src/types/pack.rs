//! Raw theme pack records, exactly as authored.
//!
//! Every field is optional (or defaults to empty) so that a pack missing
//! several required fields still deserializes, and validation can report all
//! of them in one pass instead of failing on the first. For the same reason
//! values are read through [`Lenient`]: a field holding the wrong JSON type
//! is kept as-is and reported as a type mismatch.

use crate::parser::values::split_font_stack;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// Semantic color role → color value (`#rrggbb`).
pub type Palette = BTreeMap<String, Lenient<String>>;

/// Radius key (`none`, `sm`, `md`, `lg`) → pixel string (`"14px"`).
pub type Radii = BTreeMap<String, Lenient<String>>;

/// Field name → literal value or alias token.
pub type ComponentSpec = BTreeMap<String, TokenValue>;

/// Component name → component spec.
pub type Components = BTreeMap<String, Lenient<ComponentSpec>>;

/// The palette roles every pack must define.
pub const REQUIRED_ROLES: [&str; 7] = [
    "background",
    "surface",
    "paper",
    "textPrimary",
    "textSecondary",
    "accent",
    "accentStrong",
];

/// The radius keys every pack must define, smallest first.
pub const REQUIRED_RADII: [&str; 4] = ["none", "sm", "md", "lg"];

/// An authored value that either has the expected shape or is kept verbatim.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Lenient<T> {
    Valid(T),
    Invalid(serde_json::Value),
}

impl<T> Lenient<T> {
    pub fn valid(&self) -> Option<&T> {
        match self {
            Lenient::Valid(value) => Some(value),
            Lenient::Invalid(_) => None,
        }
    }

    pub fn valid_mut(&mut self) -> Option<&mut T> {
        match self {
            Lenient::Valid(value) => Some(value),
            Lenient::Invalid(_) => None,
        }
    }

    /// The authored JSON, if it did not have the expected shape.
    pub fn invalid(&self) -> Option<&serde_json::Value> {
        match self {
            Lenient::Valid(_) => None,
            Lenient::Invalid(raw) => Some(raw),
        }
    }
}

impl<T> From<T> for Lenient<T> {
    fn from(value: T) -> Self {
        Lenient::Valid(value)
    }
}

impl From<&str> for Lenient<String> {
    fn from(value: &str) -> Self {
        Lenient::Valid(value.to_string())
    }
}

impl<T> FromIterator<T> for Lenient<Vec<Lenient<T>>> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Lenient::Valid(iter.into_iter().map(Lenient::Valid).collect())
    }
}

/// A named bundle of design tokens.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemePack {
    pub id: String,
    pub name: String,
    pub palette: Option<Lenient<Palette>>,
    pub typography: Option<Lenient<Typography>>,
    pub spacing: Option<Lenient<SpacingSpec>>,
    pub radii: Option<Lenient<Radii>>,
    pub shadows: Option<Lenient<Vec<Lenient<String>>>>,
    pub grid: Option<Lenient<GridSpec>>,
    pub components: Option<Lenient<Components>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Typography {
    #[serde(deserialize_with = "de_font_stack")]
    pub heading: Option<Lenient<Vec<String>>>,
    #[serde(deserialize_with = "de_font_stack")]
    pub body: Option<Lenient<Vec<String>>>,
    pub weight_heading: Option<Lenient<i64>>,
    pub weight_body: Option<Lenient<i64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpacingSpec {
    pub scale: Option<Lenient<Vec<Lenient<i64>>>>,
    pub density: Option<Lenient<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridSpec {
    pub columns: Option<Lenient<i64>>,
    pub column_gap: Option<Lenient<i64>>,
    pub row_unit: Option<Lenient<i64>>,
}

/// A component field value before resolution.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Number(f64),
    Text(String),
    /// Any other JSON value (`true`, `null`, a list); never valid.
    Other(serde_json::Value),
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        TokenValue::Text(value.to_string())
    }
}

impl From<f64> for TokenValue {
    fn from(value: f64) -> Self {
        TokenValue::Number(value)
    }
}

impl std::fmt::Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Number(n) => write!(f, "{}", n),
            TokenValue::Text(s) => write!(f, "{}", s),
            TokenValue::Other(value) => write!(f, "{}", value),
        }
    }
}

/// Unwraps an optional section, treating a mistyped one as absent.
fn section<T>(field: &Option<Lenient<T>>) -> Option<&T> {
    field.as_ref()?.valid()
}

fn section_mut<T>(field: &mut Option<Lenient<T>>) -> Option<&mut T> {
    field.as_mut()?.valid_mut()
}

impl ThemePack {
    pub fn palette(&self) -> Option<&Palette> {
        section(&self.palette)
    }

    pub fn palette_mut(&mut self) -> Option<&mut Palette> {
        section_mut(&mut self.palette)
    }

    pub fn typography(&self) -> Option<&Typography> {
        section(&self.typography)
    }

    pub fn typography_mut(&mut self) -> Option<&mut Typography> {
        section_mut(&mut self.typography)
    }

    pub fn spacing(&self) -> Option<&SpacingSpec> {
        section(&self.spacing)
    }

    pub fn spacing_mut(&mut self) -> Option<&mut SpacingSpec> {
        section_mut(&mut self.spacing)
    }

    pub fn radii(&self) -> Option<&Radii> {
        section(&self.radii)
    }

    pub fn radii_mut(&mut self) -> Option<&mut Radii> {
        section_mut(&mut self.radii)
    }

    pub fn grid(&self) -> Option<&GridSpec> {
        section(&self.grid)
    }

    pub fn grid_mut(&mut self) -> Option<&mut GridSpec> {
        section_mut(&mut self.grid)
    }

    /// Well-formed components, in name order.
    pub fn components(&self) -> impl Iterator<Item = (&String, &ComponentSpec)> {
        section(&self.components)
            .into_iter()
            .flatten()
            .filter_map(|(name, spec)| Some((name, spec.valid()?)))
    }

    pub fn component(&self, name: &str) -> Option<&ComponentSpec> {
        section(&self.components)?.get(name)?.valid()
    }

    pub fn component_mut(&mut self, name: &str) -> Option<&mut ComponentSpec> {
        section_mut(&mut self.components)?.get_mut(name)?.valid_mut()
    }

    /// Adds or replaces a component, creating the components section if needed.
    pub fn insert_component(&mut self, name: impl Into<String>, spec: ComponentSpec) {
        if section(&self.components).is_none() {
            self.components = Some(Lenient::Valid(Components::new()));
        }
        if let Some(components) = section_mut(&mut self.components) {
            components.insert(name.into(), Lenient::Valid(spec));
        }
    }

    /// Looks up a raw palette entry.
    pub fn palette_value(&self, role: &str) -> Option<&str> {
        self.palette()?.get(role)?.valid().map(String::as_str)
    }

    pub fn has_palette_role(&self, role: &str) -> bool {
        self.palette_value(role).is_some()
    }

    pub fn radius_value(&self, key: &str) -> Option<&str> {
        self.radii()?.get(key)?.valid().map(String::as_str)
    }

    pub fn scale_len(&self) -> usize {
        self.spacing()
            .and_then(|spacing| section(&spacing.scale))
            .map_or(0, Vec::len)
    }

    pub fn shadow_count(&self) -> usize {
        section(&self.shadows).map_or(0, Vec::len)
    }
}

/// Accepts either a list of family names or a CSS `font-family` string.
fn de_font_stack<'de, D>(deserializer: D) -> Result<Option<Lenient<Vec<String>>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrVec {
        One(String),
        Many(Vec<String>),
        Other(serde_json::Value),
    }

    let value = Option::<StringOrVec>::deserialize(deserializer)?;

    Ok(value.map(|value| match value {
        StringOrVec::One(string) => Lenient::Valid(split_font_stack(&string)),
        StringOrVec::Many(list) => Lenient::Valid(
            list.iter()
                .flat_map(|family| split_font_stack(family))
                .collect(),
        ),
        StringOrVec::Other(raw) => Lenient::Invalid(raw),
    }))
}
