//! Structural validation of theme packs.
//!
//! Every check is independent; a pack with several defects yields one
//! [`ValidationError`] per defect, in pack order (identity, palette,
//! typography, spacing, radii, shadows, grid, components).

use crate::error::{ValidationError, ValidationErrorKind};
use crate::parser::token::{
    AliasKind, FieldKind, Literal, Token, parse_token, shadow_level_index, spacing_step_index,
};
use crate::parser::units::length_from_str;
use crate::parser::values::shadow_from_str;
use crate::types::color::Color;
use crate::types::geometry::{Density, Length};
use crate::types::pack::{
    ComponentSpec, Lenient, REQUIRED_RADII, REQUIRED_ROLES, ThemePack, TokenValue,
};

/// Font weights must fall in this range.
const FONT_WEIGHT_RANGE: std::ops::RangeInclusive<i64> = 100..=900;

/// Collects validation issues for a pack.
#[derive(Debug, Default)]
pub struct ValidationReporter {
    issues: Vec<ValidationError>,
}

impl ValidationReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an issue at `path`.
    pub fn report(&mut self, path: impl Into<String>, kind: ValidationErrorKind) {
        self.issues.push(ValidationError::new(path, kind));
    }

    pub fn issues(&self) -> &[ValidationError] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<ValidationError> {
        self.issues
    }

    /// True if any recorded issue has error severity.
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(ValidationError::is_error)
    }

    /// Runs every check against `pack`, appending to the issues collected so far.
    pub fn check(&mut self, pack: &ThemePack) {
        self.check_identity(pack);
        self.check_palette(pack);
        self.check_typography(pack);
        self.check_spacing(pack);
        self.check_radii(pack);
        self.check_shadows(pack);
        self.check_grid(pack);
        self.check_components(pack);
    }

    /// Reads a required value, reporting it if absent or of the wrong type.
    fn require<'a, T>(
        &mut self,
        path: impl Into<String>,
        field: Option<&'a Lenient<T>>,
        expected: &'static str,
    ) -> Option<&'a T> {
        match field {
            Some(Lenient::Valid(value)) => Some(value),
            Some(Lenient::Invalid(raw)) => {
                self.report(
                    path,
                    ValidationErrorKind::WrongType {
                        expected,
                        found: raw.to_string(),
                    },
                );
                None
            }
            None => {
                self.report(path, ValidationErrorKind::MissingField);
                None
            }
        }
    }

    fn check_identity(&mut self, pack: &ThemePack) {
        if pack.id.trim().is_empty() {
            self.report("id", ValidationErrorKind::MissingField);
        }
        if pack.name.trim().is_empty() {
            self.report("name", ValidationErrorKind::MissingField);
        }
    }

    fn check_palette(&mut self, pack: &ThemePack) {
        let Some(palette) = self.require("palette", pack.palette.as_ref(), "an object") else {
            return;
        };

        for role in REQUIRED_ROLES {
            let path = format!("palette.{role}");
            if let Some(value) = self.require(path.clone(), palette.get(role), "a color string") {
                self.check_color(path, value);
            }
        }

        for (role, value) in palette {
            if REQUIRED_ROLES.contains(&role.as_str()) {
                continue;
            }
            let path = format!("palette.{role}");
            self.report(path.clone(), ValidationErrorKind::UnknownPaletteRole(role.clone()));
            if let Some(value) = self.require(path.clone(), Some(value), "a color string") {
                self.check_color(path, value);
            }
        }
    }

    fn check_color(&mut self, path: String, value: &str) {
        if Color::from_hex(value).is_err() {
            self.report(path, ValidationErrorKind::InvalidColor(value.to_string()));
        }
    }

    fn check_typography(&mut self, pack: &ThemePack) {
        let Some(typography) = self.require("typography", pack.typography.as_ref(), "an object")
        else {
            return;
        };

        for (key, stack) in [("heading", &typography.heading), ("body", &typography.body)] {
            let path = format!("typography.{key}");
            if let Some(families) = self.require(path.clone(), stack.as_ref(), "a font stack") {
                if families.is_empty() {
                    self.report(path, ValidationErrorKind::EmptyFontStack);
                }
            }
        }

        for (key, weight) in [
            ("weightHeading", &typography.weight_heading),
            ("weightBody", &typography.weight_body),
        ] {
            let path = format!("typography.{key}");
            match self.require(path.clone(), weight.as_ref(), "an integer") {
                Some(&w) if !FONT_WEIGHT_RANGE.contains(&w) => {
                    self.report(path, ValidationErrorKind::FontWeightRange(w))
                }
                Some(&w) if w % 100 != 0 => self.report(path, ValidationErrorKind::FontWeightStep(w)),
                _ => {}
            }
        }
    }

    fn check_spacing(&mut self, pack: &ThemePack) {
        let Some(spacing) = self.require("spacing", pack.spacing.as_ref(), "an object") else {
            return;
        };

        match self.require("spacing.scale", spacing.scale.as_ref(), "a list of integers") {
            None => {}
            Some(scale) if scale.is_empty() => {
                self.report("spacing.scale", ValidationErrorKind::EmptyScale)
            }
            Some(scale) => {
                let mut previous = None;
                for (i, step) in scale.iter().enumerate() {
                    let path = format!("spacing.scale[{i}]");
                    let Some(&step) = self.require(path.clone(), Some(step), "an integer") else {
                        continue;
                    };
                    if step <= 0 {
                        self.report(path.clone(), ValidationErrorKind::NonPositive(step));
                    } else if u32::try_from(step).is_err() {
                        self.report(path.clone(), ValidationErrorKind::OutOfRange(step));
                    }
                    if let Some(previous) = previous {
                        if step <= previous {
                            self.report(
                                path,
                                ValidationErrorKind::ScaleNotIncreasing {
                                    previous,
                                    current: step,
                                },
                            );
                        }
                    }
                    previous = Some(step);
                }
            }
        }

        match self.require("spacing.density", spacing.density.as_ref(), "a string") {
            Some(density) if density.parse::<Density>().is_err() => self.report(
                "spacing.density",
                ValidationErrorKind::UnknownDensity(density.clone()),
            ),
            _ => {}
        }
    }

    fn check_radii(&mut self, pack: &ThemePack) {
        let Some(radii) = self.require("radii", pack.radii.as_ref(), "an object") else {
            return;
        };

        let mut parsed: Vec<(&'static str, &str, Length)> = Vec::new();
        for key in REQUIRED_RADII {
            let path = format!("radii.{key}");
            let Some(raw) = self.require(path.clone(), radii.get(key), "a length string") else {
                continue;
            };
            match length_from_str(raw) {
                Some(length) if length.value() >= 0.0 => {
                    if key == "none" && !length.is_zero() {
                        self.report(path, ValidationErrorKind::RadiusNotZero(raw.clone()));
                    }
                    parsed.push((key, raw.as_str(), length));
                }
                _ => self.report(path, ValidationErrorKind::InvalidLength(raw.clone())),
            }
        }

        for pair in parsed.windows(2) {
            let (smaller, smaller_raw, smaller_len) = pair[0];
            let (larger, larger_raw, larger_len) = pair[1];
            if smaller_len > larger_len {
                self.report(
                    format!("radii.{larger}"),
                    ValidationErrorKind::RadiusOrder {
                        smaller,
                        smaller_value: smaller_raw.to_string(),
                        larger,
                        larger_value: larger_raw.to_string(),
                    },
                );
            }
        }

        for key in radii.keys() {
            if !REQUIRED_RADII.contains(&key.as_str()) {
                self.report(format!("radii.{key}"), ValidationErrorKind::UnrecognizedField);
            }
        }
    }

    fn check_shadows(&mut self, pack: &ThemePack) {
        let Some(shadows) = self.require("shadows", pack.shadows.as_ref(), "a list of strings")
        else {
            return;
        };
        if shadows.is_empty() {
            self.report("shadows", ValidationErrorKind::EmptyShadows);
        }
        for (i, descriptor) in shadows.iter().enumerate() {
            let path = format!("shadows[{i}]");
            let Some(descriptor) = self.require(path.clone(), Some(descriptor), "a shadow descriptor")
            else {
                continue;
            };
            if shadow_from_str(descriptor).is_none() {
                self.report(path, ValidationErrorKind::InvalidShadow(descriptor.clone()));
            }
        }
    }

    fn check_grid(&mut self, pack: &ThemePack) {
        let Some(grid) = self.require("grid", pack.grid.as_ref(), "an object") else {
            return;
        };

        for (key, value, allow_zero) in [
            ("columns", &grid.columns, false),
            ("columnGap", &grid.column_gap, true),
            ("rowUnit", &grid.row_unit, false),
        ] {
            let path = format!("grid.{key}");
            match self.require(path.clone(), value.as_ref(), "an integer") {
                None => {}
                Some(&v) if allow_zero && v < 0 => self.report(path, ValidationErrorKind::Negative(v)),
                Some(&v) if !allow_zero && v <= 0 => {
                    self.report(path, ValidationErrorKind::NonPositive(v))
                }
                Some(&v) if u32::try_from(v).is_err() => {
                    self.report(path, ValidationErrorKind::OutOfRange(v))
                }
                Some(_) => {}
            }
        }
    }

    fn check_components(&mut self, pack: &ThemePack) {
        // Components are optional; only a present but mistyped section is an issue.
        let Some(section) = &pack.components else {
            return;
        };
        let Some(components) = self.require("components", Some(section), "an object") else {
            return;
        };
        for (component, spec) in components {
            let path = format!("components.{component}");
            if let Some(spec) = self.require(path, Some(spec), "an object") {
                self.check_component(pack, component, spec);
            }
        }
    }

    fn check_component(&mut self, pack: &ThemePack, component: &str, spec: &ComponentSpec) {
        for (field, value) in spec {
            let path = format!("components.{component}.{field}");
            let kind = FieldKind::for_field(field);

            let token = match parse_token(kind, value) {
                Ok(token) => token,
                Err(err) => {
                    self.report(path, err);
                    continue;
                }
            };

            match token {
                Token::Alias(alias, key) => {
                    if !alias_target_exists(pack, alias, &key) {
                        self.report(
                            path,
                            ValidationErrorKind::UnknownAlias {
                                alias: raw_text(value),
                                target: alias.target(),
                            },
                        );
                    }
                }
                Token::Literal(Literal::Length(length)) if length.value() < 0.0 => {
                    self.report(path, ValidationErrorKind::NegativeLength(length.to_string()));
                }
                Token::Literal(Literal::Keyword(text)) if reads_as_alias(pack, &text) => {
                    self.report(path, ValidationErrorKind::AliasInUntypedField(text.trim().to_string()));
                }
                _ if kind == FieldKind::Keyword => {
                    self.report(path, ValidationErrorKind::UnrecognizedField);
                }
                _ => {}
            }
        }
    }
}

fn raw_text(value: &TokenValue) -> String {
    value.to_string().trim().to_string()
}

/// Whether `text` would resolve as an alias in a color, radius, spacing or
/// shadow field of `pack`. CSS keywords shared with alias syntax (`auto`,
/// `none`) and plain numbers do not count.
fn reads_as_alias(pack: &ThemePack, text: &str) -> bool {
    let text = text.trim();
    if matches!(text, "auto" | "none") || text.parse::<f64>().is_ok() {
        return false;
    }

    let value = TokenValue::from(text);
    [FieldKind::Color, FieldKind::Radius, FieldKind::Spacing, FieldKind::Shadow]
        .into_iter()
        .any(|kind| {
            matches!(
                parse_token(kind, &value),
                Ok(Token::Alias(alias, key)) if alias_target_exists(pack, alias, &key)
            )
        })
}

/// Whether the key an alias names exists in `pack`.
///
/// `auto` depends only on the required `background` role, whose absence is
/// reported on its own.
pub fn alias_target_exists(pack: &ThemePack, alias: AliasKind, key: &str) -> bool {
    match alias {
        AliasKind::Palette | AliasKind::Muted | AliasKind::OnColor => pack.has_palette_role(key),
        AliasKind::AutoBorder | AliasKind::AutoForeground => true,
        AliasKind::Radius => REQUIRED_RADII.contains(&key) && pack.radius_value(key).is_some(),
        AliasKind::Spacing => spacing_step_index(key).is_some_and(|i| i < pack.scale_len()),
        AliasKind::Shadow => shadow_level_index(key).is_some_and(|i| i < pack.shadow_count()),
    }
}

/// Validates `pack`, returning every issue found (errors and warnings).
pub fn validate(pack: &ThemePack) -> Vec<ValidationError> {
    let mut reporter = ValidationReporter::new();
    reporter.check(pack);
    reporter.into_issues()
}
