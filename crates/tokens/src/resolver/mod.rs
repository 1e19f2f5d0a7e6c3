//! Theme pack resolution.
//!
//! [`TokenResolver::resolve`] validates a pack, then turns every alias into a
//! concrete value:
//!
//! 1. Validate the whole pack. Warnings are logged and never abort.
//! 2. Abort with the error list if any error falls in the abort set.
//! 3. Resolve theme-level sections, then each component. A component's
//!    `background` is resolved first so that `auto` fields can be derived
//!    against it.
//!
//! Resolution is a pure function of the pack and the resolver configuration.
//!
//! ## Example
//!
//! ```rust
//! use tokens::resolver::TokenResolver;
//! use tokens::types::ThemePack;
//!
//! let pack = ThemePack::default();
//! let errors = TokenResolver::default().resolve(&pack).unwrap_err();
//! assert!(errors.iter().any(|e| e.path == "palette"));
//! ```

mod alias;

use crate::contrast::ContrastEngine;
use crate::error::{IssueClass, ValidationError, ValidationErrorKind};
use crate::parser::token::{FieldKind, parse_token};
use crate::parser::units::length_from_str;
use crate::parser::values::shadow_from_str;
use crate::types::color::Color;
use crate::types::geometry::{Density, Length};
use crate::types::pack::{ComponentSpec, Lenient, REQUIRED_ROLES, ThemePack, TokenValue};
use crate::types::resolved::{
    ResolvedComponent, ResolvedGrid, ResolvedPalette, ResolvedRadii, ResolvedSpacing, ResolvedTheme,
    ResolvedTypography, ResolvedValue,
};
use crate::types::shadow::BoxShadow;
use crate::validate::validate;
use alias::{ResolveContext, Scope};
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct TokenResolver {
    engine: ContrastEngine,
    abort_on: IssueClass,
}

impl Default for TokenResolver {
    fn default() -> Self {
        Self {
            engine: ContrastEngine::default(),
            abort_on: IssueClass::all(),
        }
    }
}

impl TokenResolver {
    pub fn new(engine: ContrastEngine) -> Self {
        Self {
            engine,
            ..Self::default()
        }
    }

    /// Builder method to set which issue classes abort resolution.
    ///
    /// Missing fields, type mismatches and unknown aliases always abort,
    /// whatever this is set to.
    pub fn abort_on(mut self, classes: IssueClass) -> Self {
        self.abort_on = classes;
        self
    }

    pub fn engine(&self) -> &ContrastEngine {
        &self.engine
    }

    fn aborts(&self, issue: &ValidationError) -> bool {
        issue.is_error() && (self.abort_on | IssueClass::UNRECOVERABLE).intersects(issue.class())
    }

    /// Resolves `pack` into a [`ResolvedTheme`], or returns every error found.
    pub fn resolve(&self, pack: &ThemePack) -> Result<ResolvedTheme, Vec<ValidationError>> {
        log::debug!("Resolving theme pack `{}`", pack.id);

        let issues = validate(pack);
        let mut errors = Vec::new();
        for issue in issues {
            if issue.is_error() {
                errors.push(issue);
            } else {
                log::warn!("Theme pack `{}`: {}", pack.id, issue);
            }
        }

        if errors.iter().any(|issue| self.aborts(issue)) {
            log::debug!("Theme pack `{}` failed validation with {} error(s)", pack.id, errors.len());
            return Err(errors);
        }
        for issue in &errors {
            log::warn!("Theme pack `{}`: tolerated {}", pack.id, issue);
        }

        let mut build = Build::default();
        let theme = build.theme(&self.engine, pack);
        if !build.errors.is_empty() {
            return Err(build.errors);
        }

        log::debug!(
            "Resolved theme pack `{}` ({} components)",
            theme.id,
            theme.components.len()
        );
        Ok(theme)
    }
}

/// Resolves `pack` with the default configuration.
pub fn resolve(pack: &ThemePack) -> Result<ResolvedTheme, Vec<ValidationError>> {
    TokenResolver::default().resolve(pack)
}

/// The value of an optional authored field, if it is well-typed.
fn valid<T>(field: Option<Lenient<T>>) -> Option<T> {
    match field? {
        Lenient::Valid(value) => Some(value),
        Lenient::Invalid(_) => None,
    }
}

/// Collects errors met while building a theme; failed values fall back to defaults.
#[derive(Default)]
struct Build {
    errors: Vec<ValidationError>,
}

impl Build {
    fn fail(&mut self, path: impl Into<String>, kind: ValidationErrorKind) {
        self.errors.push(ValidationError::new(path, kind));
    }

    fn theme(&mut self, engine: &ContrastEngine, pack: &ThemePack) -> ResolvedTheme {
        let palette = self.palette(pack);
        let typography = self.typography(pack);
        let spacing = self.spacing(pack);
        let radii = self.radii(pack);
        let shadows = self.shadows(pack);
        let grid = self.grid(pack);

        let ctx = ResolveContext {
            engine,
            palette: &palette,
            radii: &radii,
            scale: &spacing.scale,
            shadows: &shadows,
        };
        let components = pack
            .components()
            .map(|(name, spec)| (name.clone(), self.component(&ctx, name, spec)))
            .collect();

        ResolvedTheme {
            id: pack.id.clone(),
            name: pack.name.clone(),
            palette,
            typography,
            spacing,
            radii,
            shadows,
            grid,
            components,
        }
    }

    fn color(&mut self, path: String, raw: Option<&str>) -> Color {
        match raw.map(Color::from_hex) {
            Some(Ok(color)) => color,
            Some(Err(_)) => {
                self.fail(path, ValidationErrorKind::InvalidColor(raw.unwrap_or_default().to_string()));
                Color::default()
            }
            None => {
                self.fail(path, ValidationErrorKind::MissingField);
                Color::default()
            }
        }
    }

    fn palette(&mut self, pack: &ThemePack) -> ResolvedPalette {
        let mut role = |name: &str| self.color(format!("palette.{name}"), pack.palette_value(name));
        let mut palette = ResolvedPalette {
            background: role("background"),
            surface: role("surface"),
            paper: role("paper"),
            text_primary: role("textPrimary"),
            text_secondary: role("textSecondary"),
            accent: role("accent"),
            accent_strong: role("accentStrong"),
            extra: BTreeMap::new(),
        };

        for (name, value) in pack.palette().into_iter().flatten() {
            if !REQUIRED_ROLES.contains(&name.as_str()) {
                let raw = value.valid().map(String::as_str);
                let color = self.color(format!("palette.{name}"), raw);
                palette.extra.insert(name.clone(), color);
            }
        }
        palette
    }

    fn typography(&mut self, pack: &ThemePack) -> ResolvedTypography {
        let typography = pack.typography().cloned().unwrap_or_default();
        ResolvedTypography {
            heading: valid(typography.heading).unwrap_or_default(),
            body: valid(typography.body).unwrap_or_default(),
            weight_heading: self.convert("typography.weightHeading", valid(typography.weight_heading)),
            weight_body: self.convert("typography.weightBody", valid(typography.weight_body)),
        }
    }

    fn spacing(&mut self, pack: &ThemePack) -> ResolvedSpacing {
        let spacing = pack.spacing().cloned().unwrap_or_default();
        let scale: Vec<u32> = valid(spacing.scale)
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, step)| self.convert(format!("spacing.scale[{i}]"), step.valid().copied()))
            .collect();
        let density = match valid(spacing.density) {
            Some(raw) => raw.parse::<Density>().unwrap_or_else(|()| {
                self.fail("spacing.density", ValidationErrorKind::UnknownDensity(raw.clone()));
                Density::default()
            }),
            None => {
                self.fail("spacing.density", ValidationErrorKind::MissingField);
                Density::default()
            }
        };
        ResolvedSpacing { scale, density }
    }

    fn radii(&mut self, pack: &ThemePack) -> ResolvedRadii {
        let mut radius = |key: &str| {
            let path = format!("radii.{key}");
            match pack.radius_value(key) {
                Some(raw) => length_from_str(raw).unwrap_or_else(|| {
                    self.fail(path, ValidationErrorKind::InvalidLength(raw.to_string()));
                    Length::ZERO
                }),
                None => {
                    self.fail(path, ValidationErrorKind::MissingField);
                    Length::ZERO
                }
            }
        };
        ResolvedRadii {
            none: radius("none"),
            sm: radius("sm"),
            md: radius("md"),
            lg: radius("lg"),
        }
    }

    fn shadows(&mut self, pack: &ThemePack) -> Vec<BoxShadow> {
        let mut levels = Vec::new();
        let descriptors = pack.shadows.as_ref().and_then(Lenient::valid);
        for (i, descriptor) in descriptors.into_iter().flatten().enumerate() {
            let path = format!("shadows[{i}]");
            match descriptor {
                Lenient::Valid(descriptor) => match shadow_from_str(descriptor) {
                    Some(shadow) => levels.push(shadow),
                    None => self.fail(path, ValidationErrorKind::InvalidShadow(descriptor.clone())),
                },
                Lenient::Invalid(raw) => self.fail(
                    path,
                    ValidationErrorKind::WrongType {
                        expected: "a shadow descriptor",
                        found: raw.to_string(),
                    },
                ),
            }
        }
        levels
    }

    fn grid(&mut self, pack: &ThemePack) -> ResolvedGrid {
        let grid = pack.grid().cloned().unwrap_or_default();
        ResolvedGrid {
            columns: self.convert("grid.columns", valid(grid.columns)),
            column_gap: self.convert("grid.columnGap", valid(grid.column_gap)),
            row_unit: self.convert("grid.rowUnit", valid(grid.row_unit)),
        }
    }

    /// Narrows an authored integer to its resolved width.
    fn convert<T>(&mut self, path: impl Into<String>, value: Option<i64>) -> T
    where
        T: TryFrom<i64> + Default,
    {
        match value {
            Some(v) => T::try_from(v).unwrap_or_else(|_| {
                self.fail(path, ValidationErrorKind::OutOfRange(v));
                T::default()
            }),
            None => {
                self.fail(path, ValidationErrorKind::MissingField);
                T::default()
            }
        }
    }

    fn component(&mut self, ctx: &ResolveContext<'_>, name: &str, spec: &ComponentSpec) -> ResolvedComponent {
        let mut scope = Scope {
            surface: ctx.palette.background,
        };
        let mut fields = BTreeMap::new();

        if let Some(value) = spec.get("background") {
            if let Some(resolved) = self.field(ctx, scope, name, "background", value) {
                if let ResolvedValue::Color(color) = resolved {
                    scope.surface = color.composite_over(&ctx.palette.background);
                }
                fields.insert("background".to_string(), resolved);
            }
        }

        for (field, value) in spec {
            if field == "background" {
                continue;
            }
            if let Some(resolved) = self.field(ctx, scope, name, field, value) {
                fields.insert(field.clone(), resolved);
            }
        }

        ResolvedComponent(fields)
    }

    fn field(
        &mut self,
        ctx: &ResolveContext<'_>,
        scope: Scope,
        component: &str,
        field: &str,
        value: &TokenValue,
    ) -> Option<ResolvedValue> {
        let resolved = parse_token(FieldKind::for_field(field), value)
            .and_then(|token| ctx.resolve_token(scope, token));
        match resolved {
            Ok(value) => Some(value),
            Err(kind) => {
                self.fail(format!("components.{component}.{field}"), kind);
                None
            }
        }
    }
}
