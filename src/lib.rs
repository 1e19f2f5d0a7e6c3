//! # Themekit
//!
//! Theme packs and design token resolution.
//!
//! - [`packs`]: the registry of available theme packs and the default selection
//! - [`tokens`]: validation and alias resolution into a [`ResolvedTheme`]
//!
//! A rendering layer looks a pack up, resolves it and consumes the concrete
//! values, never alias syntax. [`resolve_or_default`] wraps that flow with
//! the fallback to the default theme:
//!
//! ```rust
//! use themekit::{ThemeRegistry, TokenResolver, resolve_or_default};
//!
//! let registry = ThemeRegistry::builtin().unwrap();
//! let selection = resolve_or_default(&registry, &TokenResolver::default(), "sunrise-sand").unwrap();
//! assert!(!selection.fell_back);
//! assert_eq!(selection.theme.id, "sunrise-sand");
//! ```

pub mod error;
pub mod log_init;

pub use packs;
pub use tokens;

pub use error::{Result, ThemekitError};
pub use packs::{RegistryError, RegistryHandle, ThemeRegistry};
pub use tokens::{ResolvedTheme, ThemePack, TokenResolver, ValidationError};

/// The theme a consumer should render, and how it was chosen.
#[derive(Debug, Clone)]
pub struct Selection {
    pub theme: ResolvedTheme,
    /// True when the requested theme could not be used and the default was resolved instead.
    pub fell_back: bool,
    /// Validation errors of the requested theme, if it was rejected.
    pub errors: Vec<ValidationError>,
}

/// Resolves the theme `id`, falling back to the registry default if it is
/// unknown or fails validation.
///
/// Errors only when the default theme itself cannot be resolved.
pub fn resolve_or_default(
    registry: &ThemeRegistry,
    resolver: &TokenResolver,
    id: &str,
) -> Result<Selection> {
    let errors = match registry.get(id) {
        Ok(pack) => match resolver.resolve(pack) {
            Ok(theme) => {
                return Ok(Selection {
                    theme,
                    fell_back: false,
                    errors: Vec::new(),
                });
            }
            Err(errors) => {
                for error in &errors {
                    log::warn!("Theme pack `{}`: {}", id, error);
                }
                errors
            }
        },
        Err(RegistryError::NotFound(_)) => {
            log::warn!("Theme pack `{}` not found", id);
            Vec::new()
        }
        Err(err) => return Err(err.into()),
    };

    let default = registry.default_pack()?;
    if default.id == id {
        return Err(ThemekitError::Validation {
            theme: id.to_string(),
            errors,
        });
    }

    log::warn!("Falling back to default theme `{}`", default.id);
    let theme = resolver
        .resolve(default)
        .map_err(|default_errors| ThemekitError::Validation {
            theme: default.id.clone(),
            errors: default_errors,
        })?;

    Ok(Selection {
        theme,
        fell_back: true,
        errors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with_broken(id: &str) -> ThemeRegistry {
        let builtin = ThemeRegistry::builtin().unwrap();
        let mut packs = builtin.all().to_vec();
        let mut broken = packs[1].clone();
        broken.id = id.to_string();
        broken.spacing_mut().unwrap().scale = Some([4, 8, 8, 18].into_iter().collect());
        packs.push(broken);
        ThemeRegistry::new(packs, builtin.default_id()).unwrap()
    }

    #[test]
    fn test_requested_theme_is_used() {
        let registry = ThemeRegistry::builtin().unwrap();
        let selection = resolve_or_default(&registry, &TokenResolver::default(), "emerald-forest").unwrap();
        assert!(!selection.fell_back);
        assert_eq!(selection.theme.id, "emerald-forest");
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let registry = ThemeRegistry::builtin().unwrap();
        let selection = resolve_or_default(&registry, &TokenResolver::default(), "nonexistent-id").unwrap();
        assert!(selection.fell_back);
        assert!(selection.errors.is_empty());
        assert_eq!(selection.theme.id, "abyssal-blue");
    }

    #[test]
    fn test_invalid_theme_falls_back_with_errors() {
        let registry = registry_with_broken("broken");
        let selection = resolve_or_default(&registry, &TokenResolver::default(), "broken").unwrap();
        assert!(selection.fell_back);
        assert_eq!(selection.errors.len(), 1);
        assert_eq!(selection.errors[0].path, "spacing.scale[2]");
        assert_eq!(selection.theme.id, "abyssal-blue");
    }

    #[test]
    fn test_invalid_default_is_an_error() {
        let mut packs = ThemeRegistry::builtin().unwrap().all().to_vec();
        packs[0].grid = None;
        let registry = ThemeRegistry::new(packs, "abyssal-blue").unwrap();

        let err = resolve_or_default(&registry, &TokenResolver::default(), "abyssal-blue").unwrap_err();
        assert!(matches!(err, ThemekitError::Validation { ref theme, .. } if theme == "abyssal-blue"));
        assert_eq!(
            err.to_string(),
            "Theme pack `abyssal-blue` failed validation:\nerror: grid: required field is missing"
        );
    }
}
