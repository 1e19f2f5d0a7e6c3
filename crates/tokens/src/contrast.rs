//! Contrast-aware color derivation.
//!
//! [`ContrastEngine`] holds the fixed rules used to derive colors that a
//! theme pack only names symbolically:
//!
//! | Alias | Rule |
//! |-------|------|
//! | `<role>-muted` | role blended toward `surface` by [`DEFAULT_MUTED_RATIO`] |
//! | `on<Role>` | whichever of the light/dark pair contrasts more with the role |
//! | `auto` (border) | background hue at [`DEFAULT_BORDER_ALPHA`], or the readable foreground at that alpha when the hue would vanish |
//!
//! With the default pure white / pure black pair, the chosen foreground
//! always reaches at least [`MIN_TEXT_CONTRAST`] against any opaque
//! background.

use crate::error::ValidationErrorKind;
use crate::types::color::{Color, ColorParseError};
use thiserror::Error;

/// Weight of `surface` when deriving a muted color.
pub const DEFAULT_MUTED_RATIO: f32 = 0.15;

/// Opacity of an `auto` border.
pub const DEFAULT_BORDER_ALPHA: f32 = 0.2;

/// An `auto` border whose composite contrast falls below this uses the
/// readable foreground instead of the background hue.
pub const DEFAULT_MIN_BORDER_CONTRAST: f64 = 1.25;

/// WCAG AA contrast for body text.
pub const MIN_TEXT_CONTRAST: f64 = 4.5;

/// A color handed to the engine could not be parsed.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid color input `{input}`: {reason}")]
pub struct InvalidInputError {
    pub input: String,
    pub reason: String,
}

impl InvalidInputError {
    fn new(input: &str, err: ColorParseError) -> Self {
        Self {
            input: input.to_string(),
            reason: err.message,
        }
    }
}

impl From<InvalidInputError> for ValidationErrorKind {
    fn from(err: InvalidInputError) -> Self {
        ValidationErrorKind::InvalidColor(err.input)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContrastEngine {
    light: Color,
    dark: Color,
    muted_ratio: f32,
    border_alpha: f32,
    min_border_contrast: f64,
}

impl Default for ContrastEngine {
    fn default() -> Self {
        Self {
            light: Color::white(),
            dark: Color::black(),
            muted_ratio: DEFAULT_MUTED_RATIO,
            border_alpha: DEFAULT_BORDER_ALPHA,
            min_border_contrast: DEFAULT_MIN_BORDER_CONTRAST,
        }
    }
}

impl ContrastEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the light foreground candidate.
    pub fn with_light(mut self, color: Color) -> Self {
        self.light = color;
        self
    }

    /// Builder method to set the dark foreground candidate.
    pub fn with_dark(mut self, color: Color) -> Self {
        self.dark = color;
        self
    }

    /// Builder method to set the `-muted` blend ratio (clamped to `[0, 1]`).
    pub fn with_muted_ratio(mut self, ratio: f32) -> Self {
        self.muted_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Builder method to set the `auto` border opacity (clamped to `[0, 1]`).
    pub fn with_border_alpha(mut self, alpha: f32) -> Self {
        self.border_alpha = alpha.clamp(0.0, 1.0);
        self
    }

    pub fn with_min_border_contrast(mut self, ratio: f64) -> Self {
        self.min_border_contrast = ratio;
        self
    }

    pub fn light(&self) -> Color {
        self.light
    }

    pub fn dark(&self) -> Color {
        self.dark
    }

    pub fn muted_ratio(&self) -> f32 {
        self.muted_ratio
    }

    pub fn border_alpha(&self) -> f32 {
        self.border_alpha
    }

    /// Returns the light or dark candidate, whichever contrasts more with
    /// `background`. Ties go to the light candidate.
    pub fn contrasting_foreground(&self, background: Color) -> Color {
        let background = background.with_alpha(1.0);
        let light = self.light.contrast_ratio(&background);
        let dark = self.dark.contrast_ratio(&background);
        if dark > light { self.dark } else { self.light }
    }

    /// Parses two `#rrggbb` colors and blends them; `ratio` is the weight of `b`.
    pub fn blend(&self, a: &str, b: &str, ratio: f32) -> Result<Color, InvalidInputError> {
        let a_color = Color::from_hex(a).map_err(|err| InvalidInputError::new(a, err))?;
        let b_color = Color::from_hex(b).map_err(|err| InvalidInputError::new(b, err))?;
        Ok(self.blend_colors(a_color, b_color, ratio))
    }

    pub fn blend_colors(&self, a: Color, b: Color, ratio: f32) -> Color {
        a.blend(&b, ratio)
    }

    pub fn with_alpha(&self, color: Color, alpha: f32) -> Color {
        color.with_alpha(alpha)
    }

    /// `<role>-muted`: `base` blended toward `surface`.
    pub fn muted(&self, base: Color, surface: Color) -> Color {
        self.blend_colors(base, surface, self.muted_ratio)
    }

    /// `auto` border drawn on `surface`, tinted with `hue`.
    pub fn auto_border(&self, hue: Color, surface: Color) -> Color {
        let surface = surface.with_alpha(1.0);
        let tinted = hue.with_alpha(self.border_alpha);
        let composite = tinted.composite_over(&surface);
        if composite.contrast_ratio(&surface) >= self.min_border_contrast {
            tinted
        } else {
            log::trace!(
                "auto border hue {} vanishes on {}, using readable foreground",
                hue,
                surface
            );
            self.contrasting_foreground(surface)
                .with_alpha(self.border_alpha)
        }
    }
}

/// WCAG contrast ratio between two colors.
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    a.contrast_ratio(&b)
}

pub fn relative_luminance(color: Color) -> f64 {
    color.relative_luminance()
}
