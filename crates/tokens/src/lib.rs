//! # Tokens - Design Token Resolution
//!
//! Validation and alias resolution for theme packs: named bundles of color
//! palette, typography, spacing scale, radii, shadow levels, grid parameters
//! and per-component style tokens.
//!
//! Component fields may hold literal values or alias tokens that refer to
//! other parts of the pack. Resolution replaces every alias with a concrete
//! value, so a rendering layer never needs to know alias syntax.
//!
//! ## Quick Start
//!
//! ```rust
//! use tokens::{TokenResolver, ThemePack};
//!
//! let json = r##"{
//!     "id": "mono",
//!     "name": "Mono",
//!     "palette": {
//!         "background": "#101010", "surface": "#202020", "paper": "#ffffff",
//!         "textPrimary": "#111111", "textSecondary": "#555555",
//!         "accent": "#3366cc", "accentStrong": "#0c3250"
//!     },
//!     "typography": {
//!         "heading": "'Inter', sans-serif", "body": "Georgia, serif",
//!         "weightHeading": 700, "weightBody": 400
//!     },
//!     "spacing": { "scale": [4, 8, 12, 16], "density": "standard" },
//!     "radii": { "none": "0px", "sm": "4px", "md": "8px", "lg": "12px" },
//!     "shadows": ["0 1px 2px rgba(0, 0, 0, 0.12)"],
//!     "grid": { "columns": 12, "columnGap": 16, "rowUnit": 8 },
//!     "components": {
//!         "block": { "radius": "md", "darkFillText": "onAccentStrong" }
//!     }
//! }"##;
//!
//! let pack: ThemePack = serde_json::from_str(json).unwrap();
//! let theme = TokenResolver::default().resolve(&pack).unwrap();
//!
//! let block = theme.component("block").unwrap();
//! assert_eq!(block.length("radius").unwrap().to_string(), "8px");
//! assert_eq!(block.color("darkFillText").unwrap().to_string(), "#ffffff");
//! ```
//!
//! ## Alias Tokens
//!
//! - Palette roles: `accentStrong`
//! - Derived colors: `paper-muted`, `onAccentStrong`, `auto`
//! - Scale lookups: radii keys (`md`), spacing steps (`xs`..`xxl`), shadow
//!   levels (`sm`..`xl` or an index)
//!
//! ## Modules
//!
//! - [`types`]: Authored packs, resolved themes, colors and lengths
//! - [`parser`]: Value parsing and token classification
//! - [`contrast`]: Readable-foreground and derived-color rules
//! - [`validate`]: Structural validation
//! - [`resolver`]: Alias resolution
//! - [`error`]: Validation issue taxonomy

pub mod contrast;
pub mod error;
pub mod parser;
pub mod resolver;
pub mod types;
pub mod validate;

pub use contrast::{ContrastEngine, InvalidInputError};
pub use error::{IssueClass, Severity, ValidationError, ValidationErrorKind, format_report};
pub use resolver::{TokenResolver, resolve};
pub use types::{Color, ResolvedTheme, ThemePack};
pub use validate::{ValidationReporter, validate};
