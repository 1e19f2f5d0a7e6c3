//! # Packs - Theme Pack Registry
//!
//! Holds the available theme packs and the default selection.
//!
//! - [`ThemeRegistry::builtin`]: the three packs shipped with the crate
//! - [`ThemeRegistry::from_json`] / [`ThemeRegistry::from_path`]: a registry
//!   document `{ "defaultThemeId": "...", "themePacks": [...] }`
//! - [`RegistryHandle`]: lock-free snapshots with atomic republishing
//!
//! ```rust
//! use packs::ThemeRegistry;
//!
//! let registry = ThemeRegistry::builtin().unwrap();
//! assert_eq!(registry.default_pack().unwrap().id, "abyssal-blue");
//! assert!(registry.get("nonexistent-id").is_err());
//! ```

pub mod builtin;
pub mod handle;
pub mod registry;

pub use builtin::DEFAULT_THEME_ID;
pub use handle::RegistryHandle;
pub use registry::{RegistryError, Result, ThemeRegistry};
