//! The packs shipped with the crate.

use crate::registry::{Result, ThemeRegistry};
use tokens::ThemePack;

pub const DEFAULT_THEME_ID: &str = "abyssal-blue";

const BUILTIN_PACKS: [(&str, &str); 3] = [
    ("abyssal-blue", include_str!("../themes/abyssal-blue.json")),
    ("sunrise-sand", include_str!("../themes/sunrise-sand.json")),
    ("emerald-forest", include_str!("../themes/emerald-forest.json")),
];

impl ThemeRegistry {
    /// Registry of the built-in packs, with `abyssal-blue` as the default.
    pub fn builtin() -> Result<Self> {
        let packs = BUILTIN_PACKS
            .iter()
            .map(|(id, json)| {
                log::trace!("Loading built-in theme pack `{}`", id);
                serde_json::from_str::<ThemePack>(json)
            })
            .collect::<serde_json::Result<Vec<_>>>()?;
        Self::new(packs, DEFAULT_THEME_ID)
    }
}
