use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tokens::ThemePack;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Theme pack `{0}` not found")]
    NotFound(String),

    #[error("Invalid registry configuration: {0}")]
    Config(String),

    #[error("Invalid registry document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not read registry: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RegistryError>;

/// A registry document: `{ "defaultThemeId": "...", "themePacks": [...] }`.
///
/// Packs stay raw JSON until each one is read on its own.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegistryDocument {
    default_theme_id: String,
    theme_packs: Vec<serde_json::Value>,
}

/// An ordered, immutable set of theme packs with a default selection.
///
/// Construction checks that the registry is non-empty, that ids are unique
/// and that the default id names one of the packs; after that, lookups of the
/// default never fail.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeRegistry {
    packs: Vec<ThemePack>,
    default_id: String,
}

impl ThemeRegistry {
    pub fn new(packs: Vec<ThemePack>, default_id: impl Into<String>) -> Result<Self> {
        let default_id = default_id.into();

        if packs.is_empty() {
            return Err(RegistryError::Config("registry has no theme packs".into()));
        }

        let mut seen = HashSet::new();
        for pack in &packs {
            if !seen.insert(pack.id.as_str()) {
                return Err(RegistryError::Config(format!(
                    "duplicate theme pack id `{}`",
                    pack.id
                )));
            }
        }

        if !seen.contains(default_id.as_str()) {
            return Err(RegistryError::Config(format!(
                "default theme `{}` is not in the registry",
                default_id
            )));
        }

        log::debug!(
            "Theme registry ready: {} packs, default `{}`",
            packs.len(),
            default_id
        );
        Ok(Self { packs, default_id })
    }

    /// Parses a registry document.
    ///
    /// Mistyped fields inside a pack are kept for validation to report. A
    /// pack that cannot be read at all (not an object, or a non-string `id`)
    /// is skipped with a warning.
    pub fn from_json(json: &str) -> Result<Self> {
        let document: RegistryDocument = serde_json::from_str(json)?;
        let packs = document
            .theme_packs
            .into_iter()
            .enumerate()
            .filter_map(|(i, raw)| match serde_json::from_value::<ThemePack>(raw) {
                Ok(pack) => Some(pack),
                Err(err) => {
                    log::warn!("Skipping theme pack #{}: {}", i, err);
                    None
                }
            })
            .collect();
        Self::new(packs, document.default_theme_id)
    }

    /// Reads and parses a registry document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading theme registry from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// All packs, in registration order.
    pub fn all(&self) -> &[ThemePack] {
        &self.packs
    }

    pub fn get(&self, id: &str) -> Result<&ThemePack> {
        self.packs
            .iter()
            .find(|pack| pack.id == id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    pub fn default_id(&self) -> &str {
        &self.default_id
    }

    pub fn default_pack(&self) -> Result<&ThemePack> {
        self.get(&self.default_id)
            .map_err(|_| RegistryError::Config(format!("default theme `{}` is not in the registry", self.default_id)))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.packs.iter().map(|pack| pack.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.packs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }
}
