//! Hot-reloadable registry access.
//!
//! A [`RegistryHandle`] holds the current [`ThemeRegistry`] behind an
//! [`arc_swap::ArcSwap`]. Readers take a snapshot without locking; a reload
//! builds a fresh registry and publishes it in one atomic swap. Published
//! registries are never mutated, so a snapshot stays valid for as long as
//! the reader holds it.

use crate::registry::ThemeRegistry;
use arc_swap::ArcSwap;
use std::sync::Arc;

pub struct RegistryHandle {
    current: ArcSwap<ThemeRegistry>,
}

impl RegistryHandle {
    pub fn new(registry: ThemeRegistry) -> Self {
        Self {
            current: ArcSwap::from_pointee(registry),
        }
    }

    /// The registry as of now.
    pub fn snapshot(&self) -> Arc<ThemeRegistry> {
        self.current.load_full()
    }

    /// Replaces the registry seen by later snapshots, returning the previous one.
    pub fn publish(&self, registry: ThemeRegistry) -> Arc<ThemeRegistry> {
        log::debug!(
            "Publishing theme registry: {} packs, default `{}`",
            registry.len(),
            registry.default_id()
        );
        self.current.swap(Arc::new(registry))
    }
}

impl From<ThemeRegistry> for RegistryHandle {
    fn from(registry: ThemeRegistry) -> Self {
        Self::new(registry)
    }
}

impl std::fmt::Debug for RegistryHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryHandle")
            .field("current", &self.current.load().default_id())
            .finish()
    }
}
