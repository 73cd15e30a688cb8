//! Selected-component store. A single value, no transition rules.

use crate::catalog::{self, ComponentInfo, ComponentKey};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<ComponentKey>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `key`. Returns false if it was already selected.
    pub fn select(&mut self, key: ComponentKey) -> bool {
        if self.current == Some(key) {
            return false;
        }
        tracing::info!(component = %key, "component selected");
        self.current = Some(key);
        true
    }

    pub fn clear(&mut self) {
        if self.current.take().is_some() {
            tracing::info!("selection cleared");
        }
    }

    pub fn current(&self) -> Option<ComponentKey> {
        self.current
    }

    pub fn is_selected(&self, key: ComponentKey) -> bool {
        self.current == Some(key)
    }

    /// Catalog entry for the current selection.
    pub fn info(&self) -> Option<&'static ComponentInfo> {
        self.current.map(catalog::lookup)
    }
}
