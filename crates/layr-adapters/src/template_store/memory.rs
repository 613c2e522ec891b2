//! In-memory template store with built-in templates.

use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

use tracing::debug;

use layr_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{TemplateKey, TemplateSpec},
    error::LayrResult,
};

use crate::builtin_templates;

/// Thread-safe in-memory template store.
///
/// Clones share the same table, so overriding a template through one handle
/// is visible to a service holding another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<HashMap<TemplateKey, TemplateSpec>>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with built-in templates loaded.
    pub fn with_builtin() -> Self {
        let store = Self::new();
        store.load_builtin();
        store
    }

    /// Load built-in templates, replacing any entry with the same key.
    pub fn load_builtin(&self) {
        let templates = builtin_templates::all_templates();
        debug!(count = templates.len(), "loading built-in templates");
        for template in templates {
            self.insert(template);
        }
    }

    /// Register a template, replacing any existing body for its key.
    pub fn insert(&self, template: TemplateSpec) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(template.key(), template);
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TemplateStore for InMemoryStore {
    fn get(&self, key: TemplateKey) -> LayrResult<TemplateSpec> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);

        inner.get(&key).cloned().ok_or_else(|| {
            ApplicationError::TemplateNotFound {
                key: key.to_string(),
            }
            .into()
        })
    }
}
