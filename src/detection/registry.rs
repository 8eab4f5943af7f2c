//! Provider registry.
//!
//! The [`ProviderRegistry`] maps provider names to factories. Entries keep
//! their insertion order, which is also the order the manager probes them in.

use super::types::ProviderFactory;
use crate::providers;

/// Ordered table of known providers.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    entries: Vec<(String, ProviderFactory)>,
}

impl ProviderRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with every built-in provider.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for (name, factory) in providers::builtins() {
            registry.register(name, *factory);
        }
        registry
    }

    /// Register a provider. A name already present is overwritten in place.
    pub fn register(&mut self, name: &str, factory: ProviderFactory) {
        match self.entries.iter_mut().find(|(existing, _)| existing == name) {
            Some(entry) => {
                tracing::debug!(provider = name, "replacing registered provider");
                entry.1 = factory;
            }
            None => self.entries.push((name.to_string(), factory)),
        }
    }

    /// Get a provider factory by name.
    pub fn get(&self, name: &str) -> Option<ProviderFactory> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, factory)| *factory)
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|(name, _)| name.clone()).collect()
    }

    /// All factories, in registration order.
    pub fn all_providers(&self) -> Vec<ProviderFactory> {
        self.entries.iter().map(|(_, factory)| *factory).collect()
    }

    /// Number of registered providers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.names())
            .finish()
    }
}
