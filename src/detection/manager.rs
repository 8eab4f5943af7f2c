//! Runs providers in order and reports the first match.

use super::registry::ProviderRegistry;
use super::search_path::SearchPath;
use super::types::{ProviderFactory, ProviderStatus};

/// Result reported when no provider CLI is found.
pub const UNKNOWN: &str = "Unknown";

/// Probes a fixed sequence of providers against a search path.
pub struct CloudProviderManager {
    providers: Vec<ProviderFactory>,
    search_path: SearchPath,
}

impl CloudProviderManager {
    /// Use every provider in `registry`, in registry order.
    pub fn new(registry: &ProviderRegistry) -> Self {
        Self::with_providers(registry.all_providers())
    }

    /// Use an explicit provider sequence, bypassing any registry.
    ///
    /// An empty sequence probes nothing and always yields [`UNKNOWN`]; it does
    /// not fall back to a registry. Use [`CloudProviderManager::new`] for that.
    pub fn with_providers(providers: Vec<ProviderFactory>) -> Self {
        Self {
            providers,
            search_path: SearchPath::from_env(),
        }
    }

    /// Search `search_path` instead of the process `PATH`.
    pub fn with_search_path(mut self, search_path: SearchPath) -> Self {
        self.search_path = search_path;
        self
    }

    /// Label of the first provider whose CLI is installed, or [`UNKNOWN`].
    pub fn detect_cloud_provider(&self) -> String {
        for factory in &self.providers {
            let provider = factory();
            if let Some(label) = provider
                .detect_in(&self.search_path)
                .filter(|label| !label.is_empty())
            {
                return label;
            }
        }
        tracing::debug!(probed = self.providers.len(), "no provider CLI found");
        UNKNOWN.to_string()
    }

    /// Probe every provider and report each outcome, in order.
    pub fn report(&self) -> Vec<ProviderStatus> {
        self.providers
            .iter()
            .map(|factory| ProviderStatus::probe(factory().as_ref(), &self.search_path))
            .collect()
    }
}
