//! Microsoft Azure. The CLI is installed as `az`.

use crate::detection::CloudProvider;

/// Detects the `az` CLI.
pub struct AzureProvider;

impl CloudProvider for AzureProvider {
    fn name(&self) -> &str {
        "Azure"
    }

    fn executable(&self) -> &str {
        "az"
    }

    fn label(&self) -> &str {
        "Azure Cloud Solution"
    }
}
