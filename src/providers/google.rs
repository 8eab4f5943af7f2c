//! Google Cloud, via the Cloud SDK.

use crate::detection::CloudProvider;

/// Detects the `gcloud` CLI.
pub struct GoogleProvider;

impl CloudProvider for GoogleProvider {
    fn name(&self) -> &str {
        "Google"
    }

    fn executable(&self) -> &str {
        "gcloud"
    }

    fn label(&self) -> &str {
        "Google Cloud Solution"
    }
}
