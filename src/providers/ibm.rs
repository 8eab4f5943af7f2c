//! IBM Cloud.

use crate::detection::CloudProvider;

/// Detects the `ibmcloud` CLI.
pub struct IbmProvider;

impl CloudProvider for IbmProvider {
    fn name(&self) -> &str {
        "IBM"
    }

    fn executable(&self) -> &str {
        "ibmcloud"
    }

    fn label(&self) -> &str {
        "IBM Cloud Solution"
    }
}
