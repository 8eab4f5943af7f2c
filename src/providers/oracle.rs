//! Oracle Cloud Infrastructure. The CLI is installed as `oci`.

use crate::detection::CloudProvider;

/// Detects the `oci` CLI.
pub struct OracleProvider;

impl CloudProvider for OracleProvider {
    fn name(&self) -> &str {
        "Oracle"
    }

    fn executable(&self) -> &str {
        "oci"
    }

    fn label(&self) -> &str {
        "Oracle Cloud Solution"
    }
}
