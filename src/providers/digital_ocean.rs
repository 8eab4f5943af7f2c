//! DigitalOcean (`doctl`).

use crate::detection::CloudProvider;

/// Detects the `doctl` CLI.
pub struct DigitalOceanProvider;

impl CloudProvider for DigitalOceanProvider {
    fn name(&self) -> &str {
        "Digital Ocean"
    }

    fn executable(&self) -> &str {
        "doctl"
    }

    fn label(&self) -> &str {
        "DigitalOcean Cloud Solution"
    }
}
