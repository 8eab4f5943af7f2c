//! Built-in cloud providers.
//!
//! Each provider lives in its own module. [`builtins`] is the list the
//! default registry is assembled from.

pub mod alibaba;
pub mod aws;
pub mod azure;
pub mod digital_ocean;
pub mod google;
pub mod ibm;
pub mod oracle;

pub use alibaba::AlibabaProvider;
pub use aws::AwsProvider;
pub use azure::AzureProvider;
pub use digital_ocean::DigitalOceanProvider;
pub use google::GoogleProvider;
pub use ibm::IbmProvider;
pub use oracle::OracleProvider;

use crate::detection::{CloudProvider, ProviderFactory};

const BUILTINS: &[(&str, ProviderFactory)] = &[
    ("Alibaba", alibaba),
    ("AWS", aws),
    ("Azure", azure),
    ("Digital Ocean", digital_ocean),
    ("Google", google),
    ("IBM", ibm),
    ("Oracle", oracle),
];

/// Built-in providers as (registry name, factory), in registration order.
pub fn builtins() -> &'static [(&'static str, ProviderFactory)] {
    BUILTINS
}

/// Factory for [`AlibabaProvider`].
pub fn alibaba() -> Box<dyn CloudProvider> {
    Box::new(AlibabaProvider)
}

/// Factory for [`AwsProvider`].
pub fn aws() -> Box<dyn CloudProvider> {
    Box::new(AwsProvider)
}

/// Factory for [`AzureProvider`].
pub fn azure() -> Box<dyn CloudProvider> {
    Box::new(AzureProvider)
}

/// Factory for [`DigitalOceanProvider`].
pub fn digital_ocean() -> Box<dyn CloudProvider> {
    Box::new(DigitalOceanProvider)
}

/// Factory for [`GoogleProvider`].
pub fn google() -> Box<dyn CloudProvider> {
    Box::new(GoogleProvider)
}

/// Factory for [`IbmProvider`].
pub fn ibm() -> Box<dyn CloudProvider> {
    Box::new(IbmProvider)
}

/// Factory for [`OracleProvider`].
pub fn oracle() -> Box<dyn CloudProvider> {
    Box::new(OracleProvider)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::SearchPath;
    use tempfile::TempDir;

    const TABLE: &[(&str, &str, &str)] = &[
        ("Alibaba", "aliyun", "Alibaba Cloud Solution"),
        ("AWS", "aws", "AWS Cloud Solution"),
        ("Azure", "az", "Azure Cloud Solution"),
        ("Digital Ocean", "doctl", "DigitalOcean Cloud Solution"),
        ("Google", "gcloud", "Google Cloud Solution"),
        ("IBM", "ibmcloud", "IBM Cloud Solution"),
        ("Oracle", "oci", "Oracle Cloud Solution"),
    ];

    #[test]
    fn builtins_match_vendor_table() {
        let builtins = builtins();
        assert_eq!(builtins.len(), TABLE.len());
        for ((key, factory), (name, exe, label)) in builtins.iter().zip(TABLE) {
            let provider = factory();
            assert_eq!(key, name);
            assert_eq!(provider.name(), *name);
            assert_eq!(provider.executable(), *exe);
            assert_eq!(provider.label(), *label);
        }
    }

    #[test]
    fn every_builtin_absent_on_empty_path() {
        let temp = TempDir::new().unwrap();
        let path = SearchPath::from_dirs([temp.path()]);
        for (name, factory) in builtins() {
            assert_eq!(factory().detect_in(&path), None, "{name} detected");
        }
    }

    #[cfg(unix)]
    #[test]
    fn every_builtin_found_when_installed() {
        use std::os::unix::fs::PermissionsExt;
        let temp = TempDir::new().unwrap();
        for (_, exe, _) in TABLE {
            let file = temp.path().join(exe);
            std::fs::write(&file, "").unwrap();
            std::fs::set_permissions(&file, std::fs::Permissions::from_mode(0o755)).unwrap();
        }

        let path = SearchPath::from_dirs([temp.path()]);
        for (name, factory) in builtins() {
            let provider = factory();
            assert_eq!(
                provider.detect_in(&path).as_deref(),
                Some(provider.label()),
                "{name} not detected"
            );
        }
    }
}
