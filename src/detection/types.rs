//! Provider trait and result types.

use std::path::PathBuf;

use serde::Serialize;

use super::search_path::SearchPath;

/// A cloud vendor whose CLI tool can be looked up on the search path.
pub trait CloudProvider {
    /// Registry key (e.g. "AWS").
    fn name(&self) -> &str;

    /// Executable the vendor ships (e.g. "aws").
    fn executable(&self) -> &str;

    /// Label reported when the executable is found.
    fn label(&self) -> &str;

    /// Look for the executable on `search_path`.
    fn detect_in(&self, search_path: &SearchPath) -> Option<String> {
        match search_path.resolve(self.executable()) {
            Some(path) => {
                tracing::debug!(
                    provider = self.name(),
                    path = %path.display(),
                    "found provider CLI"
                );
                Some(self.label().to_string())
            }
            None => {
                tracing::debug!(
                    provider = self.name(),
                    executable = self.executable(),
                    "provider CLI not on PATH"
                );
                None
            }
        }
    }

    /// Look for the executable on the process `PATH`.
    fn detect(&self) -> Option<String> {
        self.detect_in(&SearchPath::from_env())
    }
}

/// Constructs a fresh provider instance.
pub type ProviderFactory = fn() -> Box<dyn CloudProvider>;

/// Probe outcome for one provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderStatus {
    pub name: String,
    pub label: String,
    pub executable: String,
    /// Whether the provider's own detection reported a label.
    pub detected: bool,
    /// Where the executable resolved, if it did.
    pub path: Option<PathBuf>,
}

impl ProviderStatus {
    /// Probe `provider` against `search_path`.
    ///
    /// `detected` comes from [`CloudProvider::detect_in`], so the report agrees
    /// with the manager even for providers that override it; `path` is detail.
    pub fn probe(provider: &dyn CloudProvider, search_path: &SearchPath) -> Self {
        let detected = provider
            .detect_in(search_path)
            .is_some_and(|label| !label.is_empty());
        Self {
            name: provider.name().to_string(),
            label: provider.label().to_string(),
            executable: provider.executable().to_string(),
            detected,
            path: search_path.resolve(provider.executable()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct Fake;

    impl CloudProvider for Fake {
        fn name(&self) -> &str {
            "Fake"
        }
        fn executable(&self) -> &str {
            "fake-cloud-cli-12345"
        }
        fn label(&self) -> &str {
            "Fake Cloud Solution"
        }
    }

    #[test]
    fn detect_in_empty_path_is_absent() {
        assert_eq!(Fake.detect_in(&SearchPath::default()), None);
    }

    #[test]
    fn status_not_detected_without_executable() {
        let temp = TempDir::new().unwrap();
        let status = ProviderStatus::probe(&Fake, &SearchPath::from_dirs([temp.path()]));
        assert!(!status.detected);
        assert_eq!(status.name, "Fake");
        assert_eq!(status.label, "Fake Cloud Solution");
    }

    #[cfg(unix)]
    #[test]
    fn detect_in_returns_label_when_present() {
        use std::os::unix::fs::PermissionsExt;
        let temp = TempDir::new().unwrap();
        let exe = temp.path().join("fake-cloud-cli-12345");
        std::fs::write(&exe, "").unwrap();
        std::fs::set_permissions(&exe, std::fs::Permissions::from_mode(0o755)).unwrap();

        let path = SearchPath::from_dirs([temp.path()]);
        assert_eq!(Fake.detect_in(&path), Some("Fake Cloud Solution".to_string()));
        let status = ProviderStatus::probe(&Fake, &path);
        assert!(status.detected);
        assert_eq!(status.path, Some(exe));
    }

    #[test]
    fn status_serializes_to_json() {
        let status = ProviderStatus {
            name: "AWS".into(),
            label: "AWS Cloud Solution".into(),
            executable: "aws".into(),
            detected: false,
            path: None,
        };
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["name"], "AWS");
        assert_eq!(json["detected"], false);
        assert!(json["path"].is_null());
    }

    struct Always;

    impl CloudProvider for Always {
        fn name(&self) -> &str {
            "Always"
        }
        fn executable(&self) -> &str {
            "always-cloud-cli-12345"
        }
        fn label(&self) -> &str {
            "Always Cloud Solution"
        }
        fn detect_in(&self, _search_path: &SearchPath) -> Option<String> {
            Some(self.label().to_string())
        }
    }

    #[test]
    fn status_follows_overridden_detection() {
        let path = SearchPath::default();
        assert_eq!(Always.detect_in(&path).as_deref(), Some("Always Cloud Solution"));

        let status = ProviderStatus::probe(&Always, &path);
        assert!(status.detected);
        assert!(status.path.is_none());
    }
}
