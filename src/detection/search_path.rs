//! Executable search path resolution.
//!
//! A [`SearchPath`] is the ordered list of directories from `PATH`. Lookups
//! walk those directories directly instead of shelling out to `which`, whose
//! behavior differs between systems (and is sometimes a shell builtin).
//!
//! # Example
//!
//! ```no_run
//! use cloud_detect::detection::SearchPath;
//!
//! let path = SearchPath::from_env();
//! if let Some(aws) = path.resolve("aws") {
//!     println!("aws lives at {}", aws.display());
//! }
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Extensions tried on Windows when `PATHEXT` is unset.
#[cfg(windows)]
const DEFAULT_PATHEXT: &str = ".COM;.EXE;.BAT;.CMD";

/// Ordered directories searched for executables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
}

impl SearchPath {
    /// Build from the process `PATH`. An unset `PATH` gives an empty search path.
    pub fn from_env() -> Self {
        Self::from_path_var(std::env::var_os("PATH"))
    }

    /// Build from a raw `PATH`-style value.
    pub fn from_path_var(value: Option<OsString>) -> Self {
        let dirs = value
            .map(|path| {
                std::env::split_paths(&path)
                    .filter(|dir| !dir.as_os_str().is_empty())
                    .collect()
            })
            .unwrap_or_default();
        Self { dirs }
    }

    /// Build from an explicit list of directories.
    pub fn from_dirs<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }

    /// Directories in lookup order.
    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// True when there is nowhere to look, e.g. `PATH` is unset.
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// Resolve an executable name to the first matching file on the path.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() {
            return None;
        }
        for dir in &self.dirs {
            for candidate in candidates(dir, name) {
                tracing::trace!(candidate = %candidate.display(), "checking");
                if candidate.is_file() && is_executable(&candidate) {
                    return Some(candidate);
                }
            }
        }
        None
    }

    /// Whether `name` resolves anywhere on the path.
    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }
}

#[cfg(not(windows))]
fn candidates(dir: &Path, name: &str) -> Vec<PathBuf> {
    vec![dir.join(name)]
}

#[cfg(windows)]
fn candidates(dir: &Path, name: &str) -> Vec<PathBuf> {
    let pathext = std::env::var("PATHEXT").unwrap_or_else(|_| DEFAULT_PATHEXT.to_string());
    let mut out = vec![dir.join(name)];
    out.extend(
        pathext
            .split(';')
            .filter(|ext| !ext.is_empty())
            .map(|ext| dir.join(format!("{name}{ext}"))),
    );
    out
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}
