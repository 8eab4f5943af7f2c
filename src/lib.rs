//! cloud-detect - Find which cloud provider CLI is installed.
//!
//! Probes the executable search path for the CLIs shipped by the major cloud
//! vendors (`aws`, `az`, `gcloud`, ...) and reports the first one found.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`detection`] - Search path lookup, provider registry and manager
//! - [`error`] - Error types and result aliases
//! - [`providers`] - Built-in cloud providers
//!
//! # Example
//!
//! ```no_run
//! use cloud_detect::detection::{CloudProviderManager, ProviderRegistry};
//! use cloud_detect::providers;
//!
//! // Probe every built-in provider
//! let manager = CloudProviderManager::new(&ProviderRegistry::with_builtins());
//! println!("Cloud Provider: {}", manager.detect_cloud_provider());
//!
//! // Or inject an explicit order
//! let manager = CloudProviderManager::with_providers(vec![providers::aws, providers::azure]);
//! println!("Cloud Provider: {}", manager.detect_cloud_provider());
//! ```

pub mod cli;
pub mod detection;
pub mod error;
pub mod providers;

pub use error::{CloudDetectError, Result};
