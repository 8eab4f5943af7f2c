//! Cloud provider CLI detection.

pub mod manager;
pub mod registry;
pub mod search_path;
pub mod types;

pub use manager::{CloudProviderManager, UNKNOWN};
pub use registry::ProviderRegistry;
pub use search_path::SearchPath;
pub use types::{CloudProvider, ProviderFactory, ProviderStatus};
