//! Alibaba Cloud (`aliyun`).

use crate::detection::CloudProvider;

/// Detects the `aliyun` CLI.
pub struct AlibabaProvider;

impl CloudProvider for AlibabaProvider {
    fn name(&self) -> &str {
        "Alibaba"
    }

    fn executable(&self) -> &str {
        "aliyun"
    }

    fn label(&self) -> &str {
        "Alibaba Cloud Solution"
    }
}
