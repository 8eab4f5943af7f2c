//! Amazon Web Services.

use crate::detection::CloudProvider;

/// Detects the `aws` CLI.
pub struct AwsProvider;

impl CloudProvider for AwsProvider {
    fn name(&self) -> &str {
        "AWS"
    }

    fn executable(&self) -> &str {
        "aws"
    }

    fn label(&self) -> &str {
        "AWS Cloud Solution"
    }
}
