//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::Parser;

/// cloud-detect - Find which cloud provider CLI is installed.
#[derive(Debug, Parser)]
#[command(name = "cloud-detect")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Only probe these providers, in this order (comma-separated registry names)
    #[arg(
        short,
        long = "provider",
        env = "CLOUD_DETECT_PROVIDERS",
        value_delimiter = ','
    )]
    pub providers: Vec<String>,

    /// Show every provider and where its CLI resolved
    #[arg(short, long)]
    pub all: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_no_args() {
        let cli = Cli::parse_from(["cloud-detect"]);
        assert!(!cli.all);
        assert!(!cli.json);
        assert!(!cli.debug);
    }

    #[test]
    fn provider_list_keeps_order() {
        let cli = Cli::parse_from(["cloud-detect", "--provider", "AWS,Azure", "-p", "Google"]);
        assert_eq!(cli.providers, vec!["AWS", "Azure", "Google"]);
    }

    #[test]
    fn parses_all_and_json() {
        let cli = Cli::parse_from(["cloud-detect", "--all", "--json"]);
        assert!(cli.all);
        assert!(cli.json);
    }
}
