//! The detection command.
//!
//! Resolves the requested providers against the registry, runs the manager
//! and writes the result as text or JSON.

use std::io::Write;

use serde::Serialize;

use crate::cli::args::Cli;
use crate::detection::{CloudProviderManager, ProviderFactory, ProviderRegistry, SearchPath};
use crate::error::{CloudDetectError, Result};

#[derive(Serialize)]
struct Detected<'a> {
    provider: &'a str,
}

/// Runs one detection pass.
pub struct DetectCommand {
    registry: ProviderRegistry,
    providers: Vec<String>,
    all: bool,
    json: bool,
    search_path: SearchPath,
}

impl DetectCommand {
    /// Create the command from parsed arguments, probing the process `PATH`.
    pub fn new(registry: ProviderRegistry, cli: &Cli) -> Self {
        Self {
            registry,
            providers: requested_names(&cli.providers),
            all: cli.all,
            json: cli.json,
            search_path: SearchPath::from_env(),
        }
    }

    /// Search `search_path` instead of the process `PATH`.
    pub fn with_search_path(mut self, search_path: SearchPath) -> Self {
        self.search_path = search_path;
        self
    }

    /// Factories to probe: the named ones in the given order, or the whole registry
    /// when no names were given.
    fn resolve_providers(&self) -> Result<Vec<ProviderFactory>> {
        if self.providers.is_empty() {
            return Ok(self.registry.all_providers());
        }
        self.providers
            .iter()
            .map(|name| {
                self.registry
                    .get(name)
                    .ok_or_else(|| CloudDetectError::UnknownProvider {
                        name: name.clone(),
                        known: self.registry.names(),
                    })
            })
            .collect()
    }

    /// Execute the command, writing its output to `out`.
    pub fn execute(&self, out: &mut dyn Write) -> Result<()> {
        let manager = CloudProviderManager::with_providers(self.resolve_providers()?)
            .with_search_path(self.search_path.clone());
        tracing::debug!(dirs = self.search_path.dirs().len(), "probing search path");

        if self.all {
            let report = manager.report();
            if self.json {
                serde_json::to_writer_pretty(&mut *out, &report)?;
                writeln!(out)?;
            } else {
                for status in &report {
                    let location = match (&status.path, status.detected) {
                        (Some(path), true) => path.display().to_string(),
                        (None, true) => "found".to_string(),
                        (_, false) => "not found".to_string(),
                    };
                    writeln!(
                        out,
                        "{:<14} {:<9} {}",
                        status.name, status.executable, location
                    )?;
                }
            }
        } else {
            let label = manager.detect_cloud_provider();
            if self.json {
                serde_json::to_writer(&mut *out, &Detected { provider: &label })?;
                writeln!(out)?;
            } else {
                writeln!(out, "Cloud Provider: {}", label)?;
            }
        }

        Ok(())
    }
}

/// Trim requested names and drop blanks; an all-blank list means "every provider".
fn requested_names(raw: &[String]) -> Vec<String> {
    raw.iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
