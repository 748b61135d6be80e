//! Sync command wiring
//!
//! Two thin entry forms around the engine: a config-driven runner that
//! loads the JSON document, and a direct form taking literal arguments.

use crate::config::{Cli, DEFAULT_CONFIG_PATH, SyncRequest};
use crate::engine::{SyncEngine, SyncEvent};
use crate::paths::PathNormalizer;
use crate::types::{SyncError, SyncReport};
use crate::ui::Reporter;

/// Dispatch a parsed command line.
pub fn run(cli: Cli) -> Result<SyncReport, SyncError> {
    if cli.sources.is_empty() {
        let config_path = cli.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
        run_with_config(config_path)
    } else {
        let dest = cli.dest.ok_or_else(|| {
            SyncError::Config("--dest is required when --source is given".to_string())
        })?;
        run_direct(cli.sources, dest, cli.excludes)
    }
}

/// Load a request from a JSON config file and run it.
pub fn run_with_config(config_path: &str) -> Result<SyncReport, SyncError> {
    let normalizer = PathNormalizer::new();
    let request = SyncRequest::load(config_path, &normalizer)?;
    execute(request)
}

/// Run with literal arguments, bypassing the config file.
pub fn run_direct(
    sources: Vec<String>,
    dest_dir: String,
    excludes: Vec<String>,
) -> Result<SyncReport, SyncError> {
    execute(SyncRequest::new(sources, dest_dir, excludes))
}

fn execute(request: SyncRequest) -> Result<SyncReport, SyncError> {
    let reporter = Reporter::new();
    let on_event = |event: &SyncEvent| reporter.handle(event);
    SyncEngine::new().sync(&request, Some(&on_event))
}
