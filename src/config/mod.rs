//! Configuration management
//!
//! A sync run is described by a small JSON document with three fields:
//!
//! ```json
//! {
//!   "sources": ["~/projects/alpha", "~/notes"],
//!   "dest_dir": "/mnt/backup",
//!   "excludes": [".git", "target"]
//! }
//! ```

use crate::paths::PathNormalizer;
use crate::types::SyncError;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;

/// Config document read when no explicit path is given
pub const DEFAULT_CONFIG_PATH: &str = "~/treesync_conf.json";

/// One sync invocation: ordered source trees, a destination root and
/// exclusion substrings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncRequest {
    /// Source directories, processed in order. May be empty (no-op run).
    pub sources: Vec<String>,

    /// Destination root; created if absent, but its parent must exist
    pub dest_dir: String,

    /// Substrings; any directory path containing one is pruned
    pub excludes: Vec<String>,
}

impl SyncRequest {
    pub fn new(sources: Vec<String>, dest_dir: String, excludes: Vec<String>) -> Self {
        Self {
            sources,
            dest_dir,
            excludes,
        }
    }

    /// Load a request from a JSON config file.
    ///
    /// Shape errors (a string where a list is expected, missing fields)
    /// surface as [`SyncError::Config`].
    pub fn load(path: &str, normalizer: &PathNormalizer) -> Result<Self, SyncError> {
        let conf_path = normalizer.normalize(path)?;
        let text = fs::read_to_string(&conf_path)?;
        let request: SyncRequest = serde_json::from_str(&text)?;
        Ok(request)
    }

    /// Fail fast before any filesystem mutation.
    ///
    /// Every source (home-expanded) must currently be a directory, and
    /// the *parent* of `dest_dir` must currently be a directory.
    /// `dest_dir` itself may not exist yet and will be created.
    pub fn validate(&self, normalizer: &PathNormalizer) -> Result<(), SyncError> {
        for source in &self.sources {
            let expanded = normalizer.expand_home(source);
            if !expanded.is_dir() {
                return Err(SyncError::InvalidPath { path: expanded });
            }
        }

        let dest = normalizer.expand_home(&self.dest_dir);
        if let Some(parent) = dest.parent() {
            if !parent.is_dir() {
                return Err(SyncError::InvalidPath { path: dest });
            }
        }

        Ok(())
    }
}

/// Command-line interface
#[derive(Parser, Debug)]
#[command(
    name = "treesync",
    version,
    about = "One-way directory tree synchronization"
)]
pub struct Cli {
    /// JSON config file (used when no --source is given)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Source directory to mirror (repeatable)
    #[arg(short, long = "source", value_name = "DIR")]
    pub sources: Vec<String>,

    /// Destination root directory
    #[arg(short, long = "dest", value_name = "DIR", requires = "sources")]
    pub dest: Option<String>,

    /// Exclusion substring; directories whose path contains it are
    /// skipped (repeatable)
    #[arg(short = 'x', long = "exclude", value_name = "PATTERN")]
    pub excludes: Vec<String>,
}
