//! # treesync - One-Way Directory Tree Synchronization
//!
//! Mirrors one or more source trees into a destination tree, copying only
//! files that are missing or stale and pruning excluded subtrees.
//!
//! The core contract lives in [`engine::SyncEngine`]; configuration
//! loading, the CLI and console reporting are thin collaborators around it.

// Module declarations
pub mod commands;
pub mod config;
pub mod engine;
pub mod paths;
pub mod types;
pub mod ui;
pub mod walker;

// Re-export commonly used types
pub use config::SyncRequest;
pub use engine::{sync, SyncEngine, SyncEvent};
pub use types::{CopyDecision, CopyReason, FileOutcome, SyncError, SyncReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
