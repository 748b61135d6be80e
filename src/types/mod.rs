//! Core type definitions for treesync

mod error;
mod outcome;
mod report;

pub use error::SyncError;
pub use outcome::{CopyDecision, CopyReason, FileOutcome};
pub use report::SyncReport;
