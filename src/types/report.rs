//! SyncReport - aggregate counters for one sync run

use std::time::Duration;

/// Counters accumulated over a full sync run.
///
/// Built incrementally by the engine and returned once the run completes;
/// never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Number of source files examined
    pub files_checked: u64,

    /// Number of files for which a copy was attempted
    pub files_copied: u64,

    /// Wall-clock duration of the run
    pub elapsed: Duration,
}

impl SyncReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one examined file
    pub fn record_checked(&mut self) {
        self.files_checked += 1;
    }

    /// Record one attempted copy
    pub fn record_copied(&mut self) {
        self.files_copied += 1;
    }
}
