//! Per-file decisions and outcomes produced during a sync run

use super::SyncError;

/// Why a destination file needs (re)copying
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyReason {
    /// Destination file does not exist
    Missing,
    /// Destination file is more than one second older than the source
    Stale,
}

impl CopyReason {
    /// Human-readable label used in log lines
    pub fn label(&self) -> &'static str {
        match self {
            CopyReason::Missing => "missing",
            CopyReason::Stale => "stale",
        }
    }
}

/// Decision produced by the staleness check, before any copy is attempted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyDecision {
    /// Copy required: destination does not exist
    Missing,
    /// Copy required: destination mtime lags the source by more than 1s
    Stale,
    /// Destination is newer or at most 1s older than the source
    UpToDate,
}

impl CopyDecision {
    /// Whether this decision triggers a copy attempt
    pub fn requires_copy(&self) -> bool {
        !matches!(self, CopyDecision::UpToDate)
    }

    /// The copy reason, when one applies
    pub fn reason(&self) -> Option<CopyReason> {
        match self {
            CopyDecision::Missing => Some(CopyReason::Missing),
            CopyDecision::Stale => Some(CopyReason::Stale),
            CopyDecision::UpToDate => None,
        }
    }
}

/// Result of handling a single file, aggregated by the engine.
///
/// Copy failures are contained here rather than raised: a failed attempt
/// still advances the run to the next file.
#[derive(Debug)]
pub enum FileOutcome {
    /// Copy attempted and succeeded
    Copied { reason: CopyReason },
    /// Copy attempted and failed; the run continues. Attempted copies
    /// still count toward the copied total.
    AttemptFailed { reason: CopyReason, error: SyncError },
    /// Staleness check itself failed (e.g. the source vanished between
    /// listing and stat); the run continues
    CheckFailed { error: SyncError },
    /// No copy required
    UpToDate,
}

impl FileOutcome {
    /// Whether this outcome counts toward `files_copied`
    pub fn counts_as_copied(&self) -> bool {
        matches!(
            self,
            FileOutcome::Copied { .. } | FileOutcome::AttemptFailed { .. }
        )
    }
}
