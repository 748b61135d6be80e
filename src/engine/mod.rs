//! Sync orchestration
//!
//! Drives the walker, path mapper, staleness check and copy primitive
//! across all configured source trees, accumulating the run counters and
//! emitting [`SyncEvent`]s for the console collaborator.

mod copy;
pub mod decide;

pub use copy::copy_with_metadata;

use crate::config::SyncRequest;
use crate::paths::{PathMapper, PathNormalizer};
use crate::types::{CopyReason, FileOutcome, SyncError, SyncReport};
use crate::walker::{ExclusionMatcher, TreeWalker};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Events emitted while a run progresses.
///
/// Consumed by the console reporter; the functional contract is carried
/// by the returned [`SyncReport`], not by these.
#[derive(Debug)]
pub enum SyncEvent {
    /// Destination root resolved and created
    DestinationResolved { dest: PathBuf },
    /// Processing of one source tree started
    SourceStarted { source: PathBuf },
    /// One file copied successfully
    FileCopied {
        source: PathBuf,
        dest: PathBuf,
        reason: CopyReason,
    },
    /// A copy attempt or per-file check failed; the run continues
    CopyFailed {
        source: PathBuf,
        dest: PathBuf,
        error: String,
    },
    /// The walker hit an unreadable entry; the run continues
    TraversalWarning { detail: String },
    /// Run finished
    Completed { report: SyncReport },
}

/// Callback consuming engine events
pub type EventCallback<'a> = &'a dyn Fn(&SyncEvent);

/// One-way synchronization engine.
///
/// Single-threaded and synchronous: sources are processed strictly in
/// the order given, directories depth-first pre-order, every filesystem
/// operation inline.
pub struct SyncEngine {
    normalizer: PathNormalizer,
}

impl SyncEngine {
    /// Engine using the invoking user's home directory for `~` expansion
    pub fn new() -> Self {
        Self {
            normalizer: PathNormalizer::new(),
        }
    }

    /// Engine with an injected normalizer (test hook)
    pub fn with_normalizer(normalizer: PathNormalizer) -> Self {
        Self { normalizer }
    }

    /// Mirror every source tree in `request` into the destination root.
    ///
    /// Validation failures surface before any filesystem mutation.
    /// Per-file copy failures are contained: they are reported through
    /// `on_event` and the run continues with the next file. A failed
    /// attempt still counts toward `files_copied`, matching the
    /// attempted-copy accounting of the original tool.
    pub fn sync(
        &self,
        request: &SyncRequest,
        on_event: Option<EventCallback>,
    ) -> Result<SyncReport, SyncError> {
        request.validate(&self.normalizer)?;

        let start = Instant::now();
        let mut report = SyncReport::new();

        let dest_root = self.normalizer.normalize(&request.dest_dir)?;
        fs::create_dir_all(&dest_root)?;
        emit(
            on_event,
            SyncEvent::DestinationResolved {
                dest: dest_root.clone(),
            },
        );

        let matcher = ExclusionMatcher::new(request.excludes.iter().cloned());

        for source in &request.sources {
            let source_root = self.normalizer.normalize(source)?;
            emit(
                on_event,
                SyncEvent::SourceStarted {
                    source: source_root.clone(),
                },
            );
            self.sync_tree(&source_root, &dest_root, &matcher, &mut report, on_event)?;
        }

        report.elapsed = start.elapsed();
        emit(
            on_event,
            SyncEvent::Completed {
                report: report.clone(),
            },
        );
        Ok(report)
    }

    /// Walk one source tree, mirroring directories and files.
    fn sync_tree(
        &self,
        source_root: &Path,
        dest_root: &Path,
        matcher: &ExclusionMatcher,
        report: &mut SyncReport,
        on_event: Option<EventCallback>,
    ) -> Result<(), SyncError> {
        let walker = TreeWalker::new(matcher);

        for entry in walker.walk(source_root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    emit(
                        on_event,
                        SyncEvent::TraversalWarning {
                            detail: err.to_string(),
                        },
                    );
                    continue;
                }
            };

            let file_type = entry.file_type();
            if file_type.is_dir() {
                // Directory creation failures are fatal, unlike per-file
                // copy failures.
                let mapped = PathMapper::map_dir(source_root, entry.path(), dest_root);
                fs::create_dir_all(&mapped)?;
                continue;
            }

            // Regular files and symlinks that resolve to files; special
            // files (pipes, sockets, devices) are skipped.
            let is_file_like =
                file_type.is_file() || (file_type.is_symlink() && entry.path().is_file());
            if !is_file_like {
                continue;
            }

            let cur_dir = entry.path().parent().unwrap_or(source_root);
            let dest_dir = PathMapper::map_dir(source_root, cur_dir, dest_root);
            let dest_file = dest_dir.join(entry.file_name());

            report.record_checked();
            let outcome = sync_file(entry.path(), &dest_file);
            if outcome.counts_as_copied() {
                report.record_copied();
            }

            match outcome {
                FileOutcome::Copied { reason } => emit(
                    on_event,
                    SyncEvent::FileCopied {
                        source: entry.path().to_path_buf(),
                        dest: dest_file,
                        reason,
                    },
                ),
                FileOutcome::AttemptFailed { error, .. }
                | FileOutcome::CheckFailed { error } => emit(
                    on_event,
                    SyncEvent::CopyFailed {
                        source: entry.path().to_path_buf(),
                        dest: dest_file,
                        error: error.to_string(),
                    },
                ),
                FileOutcome::UpToDate => {}
            }
        }

        Ok(())
    }
}

impl Default for SyncEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Check one file and copy it if missing or stale.
fn sync_file(source_file: &Path, dest_file: &Path) -> FileOutcome {
    let decision = match decide::assess(source_file, dest_file) {
        Ok(decision) => decision,
        Err(err) => {
            return FileOutcome::CheckFailed { error: err.into() };
        }
    };

    let Some(reason) = decision.reason() else {
        return FileOutcome::UpToDate;
    };

    match copy::copy_with_metadata(source_file, dest_file) {
        Ok(_) => FileOutcome::Copied { reason },
        Err(error) => FileOutcome::AttemptFailed { reason, error },
    }
}

fn emit(on_event: Option<EventCallback>, event: SyncEvent) {
    if let Some(callback) = on_event {
        callback(&event);
    }
}

/// Convenience form mirroring the direct call shape: build a request and
/// run it with a default engine.
pub fn sync(
    sources: Vec<String>,
    dest_dir: String,
    excludes: Vec<String>,
) -> Result<SyncReport, SyncError> {
    SyncEngine::new().sync(&SyncRequest::new(sources, dest_dir, excludes), None)
}
