//! Staleness decision for a single destination file

use crate::types::CopyDecision;
use filetime::FileTime;
use std::fs;
use std::io;
use std::path::Path;

/// A destination must lag its source by strictly more than this to be
/// considered stale. Tolerates filesystem timestamp resolution
/// differences and clock skew between copy operations; a destination
/// that is newer, or at most one second older, stays as-is.
const STALENESS_THRESHOLD_NANOS: i128 = 1_000_000_000;

/// Decide whether `dest_file` must be (re)copied from `source_file`.
///
/// Pure metadata comparison, no content inspection:
/// - destination missing -> [`CopyDecision::Missing`]
/// - `source_mtime - dest_mtime > 1s` -> [`CopyDecision::Stale`]
/// - otherwise -> [`CopyDecision::UpToDate`]
pub fn assess(source_file: &Path, dest_file: &Path) -> io::Result<CopyDecision> {
    if !dest_file.exists() {
        return Ok(CopyDecision::Missing);
    }

    let source_mtime = FileTime::from_last_modification_time(&fs::metadata(source_file)?);
    let dest_mtime = FileTime::from_last_modification_time(&fs::metadata(dest_file)?);

    if lag_nanos(source_mtime, dest_mtime) > STALENESS_THRESHOLD_NANOS {
        Ok(CopyDecision::Stale)
    } else {
        Ok(CopyDecision::UpToDate)
    }
}

/// How far `dest` lags behind `source`, in nanoseconds (negative when the
/// destination is newer).
fn lag_nanos(source: FileTime, dest: FileTime) -> i128 {
    let seconds = i128::from(source.seconds()) - i128::from(dest.seconds());
    let nanos = i128::from(source.nanoseconds()) - i128::from(dest.nanoseconds());
    seconds * 1_000_000_000 + nanos
}
