//! Source-to-destination directory mapping

use std::path::{Path, PathBuf};

/// Maps directories discovered under a source root to their destination
/// counterparts.
///
/// Each source tree is mirrored under `dest_root/<basename of source>`,
/// preserving the source's internal structure beneath that name. Two
/// sources sharing a basename therefore merge into the same destination
/// subtree, later sources overwriting earlier ones.
pub struct PathMapper;

impl PathMapper {
    /// Compute the destination directory for `cur_dir`, a descendant of
    /// (or equal to) `source_root`.
    ///
    /// A source root with no final component (e.g. `/`) contributes no
    /// intermediate name; its contents land directly under `dest_root`.
    pub fn map_dir(source_root: &Path, cur_dir: &Path, dest_root: &Path) -> PathBuf {
        let mut dest = dest_root.to_path_buf();
        if let Some(name) = source_root.file_name() {
            dest.push(name);
        }
        let relative = cur_dir.strip_prefix(source_root).unwrap_or(Path::new(""));
        if !relative.as_os_str().is_empty() {
            dest.push(relative);
        }
        dest
    }
}
