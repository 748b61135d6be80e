//! Copy primitive with metadata preservation

use crate::types::SyncError;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Copy `src` to `dest`, preserving permissions and modification time.
///
/// Uses the write-then-rename strategy: content is streamed into a
/// `.part` sibling, synced to disk, stamped with the source's metadata
/// and atomically renamed into place. A failed copy therefore never
/// leaves a truncated file at the destination path. File handles are
/// dropped on every exit path.
///
/// Returns the number of bytes copied.
pub fn copy_with_metadata(src: &Path, dest: &Path) -> Result<u64, SyncError> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }

    let part_path = part_path_for(dest);
    let result = write_through_part(src, &part_path, dest);
    if result.is_err() {
        // Best effort; the part file may never have been created
        let _ = fs::remove_file(&part_path);
    }
    result
}

fn write_through_part(src: &Path, part_path: &Path, dest: &Path) -> Result<u64, SyncError> {
    let mut src_file = File::open(src)?;
    let mut part_file = File::create(part_path)?;

    let mut buffer = vec![0u8; 128 * 1024];
    let mut total_bytes = 0u64;

    loop {
        let bytes_read = src_file.read(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        part_file.write_all(&buffer[0..bytes_read])?;
        total_bytes += bytes_read as u64;
    }

    part_file.sync_all()?;

    // Handle must be closed before rename (required on Windows)
    drop(part_file);

    let src_metadata = fs::metadata(src)?;
    fs::set_permissions(part_path, src_metadata.permissions())?;

    let mtime = src_metadata.modified()?;
    filetime::set_file_mtime(part_path, filetime::FileTime::from_system_time(mtime))?;

    // Atomic on POSIX systems (single syscall)
    fs::rename(part_path, dest)?;

    Ok(total_bytes)
}

/// `.part` sibling of `dest`, appended rather than substituted so
/// `a.txt` and `a.bin` in one directory get distinct temp names.
fn part_path_for(dest: &Path) -> PathBuf {
    let mut name = dest
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("dest"));
    name.push(".part");
    dest.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    #[test]
    fn test_copy_basic_content() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path();

        let src = root.join("source.txt");
        let content = b"Hello, treesync! This is a test file.";
        fs::write(&src, content).expect("Failed to write source");

        let dest = root.join("dest.txt");
        let bytes = copy_with_metadata(&src, &dest).expect("copy should succeed");

        assert_eq!(bytes, content.len() as u64);
        assert_eq!(fs::read(&dest).expect("read dest"), content);
    }

    #[test]
    fn test_copy_creates_parent_directories() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path();

        let src = root.join("source.txt");
        fs::write(&src, b"test content").expect("Failed to write source");

        let dest = root.join("a/b/c/dest.txt");
        copy_with_metadata(&src, &dest).expect("copy should create parents");

        assert!(dest.exists());
        assert_eq!(fs::read(&dest).expect("read dest"), b"test content");
    }

    #[test]
    fn test_copy_preserves_mtime() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path();

        let src = root.join("source.txt");
        fs::write(&src, b"test content").expect("Failed to write source");
        let mtime = SystemTime::now() - Duration::from_secs(3600);
        filetime::set_file_mtime(&src, filetime::FileTime::from_system_time(mtime))
            .expect("set mtime");

        let dest = root.join("dest.txt");
        copy_with_metadata(&src, &dest).expect("copy should succeed");

        let src_mtime = filetime::FileTime::from_last_modification_time(
            &fs::metadata(&src).expect("src metadata"),
        );
        let dest_mtime = filetime::FileTime::from_last_modification_time(
            &fs::metadata(&dest).expect("dest metadata"),
        );
        assert_eq!(src_mtime.seconds(), dest_mtime.seconds());
    }

    #[test]
    fn test_copy_overwrites_existing_destination() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path();

        let src = root.join("source.txt");
        fs::write(&src, b"new content").expect("Failed to write source");

        let dest = root.join("dest.txt");
        fs::write(&dest, b"old content that is longer").expect("Failed to write dest");

        copy_with_metadata(&src, &dest).expect("copy should succeed");
        assert_eq!(fs::read(&dest).expect("read dest"), b"new content");
    }

    #[test]
    fn test_copy_missing_source_fails_without_touching_dest() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path();

        let dest = root.join("dest.txt");
        let result = copy_with_metadata(&root.join("gone.txt"), &dest);

        assert!(result.is_err());
        assert!(!dest.exists());
    }

    #[test]
    fn test_failed_rename_removes_part_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path();

        let src = root.join("source.txt");
        fs::write(&src, b"content").expect("Failed to write source");

        // Destination path blocked by a directory: the final rename fails
        let dest = root.join("blocked.txt");
        fs::create_dir(&dest).expect("Failed to create blocking dir");

        let result = copy_with_metadata(&src, &dest);
        assert!(result.is_err());
        assert!(
            !root.join("blocked.txt.part").exists(),
            "part file must be cleaned up after a failed copy"
        );
    }

    #[test]
    fn test_part_names_do_not_collide_across_extensions() {
        assert_ne!(
            part_path_for(Path::new("/d/a.txt")),
            part_path_for(Path::new("/d/a.bin"))
        );
        assert_eq!(
            part_path_for(Path::new("/d/a.txt")),
            PathBuf::from("/d/a.txt.part")
        );
    }
}
