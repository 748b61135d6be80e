//! Home expansion and lexical path normalization

use std::path::{Component, Path, PathBuf};

/// Resolves user-supplied paths to absolute, cleaned paths.
///
/// The home directory is an explicit field rather than ambient state so
/// tests can inject an arbitrary home. Normalization is lexical: `.` and
/// `..` segments are resolved without touching the filesystem, the path
/// is not required to exist and symlinks are not followed.
#[derive(Debug, Clone)]
pub struct PathNormalizer {
    home: Option<PathBuf>,
}

impl PathNormalizer {
    /// Normalizer using the invoking user's home directory
    pub fn new() -> Self {
        Self {
            home: dirs::home_dir(),
        }
    }

    /// Normalizer with an explicit home directory (test injection)
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
        }
    }

    /// Expand a leading `~` to the home directory.
    ///
    /// Paths that do not start with `~`, and any path when no home
    /// directory is known, are returned unchanged.
    pub fn expand_home(&self, path: &str) -> PathBuf {
        if let Some(home) = &self.home {
            if path == "~" {
                return home.clone();
            }
            if let Some(rest) = path.strip_prefix("~/") {
                return home.join(rest);
            }
        }
        PathBuf::from(path)
    }

    /// Expand `~`, anchor relative paths at the current working directory
    /// and resolve `.`/`..` segments lexically.
    pub fn normalize(&self, path: &str) -> std::io::Result<PathBuf> {
        let expanded = self.expand_home(path);
        let absolute = if expanded.is_absolute() {
            expanded
        } else {
            std::env::current_dir()?.join(expanded)
        };
        Ok(clean(&absolute))
    }
}

impl Default for PathNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve `.` and `..` components without consulting the filesystem.
fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => out.push(prefix.as_os_str()),
            Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                if !out.pop() && !out.has_root() {
                    out.push("..");
                }
            }
            Component::Normal(segment) => out.push(segment),
        }
    }
    out
}
