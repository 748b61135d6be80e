//! Directory traversal with exclusion pruning

use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Decides whether a directory path is excluded from traversal.
///
/// Matching is plain substring containment against the full path string,
/// not segment or glob matching: excluding `.git` also matches
/// `/a/.github/x`. Deliberately coarse; kept behind this type so a
/// stricter matcher can replace it without touching the walker.
#[derive(Debug, Clone, Default)]
pub struct ExclusionMatcher {
    patterns: Vec<String>,
}

impl ExclusionMatcher {
    /// Build a matcher from exclusion substrings
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// True if any exclusion string occurs anywhere within `path`
    pub fn is_excluded(&self, path: &Path) -> bool {
        let text = path.to_string_lossy();
        self.patterns.iter().any(|pattern| text.contains(pattern))
    }
}

/// Depth-first, pre-order traversal of a source tree.
///
/// Excluded directories are pruned: neither their files nor their
/// subdirectories are yielded. Parent directories are always yielded
/// before their contents; sibling order is filesystem-dependent but
/// stable within one traversal. Symlinks are not followed.
pub struct TreeWalker<'a> {
    matcher: &'a ExclusionMatcher,
}

impl<'a> TreeWalker<'a> {
    pub fn new(matcher: &'a ExclusionMatcher) -> Self {
        Self { matcher }
    }

    /// Walk `root`, yielding directories and files that survive pruning.
    ///
    /// Traversal errors (permission denied, vanished entries) are yielded
    /// per entry so the caller can log and continue.
    pub fn walk(&self, root: &Path) -> impl Iterator<Item = walkdir::Result<DirEntry>> + 'a {
        let matcher = self.matcher;
        WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(move |entry| {
                !(entry.file_type().is_dir() && matcher.is_excluded(entry.path()))
            })
    }
}
