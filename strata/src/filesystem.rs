//! Filesystem collaborators.
//!
//! The locator only ever asks two things of the filesystem: whether an
//! absolute path exists, and a flat recursive listing of the files under a
//! directory. Both are behind the [`Filesystem`] trait so tests and dry
//! runs can swap the real disk for an in-memory index.

use std::collections::BTreeSet;
use std::path::Path;

use walkdir::WalkDir;

/// Filesystem queries required by the locator.
pub trait Filesystem {
    /// Whether `path` exists on this filesystem.
    fn exists(&self, path: &str) -> bool;

    /// All files under `dir`, recursively, as absolute paths.
    ///
    /// Implementations must return a deterministic (path-sorted) order;
    /// underlying OS ordering is not reliable.
    fn all_files(&self, dir: &str) -> Vec<String>;
}

/// The real filesystem.
///
/// Existence checks go through `std::fs`; listings walk the tree with
/// `walkdir` and are sorted by path.
///
/// # Examples
///
/// ```
/// use strata::{Filesystem, OsFilesystem};
///
/// let fs = OsFilesystem;
/// assert!(!fs.exists("/nonexistent/strata/path"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn exists(&self, path: &str) -> bool {
        Path::new(path).exists()
    }

    fn all_files(&self, dir: &str) -> Vec<String> {
        let mut files: Vec<String> = WalkDir::new(dir)
            .follow_links(true)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.path().to_string_lossy().replace('\\', "/"))
            .collect();

        files.sort();
        files
    }
}

/// An in-memory filesystem backed by a set of file paths.
///
/// A path "exists" when it is a registered file or a directory prefix of
/// one. Listings are naturally path-sorted. Useful for tests and for
/// resolving against a virtual tree without touching the disk.
///
/// # Examples
///
/// ```
/// use strata::{Filesystem, MemoryFilesystem};
///
/// let fs = MemoryFilesystem::new(["/base/d1/sub/x.txt"]);
/// assert!(fs.exists("/base/d1/sub/x.txt"));
/// assert!(fs.exists("/base/d1/sub"));
/// assert!(!fs.exists("/base/d2"));
/// assert_eq!(fs.all_files("/base/d1"), vec!["/base/d1/sub/x.txt"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    files: BTreeSet<String>,
}

impl MemoryFilesystem {
    /// Creates an in-memory filesystem holding the given file paths.
    pub fn new<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    /// Adds a file path to the index.
    pub fn add_file(&mut self, path: &str) {
        self.files.insert(path.to_string());
    }

    /// Number of files in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the index holds no files.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &str) -> bool {
        if self.files.contains(path) {
            return true;
        }

        // Directories exist implicitly when they contain a file
        let dir_prefix = format!("{}/", path.trim_end_matches('/'));
        self.files.iter().any(|file| file.starts_with(&dir_prefix))
    }

    fn all_files(&self, dir: &str) -> Vec<String> {
        let dir_prefix = format!("{}/", dir.trim_end_matches('/'));
        self.files
            .iter()
            .filter(|file| file.starts_with(&dir_prefix))
            .cloned()
            .collect()
    }
}
