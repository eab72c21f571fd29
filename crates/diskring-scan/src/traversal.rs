//! Directory listing primitives used by the aggregator.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use compact_str::CompactString;

/// Type of a listed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Directory to descend into.
    Directory,
    /// File with its size, or `None` if the size could not be read.
    File { size: Option<u64> },
}

/// One immediate child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Display name.
    pub name: CompactString,
    /// Full path, used to descend into directories.
    pub path: PathBuf,
    /// Entry type and size.
    pub kind: EntryKind,
}

impl Entry {
    /// Create a directory entry below `parent`.
    pub fn directory(parent: &Path, name: impl Into<CompactString>) -> Self {
        let name = name.into();
        Self {
            path: parent.join(name.as_str()),
            name,
            kind: EntryKind::Directory,
        }
    }

    /// Create a file entry below `parent`.
    pub fn file(parent: &Path, name: impl Into<CompactString>, size: Option<u64>) -> Self {
        let name = name.into();
        Self {
            path: parent.join(name.as_str()),
            name,
            kind: EntryKind::File { size },
        }
    }
}

/// Result of listing one directory.
///
/// `unreadable` holds errors for entries that were found but could not be
/// read at all, so not even their name is known.
#[derive(Debug, Default)]
pub struct Listing {
    pub entries: Vec<Entry>,
    pub unreadable: Vec<io::Error>,
}

/// Filesystem access needed to aggregate a tree.
///
/// Implementations only enumerate directories and report file sizes; the
/// aggregator decides what to do with failures.
pub trait Traversal {
    /// Check whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Check whether `path` exists and is a directory.
    fn exists_and_is_dir(&self, path: &Path) -> bool;

    /// List the immediate children of a directory.
    fn list_entries(&self, path: &Path) -> io::Result<Listing>;
}

/// [`Traversal`] backed by `std::fs`.
///
/// Entries are returned sorted by name so repeated walks of an unchanged
/// tree produce identical results. Symlinked directories are reported as
/// empty files and never descended.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsTraversal {
    follow_symlinks: bool,
}

impl FsTraversal {
    /// Create a traversal that does not follow symlinks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Report the target size of symlinked files.
    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Entry type, or `None` for special files.
    ///
    /// An entry whose type cannot be read is treated as a file of unknown
    /// size; it is never descended even if it is really a directory.
    fn classify(&self, entry: &fs::DirEntry) -> Option<EntryKind> {
        let file_type = match entry.file_type() {
            Ok(t) => t,
            Err(err) => {
                tracing::debug!(
                    path = %entry.path().display(),
                    error = %err,
                    "cannot read entry type, treating as file"
                );
                return Some(EntryKind::File { size: None });
            }
        };

        if file_type.is_dir() {
            Some(EntryKind::Directory)
        } else if file_type.is_file() {
            let size = entry.metadata().ok().map(|m| m.len());
            Some(EntryKind::File { size })
        } else if file_type.is_symlink() {
            if !self.follow_symlinks {
                return Some(EntryKind::File { size: Some(0) });
            }
            match fs::metadata(entry.path()) {
                Ok(m) if m.is_file() => Some(EntryKind::File { size: Some(m.len()) }),
                Ok(_) => Some(EntryKind::File { size: Some(0) }),
                Err(_) => Some(EntryKind::File { size: None }),
            }
        } else {
            // Sockets, devices, fifos
            None
        }
    }
}

impl Traversal for FsTraversal {
    fn exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }

    fn exists_and_is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_entries(&self, path: &Path) -> io::Result<Listing> {
        let mut listing = Listing::default();

        for dir_entry in fs::read_dir(path)? {
            let dir_entry = match dir_entry {
                Ok(e) => e,
                Err(err) => {
                    listing.unreadable.push(err);
                    continue;
                }
            };

            if let Some(kind) = self.classify(&dir_entry) {
                listing.entries.push(Entry {
                    name: CompactString::new(dir_entry.file_name().to_string_lossy()),
                    path: dir_entry.path(),
                    kind,
                });
            }
        }

        listing.entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(listing)
    }
}
