//! Filesystem access used by the walker

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;

use crate::entry::EntryMetadata;

/// Directory listing and metadata retrieval.
pub trait Filesystem {
    /// Names in `path`, in whatever order the platform returns them.
    fn list_dir(&self, path: &Path) -> io::Result<Vec<OsString>>;

    /// Metadata for `path`, following symlinks.
    fn stat(&self, path: &Path) -> io::Result<EntryMetadata>;

    /// Whether `path` itself is a symbolic link.
    fn is_symlink(&self, path: &Path) -> bool;
}

/// The real filesystem through `std::fs`.
///
/// Listings start with the `.` and `..` pseudo-entries, as `readdir(3)` reports them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl Filesystem for LocalFs {
    fn list_dir(&self, path: &Path) -> io::Result<Vec<OsString>> {
        let mut names = vec![OsString::from("."), OsString::from("..")];
        for entry in fs::read_dir(path)? {
            names.push(entry?.file_name());
        }
        Ok(names)
    }

    fn stat(&self, path: &Path) -> io::Result<EntryMetadata> {
        fs::metadata(path).map(|meta| EntryMetadata::from(&meta))
    }

    fn is_symlink(&self, path: &Path) -> bool {
        path.is_symlink()
    }
}
