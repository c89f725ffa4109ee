//! Entries recorded during a listing

use std::fs;
use std::path::{Path, PathBuf};

use crate::mode;

/// Snapshot of the stat fields the listing needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryMetadata {
    /// File type, permission and special bits.
    pub mode: u32,
    pub nlink: u64,
    /// Size in bytes.
    pub size: u64,
    /// Modification time in whole seconds since the Unix epoch.
    pub mtime: i64,
}

impl EntryMetadata {
    pub fn is_dir(&self) -> bool {
        mode::is_dir(self.mode)
    }
}

#[cfg(unix)]
impl From<&fs::Metadata> for EntryMetadata {
    fn from(meta: &fs::Metadata) -> Self {
        use std::os::unix::fs::MetadataExt;

        Self {
            mode: meta.mode(),
            nlink: meta.nlink(),
            size: meta.size(),
            mtime: meta.mtime(),
        }
    }
}

#[cfg(not(unix))]
impl From<&fs::Metadata> for EntryMetadata {
    fn from(meta: &fs::Metadata) -> Self {
        use std::time::UNIX_EPOCH;

        let file_type = meta.file_type();
        let type_bits = if file_type.is_dir() {
            0o040000
        } else if file_type.is_symlink() {
            0o120000
        } else {
            0o100000
        };
        let perm_bits = if meta.permissions().readonly() {
            0o444
        } else {
            0o666
        };
        let mtime = meta
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map_or(0, |d| d.as_secs() as i64);

        Self {
            mode: type_bits | perm_bits,
            nlink: 1,
            size: meta.len(),
            mtime,
        }
    }
}

/// One filesystem object found while listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    path: PathBuf,
    metadata: EntryMetadata,
}

impl Entry {
    pub fn new(path: impl Into<PathBuf>, metadata: EntryMetadata) -> Self {
        Self {
            path: path.into(),
            metadata,
        }
    }

    /// Path exactly as built during traversal.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn metadata(&self) -> &EntryMetadata {
        &self.metadata
    }

    /// Raw bytes of the path, the key for name ordering.
    pub fn name_key(&self) -> &[u8] {
        self.path.as_os_str().as_encoded_bytes()
    }
}
