//! DirectoryWalker - collects entries from path operands into an EntryStore

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::entry::{Entry, EntryMetadata};
use crate::error::{Error, Result};
use crate::store::EntryStore;

use super::config::ListingConfig;
use super::fs::{Filesystem, LocalFs};

/// A finished listing: the ordered entries plus the entries that were skipped.
#[derive(Debug)]
pub struct Listing {
    pub entries: EntryStore,
    /// Recoverable errors, in the order they occurred.
    pub skipped: Vec<Error>,
}

/// Walks path operands and records what it finds.
///
/// Fatal errors (a directory that cannot be listed) are returned. A child that
/// cannot be stat-ed is recorded in [`Listing::skipped`] and left out.
pub struct DirectoryWalker<F: Filesystem = LocalFs> {
    config: ListingConfig,
    fs: F,
    store: EntryStore,
    skipped: Vec<Error>,
}

impl DirectoryWalker<LocalFs> {
    pub fn new(config: ListingConfig) -> Self {
        Self::with_filesystem(config, LocalFs)
    }
}

impl<F: Filesystem> DirectoryWalker<F> {
    pub fn with_filesystem(config: ListingConfig, fs: F) -> Self {
        Self {
            config,
            fs,
            store: EntryStore::new(config.order),
            skipped: Vec::new(),
        }
    }

    /// Add one command-line operand.
    ///
    /// Directories are expanded unless `dirs_only` is set; anything else is
    /// recorded as a single entry.
    pub fn add_path(&mut self, path: &Path) -> Result<()> {
        let Some(metadata) = self.stat_or_skip(path) else {
            return Ok(());
        };

        if metadata.is_dir() && !self.config.dirs_only {
            self.walk(path)
        } else {
            self.record(Entry::new(path, metadata));
            Ok(())
        }
    }

    /// Record every child of `path`, then descend into child directories when
    /// recursion is on.
    ///
    /// All children of a directory are recorded before any of its
    /// subdirectories is entered.
    pub fn walk(&mut self, path: &Path) -> Result<()> {
        let dir = trim_trailing_separators(path);
        debug!("walk({})", dir.display());

        let names = self.fs.list_dir(&dir).map_err(|source| Error::OpenDir {
            path: dir.clone(),
            source,
        })?;

        let is_current_dir = dir.as_os_str() == ".";
        let mut pending = Vec::new();

        for name in names {
            let child = if is_current_dir {
                PathBuf::from(&name)
            } else {
                dir.join(&name)
            };

            let Some(metadata) = self.stat_or_skip(&child) else {
                continue;
            };

            let descend = self.config.recursive
                && metadata.is_dir()
                && name != "."
                && name != ".."
                && !self.fs.is_symlink(&child);

            self.record(Entry::new(child.clone(), metadata));
            if descend {
                pending.push(child);
            }
        }
        debug!("walk({}): all entries processed", dir.display());

        for subdir in pending {
            debug!("descending into {} under {}", subdir.display(), dir.display());
            self.walk(&subdir)?;
        }

        Ok(())
    }

    /// Entries collected so far.
    pub fn entries(&self) -> &EntryStore {
        &self.store
    }

    /// Recoverable errors collected so far.
    pub fn skipped(&self) -> &[Error] {
        &self.skipped
    }

    /// Apply the final reversal and hand back the listing.
    pub fn finish(mut self) -> Listing {
        if self.config.reverse {
            debug!("reversing {} entries", self.store.len());
            self.store.reverse();
        }
        Listing {
            entries: self.store,
            skipped: self.skipped,
        }
    }

    fn stat_or_skip(&mut self, path: &Path) -> Option<EntryMetadata> {
        match self.fs.stat(path) {
            Ok(metadata) => Some(metadata),
            Err(source) => {
                debug!("stat failed for {}: {}", path.display(), source);
                self.skipped.push(Error::Stat {
                    path: path.to_path_buf(),
                    source,
                });
                None
            }
        }
    }

    fn record(&mut self, entry: Entry) {
        debug!("add {}", entry.path().display());
        self.store.insert(entry);
    }
}

/// Strip trailing `/` characters, leaving at least one character.
fn trim_trailing_separators(path: &Path) -> PathBuf {
    let raw = path.as_os_str().as_encoded_bytes();
    let mut end = raw.len();
    while end > 1 && raw[end - 1] == b'/' {
        end -= 1;
    }
    if end == raw.len() {
        return path.to_path_buf();
    }

    match path.to_str() {
        Some(s) => PathBuf::from(&s[..end]),
        // Non UTF-8: components drop trailing separators too
        None => path.components().collect(),
    }
}
