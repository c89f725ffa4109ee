//! Ordered accumulation of listing entries

use std::cmp::Ordering;

use crate::entry::Entry;
use crate::error::{Error, Result};

/// Rule deciding where a new entry goes in an [`EntryStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Keep the order entries were discovered in.
    Insertion,
    /// Ascending by path bytes.
    #[default]
    Name,
    /// Ascending by size in bytes.
    Size,
    /// Ascending by modification time.
    Time,
}

impl SortOrder {
    /// Pick the order from the `-t`, `-s`, `-n` and `-U` flags.
    ///
    /// At most one may be set; none at all means [`SortOrder::Name`].
    pub fn from_flags(time: bool, size: bool, name: bool, unsorted: bool) -> Result<Self> {
        let selected = [time, size, name, unsorted].iter().filter(|&&f| f).count();
        if selected > 1 {
            return Err(Error::ConflictingSortFlags);
        }

        Ok(if time {
            Self::Time
        } else if size {
            Self::Size
        } else if unsorted {
            Self::Insertion
        } else {
            Self::Name
        })
    }

    /// Compare two entries by this order's key.
    ///
    /// Every pair compares equal under [`SortOrder::Insertion`], which makes
    /// insertion a plain append.
    pub fn compare(&self, a: &Entry, b: &Entry) -> Ordering {
        match self {
            Self::Insertion => Ordering::Equal,
            Self::Name => a.name_key().cmp(b.name_key()),
            Self::Size => a.metadata().size.cmp(&b.metadata().size),
            Self::Time => a.metadata().mtime.cmp(&b.metadata().mtime),
        }
    }
}

/// Entries kept sorted under a single [`SortOrder`] as they arrive.
///
/// Insertion is stable: an entry whose key ties with existing entries lands
/// after all of them. Appending already-sorted input costs O(1) per entry.
#[derive(Debug, Clone, Default)]
pub struct EntryStore {
    order: SortOrder,
    entries: Vec<Entry>,
}

impl EntryStore {
    pub fn new(order: SortOrder) -> Self {
        Self {
            order,
            entries: Vec::new(),
        }
    }

    pub fn insert(&mut self, entry: Entry) {
        let order = self.order;

        let Some(last) = self.entries.last() else {
            self.entries.push(entry);
            return;
        };

        // Tail: monotonic input and ties with the last element
        if order.compare(&entry, last) != Ordering::Less {
            self.entries.push(entry);
            return;
        }

        // Head: strictly smaller than everything, so no tie to stay behind
        if order.compare(&entry, &self.entries[0]) == Ordering::Less {
            self.entries.insert(0, entry);
            return;
        }

        let pos = self
            .entries
            .partition_point(|e| order.compare(e, &entry) != Ordering::Greater);
        self.entries.insert(pos, entry);
    }

    /// Invert the current order in place.
    pub fn reverse(&mut self) {
        self.entries.reverse();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a EntryStore {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
