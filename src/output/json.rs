//! JSON output formatting

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entry::Entry;
use crate::error::Result;
use crate::mode::format_mode;
use crate::store::EntryStore;

/// Serializable view of one entry.
#[derive(Debug, Clone, Serialize)]
pub struct JsonEntry {
    pub path: String,
    pub mode: u32,
    pub permissions: String,
    pub nlink: u64,
    pub size: u64,
    pub mtime: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
}

impl From<&Entry> for JsonEntry {
    fn from(entry: &Entry) -> Self {
        let meta = entry.metadata();
        Self {
            path: entry.path().to_string_lossy().to_string(),
            mode: meta.mode,
            permissions: format_mode(meta.mode),
            nlink: meta.nlink,
            size: meta.size,
            mtime: meta.mtime,
            modified: DateTime::from_timestamp(meta.mtime, 0),
        }
    }
}

/// The store as a pretty-printed JSON array, in store order.
pub fn to_json(store: &EntryStore) -> Result<String> {
    let entries: Vec<JsonEntry> = store.iter().map(JsonEntry::from).collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}

/// Print the store as pretty-printed JSON to stdout.
pub fn print_json(store: &EntryStore) -> Result<()> {
    write_json(&mut io::stdout().lock(), store)
}

/// Write the store as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(out: &mut W, store: &EntryStore) -> Result<()> {
    writeln!(out, "{}", to_json(store)?)?;
    out.flush()?;
    Ok(())
}
