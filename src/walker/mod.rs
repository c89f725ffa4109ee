//! Directory walking that feeds an [`EntryStore`](crate::EntryStore)
//!
//! - `config` - Listing configuration (order, reverse, recursion, `-d`)
//! - `fs` - The `Filesystem` seam over directory listing and stat
//! - `walker` - `DirectoryWalker` and the finished `Listing`

mod config;
mod fs;
mod walker;

pub use config::ListingConfig;
pub use fs::{Filesystem, LocalFs};
pub use walker::{DirectoryWalker, Listing};
