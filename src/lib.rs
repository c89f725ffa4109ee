//! myls - list file metadata in fixed columns, sorted by name, size or time

pub mod entry;
pub mod error;
pub mod mode;
pub mod output;
pub mod store;
pub mod walker;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use entry::{Entry, EntryMetadata};
pub use error::{Error, Result};
pub use mode::format_mode;
pub use output::{LongFormatter, OutputConfig, format_listing, print_json};
pub use store::{EntryStore, SortOrder};
pub use walker::{DirectoryWalker, Filesystem, Listing, ListingConfig, LocalFs};
