//! Listing formatting and display
//!
//! - `config` - Output configuration types
//! - `long` - Fixed-column long listing (console)
//! - `json` - JSON output

mod config;
mod json;
mod long;

pub use config::OutputConfig;
pub use json::{JsonEntry, print_json, to_json, write_json};
pub use long::{
    LongFormatter, format_entry, format_listing, format_mtime, format_mtime_in, write_listing,
};
