//! Fixed-column long listing
//!
//! One line per entry:
//! `<mode> <nlink:4> <size:10> <Mon> <dd>, <yyyy> <HH:MM:SS> <path>`

use std::io::{self, Write};

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike, Utc};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::entry::Entry;
use crate::mode::format_mode;
use crate::store::EntryStore;

use super::config::OutputConfig;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Long listing formatter writing to stdout.
pub struct LongFormatter {
    config: OutputConfig,
    stdout: StandardStream,
}

impl LongFormatter {
    pub fn new(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            config,
            stdout: StandardStream::stdout(choice),
        }
    }

    /// Print every entry of the store in its current order.
    pub fn print(&mut self, store: &EntryStore) -> io::Result<()> {
        let use_color = self.config.use_color;
        let mut out = self.stdout.lock();
        write_listing(&mut out, store, use_color)?;
        out.flush()
    }
}

/// Write the long listing of `store` to any color-capable writer.
pub fn write_listing<W: WriteColor>(
    out: &mut W,
    store: &EntryStore,
    use_color: bool,
) -> io::Result<()> {
    for entry in store {
        write_entry(out, entry, use_color)?;
    }
    Ok(())
}

fn write_entry<W: WriteColor>(out: &mut W, entry: &Entry, use_color: bool) -> io::Result<()> {
    write!(out, "{} ", format_columns(entry))?;

    if use_color && entry.metadata().is_dir() {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(out, "{}", entry.path().display())?;
        out.reset()?;
        writeln!(out)
    } else {
        writeln!(out, "{}", entry.path().display())
    }
}

/// Everything on the line before the path.
fn format_columns(entry: &Entry) -> String {
    let meta = entry.metadata();
    format!(
        "{} {:>4} {:>10} {}",
        format_mode(meta.mode),
        meta.nlink,
        meta.size,
        format_mtime(meta.mtime)
    )
}

/// Full line for one entry, without color.
pub fn format_entry(entry: &Entry) -> String {
    format!("{} {}", format_columns(entry), entry.path().display())
}

/// The long listing as a string, one line per entry.
pub fn format_listing(store: &EntryStore) -> String {
    store.iter().map(|e| format_entry(e) + "\n").collect()
}

/// Render a modification time in local time, e.g. `Sep  8, 2019 14:03:27`.
pub fn format_mtime(mtime: i64) -> String {
    format_mtime_in(mtime, &Local)
}

/// Render a modification time in the given timezone.
///
/// Ambiguous local times use the earlier instant; times the zone cannot
/// represent fall back to UTC. Timestamps outside chrono's range are printed
/// as raw seconds.
pub fn format_mtime_in<Tz: TimeZone>(mtime: i64, tz: &Tz) -> String {
    if let Some(dt) = tz.timestamp_opt(mtime, 0).earliest() {
        return format_datetime(&dt);
    }
    match DateTime::<Utc>::from_timestamp(mtime, 0) {
        Some(utc) => format_datetime(&utc),
        None => mtime.to_string(),
    }
}

fn format_datetime<T: Datelike + Timelike>(dt: &T) -> String {
    format!(
        "{} {:>2}, {} {:02}:{:02}:{:02}",
        MONTHS[dt.month0() as usize],
        dt.day(),
        dt.year(),
        dt.hour(),
        dt.minute(),
        dt.second()
    )
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;
    use termcolor::{Buffer, NoColor};

    use super::*;
    use crate::entry::EntryMetadata;
    use crate::store::SortOrder;

    fn entry(path: &str, mode: u32, nlink: u64, size: u64) -> Entry {
        Entry::new(
            path,
            EntryMetadata {
                mode,
                nlink,
                size,
                mtime: 0,
            },
        )
    }

    #[test]
    fn test_format_mtime_utc() {
        // 2019-09-18 14:03:07 UTC
        assert_eq!(format_mtime_in(1_568_815_387, &Utc), "Sep 18, 2019 14:03:07");
    }

    #[test]
    fn test_format_mtime_pads_day() {
        // 2021-03-05 09:08:07 UTC
        assert_eq!(format_mtime_in(1_614_935_287, &Utc), "Mar  5, 2021 09:08:07");
    }

    #[test]
    fn test_format_mtime_fixed_offset() {
        let east = FixedOffset::east_opt(2 * 3600).unwrap();
        // 23:30 UTC on Dec 31 is already next year two hours east
        assert_eq!(format_mtime_in(1_704_065_400, &Utc), "Dec 31, 2023 23:30:00");
        assert_eq!(format_mtime_in(1_704_065_400, &east), "Jan  1, 2024 01:30:00");
    }

    #[test]
    fn test_format_mtime_before_epoch() {
        assert_eq!(format_mtime_in(-1, &Utc), "Dec 31, 1969 23:59:59");
    }

    #[test]
    fn test_format_mtime_out_of_range_prints_seconds() {
        assert_eq!(format_mtime_in(i64::MAX, &Utc), i64::MAX.to_string());
        assert_eq!(format_mtime_in(i64::MIN, &Utc), i64::MIN.to_string());
    }

    #[test]
    fn test_format_entry_columns() {
        let line = format_entry(&entry("src/main.rs", 0o100644, 1, 1234));
        let (columns, path) = line.split_at(line.len() - "src/main.rs".len());
        assert_eq!(path, "src/main.rs");
        assert!(
            columns.starts_with("-rw-r--r--    1       1234 "),
            "unexpected columns: {:?}",
            columns
        );
    }

    #[test]
    fn test_wide_values_are_not_truncated() {
        let line = format_entry(&entry("big", 0o100600, 12345, 98_765_432_100));
        assert!(line.starts_with("-rw------- 12345 98765432100 "), "{}", line);
    }

    #[test]
    fn test_format_listing_follows_store_order() {
        let mut store = EntryStore::new(SortOrder::Size);
        store.insert(entry("large", 0o100644, 1, 300));
        store.insert(entry("small", 0o100644, 1, 3));

        let output = format_listing(&store);
        let paths: Vec<&str> = output
            .lines()
            .map(|l| l.rsplit(' ').next().unwrap())
            .collect();
        assert_eq!(paths, vec!["small", "large"]);
    }

    #[test]
    fn test_write_listing_without_color_matches_format() {
        let mut store = EntryStore::new(SortOrder::Name);
        store.insert(entry("dir", 0o040755, 2, 4096));
        store.insert(entry("file", 0o100644, 1, 10));

        let mut out = NoColor::new(Vec::new());
        write_listing(&mut out, &store, false).unwrap();
        let text = String::from_utf8(out.into_inner()).unwrap();
        assert_eq!(text, format_listing(&store));
    }

    #[test]
    fn test_write_listing_colors_directories_only() {
        let mut store = EntryStore::new(SortOrder::Name);
        store.insert(entry("dir", 0o040755, 2, 4096));
        store.insert(entry("file", 0o100644, 1, 10));

        let mut out = Buffer::ansi();
        write_listing(&mut out, &store, true).unwrap();
        let text = String::from_utf8(out.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].contains("\x1b["), "dir line should be colored");
        assert!(lines[0].starts_with("drwxr-xr-x "), "mode stays plain");
        assert!(!lines[1].contains("\x1b["), "file line should be plain");
    }
}
