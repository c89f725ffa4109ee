//! CLI entry point for myls

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use myls::{
    DirectoryWalker, Error, ListingConfig, LongFormatter, OutputConfig, SortOrder, print_json,
};
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "myls")]
#[command(about = "List file metadata: mode, links, size, modification time and path")]
#[command(version)]
#[command(disable_help_flag = true)]
struct Args {
    /// Files and directories to list (default: current directory)
    paths: Vec<PathBuf>,

    /// Only list the directory name, not its contents
    #[arg(short = 'd', long = "directory")]
    directory: bool,

    /// Sort by modification time
    #[arg(short = 't')]
    by_time: bool,

    /// Sort by size
    #[arg(short = 's')]
    by_size: bool,

    /// Sort by name (default)
    #[arg(short = 'n')]
    by_name: bool,

    /// Do not sort; keep directory order
    #[arg(short = 'U')]
    unsorted: bool,

    /// Reverse sort order
    #[arg(short = 'r', long = "reverse")]
    reverse: bool,

    /// Recursively process directories
    #[arg(short = 'R', long = "recursive")]
    recursive: bool,

    /// Print debug tracing to stderr
    #[arg(short = 'D', long = "debug")]
    debug: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Print help
    #[arg(short = 'h', long = "help")]
    help: bool,
}

/// Parse arguments, exiting 0 for version and 1 for anything invalid.
///
/// `-h` is an ordinary flag so conflicting sort flags are rejected first.
fn parse_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        let code = match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
            _ => 1,
        };
        let _ = e.print();
        process::exit(code);
    })
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // Diagnostics go to stderr, the listing owns stdout
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("myls: warning: could not set up tracing: {}", e);
    }
}

fn report_skipped(skipped: &[Error]) {
    for e in skipped {
        eprintln!("myls: {}", e);
    }
}

fn fail(e: &Error) -> ! {
    eprintln!("myls: {}", e);
    process::exit(1);
}

fn main() {
    let args = parse_args();
    init_tracing(args.debug);

    let order = SortOrder::from_flags(args.by_time, args.by_size, args.by_name, args.unsorted)
        .unwrap_or_else(|e| {
            eprintln!("{}", Args::command().render_usage());
            fail(&e);
        });

    if args.help {
        if let Err(e) = Args::command().print_help() {
            fail(&Error::from(e));
        }
        process::exit(0);
    }

    let config = ListingConfig {
        order,
        reverse: args.reverse,
        recursive: args.recursive,
        dirs_only: args.directory,
    };
    debug!("{:?}", config);

    let mut walker = DirectoryWalker::new(config);
    let walked = if args.paths.is_empty() {
        walker.walk(Path::new("."))
    } else {
        args.paths.iter().try_for_each(|path| walker.add_path(path))
    };
    if let Err(e) = walked {
        report_skipped(walker.skipped());
        fail(&e);
    }

    let listing = walker.finish();
    report_skipped(&listing.skipped);

    let result = if args.json {
        print_json(&listing.entries)
    } else {
        let mut formatter = LongFormatter::new(OutputConfig {
            use_color: should_use_color(args.color),
        });
        formatter.print(&listing.entries).map_err(Error::from)
    };

    if let Err(e) = result {
        fail(&e);
    }
}
