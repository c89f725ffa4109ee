//! Error type shared by the walker, the store and the output formatters

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    // Config
    #[error("only one of -t, -s, -n and -U can be specified")]
    ConflictingSortFlags,

    // Traversal
    #[error("cannot open directory '{}': {source}", .path.display())]
    OpenDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot stat '{}': {source}", .path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // Output
    #[error("error writing output: {0}")]
    Output(#[from] io::Error),

    #[error("error encoding JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// The path this error occurred at, if applicable.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::OpenDir { path, .. } | Self::Stat { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Whether the listing can continue after this error.
    ///
    /// Only a failed stat of a single entry is recoverable: the entry is
    /// dropped and its siblings are still listed. Everything else ends the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Stat { .. })
    }
}
