//! Errors that abort a walk

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures the walker does not recover from.
///
/// Messages leave out the underlying `io::Error`; it is available through
/// `source()` and shows up when the error chain is printed.
///
/// Permission errors while listing a directory are not represented here;
/// they are reported through the output sink and the walk continues.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("cannot read directory '{}'", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot access '{}'", .path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing output")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, WalkError>;
