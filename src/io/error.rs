//! Errors raised while loading an input file.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("{}: {size} bytes exceeds the {limit} byte input limit", .path.display())]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("cannot read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IoError {
    /// Adapter for `map_err` that tags an OS error with the input path.
    pub(crate) fn unreadable(path: &std::path::Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
        move |source| Self::Unreadable {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, IoError>;
