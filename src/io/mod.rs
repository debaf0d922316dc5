//! Bounded file loading.
//!
//! The viewer needs the whole file resident before a layout can be derived.
//! `SafeReader` memory-maps the input and refuses files above a size limit.

pub mod error;

use crate::io::error::{IoError, Result};
use bytes::Bytes;
use memmap2::Mmap;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Defines the resource limits for loading input files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IOLimits {
    /// The absolute maximum file size that can be opened.
    pub max_file_size: u64,
}

impl Default for IOLimits {
    fn default() -> Self {
        Self {
            max_file_size: 100 * 1024 * 1024, // 100MB
        }
    }
}

/// A size-bounded, memory-mapped view of an input file.
pub struct SafeReader {
    path: PathBuf,
    // None when the file size is zero; memmap cannot map empty files.
    mmap: Option<Mmap>,
    file_size: u64,
}

impl SafeReader {
    /// Opens a file and memory-maps it.
    ///
    /// This function will fail if the file size exceeds `limits.max_file_size`.
    pub fn open<P: AsRef<Path>>(path: P, limits: &IOLimits) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(IoError::unreadable(path))?;
        let file_size = file
            .metadata()
            .map_err(IoError::unreadable(path))?
            .len();

        debug!(
            path = %path.display(),
            size = file_size,
            limits.max_file_size = limits.max_file_size,
            "Opening input file"
        );

        if file_size > limits.max_file_size {
            warn!(
                path = %path.display(),
                size = file_size,
                limit = limits.max_file_size,
                "File is too large"
            );
            return Err(IoError::TooLarge {
                path: path.to_path_buf(),
                size: file_size,
                limit: limits.max_file_size,
            });
        }

        let mmap = if file_size == 0 {
            None
        } else {
            // Safety: read-only map of a regular file we just opened.
            Some(unsafe { Mmap::map(&file) }.map_err(IoError::unreadable(path))?)
        };

        Ok(Self {
            path: path.to_path_buf(),
            mmap,
            file_size,
        })
    }

    /// Returns the total size of the underlying file in bytes.
    pub fn size(&self) -> u64 {
        self.file_size
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The full file contents as an owned buffer.
    pub fn read_all(&self) -> Bytes {
        match &self.mmap {
            Some(map) => Bytes::copy_from_slice(&map[..]),
            None => Bytes::new(),
        }
    }
}

/// Open `path` under `limits` and return its contents.
pub fn read_file<P: AsRef<Path>>(path: P, limits: &IOLimits) -> Result<Bytes> {
    Ok(SafeReader::open(path, limits)?.read_all())
}
