//! Error types for the classver-core library.
//!
//! This module provides error handling using the `thiserror` crate. Only
//! failures that abort a whole run live here: per-item problems (wrong
//! magic, an unreadable file or entry) are reported as
//! [`ParseResult`](crate::report::ParseResult) variants and never stop the
//! scan.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for classver operations
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal error type for classver scans
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Failed to open the archive file itself
    #[error("failed to open archive '{path}': {source}")]
    ArchiveOpen {
        /// Path to the archive that failed to open
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file could not be read as a zip-format archive
    #[error("failed to read archive '{path}': {source}")]
    ArchiveRead {
        /// Path to the unreadable archive
        path: PathBuf,
        /// Underlying zip error
        #[source]
        source: zip::result::ZipError,
    },
}

impl Error {
    /// Creates a new archive open error
    pub fn archive_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ArchiveOpen {
            path: path.into(),
            source,
        }
    }

    /// Creates a new archive read error
    pub fn archive_read(path: impl Into<PathBuf>, source: zip::result::ZipError) -> Self {
        Self::ArchiveRead {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_open_display() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = Error::archive_open("lib.jar", io);
        assert!(err.to_string().contains("failed to open archive"));
        assert!(err.to_string().contains("lib.jar"));
    }

    #[test]
    fn test_archive_read_display() {
        let err = Error::archive_read(
            "broken.jar",
            zip::result::ZipError::InvalidArchive("not a zip".into()),
        );
        assert!(err.to_string().contains("failed to read archive"));
        assert!(err.to_string().contains("broken.jar"));
    }
}
