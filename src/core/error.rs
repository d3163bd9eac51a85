//! Error types for hashing and scanning

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure while scanning a directory or hashing one of its files
#[derive(Debug, Error)]
pub enum ScanError {
    /// The directory does not exist, is not a directory, or cannot be listed
    #[error("failed to read directory '{}'", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file could not be opened or fully read while hashing
    #[error("failed to hash file '{}'", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    pub(crate) fn directory(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScanError::DirectoryRead {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScanError::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Path of the directory or file that failed
    pub fn path(&self) -> &Path {
        match self {
            ScanError::DirectoryRead { path, .. } | ScanError::FileRead { path, .. } => path,
        }
    }

    pub fn is_directory_error(&self) -> bool {
        matches!(self, ScanError::DirectoryRead { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_names_path() {
        let err = ScanError::file(
            "/data/a.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "failed to hash file '/data/a.txt'");
        assert_eq!(err.path(), Path::new("/data/a.txt"));
        assert!(!err.is_directory_error());
    }

    #[test]
    fn test_directory_error_keeps_source() {
        use std::error::Error as _;

        let err = ScanError::directory(
            "/missing",
            io::Error::new(io::ErrorKind::NotFound, "no such directory"),
        );
        assert!(err.is_directory_error());
        let source = err.source().expect("source should be set");
        assert_eq!(source.to_string(), "no such directory");
    }
}
