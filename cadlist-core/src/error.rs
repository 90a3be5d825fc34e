use std::path::PathBuf;

use thiserror::Error;

/// Result type for scan operations
pub type Result<T> = std::result::Result<T, ScanError>;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Invalid directory path.")]
    InvalidDirectory { path: PathBuf },

    #[error("No .cpp files found.")]
    NoMatchingFiles { path: PathBuf },

    #[error("failed to read directory '{}'", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Whether this error is an expected outcome reported to the user as a
    /// single line, rather than a filesystem fault.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            ScanError::InvalidDirectory { .. } | ScanError::NoMatchingFiles { .. }
        )
    }

    /// The directory the scan was asked to read.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ScanError::InvalidDirectory { path }
            | ScanError::NoMatchingFiles { path }
            | ScanError::ReadDir { path, .. } => path,
        }
    }
}
