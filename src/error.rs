//! Error types for the sorter.
//!
//! Library modules return [`Error`] through the crate [`Result`] alias, while
//! the binary entry point uses `anyhow` for the setup errors that abort a run.
//!
//! # Design
//!
//! Per-file errors never escape the batch loop: the sorter turns each one into
//! a [`MoveOutcome`](crate::model::MoveOutcome) whose detail is the error's
//! display text. Only directory-level failures propagate out of
//! [`Sorter::run`](crate::sorter::Sorter::run).

use std::io;
use std::path::{Path, PathBuf};

/// Sorter result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while sorting.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Source or destination directory (or a file) is missing
    #[error("Not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Missing read/write rights on a file or directory
    #[error("Insufficient permissions for: {}", .0.display())]
    PermissionDenied(PathBuf),

    /// Artist or album tag missing after normalization
    #[error("Artist or album unknown in file: {}", .0.display())]
    TagsUnavailable(PathBuf),

    /// The OS rejected the target path during the move
    #[error("Filename syntax error: {} ({source})", .path.display())]
    PathSyntax {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A tag cannot form a valid path component
    #[error("Invalid path value: {}", .0.display())]
    PathValue(PathBuf),

    /// Any other I/O failure
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Classify an I/O error raised while touching `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            io::ErrorKind::InvalidInput => Self::PathValue(path),
            _ => Self::Io { path, source },
        }
    }

    /// Classify a failed rename. Anything that is not a permission or
    /// invalid-value problem is reported as a filename syntax error.
    pub fn from_rename(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            io::ErrorKind::InvalidInput => Self::PathValue(path.to_path_buf()),
            _ => Self::PathSyntax {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}
