//! Error types for settings parsing, scanning and gallery building.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a gallery.
#[derive(Debug, Error)]
pub enum GalleryError {
    /// The root path does not name an existing folder.
    #[error("The folder doesn't exist, or it's empty: {path}")]
    PathResolution { path: String },
}

/// Errors raised while parsing a gallery settings block.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The block is not YAML, or is empty.
    #[error("Cannot parse YAML!")]
    Unparsable,

    /// No `path` key, or an empty one.
    #[error("Please specify a path!")]
    MissingPath,

    /// A key holds a value of the wrong type or an unknown option.
    #[error("Invalid setting: {message}")]
    InvalidValue { message: String },
}

/// Errors that can occur while scanning a directory into a vault snapshot.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Permission denied for a path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Path not found.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Root path is not a directory.
    #[error("Root path is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}

impl ScanError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }
}
