//! Error and warning types.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors while aggregating a directory tree.
#[derive(Debug, Error)]
pub enum TraversalError {
    /// Root path does not exist.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// Root path is not a directory.
    #[error("Root path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Permission denied for the root path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TraversalError {
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

/// Errors raised by drawing sinks.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing the output failed.
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The finished output could not be moved into place.
    #[error("Failed to save {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The interactive display failed.
    #[error("Terminal error: {0}")]
    Terminal(#[source] std::io::Error),

    /// The sink was used after it was finalized.
    #[error("Output already finalized")]
    Finalized,
}

impl RenderError {
    /// Create a write error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Invalid configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required field was not set.
    #[error("Missing configuration field: {0}")]
    MissingField(&'static str),

    /// A field failed validation.
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// A config file could not be read.
    #[error("Cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A config file is not valid TOML for the expected shape.
    #[error("Cannot parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

impl From<derive_builder::UninitializedFieldError> for ConfigError {
    fn from(err: derive_builder::UninitializedFieldError) -> Self {
        Self::MissingField(err.field_name())
    }
}

impl From<String> for ConfigError {
    fn from(message: String) -> Self {
        Self::Invalid(message)
    }
}

/// Kind of scan warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// Permission was denied.
    PermissionDenied,
    /// Entry disappeared while the walk was running.
    Vanished,
    /// Error listing a directory.
    ReadError,
    /// Error reading a file's size.
    MetadataError,
}

/// Non-fatal problem encountered during aggregation. The affected entry is
/// counted as zero bytes.
#[derive(Debug, Clone)]
pub struct ScanWarning {
    /// Path where the warning occurred.
    pub path: PathBuf,
    /// Human-readable message.
    pub message: String,
    /// Kind of warning.
    pub kind: WarningKind,
}

impl ScanWarning {
    /// Create a new scan warning.
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>, kind: WarningKind) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            kind,
        }
    }

    /// Warning for a directory that could not be listed.
    pub fn unreadable_dir(path: impl Into<PathBuf>, error: &std::io::Error) -> Self {
        let kind = Self::kind_for(error, WarningKind::ReadError);
        Self::new(path, format!("Cannot list directory: {error}"), kind)
    }

    /// Warning for an entry of the directory `path` that could not be read
    /// at all. The path is the directory's since the entry has no name.
    pub fn unreadable_entry(path: impl Into<PathBuf>, error: &std::io::Error) -> Self {
        let kind = Self::kind_for(error, WarningKind::ReadError);
        Self::new(path, format!("Cannot read directory entry: {error}"), kind)
    }

    /// Warning for a file whose size could not be read.
    pub fn missing_size(path: impl Into<PathBuf>) -> Self {
        Self::new(path, "Cannot read file size", WarningKind::MetadataError)
    }

    fn kind_for(error: &std::io::Error, fallback: WarningKind) -> WarningKind {
        match error.kind() {
            std::io::ErrorKind::PermissionDenied => WarningKind::PermissionDenied,
            std::io::ErrorKind::NotFound => WarningKind::Vanished,
            _ => fallback,
        }
    }
}
