//! Error types for rackstore
//!
//! Every failure the store or the services can produce is one variant of
//! [`Error`], so callers (the web UI in particular) can branch on the kind of
//! failure instead of parsing messages. We use `thiserror` for the `Display`
//! and `Error` implementations.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for rackstore operations
pub type Result<T> = std::result::Result<T, Error>;

/// A collection file failed to parse or did not match its record schema.
///
/// Always names the file, and for violations the first offending location
/// (`item 3 field 'pixelRange' field 'start'`, `item 0 field 'tags'[2]`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The file content is not valid JSON
    #[error("Invalid JSON in {file}: {detail}")]
    MalformedJson {
        /// File (or other source label) being read
        file: String,
        /// Parser message
        detail: String,
    },

    /// The JSON is well-formed but does not match the record schema
    #[error("Validation error in {file}: {location} {detail}")]
    Violation {
        /// File (or other source label) being validated
        file: String,
        /// Index/field path of the offending value
        location: String,
        /// What was expected and what was found
        detail: String,
    },
}

impl SchemaError {
    /// Build a schema violation
    pub fn violation(
        file: impl Into<String>,
        location: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        SchemaError::Violation {
            file: file.into(),
            location: location.into(),
            detail: detail.into(),
        }
    }

    /// Build a malformed-JSON error
    pub fn malformed(file: impl Into<String>, detail: impl Into<String>) -> Self {
        SchemaError::MalformedJson {
            file: file.into(),
            detail: detail.into(),
        }
    }

    /// The file the error refers to
    pub fn file(&self) -> &str {
        match self {
            SchemaError::MalformedJson { file, .. } | SchemaError::Violation { file, .. } => file,
        }
    }

    /// The offending location, if the JSON parsed at all
    pub fn location(&self) -> Option<&str> {
        match self {
            SchemaError::MalformedJson { .. } => None,
            SchemaError::Violation { location, .. } => Some(location),
        }
    }
}

/// Error types for rackstore
#[derive(Debug, Error)]
pub enum Error {
    /// Collection file missing, unreadable or unwritable
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// Malformed JSON or a schema violation
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// get/update/delete referenced a key that is not in the collection
    #[error("{label} with id '{key}' not found")]
    NotFound {
        /// Record kind label ("Rack", "Parts by tag")
        label: &'static str,
        /// The missing key
        key: String,
    },

    /// create collided with an existing key
    #[error("{label} with id '{key}' already exists")]
    AlreadyExists {
        /// Record kind label
        label: &'static str,
        /// The colliding key
        key: String,
    },

    /// A movement period cannot be turned into a file name
    #[error("Invalid period '{period}': {reason}")]
    InvalidPeriod {
        /// The rejected period
        period: String,
        /// Why it was rejected
        reason: String,
    },

    /// A record could not be rendered to its map form
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// True when the collection file does not exist
    pub fn is_missing_file(&self) -> bool {
        matches!(self, Error::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }

    /// True for [`Error::NotFound`]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// True for [`Error::AlreadyExists`]
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Error::AlreadyExists { .. })
    }

    /// The schema error, if this is one
    pub fn as_schema(&self) -> Option<&SchemaError> {
        match self {
            Error::Schema(e) => Some(e),
            _ => None,
        }
    }
}
