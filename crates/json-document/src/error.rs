//! Error types for the json-document crate.
//!
//! Paths are carried alongside a rendered message so errors stay `Clone` and
//! comparable in tests.

use std::path::PathBuf;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while opening, reading, or writing a JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// The document path cannot be represented as UTF-8.
    #[error("document path '{}' is not valid UTF-8", path.display())]
    NonUtf8Path {
        /// The rejected path.
        path: PathBuf,
    },

    /// The document path does not end in a file name.
    #[error("document path '{path}' must name a file")]
    NotAFile {
        /// The rejected path.
        path: Utf8PathBuf,
    },

    /// The directory holding the document could not be created or opened.
    #[error("failed to open document directory for '{path}': {message}")]
    Open {
        /// Path to the document.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The document exists but could not be read.
    #[error("failed to read document at '{path}': {message}")]
    Read {
        /// Path to the document.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The document content is not valid JSON for the requested type.
    #[error("invalid JSON in document at '{path}': {message}")]
    Parse {
        /// Path to the document.
        path: Utf8PathBuf,
        /// Description of the parse error.
        message: String,
    },

    /// The value could not be rendered as JSON.
    #[error("failed to serialise document for '{path}': {message}")]
    Serialize {
        /// Path to the document.
        path: Utf8PathBuf,
        /// Description of the serialisation error.
        message: String,
    },

    /// The document could not be written.
    #[error("failed to write document at '{path}': {message}")]
    Write {
        /// Path of the file that failed to be written.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },
}
