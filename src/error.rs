//! Error types for md-pdf library.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for md-pdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed cause attached to extraction failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error types that can occur during conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// The extractor could not produce a document model.
    #[error("{message}")]
    PdfParsing {
        /// Human-readable description
        message: String,
        /// Underlying extraction failure
        #[source]
        source: Option<BoxError>,
    },

    /// The document model could not be rendered to Markdown.
    #[error("{message}")]
    MarkdownFormatting {
        /// Human-readable description
        message: String,
        /// Underlying rendering failure
        #[source]
        source: Option<FormatError>,
    },

    /// Reading or writing a file failed.
    #[error("{message}")]
    FileOperation {
        /// Human-readable description
        message: String,
        /// The file involved
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: Option<io::Error>,
    },

    /// The input file does not exist.
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),
}

impl Error {
    /// Create an extraction error.
    pub fn pdf_parsing(message: impl Into<String>, cause: Option<BoxError>) -> Self {
        Error::PdfParsing {
            message: message.into(),
            source: cause,
        }
    }

    /// Create a formatting error.
    pub fn markdown_formatting(message: impl Into<String>, cause: Option<FormatError>) -> Self {
        Error::MarkdownFormatting {
            message: message.into(),
            source: cause,
        }
    }

    /// Create a file operation error.
    pub fn file_operation(
        message: impl Into<String>,
        path: impl AsRef<Path>,
        cause: Option<io::Error>,
    ) -> Self {
        Error::FileOperation {
            message: message.into(),
            path: path.as_ref().to_path_buf(),
            source: cause,
        }
    }

    /// Path involved in the failure, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Error::FileOperation { path, .. } | Error::NotFound(path) => Some(path),
            _ => None,
        }
    }
}

/// Failures raised while rendering elements.
///
/// These never escape the crate's public entry points directly: the
/// rendering pipeline wraps them in [`Error::MarkdownFormatting`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The element kind is not one the renderer knows.
    #[error("Unknown element type")]
    UnknownElement,

    /// A container child appeared outside its container.
    #[error("Element '{kind}' is not allowed outside its parent container")]
    Misplaced {
        /// Kind of the misplaced element
        kind: &'static str,
    },

    /// Element structure is inconsistent.
    #[error("Malformed element structure: {0}")]
    Malformed(String),
}
