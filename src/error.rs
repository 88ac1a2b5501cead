//! Error types for pagetext.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pagetext operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while extracting page text.
#[derive(Error, Debug)]
pub enum Error {
    /// No text capability is compiled in or reports itself usable.
    #[error("No PDF text capability is available")]
    CapabilityUnavailable,

    /// A capability was requested by name but is not registered.
    #[error("Unknown text capability: {0}")]
    UnknownCapability(String),

    /// The input could not be opened as a PDF document.
    #[error("Cannot open document {}: {reason}", path.display())]
    DocumentOpen { path: PathBuf, reason: String },

    /// The output file could not be created or written.
    #[error("Cannot write output {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Text extraction failed for a single page (1-based).
    #[error("Text extraction failed on page {page}: {reason}")]
    PageExtraction { page: u32, reason: String },

    /// Page index is out of range.
    #[error("Page index {0} is out of range (document has {1} pages)")]
    PageOutOfRange(u32, u32),

    /// Installing a text capability failed.
    #[error("Install failed: {0}")]
    Install(String),

    /// The file format is not recognized as PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF version is not supported.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// I/O error when reading files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Build a [`Error::DocumentOpen`] from any displayable cause.
    pub fn document_open(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Error::DocumentOpen {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Build a [`Error::OutputWrite`] for the given path.
    pub fn output_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::OutputWrite {
            path: path.into(),
            source,
        }
    }

    /// Whether the user can recover by installing a capability and re-running.
    pub fn needs_install(&self) -> bool {
        matches!(self, Error::CapabilityUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::CapabilityUnavailable;
        assert_eq!(err.to_string(), "No PDF text capability is available");

        let err = Error::PageOutOfRange(10, 5);
        assert_eq!(
            err.to_string(),
            "Page index 10 is out of range (document has 5 pages)"
        );

        let err = Error::PageExtraction {
            page: 3,
            reason: "bad font".to_string(),
        };
        assert_eq!(err.to_string(), "Text extraction failed on page 3: bad font");
    }

    #[test]
    fn test_document_open_display() {
        let err = Error::document_open("missing.pdf", "No such file");
        assert_eq!(
            err.to_string(),
            "Cannot open document missing.pdf: No such file"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_needs_install() {
        assert!(Error::CapabilityUnavailable.needs_install());
        assert!(!Error::UnknownFormat.needs_install());
    }
}
