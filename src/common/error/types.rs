//! Crate-level error type.
use thiserror::Error;

/// Main error type for building and writing presentations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Packaging (ZIP, relationships, part names) error
    #[error("Package error: {0}")]
    Package(String),

    /// XML generation or parsing error
    #[error("XML error: {0}")]
    XmlError(String),

    /// Malformed document structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// A color value that is not six hex digits
    #[error("Invalid color value: {0:?}")]
    InvalidColor(String),

    /// A slide layout that cannot be placed on its canvas
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    /// The output file could not be written or moved into place
    #[error("Could not write {path}: {source}")]
    Persist {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for crate operations.
pub type Result<T> = std::result::Result<T, Error>;
