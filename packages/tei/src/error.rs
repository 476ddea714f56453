//! Error types for the TEI reader.
//!
//! Every variant is logged once where it is detected and then returned
//! unchanged, so callers never need to log it again.

use std::path::PathBuf;

use thiserror::Error;

/// Boxed error used at the seams where the concrete cause is not ours
/// (XML decoding, link extraction).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type for the TEI reader.
#[derive(Debug, Error)]
pub enum TeiError {
    /// The input path could not be read.
    #[error("File not found: {}: {source}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input could not be decoded or parsed as XML.
    #[error("Error parsing XML file: {}: {source}", .path.display())]
    MalformedXml {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    /// A required element is absent or carries no text.
    #[error("Missing required element: <{tag}>")]
    MissingElement { tag: String },

    /// An element is present but not shaped the way the accessor expects.
    #[error("Invalid XML structure: {0}")]
    InvalidStructure(String),

    /// The link extractor failed.
    #[error("Error occurred while extracting links: {0}")]
    ExtractionFailure(#[source] BoxError),

    /// The configured namespace URI is unusable.
    #[error("Invalid namespace URI: '{0}'")]
    InvalidNamespace(String),
}

impl TeiError {
    pub(crate) fn missing_element(tag: impl Into<String>) -> Self {
        Self::MissingElement { tag: tag.into() }
    }
}

/// Result type alias for TEI reader operations.
pub type Result<T> = std::result::Result<T, TeiError>;
