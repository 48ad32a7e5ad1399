//! Error types for export operations

use thiserror::Error;

/// Result type alias for export operations
pub type Result<T> = std::result::Result<T, ExportError>;

/// Main error type for the exporter
#[derive(Error, Debug)]
pub enum ExportError {
    /// IO error while reading the document or writing output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The identifier document is not well-formed XML
    #[error("XML error: {0}")]
    Xml(String),

    /// An identifier element carried no text
    #[error("Identifier element <{element}> #{position} is empty")]
    EmptyIdentifier {
        /// Local name of the identifier elements
        element: String,
        /// 1-based ordinal of the empty element among matches
        position: usize,
    },

    /// Transport-level HTTP failure (connection, DNS, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("Query for {identifier} failed with status {status}: {}", body_excerpt(.body))]
    Status {
        /// Identifier whose query was refused
        identifier: String,
        /// HTTP status code received
        status: u16,
        /// Full response body; only an excerpt is displayed
        body: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Config file is not valid JSON
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Longest body excerpt shown in a status error message
pub const MAX_BODY_EXCERPT: usize = 200;

/// First line of `body`, cut to [`MAX_BODY_EXCERPT`] characters
fn body_excerpt(body: &str) -> String {
    let first_line = body.trim().lines().next().unwrap_or_default();
    let mut excerpt: String = first_line.chars().take(MAX_BODY_EXCERPT).collect();
    if excerpt.len() < body.trim().len() {
        excerpt.push_str("...");
    }
    excerpt
}

impl From<quick_xml::Error> for ExportError {
    fn from(err: quick_xml::Error) -> Self {
        ExportError::Xml(err.to_string())
    }
}
