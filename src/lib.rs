//! # Graph Exporter
//!
//! Graph Exporter pulls the named graph of every museum object listed in a local
//! XML document out of a remote SPARQL endpoint, rewrites the Erlangen CRM
//! namespace to the canonical CIDOC CRM one, and prints the statements.
//!
//! Each identifier found in the document becomes one `CONSTRUCT` query against
//! `<base><id>/graph`. Requests are issued one at a time, in document order, and
//! every response is emitted as an independent block.
//!
//! ## Example
//!
//! ```no_run
//! use futures_util::StreamExt;
//! use graph_exporter::{ExportConfig, GraphExporter, Result};
//!
//! async fn example() -> Result<()> {
//!     let exporter = GraphExporter::new(ExportConfig::default())?;
//!     let blocks = exporter.export_document("BM20.xml")?;
//!     futures_util::pin_mut!(blocks);
//!     while let Some(block) = blocks.next().await {
//!         println!("{}", block?.text);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

/// Export configuration and defaults
pub mod config;

/// Error types and result definitions
pub mod error;

/// The ordered per-identifier export pipeline
pub mod export;

/// HTTP access to the SPARQL endpoint
pub mod http;

/// Module for reading identifier records out of XML documents
pub mod parsing;

/// SPARQL query construction
pub mod querying;

/// Textual rewriting of response bodies
pub mod rewrite;

// Re-export commonly used types
pub use config::{ErrorPolicy, ExportConfig};
pub use error::{ExportError, Result};
pub use export::graph_exporter::{ExportSummary, GraphBlock, GraphExporter};

use serde::{Deserialize, Serialize};

/// RDF serializations the endpoint can be asked for through the `Accept` header.
///
/// Config files and CLI flags accept the same names and aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ResponseFormat {
    /// `text/plain`, which most triple stores answer with N-Triples
    #[default]
    Plain,
    /// `application/n-triples`
    NTriples,
    /// `text/turtle`
    Turtle,
    /// `application/rdf+xml`
    RdfXml,
    /// `application/ld+json`
    JsonLd,
    /// `application/n-quads`
    NQuads,
}

impl ResponseFormat {
    /// Parse a format name or alias, case-insensitively
    pub fn from_string(format: &str) -> Option<ResponseFormat> {
        match format.to_lowercase().as_str() {
            "plain" | "text" | "txt" => Some(ResponseFormat::Plain),
            "ntriples" | "nt" => Some(ResponseFormat::NTriples),
            "turtle" | "ttl" => Some(ResponseFormat::Turtle),
            "rdfxml" | "rdf" | "xml" => Some(ResponseFormat::RdfXml),
            "jsonld" | "json-ld" | "json" => Some(ResponseFormat::JsonLd),
            "nquads" | "nq" => Some(ResponseFormat::NQuads),
            _ => None,
        }
    }

    /// Canonical name, as written back to config files
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseFormat::Plain => "plain",
            ResponseFormat::NTriples => "ntriples",
            ResponseFormat::Turtle => "turtle",
            ResponseFormat::RdfXml => "rdfxml",
            ResponseFormat::JsonLd => "jsonld",
            ResponseFormat::NQuads => "nquads",
        }
    }

    /// Value of the `Accept` header
    pub fn media_type(&self) -> &'static str {
        match self {
            ResponseFormat::Plain => "text/plain",
            ResponseFormat::NTriples => "application/n-triples",
            ResponseFormat::Turtle => "text/turtle",
            ResponseFormat::RdfXml => "application/rdf+xml",
            ResponseFormat::JsonLd => "application/ld+json",
            ResponseFormat::NQuads => "application/n-quads",
        }
    }
}

impl std::str::FromStr for ResponseFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self> {
        ResponseFormat::from_string(s)
            .ok_or_else(|| ExportError::Config(format!("Unsupported response format: {}", s)))
    }
}

impl TryFrom<String> for ResponseFormat {
    type Error = ExportError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ResponseFormat> for String {
    fn from(format: ResponseFormat) -> Self {
        format.as_str().to_string()
    }
}
