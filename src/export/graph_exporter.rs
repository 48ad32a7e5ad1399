//! Graph exporter.
//!
//! For each identifier, in document order: build the named graph reference,
//! send one `CONSTRUCT` query, rewrite the namespace prefix in the body and
//! hand the result on as a [`GraphBlock`]. Nothing is batched or reordered; the
//! next request is only sent once the previous block has been consumed.
//!
//! # Example
//!
//! ```ignore
//! use graph_exporter::{ExportConfig, GraphExporter};
//!
//! let config = ExportConfig {
//!     endpoint_url: "http://localhost:3030/bm/sparql".to_string(),
//!     ..ExportConfig::default()
//! };
//! let exporter = GraphExporter::new(config)?;
//! let mut stdout = std::io::stdout();
//! let summary = exporter.write_document("BM20.xml", &mut stdout).await?;
//! println!("{} blocks", summary.written);
//! ```

use futures_util::stream::{self, Stream, StreamExt};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::config::{ErrorPolicy, ExportConfig};
use crate::error::{ExportError, Result};
use crate::http::{SparqlClient, SparqlEndpoint};
use crate::parsing::read_identifiers;
use crate::querying::GraphQuery;
use crate::rewrite::PrefixRewrite;

/// Rewritten statements of one object's named graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphBlock {
    /// Identifier record the block belongs to
    pub identifier: String,
    /// Named graph that was queried
    pub graph: String,
    /// HTTP status of the response
    pub status: u16,
    /// Response body after the prefix rewrite
    pub text: String,
}

/// Counts for one completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Identifiers read from the document
    pub identifiers: usize,
    /// Blocks written to the output
    pub written: usize,
    /// Identifiers dropped under the skip policy
    pub skipped: usize,
}

/// Sequential exporter bound to one endpoint and one prefix rewrite
pub struct GraphExporter {
    config: ExportConfig,
    client: SparqlClient,
    rewrite: PrefixRewrite,
}

impl GraphExporter {
    /// Validate `config` and build the HTTP client
    pub fn new(config: ExportConfig) -> Result<Self> {
        config.validate()?;
        let client = SparqlClient::new(SparqlEndpoint::from_config(&config))?;
        let rewrite = PrefixRewrite::from_config(&config)?;
        Ok(Self { config, client, rewrite })
    }

    /// Configuration the exporter was built with
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Parse the document, then export its identifiers.
    ///
    /// Document errors surface here, before any request is sent.
    pub fn export_document(
        &self,
        document: impl AsRef<Path>,
    ) -> Result<impl Stream<Item = Result<GraphBlock>> + '_> {
        let identifiers = read_identifiers(document, &self.config.identifier_element)?;
        info!(count = identifiers.len(), "Identifiers read from document");
        Ok(self.export_all(identifiers))
    }

    /// Lazily export `identifiers` in order.
    ///
    /// The stream ends after the first `Err` item; identifiers after a failure
    /// are never requested. Skipped identifiers produce no item.
    pub fn export_all(
        &self,
        identifiers: Vec<String>,
    ) -> impl Stream<Item = Result<GraphBlock>> + '_ {
        stream::unfold((identifiers.into_iter(), false), move |(mut pending, halted)| async move {
            if halted {
                return None;
            }
            loop {
                let Some(identifier) = pending.next() else {
                    return None;
                };
                match self.export_one(&identifier).await {
                    Ok(Some(block)) => return Some((Ok(block), (pending, false))),
                    Ok(None) => continue,
                    Err(e) => return Some((Err(e), (pending, true))),
                }
            }
        })
    }

    /// Export the document and write each block followed by a newline.
    ///
    /// Blocks already written stay written when a later identifier fails.
    pub async fn write_document<W: Write>(
        &self,
        document: impl AsRef<Path>,
        out: &mut W,
    ) -> Result<ExportSummary> {
        let identifiers = read_identifiers(document, &self.config.identifier_element)?;
        info!(count = identifiers.len(), "Identifiers read from document");
        self.write_all(identifiers, out).await
    }

    /// Export `identifiers` and write each block followed by a newline
    pub async fn write_all<W: Write>(
        &self,
        identifiers: Vec<String>,
        out: &mut W,
    ) -> Result<ExportSummary> {
        let total = identifiers.len();
        let mut written = 0;

        let blocks = self.export_all(identifiers);
        futures_util::pin_mut!(blocks);
        while let Some(block) = blocks.next().await {
            let block = block?;
            writeln!(out, "{}", block.text)?;
            out.flush()?;
            written += 1;
        }

        let summary = ExportSummary {
            identifiers: total,
            written,
            skipped: total - written,
        };
        info!(
            identifiers = summary.identifiers,
            written = summary.written,
            skipped = summary.skipped,
            "Export finished"
        );
        Ok(summary)
    }

    async fn export_one(&self, identifier: &str) -> Result<Option<GraphBlock>> {
        let query = GraphQuery::for_identifier(&self.config.graph_base_uri, identifier);
        debug!(identifier, graph = %query.graph, "Querying named graph");

        let response = match self.client.construct(&query.text).await {
            Ok(response) => response,
            Err(e) if self.config.error_policy == ErrorPolicy::Skip => {
                warn!(identifier, error = %e, "Request failed, skipping identifier");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        if !response.is_success() {
            match self.config.error_policy {
                ErrorPolicy::Fail => {
                    return Err(ExportError::Status {
                        identifier: identifier.to_string(),
                        status: response.status,
                        body: response.body,
                    });
                }
                ErrorPolicy::Skip => {
                    warn!(
                        identifier,
                        status = response.status,
                        "Endpoint refused query, skipping identifier"
                    );
                    return Ok(None);
                }
                ErrorPolicy::Passthrough => {
                    warn!(
                        identifier,
                        status = response.status,
                        "Endpoint refused query, emitting body as-is"
                    );
                }
            }
        }

        Ok(Some(GraphBlock {
            identifier: query.identifier,
            graph: query.graph,
            status: response.status,
            text: self.rewrite.apply(&response.body),
        }))
    }
}
