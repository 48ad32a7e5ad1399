//! HTTP client for the SPARQL protocol query operation (form-encoded POST)

use reqwest::header::ACCEPT;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::config::ExportConfig;
use crate::error::Result;
use crate::ResponseFormat;

/// Configuration for a SPARQL endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparqlEndpoint {
    /// URL the queries are POSTed to
    pub url: String,
    /// Format requested through `Accept`
    pub format: ResponseFormat,
    /// Request timeout; none when unset
    pub timeout_secs: Option<u64>,
}

impl SparqlEndpoint {
    /// Endpoint at `url` with the default format and no timeout
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            format: ResponseFormat::default(),
            timeout_secs: None,
        }
    }

    /// Endpoint settings taken from an export config
    pub fn from_config(config: &ExportConfig) -> Self {
        Self {
            url: config.endpoint_url.clone(),
            format: config.format,
            timeout_secs: config.timeout_secs,
        }
    }
}

/// Status and full body of one query response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparqlResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

impl SparqlResponse {
    /// `true` for any 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP client bound to one SPARQL endpoint
#[derive(Debug, Clone)]
pub struct SparqlClient {
    endpoint: SparqlEndpoint,
    client: Client,
}

impl SparqlClient {
    /// Build the underlying reqwest client once for all requests
    pub fn new(endpoint: SparqlEndpoint) -> Result<SparqlClient> {
        let mut builder = Client::builder();
        if let Some(secs) = endpoint.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(SparqlClient { endpoint, client })
    }

    /// Endpoint this client talks to
    pub fn endpoint(&self) -> &SparqlEndpoint {
        &self.endpoint
    }

    /// Send `query` as the `query` form field and read the whole body.
    ///
    /// A non-success status is not an error here; only transport failures are.
    pub async fn construct(&self, query: &str) -> Result<SparqlResponse> {
        let response = self
            .client
            .post(&self.endpoint.url)
            .header(ACCEPT, self.endpoint.format.media_type())
            .form(&[("query", query)])
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(status, bytes = body.len(), "SPARQL response received");

        Ok(SparqlResponse { status, body })
    }
}
