//! Configuration structures and utilities
//!
//! Every field defaults to the values the British Museum export was run with,
//! so an empty config file (or none at all) reproduces that export.

use crate::error::{ExportError, Result};
use crate::ResponseFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// SPARQL endpoint the museum export was run against
pub const DEFAULT_ENDPOINT_URL: &str = "http://sparql.researchspace.org";
/// Base of the per-object named graphs
pub const DEFAULT_GRAPH_BASE_URI: &str = "http://collection.britishmuseum.org/id/object/";
/// Erlangen CRM namespace used by the endpoint
pub const DEFAULT_OLD_PREFIX: &str = "http://erlangen-crm.org/current/";
/// Canonical CIDOC CRM namespace
pub const DEFAULT_NEW_PREFIX: &str = "http://www.cidoc-crm.org/cidoc-crm/";
/// Element holding British Museum registration numbers
pub const DEFAULT_IDENTIFIER_ELEMENT: &str = "bm_prn";

/// What happens to the run when a single identifier's request fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ErrorPolicy {
    /// Stop at the first transport error or non-success status
    #[default]
    Fail,
    /// Log the failed identifier and continue with the next one
    Skip,
    /// Treat a non-success body as the response text; transport errors still stop the run
    Passthrough,
}

impl FromStr for ErrorPolicy {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "fail" => Ok(ErrorPolicy::Fail),
            "skip" => Ok(ErrorPolicy::Skip),
            "passthrough" => Ok(ErrorPolicy::Passthrough),
            other => Err(ExportError::Config(format!("Unknown error policy: {}", other))),
        }
    }
}

impl TryFrom<String> for ErrorPolicy {
    type Error = ExportError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ErrorPolicy> for String {
    fn from(policy: ErrorPolicy) -> Self {
        match policy {
            ErrorPolicy::Fail => "fail",
            ErrorPolicy::Skip => "skip",
            ErrorPolicy::Passthrough => "passthrough",
        }
        .to_string()
    }
}

/// Everything an export run needs besides the document path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// SPARQL endpoint receiving the form-encoded `query`
    pub endpoint_url: String,
    /// Named graphs are `<graph_base_uri><id>/graph`
    pub graph_base_uri: String,
    /// Namespace replaced in every response body
    pub old_prefix: String,
    /// Namespace written in its place
    pub new_prefix: String,
    /// Local name of the elements holding identifiers
    pub identifier_element: String,
    /// Selects the `Accept` header
    pub format: ResponseFormat,
    /// Handling of failed requests
    pub error_policy: ErrorPolicy,
    /// No timeout when unset
    pub timeout_secs: Option<u64>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
            graph_base_uri: DEFAULT_GRAPH_BASE_URI.to_string(),
            old_prefix: DEFAULT_OLD_PREFIX.to_string(),
            new_prefix: DEFAULT_NEW_PREFIX.to_string(),
            identifier_element: DEFAULT_IDENTIFIER_ELEMENT.to_string(),
            format: ResponseFormat::default(),
            error_policy: ErrorPolicy::default(),
            timeout_secs: None,
        }
    }
}

impl ExportConfig {
    /// Load a JSON config file. Missing fields take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse and validate a JSON config
    pub fn from_json(content: &str) -> Result<Self> {
        let config: ExportConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no export can run with
    pub fn validate(&self) -> Result<()> {
        if self.endpoint_url.trim().is_empty() {
            return Err(ExportError::Config("endpoint_url must not be empty".to_string()));
        }
        if self.identifier_element.trim().is_empty() {
            return Err(ExportError::Config(
                "identifier_element must not be empty".to_string(),
            ));
        }
        if self.old_prefix.is_empty() {
            return Err(ExportError::Config("old_prefix must not be empty".to_string()));
        }
        if self.timeout_secs == Some(0) {
            return Err(ExportError::Config(
                "timeout_secs must be at least 1; omit it for no timeout".to_string(),
            ));
        }
        Ok(())
    }
}
