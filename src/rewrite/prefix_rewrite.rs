//! Namespace prefix substitution on raw response text.
//!
//! The rewrite is a literal substring replacement, not an RDF-aware one: an
//! occurrence of the old prefix inside a literal value is rewritten too.

use crate::config::ExportConfig;
use crate::error::{ExportError, Result};

/// One literal `from` -> `to` namespace substitution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixRewrite {
    from: String,
    to: String,
}

impl PrefixRewrite {
    /// An empty `from` would match between every character, so it is refused.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Result<Self> {
        let from = from.into();
        if from.is_empty() {
            return Err(ExportError::Config("prefix to rewrite must not be empty".to_string()));
        }
        Ok(Self { from, to: to.into() })
    }

    /// Rewrite between the config's old and new prefixes
    pub fn from_config(config: &ExportConfig) -> Result<Self> {
        Self::new(config.old_prefix.clone(), config.new_prefix.clone())
    }

    /// Prefix being replaced
    pub fn old_prefix(&self) -> &str {
        &self.from
    }

    /// Replacement prefix
    pub fn new_prefix(&self) -> &str {
        &self.to
    }

    /// Replace every occurrence of the old prefix
    pub fn apply(&self, text: &str) -> String {
        text.replace(&self.from, &self.to)
    }
}
