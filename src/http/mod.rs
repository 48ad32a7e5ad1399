//! HTTP access to the remote SPARQL endpoint
//!
//! One form-encoded POST per query; the response body is returned untouched
//! together with its status so the caller decides what a failure means.

pub mod sparql_client;

pub use sparql_client::{SparqlClient, SparqlEndpoint, SparqlResponse};
