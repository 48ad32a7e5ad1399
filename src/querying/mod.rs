//! SPARQL query construction for per-object named graphs

pub mod graph_query;

pub use graph_query::{construct_query, graph_reference, GraphQuery};
